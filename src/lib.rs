// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Host-independent geometry utilities for CAD plug-ins: lofting sampled
//! curves into triangle meshes, robust (RANSAC-style) dominant-plane fitting,
//! and tolerance-aware intersection finding with deduplication.
//!
//! Everything operates on plain in-memory values. The hosting CAD system is
//! expected to convert its own curve/edge objects into [`Point3`]/[`Segment3`]/
//! [`Path3`] values, call into this crate, and apply the results inside its
//! own transaction machinery.

pub mod error;
pub mod fit;
pub mod geometry;
pub mod intersect;
pub mod kernel;
pub mod loft;
pub mod numeric;

pub use error::GeometryError;
pub use fit::{
    DEFAULT_MAX_SAMPLES, PlaneFit, PointFit, fit_dominant_plane, fit_dominant_plane_default,
    fit_plane_points,
};
pub use geometry::{Line3, Plane, Point3, PointSet, Segment3, Vector3};
pub use intersect::{
    SegmentIntersection3, find_line_intersections, find_segment_intersections,
    line_line_intersection, segment_segment_intersection,
};
pub use loft::{LoftMesh, Path3, SeamEdge, Triangle3, loft_paths, order_paths};
pub use numeric::scalar::Scalar;
