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

use crate::{
    geometry::{
        point::{Point3, PointOps},
        segment::{Segment3, SegmentOps},
        vector::{Vector3, VectorOps},
    },
    kernel::predicates::are_parallel,
    numeric::scalar::Scalar,
};

/// Infinite line through `anchor` along `dir`. The direction is assumed
/// non-zero; [`Line3::from_segment`] is the checked constructor for host
/// edges that may be degenerate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line3<T: Scalar> {
    pub anchor: Point3<T>,
    pub dir: Vector3<T>,
}

impl<T: Scalar> Line3<T> {
    pub fn new(anchor: &Point3<T>, dir: &Vector3<T>) -> Self {
        Self {
            anchor: *anchor,
            dir: *dir,
        }
    }

    /// Carrier line of a finite segment; `None` when the endpoints coincide
    /// within eps.
    pub fn from_segment(seg: &Segment3<T>, eps: T) -> Option<Self> {
        if seg.length() <= eps {
            return None;
        }
        Some(Self::new(seg.a(), &seg.direction()))
    }

    pub fn point_at(&self, t: T) -> Point3<T> {
        self.anchor.add_vector(&self.dir.scale(t))
    }

    /// Closest points of approach between two infinite lines, `None` when
    /// the directions are parallel within eps (no unique pair exists).
    pub fn closest_points(&self, other: &Line3<T>, eps: T) -> Option<(Point3<T>, Point3<T>)> {
        if are_parallel(&self.dir, &other.dir, eps) {
            return None;
        }

        // Minimize |self(s) - other(t)| over the two line parameters.
        let r = other.anchor.vector_to(&self.anchor);
        let a = self.dir.dot(&self.dir);
        let b = self.dir.dot(&other.dir);
        let c = other.dir.dot(&other.dir);
        let f = self.dir.dot(&r);
        let g = other.dir.dot(&r);

        let denom = a * c - b * b;
        if denom.abs() <= eps * eps {
            return None;
        }
        let s = (b * g - c * f) / denom;
        let t = (a * g - b * f) / denom;

        Some((self.point_at(s), other.point_at(t)))
    }
}
