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
    error::{GeometryError, check_tolerance},
    geometry::{line::Line3, point::Point3, point_set::PointSet, segment::Segment3},
    intersect::{
        line_line::line_line_intersection,
        segment_segment::{SegmentIntersection3, segment_segment_intersection},
    },
    numeric::scalar::Scalar,
};

/// All pairwise intersection points among a set of infinite lines,
/// deduplicated within eps against each other and against `known`.
///
/// Seeding `known` with a previous run's output makes a re-run over the
/// same selection emit nothing, so marker creation stays idempotent on
/// the host side. Exhaustive over the i < j pairs.
pub fn find_line_intersections<T: Scalar>(
    lines: &[Line3<T>],
    eps: T,
    known: &[Point3<T>],
) -> Result<Vec<Point3<T>>, GeometryError> {
    check_tolerance(eps)?;
    if lines.len() < 2 {
        return Err(GeometryError::InsufficientInput {
            needed: 2,
            got: lines.len(),
        });
    }

    let mut seen = PointSet::seeded(known, eps);
    let mut found = Vec::new();
    for i in 0..lines.len() {
        for j in i + 1..lines.len() {
            if let Some(p) = line_line_intersection(&lines[i], &lines[j], eps) {
                if seen.insert(p) {
                    found.push(p);
                }
            }
        }
    }
    Ok(found)
}

/// Segment-bounded variant of [`find_line_intersections`]. Collinear
/// overlaps are not crossings and contribute no points.
pub fn find_segment_intersections<T: Scalar>(
    segments: &[Segment3<T>],
    eps: T,
    known: &[Point3<T>],
) -> Result<Vec<Point3<T>>, GeometryError> {
    check_tolerance(eps)?;
    if segments.len() < 2 {
        return Err(GeometryError::InsufficientInput {
            needed: 2,
            got: segments.len(),
        });
    }

    let mut seen = PointSet::seeded(known, eps);
    let mut found = Vec::new();
    for i in 0..segments.len() {
        for j in i + 1..segments.len() {
            if let SegmentIntersection3::Point(p) =
                segment_segment_intersection(&segments[i], &segments[j], eps)
            {
                if seen.insert(p) {
                    found.push(p);
                }
            }
        }
    }
    Ok(found)
}
