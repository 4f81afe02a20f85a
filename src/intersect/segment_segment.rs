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
        line::Line3,
        point::{Point3, PointOps},
        segment::{Segment3, SegmentOps},
        vector::VectorOps,
    },
    intersect::line_line::line_line_intersection,
    kernel::predicates::{are_collinear, are_parallel, is_point_on_segment},
    numeric::scalar::Scalar,
};

#[derive(Debug, Clone, PartialEq)]
pub enum SegmentIntersection3<T: Scalar> {
    None,
    /// A single crossing (or near-crossing) point on both segments.
    Point(Point3<T>),
    /// Collinear segments sharing a stretch of the same carrier line; this
    /// is reported apart from a crossing, possibly with a zero-length
    /// overlap when the segments only touch end to end.
    Overlapping(Segment3<T>),
}

/// Tolerance-bounded intersection of two finite segments.
///
/// The carrier lines are intersected first; a resulting point counts only
/// if it lies on both segments per the triangle-inequality test. Parallel
/// but non-collinear segments never intersect, and segments degenerate
/// within eps (coincident endpoints) never intersect anything.
pub fn segment_segment_intersection<T: Scalar>(
    s1: &Segment3<T>,
    s2: &Segment3<T>,
    eps: T,
) -> SegmentIntersection3<T> {
    let (Some(l1), Some(l2)) = (Line3::from_segment(s1, eps), Line3::from_segment(s2, eps))
    else {
        return SegmentIntersection3::None;
    };

    if are_parallel(&l1.dir, &l2.dir, eps) {
        if are_collinear(&s1.a, &s1.b, &s2.a, eps) && are_collinear(&s1.a, &s1.b, &s2.b, eps) {
            return collinear_overlap(s1, s2, eps);
        }
        return SegmentIntersection3::None;
    }

    match line_line_intersection(&l1, &l2, eps) {
        Some(p) if is_point_on_segment(&p, s1, eps) && is_point_on_segment(&p, s2, eps) => {
            SegmentIntersection3::Point(p)
        }
        _ => SegmentIntersection3::None,
    }
}

/// Overlap of two collinear segments, computed parametrically along the
/// first segment's carrier.
fn collinear_overlap<T: Scalar>(
    s1: &Segment3<T>,
    s2: &Segment3<T>,
    eps: T,
) -> SegmentIntersection3<T> {
    let Some(dir) = s1.direction().normalized(eps) else {
        return SegmentIntersection3::None;
    };

    let param = |p: &Point3<T>| s1.a.vector_to(p).dot(&dir);
    let (t2a, t2b) = (param(&s2.a), param(&s2.b));
    let (lo2, hi2) = if t2a <= t2b { (t2a, t2b) } else { (t2b, t2a) };

    let lo = T::zero().max(lo2);
    let hi = s1.length().min(hi2);
    if lo > hi + eps {
        return SegmentIntersection3::None;
    }

    let pa = s1.a.add_vector(&dir.scale(lo));
    let pb = s1.a.add_vector(&dir.scale(hi));
    SegmentIntersection3::Overlapping(Segment3::new(&pa, &pb))
}
