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
    numeric::scalar::Scalar,
};

pub fn are_equal<T: Scalar>(p1: &Point3<T>, p2: &Point3<T>, eps: T) -> bool {
    (p1.x - p2.x).abs() <= eps && (p1.y - p2.y).abs() <= eps && (p1.z - p2.z).abs() <= eps
}

/// Parallelism on unit vectors so the test is insensitive to input scale.
/// Degenerate (near-zero) directions are treated as parallel to everything;
/// every caller wants the "no unique answer" branch for those.
pub fn are_parallel<T: Scalar>(u: &Vector3<T>, v: &Vector3<T>, eps: T) -> bool {
    match (u.normalized(eps), v.normalized(eps)) {
        (Some(un), Some(vn)) => un.cross(&vn).norm() <= eps,
        _ => true,
    }
}

pub fn are_collinear<T: Scalar>(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>, eps: T) -> bool {
    let u = a.vector_to(b);
    let v = a.vector_to(c);
    u.cross(&v).norm() <= eps
}

/// Degenerate-triangle-inequality test: `p` is on the segment iff going
/// a -> p -> b is no longer than going a -> b directly, within eps.
pub fn is_point_on_segment<T: Scalar>(p: &Point3<T>, seg: &Segment3<T>, eps: T) -> bool {
    let detour = p.distance_to(seg.a()) + p.distance_to(seg.b()) - seg.length();
    detour.abs() <= eps
}
