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
    geometry::{line::Line3, point::{Point3, PointOps}},
    numeric::scalar::Scalar,
};

/// Intersection of two infinite lines.
///
/// Coplanar non-parallel lines meet exactly (the closest-point gap is zero);
/// skew lines within eps of each other yield the midpoint of their closest
/// points as a near intersection. Parallel directions never produce a
/// result.
pub fn line_line_intersection<T: Scalar>(
    l1: &Line3<T>,
    l2: &Line3<T>,
    eps: T,
) -> Option<Point3<T>> {
    let (p1, p2) = l1.closest_points(l2, eps)?;
    if p1.distance_to(&p2) <= eps {
        Some(p1.midpoint(&p2))
    } else {
        None
    }
}
