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
        vector::{Vector3, VectorOps},
    },
    numeric::scalar::Scalar,
};

/// Plane in Hesse-like form: unit `normal` and scalar `offset`, with
/// `signed_distance(p) = normal . p - offset`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane<T: Scalar> {
    pub normal: Vector3<T>,
    pub offset: T,
}

impl<T: Scalar> Plane<T> {
    pub fn new(normal: Vector3<T>, offset: T) -> Self {
        Plane { normal, offset }
    }

    /// Plane through three points, `None` when the triple is degenerate:
    /// either edge vector or the cross product has norm <= eps.
    pub fn from_points(p1: &Point3<T>, p2: &Point3<T>, p3: &Point3<T>, eps: T) -> Option<Self> {
        let v1 = p1.vector_to(p2);
        let v2 = p1.vector_to(p3);
        if v1.norm() <= eps || v2.norm() <= eps {
            return None;
        }
        let normal = v1.cross(&v2).normalized(eps)?;
        let offset = normal.dot(&p1.as_vector());
        Some(Plane::new(normal, offset))
    }

    pub fn signed_distance(&self, p: &Point3<T>) -> T {
        self.normal.dot(&p.as_vector()) - self.offset
    }

    pub fn distance(&self, p: &Point3<T>) -> T {
        self.signed_distance(p).abs()
    }

    /// Whether `p` lies within eps absolute perpendicular distance.
    pub fn contains(&self, p: &Point3<T>, eps: T) -> bool {
        self.distance(p) <= eps
    }
}
