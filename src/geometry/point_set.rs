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
    geometry::point::{Point3, PointOps},
    numeric::scalar::Scalar,
};

/// Accumulating set of points under an eps coincidence metric.
///
/// Insertion order is preserved; membership is a linear scan, which is fine
/// for the selection-sized inputs this crate deals with.
#[derive(Debug, Clone)]
pub struct PointSet<T: Scalar> {
    points: Vec<Point3<T>>,
    eps: T,
}

impl<T: Scalar> PointSet<T> {
    pub fn new(eps: T) -> Self {
        Self {
            points: Vec::new(),
            eps,
        }
    }

    /// Set pre-seeded with points the caller already knows about, e.g.
    /// markers left behind by an earlier run.
    pub fn seeded(known: &[Point3<T>], eps: T) -> Self {
        Self {
            points: known.to_vec(),
            eps,
        }
    }

    pub fn contains(&self, p: &Point3<T>) -> bool {
        self.points.iter().any(|q| q.distance_to(p) <= self.eps)
    }

    /// Adds `p` unless an existing member lies within eps of it. Returns
    /// whether the point was actually new.
    pub fn insert(&mut self, p: Point3<T>) -> bool {
        if self.contains(&p) {
            return false;
        }
        self.points.push(p);
        true
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point3<T>] {
        &self.points
    }
}
