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

use std::ops::Index;

use crate::{error::GeometryError, geometry::point::Point3, numeric::scalar::Scalar};

/// Sampled curve: an ordered point sequence of length >= 2.
///
/// Paths are plain values; operations that conceptually reverse or reorder
/// them hand back new paths and leave the originals alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Path3<T: Scalar> {
    points: Vec<Point3<T>>,
}

impl<T: Scalar> Path3<T> {
    pub fn new(points: Vec<Point3<T>>) -> Result<Self, GeometryError> {
        if points.len() < 2 {
            return Err(GeometryError::InsufficientInput {
                needed: 2,
                got: points.len(),
            });
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point3<T>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> &Point3<T> {
        &self.points[0]
    }

    pub fn last(&self) -> &Point3<T> {
        &self.points[self.points.len() - 1]
    }

    pub fn centroid(&self) -> Point3<T> {
        let mut x = T::zero();
        let mut y = T::zero();
        let mut z = T::zero();
        let mut count = T::zero();
        for p in &self.points {
            x += p.x;
            y += p.y;
            z += p.z;
            count += T::one();
        }
        Point3::new(x / count, y / count, z / count)
    }

    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }
}

impl<T: Scalar> Index<usize> for Path3<T> {
    type Output = Point3<T>;
    fn index(&self, i: usize) -> &Point3<T> {
        &self.points[i]
    }
}
