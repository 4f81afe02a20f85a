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

use std::ops::{Add, Sub};

use crate::{
    geometry::vector::{Vector3, VectorOps},
    numeric::scalar::Scalar,
};

/// Immutable position in 3-space. Equality is exact; proximity is always a
/// caller-supplied eps decision, never `==`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3<T: Scalar> {
    pub x: T,
    pub y: T,
    pub z: T,
}

pub trait PointOps<T: Scalar>: Sized {
    type Vector;

    fn as_vector(&self) -> Self::Vector;
    fn vector_to(&self, other: &Self) -> Self::Vector;
    fn add_vector(&self, v: &Self::Vector) -> Self;
    fn distance_to(&self, other: &Self) -> T;
    fn midpoint(&self, other: &Self) -> Self;
}

impl<T: Scalar> Point3<T> {
    pub fn new<X, Y, Z>(x: X, y: Y, z: Z) -> Self
    where
        X: Into<T>,
        Y: Into<T>,
        Z: Into<T>,
    {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }

    pub fn origin() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
        }
    }

    /// Coordinate by axis index (0 = x, 1 = y, 2 = z).
    pub fn coord(&self, axis: usize) -> T {
        match axis {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }
}

impl<T: Scalar> PointOps<T> for Point3<T> {
    type Vector = Vector3<T>;

    fn as_vector(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    fn vector_to(&self, other: &Self) -> Vector3<T> {
        Vector3::new(other.x - self.x, other.y - self.y, other.z - self.z)
    }

    fn add_vector(&self, v: &Vector3<T>) -> Self {
        Point3 {
            x: self.x + v.x,
            y: self.y + v.y,
            z: self.z + v.z,
        }
    }

    fn distance_to(&self, other: &Self) -> T {
        self.vector_to(other).norm()
    }

    fn midpoint(&self, other: &Self) -> Self {
        Point3 {
            x: (self.x + other.x) / T::two(),
            y: (self.y + other.y) / T::two(),
            z: (self.z + other.z) / T::two(),
        }
    }
}

impl<'a, 'b, T: Scalar> Sub<&'b Point3<T>> for &'a Point3<T> {
    type Output = Vector3<T>;
    fn sub(self, rhs: &'b Point3<T>) -> Vector3<T> {
        rhs.vector_to(self)
    }
}

impl<'a, 'b, T: Scalar> Add<&'b Vector3<T>> for &'a Point3<T> {
    type Output = Point3<T>;
    fn add(self, rhs: &'b Vector3<T>) -> Point3<T> {
        self.add_vector(rhs)
    }
}
