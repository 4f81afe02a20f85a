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

use std::ops::{Add, Neg, Sub};

use crate::numeric::scalar::Scalar;

pub trait VectorOps<T>: Sized {
    fn dot(&self, other: &Self) -> T;
    fn cross(&self, other: &Self) -> Self;
    fn norm(&self) -> T;
    fn norm_squared(&self) -> T;
    fn scale(&self, s: T) -> Self;

    /// Unit vector, or `None` when the length is too small to divide by.
    fn normalized(&self, eps: T) -> Option<Self>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3<T: Scalar> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Vector3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Vector3 {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
        }
    }
}

impl<T: Scalar> VectorOps<T> for Vector3<T> {
    fn dot(&self, other: &Vector3<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    fn cross(&self, other: &Vector3<T>) -> Vector3<T> {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    fn norm_squared(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    fn scale(&self, s: T) -> Vector3<T> {
        Vector3 {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }

    fn normalized(&self, eps: T) -> Option<Vector3<T>> {
        let n = self.norm();
        if n <= eps {
            return None;
        }
        Some(Vector3 {
            x: self.x / n,
            y: self.y / n,
            z: self.z / n,
        })
    }
}

impl<'a, 'b, T: Scalar> Add<&'b Vector3<T>> for &'a Vector3<T> {
    type Output = Vector3<T>;
    fn add(self, rhs: &'b Vector3<T>) -> Vector3<T> {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<'a, 'b, T: Scalar> Sub<&'b Vector3<T>> for &'a Vector3<T> {
    type Output = Vector3<T>;
    fn sub(self, rhs: &'b Vector3<T>) -> Vector3<T> {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<'a, T: Scalar> Neg for &'a Vector3<T> {
    type Output = Vector3<T>;
    fn neg(self) -> Vector3<T> {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}
