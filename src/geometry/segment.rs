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
        vector::Vector3,
    },
    numeric::scalar::Scalar,
};

pub trait SegmentOps<T: Scalar>: Sized {
    fn a(&self) -> &Point3<T>;
    fn b(&self) -> &Point3<T>;

    fn length(&self) -> T {
        self.a().distance_to(self.b())
    }

    fn midpoint(&self) -> Point3<T> {
        self.a().midpoint(self.b())
    }

    fn direction(&self) -> Vector3<T> {
        self.a().vector_to(self.b())
    }

    fn inverse(&self) -> Self;
}

/// Finite edge between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment3<T: Scalar> {
    pub a: Point3<T>,
    pub b: Point3<T>,
}

impl<T: Scalar> Segment3<T> {
    pub fn new(a: &Point3<T>, b: &Point3<T>) -> Self {
        Self { a: *a, b: *b }
    }
}

impl<T: Scalar> SegmentOps<T> for Segment3<T> {
    fn a(&self) -> &Point3<T> {
        &self.a
    }

    fn b(&self) -> &Point3<T> {
        &self.b
    }

    fn inverse(&self) -> Self {
        Self::new(&self.b, &self.a)
    }
}
