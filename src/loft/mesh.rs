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
    geometry::{
        point::{Point3, PointOps},
        segment::Segment3,
        vector::{Vector3, VectorOps},
    },
    loft::path::Path3,
    numeric::scalar::Scalar,
};

/// Single mesh face. Construction goes through [`Triangle3::try_new`] so a
/// zero-area face never enters a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle3<T: Scalar> {
    pub a: Point3<T>,
    pub b: Point3<T>,
    pub c: Point3<T>,
}

impl<T: Scalar> Triangle3<T> {
    /// `None` when the corners are collinear or coincident within eps.
    pub fn try_new(a: Point3<T>, b: Point3<T>, c: Point3<T>, eps: T) -> Option<Self> {
        let n = a.vector_to(&b).cross(&a.vector_to(&c));
        if n.norm() <= eps {
            return None;
        }
        Some(Self { a, b, c })
    }

    pub fn normal(&self, eps: T) -> Option<Vector3<T>> {
        self.a
            .vector_to(&self.b)
            .cross(&self.a.vector_to(&self.c))
            .normalized(eps)
    }
}

/// Diagonal of a quad split, flagged so the host can suppress or smooth it
/// and show the quad as one surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeamEdge<T: Scalar> {
    pub edge: Segment3<T>,
    /// Indices into the mesh triangle list of the two faces sharing the seam.
    pub faces: (usize, usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoftMesh<T: Scalar> {
    pub triangles: Vec<Triangle3<T>>,
    pub seams: Vec<SeamEdge<T>>,
}

/// Lofts an ordered path sequence into a triangulated surface.
///
/// Each adjacent pair of paths is stitched quad by quad, every quad split
/// along the p00-p11 diagonal into (p00, p10, p11) and (p00, p11, p01).
/// A right path whose far end is nearer to the left start than its own
/// start is walked in reverse; the comparison looks only at the first and
/// last points, which is the heuristic the operation is specified with and
/// is known to be fallible on spiral or self-crossing paths.
///
/// Degenerate quad triangles are skipped rather than failing the loft; a
/// seam is recorded only when both triangles of its quad survive.
pub fn loft_paths<T: Scalar>(ordered: &[Path3<T>], eps: T) -> Result<LoftMesh<T>, GeometryError> {
    check_tolerance(eps)?;
    if ordered.len() < 2 {
        return Err(GeometryError::InsufficientInput {
            needed: 2,
            got: ordered.len(),
        });
    }
    let expected = ordered[0].len();
    for p in &ordered[1..] {
        if p.len() != expected {
            return Err(GeometryError::MismatchedLength {
                expected,
                got: p.len(),
            });
        }
    }

    let mut mesh = LoftMesh {
        triangles: Vec::with_capacity(2 * (expected - 1) * (ordered.len() - 1)),
        seams: Vec::with_capacity((expected - 1) * (ordered.len() - 1)),
    };

    for pair in ordered.windows(2) {
        let left = &pair[0];
        let right = &pair[1];

        let reversed =
            left[0].distance_to(right.last()) < left[0].distance_to(right.first());
        let right_at = |i: usize| {
            if reversed {
                right[right.len() - 1 - i]
            } else {
                right[i]
            }
        };

        for n in 0..expected - 1 {
            let p00 = left[n];
            let p01 = left[n + 1];
            let p10 = right_at(n);
            let p11 = right_at(n + 1);

            let lower = Triangle3::try_new(p00, p10, p11, eps);
            let upper = Triangle3::try_new(p00, p11, p01, eps);
            match (lower, upper) {
                (Some(lo), Some(up)) => {
                    let base = mesh.triangles.len();
                    mesh.triangles.push(lo);
                    mesh.triangles.push(up);
                    mesh.seams.push(SeamEdge {
                        edge: Segment3::new(&p00, &p11),
                        faces: (base, base + 1),
                    });
                }
                // A lone survivor has no paired face, so no seam either.
                (Some(t), None) | (None, Some(t)) => mesh.triangles.push(t),
                (None, None) => {}
            }
        }
    }

    Ok(mesh)
}
