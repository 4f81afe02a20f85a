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

use cadgeo::GeometryError;
use cadgeo::geometry::Point3;
use cadgeo::loft::{Path3, Triangle3, loft_paths};

fn rail(x: f64, len: usize) -> Path3<f64> {
    Path3::new(
        (0..len)
            .map(|i| Point3::new(x, i as f64, 0.0))
            .collect(),
    )
    .unwrap()
}

#[test]
fn test_triangle_count_law() {
    // N = 3 paths of L = 4 points: 2 * (L-1) * (N-1) = 12 triangles,
    // one seam per quad.
    let paths = vec![rail(0.0, 4), rail(1.0, 4), rail(2.0, 4)];
    let mesh = loft_paths(&paths, 1e-9).unwrap();
    assert_eq!(mesh.triangles.len(), 12);
    assert_eq!(mesh.seams.len(), 6);
}

#[test]
fn test_seams_pair_adjacent_triangles() {
    let paths = vec![rail(0.0, 3), rail(1.0, 3)];
    let mesh = loft_paths(&paths, 1e-9).unwrap();
    for seam in &mesh.seams {
        let (lo, up) = seam.faces;
        assert_eq!(up, lo + 1);
        assert!(up < mesh.triangles.len());
        // The seam edge is the shared p00-p11 diagonal of both faces.
        assert_eq!(mesh.triangles[lo].a, seam.edge.a);
        assert_eq!(mesh.triangles[lo].c, seam.edge.b);
        assert_eq!(mesh.triangles[up].a, seam.edge.a);
        assert_eq!(mesh.triangles[up].b, seam.edge.b);
    }
}

#[test]
fn test_reversed_right_path_is_realigned() {
    let left = rail(0.0, 4);
    let right = rail(1.0, 4).reversed();
    let mesh = loft_paths(&[left, right], 1e-9).unwrap();
    assert_eq!(mesh.triangles.len(), 6);
    // First quad's lower triangle must stitch y=0 to y=0, not y=0 to y=3.
    assert_eq!(
        mesh.triangles[0],
        Triangle3::try_new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            1e-9,
        )
        .unwrap()
    );
}

#[test]
fn test_coincident_paths_produce_empty_mesh() {
    // Every quad collapses; skipping is per-triangle, not fatal.
    let mesh = loft_paths(&[rail(0.0, 4), rail(0.0, 4)], 1e-9).unwrap();
    assert!(mesh.triangles.is_empty());
    assert!(mesh.seams.is_empty());
}

#[test]
fn test_half_degenerate_quad_keeps_survivor_without_seam() {
    let left = Path3::new(vec![
        Point3::<f64>::new(0.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ])
    .unwrap();
    // Right path starts at the same point as left, so the lower triangle
    // of the only quad collapses while the upper one survives.
    let right = Path3::new(vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
    ])
    .unwrap();
    let mesh = loft_paths(&[left, right], 1e-9).unwrap();
    assert_eq!(mesh.triangles.len(), 1);
    assert!(mesh.seams.is_empty());
}

#[test]
fn test_triangle_normal() {
    let tri = Triangle3::try_new(
        Point3::<f64>::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        1e-9,
    )
    .unwrap();
    let n = tri.normal(1e-9).unwrap();
    assert_eq!(n, cadgeo::geometry::Vector3::new(0.0, 0.0, 1.0));
}

#[test]
fn test_degenerate_triangle_is_rejected() {
    assert!(
        Triangle3::try_new(
            Point3::<f64>::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            1e-9,
        )
        .is_none()
    );
}

#[test]
fn test_loft_requires_two_paths() {
    let err = loft_paths(&[rail(0.0, 3)], 1e-9).unwrap_err();
    assert_eq!(err, GeometryError::InsufficientInput { needed: 2, got: 1 });
}

#[test]
fn test_loft_rejects_mismatched_lengths() {
    let err = loft_paths(&[rail(0.0, 3), rail(1.0, 5)], 1e-9).unwrap_err();
    assert_eq!(
        err,
        GeometryError::MismatchedLength {
            expected: 3,
            got: 5
        }
    );
}

#[test]
fn test_loft_rejects_negative_tolerance() {
    let err = loft_paths(&[rail(0.0, 3), rail(1.0, 3)], -1.0).unwrap_err();
    assert!(matches!(err, GeometryError::InvalidTolerance(_)));
}
