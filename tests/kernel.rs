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

use cadgeo::geometry::{Point3, PointSet, Segment3, Vector3};
use cadgeo::kernel::{are_collinear, are_equal, are_parallel, is_point_on_segment};

#[test]
fn test_are_equal_within_eps() {
    let p = Point3::<f64>::new(1.0, 2.0, 3.0);
    let q = Point3::new(1.0 + 1e-12, 2.0, 3.0 - 1e-12);
    assert!(are_equal(&p, &q, 1e-9));
    assert!(!are_equal(&p, &Point3::new(1.1, 2.0, 3.0), 1e-9));
}

#[test]
fn test_are_parallel_scale_free() {
    let u = Vector3::<f64>::new(1.0, 0.0, 0.0);
    // Very different magnitudes, same direction.
    let v = Vector3::new(1e6, 0.0, 0.0);
    assert!(are_parallel(&u, &v, 1e-9));
    assert!(are_parallel(&u, &Vector3::new(-3.0, 0.0, 0.0), 1e-9));
    assert!(!are_parallel(&u, &Vector3::new(0.0, 1.0, 0.0), 1e-9));
}

#[test]
fn test_are_collinear() {
    let a = Point3::<f64>::new(0.0, 0.0, 0.0);
    let b = Point3::new(1.0, 1.0, 0.0);
    assert!(are_collinear(&a, &b, &Point3::new(3.0, 3.0, 0.0), 1e-9));
    assert!(!are_collinear(&a, &b, &Point3::new(3.0, 2.0, 0.0), 1e-9));
}

#[test]
fn test_is_point_on_segment() {
    let s = Segment3::<f64>::new(&Point3::new(0.0, 0.0, 0.0), &Point3::new(2.0, 0.0, 0.0));
    assert!(is_point_on_segment(&Point3::new(0.5, 0.0, 0.0), &s, 1e-9));
    // Endpoints count.
    assert!(is_point_on_segment(&Point3::new(2.0, 0.0, 0.0), &s, 1e-9));
    // On the carrier line but beyond the extent.
    assert!(!is_point_on_segment(&Point3::new(3.0, 0.0, 0.0), &s, 1e-9));
    assert!(!is_point_on_segment(&Point3::new(1.0, 0.5, 0.0), &s, 1e-9));
}

#[test]
fn test_point_set_dedup() {
    let mut set = PointSet::<f64>::new(1e-6);
    assert!(set.insert(Point3::new(0.0, 0.0, 0.0)));
    assert!(!set.insert(Point3::new(1e-8, 0.0, 0.0)));
    assert!(set.insert(Point3::new(1.0, 0.0, 0.0)));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_point_set_seeded() {
    let known = [Point3::<f64>::new(1.0, 1.0, 0.0)];
    let mut set = PointSet::seeded(&known, 1e-6);
    assert!(set.contains(&Point3::new(1.0, 1.0, 0.0)));
    assert!(!set.insert(Point3::new(1.0, 1.0, 1e-9)));
}
