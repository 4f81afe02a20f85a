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
    error::GeometryError,
    geometry::point::PointOps,
    loft::path::Path3,
    numeric::scalar::Scalar,
};

/// Average pointwise distance over the shared index range.
pub fn mean_path_distance<T: Scalar>(a: &Path3<T>, b: &Path3<T>) -> T {
    let n = a.len().min(b.len());
    let mut sum = T::zero();
    let mut count = T::zero();
    for i in 0..n {
        sum += a[i].distance_to(&b[i]);
        count += T::one();
    }
    sum / count
}

fn mean_path_distance_reversed<T: Scalar>(a: &Path3<T>, b: &Path3<T>) -> T {
    let n = a.len().min(b.len());
    let mut sum = T::zero();
    let mut count = T::zero();
    for i in 0..n {
        sum += a[i].distance_to(&b[b.len() - 1 - i]);
        count += T::one();
    }
    sum / count
}

/// Symmetric path metric: the cheaper of matching `b` forward or reversed,
/// so curves sampled in opposite directions still read as neighbors.
pub fn path_distance<T: Scalar>(a: &Path3<T>, b: &Path3<T>) -> T {
    mean_path_distance(a, b).min(mean_path_distance_reversed(a, b))
}

/// Orders a set of equal-length paths into a traversal sequence for lofting.
///
/// The chain starts at the path whose centroid is minimal along the axis of
/// largest centroid spread (ties prefer x over y over z) and extends greedily
/// to the nearest unvisited path under [`path_distance`]. Returns clones in
/// the chosen order; the input is untouched. O(N^2 * L).
pub fn order_paths<T: Scalar>(paths: &[Path3<T>]) -> Result<Vec<Path3<T>>, GeometryError> {
    if paths.len() < 2 {
        return Err(GeometryError::InsufficientInput {
            needed: 2,
            got: paths.len(),
        });
    }
    let expected = paths[0].len();
    for p in &paths[1..] {
        if p.len() != expected {
            return Err(GeometryError::MismatchedLength {
                expected,
                got: p.len(),
            });
        }
    }

    let centroids: Vec<_> = paths.iter().map(|p| p.centroid()).collect();

    // Axis with the largest centroid spread; strict comparison keeps the
    // x > y > z tie preference.
    let mut axis = 0;
    let mut best_spread = T::neg_infinity();
    for candidate in 0..3 {
        let mut lo = T::infinity();
        let mut hi = T::neg_infinity();
        for c in &centroids {
            lo = lo.min(c.coord(candidate));
            hi = hi.max(c.coord(candidate));
        }
        if hi - lo > best_spread {
            best_spread = hi - lo;
            axis = candidate;
        }
    }

    let mut start = 0;
    for (i, c) in centroids.iter().enumerate() {
        if c.coord(axis) < centroids[start].coord(axis) {
            start = i;
        }
    }

    let mut visited = vec![false; paths.len()];
    let mut order = Vec::with_capacity(paths.len());
    visited[start] = true;
    order.push(start);

    while order.len() < paths.len() {
        let last = order[order.len() - 1];
        let mut next = usize::MAX;
        let mut best = T::infinity();
        for (i, p) in paths.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let d = path_distance(&paths[last], p);
            if next == usize::MAX || d < best {
                best = d;
                next = i;
            }
        }
        visited[next] = true;
        order.push(next);
    }

    Ok(order.into_iter().map(|i| paths[i].clone()).collect())
}
