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

use rand::Rng;

use crate::{
    error::{GeometryError, check_tolerance},
    geometry::{plane::Plane, point::Point3, point_set::PointSet, segment::Segment3},
    kernel::predicates::are_collinear,
    numeric::scalar::Scalar,
};

/// Cap on random candidate triples when the input is too large to enumerate.
pub const DEFAULT_MAX_SAMPLES: usize = 400;

/// Up to this many unique points every 3-combination is tried in order,
/// which makes the result fully deterministic.
const EXHAUSTIVE_LIMIT: usize = 12;

/// Result of a robust plane fit over edges.
///
/// `plane` is `None` only when no candidate triple produced a valid plane,
/// in which case every edge lands in `outliers`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneFit<T: Scalar> {
    pub plane: Option<Plane<T>>,
    pub inliers: Vec<Segment3<T>>,
    pub outliers: Vec<Segment3<T>>,
}

impl<T: Scalar> PlaneFit<T> {
    pub fn into_plane(self) -> Result<Plane<T>, GeometryError> {
        self.plane.ok_or(GeometryError::NoSolution)
    }
}

/// Plane fit over raw points instead of edges.
#[derive(Debug, Clone, PartialEq)]
pub struct PointFit<T: Scalar> {
    pub plane: Option<Plane<T>>,
    pub inliers: Vec<Point3<T>>,
    pub outliers: Vec<Point3<T>>,
}

impl<T: Scalar> PointFit<T> {
    pub fn into_plane(self) -> Result<Plane<T>, GeometryError> {
        self.plane.ok_or(GeometryError::NoSolution)
    }
}

/// Fits the best-supported plane through a set of edges, RANSAC style.
///
/// Candidate planes come from point triples: every ordered 3-combination of
/// the unique endpoints when those are few, otherwise up to `max_samples`
/// random triples drawn from `rng` (inject a seeded rng for reproducible
/// runs). A candidate's score is the number of edge endpoints within eps
/// perpendicular distance; the first candidate to reach a given score wins
/// ties, and a candidate scoring every endpoint short-circuits the search.
///
/// Edges with both endpoints within eps of the winning plane are inliers,
/// everything else an outlier.
pub fn fit_dominant_plane<T: Scalar, R: Rng>(
    edges: &[Segment3<T>],
    eps: T,
    max_samples: usize,
    rng: &mut R,
) -> Result<PlaneFit<T>, GeometryError> {
    check_tolerance(eps)?;

    let mut unique = PointSet::new(eps);
    for e in edges {
        unique.insert(e.a);
        unique.insert(e.b);
    }
    let points = unique.points();
    validate_spread(points, eps)?;

    let max_score = 2 * edges.len();
    let mut score = |plane: &Plane<T>| -> usize {
        edges
            .iter()
            .map(|e| usize::from(plane.contains(&e.a, eps)) + usize::from(plane.contains(&e.b, eps)))
            .sum()
    };
    let best = search_best_plane(points, eps, max_samples, rng, &mut score, max_score);

    let mut inliers = Vec::new();
    let mut outliers = Vec::new();
    match &best {
        Some(plane) => {
            for e in edges {
                if plane.contains(&e.a, eps) && plane.contains(&e.b, eps) {
                    inliers.push(*e);
                } else {
                    outliers.push(*e);
                }
            }
        }
        None => outliers.extend_from_slice(edges),
    }

    Ok(PlaneFit {
        plane: best,
        inliers,
        outliers,
    })
}

/// [`fit_dominant_plane`] with the default sample bound and the thread rng.
pub fn fit_dominant_plane_default<T: Scalar>(
    edges: &[Segment3<T>],
    eps: T,
) -> Result<PlaneFit<T>, GeometryError> {
    fit_dominant_plane(edges, eps, DEFAULT_MAX_SAMPLES, &mut rand::rng())
}

/// As [`fit_dominant_plane`], but over raw points: a point within eps of the
/// winning plane is an inlier. Duplicate positions are collapsed for
/// candidate generation but every input point is partitioned.
pub fn fit_plane_points<T: Scalar, R: Rng>(
    points: &[Point3<T>],
    eps: T,
    max_samples: usize,
    rng: &mut R,
) -> Result<PointFit<T>, GeometryError> {
    check_tolerance(eps)?;

    let mut unique = PointSet::new(eps);
    for p in points {
        unique.insert(*p);
    }
    validate_spread(unique.points(), eps)?;

    let max_score = points.len();
    let mut score = |plane: &Plane<T>| -> usize {
        points.iter().filter(|p| plane.contains(p, eps)).count()
    };
    let best = search_best_plane(unique.points(), eps, max_samples, rng, &mut score, max_score);

    let mut inliers = Vec::new();
    let mut outliers = Vec::new();
    match &best {
        Some(plane) => {
            for p in points {
                if plane.contains(p, eps) {
                    inliers.push(*p);
                } else {
                    outliers.push(*p);
                }
            }
        }
        None => outliers.extend_from_slice(points),
    }

    Ok(PointFit {
        plane: best,
        inliers,
        outliers,
    })
}

/// Structural checks shared by both fit entry points: at least three unique
/// positions, and at least one non-collinear triple among them.
fn validate_spread<T: Scalar>(points: &[Point3<T>], eps: T) -> Result<(), GeometryError> {
    if points.len() < 3 {
        return Err(GeometryError::InsufficientInput {
            needed: 3,
            got: points.len(),
        });
    }
    for i in 0..points.len() {
        for j in i + 1..points.len() {
            for k in j + 1..points.len() {
                if !are_collinear(&points[i], &points[j], &points[k], eps) {
                    return Ok(());
                }
            }
        }
    }
    Err(GeometryError::DegenerateInput(
        "all points collinear within tolerance, no plane is determined",
    ))
}

fn search_best_plane<T: Scalar, R: Rng>(
    points: &[Point3<T>],
    eps: T,
    max_samples: usize,
    rng: &mut R,
    score: &mut dyn FnMut(&Plane<T>) -> usize,
    max_score: usize,
) -> Option<Plane<T>> {
    let mut best: Option<Plane<T>> = None;
    let mut best_score = 0usize;

    if points.len() <= EXHAUSTIVE_LIMIT {
        'outer: for i in 0..points.len() {
            for j in i + 1..points.len() {
                for k in j + 1..points.len() {
                    let Some(cand) = Plane::from_points(&points[i], &points[j], &points[k], eps)
                    else {
                        continue;
                    };
                    let s = score(&cand);
                    if best.is_none() || s > best_score {
                        best = Some(cand);
                        best_score = s;
                        if best_score >= max_score {
                            break 'outer;
                        }
                    }
                }
            }
        }
    } else {
        for _ in 0..max_samples {
            let i = rng.random_range(0..points.len());
            let j = rng.random_range(0..points.len());
            let k = rng.random_range(0..points.len());
            if i == j || j == k || i == k {
                continue;
            }
            let Some(cand) = Plane::from_points(&points[i], &points[j], &points[k], eps) else {
                continue;
            };
            let s = score(&cand);
            if best.is_none() || s > best_score {
                best = Some(cand);
                best_score = s;
                if best_score >= max_score {
                    break;
                }
            }
        }
    }

    best
}
