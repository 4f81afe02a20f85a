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

use num_traits::ToPrimitive;
use thiserror::Error;

use crate::numeric::scalar::Scalar;

/// Recoverable failure states of the geometry operations.
///
/// The hosting application is expected to translate these into user-facing
/// messages and abort whatever transaction it had open; nothing here is
/// process-fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("expected at least {needed} inputs, got {got}")]
    InsufficientInput { needed: usize, got: usize },

    #[error("paths must share one point count: expected {expected}, got {got}")]
    MismatchedLength { expected: usize, got: usize },

    #[error("degenerate input: {0}")]
    DegenerateInput(&'static str),

    #[error("no solution found within tolerance")]
    NoSolution,

    #[error("tolerance must be non-negative, got {0}")]
    InvalidTolerance(f64),
}

/// Rejects a negative eps up front so every downstream comparison can assume
/// `eps >= 0`.
pub(crate) fn check_tolerance<T: Scalar>(eps: T) -> Result<(), GeometryError> {
    if eps < T::zero() {
        return Err(GeometryError::InvalidTolerance(
            eps.to_f64().unwrap_or(f64::NAN),
        ));
    }
    Ok(())
}
