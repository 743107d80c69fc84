// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! Track positions are percentages built from divisions like `100 / 3`, so
//! tests compare them with `approx` instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Tolerance for translate and slide-width percentages.
pub const PERCENT_EPSILON: f32 = 1e-4;
