//! Tolerant comparisons for scores derived from logarithms and averages.

/// Absolute tolerance for rounded reference values.
pub const EPSILON: f64 = 1e-4;

pub fn approx_eq(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < EPSILON
}

#[track_caller]
pub fn assert_approx(actual: f64, expected: f64) {
    assert!(
        approx_eq(actual, expected),
        "expected {expected} (±{EPSILON}), got {actual}"
    );
}
