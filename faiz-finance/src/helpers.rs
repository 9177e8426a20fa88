//! Common financial utilities

use faiz_core::{FaizError, InputRecord};

/// Read a required field, reporting it as incomplete input when absent
pub fn require(inputs: &InputRecord, key: &str) -> Result<f64, FaizError> {
    inputs
        .get(key)
        .ok_or_else(|| FaizError::incomplete_input(&[key]))
}

/// Convert a percentage (4.5) to a fraction (0.045)
pub fn percent(rate: f64) -> f64 {
    rate / 100.0
}

/// (1 + rate)^periods with `rate` as a fraction
pub fn compound_factor(rate: f64, periods: f64) -> f64 {
    (1.0 + rate).powf(periods)
}

#[cfg(test)]
pub(crate) fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff < tolerance,
        "expected {} ± {}, got {} (diff {})",
        expected, tolerance, actual, diff
    );
}
