//! Demonstrates parameter validation on a live curve.

use super::*;

/// What the validation demonstration observed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    /// The error returned for the invalid assignment, if it was rejected.
    pub rejected: Option<CurveError>,
    /// The frequency ratio after the valid assignments.
    pub ratio: String,
}

/// Attempts an invalid frequency assignment on `curve`, then assigns a valid
/// 3:4 ratio, logging both outcomes.
///
/// # Errors
///
/// Returns [`CurveError`] if one of the valid assignments is rejected.
pub fn validation_demo<C: Curve>(
    curve: &mut C,
) -> Result<ValidationReport, CurveError> {
    tracing::info!("testing parameter validation");

    let rejected = match curve.set_freq_x(-1.0) {
        Err(e) => {
            tracing::info!("rejected as expected: {e}");
            Some(e)
        }
        Ok(()) => {
            tracing::warn!("a negative frequency was accepted");
            None
        }
    };

    curve.set_freq_x(3.0)?;
    curve.set_freq_y(4.0)?;

    let ratio = curve.ratio_label();
    tracing::info!("new frequency ratio: {ratio}");

    Ok(ValidationReport { rejected, ratio })
}
