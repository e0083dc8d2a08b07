//! The plain Lissajous curve.

use super::*;

/// A plain Lissajous curve:
///
/// ```text
/// x(t) = sin(freq_x * t + phase)
/// y(t) = sin(freq_y * t)
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BasicCurve {
    params: CurveParams,
}

impl BasicCurve {
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidParameter`] if either frequency is not a
    /// finite, strictly positive value.
    pub fn new(freq_x: f64, freq_y: f64, phase: f64) -> Result<Self, CurveError> {
        Ok(Self { params: CurveParams::new(freq_x, freq_y, phase)? })
    }
}

impl Curve for BasicCurve {
    fn params(&self) -> &CurveParams {
        &self.params
    }

    fn params_mut(&mut self) -> &mut CurveParams {
        &mut self.params
    }

    fn compute_points(&self) -> CurvePoints {
        timed("BasicCurve::compute_points", || {
            let p = &self.params;

            p.domain()
                .iter()
                .map(|t| {
                    let x = p.freq_x().mul_add(t, p.phase()).sin();
                    let y = (p.freq_y() * t).sin();
                    (x, y)
                })
                .collect()
        })
    }
}
