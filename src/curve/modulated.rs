//! A Lissajous curve with an amplitude envelope.

use super::*;

const MODULATION_CONSTRAINT: &str = "modulation must be between 0 and 1";

/// A Lissajous curve whose amplitude "breathes" over the parameter domain.
///
/// Both coordinates of the plain curve are scaled by the envelope
/// `1 - modulation * sin(t / 2)`. As `t / 2` stays within `0..π` the envelope
/// never exceeds `1.0`, and dips to `1 - modulation` halfway through.
#[derive(Debug, Clone, PartialEq)]
pub struct ModulatedCurve {
    params: CurveParams,
    /// Envelope depth, always within `0.0..=1.0`.
    modulation: f64,
}

impl ModulatedCurve {
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidParameter`] if either frequency is not a
    /// finite, strictly positive value, or if `modulation` lies outside
    /// `0.0..=1.0`.
    pub fn new(
        freq_x: f64,
        freq_y: f64,
        phase: f64,
        modulation: f64,
    ) -> Result<Self, CurveError> {
        Ok(Self {
            params: CurveParams::new(freq_x, freq_y, phase)?,
            modulation: validate_modulation(modulation)?,
        })
    }

    pub const fn modulation(&self) -> f64 {
        self.modulation
    }

    /// # Errors
    ///
    /// Returns [`CurveError::InvalidParameter`] and leaves the current depth
    /// untouched if `modulation` lies outside `0.0..=1.0`.
    pub fn set_modulation(&mut self, modulation: f64) -> Result<(), CurveError> {
        self.modulation = validate_modulation(modulation)?;
        Ok(())
    }

    /// The envelope value at parameter `t`.
    #[inline]
    pub fn envelope(&self, t: f64) -> f64 {
        self.modulation.mul_add(-(t / 2.0).sin(), 1.0)
    }
}

impl Default for ModulatedCurve {
    fn default() -> Self {
        Self {
            params: CurveParams::default(),
            modulation: DEFAULT_MODULATION,
        }
    }
}

impl Curve for ModulatedCurve {
    fn params(&self) -> &CurveParams {
        &self.params
    }

    fn params_mut(&mut self) -> &mut CurveParams {
        &mut self.params
    }

    fn compute_points(&self) -> CurvePoints {
        timed("ModulatedCurve::compute_points", || {
            let p = &self.params;

            p.domain()
                .iter()
                .map(|t| {
                    let env = self.envelope(t);
                    let x = env * p.freq_x().mul_add(t, p.phase()).sin();
                    let y = env * (p.freq_y() * t).sin();
                    (x, y)
                })
                .collect()
        })
    }

    fn amplitude_bound(&self) -> f64 {
        1.0 + self.modulation
    }
}

fn validate_modulation(modulation: f64) -> Result<f64, CurveError> {
    // NaN fails the range check
    if (0.0..=1.0).contains(&modulation) {
        Ok(modulation)
    }
    else {
        Err(CurveError::invalid("modulation", modulation, MODULATION_CONSTRAINT))
    }
}
