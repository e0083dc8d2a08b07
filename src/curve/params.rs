//! Validated curve parameters and the shared sampling domain.

use super::*;
use std::sync::Arc;

const FREQ_CONSTRAINT: &str = "frequency must be positive";

/// The fixed, evenly spaced parameter values `t` a curve is sampled at.
///
/// Holds [`SAMPLE_COUNT`] values over the half-open range `0.0..TAU`. The
/// values are immutable and shared between clones.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleDomain {
    values: Arc<[f64]>,
}

impl SampleDomain {
    pub fn new() -> Self {
        Self::with_len(SAMPLE_COUNT)
    }

    /// A domain of `len` values over `0.0..TAU`.
    pub fn with_len(len: usize) -> Self {
        Self { values: linspace_exclusive(0.0, TAU, len).into() }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}

impl Default for SampleDomain {
    fn default() -> Self {
        Self::new()
    }
}

/// The parameters shared by every curve variant.
///
/// Both frequencies are always finite and strictly positive, and the phase is
/// always within `0.0..TAU`. Fields are only reachable through validated
/// setters.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveParams {
    freq_x: f64,
    freq_y: f64,
    phase: f64,
    domain: SampleDomain,
}

impl CurveParams {
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidParameter`] if either frequency is not a
    /// finite, strictly positive value.
    pub fn new(freq_x: f64, freq_y: f64, phase: f64) -> Result<Self, CurveError> {
        Ok(Self {
            freq_x: validate_freq("freq_x", freq_x)?,
            freq_y: validate_freq("freq_y", freq_y)?,
            phase: wrap_phase(phase),
            domain: SampleDomain::new(),
        })
    }

    pub const fn freq_x(&self) -> f64 {
        self.freq_x
    }

    pub const fn freq_y(&self) -> f64 {
        self.freq_y
    }

    pub const fn phase(&self) -> f64 {
        self.phase
    }

    pub const fn domain(&self) -> &SampleDomain {
        &self.domain
    }

    /// # Errors
    ///
    /// Returns [`CurveError::InvalidParameter`] and leaves the current value
    /// untouched if `freq` is not a finite, strictly positive value.
    pub fn set_freq_x(&mut self, freq: f64) -> Result<(), CurveError> {
        self.freq_x = validate_freq("freq_x", freq)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`CurveError::InvalidParameter`] and leaves the current value
    /// untouched if `freq` is not a finite, strictly positive value.
    pub fn set_freq_y(&mut self, freq: f64) -> Result<(), CurveError> {
        self.freq_y = validate_freq("freq_y", freq)?;
        Ok(())
    }

    /// Stores `phase` wrapped into `0.0..TAU`. Never fails; a non-finite phase
    /// is stored as `0.0`.
    pub fn set_phase(&mut self, phase: f64) {
        self.phase = wrap_phase(phase);
    }
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            freq_x: 1.0,
            freq_y: 1.0,
            phase: 0.0,
            domain: SampleDomain::new(),
        }
    }
}

fn validate_freq(name: &'static str, freq: f64) -> Result<f64, CurveError> {
    // also rejects NaN
    if freq.is_finite() && freq > 0.0 {
        Ok(freq)
    }
    else {
        Err(CurveError::invalid(name, freq, FREQ_CONSTRAINT))
    }
}

/// Wraps `phase` into `0.0..TAU`.
pub(crate) fn wrap_phase(phase: f64) -> f64 {
    if !phase.is_finite() {
        tracing::warn!(phase, "non-finite phase replaced with 0.0");
        return 0.0;
    }

    let wrapped = phase.rem_euclid(TAU);

    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nannou::rand::random_range;

    #[test]
    fn domain_is_half_open() {
        let domain = SampleDomain::new();
        assert_eq!(domain.len(), SAMPLE_COUNT);
        assert!(eps_eq(domain.as_slice()[0], 0.0));

        let last = domain.as_slice()[SAMPLE_COUNT - 1];
        assert!(last < TAU);
        assert!(within_tolerance(last, TAU - TAU / SAMPLE_COUNT as f64, 1e-12));
    }

    #[test]
    fn clones_share_domain() {
        let a = CurveParams::default();
        let b = a.clone();
        assert!(std::ptr::eq(
            a.domain().as_slice().as_ptr(),
            b.domain().as_slice().as_ptr()
        ));
    }

    #[test]
    fn rejects_non_positive_frequencies() {
        assert!(CurveParams::new(0.0, 1.0, 0.0).is_err());
        assert!(CurveParams::new(1.0, -2.0, 0.0).is_err());
        assert!(CurveParams::new(f64::NAN, 1.0, 0.0).is_err());
        assert!(CurveParams::new(1.0, f64::INFINITY, 0.0).is_err());
        assert!(CurveParams::new(1e-9, 1e9, 0.0).is_ok());
    }

    #[test]
    fn failed_assignment_keeps_previous_value() {
        let mut p = CurveParams::new(3.0, 2.0, 0.0).unwrap();

        let err = p.set_freq_y(-0.5).unwrap_err();
        assert_eq!(err.parameter(), "freq_y");
        assert!(eps_eq(p.freq_y(), 2.0));
    }

    #[test]
    fn phase_always_wrapped() {
        let mut p = CurveParams::default();

        for _ in 0..1000 {
            let v = random_range(-1000.0, 1000.0);
            p.set_phase(v);
            assert!((0.0..TAU).contains(&p.phase()), "{v} -> {}", p.phase());
        }
    }

    #[test]
    fn phase_edge_cases() {
        assert!(eps_eq(wrap_phase(TAU), 0.0));
        assert!(eps_eq(wrap_phase(-TAU), 0.0));
        assert!(within_tolerance(wrap_phase(-FRAC_PI_2), 3.0 * FRAC_PI_2, 1e-12));
        assert!(eps_eq(wrap_phase(-1e-18), 0.0));
        assert!(eps_eq(wrap_phase(f64::NAN), 0.0));
        assert!(eps_eq(wrap_phase(f64::NEG_INFINITY), 0.0));
    }
}
