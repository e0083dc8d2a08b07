//! Lissajous curve parameterisation and sampling.
//!
//! A curve is described by two frequencies and a phase offset, and is sampled
//! over a fixed parameter domain:
//!
//! ```text
//! x(t) = sin(freq_x * t + phase)
//! y(t) = sin(freq_y * t)
//! ```
//!
//! [`ModulatedCurve`] additionally scales both coordinates by a slowly
//! varying envelope.

use crate::prelude::*;

pub mod basic;
pub mod error;
pub mod kind;
pub mod modulated;
pub mod params;
pub mod points;

pub use basic::BasicCurve;
pub use error::CurveError;
pub use kind::CurveKind;
pub use modulated::ModulatedCurve;
pub use params::{CurveParams, SampleDomain};
pub use points::CurvePoints;

/// The common interface of all curve variants.
///
/// Implementors only provide access to their [`CurveParams`] and the sampling
/// routine; parameter setters are provided and always go through validation.
pub trait Curve {
    fn params(&self) -> &CurveParams;

    fn params_mut(&mut self) -> &mut CurveParams;

    /// Samples the curve over its parameter domain, returning
    /// [`SAMPLE_COUNT`] `(x, y)` coordinates.
    fn compute_points(&self) -> CurvePoints;

    /// The largest absolute value any coordinate of this curve can reach.
    fn amplitude_bound(&self) -> f64 {
        1.0
    }

    fn freq_x(&self) -> f64 {
        self.params().freq_x()
    }

    fn freq_y(&self) -> f64 {
        self.params().freq_y()
    }

    fn phase(&self) -> f64 {
        self.params().phase()
    }

    /// Sets the x frequency.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidParameter`] if `freq` is not a finite,
    /// strictly positive value.
    fn set_freq_x(&mut self, freq: f64) -> Result<(), CurveError> {
        self.params_mut().set_freq_x(freq)
    }

    /// Sets the y frequency.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidParameter`] if `freq` is not a finite,
    /// strictly positive value.
    fn set_freq_y(&mut self, freq: f64) -> Result<(), CurveError> {
        self.params_mut().set_freq_y(freq)
    }

    /// Sets the phase, wrapped into `0.0..TAU`.
    fn set_phase(&mut self, phase: f64) {
        self.params_mut().set_phase(phase);
    }

    /// The frequency ratio as `"freq_x:freq_y"`.
    fn ratio_label(&self) -> String {
        format!("{}:{}", self.freq_x(), self.freq_y())
    }
}
