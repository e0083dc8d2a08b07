//! Generic enum over the curve variants.

use super::*;

/// All the curve variants available, for holding different curves in one
/// collection.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveKind {
    /// A plain Lissajous curve.
    Basic(BasicCurve),
    /// An amplitude-modulated Lissajous curve.
    Modulated(ModulatedCurve),
}

impl CurveKind {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Basic(_) => "basic",
            Self::Modulated(_) => "modulated",
        }
    }
}

impl Curve for CurveKind {
    fn params(&self) -> &CurveParams {
        match self {
            Self::Basic(c) => c.params(),
            Self::Modulated(c) => c.params(),
        }
    }

    fn params_mut(&mut self) -> &mut CurveParams {
        match self {
            Self::Basic(c) => c.params_mut(),
            Self::Modulated(c) => c.params_mut(),
        }
    }

    fn compute_points(&self) -> CurvePoints {
        match self {
            Self::Basic(c) => c.compute_points(),
            Self::Modulated(c) => c.compute_points(),
        }
    }

    fn amplitude_bound(&self) -> f64 {
        match self {
            Self::Basic(c) => c.amplitude_bound(),
            Self::Modulated(c) => c.amplitude_bound(),
        }
    }
}

impl Default for CurveKind {
    fn default() -> Self {
        Self::Basic(BasicCurve::default())
    }
}

impl From<BasicCurve> for CurveKind {
    fn from(curve: BasicCurve) -> Self {
        Self::Basic(curve)
    }
}

impl From<ModulatedCurve> for CurveKind {
    fn from(curve: ModulatedCurve) -> Self {
        Self::Modulated(curve)
    }
}
