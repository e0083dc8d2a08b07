//! Project-wide exports for easy access.

pub use crate::curve::{
    BasicCurve, Curve, CurveError, CurveKind, CurveParams, CurvePoints,
    ModulatedCurve, SampleDomain,
};
pub use crate::settings::*;
pub use crate::util::*;
pub use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};
