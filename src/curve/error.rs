//! Curve parameter errors.

use thiserror::Error;

/// Errors raised when a curve parameter would break one of its invariants.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum CurveError {
    /// A numeric parameter is outside its valid range.
    #[error("invalid {name} = {value}: {constraint}")]
    InvalidParameter {
        /// Name of the rejected parameter
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Human-readable description of the valid range
        constraint: &'static str,
    },
}

impl CurveError {
    pub(crate) const fn invalid(
        name: &'static str,
        value: f64,
        constraint: &'static str,
    ) -> Self {
        Self::InvalidParameter { name, value, constraint }
    }

    /// The name of the parameter which was rejected.
    pub const fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidParameter { name, .. } => *name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_parameter_and_value() {
        let e = CurveError::invalid("freq_x", -1.0, "frequency must be positive");
        assert_eq!(e.to_string(), "invalid freq_x = -1: frequency must be positive");
        assert_eq!(e.parameter(), "freq_x");
    }
}
