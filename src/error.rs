//! Error types for Sondeo
//!
//! All errors use the SondeoError type, so callers see one consistent
//! taxonomy with the offending values attached. Every variant is a caller
//! contract violation detected before any computation runs; none is
//! transient, so nothing is retried or clamped.

use thiserror::Error;

/// Result type alias using SondeoError
pub type Result<T> = std::result::Result<T, SondeoError>;

/// All possible errors in Sondeo
#[derive(Error, Debug)]
pub enum SondeoError {
    // Model shape errors
    #[error("Parameter vector has even length {len}; expected n resistivities followed by n-1 thicknesses")]
    InvalidModelShape { len: usize },

    #[error("Layer count mismatch: {resistivities} resistivities with {thicknesses} thicknesses (expected one thickness fewer)")]
    LayerMismatch {
        resistivities: usize,
        thicknesses: usize,
    },

    // Model value errors
    #[error("Resistivity of layer {layer} is {value} ohm-m (must be positive and finite)")]
    InvalidResistivity { layer: usize, value: f64 },

    #[error("Thickness of layer {layer} is {value} (must be positive and finite)")]
    InvalidThickness { layer: usize, value: f64 },

    // Survey errors
    #[error("Electrode half-spacing at index {index} is {value} (must be positive and finite)")]
    InvalidSpacing { index: usize, value: f64 },

    #[error("Spacing set contains no entries")]
    EmptySpacings,
}

impl SondeoError {
    /// Returns a suggested recovery action for this error
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::InvalidModelShape { .. } => {
                "Pack the model as an odd-length vector: all resistivities first, then the thicknesses"
            }
            Self::LayerMismatch { .. } => {
                "Provide exactly one thickness per layer above the terminating half-space"
            }
            Self::InvalidResistivity { .. } => "Use strictly positive resistivities in ohm-meters",
            Self::InvalidThickness { .. } => "Use strictly positive layer thicknesses",
            Self::InvalidSpacing { .. } => "Use strictly positive electrode half-spacings",
            Self::EmptySpacings => "Request at least one electrode half-spacing",
        }
    }
}
