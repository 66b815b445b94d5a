//! Layered earth model implementation
//!
//! EarthModel is the validated resistivity/thickness stack that every forward
//! computation runs against. Validation happens here, at construction, so the
//! numeric kernel never has to re-check its inputs.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SondeoError};

/// A 1-D layered earth: N resistivities over a terminating half-space
///
/// Layers are ordered top to bottom. The bottom layer extends to infinite
/// depth, so a model of N layers carries N resistivities but only N-1
/// thicknesses. Thicknesses share their length unit with the electrode
/// half-spacings passed to the forward model. Deserialization runs through
/// the same validation as [`EarthModel::new`], so a decoded model carries
/// the same invariants as a constructed one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEarthModel")]
pub struct EarthModel {
    /// Layer resistivities in ohm-meters, top to bottom
    resistivities: Vec<f64>,
    /// Layer thicknesses, top to bottom; one fewer than resistivities
    thicknesses: Vec<f64>,
}

impl EarthModel {
    /// Create a model from explicit resistivity and thickness vectors
    ///
    /// Requires one resistivity per layer and one thickness per layer above
    /// the terminating half-space. All values must be positive and finite.
    pub fn new(resistivities: Vec<f64>, thicknesses: Vec<f64>) -> Result<Self> {
        if resistivities.is_empty() || thicknesses.len() != resistivities.len() - 1 {
            return Err(SondeoError::LayerMismatch {
                resistivities: resistivities.len(),
                thicknesses: thicknesses.len(),
            });
        }
        for (layer, &rho) in resistivities.iter().enumerate() {
            if !rho.is_finite() || rho <= 0.0 {
                return Err(SondeoError::InvalidResistivity { layer, value: rho });
            }
        }
        for (layer, &thickness) in thicknesses.iter().enumerate() {
            if !thickness.is_finite() || thickness <= 0.0 {
                return Err(SondeoError::InvalidThickness {
                    layer,
                    value: thickness,
                });
            }
        }
        Ok(Self {
            resistivities,
            thicknesses,
        })
    }

    /// Create a homogeneous half-space model
    pub fn half_space(resistivity: f64) -> Result<Self> {
        Self::new(vec![resistivity], Vec::new())
    }

    /// Build a model from the packed parameter vector used by inversion loops
    ///
    /// The vector must have odd length: the first (len + 1) / 2 entries are
    /// the resistivities, the remainder the thicknesses, both top to bottom.
    /// Even lengths make the split ambiguous and are rejected before any
    /// values are inspected.
    pub fn from_params(params: &[f64]) -> Result<Self> {
        if params.len() % 2 == 0 {
            return Err(SondeoError::InvalidModelShape { len: params.len() });
        }
        let split = params.len() / 2 + 1;
        Self::new(params[..split].to_vec(), params[split..].to_vec())
    }

    /// Pack the model back into a parameter vector (inverse of from_params)
    pub fn to_params(&self) -> Vec<f64> {
        let mut params = Vec::with_capacity(self.resistivities.len() + self.thicknesses.len());
        params.extend_from_slice(&self.resistivities);
        params.extend_from_slice(&self.thicknesses);
        params
    }

    /// Number of layers, counting the terminating half-space
    pub fn num_layers(&self) -> usize {
        self.resistivities.len()
    }

    /// Layer resistivities in ohm-meters, top to bottom
    pub fn resistivities(&self) -> &[f64] {
        &self.resistivities
    }

    /// Layer thicknesses, top to bottom
    pub fn thicknesses(&self) -> &[f64] {
        &self.thicknesses
    }

    /// Resistivity of the terminating half-space
    pub fn basement_resistivity(&self) -> f64 {
        // Constructors guarantee at least one layer
        self.resistivities[self.resistivities.len() - 1]
    }
}

/// Unvalidated mirror that deserialization decodes before validation
#[derive(Deserialize)]
struct RawEarthModel {
    resistivities: Vec<f64>,
    thicknesses: Vec<f64>,
}

impl TryFrom<RawEarthModel> for EarthModel {
    type Error = SondeoError;

    fn try_from(raw: RawEarthModel) -> Result<Self> {
        Self::new(raw.resistivities, raw.thicknesses)
    }
}
