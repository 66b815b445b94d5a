//! Forward modeling pipeline
//!
//! Transform engine and sounding-curve sampler turning an earth model and
//! a set of electrode half-spacings into an apparent-resistivity curve.

mod sounding;
mod transform;

pub use sounding::{apparent_resistivity, sounding_curve, sounding_curve_from_params};
pub use transform::resistivity_transform;
