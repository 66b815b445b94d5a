//! Sondeo - 1-D DC resistivity forward modeling
//!
//! Sondeo computes the apparent-resistivity response of a layered earth
//! under a Schlumberger-type vertical electrical sounding (VES). It is the
//! forward kernel of resistivity inversion workflows: each iteration hands
//! over a candidate model and receives the sounding curve that model would
//! produce in the field.
//!
//! # Architecture
//!
//! The computation flows through three stages:
//! - Model layer: validated resistivity/thickness stack (`EarthModel`)
//! - Transform engine: Pekeris recursion collapsing the stack to kernel
//!   resistivities at fixed sample points
//! - Sampler: Ghosh's digital linear filter turning kernel samples into
//!   apparent resistivities, one per electrode half-spacing
//!
//! # Example
//!
//! ```
//! use sondeo::{sounding_curve, EarthModel};
//!
//! // 10 ohm-m overburden, 5 units thick, over a 100 ohm-m basement
//! let model = EarthModel::new(vec![10.0, 100.0], vec![5.0])?;
//! let curve = sounding_curve(&model, &[1.0, 10.0, 100.0])?;
//!
//! // Short spacings see the overburden, long spacings the basement
//! assert!(curve[0] < 11.0);
//! assert!(curve[2] > 70.0);
//! # Ok::<(), sondeo::SondeoError>(())
//! ```

pub mod error;
pub mod filter;
pub mod forward;
pub mod model;

// Re-export commonly used types
pub use error::{Result, SondeoError};
pub use forward::{
    apparent_resistivity, resistivity_transform, sounding_curve, sounding_curve_from_params,
};
pub use model::EarthModel;
