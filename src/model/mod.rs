//! Layered earth model
//!
//! Data structures describing the 1-D resistivity stack under a sounding.

mod earth;

pub use earth::EarthModel;
