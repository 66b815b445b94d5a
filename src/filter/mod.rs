//! Digital linear filter
//!
//! Fixed sampling grid and convolution for Ghosh's filter method.

pub mod ghosh;

pub use ghosh::{abscissae, convolve};
