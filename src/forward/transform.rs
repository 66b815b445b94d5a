//! Resistivity transform engine
//!
//! Collapses the layered model into a single kernel resistivity at one
//! transform abscissa, using the Pekeris impedance recursion from the
//! terminating half-space upward.

use crate::model::EarthModel;

/// Kernel resistivity of the model at transform abscissa `u`
///
/// Starting from the bottom half-space, each layer above perturbs the
/// running value by its own resistivity weighted by the tanh attenuation
/// of its thickness over `u`:
///
/// ```text
/// T <- (T + rho * tanh(t / u)) / (1 + T * tanh(t / u) / rho)
/// ```
///
/// For a single-layer model the recursion is empty and the half-space
/// resistivity comes back unchanged. The division by `rho` is safe because
/// [`EarthModel`] only admits positive finite resistivities. The function
/// is pure; callers may evaluate different abscissae in parallel.
pub fn resistivity_transform(model: &EarthModel, u: f64) -> f64 {
    model
        .resistivities()
        .iter()
        .zip(model.thicknesses())
        .rev()
        .fold(model.basement_resistivity(), |kernel, (&rho, &thickness)| {
            let attenuation = (thickness / u).tanh();
            (kernel + rho * attenuation) / (1.0 + kernel * attenuation / rho)
        })
}
