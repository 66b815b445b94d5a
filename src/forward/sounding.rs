//! Sounding-curve sampler
//!
//! For each electrode half-spacing, evaluates the resistivity transform at
//! the filter's fixed sampling abscissae and convolves the result into one
//! apparent-resistivity value. All spacings are validated before any
//! computation runs, so a malformed request never yields partial output.

use log::{debug, trace};

use crate::error::{Result, SondeoError};
use crate::filter::ghosh;
use crate::forward::transform::resistivity_transform;
use crate::model::EarthModel;

/// Validate electrode half-spacings ahead of any computation
fn validate_spacings(half_spacings: &[f64]) -> Result<()> {
    if half_spacings.is_empty() {
        return Err(SondeoError::EmptySpacings);
    }
    for (index, &spacing) in half_spacings.iter().enumerate() {
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(SondeoError::InvalidSpacing {
                index,
                value: spacing,
            });
        }
    }
    Ok(())
}

/// Apparent resistivity at a single validated half-spacing
fn sample_spacing(model: &EarthModel, half_spacing: f64) -> f64 {
    let abscissae = ghosh::abscissae(half_spacing);

    let mut kernels = [0.0; ghosh::NUM_SAMPLES];
    for (kernel, &u) in kernels.iter_mut().zip(abscissae.iter()) {
        *kernel = resistivity_transform(model, u);
    }

    let rho_a = ghosh::convolve(&kernels);
    trace!("AB/2 = {}: apparent resistivity {} ohm-m", half_spacing, rho_a);
    rho_a
}

/// Compute the apparent resistivity for a single electrode half-spacing
///
/// Single-point granularity of [`sounding_curve`]; spacings carry no
/// cross dependency, so callers that want parallelism can fan this out
/// themselves.
pub fn apparent_resistivity(model: &EarthModel, half_spacing: f64) -> Result<f64> {
    validate_spacings(std::slice::from_ref(&half_spacing))?;
    Ok(sample_spacing(model, half_spacing))
}

/// Compute the full sounding curve for a set of electrode half-spacings
///
/// Returns one apparent resistivity per spacing, in input order. Spacings
/// share their length unit with the model thicknesses.
pub fn sounding_curve(model: &EarthModel, half_spacings: &[f64]) -> Result<Vec<f64>> {
    validate_spacings(half_spacings)?;
    debug!("Forward modeling {} layers at {} spacings", model.num_layers(), half_spacings.len());
    Ok(half_spacings
        .iter()
        .map(|&spacing| sample_spacing(model, spacing))
        .collect())
}

/// Forward model directly from a packed parameter vector
///
/// The boundary that inversion loops hit once per iteration: the candidate
/// model arrives as an odd-length vector (resistivities first, then
/// thicknesses) and the sounding curve goes back for residual evaluation.
pub fn sounding_curve_from_params(params: &[f64], half_spacings: &[f64]) -> Result<Vec<f64>> {
    let model = EarthModel::from_params(params)?;
    sounding_curve(&model, half_spacings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_space_curve_is_flat() {
        // A homogeneous half-space must map to itself at every spacing
        let model = EarthModel::half_space(100.0).unwrap();
        let curve = sounding_curve(&model, &[1.0, 10.0, 100.0, 1000.0]).unwrap();
        assert_eq!(curve, vec![100.0; 4]);
    }

    #[test]
    fn test_single_point_matches_curve_entry() {
        let model = EarthModel::new(vec![10.0, 100.0], vec![5.0]).unwrap();
        let curve = sounding_curve(&model, &[1.0, 10.0, 100.0]).unwrap();

        for (&spacing, &expected) in [1.0, 10.0, 100.0].iter().zip(curve.iter()) {
            assert_eq!(apparent_resistivity(&model, spacing).unwrap(), expected);
        }
    }

    #[test]
    fn test_packed_params_match_typed_path() {
        let params = [10.0, 100.0, 5.0];
        let spacings = [1.0, 10.0, 100.0];

        let model = EarthModel::from_params(&params).unwrap();
        let typed = sounding_curve(&model, &spacings).unwrap();
        let packed = sounding_curve_from_params(&params, &spacings).unwrap();
        assert_eq!(typed, packed);
    }

    #[test]
    fn test_rejects_empty_spacings() {
        let model = EarthModel::half_space(100.0).unwrap();
        let result = sounding_curve(&model, &[]);
        assert!(matches!(result, Err(SondeoError::EmptySpacings)));
    }

    #[test]
    fn test_rejects_nonpositive_spacing_with_index() {
        let model = EarthModel::half_space(100.0).unwrap();
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let result = sounding_curve(&model, &[1.0, bad, 100.0]);
            assert!(
                matches!(result, Err(SondeoError::InvalidSpacing { index: 1, .. })),
                "spacing {} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_rejects_bad_spacing_anywhere_in_set() {
        // Validation covers the whole set before any point is computed
        let model = EarthModel::half_space(100.0).unwrap();
        let result = sounding_curve(&model, &[1.0, 10.0, 100.0, -1.0]);
        assert!(matches!(result, Err(SondeoError::InvalidSpacing { index: 3, .. })));
    }

    #[test]
    fn test_rejects_single_bad_spacing() {
        let model = EarthModel::half_space(100.0).unwrap();
        let result = apparent_resistivity(&model, 0.0);
        assert!(matches!(result, Err(SondeoError::InvalidSpacing { index: 0, .. })));
    }

    #[test]
    fn test_curve_preserves_spacing_order() {
        let model = EarthModel::new(vec![10.0, 100.0], vec![5.0]).unwrap();

        let forward = sounding_curve(&model, &[1.0, 10.0, 100.0]).unwrap();
        let mut backward = sounding_curve(&model, &[100.0, 10.0, 1.0]).unwrap();
        backward.reverse();
        assert_eq!(forward, backward);
    }
}
