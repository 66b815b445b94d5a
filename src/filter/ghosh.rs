//! Ghosh digital linear filter for Schlumberger soundings
//!
//! The filter replaces the Hankel-transform integral of resistivity
//! sounding theory with a finite weighted sum of kernel samples taken at
//! fixed logarithmically spaced abscissae. The coefficient table, sampling
//! density and decade shift are intrinsic constants of the published
//! 13-point filter; changing any one of them independently produces
//! numerically wrong apparent resistivities without raising an error.
//!
//! Reference: Ghosh, D. P. (1971). "The application of linear filter theory
//! to the direct interpretation of geoelectrical resistivity sounding
//! measurements", Geophysical Prospecting 19(2), 192-217.

use std::f64::consts::LN_10;

/// Number of coefficients in the 13-point Schlumberger filter
pub const FILTER_LENGTH: usize = 13;

/// Number of kernel samples the filter consumes per spacing
///
/// The convolution reads every second sample of the window, so the sample
/// count is tied to the coefficient count and cannot vary independently.
pub const NUM_SAMPLES: usize = 2 * FILTER_LENGTH - 1;

/// Filter sampling density per decade (Ghosh's m)
pub const SAMPLING_DENSITY: f64 = 4.438;

/// Numerator of the exponent shifting the sampling window below the spacing
///
/// The first abscissa sits `DECADE_SHIFT / SAMPLING_DENSITY` decades (about
/// 2.25) beneath the electrode half-spacing.
pub const DECADE_SHIFT: f64 = 10.0;

/// Filter weights of the Schlumberger-array filter, as published
///
/// Apparent resistivity is the weighted kernel sum divided by
/// [`WEIGHT_DIVISOR`]. The weights sum to the divisor, which is what makes
/// a constant kernel pass through the filter unchanged.
pub const WEIGHTS: [f64; FILTER_LENGTH] = [
    105.0, -262.0, 416.0, -746.0, 1605.0, -4390.0, 13396.0, -27841.0, 16448.0, 8183.0, 2525.0,
    336.0, 225.0,
];

/// Common divisor of the filter weights
pub const WEIGHT_DIVISOR: f64 = 10_000.0;

/// Ratio between consecutive sampling abscissae: 10^(1 / (2 m))
pub fn abscissa_ratio() -> f64 {
    (LN_10 / (2.0 * SAMPLING_DENSITY)).exp()
}

/// Generate the fixed sampling abscissae for one electrode half-spacing
///
/// The first abscissa sits `DECADE_SHIFT / SAMPLING_DENSITY` decades below
/// the spacing; each subsequent one is the previous multiplied by the fixed
/// ratio, giving a log-uniform grid across the transform domain.
pub fn abscissae(half_spacing: f64) -> [f64; NUM_SAMPLES] {
    let ratio = abscissa_ratio();
    let mut points = [0.0; NUM_SAMPLES];

    let mut u = half_spacing * (-DECADE_SHIFT * LN_10 / SAMPLING_DENSITY).exp();
    for point in &mut points {
        *point = u;
        u *= ratio;
    }
    points
}

/// Convolve a window of kernel samples with the filter weights
///
/// Takes every second sample starting at the first, so exactly
/// [`FILTER_LENGTH`] samples meet the [`FILTER_LENGTH`] weights. The
/// odd-indexed samples lie off the filter's effective lattice and carry no
/// weight.
pub fn convolve(kernels: &[f64; NUM_SAMPLES]) -> f64 {
    let weighted: f64 = kernels
        .iter()
        .step_by(2)
        .zip(WEIGHTS.iter())
        .map(|(&kernel, &weight)| weight * kernel)
        .sum();
    weighted / WEIGHT_DIVISOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_divisor() {
        // Integer-valued weights sum exactly in f64
        let sum: f64 = WEIGHTS.iter().sum();
        assert_eq!(sum, WEIGHT_DIVISOR);
    }

    #[test]
    fn test_abscissae_form_geometric_sequence() {
        let points = abscissae(10.0);
        assert_eq!(points.len(), NUM_SAMPLES);
        assert!(points[0] > 0.0);

        let ratio = abscissa_ratio();
        for pair in points.windows(2) {
            let observed = pair[1] / pair[0];
            assert!((observed - ratio).abs() < 1e-12, "sampling ratio drifted to {}", observed);
        }
    }

    #[test]
    fn test_first_abscissa_sits_below_spacing() {
        let points = abscissae(100.0);
        let expected = 100.0 * 10f64.powf(-DECADE_SHIFT / SAMPLING_DENSITY);
        assert!(
            ((points[0] - expected) / expected).abs() < 1e-12,
            "first abscissa {} should be {}",
            points[0],
            expected
        );
    }

    #[test]
    fn test_abscissae_scale_with_spacing() {
        let at_one = abscissae(1.0);
        let at_fifty = abscissae(50.0);
        for (a, b) in at_one.iter().zip(at_fifty.iter()) {
            assert!((b / a - 50.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_constant_kernel_passes_through() {
        let kernels = [250.0; NUM_SAMPLES];
        assert_eq!(convolve(&kernels), 250.0);
    }

    #[test]
    fn test_convolve_ignores_odd_samples() {
        let mut kernels = [50.0; NUM_SAMPLES];
        for i in (1..NUM_SAMPLES).step_by(2) {
            kernels[i] = 1e9;
        }
        assert_eq!(convolve(&kernels), 50.0, "odd-indexed samples carry weight");
    }
}
