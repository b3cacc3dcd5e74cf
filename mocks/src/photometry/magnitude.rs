//! Magnitude / flux conversions and photometric constants.
//!
//! Fluxes here are relative to the magnitude zero point, i.e.
//! `flux = 10^(-0.4 m)`. Only ratios of fluxes enter the noise model so the
//! absolute calibration never matters.

use std::f64::consts::LN_10;

/// Magnitude written for objects that are not detected
pub const NON_DETECTION_MAGNITUDE: f64 = 99.0;

/// Realised magnitudes brighter than this are treated as not detected
pub const MIN_VALID_MAGNITUDE: f64 = 5.0;

/// Realised fluxes at or below zero are replaced by this value before `log10`
pub const FLUX_FLOOR: f64 = 1e-99;

/// `2.5 / ln(10)`: converts a relative flux error into a magnitude error
pub const MAG_ERR_PER_INVERSE_SN: f64 = 2.5 / LN_10;

/// Linear flux of a magnitude
pub fn mag_to_flux(mag: f64) -> f64 {
    10f64.powf(-0.4 * mag)
}

/// Magnitude of a linear flux
pub fn flux_to_mag(flux: f64) -> f64 {
    -2.5 * flux.log10()
}

/// Magnitude error for a given signal-to-noise ratio
pub fn sn_to_mag_err(sn: f64) -> f64 {
    MAG_ERR_PER_INVERSE_SN / sn
}

/// One-sigma limiting magnitude for a limit quoted at `significance` sigma.
///
/// A limit given at 5 sigma corresponds to a fainter one-sigma limit by
/// `2.5 log10(5)` magnitudes; for `significance == 1` the limit is unchanged.
pub fn one_sigma_limit(mag_limit: f64, significance: f64) -> f64 {
    mag_limit - 2.5 * significance.log10()
}
