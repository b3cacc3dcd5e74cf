//! Magnitude evolution correction.
//!
//! Mock catalogues built on a fixed luminosity function miss the brightening
//! of galaxies with redshift. The correction
//! `m_evo = m - 0.8 * (atan(1.5 z) - 0.1489)` (MICECAT v2 prescription) is
//! added to the model magnitudes before any noise realisation.

use catalog::{Catalog, CatalogError, Column};
use log::info;
use ndarray::{Array1, ArrayView1, Zip};
use thiserror::Error;

/// Errors of the catalogue level evolution correction
#[derive(Error, Debug)]
pub enum EvolutionError {
    #[error("table does not contain any magnitude columns starting with '{0}'")]
    NoMagnitudeColumns(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Evolution corrected magnitude of an object at `redshift`
pub fn evolution_correction(mag: f64, redshift: f64) -> f64 {
    mag - 0.8 * ((1.5 * redshift).atan() - 0.1489)
}

/// Apply the correction column-wise, or copy the magnitudes unchanged if
/// `evolve` is false.
///
/// # Panics
/// If `mags` and `redshift` differ in length.
pub fn correct_magnitudes(
    mags: ArrayView1<f64>,
    redshift: ArrayView1<f64>,
    evolve: bool,
) -> Array1<f64> {
    if !evolve {
        return mags.to_owned();
    }
    Zip::from(&mags)
        .and(&redshift)
        .map_collect(|&m, &z| evolution_correction(m, z))
}

/// Build a table of `<name>_evo` columns for every column of `catalog` whose
/// name starts with `prefix`.
pub fn evolve_catalog(
    catalog: &Catalog,
    redshift_column: &str,
    prefix: &str,
    evolve: bool,
) -> Result<Catalog, EvolutionError> {
    let redshift = catalog.values_f64(redshift_column)?;

    let mag_columns: Vec<&str> = catalog
        .column_names()
        .filter(|name| name.starts_with(prefix) && *name != redshift_column)
        .collect();
    if mag_columns.is_empty() {
        return Err(EvolutionError::NoMagnitudeColumns(prefix.to_string()));
    }
    info!("found magnitude columns: {}", mag_columns.join(", "));

    let mut table = Catalog::new();
    for name in mag_columns {
        let mags = catalog.values_f64(name)?;
        let corrected = correct_magnitudes(mags.view(), redshift.view(), evolve);
        table.insert(
            format!("{name}_evo"),
            Column::from_f64(corrected)
                .with_unit("mag")
                .with_description("evolution corrected model magnitude"),
        )?;
    }
    Ok(table)
}
