//! Photometric noise realisation against survey detection limits.
//!
//! Turns noiseless model magnitudes into observed magnitudes and errors. For
//! each filter the limiting magnitude defines a constant flux error, one
//! Gaussian flux realisation is drawn per object, and objects whose realised
//! signal-to-noise falls below the detection threshold are flagged with
//! sentinel values.
//!
//! # Per-filter model
//! 1. `flux = 10^(-0.4 m)`
//! 2. `flux_err = 10^(-0.4 L) / significance`, divided by the per-object
//!    extended source factor `c` in `(0, 1]` when present
//! 3. `real_flux ~ Normal(flux, flux_err)`, clamped to [`FLUX_FLOOR`] if `<= 0`
//! 4. `real_mag = -2.5 log10(real_flux)`
//! 5. `SN = max(real_flux / flux_err, sn_limit)`, `real_mag_err = (2.5 / ln 10) / SN`
//! 6. not detected if `SN < sn_detect` or `real_mag < 5`: magnitude becomes
//!    [`NON_DETECTION_MAGNITUDE`] and the error becomes the one-sigma limit
//!
//! Results are stored in single precision.

use catalog::{Catalog, CatalogError, Column};
use log::info;
use ndarray::{Array1, ArrayView1, Zip};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::magnitude::{
    flux_to_mag, mag_to_flux, one_sigma_limit, sn_to_mag_err, FLUX_FLOOR, MIN_VALID_MAGNITUDE,
    NON_DETECTION_MAGNITUDE,
};
use crate::naming::{OutputColumns, OutputNaming};
use crate::noise::{NormalSource, SeededNormal, DEFAULT_SEED};

/// Errors raised while setting up or running a realisation
#[derive(Error, Debug)]
pub enum RealisationError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error(
        "S/N factor column '{column}' has value {value} at row {row}, expected 0 < factor <= 1"
    )]
    InvalidSnFactor {
        column: String,
        row: usize,
        value: f64,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Noise model parameters shared by all filters of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealisationConfig {
    /// Significance of detection against the magnitude limits
    pub significance: f64,
    /// Lower numerical limit for the signal-to-noise ratio
    pub sn_limit: f64,
    /// Limiting signal-to-noise ratio for object detection
    pub sn_detect: f64,
    /// String seeding the random stream
    pub seed: String,
}

impl Default for RealisationConfig {
    fn default() -> Self {
        Self {
            significance: 1.0,
            sn_limit: 0.2,
            sn_detect: 1.0,
            seed: DEFAULT_SEED.to_string(),
        }
    }
}

impl RealisationConfig {
    pub fn validate(&self) -> Result<(), RealisationError> {
        if !(self.significance.is_finite() && self.significance > 0.0) {
            return Err(RealisationError::Configuration(format!(
                "--significance must be a positive number, got {}",
                self.significance
            )));
        }
        if !(self.sn_limit.is_finite() && self.sn_limit > 0.0) {
            return Err(RealisationError::Configuration(format!(
                "--sn-limit must be a positive number, got {}",
                self.sn_limit
            )));
        }
        if !self.sn_detect.is_finite() {
            return Err(RealisationError::Configuration(format!(
                "--sn-detect must be finite, got {}",
                self.sn_detect
            )));
        }
        Ok(())
    }
}

/// One filter of a run: the model magnitude column, its limit and the
/// optional extended source S/N factor column
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    pub column: String,
    pub limit: f64,
    pub sn_factor: Option<String>,
}

/// Pair up filter columns with their limits and S/N factor columns.
///
/// Fails with `RealisationError::Configuration` if the list lengths differ.
pub fn build_filter_specs(
    filters: &[String],
    limits: &[f64],
    sn_factors: Option<&[String]>,
) -> Result<Vec<FilterSpec>, RealisationError> {
    if filters.is_empty() {
        return Err(RealisationError::Configuration(
            "no --filters given".to_string(),
        ));
    }
    if limits.len() != filters.len() {
        return Err(RealisationError::Configuration(format!(
            "number of input --limits ({}) does not match --filters ({})",
            limits.len(),
            filters.len()
        )));
    }
    if let Some(factors) = sn_factors {
        if factors.len() != filters.len() {
            return Err(RealisationError::Configuration(format!(
                "number of input --sn-factors ({}) does not match --filters ({})",
                factors.len(),
                filters.len()
            )));
        }
    }
    if let Some(limit) = limits.iter().find(|l| !l.is_finite()) {
        return Err(RealisationError::Configuration(format!(
            "magnitude limits must be finite, got {}",
            limit
        )));
    }

    Ok(filters
        .iter()
        .zip(limits)
        .enumerate()
        .map(|(i, (column, &limit))| FilterSpec {
            column: column.clone(),
            limit,
            sn_factor: sn_factors.map(|f| f[i].clone()),
        })
        .collect())
}

/// Every table column a run reads, in filter order
pub fn required_columns(filters: &[FilterSpec]) -> Vec<String> {
    let mut columns: Vec<String> = filters.iter().map(|f| f.column.clone()).collect();
    columns.extend(filters.iter().filter_map(|f| f.sn_factor.clone()));
    columns
}

/// Check that all S/N correction factors lie in `(0, 1]`
pub fn check_sn_factors(column: &str, factors: ArrayView1<f64>) -> Result<(), RealisationError> {
    match factors
        .iter()
        .enumerate()
        .find(|&(_, &c)| !(c > 0.0 && c <= 1.0))
    {
        Some((row, &value)) => Err(RealisationError::InvalidSnFactor {
            column: column.to_string(),
            row,
            value,
        }),
        None => Ok(()),
    }
}

/// Realised photometry of a single filter
#[derive(Debug, Clone, PartialEq)]
pub struct FilterRealisation {
    pub magnitude: Array1<f32>,
    pub magnitude_error: Array1<f32>,
    /// Number of objects passing the detection rule
    pub detected: usize,
}

impl FilterRealisation {
    pub fn len(&self) -> usize {
        self.magnitude.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitude.is_empty()
    }
}

/// Detection statistics of one realised filter
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSummary {
    pub filter: String,
    pub observed_column: String,
    pub detected: usize,
    pub total: usize,
}

/// Output table of a catalogue realisation with per-filter statistics
#[derive(Debug, Clone)]
pub struct RealisedCatalog {
    pub table: Catalog,
    pub summaries: Vec<FilterSummary>,
}

/// Realisation engine owning the noise model and its random stream
#[derive(Debug, Clone)]
pub struct PhotometryRealisation<N> {
    config: RealisationConfig,
    noise: N,
}

impl PhotometryRealisation<SeededNormal> {
    /// Engine drawing from the stream seeded by `config.seed`
    pub fn new(config: RealisationConfig) -> Result<Self, RealisationError> {
        let noise = SeededNormal::from_seed_str(&config.seed);
        Self::with_noise(config, noise)
    }
}

impl<N: NormalSource> PhotometryRealisation<N> {
    /// Engine drawing from an explicit noise source; `config.seed` is ignored
    pub fn with_noise(config: RealisationConfig, noise: N) -> Result<Self, RealisationError> {
        config.validate()?;
        Ok(Self { config, noise })
    }

    pub fn config(&self) -> &RealisationConfig {
        &self.config
    }

    /// Realise one filter.
    ///
    /// Consumes exactly one deviate per object, in row order. `sn_factor`
    /// values must lie in `(0, 1]` (see [`check_sn_factors`]).
    ///
    /// # Panics
    /// If `sn_factor` is given with a different length than `model_mags`.
    pub fn realise_filter(
        &mut self,
        model_mags: ArrayView1<f64>,
        limit: f64,
        sn_factor: Option<ArrayView1<f64>>,
    ) -> FilterRealisation {
        let cfg = &self.config;
        let n = model_mags.len();

        let flux = model_mags.mapv(mag_to_flux);
        let point_source_err = mag_to_flux(limit) / cfg.significance;
        let flux_err = match sn_factor {
            Some(factors) => {
                assert_eq!(
                    factors.len(),
                    n,
                    "S/N factor length must match number of objects"
                );
                factors.mapv(|c| point_source_err / c)
            }
            None => Array1::from_elem(n, point_source_err),
        };

        let draws: Array1<f64> = (0..n).map(|_| self.noise.standard_normal()).collect();
        let real_flux =
            (&flux + &(&flux_err * &draws)).mapv(|f| if f <= 0.0 { FLUX_FLOOR } else { f });

        let real_mag = real_flux.mapv(flux_to_mag);
        let sn = Zip::from(&real_flux)
            .and(&flux_err)
            .map_collect(|&f, &e| (f / e).max(cfg.sn_limit));

        let not_detected = Zip::from(&real_mag).and(&sn).map_collect(|&m, &s| {
            s < cfg.sn_detect || m < MIN_VALID_MAGNITUDE || m.is_nan()
        });
        let limit_err = one_sigma_limit(limit, cfg.significance);

        let magnitude = Zip::from(&real_mag)
            .and(&not_detected)
            .map_collect(|&m, &nd| (if nd { NON_DETECTION_MAGNITUDE } else { m }) as f32);
        let magnitude_error = Zip::from(&sn)
            .and(&not_detected)
            .map_collect(|&s, &nd| (if nd { limit_err } else { sn_to_mag_err(s) }) as f32);
        let detected = not_detected.iter().filter(|&&nd| !nd).count();

        FilterRealisation {
            magnitude,
            magnitude_error,
            detected,
        }
    }

    /// Realise every filter of `catalog` into a new table.
    ///
    /// Columns are validated and S/N factors range checked before the first
    /// draw, so a failing run consumes no randomness and produces nothing.
    /// Filters are processed in the given order; the output holds an observed
    /// magnitude and error column per filter, named by `naming`.
    pub fn realise_catalog(
        &mut self,
        catalog: &Catalog,
        filters: &[FilterSpec],
        naming: &dyn OutputNaming,
    ) -> Result<RealisedCatalog, RealisationError> {
        catalog.require(&required_columns(filters))?;
        let outputs = output_columns(filters, naming)?;

        let mut inputs = Vec::with_capacity(filters.len());
        for spec in filters {
            let mags = catalog.values_f64(&spec.column)?;
            let factors = match &spec.sn_factor {
                Some(column) => {
                    let factors = catalog.values_f64(column)?;
                    check_sn_factors(column, factors.view())?;
                    Some(factors)
                }
                None => None,
            };
            inputs.push((spec, mags, factors));
        }

        let mut table = Catalog::new();
        let mut summaries = Vec::with_capacity(filters.len());
        for ((spec, mags, factors), names) in inputs.into_iter().zip(outputs) {
            info!("processing filter '{}'", spec.column);
            let result = self.realise_filter(
                mags.view(),
                spec.limit,
                factors.as_ref().map(|f| f.view()),
            );
            info!(
                "filter '{}': {} / {} objects detected",
                spec.column,
                result.detected,
                result.len()
            );
            summaries.push(FilterSummary {
                filter: spec.column.clone(),
                observed_column: names.observed.clone(),
                detected: result.detected,
                total: result.len(),
            });

            table.insert(
                names.observed,
                Column::from_f32(result.magnitude)
                    .with_unit("mag")
                    .with_description("realisation of model magnitude"),
            )?;
            table.insert(
                names.error,
                Column::from_f32(result.magnitude_error)
                    .with_unit("mag")
                    .with_description("error of realisation of model magnitude"),
            )?;
        }
        Ok(RealisedCatalog { table, summaries })
    }
}

fn output_columns(
    filters: &[FilterSpec],
    naming: &dyn OutputNaming,
) -> Result<Vec<OutputColumns>, RealisationError> {
    let mut outputs: Vec<OutputColumns> = Vec::with_capacity(filters.len());
    for spec in filters {
        let names = naming.output_columns(&spec.column).ok_or_else(|| {
            RealisationError::Configuration(format!(
                "no output column names for filter '{}'",
                spec.column
            ))
        })?;
        let taken = outputs
            .iter()
            .flat_map(|o| [&o.observed, &o.error])
            .any(|n| *n == names.observed || *n == names.error);
        if taken || names.observed == names.error {
            return Err(RealisationError::Configuration(format!(
                "output columns for filter '{}' clash: {} / {}",
                spec.column, names.observed, names.error
            )));
        }
        outputs.push(names);
    }
    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::SuffixNaming;
    use crate::noise::FixedDeviates;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn zero_noise_engine(config: RealisationConfig) -> PhotometryRealisation<FixedDeviates> {
        PhotometryRealisation::with_noise(config, FixedDeviates::new(vec![0.0])).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = RealisationConfig::default();
        assert_eq!(config.significance, 1.0);
        assert_eq!(config.sn_limit, 0.2);
        assert_eq!(config.sn_detect, 1.0);
        assert_eq!(config.seed, "KV450");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_json() {
        let text = r#"{"significance": 5.0, "sn_limit": 0.2, "sn_detect": 1.0, "seed": "KV1000"}"#;
        let config: RealisationConfig = serde_json::from_str(text).unwrap();
        assert_eq!(config.significance, 5.0);
        assert_eq!(config.seed, "KV1000");

        let back: RealisationConfig =
            serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let bad = [
            RealisationConfig {
                significance: 0.0,
                ..Default::default()
            },
            RealisationConfig {
                significance: f64::NAN,
                ..Default::default()
            },
            RealisationConfig {
                sn_limit: -0.2,
                ..Default::default()
            },
            RealisationConfig {
                sn_detect: f64::INFINITY,
                ..Default::default()
            },
        ];
        for config in bad {
            assert!(matches!(
                config.validate(),
                Err(RealisationError::Configuration(_))
            ));
        }
    }

    #[test]
    fn test_build_filter_specs_length_checks() {
        let filters = vec!["u".to_string(), "g".to_string(), "r".to_string()];

        let err = build_filter_specs(&filters, &[24.0, 25.0], None).unwrap_err();
        assert!(matches!(err, RealisationError::Configuration(msg) if msg.contains("--limits")));

        let factors = vec!["sn_u".to_string()];
        let err = build_filter_specs(&filters, &[24.0, 25.0, 25.0], Some(factors.as_slice()))
            .unwrap_err();
        assert!(
            matches!(err, RealisationError::Configuration(msg) if msg.contains("--sn-factors"))
        );

        let specs = build_filter_specs(&filters, &[24.0, 25.0, 25.5], None).unwrap();
        assert_eq!(specs.len(), 3);
        assert_eq!(specs[2].column, "r");
        assert_eq!(specs[2].limit, 25.5);
        assert!(specs[2].sn_factor.is_none());
    }

    #[test]
    fn test_required_columns_lists_filters_then_factors() {
        let filters = vec!["g".to_string(), "r".to_string()];
        let factors = vec!["sn_g".to_string(), "sn_r".to_string()];
        let specs = build_filter_specs(&filters, &[25.0, 24.5], Some(factors.as_slice())).unwrap();
        assert_eq!(required_columns(&specs), vec!["g", "r", "sn_g", "sn_r"]);
    }

    #[test]
    fn test_check_sn_factors() {
        assert!(check_sn_factors("c", array![0.1, 0.5, 1.0].view()).is_ok());

        for bad in [0.0, -0.5, 1.5, f64::NAN] {
            let err = check_sn_factors("c", array![1.0, bad].view()).unwrap_err();
            assert!(matches!(err, RealisationError::InvalidSnFactor { row: 1, .. }));
        }
    }

    #[test]
    fn test_noiseless_detected_object_formulae() {
        let mut engine = zero_noise_engine(RealisationConfig::default());
        let result = engine.realise_filter(array![20.0].view(), 24.5, None);

        let flux_err = mag_to_flux(24.5);
        let sn = mag_to_flux(20.0) / flux_err;

        assert_eq!(result.detected, 1);
        assert_eq!(result.magnitude[0], flux_to_mag(mag_to_flux(20.0)) as f32);
        assert_eq!(result.magnitude_error[0], sn_to_mag_err(sn) as f32);
        assert_relative_eq!(result.magnitude[0], 20.0, epsilon = 1e-5);
    }

    #[test]
    fn test_faint_object_gets_sentinels() {
        let mut engine = zero_noise_engine(RealisationConfig::default());
        let result = engine.realise_filter(array![20.0, 25.0, 30.0].view(), 24.5, None);

        assert_eq!(result.magnitude[2], 99.0);
        assert_eq!(result.magnitude_error[2], 24.5);
        // 25 mag against a 24.5 one-sigma limit has S/N ~0.63
        assert_eq!(result.magnitude[1], 99.0);
        assert_eq!(result.detected, 1);
    }

    #[test]
    fn test_non_detection_error_uses_one_sigma_limit() {
        let config = RealisationConfig {
            significance: 5.0,
            ..Default::default()
        };
        let mut engine = zero_noise_engine(config);
        let result = engine.realise_filter(array![30.0].view(), 24.5, None);

        assert_eq!(result.magnitude[0], 99.0);
        assert_eq!(
            result.magnitude_error[0],
            (24.5 - 2.5 * 5f64.log10()) as f32
        );
    }

    #[test]
    fn test_negative_realised_flux_is_clamped() {
        // a -10 sigma draw pushes every flux below zero
        let mut engine = PhotometryRealisation::with_noise(
            RealisationConfig::default(),
            FixedDeviates::new(vec![-10.0]),
        )
        .unwrap();
        let result = engine.realise_filter(array![24.0, 26.0].view(), 24.5, None);

        for i in 0..2 {
            assert_eq!(result.magnitude[i], 99.0);
            assert_eq!(result.magnitude_error[i], 24.5);
        }
        assert_eq!(result.detected, 0);
    }

    #[test]
    fn test_very_bright_realisation_is_rejected() {
        // magnitudes brighter than 5 are unphysical for these surveys
        let mut engine = zero_noise_engine(RealisationConfig::default());
        let result = engine.realise_filter(array![4.0, 6.0].view(), 24.5, None);

        assert_eq!(result.magnitude[0], 99.0);
        assert_relative_eq!(result.magnitude[1], 6.0, epsilon = 1e-5);
    }

    #[test]
    fn test_sn_limit_floors_magnitude_error() {
        let config = RealisationConfig {
            sn_limit: 0.5,
            sn_detect: 0.1,
            ..Default::default()
        };
        let mut engine = zero_noise_engine(config);
        // S/N of a 28 mag object against a 24.5 limit is ~0.04, floored to 0.5
        let result = engine.realise_filter(array![28.0].view(), 24.5, None);

        assert_eq!(result.detected, 1);
        assert_eq!(result.magnitude_error[0], sn_to_mag_err(0.5) as f32);
    }

    #[test]
    fn test_sn_factor_inflates_error() {
        let mags = array![21.0, 21.0, 21.0];
        let factors = array![1.0, 0.5, 0.25];

        let mut engine = zero_noise_engine(RealisationConfig::default());
        let result = engine.realise_filter(mags.view(), 24.5, Some(factors.view()));

        // noiseless, so error scales exactly with 1 / factor
        assert_relative_eq!(
            result.magnitude_error[1] / result.magnitude_error[0],
            2.0,
            epsilon = 1e-5
        );
        assert!(result.magnitude_error[2] > result.magnitude_error[1]);
    }

    #[test]
    fn test_error_never_decreases_as_factor_drops() {
        // the same deviates for every factor value
        let mags = Array1::linspace(18.0, 24.0, 50);
        let mut previous: Option<Array1<f32>> = None;

        for c in [1.0, 0.8, 0.6, 0.4, 0.2] {
            let mut engine = PhotometryRealisation::new(RealisationConfig {
                seed: "monotonic".to_string(),
                ..Default::default()
            })
            .unwrap();
            let factors = Array1::from_elem(mags.len(), c);
            let result = engine.realise_filter(mags.view(), 24.5, Some(factors.view()));

            if let Some(prev) = &previous {
                for (i, (&now, &before)) in result.magnitude_error.iter().zip(prev).enumerate() {
                    if result.magnitude[i] != 99.0 {
                        assert!(now >= before, "row {}: {} < {}", i, now, before);
                    }
                }
            }
            previous = Some(result.magnitude_error);
        }
    }

    #[test]
    fn test_one_draw_per_object() {
        let noise = FixedDeviates::new(vec![0.0]);
        let mut engine =
            PhotometryRealisation::with_noise(RealisationConfig::default(), noise).unwrap();
        engine.realise_filter(Array1::<f64>::zeros(7).view(), 24.5, None);
        engine.realise_filter(Array1::<f64>::zeros(3).view(), 24.5, None);
        assert_eq!(engine.noise.consumed(), 10);
    }

    #[test]
    fn test_output_is_total() {
        let mut engine = PhotometryRealisation::new(RealisationConfig::default()).unwrap();
        let mags = Array1::linspace(15.0, 35.0, 500);
        let result = engine.realise_filter(mags.view(), 24.5, None);

        assert_eq!(result.len(), 500);
        assert!(result.magnitude.iter().all(|m| m.is_finite()));
        assert!(result.magnitude_error.iter().all(|e| e.is_finite() && *e > 0.0));
    }

    #[test]
    fn test_realise_catalog_builds_named_columns() {
        let mut table = Catalog::new();
        table
            .insert("mag_g_evo", Column::from_f64(array![21.0, 30.0]))
            .unwrap();
        table
            .insert("r_mag", Column::from_f64(array![22.0, 31.0]))
            .unwrap();

        let filters = vec!["mag_g_evo".to_string(), "r_mag".to_string()];
        let specs = build_filter_specs(&filters, &[25.0, 24.5], None).unwrap();
        let mut engine = zero_noise_engine(RealisationConfig::default());
        let realised = engine
            .realise_catalog(&table, &specs, &SuffixNaming)
            .unwrap();
        let out = &realised.table;

        let names: Vec<&str> = out.column_names().collect();
        assert_eq!(
            names,
            vec!["mag_g_obs", "mag_g_obserr", "r_obs_mag", "r_obserr_mag"]
        );
        let obs = out.column("r_obs_mag").unwrap();
        assert_eq!(obs.unit.as_deref(), Some("mag"));
        assert_eq!(obs.data.dtype(), "float32");
        assert_eq!(obs.data.get_f64(1), Some(99.0));

        assert_eq!(realised.summaries.len(), 2);
        assert_eq!(realised.summaries[1].filter, "r_mag");
        assert_eq!(realised.summaries[1].observed_column, "r_obs_mag");
        assert_eq!(realised.summaries[1].detected, 1);
        assert_eq!(realised.summaries[1].total, 2);
    }

    #[test]
    fn test_realise_catalog_missing_column_draws_nothing() {
        let mut table = Catalog::new();
        table
            .insert("mag_r", Column::from_f64(array![21.0]))
            .unwrap();

        let filters = vec!["mag_r".to_string(), "mag_i".to_string()];
        let specs = build_filter_specs(&filters, &[24.5, 24.0], None).unwrap();
        let mut engine = zero_noise_engine(RealisationConfig::default());
        let err = engine
            .realise_catalog(&table, &specs, &SuffixNaming)
            .unwrap_err();

        assert!(matches!(
            err,
            RealisationError::Catalog(CatalogError::MissingColumn(name)) if name == "mag_i"
        ));
        assert_eq!(engine.noise.consumed(), 0);
    }

    #[test]
    fn test_realise_catalog_rejects_invalid_factor_before_drawing() {
        let mut table = Catalog::new();
        table
            .insert("mag_r", Column::from_f64(array![21.0, 22.0]))
            .unwrap();
        table
            .insert("sn_r", Column::from_f64(array![0.5, 0.0]))
            .unwrap();

        let filters = vec!["mag_r".to_string()];
        let factors = vec!["sn_r".to_string()];
        let specs = build_filter_specs(&filters, &[24.5], Some(factors.as_slice())).unwrap();
        let mut engine = zero_noise_engine(RealisationConfig::default());
        let err = engine
            .realise_catalog(&table, &specs, &SuffixNaming)
            .unwrap_err();

        assert!(matches!(err, RealisationError::InvalidSnFactor { row: 1, .. }));
        assert_eq!(engine.noise.consumed(), 0);
    }

    #[test]
    fn test_realise_catalog_rejects_clashing_names() {
        let mut table = Catalog::new();
        table
            .insert("r_evo", Column::from_f64(array![21.0]))
            .unwrap();
        table.insert("r", Column::from_f64(array![21.0])).unwrap();

        // "r_evo" and "r" both map to r_obs / r_obserr
        let filters = vec!["r_evo".to_string(), "r".to_string()];
        let specs = build_filter_specs(&filters, &[24.5, 24.5], None).unwrap();
        let mut engine = zero_noise_engine(RealisationConfig::default());
        assert!(matches!(
            engine.realise_catalog(&table, &specs, &SuffixNaming),
            Err(RealisationError::Configuration(_))
        ));
    }
}
