//! Photometry models for mock catalogues

pub mod evolution;
pub mod magnitude;
pub mod realisation;

pub use evolution::{correct_magnitudes, evolution_correction, evolve_catalog, EvolutionError};
pub use realisation::{
    build_filter_specs, check_sn_factors, required_columns, FilterRealisation, FilterSpec,
    FilterSummary, PhotometryRealisation, RealisationConfig, RealisationError, RealisedCatalog,
};
