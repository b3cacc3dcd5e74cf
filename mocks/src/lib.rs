//! Mock catalogue photometry tools.
//!
//! Post-processing steps applied to simulated galaxy catalogues before they
//! are compared with survey data:
//!
//! - [`photometry::evolution`]: magnitude evolution correction of model
//!   magnitudes
//! - [`photometry::realisation`]: noisy observed magnitudes against survey
//!   detection limits, with sentinel values for non-detections
//! - [`noise`]: reproducible random streams seeded from a string
//! - [`naming`]: names of the realised output columns
//!
//! The `photometry_realisation` and `mag_evolution` binaries wrap
//! [`pipeline`] with the command line arguments in [`shared_args`].

pub mod naming;
pub mod noise;
pub mod photometry;
pub mod pipeline;
pub mod shared_args;
