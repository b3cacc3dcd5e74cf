//! End-to-end runs behind the command line tools.
//!
//! Each run validates its configuration before touching any file, loads the
//! input table with all required columns checked up front, and only writes
//! the output once every column has been computed.

use catalog::{load_catalog, write_catalog};
use log::info;

use crate::naming::{ExplicitNaming, OutputColumns, OutputNaming, SuffixNaming};
use crate::photometry::{
    build_filter_specs, evolve_catalog, required_columns, EvolutionError, FilterSummary,
    PhotometryRealisation, RealisationError,
};
use crate::shared_args::{EvolutionArgs, RealisationArgs};

/// Build the output naming selected on the command line
pub fn output_naming(
    filters: &[String],
    obs_names: Option<&[String]>,
    obserr_names: Option<&[String]>,
) -> Result<Box<dyn OutputNaming>, RealisationError> {
    match (obs_names, obserr_names) {
        (None, None) => Ok(Box::new(SuffixNaming)),
        (Some(observed), Some(errors)) => {
            if observed.len() != filters.len() || errors.len() != filters.len() {
                return Err(RealisationError::Configuration(format!(
                    "number of --obs-names ({}) and --obserr-names ({}) must match --filters ({})",
                    observed.len(),
                    errors.len(),
                    filters.len()
                )));
            }
            let mut naming = ExplicitNaming::new();
            for ((filter, obs), err) in filters.iter().zip(observed).zip(errors) {
                naming.insert(filter.clone(), OutputColumns::new(obs.clone(), err.clone()));
            }
            Ok(Box::new(naming))
        }
        _ => Err(RealisationError::Configuration(
            "--obs-names and --obserr-names must be given together".to_string(),
        )),
    }
}

/// Run the photometry realisation described by `args`.
///
/// # Errors
/// * `RealisationError::Configuration` - inconsistent arguments, raised before
///   the input table is opened
/// * `RealisationError::Catalog` - input cannot be read (including missing
///   columns) or output cannot be written
/// * `RealisationError::InvalidSnFactor` - a correction factor outside `(0, 1]`
pub fn run_realisation(args: &RealisationArgs) -> Result<Vec<FilterSummary>, RealisationError> {
    let config = args.config();
    config.validate()?;
    let filters = build_filter_specs(&args.filters, &args.limits, args.sn_factors.as_deref())?;
    let naming = output_naming(
        &args.filters,
        args.obs_names.as_deref(),
        args.obserr_names.as_deref(),
    )?;

    let data = load_catalog(&args.io.input, args.io.i_format, &required_columns(&filters))?;
    info!("use input filters: {}", args.filters.join(", "));

    let mut engine = PhotometryRealisation::new(config)?;
    let realised = engine.realise_catalog(&data, &filters, naming.as_ref())?;

    info!("write table to: {}", args.io.output.display());
    write_catalog(&realised.table, &args.io.output, args.io.o_format)?;
    Ok(realised.summaries)
}

/// Run the magnitude evolution correction described by `args`
pub fn run_evolution(args: &EvolutionArgs) -> Result<usize, EvolutionError> {
    let data = load_catalog(&args.io.input, args.io.i_format, &[args.redshift.as_str()])?;
    if !args.evo {
        info!("evolution correction disabled, copying magnitudes");
    }

    let table = evolve_catalog(&data, &args.redshift, &args.prefix, args.evo)?;

    info!("write table to: {}", args.io.output.display());
    write_catalog(&table, &args.io.output, args.io.o_format)?;
    Ok(table.num_columns())
}
