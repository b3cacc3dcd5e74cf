use crate::noise::DEFAULT_SEED;
use crate::photometry::RealisationConfig;
use catalog::TableFormat;
use clap::{Args, Parser};
use std::path::PathBuf;

/// Input / output table arguments shared by all catalogue tools
#[derive(Args, Debug, Clone)]
pub struct TableIoArgs {
    /// File path of input data table
    #[arg(short, long)]
    pub input: PathBuf,

    /// Format of the input table (csv, json, fits)
    #[arg(long, default_value = "csv")]
    pub i_format: TableFormat,

    /// File path of output table, overwritten if it exists
    #[arg(short, long)]
    pub output: PathBuf,

    /// Format of the output table (csv, json, fits)
    #[arg(long, default_value = "csv")]
    pub o_format: TableFormat,
}

/// Create a data table with a photometry realisation based on a table with
/// simulated model magnitudes and observational detection limits
#[derive(Parser, Debug, Clone)]
#[command(name = "photometry_realisation", version)]
pub struct RealisationArgs {
    #[command(flatten)]
    pub io: TableIoArgs,

    /// List of table column names providing model magnitudes
    #[arg(long, num_args = 1.., required = true)]
    pub filters: Vec<String>,

    /// Magnitude limits for each entry in --filters
    #[arg(long, num_args = 1.., required = true)]
    pub limits: Vec<f64>,

    /// Significance of detection against magnitude limits
    #[arg(long, default_value_t = 1.0)]
    pub significance: f64,

    /// Lower numerical limit for the signal-to-noise ratio
    #[arg(long, default_value_t = 0.2)]
    pub sn_limit: f64,

    /// Limiting signal-to-noise ratio for object detection
    #[arg(long, default_value_t = 1.0)]
    pub sn_detect: f64,

    /// List of table column names of correction factors for the
    /// signal-to-noise ratio of extended sources, one for each --filters
    #[arg(long, num_args = 1..)]
    pub sn_factors: Option<Vec<String>>,

    /// String to seed the random generator
    #[arg(long, default_value = DEFAULT_SEED)]
    pub seed: String,

    /// Explicit observed magnitude column names, one for each --filters
    /// (default: derived from the filter column names)
    #[arg(long, num_args = 1.., requires = "obserr_names")]
    pub obs_names: Option<Vec<String>>,

    /// Explicit observed magnitude error column names, one for each --filters
    #[arg(long, num_args = 1.., requires = "obs_names")]
    pub obserr_names: Option<Vec<String>>,
}

impl RealisationArgs {
    /// Noise model parameters selected on the command line
    pub fn config(&self) -> RealisationConfig {
        RealisationConfig {
            significance: self.significance,
            sn_limit: self.sn_limit,
            sn_detect: self.sn_detect,
            seed: self.seed.clone(),
        }
    }
}

/// Apply the magnitude evolution correction to all model magnitude columns
#[derive(Parser, Debug, Clone)]
#[command(name = "mag_evolution", version)]
pub struct EvolutionArgs {
    #[command(flatten)]
    pub io: TableIoArgs,

    /// Column name of the true galaxy redshift
    #[arg(long, default_value = "redshift")]
    pub redshift: String,

    /// Prefix selecting the model magnitude columns
    #[arg(long, default_value = "mag")]
    pub prefix: String,

    /// Apply the evolution correction (false copies magnitudes unchanged)
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub evo: bool,
}
