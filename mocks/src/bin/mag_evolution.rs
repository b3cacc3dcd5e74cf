//! Magnitude evolution correction for mock catalogues
//!
//! Writes a table with a `<name>_evo` column for every model magnitude column
//! (selected by `--prefix`), corrected for luminosity evolution using the
//! true redshift column.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release --bin mag_evolution -- \
//!     -i dc2.fits --i-format fits --redshift redshift -o dc2_evo.csv
//! ```

use clap::Parser;
use log::info;
use mocks::pipeline::run_evolution;
use mocks::shared_args::EvolutionArgs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = EvolutionArgs::parse();

    let n_columns = run_evolution(&args)?;
    info!("wrote {} evolution corrected columns", n_columns);

    Ok(())
}
