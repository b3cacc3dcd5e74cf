//! Photometry realisation for mock catalogues
//!
//! Draws a noisy magnitude realisation for each model magnitude column based
//! on the survey limiting magnitudes. Objects below the detection threshold
//! get magnitude 99 and the one-sigma limiting magnitude as their error.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --bin photometry_realisation -- \
//!     -i mocks_full.csv \
//!     --filters mag_u_evo mag_g_evo mag_r_evo mag_i_evo \
//!     --limits 24.23 25.12 25.02 23.68 \
//!     --significance 5 \
//!     --sn-factors sn_factor_u sn_factor_g sn_factor_r sn_factor_i \
//!     -o magnitudes_observed.csv
//! ```
//!
//! Progress and detection counts are logged at `info` (`RUST_LOG=info`),
//! the derived seed words at `debug`.

use clap::Parser;
use log::info;
use mocks::pipeline::run_realisation;
use mocks::shared_args::RealisationArgs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = RealisationArgs::parse();

    let summaries = run_realisation(&args)?;
    for summary in &summaries {
        info!(
            "{:<20} -> {:<20} {:>10} / {:<10} detected",
            summary.filter, summary.observed_column, summary.detected, summary.total
        );
    }

    Ok(())
}
