//! Command-line configuration for the host loop.
//!
//! The tick rate is not configurable: movement and the difficulty clock are
//! counted in ticks, so the loop always runs at `TICKS_PER_SECOND`.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::entities::TICKS_PER_SECOND;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "clean_water",
    version,
    about = "Catch clean water drops in a bucket, dodge the polluted ones"
)]
pub struct Config {
    /// Seed for the drop generator; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write log output to this file (logging is off otherwise)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter, in env_logger syntax
    #[arg(long, default_value = "info", value_name = "FILTER")]
    pub log_level: String,
}

/// Wall-clock budget for one tick.
pub fn frame_duration() -> Duration {
    Duration::from_nanos(1_000_000_000 / TICKS_PER_SECOND as u64)
}
