//! Check command implementation
//!
//! Prints the effective configuration and engine limits.

use std::io::Write;

use cashrisk_engine::sim::{MAX_HORIZON_DAYS, MAX_PATHS};
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    info!("Checking configuration...");

    writeln!(out, "cashrisk {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "Engine limits: {} paths, {} horizon days", MAX_PATHS, MAX_HORIZON_DAYS)?;
    writeln!(out)?;
    writeln!(out, "# Effective configuration")?;
    write!(out, "{}", config.to_toml()?)?;

    if config.num_paths > MAX_PATHS || config.horizon_days > MAX_HORIZON_DAYS {
        writeln!(out)?;
        writeln!(out, "WARNING: configured run exceeds engine limits")?;
    }

    Ok(())
}
