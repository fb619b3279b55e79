//! Fit command implementation
//!
//! Aggregates the input rows and prints the fitted AR(1) model.

use std::io::Write;
use std::path::Path;

use cashrisk_core::flows::{aggregate_detailed, net_values};
use cashrisk_core::StressParams;
use cashrisk_models::fit_ar1_with_diagnostics;
use tracing::{info, warn};

use super::aggregation_options;
use crate::config::{CliConfig, OutputFormat};
use crate::input::read_rows;
use crate::Result;

/// Run the fit command
pub fn run<W: Write>(
    input: &Path,
    stress: StressParams,
    config: &CliConfig,
    out: &mut W,
) -> Result<()> {
    info!("Fitting AR(1) model to {}", input.display());

    let rows = read_rows(input)?;
    let aggregation = aggregate_detailed(&rows, &aggregation_options(stress, config))?;
    let fit = fit_ar1_with_diagnostics(&net_values(&aggregation.flows));

    if fit.diagnostics.n_observations < 2 {
        warn!("Fewer than two observed days; the model has no variance");
    }
    if fit.diagnostics.phi_clamped {
        warn!(
            "Autocorrelation {:.4} clamped to {:.4}",
            fit.diagnostics.raw_phi, fit.model.phi
        );
    }

    let model = fit.model;
    match config.output_format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &fit)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.write_record(["mu", "phi", "sigma", "n_observations"])?;
            writer.write_record([
                model.mu.to_string(),
                model.phi.to_string(),
                model.sigma.to_string(),
                fit.diagnostics.n_observations.to_string(),
            ])?;
            writer.flush()?;
        }
        OutputFormat::Table => {
            writeln!(out, "AR(1) model")?;
            writeln!(out, "  mu             {:>14.4}", model.mu)?;
            writeln!(out, "  phi            {:>14.4}", model.phi)?;
            writeln!(out, "  sigma          {:>14.4}", model.sigma)?;
            writeln!(out, "  stationary std {:>14.4}", model.stationary_std())?;
            writeln!(
                out,
                "  observations   {:>14}",
                fit.diagnostics.n_observations
            )?;
        }
    }

    Ok(())
}
