//! Simulate command implementation
//!
//! Runs the full aggregate → fit → simulate pipeline and prints the fan,
//! the headline KPIs and any threshold breaches.

use std::io::Write;
use std::path::Path;

use cashrisk_core::StressParams;
use cashrisk_engine::SimulationParams;
use cashrisk_models::Ar1Fit;
use cashrisk_risk::{run_pipeline, FanPoint, OverdraftProfile, RiskFlag, RiskKpis};
use serde::Serialize;
use tracing::{info, warn};

use super::{aggregation_options, days_or_infinity};
use crate::config::{CliConfig, OutputFormat};
use crate::input::read_rows;
use crate::Result;

#[derive(Serialize)]
struct SimulationReport<'a> {
    starting_cash: f64,
    horizon_days: usize,
    num_paths: usize,
    seed: Option<u64>,
    fit: &'a Ar1Fit,
    kpis: &'a RiskKpis,
    overdraft: &'a OverdraftProfile,
    flags: &'a [RiskFlag],
    fan: &'a [FanPoint],
}

/// Run the simulate command
pub fn run<W: Write>(
    input: &Path,
    stress: StressParams,
    starting_cash: f64,
    config: &CliConfig,
    out: &mut W,
) -> Result<()> {
    info!("Starting simulation...");
    info!("  Input: {}", input.display());
    info!("  Starting cash: {}", starting_cash);
    info!("  Horizon: {} days", config.horizon_days);
    info!("  Monte Carlo paths: {}", config.num_paths);

    let rows = read_rows(input)?;
    let params = SimulationParams::builder()
        .horizon_days(config.horizon_days)
        .n_paths(config.num_paths)
        .maybe_seed(config.seed)
        .build()?;

    let report = run_pipeline(
        &rows,
        &aggregation_options(stress, config),
        starting_cash,
        &params,
    )?;
    let result = &report.simulation;
    let flags = result.kpis.breaches(&config.thresholds());
    for flag in &flags {
        warn!("{}", flag);
    }

    match config.output_format {
        OutputFormat::Json => {
            let summary = SimulationReport {
                starting_cash,
                horizon_days: config.horizon_days,
                num_paths: config.num_paths,
                seed: config.seed,
                fit: &report.fit,
                kpis: &result.kpis,
                overdraft: &result.overdraft,
                flags: &flags,
                fan: &result.fan,
            };
            serde_json::to_writer_pretty(&mut *out, &summary)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.write_record(["day", "date", "p5", "p50", "p95"])?;
            for point in &result.fan {
                writer.write_record([
                    point.day.to_string(),
                    point.date.map(|d| d.to_string()).unwrap_or_default(),
                    point.p5.to_string(),
                    point.p50.to_string(),
                    point.p95.to_string(),
                ])?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => write_table(
            out,
            &report.fit,
            result.kpis,
            &result.overdraft,
            &flags,
            &result.fan,
        )?,
    }

    info!("Simulation complete");
    Ok(())
}

fn write_table<W: Write>(
    out: &mut W,
    fit: &Ar1Fit,
    kpis: RiskKpis,
    overdraft: &OverdraftProfile,
    flags: &[RiskFlag],
    fan: &[FanPoint],
) -> std::io::Result<()> {
    let model = fit.model;
    writeln!(
        out,
        "Model: mu={:.2} phi={:.4} sigma={:.2}",
        model.mu, model.phi, model.sigma
    )?;
    writeln!(out, "┌───────┬────────────┬──────────────┬──────────────┬──────────────┐")?;
    writeln!(out, "│ Day   │ Date       │ P5           │ P50          │ P95          │")?;
    writeln!(out, "├───────┼────────────┼──────────────┼──────────────┼──────────────┤")?;
    for point in fan {
        let date = point.date.map(|d| d.to_string()).unwrap_or_default();
        writeln!(
            out,
            "│ {:>5} │ {:<10} │ {:>12.2} │ {:>12.2} │ {:>12.2} │",
            point.day, date, point.p5, point.p50, point.p95
        )?;
    }
    writeln!(out, "└───────┴────────────┴──────────────┴──────────────┴──────────────┘")?;

    writeln!(out, "Cash-flow at risk      {:>12.2}", kpis.cfar)?;
    writeln!(out, "Expected shortfall     {:>12.2}", kpis.expected_shortfall)?;
    writeln!(
        out,
        "Overdraft probability  {:>11.1}%",
        kpis.probability_overdraft * 100.0
    )?;
    writeln!(
        out,
        "Runway (p5)            {:>12}",
        days_or_infinity(kpis.runway_days_p5)
    )?;
    writeln!(
        out,
        "First overdraft (p50)  {:>12}",
        days_or_infinity(overdraft.first_day_p50)
    )?;

    if flags.is_empty() {
        writeln!(out, "No alerts")?;
    } else {
        for flag in flags {
            writeln!(out, "ALERT: {}", flag)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn burn_history() -> tempfile::NamedTempFile {
        let mut content = String::from("date,inflow,outflow\n");
        for day in 1..=20 {
            content.push_str(&format!("2024-04-{:02},0,50\n", day));
        }
        input_file(&content)
    }

    fn config(format: OutputFormat) -> CliConfig {
        CliConfig {
            horizon_days: 10,
            num_paths: 100,
            seed: Some(42),
            output_format: format,
            ..Default::default()
        }
    }

    #[test]
    fn test_deterministic_burn_csv() {
        let file = burn_history();
        let mut out = Vec::new();
        let config = config(OutputFormat::Csv);
        run(file.path(), StressParams::none(), 120.0, &config, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "day,date,p5,p50,p95");
        assert_eq!(lines[1], "1,2024-04-21,70,70,70");
        assert_eq!(lines[3], "3,2024-04-23,-30,-30,-30");
    }

    #[test]
    fn test_json_report() {
        let file = burn_history();
        let mut out = Vec::new();
        let config = config(OutputFormat::Json);
        run(file.path(), StressParams::none(), 120.0, &config, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["kpis"]["runway_days_p5"], 3);
        assert_eq!(value["kpis"]["probability_overdraft"], 1.0);
        assert_eq!(value["fan"].as_array().unwrap().len(), 10);
        assert_eq!(value["flags"][0]["flag"], "short_runway");
        assert_eq!(value["fit"]["model"]["mu"], -50.0);
    }

    #[test]
    fn test_table_report() {
        let file = burn_history();
        let mut out = Vec::new();
        let config = config(OutputFormat::Table);
        run(file.path(), StressParams::none(), 10_000.0, &config, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Runway (p5)                       ∞"));
        assert!(text.contains("No alerts"));
    }

    #[test]
    fn test_invalid_horizon() {
        let file = burn_history();
        let config = CliConfig {
            horizon_days: 5_000,
            ..config(OutputFormat::Table)
        };
        let mut out = Vec::new();
        let result = run(file.path(), StressParams::none(), 0.0, &config, &mut out);
        assert!(result.is_err());
    }
}
