//! Aggregate command implementation
//!
//! Prints the daily net-flow series built from the input rows.

use std::io::Write;
use std::path::Path;

use cashrisk_core::flows::aggregate_detailed;
use cashrisk_core::StressParams;
use tracing::info;

use super::aggregation_options;
use crate::config::{CliConfig, OutputFormat};
use crate::input::read_rows;
use crate::Result;

/// Run the aggregate command
pub fn run<W: Write>(
    input: &Path,
    stress: StressParams,
    config: &CliConfig,
    out: &mut W,
) -> Result<()> {
    info!("Aggregating {}", input.display());

    let rows = read_rows(input)?;
    let aggregation = aggregate_detailed(&rows, &aggregation_options(stress, config))?;

    info!(
        "  Rows used: {}, dropped: {}, days: {}",
        aggregation.rows_used,
        aggregation.rows_dropped,
        aggregation.flows.len()
    );

    match config.output_format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &aggregation)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.write_record(["date", "net"])?;
            for flow in &aggregation.flows {
                writer.write_record([flow.date.to_string(), flow.net.to_string()])?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            writeln!(out, "┌────────────┬──────────────┐")?;
            writeln!(out, "│ Date       │ Net flow     │")?;
            writeln!(out, "├────────────┼──────────────┤")?;
            for flow in &aggregation.flows {
                writeln!(out, "│ {} │ {:>12.2} │", flow.date, flow.net)?;
            }
            writeln!(out, "└────────────┴──────────────┘")?;
            writeln!(
                out,
                "{} rows used, {} dropped",
                aggregation.rows_used, aggregation.rows_dropped
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use cashrisk_core::Densification;

    fn input_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    const ROWS: &str = "date,inflow,outflow\n\
                        2024-01-03,100,20\n\
                        2024-01-03,50,10\n\
                        2024-01-01,0,30\n\
                        bad-date,1,1\n";

    #[test]
    fn test_csv_output() {
        let file = input_file(ROWS);
        let config = CliConfig {
            output_format: OutputFormat::Csv,
            ..Default::default()
        };
        let mut out = Vec::new();
        run(file.path(), StressParams::none(), &config, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "date,net\n2024-01-01,-30\n2024-01-03,120\n");
    }

    #[test]
    fn test_oversized_dso_is_rejected() {
        let file = input_file(ROWS);
        let config = CliConfig {
            densification: Densification::Dense,
            ..Default::default()
        };
        let stress = StressParams {
            dso_days: u32::MAX,
            ..Default::default()
        };
        let mut out = Vec::new();
        let err = run(file.path(), stress, &config, &mut out).unwrap_err();
        assert!(matches!(err, CliError::Risk(_)));
        assert!(err.to_string().contains("dso_days"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_dense_json_output() {
        let file = input_file(ROWS);
        let config = CliConfig {
            output_format: OutputFormat::Json,
            densification: Densification::Dense,
            ..Default::default()
        };
        let mut out = Vec::new();
        run(file.path(), StressParams::none(), &config, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let flows = value["flows"].as_array().unwrap();
        assert_eq!(flows.len(), 3);
        assert_eq!(flows[1]["date"], "2024-01-02");
        assert_eq!(flows[1]["net"], 0.0);
        assert_eq!(value["rows_dropped"], 1);
    }

    #[test]
    fn test_stress_applied() {
        let file = input_file("date,inflow,outflow\n2024-01-01,100,50\n");
        let config = CliConfig {
            output_format: OutputFormat::Csv,
            ..Default::default()
        };
        let stress = StressParams {
            sales_pct: -10.0,
            costs_pct: 20.0,
            dso_days: 2,
        };
        let mut out = Vec::new();
        run(file.path(), stress, &config, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "date,net\n2024-01-01,-60\n2024-01-03,90\n");
    }

    #[test]
    fn test_table_output() {
        let file = input_file(ROWS);
        let mut out = Vec::new();
        run(file.path(), StressParams::none(), &CliConfig::default(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("│ 2024-01-03 │       120.00 │"));
        assert!(text.ends_with("3 rows used, 1 dropped\n"));
    }
}
