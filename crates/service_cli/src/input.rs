//! CSV input reader
//!
//! Columns are matched by header name. `date` is required; the amount
//! columns are optional. A row with `inflow` or `outflow` set is a payment
//! row, anything else is read as a sales line. Unparseable amounts become
//! NaN so the aggregator drops the row.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use cashrisk_core::flows::{FlowKind, SaleLine};
use cashrisk_core::RawFlowRow;
use serde::Deserialize;
use tracing::debug;

use crate::{CliError, Result};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FlowRecord {
    date: Option<String>,
    qty: Option<String>,
    unit_price: Option<String>,
    unit_cost: Option<String>,
    discount: Option<String>,
    shipping_fee: Option<String>,
    shipping_cost: Option<String>,
    inflow: Option<String>,
    outflow: Option<String>,
}

fn amount(field: &Option<String>) -> Option<f64> {
    let raw = field.as_deref()?.trim();
    if raw.is_empty() {
        return None;
    }
    Some(raw.parse().unwrap_or(f64::NAN))
}

impl FlowRecord {
    fn into_row(self) -> RawFlowRow {
        let inflow = amount(&self.inflow);
        let outflow = amount(&self.outflow);
        let date = self.date.filter(|d| !d.trim().is_empty());

        if inflow.is_some() || outflow.is_some() {
            return RawFlowRow {
                date,
                kind: FlowKind::Payment {
                    inflow: inflow.unwrap_or(0.0),
                    outflow: outflow.unwrap_or(0.0),
                },
            };
        }

        let line = SaleLine {
            qty: amount(&self.qty).unwrap_or(0.0),
            unit_price: amount(&self.unit_price).unwrap_or(0.0),
            unit_cost: amount(&self.unit_cost).unwrap_or(0.0),
            discount: amount(&self.discount).unwrap_or(0.0),
            shipping_fee: amount(&self.shipping_fee).unwrap_or(0.0),
            shipping_cost: amount(&self.shipping_cost).unwrap_or(0.0),
        };
        RawFlowRow {
            date,
            kind: FlowKind::Sale(line),
        }
    }
}

/// Reads flow rows from any CSV source
pub fn read_rows_from<R: Read>(reader: R) -> Result<Vec<RawFlowRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    if !reader.headers()?.iter().any(|h| h == "date") {
        return Err(CliError::MissingColumn("date".to_string()));
    }

    let mut rows = Vec::new();
    for record in reader.deserialize::<FlowRecord>() {
        rows.push(record?.into_row());
    }

    debug!(rows = rows.len(), "Read input rows");
    Ok(rows)
}

/// Reads flow rows from a CSV file
pub fn read_rows(path: &Path) -> Result<Vec<RawFlowRow>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    read_rows_from(File::open(path)?)
}
