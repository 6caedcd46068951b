//! CSV and JSON export of projection results

use super::table::{net_profit_with_amortization, KeyMetrics, ProjectionTable};
use crate::projection::{ProjectionResult, ProjectionSummary};
use crate::scenario::ScenarioParameters;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// One exported year, amounts in millions
#[derive(Debug, Clone, Serialize)]
struct SeriesCsvRow {
    year: u32,
    revenue_millions: f64,
    opex_millions: f64,
    capex_charge_millions: f64,
    net_profit_no_amortization_millions: f64,
    net_profit_with_amortization_millions: f64,
}

/// Write the yearly series as CSV to any writer
pub fn write_series_csv<W: Write>(
    result: &ProjectionResult,
    params: &ScenarioParameters,
    writer: W,
) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    let amortized = net_profit_with_amortization(result, params);

    for (row, with_amort) in result.yearly_series.iter().zip(amortized) {
        wtr.serialize(SeriesCsvRow {
            year: row.year,
            revenue_millions: row.revenue / 1e6,
            opex_millions: row.opex / 1e6,
            capex_charge_millions: row.capex_charge / 1e6,
            net_profit_no_amortization_millions: row.net_profit_no_amortization / 1e6,
            net_profit_with_amortization_millions: with_amort / 1e6,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the yearly series to a CSV file
pub fn write_series_csv_path<P: AsRef<Path>>(
    result: &ProjectionResult,
    params: &ScenarioParameters,
    path: P,
) -> Result<(), csv::Error> {
    let file = std::fs::File::create(path)?;
    write_series_csv(result, params, file)
}

/// Everything a front end needs to render one scenario
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionReport {
    pub params: ScenarioParameters,
    pub metrics: KeyMetrics,
    pub summary: ProjectionSummary,
    pub table: ProjectionTable,
    pub result: ProjectionResult,
}

impl ProjectionReport {
    pub fn new(params: ScenarioParameters, result: ProjectionResult, with_amortization: bool) -> Self {
        let table = if with_amortization {
            ProjectionTable::with_amortization(&result, &params)
        } else {
            ProjectionTable::from_result(&result)
        };
        Self {
            params,
            metrics: KeyMetrics::from_result(&result),
            summary: result.summary(),
            table,
            result,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
