//! Headline metrics and the ten-year projection table

use super::format::{format_billions, format_millions};
use crate::projection::ProjectionResult;
use crate::scenario::ScenarioParameters;
use serde::Serialize;
use std::fmt;

/// Net profit with the annual amortization charge subtracted
///
/// The charge applies only while amortization is on, and only for the first
/// `amortization_years` years; later years match the engine's series. When
/// CAPEX is expensed in year 1 the line equals the series.
pub fn net_profit_with_amortization(result: &ProjectionResult, params: &ScenarioParameters) -> Vec<f64> {
    result
        .yearly_series
        .iter()
        .map(|row| {
            let charged = params.use_amortization && row.year <= params.amortization_years;
            if charged {
                row.net_profit_no_amortization - result.annual_amortization
            } else {
                row.net_profit_no_amortization
            }
        })
        .collect()
}

/// The four headline cards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyMetrics {
    pub total_capex: String,
    pub year1_opex: String,
    pub recurring_opex: String,
    pub year1_revenue: String,
}

impl KeyMetrics {
    pub fn from_result(result: &ProjectionResult) -> Self {
        Self {
            total_capex: format_billions(result.total_capex),
            year1_opex: format_billions(result.year1_opex),
            recurring_opex: format_billions(result.recurring_opex),
            year1_revenue: format_billions(result.year1_revenue),
        }
    }
}

impl fmt::Display for KeyMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total CAPEX:     {}", self.total_capex)?;
        writeln!(f, "Year 1 OPEX:     {}", self.year1_opex)?;
        writeln!(f, "Recurring OPEX:  {}", self.recurring_opex)?;
        write!(f, "Year 1 Revenue:  {}", self.year1_revenue)
    }
}

pub const YEAR_HEADER: &str = "Year";
pub const REVENUE_HEADER: &str = "Revenue ($M)";
pub const NET_PROFIT_HEADER: &str = "Net Profit (No Amort) ($M)";
pub const AMORTIZED_HEADER: &str = "Net Profit (With Amort) ($M)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub year: u32,
    pub revenue_millions: String,
    pub net_profit_millions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_profit_with_amortization_millions: Option<String>,
}

/// Display table of the yearly series, values in millions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionTable {
    pub rows: Vec<TableRow>,
}

impl ProjectionTable {
    pub fn from_result(result: &ProjectionResult) -> Self {
        let rows = result
            .yearly_series
            .iter()
            .map(|r| TableRow {
                year: r.year,
                revenue_millions: format_millions(r.revenue),
                net_profit_millions: format_millions(r.net_profit_no_amortization),
                net_profit_with_amortization_millions: None,
            })
            .collect();
        Self { rows }
    }

    /// Same table with the amortized net-profit column filled in
    pub fn with_amortization(result: &ProjectionResult, params: &ScenarioParameters) -> Self {
        let mut table = Self::from_result(result);
        for (row, amortized) in table.rows.iter_mut().zip(net_profit_with_amortization(result, params)) {
            row.net_profit_with_amortization_millions = Some(format_millions(amortized));
        }
        table
    }

    fn has_amortized_column(&self) -> bool {
        self.rows
            .iter()
            .any(|r| r.net_profit_with_amortization_millions.is_some())
    }
}

impl fmt::Display for ProjectionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amortized = self.has_amortized_column();

        write!(f, "{:>4}  {:>14}  {:>28}", YEAR_HEADER, REVENUE_HEADER, NET_PROFIT_HEADER)?;
        if amortized {
            write!(f, "  {:>30}", AMORTIZED_HEADER)?;
        }
        writeln!(f)?;

        for row in &self.rows {
            write!(
                f,
                "{:>4}  {:>14}  {:>28}",
                row.year, row.revenue_millions, row.net_profit_millions
            )?;
            if let Some(value) = &row.net_profit_with_amortization_millions {
                write!(f, "  {:>30}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
