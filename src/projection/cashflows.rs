//! Projection output structures

use serde::{Deserialize, Serialize};

/// Number of projection years in every result
pub const PROJECTION_YEARS: u32 = 10;

/// One projection year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRow {
    /// Projection year (1-indexed)
    pub year: u32,
    pub revenue: f64,
    /// Year-1 OPEX in year 1, recurring OPEX afterwards
    pub opex: f64,
    /// Full CAPEX in year 1 when not amortizing, otherwise zero
    pub capex_charge: f64,
    pub net_profit_no_amortization: f64,
}

impl YearRow {
    pub fn new(year: u32, revenue: f64, opex: f64, capex_charge: f64) -> Self {
        Self {
            year,
            revenue,
            opex,
            capex_charge,
            net_profit_no_amortization: revenue - opex - capex_charge,
        }
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub total_capex: f64,
    pub year1_opex: f64,
    /// OPEX from year 2 onward
    pub recurring_opex: f64,
    pub year1_revenue: f64,

    /// Annual CAPEX charge implied by the amortization settings.
    ///
    /// Not subtracted from `yearly_series`; see
    /// [`crate::report::net_profit_with_amortization`] for the amortized line,
    /// which charges it for the amortization period only.
    pub annual_amortization: f64,

    /// Exactly [`PROJECTION_YEARS`] rows, years 1..=10 in order
    pub yearly_series: Vec<YearRow>,
}

impl ProjectionResult {
    pub fn revenues(&self) -> impl Iterator<Item = f64> + '_ {
        self.yearly_series.iter().map(|r| r.revenue)
    }

    pub fn net_profits(&self) -> impl Iterator<Item = f64> + '_ {
        self.yearly_series.iter().map(|r| r.net_profit_no_amortization)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_revenue: f64 = self.revenues().sum();
        let total_net_profit: f64 = self.net_profits().sum();
        let final_year_revenue = self.yearly_series.last().map(|r| r.revenue).unwrap_or(0.0);

        let mut cumulative = 0.0;
        let mut breakeven_year = None;
        for row in &self.yearly_series {
            cumulative += row.net_profit_no_amortization;
            if cumulative >= 0.0 {
                breakeven_year = Some(row.year);
                break;
            }
        }

        ProjectionSummary {
            total_revenue,
            total_net_profit,
            final_year_revenue,
            breakeven_year,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_revenue: f64,
    pub total_net_profit: f64,
    pub final_year_revenue: f64,
    /// First year whose cumulative net profit (no amortization) is non-negative
    pub breakeven_year: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_profits(profits: &[f64]) -> ProjectionResult {
        ProjectionResult {
            total_capex: 0.0,
            year1_opex: 0.0,
            recurring_opex: 0.0,
            year1_revenue: 0.0,
            annual_amortization: 0.0,
            yearly_series: profits
                .iter()
                .enumerate()
                .map(|(i, &p)| YearRow::new(i as u32 + 1, p.max(0.0), (-p).max(0.0), 0.0))
                .collect(),
        }
    }

    #[test]
    fn test_year_row_net_profit() {
        let row = YearRow::new(1, 10.0, 4.0, 3.0);
        assert_eq!(row.net_profit_no_amortization, 3.0);
    }

    #[test]
    fn test_breakeven_on_cumulative_profit() {
        let result = result_with_profits(&[-100.0, 30.0, 30.0, 40.0, 50.0]);
        assert_eq!(result.summary().breakeven_year, Some(4));
    }

    #[test]
    fn test_no_breakeven_when_cumulative_stays_negative() {
        let result = result_with_profits(&[-100.0, 10.0, 10.0]);
        let summary = result.summary();
        assert_eq!(summary.breakeven_year, None);
        assert_eq!(summary.total_net_profit, -80.0);
    }
}
