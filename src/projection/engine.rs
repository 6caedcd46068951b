//! Core projection engine for the ten-year arena financials

use super::cashflows::{ProjectionResult, YearRow, PROJECTION_YEARS};
use crate::assumptions::Assumptions;
use crate::error::ProjectionError;
use crate::scenario::ScenarioParameters;
use log::{debug, trace};

/// Operating cost split into the part charged every year and the year-1 extra
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpexBreakdown {
    /// Charged from year 2 onward (and included in year 1)
    pub recurring: f64,
    /// One-time crew deployment, year 1 only
    pub crew_deployment: f64,
}

impl OpexBreakdown {
    pub fn year1(&self) -> f64 {
        self.recurring + self.crew_deployment
    }
}

/// Main projection engine
///
/// Stateless apart from its assumptions: every call to [`ProjectionEngine::compute`]
/// is independent and returns a freshly built result.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    assumptions: Assumptions,
}

impl ProjectionEngine {
    /// Create a new projection engine with given assumptions
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Run the ten-year projection for one scenario
    pub fn compute(&self, params: &ScenarioParameters) -> Result<ProjectionResult, ProjectionError> {
        params.validate()?;

        let total_capex = self.total_capex(params);
        let opex = self.opex(params);
        let year1_revenue = self.year1_revenue(params);
        let annual_amortization = self.annual_amortization(params, total_capex);

        debug!(
            "capex={:.0} year1_opex={:.0} recurring_opex={:.0} year1_revenue={:.0} amortization={:.0}",
            total_capex,
            opex.year1(),
            opex.recurring,
            year1_revenue,
            annual_amortization
        );

        let yearly_series = (1..=PROJECTION_YEARS)
            .map(|year| {
                let revenue = year1_revenue * self.assumptions.revenue.growth_factor(year);
                let row = if year == 1 {
                    // Without amortization the whole build cost lands in year 1;
                    // with it, CAPEX stays out of this series entirely.
                    let capex_charge = if params.use_amortization { 0.0 } else { total_capex };
                    YearRow::new(year, revenue, opex.year1(), capex_charge)
                } else {
                    YearRow::new(year, revenue, opex.recurring, 0.0)
                };
                trace!(
                    "year {}: revenue={:.0} opex={:.0} net={:.0}",
                    row.year,
                    row.revenue,
                    row.opex,
                    row.net_profit_no_amortization
                );
                row
            })
            .collect();

        let result = ProjectionResult {
            total_capex,
            year1_opex: opex.year1(),
            recurring_opex: opex.recurring,
            year1_revenue,
            annual_amortization,
            yearly_series,
        };
        ensure_finite(&result)?;
        Ok(result)
    }

    /// Build cost including the spectator deck and optional capacity scaling
    pub fn total_capex(&self, params: &ScenarioParameters) -> f64 {
        let capex = &self.assumptions.capex;
        let mut total = capex.phase1;
        if params.include_spectators {
            total += capex.phase2_additional;
        }
        if params.scale_capex_for_extra_capacity {
            // Spectator overflow is counted from the raw count, deck enabled or not
            let extra = self.assumptions.capacity.extra_people(
                params.crew_count,
                params.contestant_count,
                params.spectator_count,
            );
            total += extra as f64 * capex.per_extra_person;
        }
        total
    }

    pub fn opex(&self, params: &ScenarioParameters) -> OpexBreakdown {
        let o = &self.assumptions.opex;
        let crew = f64::from(params.crew_count);
        let contestants = f64::from(params.contestant_count);
        let spectators = f64::from(params.active_spectators());

        let recurring = contestants * o.contestant_transport_per
            + spectators * o.spectator_transport_per
            + crew * o.crew_salary_per
            + contestants * o.prize_pool_per_contestant
            + (crew + contestants + spectators) * o.cargo_per_person
            + o.docked_vehicle;

        OpexBreakdown {
            recurring,
            crew_deployment: crew * o.crew_deployment_per,
        }
    }

    /// Ticket sales plus the fixed streams, before growth
    pub fn year1_revenue(&self, params: &ScenarioParameters) -> f64 {
        let tickets = if params.include_spectators {
            f64::from(params.spectator_count) * params.ticket_price_millions * 1e6
        } else {
            0.0
        };
        let r = &self.assumptions.revenue;
        tickets + r.sponsorship + r.broadcasting + r.vr_ar + r.merchandising
    }

    /// Manual override wins; otherwise CAPEX spread over the period, or nothing
    pub fn annual_amortization(&self, params: &ScenarioParameters, total_capex: f64) -> f64 {
        if params.manual_amortization_override {
            params.manual_amortization_millions * 1e6
        } else if params.use_amortization {
            total_capex / f64::from(params.amortization_years)
        } else {
            0.0
        }
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new(Assumptions::default_pricing())
    }
}

/// Finite inputs can still overflow once scaled to dollars and compounded
fn ensure_finite(result: &ProjectionResult) -> Result<(), ProjectionError> {
    let headline = [
        ("total_capex", result.total_capex),
        ("year1_opex", result.year1_opex),
        ("recurring_opex", result.recurring_opex),
        ("year1_revenue", result.year1_revenue),
        ("annual_amortization", result.annual_amortization),
    ];
    for (field, value) in headline {
        if !value.is_finite() {
            return Err(ProjectionError::invalid(
                field,
                format!("overflows to {}; scenario inputs are too large", value),
            ));
        }
    }
    for row in &result.yearly_series {
        if !(row.revenue.is_finite() && row.opex.is_finite() && row.net_profit_no_amortization.is_finite()) {
            return Err(ProjectionError::invalid(
                "yearly_series",
                format!("year {} overflows; scenario inputs are too large", row.year),
            ));
        }
    }
    Ok(())
}

/// Project a scenario with the standard station pricing
pub fn compute(params: &ScenarioParameters) -> Result<ProjectionResult, ProjectionError> {
    ProjectionEngine::default().compute(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ScenarioInputs;
    use approx::assert_relative_eq;

    fn default_params() -> ScenarioParameters {
        ScenarioInputs::default().resolve()
    }

    #[test]
    fn test_default_scenario_headline_figures() {
        let result = compute(&default_params()).unwrap();

        assert_eq!(result.total_capex, 5.7e9);
        assert_eq!(result.year1_opex, 1_864_259_000.0);
        assert_eq!(result.recurring_opex, 889_259_000.0);
        assert_eq!(result.year1_revenue, 1_450_000_000.0);
        assert_relative_eq!(result.annual_amortization, 570_000_000.0);
    }

    #[test]
    fn test_series_has_ten_ordered_years() {
        let result = compute(&default_params()).unwrap();
        let years: Vec<u32> = result.yearly_series.iter().map(|r| r.year).collect();
        assert_eq!(years, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_revenue_compounds_at_ten_percent() {
        let result = compute(&default_params()).unwrap();
        assert_eq!(result.yearly_series[0].revenue, result.year1_revenue);
        for pair in result.yearly_series.windows(2) {
            assert_relative_eq!(pair[1].revenue / pair[0].revenue, 1.10, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_spectators_add_tickets_and_phase2_capex() {
        let base = default_params();
        let with = ScenarioParameters {
            include_spectators: true,
            spectator_count: 50,
            ticket_price_millions: 60.0,
            ..base
        };
        let a = compute(&base).unwrap();
        let b = compute(&with).unwrap();

        assert_eq!(b.year1_revenue - a.year1_revenue, 3_000_000_000.0);
        assert_eq!(b.total_capex - a.total_capex, 1.4e9);
        // transport + cargo for 50 spectators
        assert_eq!(b.recurring_opex - a.recurring_opex, 50.0 * 55e6 + 50.0 * 1.5e6);
    }

    #[test]
    fn test_disabled_spectators_cost_and_earn_nothing() {
        let base = default_params();
        let ignored = ScenarioParameters {
            spectator_count: 40,
            ..base
        };
        assert_eq!(compute(&ignored).unwrap(), compute(&base).unwrap());
    }

    #[test]
    fn test_capex_scaling_for_extra_crew() {
        let base = ScenarioParameters {
            crew_count: 20,
            ..default_params()
        };
        let scaled = ScenarioParameters {
            scale_capex_for_extra_capacity: true,
            ..base
        };
        let diff = compute(&scaled).unwrap().total_capex - compute(&base).unwrap().total_capex;
        assert_eq!(diff, 100_000_000.0);
    }

    #[test]
    fn test_capex_scaling_counts_spectators_even_when_disabled() {
        let params = ScenarioParameters {
            scale_capex_for_extra_capacity: true,
            include_spectators: false,
            spectator_count: 60,
            ..default_params()
        };
        let engine = ProjectionEngine::default();
        assert_eq!(engine.total_capex(&params), 5.7e9 + 10.0 * 20e6);
    }

    #[test]
    fn test_capex_expensed_in_year_one_without_amortization() {
        let params = ScenarioParameters {
            use_amortization: false,
            ..default_params()
        };
        let result = compute(&params).unwrap();
        let y1 = &result.yearly_series[0];
        assert_eq!(
            y1.net_profit_no_amortization,
            y1.revenue - result.year1_opex - result.total_capex
        );
        assert_eq!(result.annual_amortization, 0.0);
        for row in &result.yearly_series[1..] {
            assert_eq!(row.capex_charge, 0.0);
            assert_eq!(row.net_profit_no_amortization, row.revenue - result.recurring_opex);
        }
    }

    #[test]
    fn test_capex_excluded_from_series_with_amortization() {
        let result = compute(&default_params()).unwrap();
        let y1 = &result.yearly_series[0];
        assert_eq!(y1.capex_charge, 0.0);
        assert_eq!(y1.net_profit_no_amortization, y1.revenue - result.year1_opex);
        // amortization is reported but never subtracted here
        assert!(result.annual_amortization > 0.0);
    }

    #[test]
    fn test_manual_override_ignores_capex_and_period() {
        let params = ScenarioParameters {
            manual_amortization_override: true,
            manual_amortization_millions: 570.0,
            amortization_years: 3,
            include_spectators: true,
            ..default_params()
        };
        let result = compute(&params).unwrap();
        assert_eq!(result.annual_amortization, 570_000_000.0);

        let no_flag = ScenarioParameters {
            use_amortization: false,
            ..params
        };
        assert_eq!(compute(&no_flag).unwrap().annual_amortization, 570_000_000.0);
    }

    #[test]
    fn test_formula_amortization_uses_period() {
        let params = ScenarioParameters {
            amortization_years: 20,
            ..default_params()
        };
        assert_relative_eq!(compute(&params).unwrap().annual_amortization, 285_000_000.0);
    }

    #[test]
    fn test_zero_amortization_period_rejected() {
        let params = ScenarioParameters {
            amortization_years: 0,
            ..default_params()
        };
        let err = compute(&params).unwrap_err();
        assert_eq!(err.field(), "amortization_years");
    }

    #[test]
    fn test_max_headcounts_with_scaling_stay_finite() {
        let params = ScenarioParameters {
            crew_count: u32::MAX,
            contestant_count: u32::MAX,
            scale_capex_for_extra_capacity: true,
            ..default_params()
        };
        let result = compute(&params).unwrap();
        let extra = 2.0 * f64::from(u32::MAX) - 15.0 - 12.0;
        assert_relative_eq!(result.total_capex, 5.7e9 + extra * 20e6, max_relative = 1e-12);
        assert!(result.net_profits().all(f64::is_finite));
    }

    #[test]
    fn test_overflowing_ticket_revenue_rejected() {
        let params = ScenarioParameters {
            include_spectators: true,
            spectator_count: 200,
            ticket_price_millions: 1e300,
            ..default_params()
        };
        let err = compute(&params).unwrap_err();
        assert_eq!(err.field(), "year1_revenue");
    }

    #[test]
    fn test_revenue_overflowing_in_later_years_rejected() {
        // year 1 is about 1e308; compounding passes f64::MAX by year 8
        let params = ScenarioParameters {
            include_spectators: true,
            spectator_count: 200,
            ticket_price_millions: 5e299,
            ..default_params()
        };
        let engine = ProjectionEngine::default();
        assert!(engine.year1_revenue(&params).is_finite());
        let err = engine.compute(&params).unwrap_err();
        assert_eq!(err.field(), "yearly_series");
    }

    #[test]
    fn test_overflowing_manual_amortization_rejected() {
        let params = ScenarioParameters {
            manual_amortization_override: true,
            manual_amortization_millions: 1e305,
            ..default_params()
        };
        let err = compute(&params).unwrap_err();
        assert_eq!(err.field(), "annual_amortization");
    }

    #[test]
    fn test_year_one_opex_includes_crew_deployment_only_once() {
        let engine = ProjectionEngine::default();
        let opex = engine.opex(&default_params());
        assert_eq!(opex.crew_deployment, 15.0 * 65e6);
        assert_eq!(opex.year1() - opex.recurring, 975_000_000.0);
    }

    #[test]
    fn test_compute_is_deterministic() {
        let params = ScenarioParameters {
            include_spectators: true,
            spectator_count: 73,
            ticket_price_millions: 12.5,
            scale_capex_for_extra_capacity: true,
            crew_count: 31,
            ..default_params()
        };
        let a = compute(&params).unwrap();
        let b = compute(&params).unwrap();
        for (x, y) in a.yearly_series.iter().zip(&b.yearly_series) {
            assert_eq!(x.revenue.to_bits(), y.revenue.to_bits());
            assert_eq!(
                x.net_profit_no_amortization.to_bits(),
                y.net_profit_no_amortization.to_bits()
            );
        }
        assert_eq!(a, b);
    }
}
