//! Scenario parameter records

use crate::error::ProjectionError;
use log::warn;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Input ranges offered by the dashboard controls (advisory; the engine does not enforce them)
pub const CREW_RANGE: RangeInclusive<u32> = 1..=50;
pub const CONTESTANT_RANGE: RangeInclusive<u32> = 1..=50;
pub const SPECTATOR_RANGE: RangeInclusive<u32> = 0..=200;
pub const AMORTIZATION_YEARS_RANGE: RangeInclusive<u32> = 1..=50;

pub const DEFAULT_CREW_COUNT: u32 = 15;
pub const DEFAULT_CONTESTANT_COUNT: u32 = 12;
pub const DEFAULT_SPECTATOR_COUNT: u32 = 0;
pub const DEFAULT_TICKET_PRICE_MILLIONS: f64 = 60.0;
pub const DEFAULT_AMORTIZATION_YEARS: u32 = 10;
pub const DEFAULT_MANUAL_AMORTIZATION_MILLIONS: f64 = 570.0;

/// Fully specified scenario handed to the projection engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParameters {
    pub crew_count: u32,
    pub contestant_count: u32,

    /// Enables the phase-2 spectator deck, spectator transport and ticket revenue
    pub include_spectators: bool,
    /// Spectators flown up per year; only priced when `include_spectators` is set
    pub spectator_count: u32,
    pub ticket_price_millions: f64,

    /// Charge extra CAPEX for persons above baseline capacity
    pub scale_capex_for_extra_capacity: bool,

    pub use_amortization: bool,
    pub amortization_years: u32,
    /// Use `manual_amortization_millions` instead of CAPEX / period
    pub manual_amortization_override: bool,
    pub manual_amortization_millions: f64,
}

impl ScenarioParameters {
    /// Check the constraints the engine relies on
    pub fn validate(&self) -> Result<(), ProjectionError> {
        if self.crew_count < 1 {
            return Err(ProjectionError::invalid(
                "crew_count",
                format!("must be at least 1, got {}", self.crew_count),
            ));
        }
        if self.contestant_count < 1 {
            return Err(ProjectionError::invalid(
                "contestant_count",
                format!("must be at least 1, got {}", self.contestant_count),
            ));
        }
        if self.amortization_years < 1 {
            return Err(ProjectionError::invalid(
                "amortization_years",
                format!("must be at least 1, got {}", self.amortization_years),
            ));
        }
        check_money("ticket_price_millions", self.ticket_price_millions)?;
        check_money("manual_amortization_millions", self.manual_amortization_millions)?;
        Ok(())
    }

    /// Spectators actually aboard (zero when the deck is disabled)
    pub fn active_spectators(&self) -> u32 {
        if self.include_spectators {
            self.spectator_count
        } else {
            0
        }
    }
}

fn check_money(field: &'static str, value: f64) -> Result<(), ProjectionError> {
    if !value.is_finite() {
        return Err(ProjectionError::invalid(field, format!("must be finite, got {}", value)));
    }
    if value < 0.0 {
        return Err(ProjectionError::invalid(field, format!("must be non-negative, got {}", value)));
    }
    Ok(())
}

/// Partially specified scenario as collected from a form, file or request body
///
/// Missing values fall back to the dashboard defaults in [`ScenarioInputs::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioInputs {
    pub crew_count: Option<u32>,
    pub contestant_count: Option<u32>,
    pub include_spectators: Option<bool>,
    pub spectator_count: Option<u32>,
    pub ticket_price_millions: Option<f64>,
    pub scale_capex_for_extra_capacity: Option<bool>,
    pub use_amortization: Option<bool>,
    pub amortization_years: Option<u32>,
    pub manual_amortization_override: Option<bool>,
    pub manual_amortization_millions: Option<f64>,
}

impl ScenarioInputs {
    /// Fill missing fields with defaults
    ///
    /// Only absent values are replaced; an explicit zero is kept and left for
    /// [`ScenarioParameters::validate`] to judge.
    pub fn resolve(&self) -> ScenarioParameters {
        let params = ScenarioParameters {
            crew_count: self.crew_count.unwrap_or(DEFAULT_CREW_COUNT),
            contestant_count: self.contestant_count.unwrap_or(DEFAULT_CONTESTANT_COUNT),
            include_spectators: self.include_spectators.unwrap_or(false),
            spectator_count: self.spectator_count.unwrap_or(DEFAULT_SPECTATOR_COUNT),
            ticket_price_millions: self
                .ticket_price_millions
                .unwrap_or(DEFAULT_TICKET_PRICE_MILLIONS),
            scale_capex_for_extra_capacity: self.scale_capex_for_extra_capacity.unwrap_or(false),
            use_amortization: self.use_amortization.unwrap_or(true),
            amortization_years: self.amortization_years.unwrap_or(DEFAULT_AMORTIZATION_YEARS),
            manual_amortization_override: self.manual_amortization_override.unwrap_or(false),
            manual_amortization_millions: self
                .manual_amortization_millions
                .unwrap_or(DEFAULT_MANUAL_AMORTIZATION_MILLIONS),
        };

        warn_outside("crew_count", params.crew_count, &CREW_RANGE);
        warn_outside("contestant_count", params.contestant_count, &CONTESTANT_RANGE);
        warn_outside("spectator_count", params.spectator_count, &SPECTATOR_RANGE);
        warn_outside("amortization_years", params.amortization_years, &AMORTIZATION_YEARS_RANGE);

        params
    }
}

impl From<ScenarioParameters> for ScenarioInputs {
    fn from(p: ScenarioParameters) -> Self {
        Self {
            crew_count: Some(p.crew_count),
            contestant_count: Some(p.contestant_count),
            include_spectators: Some(p.include_spectators),
            spectator_count: Some(p.spectator_count),
            ticket_price_millions: Some(p.ticket_price_millions),
            scale_capex_for_extra_capacity: Some(p.scale_capex_for_extra_capacity),
            use_amortization: Some(p.use_amortization),
            amortization_years: Some(p.amortization_years),
            manual_amortization_override: Some(p.manual_amortization_override),
            manual_amortization_millions: Some(p.manual_amortization_millions),
        }
    }
}

fn warn_outside(field: &str, value: u32, range: &RangeInclusive<u32>) {
    if !range.contains(&value) {
        warn!(
            "{} = {} is outside the dashboard range {}..={}",
            field,
            value,
            range.start(),
            range.end()
        );
    }
}

/// A scenario with a label, as read from a batch file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedScenario {
    pub name: String,
    pub params: ScenarioParameters,
}
