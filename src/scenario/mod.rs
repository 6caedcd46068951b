//! Scenario parameters and batch loading

mod data;
pub mod loader;

pub use data::{
    NamedScenario, ScenarioInputs, ScenarioParameters, AMORTIZATION_YEARS_RANGE,
    CONTESTANT_RANGE, CREW_RANGE, DEFAULT_AMORTIZATION_YEARS, DEFAULT_CONTESTANT_COUNT,
    DEFAULT_CREW_COUNT, DEFAULT_MANUAL_AMORTIZATION_MILLIONS, DEFAULT_SPECTATOR_COUNT,
    DEFAULT_TICKET_PRICE_MILLIONS, SPECTATOR_RANGE,
};
pub use loader::{load_scenarios, load_scenarios_from_reader};
