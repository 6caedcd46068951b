//! Arena Projection - ten-year financial model for an orbital game-arena venture
//!
//! This library provides:
//! - CAPEX, OPEX and revenue for a crew/contestant/spectator scenario
//! - A ten-year revenue and net-profit series with CAPEX expensing or amortization
//! - Display formatting, tables and CSV/JSON export for front ends
//! - Batch scenario loading, parallel runs and result memoization

pub mod error;
pub mod assumptions;
pub mod scenario;
pub mod projection;
pub mod report;
pub mod runner;

// Re-export commonly used types
pub use error::{LoadError, ProjectionError};
pub use assumptions::Assumptions;
pub use scenario::{ScenarioInputs, ScenarioParameters};
pub use projection::{compute, ProjectionEngine, ProjectionResult, YearRow};
pub use runner::ScenarioRunner;
