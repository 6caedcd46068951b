//! Projection engine for the ten-year revenue and profit series

mod engine;
mod cashflows;
mod cache;

pub use engine::{compute, OpexBreakdown, ProjectionEngine};
pub use cashflows::{ProjectionResult, ProjectionSummary, YearRow, PROJECTION_YEARS};
pub use cache::{CacheStats, ProjectionCache, DEFAULT_CACHE_CAPACITY};
