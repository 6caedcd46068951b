//! Business assumptions for the arena station: baseline capacity, cost rates and revenue streams
//!
//! These are fixed pricing figures, not user inputs. The engine reads them from an
//! [`Assumptions`] bundle so tests can reason about each group separately.

mod costs;
mod revenue;

pub use costs::{CapexAssumptions, OpexAssumptions};
pub use revenue::RevenueAssumptions;

/// Headcounts the base CAPEX figure already accommodates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineCapacity {
    pub crew: u32,
    pub contestants: u32,
    pub spectators: u32,
}

impl BaselineCapacity {
    /// Persons above baseline across all three groups
    ///
    /// The spectator term is counted whether or not spectators are enabled;
    /// callers pass a zero count when the spectator deck is off.
    /// Summed in `u64` so three full `u32` groups cannot overflow.
    pub fn extra_people(&self, crew: u32, contestants: u32, spectators: u32) -> u64 {
        u64::from(crew.saturating_sub(self.crew))
            + u64::from(contestants.saturating_sub(self.contestants))
            + u64::from(spectators.saturating_sub(self.spectators))
    }
}

impl Default for BaselineCapacity {
    fn default() -> Self {
        Self {
            crew: 15,
            contestants: 12,
            spectators: 50,
        }
    }
}

/// Container for all projection assumptions
#[derive(Debug, Clone, PartialEq)]
pub struct Assumptions {
    pub capacity: BaselineCapacity,
    pub capex: CapexAssumptions,
    pub opex: OpexAssumptions,
    pub revenue: RevenueAssumptions,
}

impl Assumptions {
    /// The station pricing the dashboard was built around
    pub fn default_pricing() -> Self {
        Self {
            capacity: BaselineCapacity::default(),
            capex: CapexAssumptions::default(),
            opex: OpexAssumptions::default(),
            revenue: RevenueAssumptions::default(),
        }
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_pricing()
    }
}
