//! Capital and operating cost rates

/// Upfront build cost of the station
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapexAssumptions {
    /// Base module without the spectator deck
    pub phase1: f64,
    /// Spectator and media deck (phase 2)
    pub phase2_additional: f64,
    /// Extra habitable volume per person above baseline capacity
    pub per_extra_person: f64,
}

impl Default for CapexAssumptions {
    fn default() -> Self {
        Self {
            phase1: 5.7e9,
            phase2_additional: 1.4e9,
            per_extra_person: 20e6,
        }
    }
}

/// Per-person and fixed operating costs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpexAssumptions {
    /// One-time crew transport and deployment, charged in year 1 only
    pub crew_deployment_per: f64,
    /// Contestant round trip per event
    pub contestant_transport_per: f64,
    /// Spectator round trip per event
    pub spectator_transport_per: f64,
    pub crew_salary_per: f64,
    pub prize_pool_per_contestant: f64,
    /// Food, supplies and spares for everyone aboard
    pub cargo_per_person: f64,
    /// Docked safety vehicle kept on station
    pub docked_vehicle: f64,
}

impl Default for OpexAssumptions {
    fn default() -> Self {
        Self {
            crew_deployment_per: 65e6,
            contestant_transport_per: 65e6,
            spectator_transport_per: 55e6,
            crew_salary_per: 0.317e6,
            prize_pool_per_contestant: 1.667e6,
            cargo_per_person: 1.5e6,
            docked_vehicle: 44e6,
        }
    }
}
