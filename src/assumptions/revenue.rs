//! Annual revenue streams and growth

/// Year-1 revenue streams other than ticket sales
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueAssumptions {
    pub sponsorship: f64,
    pub broadcasting: f64,
    pub vr_ar: f64,
    pub merchandising: f64,
    /// Annual growth applied to the whole year-1 aggregate
    pub growth_rate: f64,
}

impl RevenueAssumptions {
    /// Compounding factor for a 1-indexed projection year
    pub fn growth_factor(&self, year: u32) -> f64 {
        (1.0 + self.growth_rate).powf(f64::from(year.saturating_sub(1)))
    }
}

impl Default for RevenueAssumptions {
    fn default() -> Self {
        Self {
            sponsorship: 600e6,
            broadcasting: 550e6,
            vr_ar: 100e6,
            merchandising: 200e6,
            growth_rate: 0.10,
        }
    }
}
