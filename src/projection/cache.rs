//! Memoization of projection results by exact parameter equality
//!
//! The engine is pure, so a result computed once for a parameter tuple can be
//! handed out again. Float fields are keyed by their bit pattern. The cache
//! holds at most `capacity` results and drops the oldest insertion first.

use super::cashflows::ProjectionResult;
use super::engine::ProjectionEngine;
use crate::error::ProjectionError;
use crate::scenario::ScenarioParameters;
use log::{debug, info};
use std::collections::{HashMap, VecDeque};

/// Entries kept by [`ProjectionCache::new`]
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ParamKey {
    crew_count: u32,
    contestant_count: u32,
    include_spectators: bool,
    spectator_count: u32,
    ticket_price_bits: u64,
    scale_capex: bool,
    use_amortization: bool,
    amortization_years: u32,
    manual_override: bool,
    manual_amortization_bits: u64,
}

impl From<&ScenarioParameters> for ParamKey {
    fn from(p: &ScenarioParameters) -> Self {
        Self {
            crew_count: p.crew_count,
            contestant_count: p.contestant_count,
            include_spectators: p.include_spectators,
            spectator_count: p.spectator_count,
            ticket_price_bits: p.ticket_price_millions.to_bits(),
            scale_capex: p.scale_capex_for_extra_capacity,
            use_amortization: p.use_amortization,
            amortization_years: p.amortization_years,
            manual_override: p.manual_amortization_override,
            manual_amortization_bits: p.manual_amortization_millions.to_bits(),
        }
    }
}

/// Hit/miss counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// Result cache in front of a [`ProjectionEngine`]
#[derive(Debug)]
pub struct ProjectionCache {
    engine: ProjectionEngine,
    entries: HashMap<ParamKey, ProjectionResult>,
    insertion_order: VecDeque<ParamKey>,
    capacity: usize,
    stats: CacheStats,
}

impl ProjectionCache {
    pub fn new(engine: ProjectionEngine) -> Self {
        Self::with_capacity(engine, DEFAULT_CACHE_CAPACITY)
    }

    /// Cache holding at most `capacity` results (at least one)
    pub fn with_capacity(engine: ProjectionEngine, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            engine,
            entries: HashMap::with_capacity(capacity),
            insertion_order: VecDeque::with_capacity(capacity),
            capacity,
            stats: CacheStats::default(),
        }
    }

    /// Return the cached result for `params`, computing it on first sight.
    /// Rejected parameters are not cached.
    pub fn get_or_compute(
        &mut self,
        params: &ScenarioParameters,
    ) -> Result<ProjectionResult, ProjectionError> {
        let key = ParamKey::from(params);
        if let Some(hit) = self.entries.get(&key) {
            self.stats.hits += 1;
            return Ok(hit.clone());
        }

        self.stats.misses += 1;
        let result = self.engine.compute(params)?;
        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.insertion_order.pop_front() {
                self.entries.remove(&oldest);
                self.stats.evictions += 1;
                debug!("Projection cache full ({}), evicted oldest entry", self.capacity);
            }
        }
        self.entries.insert(key, result.clone());
        self.insertion_order.push_back(key);
        Ok(result)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        info!(
            "Clearing projection cache: {} entries, {} hits, {} misses",
            self.entries.len(),
            self.stats.hits,
            self.stats.misses
        );
        self.entries.clear();
        self.insertion_order.clear();
        self.stats = CacheStats::default();
    }
}

impl Default for ProjectionCache {
    fn default() -> Self {
        Self::new(ProjectionEngine::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ScenarioInputs;

    #[test]
    fn test_repeat_lookup_hits() {
        let mut cache = ProjectionCache::default();
        let params = ScenarioInputs::default().resolve();

        let first = cache.get_or_compute(&params).unwrap();
        let second = cache.get_or_compute(&params).unwrap();

        assert_eq!(first, second);
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1, evictions: 0 });
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_distinct_parameters_miss() {
        let mut cache = ProjectionCache::default();
        let a = ScenarioInputs::default().resolve();
        let b = ScenarioParameters {
            ticket_price_millions: 61.0,
            ..a
        };
        cache.get_or_compute(&a).unwrap();
        cache.get_or_compute(&b).unwrap();
        assert_eq!(cache.stats().misses, 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let mut cache = ProjectionCache::default();
        let bad = ScenarioParameters {
            amortization_years: 0,
            ..ScenarioInputs::default().resolve()
        };
        assert!(cache.get_or_compute(&bad).is_err());
        assert!(cache.get_or_compute(&bad).is_err());
        assert!(cache.is_empty());
        assert_eq!(cache.stats().misses, 2);
    }

    #[test]
    fn test_full_cache_evicts_oldest_entry() {
        let mut cache = ProjectionCache::with_capacity(ProjectionEngine::default(), 2);
        let base = ScenarioInputs::default().resolve();
        let at = |crew| ScenarioParameters { crew_count: crew, ..base };

        cache.get_or_compute(&at(10)).unwrap();
        cache.get_or_compute(&at(11)).unwrap();
        cache.get_or_compute(&at(12)).unwrap();
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.stats().evictions, 1);

        // newest two are still cached
        cache.get_or_compute(&at(11)).unwrap();
        cache.get_or_compute(&at(12)).unwrap();
        assert_eq!(cache.stats().hits, 2);

        // the first one was dropped and has to be recomputed
        cache.get_or_compute(&at(10)).unwrap();
        assert_eq!(cache.stats().misses, 4);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_zero_capacity_still_holds_one_entry() {
        let mut cache = ProjectionCache::with_capacity(ProjectionEngine::default(), 0);
        assert_eq!(cache.capacity(), 1);
        let params = ScenarioInputs::default().resolve();
        cache.get_or_compute(&params).unwrap();
        cache.get_or_compute(&params).unwrap();
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear_resets() {
        let mut cache = ProjectionCache::default();
        cache.get_or_compute(&ScenarioInputs::default().resolve()).unwrap();
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats::default());
    }
}
