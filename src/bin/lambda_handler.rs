//! AWS Lambda handler for dashboard projections
//!
//! Accepts a scenario as JSON (any field may be omitted and falls back to the
//! dashboard default) and returns headline metrics, the ten-year series and
//! an optional amortized net-profit line. Results are memoized for the life of
//! a warm container.

use arena_projection::{
    projection::{ProjectionCache, ProjectionResult, ProjectionSummary},
    report::{net_profit_with_amortization, KeyMetrics},
    ScenarioInputs, ScenarioParameters,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Input for one projection
#[derive(Debug, Default, Deserialize)]
pub struct ProjectionRequest {
    #[serde(flatten)]
    pub scenario: ScenarioInputs,

    /// Also return net profit with the annual amortization subtracted
    #[serde(default)]
    pub include_amortized_line: bool,
}

/// Output from the projection
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    pub params: ScenarioParameters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<KeyMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ProjectionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ProjectionSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_profit_with_amortization: Option<Vec<f64>>,
    pub execution_time_us: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn elapsed_us(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

fn project(request: &ProjectionRequest, cache: &mut ProjectionCache) -> ProjectionResponse {
    let start = Instant::now();
    let params = request.scenario.resolve();

    match cache.get_or_compute(&params) {
        Ok(result) => {
            let amortized = request
                .include_amortized_line
                .then(|| net_profit_with_amortization(&result, &params));
            ProjectionResponse {
                params,
                metrics: Some(KeyMetrics::from_result(&result)),
                summary: Some(result.summary()),
                net_profit_with_amortization: amortized,
                result: Some(result),
                execution_time_us: elapsed_us(start.elapsed()),
                error: None,
            }
        }
        Err(err) => {
            warn!("Rejected scenario: {}", err);
            ProjectionResponse {
                params,
                metrics: None,
                result: None,
                summary: None,
                net_profit_with_amortization: None,
                execution_time_us: elapsed_us(start.elapsed()),
                error: Some(err.to_string()),
            }
        }
    }
}

async fn handler(
    event: LambdaEvent<ProjectionRequest>,
    cache: &Mutex<ProjectionCache>,
) -> Result<ProjectionResponse, Error> {
    let (request, context) = event.into_parts();
    info!("Projection request {}", context.request_id);

    // Entries are inserted whole, so a poisoned lock still guards a consistent cache
    let mut cache = cache.lock().unwrap_or_else(PoisonError::into_inner);
    let response = project(&request, &mut cache);
    let stats = cache.stats();
    debug!(
        "Cache: {} entries, {} hits, {} misses, {} evictions",
        cache.len(),
        stats.hits,
        stats.misses,
        stats.evictions
    );
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let cache = Mutex::new(ProjectionCache::default());
    let cache = &cache;
    run(service_fn(move |event| async move { handler(event, cache).await })).await
}
