//! Health Checks
//!
//! Turns cache statistics into component health. A cache that cannot report
//! statistics is degraded, never unhealthy: the cache only affects latency.

use std::time::Instant;

use serde::Serialize;

use crate::models::{ComponentHealth, HealthComponents, HealthReport, ReadinessChecks, ReadinessResponse};
use crate::service::CacheService;

// == Health Status ==
/// Health of a single component or of the whole service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

// == Cache Check ==
/// Reports cache health from its hit rate and size.
pub fn check_cache(cache: &CacheService) -> ComponentHealth {
    match cache.try_stats() {
        Ok(stats) => ComponentHealth::new(
            HealthStatus::Healthy,
            format!(
                "Cache hit rate: {:.1}%, size: {}",
                stats.hit_rate * 100.0,
                stats.size
            ),
        ),
        Err(_) => ComponentHealth::new(HealthStatus::Degraded, "Cache stats unavailable"),
    }
}

// == Aggregate ==
/// Worst status wins: any unhealthy component makes the service unhealthy,
/// otherwise any degraded component makes it degraded.
pub fn aggregate_status<'a>(components: impl IntoIterator<Item = &'a ComponentHealth>) -> HealthStatus {
    components
        .into_iter()
        .map(|component| component.status)
        .max()
        .unwrap_or(HealthStatus::Healthy)
}

// == Report ==
/// Builds the detailed health report.
///
/// # Arguments
/// * `cache` - Cache to inspect
/// * `started_at` - Process start, used for uptime
pub fn health_report(cache: &CacheService, started_at: Instant) -> HealthReport {
    let components = HealthComponents {
        cache: check_cache(cache),
    };
    let status = aggregate_status([&components.cache]);

    HealthReport {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: started_at.elapsed().as_secs_f64(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        components,
    }
}

/// Builds the readiness payload: ready when cache state is readable.
pub fn readiness(cache: &CacheService) -> ReadinessResponse {
    let cache_ready = cache.try_stats().is_ok();
    ReadinessResponse {
        ready: cache_ready,
        checks: ReadinessChecks { cache: cache_ready },
    }
}
