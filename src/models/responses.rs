//! Response DTOs for the cache service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStatsSnapshot;
use crate::health::HealthStatus;

/// Health of one component (GET /health)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentHealth {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// RFC 3339 time of the check
    pub last_checked: String,
}

impl ComponentHealth {
    /// Creates a component result stamped with the current time
    pub fn new(status: HealthStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: Some(message.into()),
            last_checked: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Components covered by the health report
#[derive(Debug, Clone, Serialize)]
pub struct HealthComponents {
    pub cache: ComponentHealth,
}

/// Response body for the detailed health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    /// Worst status across components
    pub status: HealthStatus,
    pub version: String,
    pub uptime_secs: f64,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    pub components: HealthComponents,
}

/// Response body for the liveness check (GET /health/live)
#[derive(Debug, Clone, Serialize)]
pub struct LivenessResponse {
    pub alive: bool,
    pub timestamp: String,
}

impl LivenessResponse {
    /// Creates a new LivenessResponse with current timestamp
    pub fn alive() -> Self {
        Self {
            alive: true,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Individual readiness checks
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessChecks {
    pub cache: bool,
}

/// Response body for the readiness check (GET /health/ready)
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

/// Response body for the stats endpoint (GET /cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of capacity-driven evictions
    pub evictions: u64,
    /// Current number of entries in cache
    pub size: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStatsSnapshot> for StatsResponse {
    fn from(stats: CacheStatsSnapshot) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            size: stats.size,
            hit_rate: stats.hit_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_health_serialize() {
        let component = ComponentHealth::new(HealthStatus::Degraded, "Cache stats unavailable");
        let json = serde_json::to_value(&component).unwrap();

        assert_eq!(json["status"], "degraded");
        assert_eq!(json["message"], "Cache stats unavailable");
        assert!(json.get("lastChecked").is_some());
    }

    #[test]
    fn test_liveness_serialize() {
        let json = serde_json::to_string(&LivenessResponse::alive()).unwrap();
        assert!(json.contains("\"alive\":true"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_stats_response_from_snapshot() {
        let resp = StatsResponse::from(CacheStatsSnapshot {
            hits: 80,
            misses: 20,
            size: 100,
            evictions: 5,
            hit_rate: 0.8,
        });
        assert_eq!(resp.hits, 80);
        assert_eq!(resp.size, 100);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
    }
}
