//! Health Module
//!
//! Component health checks and metrics exposition built on cache statistics.

mod checks;
mod metrics;

pub use checks::{aggregate_status, check_cache, health_report, readiness, HealthStatus};
pub use metrics::render_metrics;
