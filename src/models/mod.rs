//! Response models for the cache service API
//!
//! This module defines the DTOs (Data Transfer Objects) serialized into
//! HTTP response bodies.

pub mod responses;

// Re-export commonly used types
pub use responses::{
    ComponentHealth, HealthComponents, HealthReport, LivenessResponse, ReadinessChecks,
    ReadinessResponse, StatsResponse,
};
