//! Entity Cache - in-process LRU cache service
//!
//! Memoizes entity reads with TTL expiration and LRU eviction, and reports
//! its statistics through health and metrics endpoints.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod health;
pub mod models;
pub mod service;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheKeys, CacheTtl};
pub use config::Config;
pub use error::{CacheError, Result};
pub use service::CacheService;
pub use tasks::{spawn_sweep_task, spawn_sweep_thread};
