//! Background Tasks Module
//!
//! Contains background tasks that run periodically alongside the cache.
//!
//! # Tasks
//! - Expiry sweep: removes expired cache entries at a configured interval,
//!   either on the caller's runtime or on a dedicated thread

mod sweep;

pub use sweep::{spawn_sweep_task, spawn_sweep_thread};
