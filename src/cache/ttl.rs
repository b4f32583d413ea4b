//! TTL presets used by call sites instead of inline durations.

use std::time::Duration;

/// Named cache lifetimes.
pub struct CacheTtl;

impl CacheTtl {
    /// Frequently changing data
    pub const SHORT: Duration = Duration::from_secs(30);
    /// Default lifetime
    pub const MEDIUM: Duration = Duration::from_secs(5 * 60);
    /// Rarely changing data
    pub const LONG: Duration = Duration::from_secs(30 * 60);
    pub const HOUR: Duration = Duration::from_secs(60 * 60);
}
