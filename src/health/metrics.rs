//! Prometheus text exposition of process and cache counters.

use std::fmt::Write;
use std::time::Instant;

use crate::cache::CacheStatsSnapshot;

/// Renders metrics in the Prometheus text format.
pub fn render_metrics(stats: &CacheStatsSnapshot, started_at: Instant) -> String {
    let uptime = started_at.elapsed().as_secs_f64();
    let series: [(&str, &str, &str, String); 5] = [
        ("process_uptime_seconds", "gauge", "Process uptime in seconds", uptime.to_string()),
        ("cache_hits_total", "counter", "Total cache hits", stats.hits.to_string()),
        ("cache_misses_total", "counter", "Total cache misses", stats.misses.to_string()),
        (
            "cache_evictions_total",
            "counter",
            "Total capacity-driven cache evictions",
            stats.evictions.to_string(),
        ),
        ("cache_size", "gauge", "Current cache size", stats.size.to_string()),
    ];

    let mut out = String::new();
    for (name, kind, help, value) in series {
        // Writing to a String cannot fail
        let _ = writeln!(out, "# HELP {name} {help}");
        let _ = writeln!(out, "# TYPE {name} {kind}");
        let _ = writeln!(out, "{name} {value}");
        out.push('\n');
    }
    out
}
