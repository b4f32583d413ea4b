//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries, in
//! addition to the lazy removal performed on reads.

use std::io;
use std::thread;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::service::CacheService;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The first sweep happens one `interval` after spawning. Each sweep is a
/// single synchronous pass over the store under its lock.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = CacheService::new(1000, CacheTtl::MEDIUM);
/// let sweep_handle = spawn_sweep_task(cache.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task(cache: CacheService, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(run_sweep_loop(cache, interval))
}

/// Runs the sweep on a dedicated OS thread with its own single-threaded
/// runtime, for caches that must outlive any particular tokio runtime.
///
/// The thread runs for the rest of the process.
pub fn spawn_sweep_thread(
    cache: CacheService,
    interval: Duration,
) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("cache-sweep".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!("Failed to build cache sweep runtime: {}", e);
                    return;
                }
            };
            runtime.block_on(run_sweep_loop(cache, interval));
        })
}

async fn run_sweep_loop(cache: CacheService, interval: Duration) {
    info!(
        interval_secs = interval.as_secs_f64(),
        "Starting cache expiry sweep task"
    );

    let mut ticker = time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately
    ticker.tick().await;

    loop {
        ticker.tick().await;

        let removed = cache.sweep_expired();
        if removed > 0 {
            info!("Cache sweep: removed {} expired entries", removed);
        } else {
            debug!("Cache sweep: no expired entries found");
        }
    }
}
