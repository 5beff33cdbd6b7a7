// Background refresh worker (same cycle as the original viewer's ticker
// goroutine): run the external collection command, reload the snapshot
// directory, swap the store only when the new load is non-empty.

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;

use tokio::time::{Duration, interval, timeout};

use crate::stats_repo;
use crate::store::CatalogStore;

/// Store handle and shutdown for the worker.
pub struct WorkerDeps {
    pub store: Arc<CatalogStore>,
    pub shutdown_rx: tokio::sync::oneshot::Receiver<()>,
}

/// Refresh timing and collection config.
pub struct WorkerConfig {
    pub stats_dir: PathBuf,
    pub interval_secs: u64,
    /// Shell command that produces fresh snapshot files, if any.
    pub collect_command: Option<String>,
    /// Deadline for the collection command. A hung collector must not
    /// stall later refresh ticks, so the call is time-bounded.
    pub collect_timeout_secs: u64,
}

pub fn spawn(deps: WorkerDeps, config: WorkerConfig) -> tokio::task::JoinHandle<()> {
    let WorkerDeps {
        store,
        mut shutdown_rx,
    } = deps;

    tokio::spawn(async move {
        let mut tick = interval(Duration::from_secs(config.interval_secs));
        tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        // interval fires immediately; the initial load already happened in main
        tick.tick().await;

        loop {
            tokio::select! {
                _ = tick.tick() => {
                    refresh_once(&store, &config).await;
                }
                _ = &mut shutdown_rx => {
                    tracing::debug!("Refresh worker shutting down");
                    break;
                }
            }
        }
    })
}

/// One refresh cycle. Any failure (collection, reload, empty result)
/// leaves the previous catalog fully intact; there is no retry before the
/// next tick.
pub async fn refresh_once(store: &CatalogStore, config: &WorkerConfig) {
    if let Some(command) = &config.collect_command
        && let Err(e) = run_collect(command, config.collect_timeout_secs).await
    {
        tracing::warn!(error = %e, operation = "collect", "collection step failed; keeping previous catalog");
        return;
    }

    let dir = config.stats_dir.clone();
    let loaded = tokio::task::spawn_blocking(move || stats_repo::load_catalog(&dir)).await;

    let catalog = match loaded {
        Ok(Ok(catalog)) => catalog,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, operation = "load_catalog", "refresh load failed; keeping previous catalog");
            return;
        }
        Err(e) => {
            tracing::warn!(error = %e, operation = "load_catalog", "refresh task panicked; keeping previous catalog");
            return;
        }
    };

    if catalog.is_empty() {
        tracing::warn!(
            path = %config.stats_dir.display(),
            "refresh found no snapshot files; keeping previous catalog"
        );
        return;
    }

    let snapshots = catalog.len();
    store.replace(catalog).await;
    tracing::info!(snapshots, "catalog refreshed");
}

async fn run_collect(command: &str, timeout_secs: u64) -> anyhow::Result<()> {
    let child = tokio::process::Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .kill_on_drop(true)
        .status();

    let status = timeout(Duration::from_secs(timeout_secs), child)
        .await
        .map_err(|_| anyhow::anyhow!("collection command timed out after {timeout_secs}s"))??;

    anyhow::ensure!(status.success(), "collection command exited with {status}");
    Ok(())
}
