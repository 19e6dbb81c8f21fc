//! Periodic removal of expired session records.
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tracing_log_error::log_error;
use web_session::SessionStore;

#[derive(serde::Deserialize, Debug, Clone)]
#[serde(default)]
/// How often expired sessions are purged from the store.
///
/// ```yaml
/// session_cleanup:
///   interval: 10m
///   batch_size: 1000
/// ```
pub struct SessionCleanupConfig {
    /// Time between two cleanup batches.
    #[serde(with = "humantime_serde")]
    pub interval: Duration,
    /// The maximum number of records deleted by a single batch.
    pub batch_size: NonZeroUsize,
}

impl Default for SessionCleanupConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(10 * 60),
            batch_size: NonZeroUsize::new(1000).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

/// Delete one batch of expired sessions every [`SessionCleanupConfig::interval`].
///
/// It never returns: spawn it as a background task.
pub async fn delete_expired_sessions(store: Arc<SessionStore>, config: SessionCleanupConfig) {
    let mut interval = tokio::time::interval(config.interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        interval.tick().await;
        delete_expired_batch(&store, config.batch_size).await;
    }
}

/// Delete up to `batch_size` expired sessions, returning how many were removed.
///
/// Failures are logged and reported as zero deletions; the next batch will
/// try again.
pub async fn delete_expired_batch(store: &SessionStore, batch_size: NonZeroUsize) -> usize {
    match store.delete_expired(Some(batch_size)).await {
        Ok(0) => 0,
        Ok(n) => {
            tracing::debug!(deleted = n, "Deleted a batch of expired sessions");
            n
        }
        Err(e) => {
            log_error!(e, "Failed to delete a batch of expired sessions");
            0
        }
    }
}
