use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;

use crate::retry::send_with_retry;
use crate::{DispatchConfig, EmailResult, Notification, NotificationService};

/// Pause between bulk batches, keeping runs under provider rate limits.
pub const INTER_BATCH_DELAY: Duration = Duration::from_millis(1000);

/// Observer for bulk dispatch progress.
///
/// Called after every batch settles, the final one included, with the
/// results accumulated so far in input order.
#[async_trait]
pub trait BulkProgress: Send + Sync {
    async fn on_batch(&self, completed: usize, total: usize, results: &[EmailResult]);
}

#[derive(Clone)]
pub struct BulkOptions {
    /// Emails sent in parallel within one batch.
    pub concurrency: usize,
    /// Retry transport failures within each send.
    pub retry: bool,
    /// Per-send settings for this run.
    pub dispatch: DispatchConfig,
    pub progress: Option<Arc<dyn BulkProgress>>,
}

impl Default for BulkOptions {
    fn default() -> Self {
        Self {
            concurrency: 5,
            retry: false,
            dispatch: DispatchConfig::default(),
            progress: None,
        }
    }
}

impl BulkOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_retry(mut self, retry: bool) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_dispatch(mut self, dispatch: DispatchConfig) -> Self {
        self.dispatch = dispatch;
        self
    }

    pub fn with_progress(mut self, progress: Arc<dyn BulkProgress>) -> Self {
        self.progress = Some(progress);
        self
    }
}

impl NotificationService {
    /// Sends many notifications in rate-limited batches.
    ///
    /// Notifications go out `options.concurrency` at a time; batches run
    /// sequentially with [`INTER_BATCH_DELAY`] between them. Results come
    /// back in input order, one per notification, so callers can line up
    /// failures with their source rows. One failed send never aborts the
    /// run or its batch siblings.
    pub async fn send_bulk(
        &self,
        notifications: &[Notification],
        options: &BulkOptions,
    ) -> Vec<EmailResult> {
        let total = notifications.len();
        let batch_size = options.concurrency.max(1);
        let mut results = Vec::with_capacity(total);

        tracing::info!(total, batch_size, "starting bulk dispatch");

        for (index, batch) in notifications.chunks(batch_size).enumerate() {
            if index > 0 {
                tokio::time::sleep(INTER_BATCH_DELAY).await;
            }

            let batch_results = join_all(batch.iter().map(|n| self.send_one(n, options))).await;
            results.extend(batch_results);

            tracing::debug!(
                completed = results.len(),
                total,
                batch = index + 1,
                "bulk batch settled"
            );

            if let Some(progress) = &options.progress {
                progress.on_batch(results.len(), total, &results).await;
            }
        }

        let failed = results.iter().filter(|r| !r.is_success()).count();
        tracing::info!(total, failed, "bulk dispatch finished");

        results
    }

    async fn send_one(&self, notification: &Notification, options: &BulkOptions) -> EmailResult {
        if options.retry {
            send_with_retry(&options.dispatch, || {
                self.dispatch_with_config(notification, &options.dispatch)
            })
            .await
        } else {
            self.dispatch_with_config(notification, &options.dispatch)
                .await
        }
    }
}
