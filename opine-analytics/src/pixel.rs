//! Pixel dispatcher.
//!
//! Events are queued in memory and posted to the collector in batches.
//! Page views flush the queue immediately; conversions and transactions
//! that carry PII enqueue an anonymized duplicate before the full event.

use parking_lot::Mutex;
use serde_json::{Value, json};

use crate::config::AnalyticsConfig;
use crate::error::AnalyticsResult;
use crate::event::AnalyticsEvent;

/// Batched pixel dispatcher.
///
/// Owns its configuration; construct one per analytics configuration and
/// share it behind the client. Tracking never fails the calling query:
/// callers are expected to log and drop dispatch errors.
#[derive(Debug)]
pub struct Pixel {
    config: AnalyticsConfig,
    http: reqwest::Client,
    queue: Mutex<Vec<Value>>,
}

impl Pixel {
    /// Dispatcher for the given configuration.
    pub fn new(config: AnalyticsConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            queue: Mutex::new(Vec::new()),
        }
    }

    /// The dispatcher's configuration.
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Number of queued events awaiting a flush.
    pub fn pending(&self) -> usize {
        self.queue.lock().len()
    }

    /// Track an event.
    ///
    /// Most events only enqueue; page views also flush the queue so the
    /// collector sees them in near real time.
    pub async fn track(&self, event: AnalyticsEvent) -> AnalyticsResult<()> {
        if event.has_pii() {
            self.enqueue(&event.anonymized());
        }
        self.enqueue(&event);

        if matches!(event, AnalyticsEvent::PageView { .. }) {
            self.flush().await?;
        }
        Ok(())
    }

    /// Post all queued events to the collector.
    ///
    /// Returns the number of events flushed. In dry-run mode the queue is
    /// drained and logged without any network traffic.
    pub async fn flush(&self) -> AnalyticsResult<usize> {
        let batch: Vec<Value> = {
            let mut queue = self.queue.lock();
            queue.drain(..).collect()
        };
        if batch.is_empty() {
            return Ok(0);
        }

        let count = batch.len();
        if self.config.dry_run {
            tracing::debug!(count, "dry run, dropping pixel batch");
            return Ok(count);
        }

        let url = self.config.environment.events_url();
        tracing::debug!(count, url, "posting pixel batch");
        self.http
            .post(url)
            .json(&json!({ "batch": batch }))
            .send()
            .await?
            .error_for_status()?;
        Ok(count)
    }

    fn enqueue(&self, event: &AnalyticsEvent) {
        let payload = event.payload(&self.config);
        self.queue.lock().push(payload);
    }
}
