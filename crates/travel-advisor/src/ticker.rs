use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

use crate::facts::FactSource;

/// Emits a fact right away on `start`, then one per `period` until stopped.
///
/// At most one schedule exists: `start` on a running ticker cancels the old
/// schedule before creating the new one.
pub struct FactTicker {
    source: Arc<dyn FactSource>,
    period: Duration,
    enabled: bool,
    sink: mpsc::UnboundedSender<String>,
    schedule: Option<JoinHandle<()>>,
}

impl FactTicker {
    pub fn new(
        source: Arc<dyn FactSource>,
        period: Duration,
        enabled: bool,
        sink: mpsc::UnboundedSender<String>,
    ) -> Self {
        Self {
            source,
            period,
            enabled,
            sink,
            schedule: None,
        }
    }

    pub fn start(&mut self) {
        if !self.enabled {
            return;
        }
        self.stop();

        let _ = self.sink.send(self.source.next_fact());

        let source = Arc::clone(&self.source);
        let sink = self.sink.clone();
        let period = self.period;
        let first = Instant::now() + period;
        self.schedule = Some(tokio::spawn(async move {
            let mut ticks = tokio::time::interval_at(first, period);
            loop {
                ticks.tick().await;
                if sink.send(source.next_fact()).is_err() {
                    break;
                }
            }
        }));
        debug!(period_ms = period.as_millis(), "fact ticker started");
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.schedule.take() {
            handle.abort();
            debug!("fact ticker stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.schedule.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for FactTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
