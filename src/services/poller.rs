//! Poller
//!
//! Periodic fetch loop scoped to a [`PollHandle`]. The first fetch fires
//! immediately, then one per period. Fetches are never awaited by the timer, so a
//! slow request can overlap the next tick; every fetch carries a sequence number
//! so the consumer can drop stale outcomes.
//!
//! Dropping the handle aborts the timer. Fetches already in flight run to
//! completion and their outcome is discarded if the receiver is gone.

use std::sync::Arc;
use std::time::Duration;

use futures::channel::mpsc::UnboundedSender;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::domain::Dataset;
use crate::error::Result;
use crate::services::DataSource;

/// Shortest accepted poll period
pub const MIN_POLL_PERIOD: Duration = Duration::from_secs(1);

/// Progress of one fetch, tagged with its sequence number
#[derive(Debug)]
pub enum FetchEvent {
    Started { seq: u64 },
    Finished { seq: u64, outcome: Result<Dataset> },
}

impl FetchEvent {
    pub fn seq(&self) -> u64 {
        match self {
            FetchEvent::Started { seq } | FetchEvent::Finished { seq, .. } => *seq,
        }
    }
}

/// Owner of a running poll timer
pub struct PollHandle {
    timer: JoinHandle<()>,
    period: Duration,
}

impl PollHandle {
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.timer.abort();
        info!(period_secs = self.period.as_secs(), "Stopped polling");
    }
}

/// Start polling `source` every `period` on `runtime`
///
/// Events are sent to `tx`; the timer stops by itself once the receiving end
/// is dropped.
pub fn spawn_poller<S: DataSource>(
    runtime: &Handle,
    source: Arc<S>,
    period: Duration,
    tx: UnboundedSender<FetchEvent>,
) -> PollHandle {
    let period = period.max(MIN_POLL_PERIOD);

    let timer = runtime.spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut seq = 0u64;

        loop {
            ticker.tick().await;
            seq += 1;

            if tx.unbounded_send(FetchEvent::Started { seq }).is_err() {
                debug!(seq, "Poll receiver dropped, stopping timer");
                break;
            }

            let source = source.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let outcome = source.fetch().await;
                if tx.unbounded_send(FetchEvent::Finished { seq, outcome }).is_err() {
                    debug!(seq, "Fetch completed after view teardown, result ignored");
                }
            });
        }
    });

    info!(period_secs = period.as_secs(), "Started polling");
    PollHandle { timer, period }
}
