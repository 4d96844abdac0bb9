//! Confirmation polling.
//!
//! After submission a transaction takes a moment to become visible, then an
//! unbounded number of polls until the chain reports a terminal status. The
//! schedule waits a fixed settle delay, then retries with a linearly
//! incrementing wait; it stops on total elapsed time, never on attempt
//! count.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::error::{ClientError, Result};

/// Timing parameters for confirmation polling.
#[derive(Clone, Copy, Debug)]
pub struct PollSchedule {
    /// Wait before the first status lookup; submission-to-visibility lag.
    pub settle_delay: Duration,
    /// Wait after the first unresolved attempt.
    pub wait_base: Duration,
    /// Additional wait added for each subsequent attempt.
    pub wait_increment: Duration,
    /// Wall-clock ceiling, measured from the first attempt.
    pub deadline: Duration,
}

impl Default for PollSchedule {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_secs(1),
            wait_base: Duration::from_secs(1),
            wait_increment: Duration::from_secs(2),
            deadline: Duration::from_secs(30),
        }
    }
}

/// Polls `lookup` until it yields a value or the schedule's deadline
/// elapses.
///
/// Attempts are strictly sequential on the calling task; suspension
/// happens only at the sleeps between attempts. An `Err` from `lookup` is
/// treated like an unresolved attempt and retried.
pub async fn poll_until_resolved<T, F, Fut>(
    tx_id: &str,
    schedule: PollSchedule,
    mut lookup: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>>>,
{
    tokio::time::sleep(schedule.settle_delay).await;

    let started = Instant::now();
    let mut attempt: u32 = 0;
    loop {
        match lookup().await {
            Ok(Some(resolved)) => return Ok(resolved),
            Ok(None) => {}
            Err(err) => {
                tracing::debug!(%tx_id, %err, "confirmation lookup failed, retrying");
            }
        }
        if started.elapsed() >= schedule.deadline {
            return Err(ClientError::ConfirmationTimeout {
                tx_id: tx_id.to_owned(),
            });
        }
        attempt += 1;
        tokio::time::sleep(schedule.wait_base + schedule.wait_increment * (attempt - 1)).await;
    }
}
