//! Interval Polling
//!
//! Re-runs a fetch on a fixed interval and hands every result to a
//! callback. Stops when dropped.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub struct Poller {
    task: JoinHandle<()>,
}

impl Poller {
    /// Start polling. The first fetch runs immediately.
    ///
    /// A fetch that overruns the interval delays the next tick instead of
    /// queueing a burst.
    pub fn start<F, Fut, T, C>(every: Duration, mut fetch: F, mut on_result: C) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send,
        T: Send,
        C: FnMut(T) + Send + 'static,
    {
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                tracing::debug!("Poll tick");
                on_result(fetch().await);
            }
        });

        Self { task }
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.task.abort();
    }
}
