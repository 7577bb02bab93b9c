//! Debounce
//!
//! Holds back a changing value until it has been stable for a fixed delay.
//! Only the most recent value survives; anything it superseded is dropped
//! without ever being observed.
//!
//! [`Debounce`] is the timer-agnostic core. Whoever owns the timer calls
//! [`Debounce::schedule`] on every change, arms a timer for
//! [`Debounce::delay`], and hands the [`Ticket`] back to [`Debounce::fire`]
//! when it expires. A stale ticket fires nothing. The browser drives it with
//! `gloo-timers`; [`Debouncer`] drives it with tokio.

use std::time::Duration;

/// Handle for one scheduled value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Latest-value-wins debounce state
#[derive(Debug)]
pub struct Debounce<T> {
    delay: Duration,
    generation: u64,
    pending: Option<(u64, T)>,
}

impl<T> Debounce<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Stage `value`, discarding whatever was pending.
    ///
    /// The caller must (re)start its timer with the returned ticket.
    pub fn schedule(&mut self, value: T) -> Ticket {
        self.generation += 1;
        self.pending = Some((self.generation, value));
        Ticket(self.generation)
    }

    /// Timer for `ticket` expired.
    ///
    /// Returns the staged value if `ticket` is still the latest one.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        match self.pending.take() {
            Some((generation, value)) if generation == ticket.0 => Some(value),
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Drop the pending value; every outstanding ticket becomes stale.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(feature = "native")]
pub use driver::Debouncer;

#[cfg(feature = "native")]
mod driver {
    use super::{Debounce, Ticket};
    use std::time::Duration;
    use tokio::sync::{mpsc, watch};
    use tokio::task::JoinHandle;

    /// Tokio-driven debouncer
    ///
    /// Values pushed with [`Debouncer::set`] come out of
    /// [`Debouncer::subscribe`] once they have been stable for the delay.
    /// Dropping the debouncer cancels any pending value.
    pub struct Debouncer<T> {
        input: mpsc::UnboundedSender<T>,
        output: watch::Receiver<T>,
        task: JoinHandle<()>,
    }

    impl<T> Debouncer<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        /// Must be called from within a tokio runtime.
        pub fn new(initial: T, delay: Duration) -> Self {
            let (input, mut rx) = mpsc::unbounded_channel::<T>();
            let (out_tx, output) = watch::channel(initial);

            let task = tokio::spawn(async move {
                let mut state = Debounce::new(delay);
                let mut armed: Option<Ticket> = None;

                loop {
                    let Some(ticket) = armed else {
                        match rx.recv().await {
                            Some(value) => armed = Some(state.schedule(value)),
                            None => break,
                        }
                        continue;
                    };

                    tokio::select! {
                        next = rx.recv() => match next {
                            Some(value) => armed = Some(state.schedule(value)),
                            None => break,
                        },
                        _ = tokio::time::sleep(state.delay()) => {
                            if let Some(value) = state.fire(ticket) {
                                tracing::trace!("Debounced value settled");
                                out_tx.send_replace(value);
                            }
                            armed = None;
                        }
                    }
                }

                state.cancel();
            });

            Self {
                input,
                output,
                task,
            }
        }

        /// Feed a new input value; restarts the wait.
        pub fn set(&self, value: T) {
            let _ = self.input.send(value);
        }

        /// Last settled value
        pub fn current(&self) -> T {
            self.output.borrow().clone()
        }

        pub fn subscribe(&self) -> watch::Receiver<T> {
            self.output.clone()
        }
    }

    impl<T> Drop for Debouncer<T> {
        fn drop(&mut self) {
            self.task.abort();
        }
    }
}
