//! Cancellable delayed delivery of the latest value
//!
//! Used by search boxes: every keystroke reschedules the timer, and only the
//! value of the timer that actually completes is delivered.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct Debouncer<T> {
    delay: Duration,
    generation: u64,
    pending: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<(u64, T)>,
    rx: mpsc::UnboundedReceiver<(u64, T)>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            delay,
            generation: 0,
            pending: None,
            tx,
            rx,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start a new timer for `value`, cancelling any pending one
    pub fn schedule(&mut self, value: T) {
        self.cancel();

        let generation = self.generation;
        let delay = self.delay;
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send((generation, value));
        }));
    }

    /// Drop the pending timer; a value it already sent is ignored as well
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Resolve with the value of the timer that completed
    ///
    /// Pends forever while nothing is scheduled. Cancel safe, so it can sit
    /// in a `tokio::select!` arm.
    pub async fn fired(&mut self) -> T {
        loop {
            match self.rx.recv().await {
                Some((generation, value)) if generation == self.generation => {
                    self.pending = None;
                    return value;
                }
                Some(_) => continue,
                // The sender half lives in `self`, so the channel never closes
                None => std::future::pending::<()>().await,
            }
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
