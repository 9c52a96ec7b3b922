//! Rate limiting for re-synthesis
//!
//! Bursts of edits collapse into the latest value once input has been quiet
//! for a while, and results are only accepted in revision order.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

/// Yields only the most recent value of each burst sent on a channel.
pub struct Debouncer<T> {
    rx: mpsc::Receiver<T>,
    quiet: Duration,
}

impl<T> Debouncer<T> {
    pub fn new(rx: mpsc::Receiver<T>, quiet: Duration) -> Self {
        Self { rx, quiet }
    }

    /// Waits for a value, then keeps replacing it with newer ones until
    /// nothing arrives for `quiet`. Returns `None` once the channel is closed
    /// and drained.
    pub async fn settled(&mut self) -> Option<T> {
        let mut latest = self.rx.recv().await?;
        loop {
            match timeout(self.quiet, self.rx.recv()).await {
                Ok(Some(value)) => latest = value,
                Ok(None) | Err(_) => return Some(latest),
            }
        }
    }
}

/// Holds the result for the newest revision seen so far. Results computed
/// from an older revision than the applied one are rejected, whatever order
/// they complete in.
#[derive(Debug, Default)]
pub struct RevisionGate<T> {
    applied: Option<(u64, T)>,
}

impl<T> RevisionGate<T> {
    pub fn new() -> Self {
        Self { applied: None }
    }

    /// Returns true when `value` was accepted.
    pub fn offer(&mut self, revision: u64, value: T) -> bool {
        if let Some((applied, _)) = &self.applied {
            if revision <= *applied {
                return false;
            }
        }
        self.applied = Some((revision, value));
        true
    }

    pub fn revision(&self) -> Option<u64> {
        self.applied.as_ref().map(|(revision, _)| *revision)
    }

    pub fn current(&self) -> Option<&T> {
        self.applied.as_ref().map(|(_, value)| value)
    }
}
