//! Time-bounded tagging.
//!
//! Model inference is the only expensive step of an analysis. The
//! [`TimeoutTagger`] runs the wrapped tagger on a worker thread and gives up
//! once the caller-supplied limit has passed. Expiry is reported as
//! [`LemmatizerError::Timeout`] and never retried. The worker is detached,
//! so a late result is discarded.
//!
//! A detached worker keeps its thread until the wrapped tagger returns. A
//! tagger that hangs for good therefore leaks one thread per timed-out call.
//! [`TimeoutTagger::pending_workers`] reports how many workers are still
//! running, and [`TimeoutTagger::with_max_pending`] refuses new calls once
//! that many are outstanding.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use crossbeam_channel::{RecvTimeoutError, bounded};

use crate::analysis::tagger::Tagger;
use crate::analysis::token::TaggedSpan;
use crate::error::{LemmatizerError, Result};

/// Wraps a tagger with a per-call time limit.
///
/// Clones share the count of running workers.
#[derive(Clone)]
pub struct TimeoutTagger {
    inner: Arc<dyn Tagger>,
    timeout: Duration,
    max_pending: Option<usize>,
    pending: Arc<AtomicUsize>,
}

/// Decrements the running-worker count when the worker ends, panics included.
struct PendingGuard(Arc<AtomicUsize>);

impl PendingGuard {
    fn register(pending: &Arc<AtomicUsize>) -> Self {
        pending.fetch_add(1, Ordering::SeqCst);
        PendingGuard(Arc::clone(pending))
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for TimeoutTagger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeoutTagger")
            .field("inner", &self.inner.name())
            .field("timeout", &self.timeout)
            .field("max_pending", &self.max_pending)
            .field("pending", &self.pending_workers())
            .finish()
    }
}

impl TimeoutTagger {
    pub fn new(inner: Arc<dyn Tagger>, timeout: Duration) -> Self {
        TimeoutTagger {
            inner,
            timeout,
            max_pending: None,
            pending: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Refuse to start a call while `max_pending` workers are still running.
    pub fn with_max_pending(mut self, max_pending: usize) -> Self {
        self.max_pending = Some(max_pending);
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Number of worker threads that have not returned yet, including those
    /// abandoned after a timeout.
    pub fn pending_workers(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }
}

impl Tagger for TimeoutTagger {
    fn tag(&self, text: &str) -> Result<Vec<TaggedSpan>> {
        if let Some(max_pending) = self.max_pending {
            let pending = self.pending_workers();
            if pending >= max_pending {
                return Err(LemmatizerError::tagger(format!(
                    "tagger '{}' still has {pending} unfinished calls",
                    self.inner.name()
                )));
            }
        }

        let (sender, receiver) = bounded(1);
        let inner = Arc::clone(&self.inner);
        let text = text.to_string();
        let guard = PendingGuard::register(&self.pending);

        thread::Builder::new()
            .name(format!("tagger-{}", inner.name()))
            .spawn(move || {
                let _guard = guard;
                let _ = sender.send(inner.tag(&text));
            })?;

        match receiver.recv_timeout(self.timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(LemmatizerError::timeout(format!(
                "tagger '{}' did not finish within {:?}",
                self.inner.name(),
                self.timeout
            ))),
            Err(RecvTimeoutError::Disconnected) => Err(LemmatizerError::tagger(format!(
                "tagger '{}' stopped without producing a result",
                self.inner.name()
            ))),
        }
    }

    fn name(&self) -> &'static str {
        "timeout"
    }
}
