//! # Reply Timer
//!
//! File: cli/src/chat/timer.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatrs
//!
//! ## Overview
//!
//! A small timer service for delayed bot replies. Each scheduled callback is a
//! Tokio task that sleeps for the requested delay and then runs the callback
//! once. Tasks are registered under the submission id that created them so a
//! pending reply can be cancelled.
//!
//! ## Cancellation
//!
//! A fired task and a `cancel()` call race for the same map entry. Whoever
//! removes the entry first wins: a task that finds its entry gone does not run
//! its callback, and `cancel()` on an entry that is already gone reports
//! `false`. The registry lock is held while a task is spawned and inserted, so
//! even a zero delay cannot fire before its entry exists.
//!
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// Identifier assigned to each accepted submission.
pub type SubmissionId = u64;

type TaskMap = HashMap<SubmissionId, JoinHandle<()>>;

/// Cancellable one-shot timers keyed by submission id.
#[derive(Debug, Clone, Default)]
pub struct ReplyTimer {
    tasks: Arc<Mutex<TaskMap>>,
}

fn lock(tasks: &Mutex<TaskMap>) -> MutexGuard<'_, TaskMap> {
    // The map stays consistent even if a holder panicked.
    tasks.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl ReplyTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `callback` after `delay` unless `id` is cancelled first.
    ///
    /// Must be called from within a Tokio runtime. Scheduling an id that is
    /// already pending replaces (and aborts) the earlier task.
    pub fn schedule<F>(&self, id: SubmissionId, delay: Duration, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let registry = Arc::clone(&self.tasks);
        let mut tasks = lock(&self.tasks);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let claimed = lock(&registry).remove(&id).is_some();
            if claimed {
                trace!("Reply timer {} fired", id);
                callback();
            }
        });
        if let Some(previous) = tasks.insert(id, handle) {
            previous.abort();
        }
        debug!("Scheduled reply {} in {:?}", id, delay);
    }

    /// Cancels a pending timer. Returns `false` if it already fired or never existed.
    pub fn cancel(&self, id: SubmissionId) -> bool {
        match lock(&self.tasks).remove(&id) {
            Some(handle) => {
                handle.abort();
                debug!("Cancelled reply {}", id);
                true
            }
            None => false,
        }
    }

    /// Aborts every pending timer.
    pub fn cancel_all(&self) {
        let mut tasks = lock(&self.tasks);
        for (_, handle) in tasks.drain() {
            handle.abort();
        }
    }

    /// Number of timers that have neither fired nor been cancelled.
    pub fn pending(&self) -> usize {
        lock(&self.tasks).len()
    }
}
