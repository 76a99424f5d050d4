//! Debounced Search
//!
//! Coalesces keystrokes into one delayed search: each input cancels the
//! pending callback and schedules a fresh one with the trimmed value.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;

/// Runs a callback after a delay. Dropping the handle cancels the callback.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    /// Replace any pending search with one for `raw`
    pub fn input(&self, raw: &str, fire: impl FnOnce(String) + 'static) {
        let query = raw.trim().to_string();
        self.cancel();
        let handle = self
            .scheduler
            .schedule(self.delay_ms, Box::new(move || fire(query)));
        *self.pending.borrow_mut() = Some(handle);
    }

    pub fn cancel(&self) {
        // Take first so the handle is dropped outside the borrow
        let pending = self.pending.borrow_mut().take();
        drop(pending);
    }
}
