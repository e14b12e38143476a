//! Process-wide shutdown coordination.
//! The ctrlc handler sets a flag that the batch loop checks between files.
//! A second flag tells the handler whether we are blocked on a prompt, in
//! which case nothing is in flight and it may exit straight away.
//!
//! Notes:
//! - Relaxed atomics are sufficient for one-way flags.
//! - `request()` is safe to call from signal handlers.

use std::sync::atomic::{AtomicBool, Ordering};

static SHUTDOWN: AtomicBool = AtomicBool::new(false);
static AWAITING_INPUT: AtomicBool = AtomicBool::new(false);

/// Request a cooperative shutdown (idempotent).
#[inline]
pub fn request() {
    SHUTDOWN.store(true, Ordering::Relaxed);
}

/// Check whether a shutdown has been requested.
#[inline]
pub fn is_requested() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}

/// True while a prompt is waiting for a line of input.
#[inline]
pub fn is_awaiting_input() -> bool {
    AWAITING_INPUT.load(Ordering::Relaxed)
}

/// Marks the process as blocked on user input until dropped.
#[derive(Debug)]
pub struct AwaitingInput(());

impl AwaitingInput {
    pub fn enter() -> Self {
        AWAITING_INPUT.store(true, Ordering::Relaxed);
        AwaitingInput(())
    }
}

impl Drop for AwaitingInput {
    fn drop(&mut self) {
        AWAITING_INPUT.store(false, Ordering::Relaxed);
    }
}

/// Clear the shutdown flag; tests reset it between runs.
#[inline]
pub fn reset() {
    SHUTDOWN.store(false, Ordering::Relaxed);
}
