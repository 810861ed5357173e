//! Release wait modes.

use portable_atomic::{AtomicBool, Ordering};

/// How long to wait for the release once a press is confirmed.
///
/// The release is detected on raw reads, without a second debounce window.
#[derive(Debug, Clone, Copy, Default)]
pub enum ReleaseWait<'a> {
    /// Spin on the pin until it is released. Can block indefinitely while the
    /// button is held.
    #[default]
    Forever,
    /// Poll every sampling interval and give up after `us` microseconds.
    Timeout {
        /// Total polling time in microseconds.
        us: u64,
    },
    /// Spin until released or until the flag is set. The flag can be raised
    /// from an interrupt handler or another core.
    Until(&'a AtomicBool),
}

impl<'a> ReleaseWait<'a> {
    /// Timed wait of `ms` milliseconds. Every `u32` value is representable.
    pub const fn timeout_ms(ms: u32) -> Self {
        ReleaseWait::Timeout { us: ms as u64 * 1_000 }
    }

    /// Wait that gives up once `stop` is set.
    pub const fn until(stop: &'a AtomicBool) -> Self {
        ReleaseWait::Until(stop)
    }
}

/// What the release loop does after a read that still showed the active level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Next {
    /// Read again right away.
    Spin,
    /// Sleep this many microseconds, then read again.
    Sleep(u32),
    TimedOut,
    Cancelled,
}

/// Bookkeeping for one release wait.
pub(crate) struct Tracker<'a> {
    wait: ReleaseWait<'a>,
    step_us: u32,
    waited_us: u64,
}

impl<'a> Tracker<'a> {
    pub(crate) fn new(wait: ReleaseWait<'a>, interval_us: u32) -> Self {
        Self {
            wait,
            // A zero interval would never use up the timeout.
            step_us: interval_us.max(1),
            waited_us: 0,
        }
    }

    /// Called after every read that found the button still held.
    pub(crate) fn held(&mut self) -> Next {
        match self.wait {
            ReleaseWait::Forever => Next::Spin,
            ReleaseWait::Until(stop) => {
                if stop.load(Ordering::Acquire) {
                    Next::Cancelled
                } else {
                    Next::Spin
                }
            }
            ReleaseWait::Timeout { us } => {
                if self.waited_us >= us {
                    Next::TimedOut
                } else {
                    self.waited_us = self.waited_us.saturating_add(self.step_us as u64);
                    Next::Sleep(self.step_us)
                }
            }
        }
    }
}
