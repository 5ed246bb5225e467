//! Waiting between animation frames and simulated network steps.

use std::cell::RefCell;
use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

/// Whether a paced sequence should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Cancelled,
}

impl Flow {
    pub fn is_cancelled(self) -> bool {
        matches!(self, Flow::Cancelled)
    }
}

pub trait Pacer {
    /// Wait for `duration`, or less if the sequence was cancelled.
    fn pause(&self, duration: Duration) -> Flow;
}

impl<P: Pacer + ?Sized> Pacer for Box<P> {
    fn pause(&self, duration: Duration) -> Flow {
        (**self).pause(duration)
    }
}

/// Sleeps the calling thread for the full duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingPacer;

impl Pacer for BlockingPacer {
    fn pause(&self, duration: Duration) -> Flow {
        thread::sleep(duration);
        Flow::Continue
    }
}

const POLL_SLICE: Duration = Duration::from_millis(25);

/// Sleeps in short slices and stops early once the token is cancelled.
///
/// The token can be cancelled from any thread, e.g. a Ctrl-C handler.
#[derive(Debug, Clone, Default)]
pub struct CancellablePacer {
    token: CancellationToken,
}

impl CancellablePacer {
    pub fn new(token: CancellationToken) -> Self {
        Self { token }
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }
}

impl Pacer for CancellablePacer {
    fn pause(&self, duration: Duration) -> Flow {
        let deadline = Instant::now() + duration;
        loop {
            if self.token.is_cancelled() {
                return Flow::Cancelled;
            }
            let now = Instant::now();
            if now >= deadline {
                return Flow::Continue;
            }
            thread::sleep(POLL_SLICE.min(deadline - now));
        }
    }
}

/// Never waits; remembers what it was asked to wait for.
#[derive(Debug, Clone, Default)]
pub struct InstantPacer {
    waits: Rc<RefCell<Vec<Duration>>>,
}

impl InstantPacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn waits(&self) -> Vec<Duration> {
        self.waits.borrow().clone()
    }

    pub fn total(&self) -> Duration {
        self.waits.borrow().iter().sum()
    }
}

impl Pacer for InstantPacer {
    fn pause(&self, duration: Duration) -> Flow {
        self.waits.borrow_mut().push(duration);
        Flow::Continue
    }
}
