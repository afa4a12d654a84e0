use std::time::{Duration, Instant};

/// Quiet period between a filter change and the fetch it triggers, so a
/// burst of refinements collapses into one request.
pub const REFRESH_DEBOUNCE: Duration = Duration::from_millis(450);

/// Trailing-edge debounce. Every `trigger` pushes the deadline out by the
/// full window; `fire` reports (and consumes) an elapsed deadline. Takes
/// explicit instants so behavior is checkable without sleeping.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Debouncer {
        Debouncer {
            window,
            deadline: None,
        }
    }

    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// True exactly once per elapsed deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }
}
