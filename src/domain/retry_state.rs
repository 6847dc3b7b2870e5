use std::time::Duration;

/// Attempt bookkeeping for a single translation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryState {
    attempt: u32,
    max_attempts: u32,
    base_delay: Duration,
}

impl RetryState {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            attempt: 1,
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn has_next(&self) -> bool {
        self.attempt < self.max_attempts
    }

    /// Moves to the next attempt and returns the wait that must precede it:
    /// `base`, `2 * base`, `4 * base`, ...
    pub fn advance(&mut self) -> Option<Duration> {
        if !self.has_next() {
            return None;
        }
        self.attempt += 1;
        Some(self.backoff())
    }

    /// Wait that precedes the current attempt. The first attempt never waits.
    pub fn backoff(&self) -> Duration {
        if self.attempt <= 1 {
            return Duration::ZERO;
        }
        self.base_delay * 2_u32.pow(self.attempt - 2)
    }
}
