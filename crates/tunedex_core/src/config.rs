//! Catalog configuration.

use crate::error::{CoreError, CoreResult};
use std::time::{Duration, Instant};

/// Bounded retry policy for transient connectivity failures.
///
/// This governs the health round-trip at the start of every catalog
/// operation; it is distinct from the allocator's randomized redraws,
/// which handle identifier collisions rather than connectivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first failed attempt.
    pub max_retries: u32,
    /// Base wait between attempts; attempt `n` waits `n * backoff`.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            backoff: Duration::from_millis(50),
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            max_retries: 0,
            backoff: Duration::ZERO,
        }
    }
}

/// Configuration for a catalog handle.
#[derive(Debug, Clone)]
pub struct Config {
    /// Keyspace examined per scan round-trip during search.
    pub scan_count_hint: usize,

    /// Random draws the allocator makes before giving up.
    pub max_id_attempts: usize,

    /// Optional wall-clock bound per public operation, checked at
    /// round-trip boundaries. `None` disables the bound.
    pub op_deadline: Option<Duration>,

    /// Retry policy for the operation-start health round-trip.
    pub retry: RetryPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan_count_hint: 5,
            max_id_attempts: 50,
            op_deadline: None,
            retry: RetryPolicy::default(),
        }
    }
}

impl Config {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scan batch hint.
    #[must_use]
    pub const fn scan_count_hint(mut self, hint: usize) -> Self {
        self.scan_count_hint = hint;
        self
    }

    /// Sets the allocator attempt budget.
    #[must_use]
    pub const fn max_id_attempts(mut self, attempts: usize) -> Self {
        self.max_id_attempts = attempts;
        self
    }

    /// Sets the per-operation deadline.
    #[must_use]
    pub const fn op_deadline(mut self, deadline: Duration) -> Self {
        self.op_deadline = Some(deadline);
        self
    }

    /// Sets the connectivity retry policy.
    #[must_use]
    pub const fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

/// A running operation's wall-clock bound.
///
/// Checked at round-trip boundaries so a slow or hung store call cannot
/// extend an operation indefinitely past its budget.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    started: Instant,
    limit: Option<Duration>,
}

impl Deadline {
    /// Starts the clock for one operation.
    #[must_use]
    pub fn start(limit: Option<Duration>) -> Self {
        Self {
            started: Instant::now(),
            limit,
        }
    }

    /// A deadline that never expires.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::start(None)
    }

    /// Errors once the limit has passed.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DeadlineExceeded`] when the elapsed time has
    /// reached the limit.
    pub fn check(&self) -> CoreResult<()> {
        match self.limit {
            Some(limit) if self.started.elapsed() >= limit => {
                let elapsed_ms = u64::try_from(self.started.elapsed().as_millis())
                    .unwrap_or(u64::MAX);
                Err(CoreError::deadline_exceeded(elapsed_ms))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.scan_count_hint, 5);
        assert_eq!(config.max_id_attempts, 50);
        assert!(config.op_deadline.is_none());
    }

    #[test]
    fn builder_pattern() {
        let config = Config::new()
            .scan_count_hint(32)
            .max_id_attempts(10)
            .op_deadline(Duration::from_secs(2))
            .retry(RetryPolicy::none());

        assert_eq!(config.scan_count_hint, 32);
        assert_eq!(config.max_id_attempts, 10);
        assert_eq!(config.op_deadline, Some(Duration::from_secs(2)));
        assert_eq!(config.retry.max_retries, 0);
    }

    #[test]
    fn unbounded_deadline_never_expires() {
        let deadline = Deadline::unbounded();
        assert!(deadline.check().is_ok());
    }

    #[test]
    fn zero_deadline_expires_immediately() {
        let deadline = Deadline::start(Some(Duration::ZERO));
        assert!(matches!(
            deadline.check(),
            Err(CoreError::DeadlineExceeded { .. })
        ));
    }
}
