//! Polling budgets

use std::time::Duration;

/// Delay between two successful non-terminal status checks
pub const POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Budgets for watching a single job
///
/// Both budgets are strictly positive. A requested value of zero selects the
/// default instead of disabling polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    max_checks: u32,
    max_failures: u32,
}

impl PollConfig {
    /// Default number of status checks before giving up
    pub const DEFAULT_MAX_CHECKS: u32 = 60;

    /// Default number of consecutive failed fetches tolerated
    pub const DEFAULT_MAX_FAILURES: u32 = 5;

    /// Creates a configuration, replacing zeros with the defaults
    ///
    /// # Arguments
    /// * `max_checks` - Maximum number of status checks
    /// * `max_failures` - Maximum number of consecutive failed fetches
    pub fn new(max_checks: u32, max_failures: u32) -> Self {
        Self {
            max_checks: or_default(max_checks, Self::DEFAULT_MAX_CHECKS),
            max_failures: or_default(max_failures, Self::DEFAULT_MAX_FAILURES),
        }
    }

    pub fn max_checks(&self) -> u32 {
        self.max_checks
    }

    pub fn max_failures(&self) -> u32 {
        self.max_failures
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_CHECKS, Self::DEFAULT_MAX_FAILURES)
    }
}

fn or_default(value: u32, default: u32) -> u32 {
    if value == 0 { default } else { value }
}
