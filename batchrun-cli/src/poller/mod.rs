//! Job status polling
//!
//! Watches one submitted job until it reaches a terminal status or one of
//! the two polling budgets runs out:
//! - the poll budget, consumed by every successful non-terminal check
//! - the fetch-failure budget, consumed by consecutive failed status fetches
//!   and refilled by every successful one

mod config;
mod notice;
mod state;
mod status_poller;

pub use config::PollConfig;
pub use notice::{NoticeLevel, PollObserver, Transition};
pub use status_poller::{StatusPoller, TerminationReason};
