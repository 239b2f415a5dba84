//! Core domain types
//!
//! This module contains the entities the job service exposes. They are
//! deserialized by the client and rendered or inspected by the CLI.

pub mod definition;
pub mod job;
pub mod queue;
