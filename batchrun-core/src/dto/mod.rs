//! Data Transfer Objects for the job service API
//!
//! Request bodies and list envelopes. Domain entities are embedded directly
//! where the service returns them unchanged.

pub mod definition;
pub mod job;
pub mod queue;
