//! Batchrun Core
//!
//! Core types shared by the batchrun client and CLI.
//!
//! This crate contains:
//! - Domain types: jobs, job statuses, job definitions and job queues
//! - DTOs: request and response bodies exchanged with the job service

pub mod domain;
pub mod dto;
