//! # Engine Module
//!
//! Stateful plumbing around the core: loading and building freeze configurations,
//! evaluating many configurations at once, and the error type the workflow layer reports.

pub mod batch;
pub mod config;
pub mod error;
