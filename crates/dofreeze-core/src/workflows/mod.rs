//! # Workflows Module
//!
//! User-facing entry points that combine configuration with a full-space potential.

pub mod freeze;

pub use freeze::{freeze, freeze_from_file};
