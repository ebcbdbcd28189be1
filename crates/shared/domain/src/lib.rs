//! # Domain
//!
//! Plain data shared by the parley crates: tool configuration structures and
//! the constants that shape registry keys and dataset names.
//! Nothing here performs I/O or carries behaviour beyond defaults.

pub mod config;
pub mod constants;
