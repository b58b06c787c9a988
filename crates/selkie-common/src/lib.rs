//! Common utilities for the Selkie selector tools.
//!
//! This crate provides shared infrastructure used by the command-line front end:
//! - **Warning System** - colored, deduplicated terminal warnings

pub mod warning;
