//! Common utilities for the Wombat markup tools.
//!
//! This crate provides shared infrastructure used by every Wombat component:
//! - **Warning System** - colored, deduplicated terminal output for
//!   structural problems found while parsing

pub mod warning;
