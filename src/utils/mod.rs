//! Utility modules for the extensions dashlet.
//!
//! # Available Utilities
//!
//! - [`safe_get`] - Default-providing path lookups into the host's JSON state tree

pub mod safe_get;
