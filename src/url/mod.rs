//! URL processing.
//!
//! This module contains the single-URL operations:
//! - Grammar matching and splitting into parts
//! - Component-by-component normalization
//! - Percent-encoding reconciliation

pub mod matcher;
pub mod normalizer;
pub mod percent;

// Re-export main functionality
pub use matcher::{is_valid_url, parse_url};
pub use normalizer::{normalize_domain, normalize_url, resolve_dot_segments, sort_query};
pub use percent::{reconcile_percent_encoding, RESERVED_CHARACTERS};
