//! Aggregation over collections of raw URLs.
//!
//! - Counting distinct canonical forms
//! - Grouping counts by top-level domain

pub mod counter;
pub mod grouper;

// Re-export main functionality
pub use counter::{count_unique_urls, unique_urls};
pub use grouper::{count_unique_urls_per_tld, partition_by_tld, tld_key};
