//! urlcount - canonical URL normalization and distinct-URL counting
//!
//! This crate normalizes URL strings into a canonical form and counts how many
//! semantically distinct URLs appear in a collection, optionally grouped by
//! top-level domain. Two URLs are the same if and only if they normalize to an
//! identical canonical string.
//!
//! # Quick Start
//!
//! ```
//! use urlcount::{count_unique_urls, count_unique_urls_per_tld, normalize_url};
//!
//! // Normalize a single URL
//! let canonical = normalize_url("HTTPS://www.Example.com:443/a/../b?y=2&x=1#frag")?;
//! assert_eq!(canonical, "https://example.com/b?x=1&y=2");
//!
//! // Count distinct URLs, silently skipping invalid ones
//! let urls = ["https://example.com", "https://example.com/", "invalid-url"];
//! assert_eq!(count_unique_urls(urls), 1);
//!
//! // Group by the last two domain labels
//! let per_tld = count_unique_urls_per_tld(["https://example.com", "https://sub.example.com"]);
//! assert_eq!(per_tld["example.com"], 2);
//! # Ok::<(), urlcount::UrlError>(())
//! ```
//!
//! # Normalization Rules
//!
//! | Component | Rule |
//! |-----------|------|
//! | whole URL | lowercased, trailing `?` and `/` stripped |
//! | domain    | leading `www.` removed |
//! | port      | removed when `http:80` or `https:443` |
//! | path      | `.` and `..` segments resolved |
//! | query     | `&`-separated tokens sorted |
//! | fragment  | dropped |
//! | path+query | encoded reserved characters decoded, other `%XX` uppercased |
//!
//! # Accepted Grammar
//!
//! ```text
//! [ scheme "://" ] domain [ ":" port ] [ path ] [ "?" query ] [ "#" fragment ]
//! ```
//!
//! Anything else is rejected. Counting functions skip rejected entries;
//! [`parse_url`] and [`normalize_url`] return a [`UrlError`] describing why.

// Re-export single-URL operations
pub use url::{
    is_valid_url, normalize_domain, normalize_url, parse_url, reconcile_percent_encoding,
    resolve_dot_segments, sort_query, RESERVED_CHARACTERS,
};

// Re-export aggregate operations
pub use crate::core::{count_unique_urls, count_unique_urls_per_tld, partition_by_tld, tld_key, unique_urls};

// Re-export public types
pub use error::UrlError;
pub use types::{default_port, ParsedUrl, DEFAULT_PORTS};

// Module declarations
pub mod core;
pub mod error;
pub mod types;
pub mod url;
