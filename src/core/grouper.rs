//! Distinct-URL counting grouped by top-level domain.
//!
//! The grouping key is the last two labels of the normalized domain
//! (`sub.example.com` groups under `example.com`). It is not a Public Suffix
//! List lookup.

use std::collections::BTreeMap;

use tracing::debug;

use crate::core::counter::count_unique_urls;
use crate::url::matcher::parse_url;
use crate::url::normalizer::normalize_domain;

/// Return the last two dot-separated labels of a domain.
///
/// A domain with a single label is returned as is.
///
/// # Examples
///
/// ```
/// use urlcount::tld_key;
///
/// assert_eq!(tld_key("api.eu.example.com"), "example.com");
/// assert_eq!(tld_key("example.org"), "example.org");
/// ```
pub fn tld_key(domain: &str) -> &str {
    match domain.rmatch_indices('.').nth(1) {
        Some((dot, _)) => &domain[dot + 1..],
        None => domain,
    }
}

/// Bucket raw URLs by the TLD key of their normalized domain.
///
/// Empty and rejected entries are skipped. Buckets keep the original raw
/// strings, in input order.
pub fn partition_by_tld<I, S>(urls: I) -> BTreeMap<String, Vec<S>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut buckets: BTreeMap<String, Vec<S>> = BTreeMap::new();

    for url in urls {
        let raw = url.as_ref();
        if raw.is_empty() {
            continue;
        }

        let lowered = raw.to_ascii_lowercase();
        let key = match parse_url(&lowered) {
            Ok(parts) => tld_key(normalize_domain(parts.domain)).to_string(),
            Err(err) => {
                debug!(url = raw, error = %err, "skipping invalid url");
                continue;
            }
        };

        buckets.entry(key).or_default().push(url);
    }

    buckets
}

/// Count distinct canonical URLs per TLD key.
///
/// An empty input yields an empty map.
///
/// # Examples
///
/// ```
/// use urlcount::count_unique_urls_per_tld;
///
/// let counts = count_unique_urls_per_tld(["https://example.com", "https://subdomain.example.com"]);
/// assert_eq!(counts.get("example.com"), Some(&2));
/// assert_eq!(counts.len(), 1);
/// ```
pub fn count_unique_urls_per_tld<I, S>(urls: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let counts: BTreeMap<String, usize> = partition_by_tld(urls)
        .into_iter()
        .map(|(tld, bucket)| {
            let count = count_unique_urls(bucket);
            (tld, count)
        })
        .collect();

    debug!(tlds = counts.len(), "counted unique urls per tld");
    counts
}
