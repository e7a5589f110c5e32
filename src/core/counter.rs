//! Distinct-URL counting.

use std::collections::BTreeSet;

use tracing::debug;

use crate::url::normalizer::normalize_url;

/// Collect the distinct canonical forms of the accepted URLs.
///
/// Entries the grammar rejects are skipped and logged at `debug` level.
///
/// # Examples
///
/// ```
/// use urlcount::unique_urls;
///
/// let unique = unique_urls(["https://example.com/", "HTTPS://EXAMPLE.COM", "nope"]);
/// assert_eq!(unique.into_iter().collect::<Vec<_>>(), vec!["https://example.com"]);
/// ```
pub fn unique_urls<I, S>(urls: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut unique = BTreeSet::new();
    let mut rejected = 0usize;

    for url in urls {
        let url = url.as_ref();
        match normalize_url(url) {
            Ok(canonical) => {
                unique.insert(canonical);
            }
            Err(err) => {
                rejected += 1;
                debug!(url, error = %err, "skipping invalid url");
            }
        }
    }

    debug!(unique = unique.len(), rejected, "collected unique urls");
    unique
}

/// Count the distinct canonical forms among the accepted URLs.
///
/// Invalid entries are ignored and an empty input yields 0. The result does
/// not depend on input order.
///
/// # Examples
///
/// ```
/// use urlcount::count_unique_urls;
///
/// let urls = ["https://example.com?a=1&b=2", "https://example.com?b=2&a=1"];
/// assert_eq!(count_unique_urls(urls), 1);
/// assert_eq!(count_unique_urls(Vec::<String>::new()), 0);
/// ```
pub fn count_unique_urls<I, S>(urls: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    unique_urls(urls).len()
}
