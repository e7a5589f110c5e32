//! URL normalization into a canonical string.

use tracing::trace;

use crate::error::UrlError;
use crate::types::ParsedUrl;
use crate::url::matcher::parse_url;
use crate::url::percent::reconcile_percent_encoding;

/// Normalize a URL into its canonical form.
///
/// The raw input must be accepted by the grammar; otherwise the rejection is
/// returned. Then:
/// 1. Lowercases the whole string and strips trailing `?` and `/`
/// 2. Drops a leading `www.` label from the domain
/// 3. Elides the port when it is the default for its own scheme
/// 4. Resolves `.` and `..` path segments
/// 5. Sorts `&`-separated query tokens
/// 6. Drops the fragment
/// 7. Reconciles percent-encoding in the path and query only
///
/// The canonical form is an identity key, not always a valid URL. Decoded
/// reserved characters such as a space fall outside the grammar, so feeding
/// such a canonical form back in returns an error instead of itself.
///
/// # Examples
///
/// ```
/// use urlcount::normalize_url;
///
/// assert_eq!(
///     normalize_url("HTTP://www.Example.com:80/a/./b/../c?z=1&a=2#top").unwrap(),
///     "http://example.com/a/c?a=2&z=1"
/// );
/// assert!(normalize_url("invalid-url").is_err());
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlError> {
    parse_url(input)?;

    let lowered = input.to_ascii_lowercase();
    let trimmed = lowered.trim_end_matches(&['?', '/'][..]);
    let parts = parse_url(trimmed)?;
    let canonical = canonicalize(&parts);

    trace!(input, canonical = %canonical, "normalized url");
    Ok(canonical)
}

/// Apply the domain-only rule: drop one leading `www.` label.
///
/// Expects an already lowercased domain.
pub fn normalize_domain(domain: &str) -> &str {
    domain.strip_prefix("www.").unwrap_or(domain)
}

/// Build the canonical string from the parts of a lowercased, trimmed URL.
fn canonicalize(parts: &ParsedUrl<'_>) -> String {
    let mut canonical = String::new();

    if let Some(scheme) = parts.scheme {
        canonical.push_str(scheme);
        canonical.push_str("://");
    }

    canonical.push_str(normalize_domain(parts.domain));

    if let Some(port) = parts.port {
        if !parts.has_default_port() {
            canonical.push(':');
            canonical.push_str(port);
        }
    }

    // The authority above is never touched by percent reconciliation.
    let mut suffix = String::new();

    if let Some(path) = parts.path {
        suffix.push_str(&resolve_dot_segments(path));
    }

    if let Some(query) = parts.query.filter(|query| !query.is_empty()) {
        suffix.push('?');
        suffix.push_str(&sort_query(query));
    }

    canonical.push_str(&reconcile_percent_encoding(&suffix));
    canonical
}

/// Resolve `.` and `..` segments of a path that starts with `/`.
///
/// `..` with nothing left to remove is ignored. Empty segments are kept.
pub fn resolve_dot_segments(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/').skip(1) {
        match segment {
            "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }

    segments.iter().fold(String::with_capacity(path.len()), |mut out, segment| {
        out.push('/');
        out.push_str(segment);
        out
    })
}

/// Sort the `&`-separated tokens of a query string lexicographically.
pub fn sort_query(query: &str) -> String {
    let mut tokens: Vec<&str> = query.split('&').collect();
    tokens.sort_unstable();
    tokens.join("&")
}
