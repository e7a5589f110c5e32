//! Structural URL matcher.
//!
//! A single left-to-right scan over the input that accepts exactly
//!
//! ```text
//! [ scheme "://" ] domain [ ":" port ] [ path ] [ "?" query ] [ "#" fragment ]
//! ```
//!
//! and splits it into its parts. Each component's character set excludes the
//! delimiter that introduces the next one, so a greedy scan is unambiguous and
//! no backtracking is needed.

use crate::error::UrlError;
use crate::types::ParsedUrl;

const PATH_PUNCTUATION: &[u8] = b"%/^*()$@!_.-";
const QUERY_PUNCTUATION: &[u8] = b"^*()$@!_%=&.-";
const FRAGMENT_PUNCTUATION: &[u8] = b"^*()$@!_%&";

/// Which component the scanner finished on, used to explain leftovers.
#[derive(Debug, Clone, Copy)]
enum Section {
    Authority,
    Path,
    Query,
    Fragment,
}

/// Split a raw URL into its lexical parts, or explain why it is rejected.
///
/// The whole string must match; there are no partial matches.
///
/// # Examples
///
/// ```
/// use urlcount::parse_url;
///
/// let parts = parse_url("https://api.example.com:8080/v1?b=2&a=1#top").unwrap();
/// assert_eq!(parts.scheme, Some("https"));
/// assert_eq!(parts.domain, "api.example.com");
/// assert_eq!(parts.port, Some("8080"));
/// assert_eq!(parts.path, Some("/v1"));
/// assert_eq!(parts.query, Some("b=2&a=1"));
/// assert_eq!(parts.fragment, Some("top"));
///
/// assert!(parse_url("invalid-url").is_err());
/// ```
pub fn parse_url(input: &str) -> Result<ParsedUrl<'_>, UrlError> {
    if input.is_empty() {
        return Err(UrlError::Empty);
    }

    let bytes = input.as_bytes();
    let mut pos = 0;
    let mut section = Section::Authority;

    let letters = scan(bytes, |b| b.is_ascii_alphabetic());
    let scheme = if letters > 0 && input[letters..].starts_with("://") {
        pos = letters + 3;
        Some(&input[..letters])
    } else {
        None
    };

    let domain_start = pos;
    pos += scan(&bytes[pos..], is_domain_byte);
    if pos == domain_start {
        return Err(UrlError::MissingDomain(domain_start));
    }
    let domain = &input[domain_start..pos];
    validate_domain(domain)?;

    let port = if bytes.get(pos) == Some(&b':') {
        let start = pos + 1;
        let digits = scan(&bytes[start..], |b| b.is_ascii_digit());
        if digits == 0 {
            return Err(UrlError::InvalidPort(pos));
        }
        pos = start + digits;
        Some(&input[start..pos])
    } else {
        None
    };

    let path = if bytes.get(pos) == Some(&b'/') {
        let start = pos;
        pos += 1 + scan(&bytes[pos + 1..], is_path_byte);
        section = Section::Path;
        Some(&input[start..pos])
    } else {
        None
    };

    let query = if bytes.get(pos) == Some(&b'?') {
        let start = pos + 1;
        pos = start + scan(&bytes[start..], is_query_byte);
        section = Section::Query;
        Some(&input[start..pos])
    } else {
        None
    };

    let fragment = if bytes.get(pos) == Some(&b'#') {
        let start = pos + 1;
        pos = start + scan(&bytes[start..], is_fragment_byte);
        if pos == start {
            return Err(UrlError::EmptyFragment(start));
        }
        section = Section::Fragment;
        Some(&input[start..pos])
    } else {
        None
    };

    // Only ASCII bytes were consumed, so `pos` sits on a char boundary.
    if let Some(ch) = input[pos..].chars().next() {
        return Err(match section {
            Section::Authority => UrlError::UnexpectedCharacter(pos, ch),
            Section::Path => UrlError::InvalidPathCharacter(pos, ch),
            Section::Query => UrlError::InvalidQueryCharacter(pos, ch),
            Section::Fragment => UrlError::InvalidFragmentCharacter(pos, ch),
        });
    }

    Ok(ParsedUrl {
        scheme,
        domain,
        port,
        path,
        query,
        fragment,
    })
}

/// Check whether a raw string is accepted by the URL grammar.
pub fn is_valid_url(input: &str) -> bool {
    parse_url(input).is_ok()
}

/// Validate the label structure of a scanned domain.
///
/// At least two labels; every label non-empty; the last one alphanumeric
/// and at least two characters long.
fn validate_domain(domain: &str) -> Result<(), UrlError> {
    let Some((head, last)) = domain.rsplit_once('.') else {
        return Err(UrlError::SingleLabelDomain(domain.to_string()));
    };

    if let Some(label) = head.split('.').find(|label| label.is_empty()) {
        return Err(UrlError::InvalidLabel(label.to_string()));
    }

    if last.len() < 2 || !last.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(UrlError::InvalidFinalLabel(last.to_string()));
    }

    Ok(())
}

fn scan(bytes: &[u8], accept: fn(u8) -> bool) -> usize {
    bytes.iter().take_while(|&&b| accept(b)).count()
}

fn is_domain_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'.'
}

fn is_path_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || PATH_PUNCTUATION.contains(&b)
}

fn is_query_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || QUERY_PUNCTUATION.contains(&b)
}

fn is_fragment_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || FRAGMENT_PUNCTUATION.contains(&b)
}
