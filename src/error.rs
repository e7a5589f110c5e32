//! Error types for URL matching and normalization.

use thiserror::Error;

/// Reasons a raw string can be rejected by the URL grammar.
///
/// Counting operations never surface these; they only filter on them.
/// The single-URL operations (`parse_url`, `normalize_url`) return them so
/// callers can see why an input was dropped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UrlError {
    /// The input string is empty.
    #[error("URL is empty")]
    Empty,

    /// No domain was found where one was expected.
    #[error("Missing domain at offset {0}")]
    MissingDomain(usize),

    /// A domain label is empty or contains characters outside `[a-z0-9-]`.
    #[error("Invalid domain label: {0:?}")]
    InvalidLabel(String),

    /// The domain has no dot, so there is no final label to speak of.
    #[error("Domain must contain at least two labels: {0:?}")]
    SingleLabelDomain(String),

    /// The last domain label is shorter than two characters or not alphanumeric.
    #[error("Invalid final domain label: {0:?}")]
    InvalidFinalLabel(String),

    /// A `:` was not followed by at least one digit.
    #[error("Invalid port at offset {0}")]
    InvalidPort(usize),

    /// A byte outside the path character set was found in the path.
    #[error("Invalid path character {1:?} at offset {0}")]
    InvalidPathCharacter(usize, char),

    /// A byte outside the query character set was found in the query.
    #[error("Invalid query character {1:?} at offset {0}")]
    InvalidQueryCharacter(usize, char),

    /// A `#` was not followed by at least one fragment character.
    #[error("Empty fragment at offset {0}")]
    EmptyFragment(usize),

    /// A byte outside the fragment character set was found in the fragment.
    #[error("Invalid fragment character {1:?} at offset {0}")]
    InvalidFragmentCharacter(usize, char),

    /// Input remained after the last component the grammar allows there.
    #[error("Unexpected character {1:?} at offset {0}")]
    UnexpectedCharacter(usize, char),
}
