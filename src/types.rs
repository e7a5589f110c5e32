//! Core data structures shared by the matcher and the normalizer.

/// Default ports elided during normalization, keyed by scheme.
pub const DEFAULT_PORTS: &[(&str, &str)] = &[("http", "80"), ("https", "443")];

/// The five lexical parts of an accepted URL.
///
/// Every field borrows the exact substring captured by the grammar; nothing
/// is decoded or case-folded here. Delimiters (`://`, `:`, `?`, `#`) are not
/// part of the captures, except that `path` keeps its leading `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedUrl<'a> {
    /// Scheme letters (`https`), absent for scheme-less input
    pub scheme: Option<&'a str>,
    /// Dot-separated host labels, always present
    pub domain: &'a str,
    /// Port digits without the colon
    pub port: Option<&'a str>,
    /// Path starting with `/`
    pub path: Option<&'a str>,
    /// Raw `&`-joined query, possibly empty
    pub query: Option<&'a str>,
    /// Fragment without the `#`
    pub fragment: Option<&'a str>,
}

impl<'a> ParsedUrl<'a> {
    /// Whether the captured port is the default for the captured scheme.
    ///
    /// Only an exact scheme/port pair counts: `http` with `443` is not default.
    pub fn has_default_port(&self) -> bool {
        match (self.scheme, self.port) {
            (Some(scheme), Some(port)) => default_port(scheme) == Some(port),
            _ => false,
        }
    }
}

/// Look up the conventional port for a scheme.
pub fn default_port(scheme: &str) -> Option<&'static str> {
    DEFAULT_PORTS
        .iter()
        .find(|(name, _)| *name == scheme)
        .map(|(_, port)| *port)
}
