//! Percent-encoding reconciliation.
//!
//! Encoded reserved characters are treated as equal to their literal form,
//! so they are decoded. Everything else stays encoded with uppercase hex.

/// Characters whose `%XX` form decodes to the literal during reconciliation.
///
/// Space plus the ASCII punctuation of the RFC 3986 reserved and sub-delim
/// sets, `%20` through `%7E`.
pub const RESERVED_CHARACTERS: &[u8] = b" !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Reconcile `%XX` triplets in a path+query string.
///
/// Scans left to right. A triplet naming a reserved character is replaced by
/// that character and the scan resumes at the same position, so a decoded
/// `%` is reconsidered together with the bytes after it. Any other hex
/// triplet has its two digits uppercased and is skipped. A `%` not followed
/// by two hex digits is passed over one byte at a time, as are incomplete
/// triplets at the end of the input.
///
/// # Examples
///
/// ```
/// use urlcount::reconcile_percent_encoding;
///
/// assert_eq!(reconcile_percent_encoding("/baz%2a"), "/baz*");
/// assert_eq!(reconcile_percent_encoding("/a%2520b"), "/a b");
/// assert_eq!(reconcile_percent_encoding("/caf%c3%a9"), "/caf%C3%A9");
/// ```
pub fn reconcile_percent_encoding(input: &str) -> String {
    let mut bytes = input.as_bytes().to_vec();
    let mut i = 0;

    while i + 2 < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }

        match decode_reserved(bytes[i + 1], bytes[i + 2]) {
            Some(literal) => {
                bytes[i] = literal;
                bytes.drain(i + 1..i + 3);
            }
            None if bytes[i + 1].is_ascii_hexdigit() && bytes[i + 2].is_ascii_hexdigit() => {
                bytes[i + 1].make_ascii_uppercase();
                bytes[i + 2].make_ascii_uppercase();
                i += 3;
            }
            // Not a triplet; a real one may start inside these bytes.
            None => i += 1,
        }
    }

    // Only ASCII bytes are ever rewritten, so the buffer stays valid UTF-8.
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Decode a hex pair if it names a reserved character.
pub fn decode_reserved(hi: u8, lo: u8) -> Option<u8> {
    let byte = (hex_value(hi)? << 4) | hex_value(lo)?;
    RESERVED_CHARACTERS.contains(&byte).then_some(byte)
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
