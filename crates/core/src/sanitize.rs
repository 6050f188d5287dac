//! Field sanity checks applied before data reaches the evaluator.
//!
//! Two independent, stateless predicates: free text must be valid UTF-8
//! with no control characters outside whitespace, and URL fields must match
//! a restrictive pattern so crafted redirect URLs cannot be stored. Project
//! URLs may later be traversed by the service, so their check is much
//! stricter than the loose URL detection used inside justifications
//! (see [`crate::evaluator::URL_PATTERN`]).

use std::sync::LazyLock;

use regex::Regex;

/// Control characters that are never acceptable in free text. Whitespace
/// (tab, newline, carriage return) stays legal.
static INVALID_CONTROL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x01-\x08\x0b\x0c\x0e-\x1f]").expect("valid regex")
});

/// Allowed URL shape: empty, or http(s) scheme, a DNS-shaped host, and an
/// optional path drawn from a restricted character class with limited
/// %-escapes. Deliberately stricter than the URL spec: no query strings,
/// no `<`, and %-encoded bytes are restricted to printable ranges.
static URL_FIELD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)\A(|
            https?://
            [A-Za-z0-9][-A-Za-z0-9_.]*      # domain name per DNS spec
            (/
              ([-A-Za-z0-9_.:/+!,\#@~]|     # allow these ASCII chars
               %(20|[89A-Ea-e][0-9A-Fa-f]|[Ff][0-7]))*   # some %-escapes
            )?)\z",
    )
    .expect("valid regex")
});

/// Is this free-text value acceptable for storage?
pub fn text_acceptable(value: &str) -> bool {
    !INVALID_CONTROL_RE.is_match(value)
}

/// Is this byte sequence acceptable free text (valid UTF-8 included)?
pub fn bytes_acceptable(value: &[u8]) -> bool {
    match std::str::from_utf8(value) {
        Ok(text) => text_acceptable(text),
        Err(_) => false,
    }
}

/// Percent-decode a URL, mapping `+` to space. Malformed escapes pass
/// through literally; the result is raw bytes whose encoding has not been
/// validated yet.
pub fn unescape(value: &str) -> Vec<u8> {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let hi = (bytes[i + 1] as char).to_digit(16);
                let lo = (bytes[i + 2] as char).to_digit(16);
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi * 16 + lo) as u8);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    out
}

/// Is this URL field acceptable for storage? The pattern must match and the
/// percent-decoded form must itself be valid UTF-8.
pub fn url_acceptable(value: &str) -> bool {
    URL_FIELD_RE.is_match(value) && std::str::from_utf8(&unescape(value)).is_ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
