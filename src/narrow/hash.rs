// Fragment path-segment encoding.
//
// The companion web client's legacy hash convention: component-level
// percent-encoding first, then a single substitution pass over its output
// that folds `%` into `.` (turning `%20`-style triples into `.20`) and
// rewrites the three characters the convention reserves. The table is a
// fixed historical convention shared with the web client; changing it here
// alone breaks link interoperability.

use std::sync::LazyLock;

use percent_encoding::{percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

/// Component-level encode set: ASCII alphanumerics and `-_.!~*'()` stay
/// as-is. `%` also stays; the substitution pass below owns that byte.
const SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'%');

static HASH_RESERVED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[%().]").unwrap());

/// Encode a string for use as one path segment of a URL fragment.
///
/// Percent-encoding runs first; the reserved-character substitution runs
/// over its output. The two stages must not be reordered.
pub fn encode_hash_component(text: &str) -> String {
    let encoded = percent_encode(text.as_bytes(), SEGMENT_ENCODE_SET).to_string();
    HASH_RESERVED
        .replace_all(&encoded, |captures: &regex::Captures<'_>| {
            match &captures[0] {
                "%" => ".",
                "(" => ".28",
                ")" => ".29",
                "." => ".2E",
                _ => unreachable!(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_becomes_2e() {
        assert_eq!(encode_hash_component("a.b"), "a.2Eb");
    }

    #[test]
    fn percent_becomes_bare_dot() {
        assert_eq!(encode_hash_component("50%"), "50.");
    }

    #[test]
    fn parens_become_28_29() {
        assert_eq!(encode_hash_component("(x)"), ".28x.29");
    }

    #[test]
    fn encoded_triples_are_folded() {
        assert_eq!(encode_hash_component("100% done"), "100..20done");
    }

    #[test]
    fn space_becomes_dot_20() {
        assert_eq!(encode_hash_component("design docs"), "design.20docs");
    }

    #[test]
    fn slash_is_not_a_segment_separator() {
        assert_eq!(encode_hash_component("a/b"), "a.2Fb");
    }

    #[test]
    fn unreserved_punctuation_passes_through() {
        assert_eq!(encode_hash_component("it's-ok_!~*"), "it's-ok_!~*");
    }

    #[test]
    fn non_ascii_is_byte_encoded() {
        assert_eq!(encode_hash_component("café"), "caf.C3.A9");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(encode_hash_component(""), "");
    }
}
