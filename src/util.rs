/*!
Small byte-level helpers shared by the optstring compiler and the resolvers:
classification of option characters, and prefix matching with optional ASCII
case folding.
*/

/// A character is "graphic" if it is printable and not whitespace.
///
/// This is the classical `isgraph(3)` contract over the ASCII range;
/// characters beyond it are classified by the same rule (not a control, not
/// whitespace).
#[inline]
#[must_use]
pub fn is_graphic(c: char) -> bool {
    !c.is_control() && !c.is_whitespace()
}

/// True iff `prefix` is a prefix of `s`, optionally under ASCII case
/// folding.
#[inline]
#[must_use]
pub fn has_prefix(s: &str, prefix: &str, fold: bool) -> bool {
    match fold {
        false => s.starts_with(prefix),
        true => s
            .as_bytes()
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes())),
    }
}

/// Returns `s` with `prefix` removed from the front if present; `s`
/// unchanged otherwise.
#[must_use]
pub fn trim_prefix<'s>(s: &'s str, prefix: &str, fold: bool) -> &'s str {
    match has_prefix(s, prefix, fold) {
        // ASCII folding preserves byte length, and a byte-wise match of a
        // valid UTF-8 prefix always ends on a character boundary.
        true => &s[prefix.len()..],
        false => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphic_matches_the_isgraph_contract() {
        for b in 0x21u8..=0x7e {
            assert!(is_graphic(b as char), "{b:#x} should be graphic");
        }
        for c in [' ', '\t', '\n', '\u{0}', '\u{7f}'] {
            assert!(!is_graphic(c), "{c:?} should not be graphic");
        }
    }

    #[test]
    fn prefix_folding_is_ascii_only() {
        assert!(has_prefix("FOObar", "foo", true));
        assert!(!has_prefix("FOObar", "foo", false));
        assert!(!has_prefix("fo", "foo", true));

        assert_eq!(trim_prefix("FOObar", "foo", true), "bar");
        assert_eq!(trim_prefix("FOObar", "foo", false), "FOObar");
        assert_eq!(trim_prefix("bar", "foo", true), "bar");
    }
}
