use crate::codepointset::{CodePoint, CodePointSet};
use crate::error::Result;
use std::borrow::Cow;

/// \return whether \p cp is a member of \p set.
/// This is the predicate evaluated for a property escape at each step of a match.
#[inline(always)]
pub fn matches(set: &CodePointSet, cp: CodePoint) -> Result<bool> {
    set.contains(cp)
}

/// Decode UTF-16 into code points. Unpaired surrogates are produced as
/// themselves, as JavaScript strings may contain them.
fn utf16_code_points(input: &[u16]) -> impl Iterator<Item = CodePoint> + '_ {
    char::decode_utf16(input.iter().copied()).map(|r| match r {
        Ok(c) => u32::from(c),
        Err(e) => u32::from(e.unpaired_surrogate()),
    })
}

/// A compiled property escape: a code point set, either borrowed from a
/// PropertyTable or owned (the complement of a negated escape).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMatcher<'t> {
    set: Cow<'t, CodePointSet>,
}

impl<'t> PropertyMatcher<'t> {
    pub fn new(set: Cow<'t, CodePointSet>) -> Self {
        PropertyMatcher { set }
    }

    /// The set this matcher tests against.
    pub fn set(&self) -> &CodePointSet {
        &self.set
    }

    /// \return whether \p cp matches.
    #[inline(always)]
    pub fn matches(&self, cp: CodePoint) -> Result<bool> {
        matches(&self.set, cp)
    }

    /// \return whether \p c matches.
    #[inline]
    pub fn matches_char(&self, c: char) -> bool {
        // Every char lies within the code space.
        crate::codepointset::interval_contains(self.set.intervals(), u32::from(c))
    }

    /// \return whether \p input is non-empty and every character in it
    /// matches, like `^\p{...}+$`.
    pub fn matches_all_str(&self, input: &str) -> bool {
        !input.is_empty() && input.chars().all(|c| self.matches_char(c))
    }

    /// \return whether \p input is non-empty and every code point in it
    /// matches. Unpaired surrogates are tested as code points.
    pub fn matches_all_utf16(&self, input: &[u16]) -> bool {
        !input.is_empty() && self.find_mismatch_utf16(input).is_none()
    }

    /// \return the first code point of \p input that does not match, if any.
    pub fn find_mismatch_utf16(&self, input: &[u16]) -> Option<CodePoint> {
        utf16_code_points(input)
            .find(|&cp| !crate::codepointset::interval_contains(self.set.intervals(), cp))
    }

    /// Consume the matcher, returning its set.
    pub fn into_set(self) -> Cow<'t, CodePointSet> {
        self.set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codepointset::Interval;
    use crate::error::Error;

    fn matcher() -> PropertyMatcher<'static> {
        PropertyMatcher::new(Cow::Owned(CodePointSet::from_intervals(vec![
            Interval::new(0x61, 0x63),
            Interval::new(0xDC00, 0xDFFF),
            Interval::new(0x1F600, 0x1F600),
        ])))
    }

    #[test]
    fn single_code_points() {
        let m = matcher();
        assert_eq!(m.matches(0x62), Ok(true));
        assert_eq!(m.matches(0x64), Ok(false));
        assert_eq!(m.matches(0xDC00), Ok(true));
        assert_eq!(m.matches(0xD800), Ok(false));
        assert_eq!(m.matches(0x110000), Err(Error::OutOfRange(0x110000)));
        assert!(m.matches_char('a'));
        assert!(!m.matches_char('d'));
    }

    #[test]
    fn whole_strings() {
        let m = matcher();
        assert!(m.matches_all_str("abcba\u{1F600}"));
        assert!(!m.matches_all_str("abd"));
        assert!(!m.matches_all_str(""));
    }

    #[test]
    fn utf16_with_lone_surrogates() {
        let m = matcher();
        // A lone trail surrogate is in the set.
        assert!(m.matches_all_utf16(&[0x61, 0xDC05, 0x62]));
        // A lone lead surrogate is not.
        assert_eq!(m.find_mismatch_utf16(&[0x61, 0xD800, 0x62]), Some(0xD800));
        // A surrogate pair decodes to one code point.
        let pair: Vec<u16> = "\u{1F600}".encode_utf16().collect();
        assert_eq!(pair.len(), 2);
        assert!(m.matches_all_utf16(&pair));
        assert!(!m.matches_all_utf16(&[]));
    }

    #[test]
    fn into_set_keeps_borrow() {
        let table_set = CodePointSet::from_intervals(vec![Interval::new(0x61, 0x63)]);
        let borrowed = PropertyMatcher::new(Cow::Borrowed(&table_set)).into_set();
        assert!(matches!(borrowed, Cow::Borrowed(s) if core::ptr::eq(s, &table_set)));
        let owned = PropertyMatcher::new(Cow::Owned(table_set.inverted())).into_set();
        assert!(matches!(owned, Cow::Owned(_)));
        assert_eq!(owned.contains(0x61), Ok(false));
    }
}
