// Work around dead code warnings: rust-lang issue #46379
pub mod common;

// Work around dead code warnings: rust-lang issue #46379
use common::*;

use propescape::{resolve, Error, PropertyTable, UNICODE_VERSION};

// From test262 built-ins/RegExp/property-escapes/generated/Script_-_Gurmukhi.js
// (Unicode v11.0.0).
const GURMUKHI_MATCH: Symbols<'static> = Symbols {
    lone_code_points: &[0x000A3C, 0x000A51, 0x000A5E],
    ranges: &[
        (0x000A01, 0x000A03),
        (0x000A05, 0x000A0A),
        (0x000A0F, 0x000A10),
        (0x000A13, 0x000A28),
        (0x000A2A, 0x000A30),
        (0x000A32, 0x000A33),
        (0x000A35, 0x000A36),
        (0x000A38, 0x000A39),
        (0x000A3E, 0x000A42),
        (0x000A47, 0x000A48),
        (0x000A4B, 0x000A4D),
        (0x000A59, 0x000A5C),
        (0x000A66, 0x000A76),
    ],
};

const GURMUKHI_NON_MATCH: Symbols<'static> = Symbols {
    lone_code_points: &[
        0x000A04, 0x000A29, 0x000A31, 0x000A34, 0x000A37, 0x000A3D, 0x000A5D,
    ],
    ranges: &[
        (0x00DC00, 0x00DFFF),
        (0x000000, 0x000A00),
        (0x000A0B, 0x000A0E),
        (0x000A11, 0x000A12),
        (0x000A3A, 0x000A3B),
        (0x000A43, 0x000A46),
        (0x000A49, 0x000A4A),
        (0x000A4E, 0x000A50),
        (0x000A52, 0x000A58),
        (0x000A5F, 0x000A65),
        (0x000A77, 0x00DBFF),
        (0x00E000, 0x10FFFF),
    ],
};

#[test]
fn tables_are_unicode_11() {
    assert_eq!(UNICODE_VERSION, (11, 0, 0));
}

#[test]
fn script_gurmukhi_matches() {
    let symbols = build_string(GURMUKHI_MATCH);
    for escape in script_escapes(&["Gurmukhi", "Guru"], false) {
        test_property_escapes(&escape, &symbols);
    }
}

#[test]
fn script_gurmukhi_non_matches() {
    let symbols = build_string(GURMUKHI_NON_MATCH);
    for escape in script_escapes(&["Gurmukhi", "Guru"], true) {
        test_property_escapes(&escape, &symbols);
    }
}

#[test]
fn script_gurmukhi_polarity_is_exclusive() {
    // No match symbol satisfies \P, and no non-match symbol satisfies \p.
    let matching = build_string(GURMUKHI_MATCH);
    let non_matching = build_string(GURMUKHI_NON_MATCH);
    let positive = propescape::Resolver::unicode()
        .compile(r"\p{sc=Guru}")
        .unwrap();
    let negative = propescape::Resolver::unicode()
        .compile(r"\P{sc=Guru}")
        .unwrap();
    for &unit in matching.iter() {
        assert!(!negative.matches_all_utf16(&[unit]));
    }
    for cp in [0x0A04, 0x0A29, 0x0A3D, 0x0A77, 0xDC00, 0xDFFF, 0x10FFFF, 0] {
        assert_eq!(positive.matches(cp), Ok(false), "U+{:04X}", cp);
    }
    assert!(!positive.matches_all_utf16(&non_matching));
}

#[test]
fn script_gurmukhi_match_set_is_exact() {
    // The match and non-match sets together cover the code space, so the
    // table must agree with them exactly.
    let expected = propescape::CodePointSet::from_lone_and_ranges(
        GURMUKHI_MATCH.lone_code_points,
        GURMUKHI_MATCH.ranges,
    )
    .unwrap();
    let non_matching = propescape::CodePointSet::from_lone_and_ranges(
        GURMUKHI_NON_MATCH.lone_code_points,
        GURMUKHI_NON_MATCH.ranges,
    )
    .unwrap();
    assert_eq!(*PropertyTable::unicode().lookup("Gurmukhi").unwrap(), expected);
    assert_eq!(expected.inverted(), non_matching);
    assert!(expected.union(&non_matching).contains_all_codepoints());
}

#[test]
fn concrete_points() {
    let guru = PropertyTable::unicode().lookup("Gurmukhi").unwrap();
    assert_eq!(guru.contains(0x0A3C), Ok(true));
    assert_eq!(guru.contains(0x0A04), Ok(false));
    assert_eq!(guru.contains(0x0A15), Ok(true));
    assert_eq!(guru.contains(0x0A0B), Ok(false));
    assert_eq!(guru.contains(0x110000), Err(Error::OutOfRange(0x110000)));
}

#[test]
fn surrogates_are_in_no_script() {
    for property in PropertyTable::unicode().properties() {
        for cp in [0xD800, 0xDBFF, 0xDC00, 0xDFFF] {
            assert_eq!(property.set().contains(cp), Ok(false));
        }
        let negated = resolve("sc", property.name(), true).unwrap();
        assert_eq!(negated.contains(0xD800), Ok(true));
    }
}

#[test]
fn resolution_errors() {
    assert_eq!(
        resolve("Script", "NotAScript", false).unwrap_err(),
        Error::UnknownProperty("NotAScript".into())
    );
    assert_eq!(
        resolve("Foo", "Gurmukhi", false).unwrap_err(),
        Error::UnsupportedPropertyKey("Foo".into())
    );
    assert!(resolve("Foo", "Gurmukhi", false)
        .unwrap_err()
        .is_syntax_error());
    assert!(!Error::OutOfRange(0x110000).is_syntax_error());
}
