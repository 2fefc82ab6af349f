#![allow(clippy::uninlined_format_args)]

use propescape::{CodePoint, Resolver};

/// Code points to build a test string from: lone code points plus inclusive
/// ranges.
#[derive(Debug, Clone, Copy)]
pub struct Symbols<'a> {
    pub lone_code_points: &'a [CodePoint],
    pub ranges: &'a [(CodePoint, CodePoint)],
}

/// Build a UTF-16 string containing every code point of \p symbols.
/// Surrogate code points are emitted as lone code units.
pub fn build_string(symbols: Symbols) -> Vec<u16> {
    let mut result = Vec::new();
    let ranges = symbols.ranges.iter().map(|&(first, last)| first..=last);
    let lone = symbols.lone_code_points.iter().map(|&cp| cp..=cp);
    let mut buf = [0; 2];
    for cp in lone.chain(ranges).flatten() {
        match char::from_u32(cp) {
            Some(c) => result.extend_from_slice(c.encode_utf16(&mut buf)),
            None => result.push(cp as u16),
        }
    }
    result
}

/// Test that the escape \p escape compiles and matches every code point in
/// \p symbols.
#[track_caller]
pub fn test_property_escapes(escape: &str, symbols: &[u16]) {
    let m = Resolver::unicode().compile(escape);
    assert!(
        m.is_ok(),
        "Failed to compile {}: {}",
        escape,
        m.unwrap_err()
    );
    let m = m.unwrap();
    if let Some(cp) = m.find_mismatch_utf16(symbols) {
        panic!("`{}` should match U+{:04X}", escape, cp);
    }
    assert!(m.matches_all_utf16(symbols));
}

/// Test that \p escape fails to compile.
#[track_caller]
pub fn test_compile_fails(escape: &str) {
    let res = Resolver::unicode().compile(escape);
    assert!(res.is_err(), "Escape should not have compiled: {}", escape);
}

/// Return every spelling of a Script escape for the given value names, in
/// one polarity.
pub fn script_escapes(names: &[&str], negated: bool) -> Vec<String> {
    let p = if negated { 'P' } else { 'p' };
    let mut result = Vec::new();
    for key in ["Script", "sc"] {
        for name in names {
            result.push(format!("\\{}{{{}={}}}", p, key, name));
        }
    }
    result
}
