//! Parser from property escape text to PropertyEscape tokens.

use crate::error::{Error, Result};
use core::fmt;

/// A parsed property escape such as `\p{Script=Gurmukhi}` or `\P{sc=Guru}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyEscape {
    /// The property key, e.g. "Script" or "sc".
    pub key: String,

    /// The property value, e.g. "Gurmukhi" or "Guru".
    pub value: String,

    /// Set for the `\P{...}` form.
    pub negated: bool,
}

impl PropertyEscape {
    pub fn new<K: Into<String>, V: Into<String>>(key: K, value: V, negated: bool) -> Self {
        PropertyEscape {
            key: key.into(),
            value: value.into(),
            negated,
        }
    }
}

impl fmt::Display for PropertyEscape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let p = if self.negated { 'P' } else { 'p' };
        write!(f, "\\{}{{{}={}}}", p, self.key, self.value)
    }
}

fn error<S, T>(text: S) -> Result<T>
where
    S: ToString,
{
    Err(Error::Syntax(text.to_string()))
}

/// \return whether \p c may appear in a property key or value.
/// ES2018 UnicodePropertyNameCharacter.
fn is_property_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn check_name<'a>(name: &'a str, what: &str) -> Result<&'a str> {
    if name.is_empty() {
        return error(format!("Empty property {}", what));
    }
    if let Some(c) = name.chars().find(|&c| !is_property_name_char(c)) {
        return error(format!("Invalid character {:?} in property {}", c, what));
    }
    Ok(name)
}

/// Parse a property escape: `\p{Key=Value}` or `\P{Key=Value}`.
/// Only the escape itself is accepted; the text may not contain anything else.
pub fn parse(text: &str) -> Result<PropertyEscape> {
    let mut chars = text.chars();
    if chars.next() != Some('\\') {
        return error("Property escape must begin with a backslash");
    }
    let negated = match chars.next() {
        Some('p') => false,
        Some('P') => true,
        Some(_) => return error("Property escape must be \\p or \\P"),
        None => return error("Incomplete escape"),
    };
    let rest = chars.as_str();
    let Some(rest) = rest.strip_prefix('{') else {
        return error("Missing '{' in property escape");
    };
    let Some(close) = rest.find('}') else {
        return error("Unbalanced brace in property escape");
    };
    if close + 1 != rest.len() {
        return error("Unexpected text after property escape");
    }
    let body = &rest[..close];
    let Some((key, value)) = body.split_once('=') else {
        check_name(body, "name")?;
        return error("Lone property names are not supported");
    };
    let key = check_name(key, "key")?;
    let value = check_name(value, "value")?;
    Ok(PropertyEscape::new(key, value, negated))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_polarities() {
        assert_eq!(
            parse(r"\p{Script=Gurmukhi}"),
            Ok(PropertyEscape::new("Script", "Gurmukhi", false))
        );
        assert_eq!(
            parse(r"\P{sc=Guru}"),
            Ok(PropertyEscape::new("sc", "Guru", true))
        );
        // Key validity is the resolver's business.
        assert_eq!(
            parse(r"\p{Foo=Bar_9}"),
            Ok(PropertyEscape::new("Foo", "Bar_9", false))
        );
    }

    #[test]
    fn display_round_trips() {
        for text in [r"\p{Script=Gurmukhi}", r"\P{sc=Guru}"] {
            assert_eq!(parse(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn rejects_malformed() {
        for text in [
            r"",
            r"p{sc=Guru}",
            r"\",
            r"\q{sc=Guru}",
            r"\p",
            r"\P",
            r"\pL",
            r"\p{",
            r"\p}",
            r"\p{sc=Guru",
            r"\p{sc=Guru}x",
            r"\p{sc=Guru}}",
            r"\p{=Guru}",
            r"\p{sc=}",
            r"\p{=}",
            r"\p{}",
            r"\p{sc:Guru}",
            r"\p{sc = Guru}",
            r"\p{ sc=Guru }",
            r"\p{^sc=Guru}",
            r"\p{sc=Guru=Guru}",
            r"\p{sc=Gur-mukhi}",
        ] {
            let err = parse(text).unwrap_err();
            assert!(
                matches!(err, Error::Syntax(_)),
                "{:?} gave {:?}",
                text,
                err
            );
        }
    }

    #[test]
    fn rejects_lone_names() {
        assert_eq!(
            parse(r"\p{Gurmukhi}"),
            Err(Error::Syntax("Lone property names are not supported".into()))
        );
    }
}
