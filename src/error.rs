use crate::codepointset::CodePoint;

/// Represents an error encountered while compiling or evaluating a property
/// escape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The property value does not name any known property.
    #[error("Invalid property name: {0}")]
    UnknownProperty(String),

    /// The property key is not one of the supported forms.
    #[error("Unsupported property key: {0}")]
    UnsupportedPropertyKey(String),

    /// A code point lies outside of the Unicode code space.
    #[error("Code point out of range: {0:#X}")]
    OutOfRange(CodePoint),

    /// An interval's first code point lies after its last.
    #[error("Interval bounds out of order: {0:#X} > {1:#X}")]
    ReversedInterval(CodePoint, CodePoint),

    /// The escape text is malformed.
    #[error("Invalid property escape: {0}")]
    Syntax(String),

    /// A property name was registered twice while building a table.
    #[error("Duplicate property name: {0}")]
    DuplicateProperty(String),

    /// A property was added to a table without any name.
    #[error("Property has no name")]
    UnnamedProperty,
}

impl Error {
    /// \return whether a regex compiler should surface this error as a
    /// SyntaxError in the pattern.
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownProperty(_) | Error::UnsupportedPropertyKey(_) | Error::Syntax(_)
        )
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
