//! Resolution of property escapes to code point sets.

use crate::codepointset::CodePointSet;
use crate::error::{Error, Result};
use crate::matchers::PropertyMatcher;
use crate::parse::{self, PropertyEscape};
use crate::table::PropertyTable;
use std::borrow::Cow;
use tracing::{debug, trace};

/// The property keys accepted on the left of `=` in a property escape.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PropertyKey {
    Script,
}

impl PropertyKey {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Script" | "sc" => Some(PropertyKey::Script),
            _ => None,
        }
    }
}

/// Resolves property escapes against a PropertyTable.
#[derive(Debug, Copy, Clone)]
pub struct Resolver<'t> {
    table: &'t PropertyTable,
}

impl Resolver<'static> {
    /// A resolver over the Unicode script table.
    pub fn unicode() -> Self {
        Resolver::new(PropertyTable::unicode())
    }
}

impl Default for Resolver<'static> {
    fn default() -> Self {
        Resolver::unicode()
    }
}

impl<'t> Resolver<'t> {
    pub fn new(table: &'t PropertyTable) -> Self {
        Resolver { table }
    }

    /// \return the table this resolver consults.
    pub fn table(&self) -> &'t PropertyTable {
        self.table
    }

    /// Resolve `key=value` to its set of code points. If \p negated, the
    /// complement over the whole code space is computed here, once; otherwise
    /// the table's set is borrowed.
    pub fn resolve(&self, key: &str, value: &str, negated: bool) -> Result<Cow<'t, CodePointSet>> {
        let result = self.resolve_inner(key, value, negated);
        match &result {
            Ok(set) => trace!(
                key,
                value,
                negated,
                intervals = set.intervals().len(),
                "resolved property escape"
            ),
            Err(err) => debug!(key, value, negated, %err, "failed to resolve property escape"),
        }
        result
    }

    fn resolve_inner(&self, key: &str, value: &str, negated: bool) -> Result<Cow<'t, CodePointSet>> {
        match PropertyKey::from_str(key) {
            Some(PropertyKey::Script) => {}
            None => return Err(Error::UnsupportedPropertyKey(key.to_string())),
        }
        let set = self.table.lookup(value)?;
        if negated {
            Ok(Cow::Owned(set.inverted()))
        } else {
            Ok(Cow::Borrowed(set))
        }
    }

    /// Resolve a parsed escape.
    pub fn resolve_escape(&self, escape: &PropertyEscape) -> Result<Cow<'t, CodePointSet>> {
        self.resolve(&escape.key, &escape.value, escape.negated)
    }

    /// Parse and resolve escape text such as `\p{sc=Guru}` into a matcher.
    pub fn compile(&self, text: &str) -> Result<PropertyMatcher<'t>> {
        let escape = parse::parse(text)?;
        Ok(PropertyMatcher::new(self.resolve_escape(&escape)?))
    }
}

/// Resolve `key=value` against the Unicode script table.
pub fn resolve(key: &str, value: &str, negated: bool) -> Result<Cow<'static, CodePointSet>> {
    Resolver::unicode().resolve(key, value, negated)
}
