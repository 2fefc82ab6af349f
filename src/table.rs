//! The table mapping Script property values to their code points.

use crate::codepointset::{CodePointSet, Interval};
use crate::error::{Error, Result};
use crate::unicodetables::{SCRIPTS, UNICODE_VERSION};
use once_cell::sync::Lazy;
use std::collections::hash_map::{Entry, HashMap};
use tracing::debug;

/// A generated table entry: the names of one Script value, canonical name
/// first, and its sorted, disjoint intervals.
#[derive(Debug, Copy, Clone)]
pub(crate) struct ScriptData {
    pub(crate) names: &'static [&'static str],
    pub(crate) ranges: &'static [Interval],
}

static UNICODE_TABLE: Lazy<PropertyTable> = Lazy::new(PropertyTable::from_generated);

#[derive(Debug, Clone)]
struct TableEntry {
    names: Vec<Box<str>>,
    set: CodePointSet,
}

/// One property of a table: its names and its code points.
#[derive(Debug, Copy, Clone)]
pub struct Property<'t> {
    names: &'t [Box<str>],
    set: &'t CodePointSet,
}

impl<'t> Property<'t> {
    /// The canonical name, e.g. "Gurmukhi".
    pub fn name(&self) -> &'t str {
        self.names.first().map_or("", |s| &**s)
    }

    /// The other names the property may be spelled with, e.g. "Guru".
    pub fn aliases(&self) -> impl Iterator<Item = &'t str> {
        self.names.iter().skip(1).map(|s| &**s)
    }

    /// The code points having this property.
    pub fn set(&self) -> &'t CodePointSet {
        self.set
    }
}

/// An immutable mapping from property names and aliases to code point sets.
/// All names of a property share one set.
#[derive(Debug, Clone, Default)]
pub struct PropertyTable {
    entries: Vec<TableEntry>,
    index: HashMap<Box<str>, usize>,
}

impl PropertyTable {
    /// \return the process-wide table of Unicode scripts, building it on first
    /// use.
    pub fn unicode() -> &'static PropertyTable {
        &UNICODE_TABLE
    }

    /// \return a builder for a custom table.
    pub fn builder() -> PropertyTableBuilder {
        PropertyTableBuilder::default()
    }

    fn from_generated() -> PropertyTable {
        let mut table = PropertyTable::default();
        for script in SCRIPTS.iter() {
            let idx = table.entries.len();
            for &name in script.names {
                let inserted = table.index.insert(name.into(), idx).is_none();
                debug_assert!(inserted, "Duplicate generated script name {}", name);
            }
            table.entries.push(TableEntry {
                names: script.names.iter().map(|&s| s.into()).collect(),
                set: CodePointSet::from_sorted_disjoint_intervals(script.ranges.to_vec()),
            });
        }
        debug!(
            properties = table.entries.len(),
            names = table.index.len(),
            unicode_version = ?UNICODE_VERSION,
            "built Unicode script table"
        );
        table
    }

    /// Look up a property by its canonical name or an alias. Names are
    /// case-sensitive.
    pub fn lookup(&self, name: &str) -> Result<&CodePointSet> {
        match self.index.get(name) {
            Some(&idx) => Ok(&self.entries[idx].set),
            None => Err(Error::UnknownProperty(name.to_string())),
        }
    }

    /// \return the properties of the table, in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = Property<'_>> {
        self.entries.iter().map(|e| Property {
            names: &e.names,
            set: &e.set,
        })
    }

    /// \return the canonical names of the table's properties.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties().map(|p| p.name())
    }

    /// \return the number of properties, not counting aliases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds a PropertyTable from explicit sets, for example small synthetic
/// tables.
#[derive(Debug, Default)]
pub struct PropertyTableBuilder {
    entries: Vec<TableEntry>,
}

impl PropertyTableBuilder {
    /// Add a property with the given names, canonical name first.
    pub fn add<S: AsRef<str>>(&mut self, names: &[S], set: CodePointSet) -> &mut Self {
        self.entries.push(TableEntry {
            names: names.iter().map(|s| s.as_ref().into()).collect(),
            set,
        });
        self
    }

    /// Add a property from intervals in any order.
    pub fn add_intervals<S: AsRef<str>>(&mut self, names: &[S], ivs: &[Interval]) -> &mut Self {
        self.add(names, CodePointSet::from_intervals(ivs.to_vec()))
    }

    /// Produce the table. Fails if a property has no names or if any name was
    /// registered twice.
    pub fn build(self) -> Result<PropertyTable> {
        let mut index = HashMap::new();
        for (idx, entry) in self.entries.iter().enumerate() {
            if entry.names.is_empty() {
                return Err(Error::UnnamedProperty);
            }
            for name in &entry.names {
                match index.entry(name.clone()) {
                    Entry::Occupied(_) => return Err(Error::DuplicateProperty(name.to_string())),
                    Entry::Vacant(v) => {
                        v.insert(idx);
                    }
                }
            }
        }
        Ok(PropertyTable {
            entries: self.entries,
            index,
        })
    }
}
