//! Parsed representation of a metadata file.
//!
//! A file owns tables, a table owns variable records, and a record holds the
//! five recognised properties as plain strings. Nothing here is typed beyond
//! "present or absent"; the validator decides what a value means.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A property key recognised inside a variable record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    StandardName,
    LongName,
    Units,
    Dimensions,
    Type,
}

impl Property {
    /// All properties, in the order they are matched and reported.
    pub const ALL: [Property; 5] = [
        Property::StandardName,
        Property::LongName,
        Property::Units,
        Property::Dimensions,
        Property::Type,
    ];

    /// Key as written on disk.
    pub fn as_str(&self) -> &'static str {
        match self {
            Property::StandardName => "standard_name",
            Property::LongName => "long_name",
            Property::Units => "units",
            Property::Dimensions => "dimensions",
            Property::Type => "type",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One bracketed record inside a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// Identifier between the brackets, e.g. `im` for `[im]`.
    pub local_name: String,
    pub standard_name: Option<String>,
    pub long_name: Option<String>,
    pub units: Option<String>,
    pub dimensions: Option<String>,
    #[serde(rename = "type")]
    pub var_type: Option<String>,
}

impl Variable {
    pub fn new(local_name: impl Into<String>) -> Self {
        Self {
            local_name: local_name.into(),
            ..Self::default()
        }
    }

    pub fn get(&self, property: Property) -> Option<&str> {
        let value = match property {
            Property::StandardName => &self.standard_name,
            Property::LongName => &self.long_name,
            Property::Units => &self.units,
            Property::Dimensions => &self.dimensions,
            Property::Type => &self.var_type,
        };
        value.as_deref()
    }

    /// Set a property, replacing any earlier value.
    pub fn set(&mut self, property: Property, value: impl Into<String>) {
        let slot = match property {
            Property::StandardName => &mut self.standard_name,
            Property::LongName => &mut self.long_name,
            Property::Units => &mut self.units,
            Property::Dimensions => &mut self.dimensions,
            Property::Type => &mut self.var_type,
        };
        *slot = Some(value.into());
    }

    /// Builder-style variant of [`Variable::set`].
    #[must_use]
    pub fn with(mut self, property: Property, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Properties that never appeared in the record, in report order.
    pub fn missing_properties(&self) -> Vec<Property> {
        Property::ALL
            .into_iter()
            .filter(|property| self.get(*property).is_none())
            .collect()
    }
}

/// A named argument table (`[ccpp-arg-table]` section).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub variables: Vec<Variable>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: Vec::new(),
        }
    }

    /// Open a fresh record and return its index.
    ///
    /// A local name seen earlier in the same table is reset to an empty
    /// record at its original position.
    pub fn open_variable(&mut self, local_name: &str) -> usize {
        if let Some(index) = self
            .variables
            .iter()
            .position(|variable| variable.local_name == local_name)
        {
            self.variables[index] = Variable::new(local_name);
            return index;
        }
        self.variables.push(Variable::new(local_name));
        self.variables.len() - 1
    }

    pub fn variable(&self, local_name: &str) -> Option<&Variable> {
        self.variables
            .iter()
            .find(|variable| variable.local_name == local_name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

/// Structural problem met while parsing a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseDefect {
    /// 1-based line number.
    pub line: usize,
    pub kind: DefectKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DefectKind {
    /// A `[` line without a closing `]`.
    UnterminatedName { text: String },
    /// A property line before any record was opened in the table.
    PropertyOutsideRecord { property: Property },
}

/// Everything parsed out of one metadata file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataFile {
    pub path: PathBuf,
    pub tables: Vec<Table>,
    pub defects: Vec<ParseDefect>,
}

impl MetadataFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            tables: Vec::new(),
            defects: Vec::new(),
        }
    }

    /// Register a table and return its index.
    ///
    /// Reusing a table name empties the earlier table in place.
    pub fn open_table(&mut self, name: &str) -> usize {
        if let Some(index) = self.tables.iter().position(|table| table.name == name) {
            self.tables[index] = Table::new(name);
            return index;
        }
        self.tables.push(Table::new(name));
        self.tables.len() - 1
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }

    /// Iterate `(table, variable)` pairs in file order.
    pub fn variables(&self) -> impl Iterator<Item = (&Table, &Variable)> {
        self.tables
            .iter()
            .flat_map(|table| table.variables.iter().map(move |variable| (table, variable)))
    }

    pub fn variable_count(&self) -> usize {
        self.tables.iter().map(Table::len).sum()
    }
}
