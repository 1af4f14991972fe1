// Data module for observation tables and their sources

mod csv;

pub use self::csv::*;

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Represents one input source for a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRef {
    /// A filesystem path
    Path(PathBuf),
    /// The process's standard input
    Stdin,
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SourceRef::Path(path) => write!(f, "{}", path.display()),
            SourceRef::Stdin => write!(f, "<stdin>"),
        }
    }
}

/// Represents a fully loaded observation table
///
/// Rows keep their source order. Identifiers are not required to be
/// unique. The table is not mutated after loading.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Observation column names, in header order (identifier excluded)
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a new table with the given observation columns and rows
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Table { columns, rows }
    }

    /// Get the number of rows in the table
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a reference to a row by index
    pub fn get_row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }
}

/// Represents a row in a table
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Value of the identifier column for this row
    pub identifier: String,
    /// Numeric observations, in header order
    pub observations: Vec<f64>,
}

impl Row {
    /// Create a new row with the given identifier and observations
    pub fn new(identifier: String, observations: Vec<f64>) -> Self {
        Row {
            identifier,
            observations,
        }
    }
}

/// Represents an error in the data module
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot open source '{path}': {source}")]
    SourceNotFound { path: String, source: io::Error },

    #[error("source '{source_name}' has no '{column}' column in its header")]
    MissingIdentifier {
        source_name: String,
        column: String,
    },

    #[error("source '{source_name}' line {line}: expected {expected} fields, found {found}")]
    FieldCountMismatch {
        source_name: String,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("source '{source_name}' line {line}, column '{column}': cannot parse '{value}' as a number")]
    ParseError {
        source_name: String,
        line: u64,
        column: String,
        value: String,
    },

    #[error("error reading source '{source_name}': {source}")]
    Io {
        source_name: String,
        source: ::csv::Error,
    },
}
