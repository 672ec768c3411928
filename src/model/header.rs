use std::collections::HashSet;

use tracing::warn;

use crate::error::{LocalizeError, Result};

pub const ID_COLUMN: &str = "id";
pub const COMMENT_COLUMN: &str = "comment";

/// Number of leading columns that are not languages.
pub const FIXED_COLUMNS: usize = 2;

/// Column names of the string table, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    columns: Vec<String>,
}

impl Header {
    pub fn new(columns: Vec<String>) -> Result<Self> {
        if columns.len() < FIXED_COLUMNS {
            return Err(LocalizeError::InvalidHeader(format!(
                "expected at least {FIXED_COLUMNS} columns, found {}",
                columns.len()
            )));
        }

        if columns[0] != ID_COLUMN {
            return Err(LocalizeError::InvalidHeader(format!(
                "first column must be \"{ID_COLUMN}\", found \"{}\"",
                columns[0]
            )));
        }

        if columns[1] != COMMENT_COLUMN {
            return Err(LocalizeError::InvalidHeader(format!(
                "second column must be \"{COMMENT_COLUMN}\", found \"{}\"",
                columns[1]
            )));
        }

        let mut seen = HashSet::new();
        for (i, code) in columns[FIXED_COLUMNS..].iter().enumerate() {
            if code.is_empty() {
                return Err(LocalizeError::InvalidHeader(format!(
                    "language column {} has an empty code",
                    i + FIXED_COLUMNS + 1
                )));
            }
            // Same code twice: the later column's file replaces the earlier one.
            if !seen.insert(code.as_str()) {
                warn!(language = %code, "duplicate language column");
            }
        }

        Ok(Header { columns })
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn languages(&self) -> &[String] {
        &self.columns[FIXED_COLUMNS..]
    }
}
