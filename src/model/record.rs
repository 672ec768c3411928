use super::header::FIXED_COLUMNS;

/// One data row of the string table, positionally aligned to the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringRecord {
    /// 1-based line in the source file.
    pub line: u64,
    cells: Vec<String>,
}

impl StringRecord {
    /// Callers guarantee `cells` has at least the fixed columns.
    pub(crate) fn new(line: u64, cells: Vec<String>) -> Self {
        debug_assert!(cells.len() >= FIXED_COLUMNS);
        StringRecord { line, cells }
    }

    pub fn id(&self) -> &str {
        &self.cells[0]
    }

    pub fn comment(&self) -> &str {
        &self.cells[1]
    }

    /// Translation for the language at `index` among the language columns.
    pub fn translation(&self, index: usize) -> Option<&str> {
        self.cells.get(index + FIXED_COLUMNS).map(String::as_str)
    }

    pub fn translations(&self) -> &[String] {
        &self.cells[FIXED_COLUMNS..]
    }
}
