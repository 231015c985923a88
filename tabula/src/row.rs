//! Rows and cells as handed to columns by the grid state manager.

use std::collections::HashMap;
use std::fmt;

use uuid::Uuid;

use crate::value::CellValue;

/// Unique identifier for a row.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RowKey(Uuid);

impl RowKey {
    /// Create a new unique row key.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RowKey {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single cell of a row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    pub value: CellValue,
}

impl Cell {
    pub fn new(value: impl Into<CellValue>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A grid row: cells keyed by column field.
#[derive(Debug, Clone, Default)]
pub struct Row {
    pub key: RowKey,
    pub cells: HashMap<String, Cell>,
    /// Whether the row checkbox is ticked.
    pub checked: bool,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the cell for `field`.
    pub fn with_cell(mut self, field: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.cells.insert(field.into(), Cell::new(value));
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn cell(&self, field: &str) -> Option<&Cell> {
        self.cells.get(field)
    }

    pub fn cell_mut(&mut self, field: &str) -> Option<&mut Cell> {
        self.cells.get_mut(field)
    }

    /// The value of `field`, or `None` if the row has no such cell.
    pub fn value(&self, field: &str) -> Option<&CellValue> {
        self.cells.get(field).map(|cell| &cell.value)
    }
}
