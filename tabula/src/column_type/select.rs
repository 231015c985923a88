use std::cmp::Ordering;

use super::{ColumnType, TypeKind, compare_nullable};
use crate::value::CellValue;

/// Column whose values are picked from a fixed list.
///
/// Values sort by their position in `items`, not by their text.
#[derive(Debug, Clone, Default)]
pub struct SelectType {
    pub items: Vec<CellValue>,
    /// Whether the picker offers a search box.
    pub enable_search: bool,
}

impl SelectType {
    pub fn new<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            enable_search: false,
        }
    }

    pub fn searchable(mut self) -> Self {
        self.enable_search = true;
        self
    }

    pub fn position(&self, value: &CellValue) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }
}

impl ColumnType for SelectType {
    fn kind(&self) -> TypeKind {
        TypeKind::Select
    }

    fn default_value(&self) -> CellValue {
        self.items.first().cloned().unwrap_or_default()
    }

    fn is_valid(&self, value: &CellValue) -> bool {
        self.position(value).is_some()
    }

    fn compare(&self, a: &CellValue, b: &CellValue) -> Ordering {
        compare_nullable(self.position(a), self.position(b), |a, b| a.cmp(&b))
    }

    fn parse(&self, input: &str) -> Option<CellValue> {
        self.items
            .iter()
            .find(|item| item.to_string() == input)
            .cloned()
    }
}
