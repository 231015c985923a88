use std::cmp::Ordering;

use super::{ColumnType, TypeKind};
use crate::value::CellValue;

/// Free-text column.
#[derive(Debug, Clone, Default)]
pub struct TextType {
    pub default_value: String,
}

impl TextType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }
}

impl ColumnType for TextType {
    fn kind(&self) -> TypeKind {
        TypeKind::Text
    }

    fn default_value(&self) -> CellValue {
        CellValue::Text(self.default_value.clone())
    }

    fn is_valid(&self, value: &CellValue) -> bool {
        matches!(
            value,
            CellValue::Null | CellValue::Text(_) | CellValue::Int(_) | CellValue::Float(_)
        )
    }

    fn compare(&self, a: &CellValue, b: &CellValue) -> Ordering {
        a.to_string().cmp(&b.to_string())
    }

    fn parse(&self, input: &str) -> Option<CellValue> {
        Some(CellValue::Text(input.to_string()))
    }
}
