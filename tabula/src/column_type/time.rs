use std::cmp::Ordering;

use chrono::NaiveTime;

use super::{ColumnType, TypeKind, compare_nullable};
use crate::value::{CellValue, DEFAULT_TIME_FORMAT};

/// Time-of-day column (`HH:MM`), edited through a time picker.
#[derive(Debug, Clone, Default)]
pub struct TimeType;

impl TimeType {
    pub fn new() -> Self {
        Self
    }

    fn time(&self, value: &CellValue) -> Option<NaiveTime> {
        match value {
            CellValue::Time(time) => Some(*time),
            CellValue::Text(text) => NaiveTime::parse_from_str(text.trim(), DEFAULT_TIME_FORMAT).ok(),
            _ => None,
        }
    }
}

impl ColumnType for TimeType {
    fn kind(&self) -> TypeKind {
        TypeKind::Time
    }

    fn is_valid(&self, value: &CellValue) -> bool {
        self.time(value).is_some()
    }

    fn compare(&self, a: &CellValue, b: &CellValue) -> Ordering {
        compare_nullable(self.time(a), self.time(b), |a, b| a.cmp(&b))
    }

    fn parse(&self, input: &str) -> Option<CellValue> {
        self.time(&CellValue::from(input)).map(CellValue::Time)
    }
}
