use std::cmp::Ordering;
use std::fmt::Write;

use chrono::NaiveDate;

use super::{ColumnType, TypeKind, compare_nullable};
use crate::value::{CellValue, DEFAULT_DATE_FORMAT};

/// Calendar date column, edited through a date picker.
#[derive(Debug, Clone)]
pub struct DateType {
    /// `chrono` format string used for display and parsing.
    pub format: String,
    /// Earliest selectable date (inclusive).
    pub start_date: Option<NaiveDate>,
    /// Latest selectable date (inclusive).
    pub end_date: Option<NaiveDate>,
}

impl Default for DateType {
    fn default() -> Self {
        Self {
            format: DEFAULT_DATE_FORMAT.to_string(),
            start_date: None,
            end_date: None,
        }
    }
}

impl DateType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    fn date(&self, value: &CellValue) -> Option<NaiveDate> {
        match value {
            CellValue::Date(date) => Some(*date),
            CellValue::Text(text) => self.parse_date(text),
            _ => None,
        }
    }

    fn parse_date(&self, input: &str) -> Option<NaiveDate> {
        let input = input.trim();
        NaiveDate::parse_from_str(input, &self.format)
            .or_else(|_| NaiveDate::parse_from_str(input, DEFAULT_DATE_FORMAT))
            .ok()
    }

    fn in_range(&self, date: NaiveDate) -> bool {
        self.start_date.is_none_or(|start| date >= start)
            && self.end_date.is_none_or(|end| date <= end)
    }
}

impl ColumnType for DateType {
    fn kind(&self) -> TypeKind {
        TypeKind::Date
    }

    fn apply_format(&self, value: &CellValue) -> String {
        let Some(date) = self.date(value) else {
            return value.to_string();
        };

        // An invalid format string surfaces as a fmt error; fall back to ISO.
        let mut out = String::new();
        match write!(out, "{}", date.format(&self.format)) {
            Ok(()) => out,
            Err(_) => date.format(DEFAULT_DATE_FORMAT).to_string(),
        }
    }

    fn is_valid(&self, value: &CellValue) -> bool {
        self.date(value).is_some_and(|date| self.in_range(date))
    }

    fn compare(&self, a: &CellValue, b: &CellValue) -> Ordering {
        compare_nullable(self.date(a), self.date(b), |a, b| a.cmp(&b))
    }

    fn parse(&self, input: &str) -> Option<CellValue> {
        self.parse_date(input).map(CellValue::Date)
    }
}
