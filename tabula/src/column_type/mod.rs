//! Value types a column can declare.
//!
//! The column descriptor treats its type as an opaque capability set: it asks
//! which kind of type it is (to decide how editing and formatting behave) and
//! delegates numeric formatting to it. Parsing, validation and comparison are
//! used by the sort engine and the filter popup.

mod date;
mod number;
mod select;
mod text;
mod time;

use std::cmp::Ordering;
use std::fmt;

pub use date::DateType;
pub use number::NumberType;
pub use select::SelectType;
pub use text::TextType;
pub use time::TimeType;

use crate::value::CellValue;

/// Broad category of a column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Text,
    Number,
    Select,
    Date,
    Time,
}

/// Capability set of a column's value type.
pub trait ColumnType: fmt::Debug + Send + Sync {
    fn kind(&self) -> TypeKind;

    fn is_text(&self) -> bool {
        self.kind() == TypeKind::Text
    }

    fn is_number(&self) -> bool {
        self.kind() == TypeKind::Number
    }

    /// Values are picked from a fixed list rather than typed.
    fn is_select(&self) -> bool {
        self.kind() == TypeKind::Select
    }

    fn is_date(&self) -> bool {
        self.kind() == TypeKind::Date
    }

    fn is_time(&self) -> bool {
        self.kind() == TypeKind::Time
    }

    /// Value given to a newly inserted cell.
    fn default_value(&self) -> CellValue {
        CellValue::Null
    }

    /// Type-level display form of `value`.
    fn apply_format(&self, value: &CellValue) -> String {
        value.to_string()
    }

    fn is_valid(&self, value: &CellValue) -> bool;

    /// Ascending order of two values of this type.
    fn compare(&self, a: &CellValue, b: &CellValue) -> Ordering;

    /// Parse user input (an edited cell or a filter search) into a value.
    fn parse(&self, input: &str) -> Option<CellValue>;
}

/// Order two optional keys with absent keys first.
pub(crate) fn compare_nullable<T>(
    a: Option<T>,
    b: Option<T>,
    compare: impl FnOnce(T, T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => compare(a, b),
    }
}
