//! Filter kinds offered by a column's filter popup.

use std::cmp::Ordering;
use std::fmt;

use crate::column_type::ColumnType;
use crate::value::CellValue;

/// How a filter search term is matched against a cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterKind {
    #[default]
    Contains,
    Equals,
    StartsWith,
    EndsWith,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

impl FilterKind {
    pub const ALL: [FilterKind; 8] = [
        FilterKind::Contains,
        FilterKind::Equals,
        FilterKind::StartsWith,
        FilterKind::EndsWith,
        FilterKind::GreaterThan,
        FilterKind::GreaterThanOrEqual,
        FilterKind::LessThan,
        FilterKind::LessThanOrEqual,
    ];

    pub fn title(self) -> &'static str {
        match self {
            FilterKind::Contains => "Contains",
            FilterKind::Equals => "Equals",
            FilterKind::StartsWith => "Starts with",
            FilterKind::EndsWith => "Ends with",
            FilterKind::GreaterThan => "Greater than",
            FilterKind::GreaterThanOrEqual => "Greater than or equal to",
            FilterKind::LessThan => "Less than",
            FilterKind::LessThanOrEqual => "Less than or equal to",
        }
    }

    /// Whether the filter orders values instead of matching text.
    pub fn is_ordering(self) -> bool {
        matches!(
            self,
            FilterKind::GreaterThan
                | FilterKind::GreaterThanOrEqual
                | FilterKind::LessThan
                | FilterKind::LessThanOrEqual
        )
    }

    /// Does `value` pass this filter for the `search` term?
    ///
    /// Text kinds are case-insensitive. Ordering kinds compare through the
    /// column type when `search` parses as a value of that type, and fall back
    /// to case-insensitive text ordering otherwise.
    pub fn matches(self, column_type: &dyn ColumnType, value: &CellValue, search: &str) -> bool {
        let base = value.to_string().to_lowercase();
        let needle = search.to_lowercase();

        let ordering = || match column_type.parse(search) {
            Some(parsed) => column_type.compare(value, &parsed),
            None => base.cmp(&needle),
        };

        match self {
            FilterKind::Contains => base.contains(&needle),
            FilterKind::Equals => base == needle,
            FilterKind::StartsWith => base.starts_with(&needle),
            FilterKind::EndsWith => base.ends_with(&needle),
            FilterKind::GreaterThan => ordering() == Ordering::Greater,
            FilterKind::GreaterThanOrEqual => ordering() != Ordering::Less,
            FilterKind::LessThan => ordering() == Ordering::Less,
            FilterKind::LessThanOrEqual => ordering() != Ordering::Greater,
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
