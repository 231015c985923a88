use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sort direction currently applied to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnSort {
    #[default]
    None,
    Ascending,
    Descending,
}

impl ColumnSort {
    pub fn is_none(self) -> bool {
        self == ColumnSort::None
    }

    pub fn is_ascending(self) -> bool {
        self == ColumnSort::Ascending
    }

    pub fn is_descending(self) -> bool {
        self == ColumnSort::Descending
    }

    /// Label used when a sort state is stored as text.
    pub fn short_name(self) -> &'static str {
        match self {
            ColumnSort::None => "none",
            ColumnSort::Ascending => "ascending",
            ColumnSort::Descending => "descending",
        }
    }

    /// Parse a [`short_name`](Self::short_name) label.
    ///
    /// Anything other than `"ascending"` or `"descending"` yields `None`,
    /// so stored layouts with unknown labels restore unsorted.
    pub fn from_short_name(name: &str) -> Self {
        match name {
            "ascending" => ColumnSort::Ascending,
            "descending" => ColumnSort::Descending,
            _ => ColumnSort::None,
        }
    }

    /// Next state when the column title is tapped: none, ascending, descending, none.
    pub fn toggled(self) -> Self {
        match self {
            ColumnSort::None => ColumnSort::Ascending,
            ColumnSort::Ascending => ColumnSort::Descending,
            ColumnSort::Descending => ColumnSort::None,
        }
    }

    /// Orient an ascending comparison for this direction.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            ColumnSort::None => Ordering::Equal,
            ColumnSort::Ascending => ordering,
            ColumnSort::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for ColumnSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl From<&str> for ColumnSort {
    fn from(name: &str) -> Self {
        ColumnSort::from_short_name(name)
    }
}

impl FromStr for ColumnSort {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ColumnSort::from_short_name(s))
    }
}
