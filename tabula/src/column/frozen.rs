use serde::{Deserialize, Serialize};

/// Which fixed region, if any, a column is pinned to.
///
/// Frozen columns do not scroll horizontally with the rest of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnFrozen {
    /// Scrolls with the body.
    #[default]
    None,
    Left,
    Right,
}

impl ColumnFrozen {
    pub fn is_none(self) -> bool {
        self == ColumnFrozen::None
    }

    pub fn is_left(self) -> bool {
        self == ColumnFrozen::Left
    }

    pub fn is_right(self) -> bool {
        self == ColumnFrozen::Right
    }

    /// Pinned to either side.
    pub fn is_frozen(self) -> bool {
        !self.is_none()
    }
}
