use serde::{Deserialize, Serialize};

/// Interaction toggles of a column.
///
/// Each flag only enables or disables a feature; the behavior itself lives
/// in the grid subsystem that owns it (drag handling, context menu, editor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnFeatures {
    /// The column can be dragged to a new position by its title.
    pub enable_column_drag: bool,
    /// Rows can be dragged by a handle in this column.
    pub enable_row_drag: bool,
    /// Show a row checkbox in this column.
    pub enable_row_checked: bool,
    /// Tapping the title toggles sorting.
    pub enable_sorting: bool,
    /// Show the column context menu icon.
    pub enable_context_menu: bool,
    /// The title edge can be dragged to resize.
    pub enable_drop_to_resize: bool,
    /// Context menu offers "Filter".
    pub enable_filter_menu_item: bool,
    /// Context menu offers "Hide column".
    pub enable_hide_column_menu_item: bool,
    /// Context menu offers "Set columns".
    pub enable_set_columns_menu_item: bool,
    /// Entering a cell starts editing without an extra action.
    pub enable_auto_editing: bool,
    /// Enter or tap switches the cell to editing mode.
    pub enable_editing_mode: bool,
}

impl Default for ColumnFeatures {
    fn default() -> Self {
        Self {
            enable_column_drag: true,
            enable_row_drag: false,
            enable_row_checked: false,
            enable_sorting: true,
            enable_context_menu: true,
            enable_drop_to_resize: true,
            enable_filter_menu_item: true,
            enable_hide_column_menu_item: true,
            enable_set_columns_menu_item: true,
            enable_auto_editing: false,
            enable_editing_mode: true,
        }
    }
}

impl ColumnFeatures {
    /// Every toggle off: a static, display-only column.
    pub fn none() -> Self {
        Self {
            enable_column_drag: false,
            enable_row_drag: false,
            enable_row_checked: false,
            enable_sorting: false,
            enable_context_menu: false,
            enable_drop_to_resize: false,
            enable_filter_menu_item: false,
            enable_hide_column_menu_item: false,
            enable_set_columns_menu_item: false,
            enable_auto_editing: false,
            enable_editing_mode: false,
        }
    }

    /// Whether the context menu has at least one item to show.
    pub fn has_context_menu_items(&self) -> bool {
        self.enable_context_menu
            && (self.enable_filter_menu_item
                || self.enable_hide_column_menu_item
                || self.enable_set_columns_menu_item)
    }
}
