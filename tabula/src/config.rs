//! Defaults applied to newly declared columns.

use serde::{Deserialize, Serialize};
use tabula_style::EdgeInsets;

use crate::column::{ColumnFeatures, ColumnTextAlign};

/// Default column width, in logical pixels.
pub const DEFAULT_COLUMN_WIDTH: f32 = 200.0;

/// Default minimum column width, in logical pixels.
pub const DEFAULT_MIN_COLUMN_WIDTH: f32 = 80.0;

/// Grid-wide defaults for column declarations.
///
/// Hosts usually keep one of these per grid and pass it to
/// [`Column::with_defaults`](crate::Column::with_defaults). It can be
/// deserialized from a settings file; missing keys take the built-in values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnDefaults {
    pub width: f32,
    pub min_width: f32,
    /// `None` leaves the padding to the grid style.
    pub title_padding: Option<EdgeInsets>,
    pub cell_padding: Option<EdgeInsets>,
    pub filter_padding: Option<EdgeInsets>,
    pub text_align: ColumnTextAlign,
    pub title_text_align: ColumnTextAlign,
    pub apply_formatter_in_editing: bool,
    pub features: ColumnFeatures,
}

impl Default for ColumnDefaults {
    fn default() -> Self {
        Self {
            width: DEFAULT_COLUMN_WIDTH,
            min_width: DEFAULT_MIN_COLUMN_WIDTH,
            title_padding: None,
            cell_padding: None,
            filter_padding: None,
            text_align: ColumnTextAlign::Start,
            title_text_align: ColumnTextAlign::Start,
            apply_formatter_in_editing: false,
            features: ColumnFeatures::default(),
        }
    }
}

impl ColumnDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default width. Raised to `min_width` if below it.
    pub fn width(mut self, width: f32) -> Self {
        self.width = width.max(self.min_width);
        self
    }

    /// Set the minimum width. The default width is raised to match if needed.
    pub fn min_width(mut self, min_width: f32) -> Self {
        self.min_width = min_width;
        self.width = self.width.max(min_width);
        self
    }

    pub fn title_padding(mut self, padding: EdgeInsets) -> Self {
        self.title_padding = Some(padding);
        self
    }

    pub fn cell_padding(mut self, padding: EdgeInsets) -> Self {
        self.cell_padding = Some(padding);
        self
    }

    pub fn filter_padding(mut self, padding: EdgeInsets) -> Self {
        self.filter_padding = Some(padding);
        self
    }

    pub fn text_align(mut self, align: ColumnTextAlign) -> Self {
        self.text_align = align;
        self
    }

    pub fn title_text_align(mut self, align: ColumnTextAlign) -> Self {
        self.title_text_align = align;
        self
    }

    pub fn apply_formatter_in_editing(mut self, apply: bool) -> Self {
        self.apply_formatter_in_editing = apply;
        self
    }

    pub fn features(mut self, features: ColumnFeatures) -> Self {
        self.features = features;
        self
    }
}
