use serde::{Deserialize, Serialize};
use tabula_style::{Alignment, AlignmentDirectional, BlockAlignment, TextAlign};

/// Alignment of a column's cell content or title.
///
/// Each value maps to a text alignment (for the text itself) and a block
/// alignment (for placing the content box inside the cell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnTextAlign {
    /// Leading edge of the reading direction.
    #[default]
    Start,
    Left,
    Center,
    Right,
    /// Trailing edge of the reading direction.
    End,
}

impl ColumnTextAlign {
    pub fn text_align(self) -> TextAlign {
        match self {
            ColumnTextAlign::Start => TextAlign::Start,
            ColumnTextAlign::Left => TextAlign::Left,
            ColumnTextAlign::Center => TextAlign::Center,
            ColumnTextAlign::Right => TextAlign::Right,
            ColumnTextAlign::End => TextAlign::End,
        }
    }

    /// Content placement, vertically centered in every case.
    pub fn alignment(self) -> BlockAlignment {
        match self {
            ColumnTextAlign::Start => AlignmentDirectional::CENTER_START.into(),
            ColumnTextAlign::Left => Alignment::CENTER_LEFT.into(),
            ColumnTextAlign::Center => Alignment::CENTER.into(),
            ColumnTextAlign::Right => Alignment::CENTER_RIGHT.into(),
            ColumnTextAlign::End => AlignmentDirectional::CENTER_END.into(),
        }
    }

    pub fn is_start(self) -> bool {
        self == ColumnTextAlign::Start
    }

    pub fn is_left(self) -> bool {
        self == ColumnTextAlign::Left
    }

    pub fn is_center(self) -> bool {
        self == ColumnTextAlign::Center
    }

    pub fn is_right(self) -> bool {
        self == ColumnTextAlign::Right
    }

    pub fn is_end(self) -> bool {
        self == ColumnTextAlign::End
    }
}
