//! Custom cell and footer rendering.
//!
//! A column may carry a renderer hook. The painting layer builds a
//! [`RenderContext`] for every custom-rendered cell, hands it to the hook and
//! paints the returned [`CellView`]. Contexts are cheap borrowed bundles and
//! are discarded right after the call.

use tabula_style::{Color, EdgeInsets, RichText, Rgb, TextAlign};

use crate::column::Column;
use crate::error::CallbackError;
use crate::row::{Cell, Row};

/// Read access to the grid state manager, as seen by renderer hooks.
pub trait GridState {
    /// Whether the current cell is in editing mode.
    fn is_editing(&self) -> bool;

    /// Index of the row holding the cursor, if any.
    fn current_row_idx(&self) -> Option<usize>;

    /// Field of the column holding the cursor, if any.
    fn current_field(&self) -> Option<&str>;

    fn row_count(&self) -> usize;
}

/// Everything a cell renderer needs to render one cell.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub column: &'a Column,
    /// Zero-based index of the row at render time.
    pub row_idx: usize,
    pub row: &'a Row,
    pub cell: &'a Cell,
    pub state: &'a dyn GridState,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        column: &'a Column,
        row_idx: usize,
        row: &'a Row,
        cell: &'a Cell,
        state: &'a dyn GridState,
    ) -> Self {
        Self {
            column,
            row_idx,
            row,
            cell,
            state,
        }
    }

    /// Whether this cell holds the grid cursor.
    pub fn is_current_cell(&self) -> bool {
        self.state.current_row_idx() == Some(self.row_idx)
            && self.state.current_field() == Some(self.column.field.as_str())
    }
}

/// Context handed to a column footer renderer.
#[derive(Clone, Copy)]
pub struct FooterRenderContext<'a> {
    pub column: &'a Column,
    pub state: &'a dyn GridState,
}

/// Hook that renders a cell.
pub type CellRenderer =
    Box<dyn Fn(&RenderContext<'_>) -> Result<CellView, CallbackError> + Send + Sync>;

/// Hook that renders the column footer.
pub type FooterRenderer =
    Box<dyn Fn(&FooterRenderContext<'_>) -> Result<CellView, CallbackError> + Send + Sync>;

/// Displayable result of a renderer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellView {
    pub content: RichText,
    pub text_align: TextAlign,
    pub background: Option<Color>,
    pub padding: Option<EdgeInsets>,
}

impl CellView {
    pub fn new(content: impl Into<RichText>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    /// A view of `content` styled the way `column` styles its cells.
    pub fn for_column(column: &Column, content: impl Into<RichText>) -> Self {
        Self {
            content: content.into(),
            text_align: column.text_align.text_align(),
            background: column.background_color,
            padding: column.cell_padding,
        }
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = align;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn text(&self) -> String {
        self.content.plain_text()
    }

    /// Background resolved to sRGB for the painter.
    pub fn background_rgb(&self) -> Option<Rgb> {
        self.background.map(|color| color.to_rgb())
    }

    /// Display width of the content in terminal columns.
    pub fn content_width(&self) -> usize {
        self.content.width()
    }
}
