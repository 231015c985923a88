//! Column configuration for a tabular data grid.
//!
//! A [`Column`](column::Column) declares one grid column: its identity, value
//! type, layout, editability, sorting, grouping and formatting. The grid's
//! state manager owns the columns and asks them, per cell, for the effective
//! read-only state, the display string of a value and (for custom-rendered
//! columns) a rendered [`CellView`](render::CellView).

pub mod column;
pub mod column_type;
pub mod config;
pub mod error;
pub mod filter;
pub mod focus;
pub mod group;
pub mod render;
pub mod row;
pub mod value;

pub use column::{Column, ColumnFeatures, ColumnFrozen, ColumnKey, ColumnSort, ColumnTextAlign};
pub use error::{CallbackError, ColumnError};

pub mod prelude {
    pub use crate::column::{
        Column, ColumnFeatures, ColumnFrozen, ColumnKey, ColumnSort, ColumnTextAlign,
    };
    pub use crate::column_type::{
        ColumnType, DateType, NumberType, SelectType, TextType, TimeType, TypeKind,
    };
    pub use crate::config::ColumnDefaults;
    pub use crate::error::{CallbackError, ColumnError};
    pub use crate::filter::FilterKind;
    pub use crate::focus::FocusId;
    pub use crate::group::{ColumnGroup, GroupId, GroupRegistry, GroupSpec};
    pub use crate::render::{CellView, FooterRenderContext, GridState, RenderContext};
    pub use crate::row::{Cell, Row, RowKey};
    pub use crate::value::CellValue;

    pub use tabula_style::{
        Color, EdgeInsets, Rgb, RichText, Span, TextAlign, TextDirection, TextStyle,
    };
}
