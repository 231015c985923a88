//! Column descriptor and its policy enumerations.
//!
//! ```
//! use tabula::prelude::*;
//!
//! let column = Column::new("Salary", "salary", NumberType::new())
//!     .width(120.0)
//!     .text_align(ColumnTextAlign::Right)
//!     .formatter(|value| format!("${value}"));
//!
//! let shown = column.formatted_value_for_display(&CellValue::from(1500i64)).unwrap();
//! assert_eq!(shown, "$1500");
//! ```

mod align;
mod descriptor;
mod features;
mod frozen;
mod sort;

pub use align::ColumnTextAlign;
pub use descriptor::{Column, ColumnKey, Formatter, ReadOnlyCheck};
pub use features::ColumnFeatures;
pub use frozen::ColumnFrozen;
pub use sort::ColumnSort;
