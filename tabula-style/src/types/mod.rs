mod alignment;
mod color;
mod edges;
mod enums;

pub use alignment::{Alignment, AlignmentDirectional, BlockAlignment};
pub use color::{Color, Rgb};
pub use edges::EdgeInsets;
pub use enums::{TextAlign, TextDirection, TextStyle};
