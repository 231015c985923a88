//! Presentation primitives shared by the grid subsystems.
//!
//! Nothing in here knows about columns or rows: these are the alignment,
//! padding, color and rich-text values that column descriptors, group headers
//! and cell renderers hand to the painting layer.

pub mod text;
pub mod types;

pub use text::{RichText, Span};
pub use types::*;
