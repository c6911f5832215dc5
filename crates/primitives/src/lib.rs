//! Regions, selections and rope helpers shared by the host and the plugins.

pub mod range;
pub mod rope;
/// Multi-region selections.
pub mod selection;

pub use range::{CharIdx, CharLen, Direction, Range};
pub use rope::{last_row, line_region, line_text, row_region, rowcol, text_point};
pub use ropey::{Rope, RopeSlice};
pub use selection::Selection;
