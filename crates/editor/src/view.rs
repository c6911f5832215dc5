//! The host API that plugin commands are written against.

use linewise_primitives::{CharIdx, CharLen, Range, RopeSlice, Selection, line_region, rowcol, text_point};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Device-independent pixels, the unit of layout and viewport geometry.
pub type Dip = f64;

/// Commands the host implements natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum NativeCommand {
	/// Move the selected lines up past the line above them.
	SwapLineUp,
	/// Move the selected lines down past the line below them.
	SwapLineDown,
	/// Re-indent the selected lines.
	Reindent,
}

/// An open document and its viewport.
///
/// Offsets are character indices. Implementations clamp out-of-range
/// offsets, rows and columns to the document instead of failing.
pub trait View {
	/// Returns the whole document text.
	fn text(&self) -> RopeSlice<'_>;

	/// Returns the current selection.
	fn selection(&self) -> &Selection;

	/// Replaces the selection.
	fn set_selection(&mut self, selection: Selection);

	/// Inserts `text` at `pos`, returning the number of characters inserted.
	///
	/// Selection points at or after `pos` move forward.
	fn insert(&mut self, pos: CharIdx, text: &str) -> CharLen;

	/// Removes the characters in `region`.
	fn erase(&mut self, region: Range);

	/// Height of one line of text.
	fn line_height(&self) -> Dip;

	/// Top-left corner of the viewport in layout coordinates.
	fn viewport_position(&self) -> (Dip, Dip);

	/// Moves the viewport; the host clamps to its scrollable area.
	fn set_viewport_position(&mut self, position: (Dip, Dip));

	/// Width and height of the viewport.
	fn viewport_extent(&self) -> (Dip, Dip);

	/// Layout coordinates of the top-left corner of the character at `pos`.
	fn text_to_layout(&self, pos: CharIdx) -> (Dip, Dip);

	/// Scrolls the minimal amount needed to make `pos` visible.
	fn show(&mut self, pos: CharIdx);

	/// Runs a host command directly, bypassing command listeners.
	fn run_native(&mut self, command: NativeCommand);

	/// Number of characters in the document.
	fn size(&self) -> CharIdx {
		self.text().len_chars()
	}

	/// Returns the text covered by `region`.
	fn substr(&self, region: Range) -> String {
		let region = region.clamp(self.size());
		self.text().slice(region.begin()..region.end()).to_string()
	}

	/// Returns the line containing `pos`, without its terminator.
	fn line(&self, pos: CharIdx) -> Range {
		line_region(self.text(), pos)
	}

	/// Converts an offset into `(row, column)`.
	fn rowcol(&self, pos: CharIdx) -> (usize, usize) {
		rowcol(self.text(), pos)
	}

	/// Converts `(row, column)` into an offset.
	fn text_point(&self, row: usize, col: usize) -> CharIdx {
		text_point(self.text(), row, col)
	}

	/// Returns the region of the document currently on screen.
	fn visible_region(&self) -> Range {
		let line_height = self.line_height();
		let (_, top) = self.viewport_position();
		let (_, height) = self.viewport_extent();
		let first = (top / line_height).floor() as usize;
		let last = (((top + height) / line_height).ceil() as usize)
			.saturating_sub(1)
			.max(first);
		let begin = self.text_point(first, 0);
		let end = self.line(self.text_point(last, 0)).end();
		Range::new(begin, end)
	}
}
