//! In-memory host view.
//!
//! [`Buffer`] keeps text in a rope, a multi-region selection, and a simple
//! monospace layout without wrapping: row `r` sits at `y = r * line_height`
//! and column `c` at `x = c * char_width`.

mod native;
mod viewport;

use linewise_primitives::{CharIdx, CharLen, Range, Rope, RopeSlice, Selection};
use tracing::{debug, trace};
pub use viewport::Viewport;

use crate::view::{Dip, NativeCommand, View};

#[cfg(test)]
mod tests;

/// A text buffer with its viewport.
#[derive(Debug, Clone)]
pub struct Buffer {
	content: Rope,
	selection: Selection,
	viewport: Viewport,
	native_log: Vec<NativeCommand>,
}

impl Buffer {
	/// Creates a buffer with a caret at the start and a default viewport.
	pub fn new(text: &str) -> Self {
		Self {
			content: Rope::from(text),
			selection: Selection::point(0),
			viewport: Viewport::default(),
			native_log: Vec::new(),
		}
	}

	/// Replaces the selection, clamped to the text.
	pub fn with_selection(mut self, selection: Selection) -> Self {
		self.set_selection(selection);
		self
	}

	/// Replaces the viewport geometry.
	pub fn with_viewport(mut self, viewport: Viewport) -> Self {
		self.viewport = viewport;
		let position = self.viewport.position;
		self.set_viewport_position(position);
		self
	}

	/// Places a caret at `(row, col)`.
	pub fn with_cursor(self, row: usize, col: usize) -> Self {
		let pos = self.text_point(row, col);
		self.with_selection(Selection::point(pos))
	}

	/// Returns the document text as an owned string.
	pub fn contents(&self) -> String {
		self.content.to_string()
	}

	/// Returns the document lines without terminators.
	pub fn lines(&self) -> Vec<String> {
		(0..self.content.len_lines())
			.map(|row| linewise_primitives::line_text(self.content.slice(..), row).to_string())
			.collect()
	}

	/// Returns the viewport geometry.
	pub fn viewport(&self) -> &Viewport {
		&self.viewport
	}

	/// Native commands run so far, oldest first.
	pub fn native_log(&self) -> &[NativeCommand] {
		&self.native_log
	}

	/// Row shown at the top of the viewport.
	pub fn top_row(&self) -> usize {
		(self.viewport.position.1 / self.viewport.line_height).floor() as usize
	}

	/// Scrolls so `row` is the first visible row.
	pub fn scroll_to_row(&mut self, row: usize) {
		let x = self.viewport.position.0;
		self.set_viewport_position((x, row as Dip * self.viewport.line_height));
	}

	/// Replaces the whole text, keeping the selection clamped.
	pub(crate) fn replace_content(&mut self, content: Rope, selection: Selection) {
		self.content = content;
		self.set_selection(selection);
	}
}

impl View for Buffer {
	fn text(&self) -> RopeSlice<'_> {
		self.content.slice(..)
	}

	fn selection(&self) -> &Selection {
		&self.selection
	}

	fn set_selection(&mut self, selection: Selection) {
		self.selection = selection.clamp(self.content.len_chars());
	}

	fn insert(&mut self, pos: CharIdx, text: &str) -> CharLen {
		let pos = pos.min(self.content.len_chars());
		let len = text.chars().count();
		self.content.insert(pos, text);
		self.selection = self
			.selection
			.transform(|r| r.map(|p| if p >= pos { p + len } else { p }));
		trace!(pos, len, "insert");
		len
	}

	fn erase(&mut self, region: Range) {
		let region = region.clamp(self.content.len_chars());
		if region.is_empty() {
			return;
		}
		let (begin, end) = (region.begin(), region.end());
		self.content.remove(begin..end);
		self.selection = self.selection.transform(|r| {
			r.map(|p| match p {
				p if p < begin => p,
				p if p < end => begin,
				p => p - (end - begin),
			})
		});
		trace!(begin, end, "erase");
	}

	fn line_height(&self) -> Dip {
		self.viewport.line_height
	}

	fn viewport_position(&self) -> (Dip, Dip) {
		self.viewport.position
	}

	fn set_viewport_position(&mut self, position: (Dip, Dip)) {
		let max_y = linewise_primitives::last_row(self.content.slice(..)) as Dip * self.viewport.line_height;
		self.viewport.position = (position.0.max(0.0), position.1.clamp(0.0, max_y));
	}

	fn viewport_extent(&self) -> (Dip, Dip) {
		self.viewport.extent
	}

	fn text_to_layout(&self, pos: CharIdx) -> (Dip, Dip) {
		let (row, col) = self.rowcol(pos);
		(
			col as Dip * self.viewport.char_width,
			row as Dip * self.viewport.line_height,
		)
	}

	fn show(&mut self, pos: CharIdx) {
		let (row, _) = self.rowcol(pos);
		let y = self.viewport.row_into_view(row);
		let x = self.viewport.position.0;
		self.set_viewport_position((x, y));
	}

	fn run_native(&mut self, command: NativeCommand) {
		debug!(%command, "native command");
		self.native_log.push(command);
		match command {
			NativeCommand::SwapLineUp => self.swap_lines(native::Swap::Up),
			NativeCommand::SwapLineDown => self.swap_lines(native::Swap::Down),
			NativeCommand::Reindent => self.reindent(),
		}
	}
}
