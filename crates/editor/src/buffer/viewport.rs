use crate::view::Dip;

/// Viewport geometry of a [`Buffer`](super::Buffer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
	/// Top-left corner in layout coordinates.
	pub position: (Dip, Dip),
	/// Width and height.
	pub extent: (Dip, Dip),
	/// Height of one row.
	pub line_height: Dip,
	/// Advance of one character.
	pub char_width: Dip,
}

impl Default for Viewport {
	fn default() -> Self {
		Self::with_rows(20)
	}
}

impl Viewport {
	/// A viewport at the top of the document showing `rows` full rows.
	pub fn with_rows(rows: usize) -> Self {
		let line_height = 16.0;
		Self {
			position: (0.0, 0.0),
			extent: (640.0, rows as Dip * line_height),
			line_height,
			char_width: 8.0,
		}
	}

	/// Number of rows that fit entirely in the viewport.
	pub fn rows(&self) -> usize {
		(self.extent.1 / self.line_height).floor() as usize
	}

	/// Vertical position that brings `row` fully into view with minimal scrolling.
	pub(super) fn row_into_view(&self, row: usize) -> Dip {
		let top = row as Dip * self.line_height;
		let bottom = top + self.line_height;
		let y = self.position.1;
		if top < y {
			top
		} else if bottom > y + self.extent.1 {
			bottom - self.extent.1
		} else {
			y
		}
	}
}
