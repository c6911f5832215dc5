//! Row and line-region queries over a rope.
//!
//! Out-of-range rows and positions clamp to the text.

use ropey::RopeSlice;

use crate::range::{CharIdx, CharLen, Range};

/// Index of the final row; a trailing newline starts an empty final row.
#[inline]
pub fn last_row(text: RopeSlice) -> usize {
	text.len_lines().saturating_sub(1)
}

fn is_line_break(c: char) -> bool {
	matches!(
		c,
		'\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
	)
}

/// Length of a line's terminator (0 for the final line).
fn line_break_len(line: RopeSlice) -> CharLen {
	let len = line.len_chars();
	if len == 0 {
		return 0;
	}
	match line.char(len - 1) {
		'\n' if len >= 2 && line.char(len - 2) == '\r' => 2,
		c if is_line_break(c) => 1,
		_ => 0,
	}
}

/// Returns the row's content without its line terminator.
pub fn line_text(text: RopeSlice, row: usize) -> RopeSlice {
	let row = row.min(last_row(text));
	let line = text.line(row);
	line.slice(..line.len_chars() - line_break_len(line))
}

/// Returns the region of the row containing `pos`, excluding its terminator.
pub fn line_region(text: RopeSlice, pos: CharIdx) -> Range {
	let pos = pos.min(text.len_chars());
	row_region(text, text.char_to_line(pos))
}

/// Returns the region of `row`, excluding its terminator.
pub fn row_region(text: RopeSlice, row: usize) -> Range {
	let row = row.min(last_row(text));
	let start = text.line_to_char(row);
	Range::new(start, start + line_text(text, row).len_chars())
}

/// Converts a character offset into a `(row, column)` pair.
pub fn rowcol(text: RopeSlice, pos: CharIdx) -> (usize, usize) {
	let pos = pos.min(text.len_chars());
	let row = text.char_to_line(pos);
	(row, pos - text.line_to_char(row))
}

/// Converts a `(row, column)` pair into a character offset.
///
/// Rows past the end clamp to the final row; columns clamp to the row's
/// content so the result never lands inside a line terminator.
pub fn text_point(text: RopeSlice, row: usize, col: usize) -> CharIdx {
	let region = row_region(text, row);
	region.begin() + col.min(region.len())
}
