//! Native line commands of the in-memory host.

use linewise_primitives::{Direction, Range, Rope, RopeSlice, Selection, last_row, line_text, rowcol};
use tracing::debug;

use super::Buffer;
use crate::view::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Swap {
	Up,
	Down,
}

/// Inclusive row span covered by one or more selection regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Block {
	pub first: usize,
	pub last: usize,
}

/// Returns true when a non-empty region ends at column 0 of a later row.
///
/// That row is not part of the region's lines.
fn ends_before_row(text: RopeSlice, range: &Range) -> bool {
	let (first, _) = rowcol(text, range.begin());
	let (last, col) = rowcol(text, range.end());
	!range.is_empty() && col == 0 && last > first
}

/// Groups the selected rows into blocks; touching blocks are merged.
pub(super) fn line_blocks(text: RopeSlice, selection: &Selection) -> Vec<Block> {
	let mut blocks: Vec<Block> = Vec::new();
	for range in selection.iter() {
		let (first, _) = rowcol(text, range.begin());
		let (mut last, _) = rowcol(text, range.end());
		if ends_before_row(text, range) {
			last -= 1;
		}
		match blocks.last_mut() {
			Some(prev) if first <= prev.last + 1 => prev.last = prev.last.max(last),
			_ => blocks.push(Block { first, last }),
		}
	}
	blocks
}

fn map_range(old: RopeSlice, new: RopeSlice, row_map: &[usize], range: &Range) -> Range {
	let map = |pos, exclusive: bool| {
		let (row, col) = rowcol(old, pos);
		if exclusive {
			new.line_to_char((row_map[row - 1] + 1).min(new.len_lines()))
		} else {
			new.line_to_char(row_map[row]) + col
		}
	};
	let begin = map(range.begin(), false);
	let end = map(range.end(), ends_before_row(old, range));
	match range.direction() {
		Direction::Forward => Range::new(begin, end),
		Direction::Backward => Range::new(end, begin),
	}
}

fn leading_whitespace(line: RopeSlice) -> String {
	line.chars().take_while(|c| c.is_whitespace()).collect()
}

fn is_blank(line: RopeSlice) -> bool {
	line.chars().all(char::is_whitespace)
}

impl Buffer {
	/// Moves every selected block past its neighbouring row.
	///
	/// Rows carry their own terminators, except that the text keeps ending the
	/// way it did: whichever row lands last takes no terminator, and the row
	/// that used to be last borrows the one it left behind. A swap that would
	/// put a lone `\r` right before an empty `\n` row is ignored, as the two
	/// would read back as one `\r\n`.
	pub(super) fn swap_lines(&mut self, swap: Swap) {
		let text = self.content.slice(..);
		let rows = last_row(text) + 1;
		let last = rows - 1;
		let blocks = line_blocks(text, &self.selection);

		let at_boundary = match swap {
			Swap::Up => blocks.first().is_some_and(|b| b.first == 0),
			Swap::Down => blocks.last().is_some_and(|b| b.last + 1 >= rows),
		};
		if at_boundary {
			debug!(?swap, "swap at buffer boundary ignored");
			return;
		}

		let mut row_map: Vec<usize> = (0..rows).collect();
		for block in &blocks {
			match swap {
				Swap::Up => {
					for row in block.first..=block.last {
						row_map[row] = row - 1;
					}
					row_map[block.first - 1] = block.last;
				}
				Swap::Down => {
					for row in block.first..=block.last {
						row_map[row] = row + 1;
					}
					row_map[block.last + 1] = block.first;
				}
			}
		}

		let mut order = vec![0; rows];
		for (row, &target) in row_map.iter().enumerate() {
			order[target] = row;
		}
		let terminator = |row: usize| {
			let line = text.line(row);
			line.slice(line_text(text, row).len_chars()..)
		};

		let mut joined = String::with_capacity(text.len_bytes());
		for (target, &source) in order.iter().enumerate() {
			joined.extend(line_text(text, source).chunks());
			if target == last {
				continue;
			}
			let carried = if source == last { order[last] } else { source };
			joined.extend(terminator(carried).chunks());
		}

		let content = Rope::from(joined);
		if content.len_lines() != rows {
			debug!(?swap, "swap would join a lone carriage return to an empty row; ignored");
			return;
		}
		let selection = self
			.selection
			.transform(|r| map_range(text, content.slice(..), &row_map, r));
		self.replace_content(content, selection);
	}

	/// Aligns each selected block with the nearest non-blank row above it.
	///
	/// Indentation beyond the block's first row is kept relative.
	pub(super) fn reindent(&mut self) {
		let blocks = line_blocks(self.text(), &self.selection);
		for block in blocks {
			let text = self.content.slice(..);
			let reference = (0..block.first)
				.rev()
				.map(|row| line_text(text, row))
				.find(|line| !is_blank(*line))
				.map(leading_whitespace)
				.unwrap_or_default();
			let base = leading_whitespace(line_text(text, block.first));

			for row in block.first..=block.last {
				let text = self.content.slice(..);
				let line = line_text(text, row);
				if is_blank(line) {
					continue;
				}
				let current = leading_whitespace(line);
				let indent = format!("{reference}{}", current.strip_prefix(base.as_str()).unwrap_or(""));
				if indent == current {
					continue;
				}
				let start = text.line_to_char(row);
				self.erase(Range::new(start, start + current.chars().count()));
				self.insert(start, &indent);
			}
		}
	}
}
