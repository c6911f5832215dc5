//! Row insertion and removal at the edges of a selection or buffer.

use linewise_editor::{NativeCommand, View};
use linewise_primitives::{CharIdx, Range, last_row, row_region};

/// Start of the row after `row`, or the end of the text when `row` is the final row.
pub(crate) fn next_row_start(view: &dyn View, row: usize) -> CharIdx {
	let text = view.text();
	if row >= last_row(text) {
		text.len_chars()
	} else {
		text.line_to_char(row + 1)
	}
}

/// Inserts `text` at `pos` without moving any selection point.
///
/// Callers only insert at or after the end of every selection region.
pub(crate) fn insert_keeping_selection(view: &mut dyn View, pos: CharIdx, text: &str) {
	let selection = view.selection().clone();
	view.insert(pos, text);
	view.set_selection(selection);
}

/// Removes `row` together with one line terminator.
///
/// The final row has no terminator of its own, so the one before it goes.
pub(crate) fn erase_row(view: &mut dyn View, row: usize) {
	let text = view.text();
	let last = last_row(text);
	let region = if row < last {
		Range::new(text.line_to_char(row), text.line_to_char(row + 1))
	} else if row > 0 {
		Range::new(row_region(text, row - 1).end(), text.len_chars())
	} else {
		row_region(text, row)
	};
	view.erase(region);
}

/// Adds an empty first row so the selection can swap past the top.
fn open_row_above(view: &mut dyn View) {
	view.insert(0, "\n");
}

/// Adds an empty final row so the selection can swap past the bottom.
fn open_row_below(view: &mut dyn View) {
	let end = view.size();
	insert_keeping_selection(view, end, "\n");
}

/// Runs a native swap; returns whether the host moved the selection.
fn swap_moved(view: &mut dyn View, command: NativeCommand) -> bool {
	let before = view.selection().clone();
	view.run_native(command);
	*view.selection() != before
}

/// Swaps the selection into a new empty first row.
///
/// The row is closed again when the host declines the swap.
pub(crate) fn swap_above(view: &mut dyn View) {
	open_row_above(view);
	if !swap_moved(view, NativeCommand::SwapLineUp) {
		close_row_above(view);
	}
}

/// Swaps the selection into a new empty final row.
///
/// The row is closed again when the host declines the swap.
pub(crate) fn swap_below(view: &mut dyn View) {
	open_row_below(view);
	if !swap_moved(view, NativeCommand::SwapLineDown) {
		close_row_below(view);
	}
}

/// Removes the first row if it is empty. Returns whether a row was removed.
pub(crate) fn close_row_above(view: &mut dyn View) -> bool {
	let text = view.text();
	if last_row(text) == 0 || !row_region(text, 0).is_empty() {
		return false;
	}
	erase_row(view, 0);
	true
}

/// Removes the final row if it is empty. Returns whether a row was removed.
pub(crate) fn close_row_below(view: &mut dyn View) -> bool {
	let text = view.text();
	let last = last_row(text);
	if last == 0 || !row_region(text, last).is_empty() {
		return false;
	}
	erase_row(view, last);
	true
}
