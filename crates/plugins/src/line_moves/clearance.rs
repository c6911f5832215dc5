//! Pixel-based viewport clearance.
//!
//! Positions are measured from the top of the viewport in layout units and
//! every correction scrolls by whole rows.

use linewise_editor::{Dip, View};
use tracing::debug;

/// Scrolls the viewport by `lines` rows; negative values scroll up.
pub fn shift_view(view: &mut dyn View, lines: i64) {
	if lines == 0 {
		return;
	}
	let (x, y) = view.viewport_position();
	let dy = view.line_height() * lines as Dip;
	debug!(lines, "shifting viewport");
	view.set_viewport_position((x, y + dy));
}

/// Keeps the top of the selection at least `clearance` rows below the viewport top.
///
/// With `inverse`, a selection more than one row clear of the margin also pulls
/// the viewport down a row, so text separated upward visibly moves up.
pub fn clear_top(view: &mut dyn View, clearance: i64, inverse: bool) {
	let line_height = view.line_height();
	let pos = view.text_to_layout(view.selection().first().begin()).1 - view.viewport_position().1;
	let min = line_height * clearance as Dip;

	if inverse && pos - line_height > min {
		shift_view(view, 1);
	}
	if pos < min {
		shift_view(view, -rows_to_cover(min - pos, line_height));
	}
}

/// Keeps the bottom of the selection at least `clearance` rows above the viewport bottom.
pub fn clear_bottom(view: &mut dyn View, clearance: i64) {
	let line_height = view.line_height();
	let pos = view.text_to_layout(view.selection().last().end()).1 - view.viewport_position().1 + line_height;
	let max = view.viewport_extent().1 - line_height * clearance as Dip;

	if pos > max {
		shift_view(view, rows_to_cover(pos - max, line_height));
	}
}

/// Smallest number of rows spanning `distance`.
fn rows_to_cover(distance: Dip, line_height: Dip) -> i64 {
	if line_height <= 0.0 {
		return 0;
	}
	(distance / line_height).ceil() as i64
}
