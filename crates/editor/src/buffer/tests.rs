use linewise_primitives::{Range, Selection};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn buffer(text: &str) -> Buffer {
	Buffer::new(text)
}

#[test]
fn swap_up_moves_caret_with_line() {
	let mut buf = buffer("a\nb\nc").with_cursor(1, 0);
	buf.run_native(NativeCommand::SwapLineUp);

	assert_eq!(buf.lines(), vec!["b", "a", "c"]);
	assert_eq!(buf.rowcol(buf.selection().first().begin()), (0, 0));
	assert_eq!(buf.native_log(), &[NativeCommand::SwapLineUp]);
}

#[test]
fn swap_down_keeps_column() {
	let mut buf = buffer("one\ntwo\nthree\n").with_cursor(0, 2);
	buf.run_native(NativeCommand::SwapLineDown);

	assert_eq!(buf.contents(), "two\none\nthree\n");
	assert_eq!(buf.rowcol(buf.selection().primary().head), (1, 2));
}

#[test]
fn swap_is_ignored_at_boundaries() {
	let mut buf = buffer("a\nb").with_cursor(0, 0);
	buf.run_native(NativeCommand::SwapLineUp);
	assert_eq!(buf.contents(), "a\nb");

	let mut buf = buffer("a\nb").with_cursor(1, 1);
	buf.run_native(NativeCommand::SwapLineDown);
	assert_eq!(buf.contents(), "a\nb");
}

#[test]
fn swap_preserves_missing_final_newline() {
	let mut buf = buffer("a\nb").with_cursor(1, 0);
	buf.run_native(NativeCommand::SwapLineUp);
	assert_eq!(buf.contents(), "b\na");
}

#[test]
fn swap_carries_line_terminators() {
	let mut buf = buffer("a\r\nb\nc").with_cursor(1, 0);
	buf.run_native(NativeCommand::SwapLineUp);
	assert_eq!(buf.contents(), "b\na\r\nc");

	buf.run_native(NativeCommand::SwapLineDown);
	assert_eq!(buf.contents(), "a\r\nb\nc");
}

#[test]
fn lone_carriage_return_keeps_its_rows() {
	let mut buf = buffer("\raa\na").with_cursor(1, 0);
	buf.run_native(NativeCommand::SwapLineUp);
	assert_eq!(buf.contents(), "aa\n\ra");
	assert_eq!(buf.lines().len(), 3);

	buf.run_native(NativeCommand::SwapLineDown);
	assert_eq!(buf.contents(), "\raa\na");
	assert_eq!(buf.rowcol(buf.selection().primary().head), (1, 0));
}

#[test]
fn swap_that_would_join_breaks_is_ignored() {
	// the empty row moving up would land right after "a\r"
	let mut buf = buffer("a\rb\n\nc").with_cursor(2, 0);
	buf.run_native(NativeCommand::SwapLineUp);
	assert_eq!(buf.contents(), "a\rb\n\nc");
	assert_eq!(buf.rowcol(buf.selection().primary().head), (2, 0));
	assert_eq!(buf.native_log(), &[NativeCommand::SwapLineUp]);
}

#[test]
fn whole_line_selection_excludes_next_row() {
	// "b\n" selected: the region ends at column 0 of row 2
	let mut buf = buffer("a\nb\nc").with_selection(Selection::single(2, 4));
	buf.run_native(NativeCommand::SwapLineDown);

	assert_eq!(buf.contents(), "a\nc\nb");
	assert_eq!(buf.selection().primary(), Range::new(4, 5));

	// The region now ends inside the final row rather than at a row start
	buf.run_native(NativeCommand::SwapLineUp);
	assert_eq!(buf.contents(), "a\nb\nc");
	assert_eq!(buf.selection().primary(), Range::new(2, 3));
}

#[test]
fn multi_line_block_moves_together() {
	let mut buf = buffer("0\n1\n2\n3\n4").with_selection(Selection::single(2, 7));
	buf.run_native(NativeCommand::SwapLineUp);

	assert_eq!(buf.lines(), vec!["1", "2", "3", "0", "4"]);
	assert_eq!(buf.selection().primary(), Range::new(0, 5));
}

#[test]
fn separate_blocks_move_independently() {
	let selection = Selection::new(Range::point(2), [Range::point(6)]);
	let mut buf = buffer("0\n1\n2\n3\n4").with_selection(selection);
	buf.run_native(NativeCommand::SwapLineDown);

	assert_eq!(buf.lines(), vec!["0", "2", "1", "4", "3"]);
	let rows: Vec<usize> = buf.selection().iter().map(|r| buf.rowcol(r.head).0).collect();
	assert_eq!(rows, vec![2, 4]);
}

#[test]
fn substr_reads_clamped_regions() {
	let buf = buffer("one\r\ntwo");
	assert_eq!(buf.substr(buf.line(1)), "one");
	assert_eq!(buf.substr(buf.line(7)), "two");
	assert_eq!(buf.substr(Range::new(9, 3)), "\r\ntwo");
	assert_eq!(buf.substr(Range::new(20, 30)), "");
}

#[test]
fn insert_pushes_points_at_or_after() {
	let selection = Selection::new(Range::point(0), [Range::new(2, 4)]);
	let mut buf = buffer("ab\ncd").with_selection(selection);
	assert_eq!(buf.insert(2, "XY"), 2);

	assert_eq!(buf.contents(), "abXY\ncd");
	assert_eq!(buf.selection().ranges(), &[Range::point(0), Range::new(4, 6)]);
}

#[test]
fn erase_collapses_points_inside() {
	let selection = Selection::new(Range::point(1), [Range::point(3), Range::point(6)]);
	let mut buf = buffer("abcdefg").with_selection(selection);
	buf.erase(Range::new(2, 5));

	assert_eq!(buf.contents(), "abfg");
	assert_eq!(buf.selection().ranges(), &[Range::point(1), Range::point(2), Range::point(3)]);
}

#[test]
fn erase_clamps_past_end() {
	let mut buf = buffer("abc");
	buf.erase(Range::new(2, 10));
	assert_eq!(buf.contents(), "ab");
}

#[test]
fn reindent_follows_row_above() {
	let mut buf = buffer("fn main() {\n    let a = 1;\nlet b = 2;\n}").with_cursor(2, 0);
	buf.run_native(NativeCommand::Reindent);

	assert_eq!(buf.contents(), "fn main() {\n    let a = 1;\n    let b = 2;\n}");
	assert_eq!(buf.native_log(), &[NativeCommand::Reindent]);
}

#[test]
fn reindent_keeps_relative_indentation() {
	let mut buf = buffer("  top\n        a\n            b").with_selection(Selection::single(6, 26));
	buf.run_native(NativeCommand::Reindent);

	assert_eq!(buf.contents(), "  top\n  a\n      b");
}

#[test]
fn viewport_position_is_clamped() {
	let mut buf = buffer("a\nb\nc\nd");
	buf.set_viewport_position((-5.0, 1000.0));
	assert_eq!(buf.viewport_position(), (0.0, 48.0));

	buf.set_viewport_position((0.0, -16.0));
	assert_eq!(buf.viewport_position(), (0.0, 0.0));
}

#[test]
fn layout_and_visible_region() {
	let text: String = (0..40).map(|i| format!("line {i}\n")).collect();
	let mut buf = buffer(&text).with_viewport(Viewport::with_rows(10));
	buf.scroll_to_row(5);

	assert_eq!(buf.top_row(), 5);
	assert_eq!(buf.text_to_layout(buf.text_point(7, 3)), (24.0, 112.0));

	let visible = buf.visible_region();
	assert_eq!(buf.rowcol(visible.begin()), (5, 0));
	assert_eq!(buf.rowcol(visible.end()).0, 14);
}

#[test]
fn show_scrolls_row_into_view() {
	let text: String = (0..40).map(|i| format!("{i}\n")).collect();
	let mut buf = buffer(&text).with_viewport(Viewport::with_rows(10));

	let pos = buf.text_point(25, 0);
	buf.show(pos);
	assert_eq!(buf.top_row(), 16);

	let pos = buf.text_point(3, 0);
	buf.show(pos);
	assert_eq!(buf.top_row(), 3);
}

fn arb_text() -> impl Strategy<Value = (String, usize)> {
	let row = ("[a-z ]{0,6}", prop_oneof![Just("\n"), Just("\r\n"), Just("\r")]);
	(prop::collection::vec(row, 0..11), "[a-z ]{0,6}").prop_map(|(rows, last)| {
		let count = rows.len() + 1;
		let mut text: String = rows.iter().flat_map(|(line, brk)| [line.as_str(), *brk]).collect();
		text.push_str(&last);
		(text, count)
	})
}

fn head_row(buf: &Buffer) -> usize {
	buf.rowcol(buf.selection().primary().head).0
}

proptest! {
	/// Swaps never change the row count, and a swap that moved the caret is
	/// undone by the opposite swap.
	#[test]
	fn prop_swap_up_down_roundtrip((text, rows) in arb_text(), row_seed in any::<usize>(), col in 0usize..8) {
		let mut buf = Buffer::new(&text);
		prop_assume!(buf.lines().len() == rows);
		let row = row_seed % rows;
		buf = buf.with_cursor(row, col);
		let head = buf.selection().primary().head;

		buf.run_native(NativeCommand::SwapLineUp);
		prop_assert_eq!(buf.lines().len(), rows);
		if head_row(&buf) != row {
			prop_assert_eq!(head_row(&buf), row - 1);
			buf.run_native(NativeCommand::SwapLineDown);
		}

		prop_assert_eq!(buf.contents(), text);
		prop_assert_eq!(buf.selection().primary().head, head);
	}

	#[test]
	fn prop_swap_down_up_roundtrip((text, rows) in arb_text(), row_seed in any::<usize>()) {
		let mut buf = Buffer::new(&text);
		prop_assume!(buf.lines().len() == rows);
		let row = row_seed % rows;
		buf = buf.with_cursor(row, 0);

		buf.run_native(NativeCommand::SwapLineDown);
		prop_assert_eq!(buf.lines().len(), rows);
		if head_row(&buf) != row {
			prop_assert_eq!(head_row(&buf), row + 1);
			buf.run_native(NativeCommand::SwapLineUp);
		}

		prop_assert_eq!(buf.contents(), text);
		prop_assert_eq!(head_row(&buf), row);
	}
}
