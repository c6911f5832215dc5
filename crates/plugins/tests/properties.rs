//! Properties that hold for any buffer and viewport.

use linewise_editor::{Buffer, CommandArgs, Registry, View, Viewport};
use linewise_options::Settings;
use linewise_plugins::{Plugin, line_moves, line_swaps};
use proptest::prelude::*;

fn moves(toml: &str) -> Registry {
	Plugin::Moves.registry(Settings::from_toml_str(line_moves::RESOURCE, line_moves::SCHEMA, toml).unwrap())
}

fn swaps(toml: &str) -> Registry {
	Plugin::Swaps.registry(Settings::from_toml_str(line_swaps::RESOURCE, line_swaps::SCHEMA, toml).unwrap())
}

fn run(registry: &Registry, buf: &mut Buffer, command: &str) {
	registry.run_command(buf, command, &CommandArgs::new()).unwrap();
}

/// Text of 1 to 30 rows with mixed `\n`, `\r\n` and `\r` breaks.
fn arb_text() -> impl Strategy<Value = String> {
	let line = || prop_oneof!["[a-z]{1,5}", " {1,3}", Just(String::new())];
	let row = (line(), prop_oneof![4 => Just("\n"), 1 => Just("\r\n"), 1 => Just("\r")]);
	(prop::collection::vec(row, 0..30), line()).prop_map(|(rows, last)| {
		let mut text: String = rows.iter().flat_map(|(line, brk)| [line.as_str(), *brk]).collect();
		text.push_str(&last);
		text
	})
}

fn setup(text: &str, row_seed: usize, top_seed: usize, view_rows: usize) -> (Buffer, usize) {
	let buf = Buffer::new(text);
	let rows = buf.lines().len();
	let row = row_seed % rows;
	let mut buf = buf.with_viewport(Viewport::with_rows(view_rows)).with_cursor(row, 0);
	buf.scroll_to_row(top_seed % rows);
	(buf, row)
}

fn head_row(buf: &Buffer) -> usize {
	buf.rowcol(buf.selection().primary().head).0
}

proptest! {
	/// The row above the selection stays `clearance` rows clear of the top edge.
	#[test]
	fn prop_smart_swap_up_clears_top(
		text in arb_text(),
		row_seed in any::<usize>(),
		top_seed in any::<usize>(),
		clearance in 0usize..4,
	) {
		let registry = moves(&format!("move_up_clearance = {clearance}\nauto_reindent = false\n"));
		let (mut buf, _) = setup(&text, row_seed, top_seed, 10);
		run(&registry, &mut buf, "smart_swap_line_up");

		let row = head_row(&buf);
		prop_assert!(buf.top_row() == 0 || row >= buf.top_row() + clearance);
	}

	/// The selection stays `clearance` rows clear of the bottom edge.
	#[test]
	fn prop_smart_swap_down_clears_bottom(
		text in arb_text(),
		row_seed in any::<usize>(),
		top_seed in any::<usize>(),
		clearance in 0usize..4,
	) {
		let registry = moves(&format!("move_down_clearance = {clearance}\nauto_reindent = false\n"));
		let (mut buf, _) = setup(&text, row_seed, top_seed, 10);
		run(&registry, &mut buf, "smart_swap_line_down");

		let row = head_row(&buf);
		prop_assert!(buf.top_row() + 10 >= row + 1 + clearance);
	}

	/// Row-based clearance never scrolls a visible selection out of view.
	#[test]
	fn prop_line_swaps_keep_selection_visible(
		text in arb_text(),
		row_seed in any::<usize>(),
		offset in 0usize..10,
		up in any::<bool>(),
	) {
		let registry = swaps("");
		let (mut buf, row) = setup(&text, row_seed, 0, 10);
		buf.scroll_to_row(row.saturating_sub(offset));
		run(&registry, &mut buf, if up { "smart_swap_line_up" } else { "smart_swap_line_down" });

		let row = head_row(&buf);
		prop_assert!(row >= buf.top_row() && row < buf.top_row() + 10);
	}

	/// A smart swap that moved the selection is undone by the opposite one.
	#[test]
	fn prop_smart_swaps_round_trip(text in arb_text(), row_seed in any::<usize>()) {
		let registry = moves("auto_reindent = false\n");
		let (mut buf, row) = setup(&text, row_seed, 0, 10);

		run(&registry, &mut buf, "smart_swap_line_up");
		if head_row(&buf) != row {
			run(&registry, &mut buf, "smart_swap_line_down");
		}
		prop_assert_eq!(buf.contents(), text);
		prop_assert_eq!(head_row(&buf), row);
	}

	/// Boundary swaps undo cleanly while the inserted row is still empty.
	#[test]
	fn prop_boundary_swaps_round_trip(text in arb_text(), col in 0usize..6, above in any::<bool>()) {
		let registry = swaps("");
		let buf = Buffer::new(&text);
		let (swap, unswap, row) = if above {
			("swap_line_above", "unswap_line_above", 0)
		} else {
			("swap_line_below", "unswap_line_below", buf.lines().len() - 1)
		};
		let mut buf = buf.with_cursor(row, col);
		let head = buf.selection().primary().head;

		// a declined swap closes its row again
		run(&registry, &mut buf, swap);
		if buf.contents() != text {
			run(&registry, &mut buf, unswap);
		}
		prop_assert_eq!(buf.contents(), text);
		prop_assert_eq!(buf.selection().primary().head, head);
	}

	/// Attracting text only ever removes blank rows.
	#[test]
	fn prop_attract_keeps_every_character(
		text in arb_text(),
		row_seed in any::<usize>(),
		squash in any::<bool>(),
	) {
		let registry = moves(&format!("squash_whitespace_only_lines = {squash}\n"));
		let (mut buf, _) = setup(&text, row_seed, 0, 10);
		let before: String = text.chars().filter(|c| !c.is_whitespace()).collect();

		run(&registry, &mut buf, "attract_text");
		let after: String = buf.contents().chars().filter(|c| !c.is_whitespace()).collect();
		prop_assert_eq!(after, before);
		if !squash {
			let spaces = |s: &str| s.chars().filter(|c| *c == ' ').count();
			prop_assert_eq!(spaces(&buf.contents()), spaces(&text));
		}
	}
}
