use std::sync::Arc;

use linewise_editor::{CommandArgs, CommandError, NativeCommand, TextCommand, View, expect_no_args};
use linewise_options::Settings;
use linewise_primitives::last_row;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use super::clearance::{clear_bottom, clear_top, shift_view};
use super::options::{AUTO_REINDENT, MOVE_DOWN_CLEARANCE, MOVE_UP_CLEARANCE, SQUASH_WHITESPACE_ONLY_LINES};
use crate::edges;

/// Commands of the line moves plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum MoveCommand {
	/// Swap up, then keep `move_up_clearance` rows above the selection.
	SmartSwapLineUp,
	/// Swap down, then keep `move_down_clearance` rows below the selection.
	SmartSwapLineDown,
	/// Swap up, adding an empty first row to swap with.
	SwapLineAbove,
	/// Swap down, adding an empty final row to swap with.
	SwapLineBelow,
	/// Undo [`MoveCommand::SwapLineAbove`].
	UnswapLineAbove,
	/// Undo [`MoveCommand::SwapLineBelow`].
	UnswapLineBelow,
	/// Insert a blank line below the selection.
	SeparateTextUp,
	/// Insert a blank line above the selection.
	SeparateTextDown,
	/// Insert blank lines on both sides of the selection.
	RepelText,
	/// Remove blank lines on both sides of the selection.
	AttractText,
}

/// A [`MoveCommand`] bound to the plugin settings.
#[derive(Debug, Clone)]
pub struct LineMove {
	command: MoveCommand,
	settings: Arc<Settings>,
}

impl LineMove {
	/// Binds `command` to `settings`.
	pub fn new(command: MoveCommand, settings: Arc<Settings>) -> Self {
		Self { command, settings }
	}

	fn reindent(&self, view: &mut dyn View) {
		if self.settings.get_typed(AUTO_REINDENT) {
			view.run_native(NativeCommand::Reindent);
		}
	}
}

impl TextCommand for LineMove {
	fn name(&self) -> &'static str {
		self.command.into()
	}

	fn run(&self, view: &mut dyn View, args: &CommandArgs) -> Result<(), CommandError> {
		expect_no_args(self.name(), args)?;
		let up_clearance = self.settings.get_typed(MOVE_UP_CLEARANCE);
		let down_clearance = self.settings.get_typed(MOVE_DOWN_CLEARANCE);

		match self.command {
			MoveCommand::SmartSwapLineUp => {
				view.run_native(NativeCommand::SwapLineUp);
				clear_top(view, up_clearance, false);
				self.reindent(view);
			}
			MoveCommand::SmartSwapLineDown => {
				view.run_native(NativeCommand::SwapLineDown);
				clear_bottom(view, down_clearance);
				self.reindent(view);
			}
			MoveCommand::SwapLineAbove => {
				edges::swap_above(view);
			}
			MoveCommand::SwapLineBelow => {
				edges::swap_below(view);
				clear_bottom(view, down_clearance);
			}
			MoveCommand::UnswapLineAbove => {
				view.run_native(NativeCommand::SwapLineDown);
				edges::close_row_above(view);
			}
			MoveCommand::UnswapLineBelow => {
				view.run_native(NativeCommand::SwapLineUp);
				edges::close_row_below(view);
			}
			MoveCommand::SeparateTextUp => separate_up(view, up_clearance),
			MoveCommand::SeparateTextDown => separate_down(view, down_clearance),
			MoveCommand::RepelText => repel(view),
			MoveCommand::AttractText => attract(view, self.settings.get_typed(SQUASH_WHITESPACE_ONLY_LINES)),
		}
		Ok(())
	}
}

fn separate_up(view: &mut dyn View, clearance: i64) {
	let (row, _) = view.rowcol(view.selection().last().end());
	let pos = edges::next_row_start(view, row);
	edges::insert_keeping_selection(view, pos, "\n");
	clear_top(view, clearance, true);
}

fn separate_down(view: &mut dyn View, clearance: i64) {
	let (row, _) = view.rowcol(view.selection().first().begin());
	let pos = view.text_point(row, 0);
	view.insert(pos, "\n");
	clear_bottom(view, clearance);
}

fn repel(view: &mut dyn View) {
	let (first, _) = view.rowcol(view.selection().first().begin());
	let (last, _) = view.rowcol(view.selection().last().end());

	let below = edges::next_row_start(view, last);
	edges::insert_keeping_selection(view, below, "\n");
	let above = view.text_point(first, 0);
	view.insert(above, "\n");

	shift_view(view, 1);
}

/// Empty lines, and whitespace-only lines when `squash` is set.
fn removable(line: &str, squash: bool) -> bool {
	line.is_empty() || (squash && line.chars().all(char::is_whitespace))
}

fn row_text(view: &dyn View, row: usize) -> String {
	view.substr(view.line(view.text_point(row, 0)))
}

fn attract(view: &mut dyn View, squash: bool) {
	let (first, _) = view.rowcol(view.selection().first().begin());
	let (last, _) = view.rowcol(view.selection().last().end());

	let next = last + 1;
	if next <= last_row(view.text()) && removable(&row_text(view, next), squash) {
		edges::erase_row(view, next);
	}

	if let Some(prev) = first.checked_sub(1)
		&& removable(&row_text(view, prev), squash)
	{
		edges::erase_row(view, prev);
		shift_view(view, -1);
	}
}
