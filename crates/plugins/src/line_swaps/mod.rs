//! Line swaps: smart swaps that scroll a row `clearance` rows past the
//! selection into view, plus boundary swaps and their undo commands.

mod options;


use std::sync::Arc;

use linewise_editor::{CommandArgs, CommandError, NativeCommand, Registry, TextCommand, View, expect_no_args};
use linewise_options::Settings;
use linewise_primitives::last_row;
pub use options::*;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use tracing::debug;

use crate::edges;
use crate::listeners::{SelectedLinesContext, SettingsContext, SwapOverride, SwapToggle};

/// Settings resource name.
pub const RESOURCE: &str = "line_swaps";

/// Prefix of settings keys in keybinding contexts.
///
/// Keymaps using `sls_settings.` keys must be renamed to this prefix.
pub const CONTEXT_PREFIX: &str = "line_swaps.";

/// Commands of the line swaps plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum SwapCommand {
	/// Swap up, then show the row `swap_up_clearance` rows above the selection.
	SmartSwapLineUp,
	/// Swap down, then show the row `swap_down_clearance` rows below the selection.
	SmartSwapLineDown,
	/// Swap up, adding an empty first row to swap with.
	SwapLineAbove,
	/// Swap down, adding an empty final row to swap with.
	SwapLineBelow,
	/// Undo [`SwapCommand::SwapLineAbove`].
	UnswapLineAbove,
	/// Undo [`SwapCommand::SwapLineBelow`].
	UnswapLineBelow,
}

/// A [`SwapCommand`] bound to the plugin settings.
#[derive(Debug, Clone)]
pub struct LineSwap {
	command: SwapCommand,
	settings: Arc<Settings>,
}

impl LineSwap {
	/// Binds `command` to `settings`.
	pub fn new(command: SwapCommand, settings: Arc<Settings>) -> Self {
		Self { command, settings }
	}
}

impl TextCommand for LineSwap {
	fn name(&self) -> &'static str {
		self.command.into()
	}

	fn run(&self, view: &mut dyn View, args: &CommandArgs) -> Result<(), CommandError> {
		expect_no_args(self.name(), args)?;
		match self.command {
			SwapCommand::SmartSwapLineUp => {
				view.run_native(NativeCommand::SwapLineUp);
				show_above(view, self.settings.get_typed(SWAP_UP_CLEARANCE));
			}
			SwapCommand::SmartSwapLineDown => {
				view.run_native(NativeCommand::SwapLineDown);
				show_below(view, self.settings.get_typed(SWAP_DOWN_CLEARANCE));
			}
			SwapCommand::SwapLineAbove => {
				edges::swap_above(view);
			}
			SwapCommand::SwapLineBelow => {
				edges::swap_below(view);
			}
			SwapCommand::UnswapLineAbove => {
				view.run_native(NativeCommand::SwapLineDown);
				edges::close_row_above(view);
			}
			SwapCommand::UnswapLineBelow => {
				view.run_native(NativeCommand::SwapLineUp);
				edges::close_row_below(view);
			}
		}
		Ok(())
	}
}

fn rows(clearance: i64) -> usize {
	usize::try_from(clearance).unwrap_or(0)
}

/// Shows the row `clearance` rows above the selection, or the first row.
pub fn show_above(view: &mut dyn View, clearance: i64) {
	let (row, _) = view.rowcol(view.selection().first().begin());
	let target = row.saturating_sub(rows(clearance));
	let pos = view.text_point(target, 0);
	view.show(pos);
}

/// Shows the row `clearance` rows below the selection, or the final row.
pub fn show_below(view: &mut dyn View, clearance: i64) {
	let (row, _) = view.rowcol(view.selection().last().end());
	let target = row.saturating_add(rows(clearance)).min(last_row(view.text()));
	let pos = view.text_point(target, 0);
	view.show(pos);
}

/// Registers every line swaps command and listener.
pub fn register(registry: &mut Registry, settings: Arc<Settings>) {
	for command in SwapCommand::iter() {
		registry.register_command(Box::new(LineSwap::new(command, settings.clone())));
	}

	registry.register_listener(Box::new(SelectedLinesContext));
	registry.register_listener(Box::new(SettingsContext::new(CONTEXT_PREFIX, settings.clone())));
	registry.register_listener(Box::new(SwapOverride::new(
		settings,
		SwapToggle {
			key: ALLOW_SMART_SWAP_UP,
			command: SwapCommand::SmartSwapLineUp.into(),
		},
		SwapToggle {
			key: ALLOW_SMART_SWAP_DOWN,
			command: SwapCommand::SmartSwapLineDown.into(),
		},
	)));
	debug!(plugin = RESOURCE, "plugin registered");
}
