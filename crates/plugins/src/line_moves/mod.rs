//! Line moves: smart swaps with pixel-based clearance, boundary swaps, text
//! spacing commands and optional auto-reindent.
//!
//! Settings live in the `line_moves` resource; keybinding conditions reach
//! them through the `line_moves.` context prefix.

mod clearance;
mod commands;
mod options;


use std::sync::Arc;

pub use clearance::{clear_bottom, clear_top, shift_view};
pub use commands::{LineMove, MoveCommand};
use linewise_editor::Registry;
use linewise_options::Settings;
pub use options::*;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::listeners::{SelectedLinesContext, SettingsContext, SwapOverride, SwapToggle};

/// Settings resource name.
pub const RESOURCE: &str = "line_moves";

/// Prefix of settings keys in keybinding contexts.
///
/// Keymaps using `slm_settings.` keys must be renamed to this prefix.
pub const CONTEXT_PREFIX: &str = "line_moves.";

/// Registers every line moves command and listener.
pub fn register(registry: &mut Registry, settings: Arc<Settings>) {
	for command in MoveCommand::iter() {
		registry.register_command(Box::new(LineMove::new(command, settings.clone())));
	}

	registry.register_listener(Box::new(SelectedLinesContext));
	registry.register_listener(Box::new(SettingsContext::new(CONTEXT_PREFIX, settings.clone())));
	registry.register_listener(Box::new(SwapOverride::new(
		settings,
		SwapToggle {
			key: SMART_SWAP_UP,
			command: MoveCommand::SmartSwapLineUp.into(),
		},
		SwapToggle {
			key: SMART_SWAP_DOWN,
			command: MoveCommand::SmartSwapLineDown.into(),
		},
	)));
	debug!(plugin = RESOURCE, "plugin registered");
}
