//! Event listeners shared by both plugins.

use std::sync::Arc;

use linewise_editor::{CommandArgs, CommandInvocation, ContextQuery, EventListener, NativeCommand, View};
use linewise_options::{OptionValue, Settings, TypedOptionKey};
use tracing::debug;

/// Answers `selection_in_first_line` and `selection_in_last_line`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectedLinesContext;

impl SelectedLinesContext {
	fn condition(view: &dyn View, key: &str) -> Option<bool> {
		let selection = view.selection();
		match key {
			"selection_in_first_line" => Some(view.line(selection.first().begin()) == view.line(0)),
			"selection_in_last_line" => Some(view.line(selection.last().end()) == view.line(view.size())),
			_ => None,
		}
	}
}

impl EventListener for SelectedLinesContext {
	fn on_query_context(&self, view: &dyn View, query: &ContextQuery<'_>) -> Option<bool> {
		let condition = OptionValue::Bool(Self::condition(view, query.key)?);
		Some(query.operator.compare(Some(&condition), query.operand))
	}
}

/// Answers `<prefix><setting>` queries from the plugin settings.
#[derive(Debug, Clone)]
pub struct SettingsContext {
	prefix: &'static str,
	settings: Arc<Settings>,
}

impl SettingsContext {
	/// Creates a listener for keys starting with `prefix`.
	pub fn new(prefix: &'static str, settings: Arc<Settings>) -> Self {
		Self { prefix, settings }
	}
}

impl EventListener for SettingsContext {
	fn on_query_context(&self, _view: &dyn View, query: &ContextQuery<'_>) -> Option<bool> {
		let setting = query.key.strip_prefix(self.prefix)?;
		Some(query.operator.compare(self.settings.get(setting), query.operand))
	}
}

/// A boolean setting that redirects a native swap to a plugin command.
#[derive(Debug, Clone, Copy)]
pub struct SwapToggle {
	/// The enabling setting.
	pub key: TypedOptionKey<bool>,
	/// Command run instead of the native swap.
	pub command: &'static str,
}

/// Replaces the native line swaps with the plugin's smart swaps when enabled.
#[derive(Debug, Clone)]
pub struct SwapOverride {
	settings: Arc<Settings>,
	up: SwapToggle,
	down: SwapToggle,
}

impl SwapOverride {
	/// Creates the listener.
	pub fn new(settings: Arc<Settings>, up: SwapToggle, down: SwapToggle) -> Self {
		Self { settings, up, down }
	}
}

impl EventListener for SwapOverride {
	fn on_text_command(&self, _view: &dyn View, name: &str, _args: &CommandArgs) -> Option<CommandInvocation> {
		let toggle = match name.parse::<NativeCommand>().ok()? {
			NativeCommand::SwapLineUp => self.up,
			NativeCommand::SwapLineDown => self.down,
			NativeCommand::Reindent => return None,
		};
		if !self.settings.get_typed(toggle.key) {
			return None;
		}
		debug!(settings = %self.settings.name(), setting = toggle.key.key(), to = toggle.command, "overriding native swap");
		Some(CommandInvocation::new(toggle.command, CommandArgs::new()))
	}
}
