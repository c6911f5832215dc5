//! Keybinding-context queries and event listeners.

use linewise_options::OptionValue;
use strum::{Display, EnumString};

use crate::command::{CommandArgs, CommandInvocation};
use crate::view::View;

/// Comparison requested by a keybinding condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum QueryOperator {
	/// `value == operand`.
	Equal,
	/// `value != operand`.
	NotEqual,
	/// The value matches the operand pattern.
	RegexMatch,
	/// The value does not match the operand pattern.
	NotRegexMatch,
	/// The value contains a match of the operand pattern.
	RegexContains,
	/// The value contains no match of the operand pattern.
	NotRegexContains,
}

impl QueryOperator {
	/// Applies an equality operator; any other operator yields `false`.
	pub fn compare(self, lhs: Option<&OptionValue>, operand: &OptionValue) -> bool {
		match self {
			QueryOperator::Equal => lhs == Some(operand),
			QueryOperator::NotEqual => lhs != Some(operand),
			_ => false,
		}
	}
}

/// A keybinding-context query.
#[derive(Debug, Clone, Copy)]
pub struct ContextQuery<'a> {
	/// Context key, such as `selection_in_first_line`.
	pub key: &'a str,
	/// Requested comparison.
	pub operator: QueryOperator,
	/// Right-hand side of the comparison.
	pub operand: &'a OptionValue,
	/// Whether every selection region must satisfy the condition.
	pub match_all: bool,
}

/// Hooks the host calls around commands and keybinding evaluation.
pub trait EventListener {
	/// Answers a context query; `None` means the key is not handled here.
	fn on_query_context(&self, _view: &dyn View, _query: &ContextQuery<'_>) -> Option<bool> {
		None
	}

	/// Called before a top-level command runs; `Some` replaces the command.
	fn on_text_command(
		&self,
		_view: &dyn View,
		_name: &str,
		_args: &CommandArgs,
	) -> Option<CommandInvocation> {
		None
	}
}
