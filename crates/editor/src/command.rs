//! Named text commands and their arguments.

use std::collections::BTreeMap;

use linewise_options::OptionValue;

use crate::view::View;

/// Named arguments passed to a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs(BTreeMap<String, OptionValue>);

impl CommandArgs {
	/// Creates an empty argument set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an argument.
	pub fn with(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
		self.0.insert(name.into(), value.into());
		self
	}

	/// Looks up an argument by name.
	pub fn get(&self, name: &str) -> Option<&OptionValue> {
		self.0.get(name)
	}

	/// Returns true when no arguments are present.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates over argument names in order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}
}

/// A command name with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
	/// Command name.
	pub name: String,
	/// Named arguments.
	pub args: CommandArgs,
}

impl CommandInvocation {
	/// Creates an invocation.
	pub fn new(name: impl Into<String>, args: CommandArgs) -> Self {
		Self {
			name: name.into(),
			args,
		}
	}
}

/// Errors returned when dispatching a command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
	/// Neither a registered command nor a native one.
	#[error("unknown command: {name}{}", suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
	UnknownCommand {
		/// Requested name.
		name: String,
		/// Closest known name, if any.
		suggestion: Option<String>,
	},
	/// The command does not take the given argument.
	#[error("command '{command}' does not accept argument '{argument}'")]
	UnexpectedArgument {
		/// Command name.
		command: String,
		/// The rejected argument name.
		argument: String,
	},
}

/// A command that edits a view.
pub trait TextCommand {
	/// Name the command is registered under.
	fn name(&self) -> &'static str;

	/// Runs the command against `view`.
	fn run(&self, view: &mut dyn View, args: &CommandArgs) -> Result<(), CommandError>;
}

/// Rejects any argument for commands that take none.
pub fn expect_no_args(command: &str, args: &CommandArgs) -> Result<(), CommandError> {
	match args.names().next() {
		Some(argument) => Err(CommandError::UnexpectedArgument {
			command: command.to_string(),
			argument: argument.to_string(),
		}),
		None => Ok(()),
	}
}
