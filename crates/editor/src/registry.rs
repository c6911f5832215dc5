//! Command and listener registry: the host's dispatcher.

use rustc_hash::FxHashMap;
use strum::IntoEnumIterator;
use tracing::{debug, trace, trace_span};

use crate::command::{CommandArgs, CommandError, CommandInvocation, TextCommand};
use crate::context::{ContextQuery, EventListener};
use crate::view::{NativeCommand, View};

/// Registered commands and listeners.
#[derive(Default)]
pub struct Registry {
	commands: FxHashMap<&'static str, Box<dyn TextCommand>>,
	listeners: Vec<Box<dyn EventListener>>,
}

impl Registry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a command under its name, replacing any previous one.
	pub fn register_command(&mut self, command: Box<dyn TextCommand>) {
		let name = command.name();
		if self.commands.insert(name, command).is_some() {
			debug!(name, "command replaced");
		}
	}

	/// Registers a listener; listeners are consulted in registration order.
	pub fn register_listener(&mut self, listener: Box<dyn EventListener>) {
		self.listeners.push(listener);
	}

	/// Looks up a registered command.
	pub fn find_command(&self, name: &str) -> Option<&dyn TextCommand> {
		self.commands.get(name).map(Box::as_ref)
	}

	/// Names of registered commands, sorted.
	pub fn command_names(&self) -> Vec<&'static str> {
		let mut names: Vec<_> = self.commands.keys().copied().collect();
		names.sort_unstable();
		names
	}

	/// Runs a top-level command.
	///
	/// Listeners may redirect the invocation first. Registered commands take
	/// precedence over native ones. Commands called from inside a command go
	/// through [`View::run_native`] and are not redirected.
	pub fn run_command(&self, view: &mut dyn View, name: &str, args: &CommandArgs) -> Result<(), CommandError> {
		let invocation = self
			.listeners
			.iter()
			.find_map(|listener| listener.on_text_command(&*view, name, args))
			.inspect(|redirect| debug!(from = name, to = %redirect.name, "command redirected"))
			.unwrap_or_else(|| CommandInvocation::new(name, args.clone()));

		let span = trace_span!("command", name = %invocation.name);
		let _guard = span.enter();

		if let Some(command) = self.find_command(&invocation.name) {
			command.run(view, &invocation.args)?;
			trace!("command completed");
			return Ok(());
		}

		match invocation.name.parse::<NativeCommand>() {
			Ok(native) => {
				view.run_native(native);
				Ok(())
			}
			Err(_) => Err(CommandError::UnknownCommand {
				suggestion: self.suggest(&invocation.name),
				name: invocation.name,
			}),
		}
	}

	/// Evaluates a keybinding-context query; `None` when no listener handles the key.
	pub fn query_context(&self, view: &dyn View, query: &ContextQuery<'_>) -> Option<bool> {
		let answer = self
			.listeners
			.iter()
			.find_map(|listener| listener.on_query_context(view, query));
		trace!(key = query.key, operator = %query.operator, ?answer, "context query");
		answer
	}

	fn suggest(&self, name: &str) -> Option<String> {
		self.commands
			.keys()
			.copied()
			.chain(NativeCommand::iter().map(<&'static str>::from))
			.min_by_key(|candidate| strsim::levenshtein(name, candidate))
			.filter(|candidate| strsim::levenshtein(name, candidate) <= 3)
			.map(str::to_string)
	}
}

#[cfg(test)]
mod tests {
	use linewise_options::OptionValue;

	use super::*;
	use crate::buffer::Buffer;
	use crate::command::expect_no_args;
	use crate::context::QueryOperator;

	struct Touch;

	impl TextCommand for Touch {
		fn name(&self) -> &'static str {
			"touch"
		}

		fn run(&self, view: &mut dyn View, args: &CommandArgs) -> Result<(), CommandError> {
			expect_no_args(self.name(), args)?;
			view.insert(0, "*");
			Ok(())
		}
	}

	struct RedirectSwapUp;

	impl EventListener for RedirectSwapUp {
		fn on_text_command(&self, _view: &dyn View, name: &str, _args: &CommandArgs) -> Option<CommandInvocation> {
			(name == "swap_line_up").then(|| CommandInvocation::new("touch", CommandArgs::new()))
		}
	}

	struct Answers(Option<bool>);

	impl EventListener for Answers {
		fn on_query_context(&self, _view: &dyn View, _query: &ContextQuery<'_>) -> Option<bool> {
			self.0
		}
	}

	fn registry() -> Registry {
		let mut registry = Registry::new();
		registry.register_command(Box::new(Touch));
		registry
	}

	#[test]
	fn runs_registered_command() {
		let mut buf = Buffer::new("abc");
		registry().run_command(&mut buf, "touch", &CommandArgs::new()).unwrap();
		assert_eq!(buf.contents(), "*abc");
	}

	#[test]
	fn falls_back_to_native_commands() {
		let mut buf = Buffer::new("a\nb").with_cursor(1, 0);
		registry().run_command(&mut buf, "swap_line_up", &CommandArgs::new()).unwrap();
		assert_eq!(buf.contents(), "b\na");
	}

	#[test]
	fn listener_redirects_top_level_command() {
		let mut registry = registry();
		registry.register_listener(Box::new(RedirectSwapUp));

		let mut buf = Buffer::new("a\nb").with_cursor(1, 0);
		registry.run_command(&mut buf, "swap_line_up", &CommandArgs::new()).unwrap();
		assert_eq!(buf.contents(), "*a\nb");
		assert!(buf.native_log().is_empty());
	}

	#[test]
	fn unknown_command_suggests_close_name() {
		let mut buf = Buffer::new("");
		let err = registry().run_command(&mut buf, "swap_line_upp", &CommandArgs::new()).unwrap_err();
		assert_eq!(
			err,
			CommandError::UnknownCommand {
				name: "swap_line_upp".into(),
				suggestion: Some("swap_line_up".into()),
			}
		);
	}

	#[test]
	fn unexpected_argument_is_rejected() {
		let mut buf = Buffer::new("abc");
		let args = CommandArgs::new().with("count", 2i64);
		let err = registry().run_command(&mut buf, "touch", &args).unwrap_err();
		assert!(matches!(err, CommandError::UnexpectedArgument { .. }));
		assert_eq!(buf.contents(), "abc");
	}

	#[test]
	fn first_answer_wins() {
		let mut registry = Registry::new();
		registry.register_listener(Box::new(Answers(None)));
		registry.register_listener(Box::new(Answers(Some(true))));
		registry.register_listener(Box::new(Answers(Some(false))));

		let buf = Buffer::new("");
		let operand = OptionValue::Bool(true);
		let query = ContextQuery {
			key: "anything",
			operator: QueryOperator::Equal,
			operand: &operand,
			match_all: false,
		};
		assert_eq!(registry.query_context(&buf, &query), Some(true));
	}

	#[test]
	fn unhandled_query_is_not_applicable() {
		let buf = Buffer::new("");
		let operand = OptionValue::Bool(true);
		let query = ContextQuery {
			key: "anything",
			operator: QueryOperator::Equal,
			operand: &operand,
			match_all: false,
		};
		assert_eq!(registry().query_context(&buf, &query), None);
	}
}
