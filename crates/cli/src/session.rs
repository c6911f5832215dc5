//! A headless editing session: one buffer driven by one plugin.

use linewise_editor::{Buffer, CommandArgs, CommandError, ContextQuery, QueryOperator, Registry, View, Viewport};
use linewise_options::{OptionValue, Settings};
use linewise_plugins::Plugin;
use tracing::debug;

/// A buffer with a caret, a viewport and the commands of one plugin.
pub struct Session {
	buffer: Buffer,
	registry: Registry,
}

impl Session {
	/// Opens `text` with a caret at `cursor` and the viewport's first row at `top`.
	pub fn new(text: &str, cursor: (usize, usize), viewport: Viewport, top: usize, plugin: Plugin, settings: Settings) -> Self {
		let mut buffer = Buffer::new(text).with_viewport(viewport).with_cursor(cursor.0, cursor.1);
		buffer.scroll_to_row(top);
		debug!(%plugin, rows = buffer.lines().len(), "session opened");
		Self {
			buffer,
			registry: plugin.registry(settings),
		}
	}

	/// Runs each command in order, stopping at the first error.
	pub fn run<S: AsRef<str>>(&mut self, commands: &[S]) -> Result<(), CommandError> {
		for name in commands {
			self.registry
				.run_command(&mut self.buffer, name.as_ref(), &CommandArgs::new())?;
		}
		Ok(())
	}

	/// Evaluates a keybinding context key against the current buffer.
	pub fn query(&self, key: &str, operator: QueryOperator, operand: &OptionValue) -> Option<bool> {
		let query = ContextQuery {
			key,
			operator,
			operand,
			match_all: false,
		};
		self.registry.query_context(&self.buffer, &query)
	}

	/// Returns the buffer.
	pub fn buffer(&self) -> &Buffer {
		&self.buffer
	}

	/// Describes the selection rows and the viewport top, 1-indexed.
	pub fn report(&self) -> String {
		let rows: Vec<String> = self
			.buffer
			.selection()
			.iter()
			.map(|range| {
				let (first, _) = self.buffer.rowcol(range.begin());
				let (last, _) = self.buffer.rowcol(range.end());
				if first == last {
					format!("{}", first + 1)
				} else {
					format!("{}-{}", first + 1, last + 1)
				}
			})
			.collect();
		format!("selection: {}\nviewport top: {}", rows.join(" "), self.buffer.top_row() + 1)
	}
}
