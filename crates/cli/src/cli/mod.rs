//! CLI schema and parsing helpers for the linewise binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use linewise_editor::QueryOperator;
use linewise_plugins::Plugin;


/// `path[:row[:column]]`, as given on the command line.
///
/// Row and column are written 1-indexed and stored 0-indexed. A suffix that
/// is not a positive number stays part of the path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileLocation {
	pub path: PathBuf,
	pub row: usize,
	pub column: usize,
}

impl FileLocation {
	pub fn parse(s: &str) -> Self {
		let mut path = s;
		let mut numbers = Vec::with_capacity(2);
		while numbers.len() < 2
			&& let Some((rest, suffix)) = path.rsplit_once(':')
			&& let Ok(n @ 1..) = suffix.parse::<usize>()
		{
			numbers.push(n - 1);
			path = rest;
		}

		let (row, column) = match numbers[..] {
			[column, row] => (row, column),
			[row] => (row, 0),
			_ => (0, 0),
		};
		Self {
			path: PathBuf::from(path),
			row,
			column,
		}
	}

	/// Cursor position as 0-indexed `(row, column)`.
	pub fn cursor(&self) -> (usize, usize) {
		(self.row, self.column)
	}
}

/// Parses a `KEY=VALUE` setting override.
pub fn parse_override(s: &str) -> Result<(String, String), String> {
	match s.split_once('=') {
		Some((key, value)) if !key.trim().is_empty() => Ok((key.trim().to_string(), value.trim().to_string())),
		_ => Err(format!("expected KEY=VALUE, got '{s}'")),
	}
}

#[derive(Parser, Debug)]
#[command(name = "linewise")]
#[command(about = "Move and swap lines with viewport clearance, headless")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Verbose logging (RUST_LOG takes precedence)
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Plugin selection and settings, shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct PluginArgs {
	/// Plugin providing the commands: moves or swaps
	#[arg(long, short = 'p', default_value = "moves")]
	pub plugin: Plugin,

	/// Settings file (defaults to <config dir>/linewise/<resource>.toml)
	#[arg(long, value_name = "PATH")]
	pub settings: Option<PathBuf>,

	/// Override one setting, e.g. --set move_up_clearance=5
	#[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_override)]
	pub overrides: Vec<(String, String)>,
}

/// Viewport geometry.
#[derive(Args, Debug, Clone, Copy)]
pub struct ViewportArgs {
	/// Visible rows
	#[arg(long, default_value_t = 20)]
	pub height: usize,

	/// First visible line (1-indexed)
	#[arg(long, default_value_t = 1)]
	pub top: usize,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Run commands against a file and print the result
	Run {
		/// File to edit, as path, path:line or path:line:col
		file: String,

		/// Commands to run in order
		#[arg(required = true)]
		commands: Vec<String>,

		/// Write the result back to the file instead of stdout
		#[arg(long, short = 'i')]
		in_place: bool,

		#[command(flatten)]
		plugin: PluginArgs,

		#[command(flatten)]
		viewport: ViewportArgs,
	},
	/// Evaluate a keybinding context key and print true, false or none
	Query {
		/// File to inspect, as path, path:line or path:line:col
		file: String,

		/// Context key, e.g. selection_in_first_line or line_moves.auto_reindent
		key: String,

		/// Right-hand side of the comparison
		operand: String,

		/// Comparison operator
		#[arg(long, short = 'o', default_value = "equal")]
		operator: QueryOperator,

		#[command(flatten)]
		plugin: PluginArgs,
	},
	/// Print the effective settings of a plugin with their descriptions
	Settings {
		#[command(flatten)]
		plugin: PluginArgs,
	},
}
