//! `linewise` binary: runs line move and line swap commands against a file
//! without an editor, or evaluates their keybinding context keys.

mod cli;
mod session;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, FileLocation, PluginArgs, ViewportArgs};
use linewise_editor::{QueryOperator, Viewport};
use linewise_options::Settings;
use linewise_options::parse::{parse_untyped, parse_value};
use linewise_plugins::Plugin;
use session::Session;
use tracing::debug;

fn main() -> Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	match cli.command {
		Command::Run {
			file,
			commands,
			in_place,
			plugin,
			viewport,
		} => run(&file, &commands, in_place, &plugin, viewport),
		Command::Query {
			file,
			key,
			operand,
			operator,
			plugin,
		} => query(&file, &key, operator, &operand, &plugin),
		Command::Settings { plugin } => {
			print!("{}", load_settings(&plugin)?.describe());
			Ok(())
		}
	}
}

fn run(file: &str, commands: &[String], in_place: bool, args: &PluginArgs, viewport: ViewportArgs) -> Result<()> {
	let location = FileLocation::parse(file);
	let text = read(&location.path)?;
	let settings = load_settings(args)?;

	let mut session = Session::new(
		&text,
		location.cursor(),
		Viewport::with_rows(viewport.height.max(1)),
		viewport.top.saturating_sub(1),
		args.plugin,
		settings,
	);
	session.run(commands)?;

	let contents = session.buffer().contents();
	if in_place {
		std::fs::write(&location.path, &contents)
			.with_context(|| format!("failed to write {}", location.path.display()))?;
	} else {
		print!("{contents}");
	}
	eprintln!("{}", session.report());
	Ok(())
}

fn query(file: &str, key: &str, operator: QueryOperator, operand: &str, args: &PluginArgs) -> Result<()> {
	let location = FileLocation::parse(file);
	let text = read(&location.path)?;
	let settings = load_settings(args)?;

	let session = Session::new(&text, location.cursor(), Viewport::default(), 0, args.plugin, settings);
	match session.query(key, operator, &parse_untyped(operand)) {
		Some(answer) => println!("{answer}"),
		None => println!("none"),
	}
	Ok(())
}

fn read(path: &Path) -> Result<String> {
	std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Default settings location: `<config dir>/linewise/<resource>.toml`.
fn default_settings_path(plugin: Plugin) -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("linewise").join(format!("{}.toml", plugin.resource())))
}

fn load_settings(args: &PluginArgs) -> Result<Settings> {
	let plugin = args.plugin;
	let mut settings = match args.settings.clone().or_else(|| default_settings_path(plugin)) {
		Some(path) => {
			debug!(path = %path.display(), "loading settings");
			plugin.load_settings(&path)?
		}
		None => plugin.default_settings(),
	};

	for (key, value) in &args.overrides {
		let value = parse_value(plugin.schema(), key, value).context("invalid --set override")?;
		settings.set(key, value)?;
	}
	Ok(settings)
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
