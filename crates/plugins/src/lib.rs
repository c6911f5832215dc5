//! Line move and line swap plugins.
//!
//! Both plugins wrap the host's native `swap_line_up` and `swap_line_down`
//! and then scroll so the moving selection keeps a configurable distance
//! from the viewport edge:
//!
//! * [`line_moves`] measures clearance in layout pixels and adds boundary
//!   swaps, text spacing commands and optional auto-reindent.
//! * [`line_swaps`] measures clearance in rows and scrolls a target row into
//!   view.
//!
//! Each plugin registers its commands and [`listeners`] with a
//! [`Registry`]; settings are loaded once and shared read-only.

mod edges;
pub mod line_moves;
pub mod line_swaps;
pub mod listeners;

use std::path::Path;
use std::sync::Arc;

use linewise_editor::Registry;
use linewise_options::{OptionDef, Settings, SettingsError};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The plugins shipped by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Plugin {
	/// Pixel-based clearance, text spacing and auto-reindent.
	Moves,
	/// Row-based clearance.
	Swaps,
}

impl Plugin {
	/// Name of the settings resource, also the settings file stem.
	pub fn resource(self) -> &'static str {
		match self {
			Plugin::Moves => line_moves::RESOURCE,
			Plugin::Swaps => line_swaps::RESOURCE,
		}
	}

	/// Settings recognized by the plugin.
	pub fn schema(self) -> &'static [&'static OptionDef] {
		match self {
			Plugin::Moves => line_moves::SCHEMA,
			Plugin::Swaps => line_swaps::SCHEMA,
		}
	}

	/// Settings with every declared default.
	pub fn default_settings(self) -> Settings {
		Settings::defaults(self.resource(), self.schema())
	}

	/// Loads settings from `path`, using defaults when the file does not exist.
	pub fn load_settings(self, path: &Path) -> Result<Settings, SettingsError> {
		Settings::load(self.resource(), self.schema(), path)
	}

	/// Registers the plugin's commands and listeners.
	pub fn register(self, registry: &mut Registry, settings: Arc<Settings>) {
		match self {
			Plugin::Moves => line_moves::register(registry, settings),
			Plugin::Swaps => line_swaps::register(registry, settings),
		}
	}

	/// Builds a registry holding only this plugin.
	pub fn registry(self, settings: Settings) -> Registry {
		let mut registry = Registry::new();
		self.register(&mut registry, Arc::new(settings));
		registry
	}
}

#[cfg(test)]
mod tests {
	use strum::IntoEnumIterator;

	use super::*;

	#[test]
	fn plugin_names_parse() {
		assert_eq!("moves".parse::<Plugin>(), Ok(Plugin::Moves));
		assert_eq!("swaps".parse::<Plugin>(), Ok(Plugin::Swaps));
		assert!("line_moves".parse::<Plugin>().is_err());
	}

	#[test]
	fn every_schema_key_has_a_default() {
		for plugin in Plugin::iter() {
			let settings = plugin.default_settings();
			assert_eq!(settings.name(), plugin.resource());
			for def in plugin.schema() {
				assert!(settings.get(def.key).is_some(), "{plugin}: {}", def.key);
			}
		}
	}
}
