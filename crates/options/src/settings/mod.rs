//! Settings store loaded from a TOML resource.

use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::OptionError;
use crate::def::OptionDef;
use crate::parse::suggest_option;
use crate::typed_keys::TypedOptionKey;
use crate::value::{FromOptionValue, OptionValue};


/// Errors raised while loading a settings resource.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	/// The file exists but could not be read.
	#[error("failed to read settings '{path}': {source}")]
	Io {
		/// Path of the settings file.
		path: String,
		/// Underlying I/O error.
		#[source]
		source: std::io::Error,
	},
	/// The file is not valid TOML.
	#[error("failed to parse settings '{name}': {source}")]
	Parse {
		/// Resource name.
		name: String,
		/// Underlying TOML error.
		#[source]
		source: toml::de::Error,
	},
	/// A recognized key holds an invalid value.
	#[error("settings '{name}': {source}")]
	Option {
		/// Resource name.
		name: String,
		/// The rejected option.
		#[source]
		source: OptionError,
	},
}

/// Key/value settings of one plugin.
///
/// Every schema key always has a value: the file's, or the declared default.
/// Keys outside the schema are kept when they hold a representable value so
/// keybinding conditions can test them.
#[derive(Debug, Clone)]
pub struct Settings {
	name: String,
	schema: &'static [&'static OptionDef],
	values: FxHashMap<String, OptionValue>,
}

impl Settings {
	/// Creates a store holding only the schema defaults.
	pub fn defaults(name: impl Into<String>, schema: &'static [&'static OptionDef]) -> Self {
		let values = schema
			.iter()
			.map(|def| (def.key.to_string(), def.default.to_value()))
			.collect();
		Self {
			name: name.into(),
			schema,
			values,
		}
	}

	/// Loads settings from a file, falling back to defaults when it does not exist.
	pub fn load(
		name: impl Into<String>,
		schema: &'static [&'static OptionDef],
		path: &Path,
	) -> Result<Self, SettingsError> {
		let name = name.into();
		let text = match std::fs::read_to_string(path) {
			Ok(text) => text,
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
				debug!(settings = %name, path = %path.display(), "settings file not found, using defaults");
				return Ok(Self::defaults(name, schema));
			}
			Err(source) => {
				return Err(SettingsError::Io {
					path: path.display().to_string(),
					source,
				});
			}
		};
		Self::from_toml_str(name, schema, &text)
	}

	/// Parses settings from TOML text.
	pub fn from_toml_str(
		name: impl Into<String>,
		schema: &'static [&'static OptionDef],
		text: &str,
	) -> Result<Self, SettingsError> {
		let mut settings = Self::defaults(name, schema);
		let table: toml::Table = toml::from_str(text).map_err(|source| SettingsError::Parse {
			name: settings.name.clone(),
			source,
		})?;

		for (key, value) in table {
			let known = settings.def(&key).is_some();
			match toml_to_option(&key, &value) {
				Ok(value) => settings.set(&key, value).map_err(|source| SettingsError::Option {
					name: settings.name.clone(),
					source,
				})?,
				Err(source) if known => {
					return Err(SettingsError::Option {
						name: settings.name.clone(),
						source,
					});
				}
				Err(err) => warn!(settings = %settings.name, %err, "ignoring setting"),
			}
		}

		debug!(settings = %settings.name, count = settings.values.len(), "settings loaded");
		Ok(settings)
	}

	/// Returns the resource name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the schema definition for `key`.
	pub fn def(&self, key: &str) -> Option<&'static OptionDef> {
		self.schema.iter().copied().find(|def| def.key == key)
	}

	/// Looks up a raw value; `None` when the key is neither declared nor set.
	pub fn get(&self, key: &str) -> Option<&OptionValue> {
		self.values.get(key)
	}

	/// Reads a typed option, falling back to its declared default.
	pub fn get_typed<T: FromOptionValue>(&self, key: TypedOptionKey<T>) -> T {
		self.get(key.key())
			.and_then(T::from_option)
			.or_else(|| T::from_option(&key.def().default.to_value()))
			.unwrap_or_default()
	}

	/// One `key = value  # description` line per schema setting, in schema order.
	pub fn describe(&self) -> String {
		self.schema
			.iter()
			.map(|def| {
				let value = self.get(def.key).cloned().unwrap_or_else(|| def.default.to_value());
				format!("{} = {value}  # {}\n", def.key, def.description)
			})
			.collect()
	}

	/// Sets a value, type-checking and validating schema keys.
	pub fn set(&mut self, key: &str, value: OptionValue) -> Result<(), OptionError> {
		match self.def(key) {
			Some(def) => {
				if value.value_type() != def.value_type {
					return Err(OptionError::TypeMismatch {
						option: key.to_string(),
						expected: def.value_type,
						got: value.value_type(),
					});
				}
				if let Some(validator) = def.validator {
					validator(&value).map_err(|reason| OptionError::InvalidValue {
						option: key.to_string(),
						reason,
					})?;
				}
			}
			None => {
				let suggestion = suggest_option(self.schema, key);
				warn!(
					settings = %self.name,
					key,
					suggestion = suggestion.as_deref().unwrap_or(""),
					"setting is not recognized by the plugin"
				);
			}
		}
		self.values.insert(key.to_string(), value);
		Ok(())
	}
}

fn toml_to_option(key: &str, value: &toml::Value) -> Result<OptionValue, OptionError> {
	match value {
		toml::Value::Boolean(v) => Ok(OptionValue::Bool(*v)),
		toml::Value::Integer(v) => Ok(OptionValue::Int(*v)),
		toml::Value::String(v) => Ok(OptionValue::String(v.clone())),
		other => Err(OptionError::UnsupportedValue {
			option: key.to_string(),
			got: other.type_str(),
		}),
	}
}
