//! Plugin settings.
//!
//! Each plugin declares a static schema of [`OptionDef`]s. A [`Settings`]
//! store is loaded once from a TOML resource, validated against that schema,
//! and then shared read-only by every command and listener of the plugin.

pub mod def;
pub mod parse;
pub mod settings;
pub mod typed_keys;
pub mod validators;
pub mod value;

pub use def::{OptionDef, OptionValidator};
pub use settings::{Settings, SettingsError};
pub use typed_keys::TypedOptionKey;
pub use value::{FromOptionValue, OptionDefault, OptionType, OptionValue};

/// Errors raised while reading or validating an option value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
	/// The key is not part of the plugin schema.
	#[error("unknown option: {key}{}", suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
	UnknownOption {
		/// The unrecognized key.
		key: String,
		/// A close schema key, if any.
		suggestion: Option<String>,
	},
	/// The value's type does not match the declared type.
	#[error("type mismatch for option '{option}': expected {expected}, got {got}")]
	TypeMismatch {
		/// The option key.
		option: String,
		/// The declared type.
		expected: OptionType,
		/// The type of the rejected value.
		got: OptionType,
	},
	/// The value has the right type but failed validation.
	#[error("invalid value for option '{option}': {reason}")]
	InvalidValue {
		/// The option key.
		option: String,
		/// Validator message.
		reason: String,
	},
	/// The source value has no option representation (floats, arrays, tables).
	#[error("unsupported value for option '{option}': {got}")]
	UnsupportedValue {
		/// The option key.
		option: String,
		/// The source type name.
		got: &'static str,
	},
}
