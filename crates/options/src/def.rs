use crate::value::{OptionDefault, OptionType, OptionValue};

/// Validation hook run after the type check.
pub type OptionValidator = fn(&OptionValue) -> Result<(), String>;

/// Definition of a setting recognized by a plugin.
#[derive(Debug, Clone, Copy)]
pub struct OptionDef {
	/// Key as written in the settings file.
	pub key: &'static str,
	/// One-line description.
	pub description: &'static str,
	/// Declared value type.
	pub value_type: OptionType,
	/// Value used when the settings file does not set the key.
	pub default: OptionDefault,
	/// Extra validation beyond the type check.
	pub validator: Option<OptionValidator>,
}

impl OptionDef {
	/// Declares an option; the value type follows from the default.
	pub const fn new(key: &'static str, description: &'static str, default: OptionDefault) -> Self {
		Self {
			key,
			description,
			value_type: default.value_type(),
			default,
			validator: None,
		}
	}

	/// Attaches a validator.
	pub const fn with_validator(mut self, validator: OptionValidator) -> Self {
		self.validator = Some(validator);
		self
	}
}
