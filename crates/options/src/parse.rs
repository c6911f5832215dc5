//! Option values written as text, as they arrive from the command line.

use crate::OptionError;
use crate::def::OptionDef;
use crate::value::{OptionType, OptionValue};

/// Reads `value` as the declared type of `key` and runs its validator.
pub fn parse_value(schema: &[&OptionDef], key: &str, value: &str) -> Result<OptionValue, OptionError> {
	let Some(def) = schema.iter().find(|def| def.key == key) else {
		return Err(OptionError::UnknownOption {
			key: key.to_string(),
			suggestion: suggest_option(schema, key),
		});
	};

	let invalid = |reason| OptionError::InvalidValue {
		option: key.to_string(),
		reason,
	};
	let parsed = match def.value_type {
		OptionType::Bool => parse_bool(value).map(OptionValue::Bool),
		OptionType::Int => value
			.parse::<i64>()
			.map(OptionValue::Int)
			.map_err(|_| format!("'{value}' is not an integer")),
		OptionType::String => Ok(OptionValue::String(value.to_string())),
	}
	.map_err(invalid)?;

	match def.validator {
		Some(validate) => validate(&parsed).map(|()| parsed).map_err(invalid),
		None => Ok(parsed),
	}
}

/// Guesses the type of an operand with no schema entry.
///
/// Only the literals `true` and `false` are booleans; anything that parses
/// as an `i64` is an integer; the rest stays text.
pub fn parse_untyped(value: &str) -> OptionValue {
	match value {
		"true" => OptionValue::Bool(true),
		"false" => OptionValue::Bool(false),
		_ => match value.parse::<i64>() {
			Ok(n) => OptionValue::Int(n),
			Err(_) => OptionValue::String(value.to_string()),
		},
	}
}

fn parse_bool(value: &str) -> Result<bool, String> {
	match value.to_ascii_lowercase().as_str() {
		"true" | "yes" | "on" | "1" => Ok(true),
		"false" | "no" | "off" | "0" => Ok(false),
		_ => Err(format!("'{value}' is not a boolean (true/false, yes/no, on/off, 1/0)")),
	}
}

/// Closest schema key within three edits of `key`.
pub fn suggest_option(schema: &[&OptionDef], key: &str) -> Option<String> {
	let (distance, closest) = schema
		.iter()
		.map(|def| (strsim::levenshtein(key, def.key), def.key))
		.min()?;
	(distance <= 3).then(|| closest.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::validators::non_negative_int;
	use crate::value::OptionDefault;

	static CLEARANCE: OptionDef =
		OptionDef::new("clearance", "Lines kept clear", OptionDefault::Int(3)).with_validator(non_negative_int);
	static REINDENT: OptionDef = OptionDef::new("reindent", "Reindent after moves", OptionDefault::Bool(true));
	static SCHEMA: &[&OptionDef] = &[&CLEARANCE, &REINDENT];

	#[test]
	fn parses_by_declared_type() {
		assert_eq!(parse_value(SCHEMA, "clearance", "5"), Ok(OptionValue::Int(5)));
		assert_eq!(parse_value(SCHEMA, "reindent", "off"), Ok(OptionValue::Bool(false)));
	}

	#[test]
	fn rejects_invalid_values() {
		assert!(matches!(
			parse_value(SCHEMA, "clearance", "-2"),
			Err(OptionError::InvalidValue { .. })
		));
		assert!(matches!(
			parse_value(SCHEMA, "reindent", "maybe"),
			Err(OptionError::InvalidValue { .. })
		));
	}

	#[test]
	fn unknown_key_carries_suggestion() {
		let err = parse_value(SCHEMA, "clearence", "1").unwrap_err();
		assert_eq!(
			err,
			OptionError::UnknownOption {
				key: "clearence".into(),
				suggestion: Some("clearance".into()),
			}
		);
		assert_eq!(err.to_string(), "unknown option: clearence (did you mean 'clearance'?)");
	}

	#[test]
	fn untyped_inference() {
		assert_eq!(parse_untyped("true"), OptionValue::Bool(true));
		assert_eq!(parse_untyped("-4"), OptionValue::Int(-4));
		assert_eq!(parse_untyped("on"), OptionValue::String("on".into()));
	}
}
