//! Standard validators for option values.

use crate::value::OptionValue;

/// Validates that an integer is not negative.
pub fn non_negative_int(value: &OptionValue) -> Result<(), String> {
	match value {
		OptionValue::Int(n) if *n >= 0 => Ok(()),
		OptionValue::Int(n) => Err(format!("must be at least 0, got {n}")),
		_ => Err("expected integer".to_string()),
	}
}
