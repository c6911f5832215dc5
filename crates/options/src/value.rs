use std::fmt;

/// A setting, command argument or context operand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionValue {
	Bool(bool),
	Int(i64),
	String(String),
}

impl OptionValue {
	pub fn value_type(&self) -> OptionType {
		match self {
			Self::Bool(_) => OptionType::Bool,
			Self::Int(_) => OptionType::Int,
			Self::String(_) => OptionType::String,
		}
	}
}

impl fmt::Display for OptionValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bool(b) => write!(f, "{b}"),
			Self::Int(n) => write!(f, "{n}"),
			Self::String(s) => write!(f, "{s:?}"),
		}
	}
}

impl From<bool> for OptionValue {
	fn from(b: bool) -> Self {
		Self::Bool(b)
	}
}

impl From<i64> for OptionValue {
	fn from(n: i64) -> Self {
		Self::Int(n)
	}
}

impl From<&str> for OptionValue {
	fn from(s: &str) -> Self {
		Self::String(s.to_owned())
	}
}

/// Declared type of a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
	Bool,
	Int,
	String,
}

impl fmt::Display for OptionType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Bool => "bool",
			Self::Int => "int",
			Self::String => "string",
		};
		f.write_str(name)
	}
}

/// Default of a setting, usable in a `static` definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionDefault {
	Bool(bool),
	Int(i64),
	String(&'static str),
}

impl OptionDefault {
	/// The type every value of this setting must have.
	pub const fn value_type(self) -> OptionType {
		match self {
			Self::Bool(_) => OptionType::Bool,
			Self::Int(_) => OptionType::Int,
			Self::String(_) => OptionType::String,
		}
	}

	pub fn to_value(self) -> OptionValue {
		match self {
			Self::Bool(b) => OptionValue::Bool(b),
			Self::Int(n) => OptionValue::Int(n),
			Self::String(s) => OptionValue::String(s.to_owned()),
		}
	}
}

mod sealed {
	pub trait Sealed {}
	impl Sealed for bool {}
	impl Sealed for i64 {}
	impl Sealed for String {}
}

/// Rust types a [`TypedOptionKey`](crate::TypedOptionKey) can read.
pub trait FromOptionValue: sealed::Sealed + Default + Sized {
	/// `None` when `value` has another type.
	fn from_option(value: &OptionValue) -> Option<Self>;
}

impl FromOptionValue for bool {
	fn from_option(value: &OptionValue) -> Option<Self> {
		match value {
			OptionValue::Bool(b) => Some(*b),
			_ => None,
		}
	}
}

impl FromOptionValue for i64 {
	fn from_option(value: &OptionValue) -> Option<Self> {
		match value {
			OptionValue::Int(n) => Some(*n),
			_ => None,
		}
	}
}

impl FromOptionValue for String {
	fn from_option(value: &OptionValue) -> Option<Self> {
		match value {
			OptionValue::String(s) => Some(s.clone()),
			_ => None,
		}
	}
}
