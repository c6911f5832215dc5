use std::fmt;
use std::marker::PhantomData;

use crate::def::OptionDef;
use crate::value::FromOptionValue;

/// A setting known to hold a `T`, so reads need no type check at the call site.
///
/// Declared as a `const` next to the `static` definition it points at.
pub struct TypedOptionKey<T: FromOptionValue> {
	def: &'static OptionDef,
	marker: PhantomData<fn() -> T>,
}

impl<T: FromOptionValue> TypedOptionKey<T> {
	pub const fn new(def: &'static OptionDef) -> Self {
		Self { def, marker: PhantomData }
	}

	pub fn def(&self) -> &'static OptionDef {
		self.def
	}

	/// Key as written in the settings file.
	pub fn key(&self) -> &'static str {
		self.def.key
	}
}

// Derives would put the bounds on `T` itself.
impl<T: FromOptionValue> Clone for TypedOptionKey<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T: FromOptionValue> Copy for TypedOptionKey<T> {}

impl<T: FromOptionValue> fmt::Debug for TypedOptionKey<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TypedOptionKey({})", self.def.key)
	}
}
