/* src/registry/erased.rs */

use std::any::Any;
use std::fmt;

use crate::line::{ConfigLine, LineSeq};
use crate::types::{TypeError, TypeFlags, TypeInfo, VarType};

/// A value whose concrete type is known only to the descriptor that created it.
pub struct AnyValue {
	type_name: String,
	inner: Box<dyn Any + Send + Sync>,
}

impl AnyValue {
	/// Name of the type that owns this value.
	pub fn type_name(&self) -> &str {
		&self.type_name
	}

	/// Borrows the concrete value, if it is a `V`.
	pub fn downcast_ref<V: 'static>(&self) -> Option<&V> {
		self.inner.downcast_ref()
	}
}

impl fmt::Debug for AnyValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AnyValue")
			.field("type_name", &self.type_name)
			.finish_non_exhaustive()
	}
}

/// Object-safe view of a [`VarType`], for handling many types uniformly.
///
/// Every method checks that the values it receives were created by a
/// descriptor of the same name and concrete type, and reports
/// [`TypeError::ValueMismatch`] otherwise.
pub trait AnyVarType: Send + Sync {
	fn name(&self) -> &str;
	fn flags(&self) -> TypeFlags;
	fn info(&self) -> TypeInfo;

	/// Creates a value holding the type's default.
	fn new_value(&self) -> AnyValue;

	fn parse_text(&self, target: &mut AnyValue, text: &str) -> Result<(), TypeError>;
	fn parse_line(&self, target: &mut AnyValue, line: &ConfigLine) -> Result<(), TypeError>;
	fn encode_text(&self, value: &AnyValue) -> Result<Option<String>, TypeError>;
	fn encode_lines(&self, key: &str, value: &AnyValue) -> Result<Option<LineSeq>, TypeError>;
	fn equals(&self, a: &AnyValue, b: &AnyValue) -> Result<bool, TypeError>;
	fn duplicate(&self, target: &mut AnyValue, value: &AnyValue) -> Result<(), TypeError>;
	fn reset(&self, value: &mut AnyValue) -> Result<(), TypeError>;
	fn validate(&self, value: &AnyValue) -> Result<bool, TypeError>;
	fn freeze(&self, value: &mut AnyValue) -> Result<(), TypeError>;
}

impl fmt::Debug for dyn AnyVarType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AnyVarType")
			.field("name", &self.name())
			.field("flags", &self.flags())
			.finish()
	}
}

impl<V, P> VarType<V, P>
where
	V: Default + Send + Sync + 'static,
	P: 'static,
{
	fn value_ref<'a>(&self, value: &'a AnyValue) -> Result<&'a V, TypeError> {
		if value.type_name != self.name {
			return Err(self.mismatch());
		}
		value.inner.downcast_ref().ok_or_else(|| self.mismatch())
	}

	fn value_mut<'a>(&self, value: &'a mut AnyValue) -> Result<&'a mut V, TypeError> {
		if value.type_name != self.name {
			return Err(self.mismatch());
		}
		value.inner.downcast_mut().ok_or_else(|| self.mismatch())
	}

	fn mismatch(&self) -> TypeError {
		TypeError::ValueMismatch {
			type_name: self.name.clone(),
		}
	}
}

impl<V, P> AnyVarType for VarType<V, P>
where
	V: Default + Send + Sync + 'static,
	P: Send + Sync + 'static,
{
	fn name(&self) -> &str {
		VarType::name(self)
	}

	fn flags(&self) -> TypeFlags {
		VarType::flags(self)
	}

	fn info(&self) -> TypeInfo {
		VarType::info(self)
	}

	fn new_value(&self) -> AnyValue {
		AnyValue {
			type_name: self.name.clone(),
			inner: Box::new(V::default()),
		}
	}

	fn parse_text(&self, target: &mut AnyValue, text: &str) -> Result<(), TypeError> {
		let target = self.value_mut(target)?;
		VarType::parse_text(self, target, text)
	}

	fn parse_line(&self, target: &mut AnyValue, line: &ConfigLine) -> Result<(), TypeError> {
		let target = self.value_mut(target)?;
		VarType::parse_line(self, target, line)
	}

	fn encode_text(&self, value: &AnyValue) -> Result<Option<String>, TypeError> {
		VarType::encode_text(self, self.value_ref(value)?)
	}

	fn encode_lines(&self, key: &str, value: &AnyValue) -> Result<Option<LineSeq>, TypeError> {
		Ok(VarType::encode_lines(self, key, self.value_ref(value)?))
	}

	fn equals(&self, a: &AnyValue, b: &AnyValue) -> Result<bool, TypeError> {
		Ok(VarType::equals(self, self.value_ref(a)?, self.value_ref(b)?))
	}

	fn duplicate(&self, target: &mut AnyValue, value: &AnyValue) -> Result<(), TypeError> {
		let value = self.value_ref(value)?;
		let target = self.value_mut(target)?;
		VarType::duplicate(self, target, value)
	}

	fn reset(&self, value: &mut AnyValue) -> Result<(), TypeError> {
		VarType::reset(self, self.value_mut(value)?);
		Ok(())
	}

	fn validate(&self, value: &AnyValue) -> Result<bool, TypeError> {
		Ok(VarType::validate(self, self.value_ref(value)?))
	}

	fn freeze(&self, value: &mut AnyValue) -> Result<(), TypeError> {
		VarType::freeze(self, self.value_mut(value)?);
		Ok(())
	}
}
