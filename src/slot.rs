/* src/slot.rs */

//!
//! An owned value bound to its descriptor.
//!
//! The resolver on [`VarType`] is policy-free. [`TypedVar`] is the layer an
//! engine stores per option: it routes every operation through the resolver
//! and applies the type's flags on the way.

use std::fmt;
use std::sync::Arc;

use crate::line::{ConfigLine, LineSeq};
use crate::types::{TypeError, VarType};

/// A configuration value together with the type that interprets it.
pub struct TypedVar<V: 'static, P: 'static> {
	ty: Arc<VarType<V, P>>,
	value: V,
	version: u64,
}

impl<V: 'static, P: 'static> TypedVar<V, P> {
	/// Creates a slot holding the default value of `V`.
	pub fn new(ty: Arc<VarType<V, P>>) -> Self
	where
		V: Default,
	{
		Self::with_value(ty, V::default())
	}

	/// Creates a slot around an existing value.
	pub fn with_value(ty: Arc<VarType<V, P>>, value: V) -> Self {
		Self {
			ty,
			value,
			version: 0,
		}
	}

	pub fn var_type(&self) -> &Arc<VarType<V, P>> {
		&self.ty
	}

	pub fn get(&self) -> &V {
		&self.value
	}

	pub fn into_inner(self) -> V {
		self.value
	}

	/// Number of successful changes since the slot was created.
	pub fn version(&self) -> u64 {
		self.version
	}

	/// Assigns a value typed by a user.
	///
	/// Unsettable types are rejected here; use [`VarType::parse_text`] for
	/// side-effect assignments that must bypass the check.
	pub fn assign(&mut self, text: &str) -> Result<(), TypeError> {
		self.check_settable()?;
		self.ty.parse_text(&mut self.value, text)?;
		self.version += 1;
		Ok(())
	}

	/// Assigns a single configuration line.
	pub fn assign_line(&mut self, line: &ConfigLine) -> Result<(), TypeError> {
		self.check_settable()?;
		self.ty.parse_line(&mut self.value, line)?;
		self.version += 1;
		Ok(())
	}

	/// Assigns every line in order, one resolver call per line.
	///
	/// Cumulative types accumulate the lines; others end up holding the
	/// last one. Stops at the first failure; earlier lines stay applied.
	pub fn assign_lines(&mut self, lines: &[ConfigLine]) -> Result<(), TypeError> {
		self.check_settable()?;
		let mut rest = lines;
		while !rest.is_empty() {
			rest = self.ty.parse_head(&mut self.value, rest)?;
			self.version += 1;
		}
		Ok(())
	}

	/// Encodes the value as a single string.
	pub fn encode(&self) -> Result<Option<String>, TypeError> {
		self.ty.encode_text(&self.value)
	}

	/// Encodes the value as lines keyed by `key`, whatever the type's flags.
	pub fn lines(&self, key: &str) -> Option<LineSeq> {
		self.ty.encode_lines(key, &self.value)
	}

	/// Encodes the value for a top-level dump. Contained types produce nothing.
	pub fn dump(&self, key: &str) -> Option<LineSeq> {
		if self.ty.is_contained() {
			return None;
		}
		self.lines(key)
	}

	/// Copies the value held by `other`, which must use the same type.
	///
	/// Contained types are rejected: their values are copied along with the
	/// parent that holds them.
	pub fn set_from(&mut self, other: &TypedVar<V, P>) -> Result<(), TypeError> {
		self.check_same_type(other)?;
		self.check_standalone()?;
		self.ty.duplicate(&mut self.value, &other.value)?;
		self.version += 1;
		Ok(())
	}

	/// Creates an independent slot with an equal value.
	///
	/// Fails for contained types, like [`TypedVar::set_from`].
	pub fn try_clone(&self) -> Result<Self, TypeError>
	where
		V: Default,
	{
		self.check_standalone()?;
		let mut copy = Self::new(Arc::clone(&self.ty));
		self.ty.duplicate(&mut copy.value, &self.value)?;
		Ok(copy)
	}

	/// Resets the value to the type's default.
	///
	/// Types without `clear` keep their value and the version is unchanged.
	pub fn clear(&mut self) {
		if self.ty.fns().clear.is_none() {
			return;
		}
		self.ty.reset(&mut self.value);
		self.version += 1;
	}

	pub fn is_valid(&self) -> bool {
		self.ty.validate(&self.value)
	}

	/// Makes the next assignment replace the value instead of extending it.
	///
	/// Only cumulative types are frozen; for any other type this does nothing.
	pub fn mark_fragile(&mut self) {
		if !self.ty.is_cumulative() {
			#[cfg(feature = "logging")]
			log::debug!("Ignoring fragile mark on non-cumulative type '{}'", self.ty.name());
			return;
		}
		self.ty.freeze(&mut self.value);
	}

	fn check_settable(&self) -> Result<(), TypeError> {
		if self.ty.is_unsettable() {
			return Err(TypeError::Unsettable {
				type_name: self.ty.name().to_string(),
			});
		}
		Ok(())
	}

	fn check_standalone(&self) -> Result<(), TypeError> {
		if self.ty.is_contained() {
			return Err(TypeError::Contained {
				type_name: self.ty.name().to_string(),
			});
		}
		Ok(())
	}

	fn check_same_type(&self, other: &TypedVar<V, P>) -> Result<(), TypeError> {
		if Arc::ptr_eq(&self.ty, &other.ty) || self.ty.name() == other.ty.name() {
			Ok(())
		} else {
			Err(TypeError::ValueMismatch {
				type_name: self.ty.name().to_string(),
			})
		}
	}
}

impl<V: 'static, P: 'static> PartialEq for TypedVar<V, P> {
	/// Slots are equal when they share a type and the type considers their values equal.
	fn eq(&self, other: &Self) -> bool {
		self.check_same_type(other).is_ok() && self.ty.equals(&self.value, &other.value)
	}
}

impl<V: fmt::Debug + 'static, P: 'static> fmt::Debug for TypedVar<V, P> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TypedVar")
			.field("type", &self.ty.name())
			.field("value", &self.value)
			.field("version", &self.version)
			.finish()
	}
}
