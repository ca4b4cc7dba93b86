/* src/types/def.rs */

use std::fmt;

use super::{Capabilities, TypeError, TypeFlags, TypeFns};

/// A named, immutable value type: a function table, its params, and its flags.
///
/// Descriptors are built once, usually at startup, and then shared by
/// reference (typically behind an `Arc`) by every value of the type.
pub struct VarType<V: 'static, P: 'static> {
	pub(crate) name: String,
	pub(crate) fns: &'static TypeFns<V, P>,
	pub(crate) params: P,
	pub(crate) flags: TypeFlags,
}

/// Builder for [`VarType`].
pub struct VarTypeBuilder<V: 'static, P: 'static> {
	name: String,
	fns: &'static TypeFns<V, P>,
	params: P,
	flags: TypeFlags,
}

impl<V: 'static, P: 'static> VarTypeBuilder<V, P> {
	pub fn new(name: impl Into<String>, fns: &'static TypeFns<V, P>, params: P) -> Self {
		Self {
			name: name.into(),
			fns,
			params,
			flags: TypeFlags::NONE,
		}
	}

	/// Adds flags to the descriptor. May be called repeatedly.
	pub fn flags(mut self, flags: TypeFlags) -> Self {
		self.flags = self.flags | flags;
		self
	}

	/// Checks the table and name, then freezes the descriptor.
	pub fn build(self) -> Result<VarType<V, P>, TypeError> {
		let misconfigured = |reason| TypeError::Misconfigured {
			type_name: self.name.clone(),
			reason,
		};

		if self.name.is_empty() {
			return Err(misconfigured("name is empty"));
		}
		if self.name.chars().any(char::is_whitespace) {
			return Err(misconfigured("name contains whitespace"));
		}
		if self.fns.parse.is_none() && self.fns.kv_parse.is_none() {
			return Err(misconfigured("neither parse nor kv_parse is implemented"));
		}
		if self.fns.encode.is_none() && self.fns.kv_encode.is_none() {
			return Err(misconfigured("neither encode nor kv_encode is implemented"));
		}

		#[cfg(feature = "logging")]
		if self.flags.cumulative && self.fns.mark_fragile.is_none() {
			log::warn!(
				"Type '{}' is cumulative but has no mark_fragile; freezing its values will do nothing.",
				self.name
			);
		}

		Ok(VarType {
			name: self.name,
			fns: self.fns,
			params: self.params,
			flags: self.flags,
		})
	}
}

impl<V: 'static, P: 'static> VarType<V, P> {
	/// Starts building a descriptor. See [`VarTypeBuilder::build`] for the checks applied.
	pub fn builder(
		name: impl Into<String>,
		fns: &'static TypeFns<V, P>,
		params: P,
	) -> VarTypeBuilder<V, P> {
		VarTypeBuilder::new(name, fns, params)
	}

	/// Builds a descriptor without flags.
	pub fn new(
		name: impl Into<String>,
		fns: &'static TypeFns<V, P>,
		params: P,
	) -> Result<Self, TypeError> {
		Self::builder(name, fns, params).build()
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn flags(&self) -> TypeFlags {
		self.flags
	}

	pub fn params(&self) -> &P {
		&self.params
	}

	pub fn fns(&self) -> &'static TypeFns<V, P> {
		self.fns
	}

	/// Which table members are implemented natively.
	pub fn capabilities(&self) -> Capabilities {
		self.fns.capabilities()
	}

	pub fn is_unsettable(&self) -> bool {
		self.flags.unsettable
	}

	pub fn is_contained(&self) -> bool {
		self.flags.contained
	}

	pub fn is_cumulative(&self) -> bool {
		self.flags.cumulative
	}
}

impl<V: 'static, P: fmt::Debug + 'static> fmt::Debug for VarType<V, P> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("VarType")
			.field("name", &self.name)
			.field("fns", self.fns)
			.field("params", &self.params)
			.field("flags", &self.flags)
			.finish()
	}
}
