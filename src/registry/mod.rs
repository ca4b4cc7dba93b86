/* src/registry/mod.rs */

//!
//! Read-only lookup from type name to descriptor.
//!
//! The registry is built once through [`TypeRegistryBuilder`] and then
//! passed around explicitly, usually behind an `Arc`. There is no global
//! instance.

mod erased;
mod error;

pub use erased::{AnyValue, AnyVarType};
pub use error::RegistryError;

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::types::{TypeFns, TypeInfo, VarType};

/// Named, type-erased descriptors.
#[derive(Default, Clone)]
pub struct TypeRegistry {
	types: BTreeMap<String, Arc<dyn AnyVarType>>,
}

/// Builder for [`TypeRegistry`].
#[derive(Default)]
pub struct TypeRegistryBuilder {
	types: BTreeMap<String, Arc<dyn AnyVarType>>,
}

impl TypeRegistryBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an already built descriptor.
	pub fn register(mut self, ty: Arc<dyn AnyVarType>) -> Result<Self, RegistryError> {
		let name = ty.name().to_string();
		if self.types.contains_key(&name) {
			return Err(RegistryError::Duplicate { name });
		}

		#[cfg(feature = "logging")]
		log::debug!("Registered type '{}' (flags {:#x})", name, ty.flags().bits());

		self.types.insert(name, ty);
		Ok(self)
	}

	/// Builds a descriptor with default flags and adds it.
	pub fn define<V, P>(
		self,
		name: &str,
		fns: &'static TypeFns<V, P>,
		params: P,
	) -> Result<Self, RegistryError>
	where
		V: Default + Send + Sync + 'static,
		P: Send + Sync + 'static,
	{
		let ty = VarType::new(name, fns, params)?;
		self.register(Arc::new(ty))
	}

	pub fn build(self) -> TypeRegistry {
		TypeRegistry { types: self.types }
	}
}

impl TypeRegistry {
	pub fn builder() -> TypeRegistryBuilder {
		TypeRegistryBuilder::new()
	}

	/// Looks up a descriptor by name.
	pub fn get(&self, name: &str) -> Option<&Arc<dyn AnyVarType>> {
		self.types.get(name)
	}

	/// Looks up a descriptor by name, reporting unknown names as an error.
	pub fn require(&self, name: &str) -> Result<&Arc<dyn AnyVarType>, RegistryError> {
		self.get(name).ok_or_else(|| RegistryError::Unknown {
			name: name.to_string(),
		})
	}

	pub fn contains(&self, name: &str) -> bool {
		self.types.contains_key(name)
	}

	/// Returns all type names in sorted order.
	pub fn names(&self) -> Vec<&str> {
		self.types.keys().map(String::as_str).collect()
	}

	/// Describes every registered type, sorted by name.
	pub fn infos(&self) -> Vec<TypeInfo> {
		self.types.values().map(|ty| ty.info()).collect()
	}

	pub fn len(&self) -> usize {
		self.types.len()
	}

	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}
}

impl std::fmt::Debug for TypeRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("TypeRegistry").field(&self.names()).finish()
	}
}
