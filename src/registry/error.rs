/* src/registry/error.rs */

use thiserror::Error;

use crate::types::TypeError;

/// Errors raised while building or querying a [`TypeRegistry`](super::TypeRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
	/// Two descriptors were registered under the same name.
	#[error("type registered twice: {name}")]
	Duplicate { name: String },

	/// No descriptor is registered under this name.
	#[error("unknown type: {name}")]
	Unknown { name: String },

	#[error("type error: {0}")]
	Type(#[from] TypeError),
}
