/* src/types/info.rs */

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Capabilities, TypeFlags, VarType};

/// A generic description of a type, for controller-style introspection.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeInfo {
	pub name: String,
	pub flags: TypeFlags,
	pub capabilities: Capabilities,
}

impl TypeInfo {
	/// The stable bit encoding of [`flags`](Self::flags).
	pub fn flag_bits(&self) -> u32 {
		self.flags.bits()
	}
}

impl<V: 'static, P: 'static> VarType<V, P> {
	/// Describes this type without exposing its params.
	pub fn info(&self) -> TypeInfo {
		TypeInfo {
			name: self.name.clone(),
			flags: self.flags,
			capabilities: self.capabilities(),
		}
	}
}
