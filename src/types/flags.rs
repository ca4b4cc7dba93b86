/* src/types/flags.rs */

use std::ops::BitOr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Behavioral policies shared by every value of a type.
///
/// The resolver never looks at these. They are read by whoever drives the
/// descriptor: the engine's assignment path, its dump path, and its
/// handling of repeated assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeFlags {
	/// Values can never be set directly by name, only as a side effect of another type.
	pub unsettable: bool,
	/// Values always live inside another value and are never dumped or copied on their own.
	pub contained: bool,
	/// Repeated assignment extends the value. Such types should implement `mark_fragile`.
	pub cumulative: bool,
}

impl TypeFlags {
	pub const NONE: Self = Self {
		unsettable: false,
		contained: false,
		cumulative: false,
	};
	pub const UNSETTABLE: Self = Self {
		unsettable: true,
		..Self::NONE
	};
	pub const CONTAINED: Self = Self {
		contained: true,
		..Self::NONE
	};
	pub const CUMULATIVE: Self = Self {
		cumulative: true,
		..Self::NONE
	};

	const BIT_UNSETTABLE: u32 = 1 << 0;
	const BIT_CONTAINED: u32 = 1 << 1;
	const BIT_CUMULATIVE: u32 = 1 << 2;

	/// Combines two flag sets.
	pub const fn union(self, other: Self) -> Self {
		Self {
			unsettable: self.unsettable || other.unsettable,
			contained: self.contained || other.contained,
			cumulative: self.cumulative || other.cumulative,
		}
	}

	/// Returns true if every flag set in `other` is also set here.
	pub const fn contains(self, other: Self) -> bool {
		(self.unsettable || !other.unsettable)
			&& (self.contained || !other.contained)
			&& (self.cumulative || !other.cumulative)
	}

	/// Stable bit encoding for controller-facing introspection.
	pub const fn bits(self) -> u32 {
		let mut bits = 0;
		if self.unsettable {
			bits |= Self::BIT_UNSETTABLE;
		}
		if self.contained {
			bits |= Self::BIT_CONTAINED;
		}
		if self.cumulative {
			bits |= Self::BIT_CUMULATIVE;
		}
		bits
	}

	/// Decodes [`bits`](Self::bits). Unknown bits are dropped.
	pub const fn from_bits(bits: u32) -> Self {
		Self {
			unsettable: bits & Self::BIT_UNSETTABLE != 0,
			contained: bits & Self::BIT_CONTAINED != 0,
			cumulative: bits & Self::BIT_CUMULATIVE != 0,
		}
	}
}

impl BitOr for TypeFlags {
	type Output = Self;

	fn bitor(self, rhs: Self) -> Self {
		self.union(rhs)
	}
}
