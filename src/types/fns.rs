/* src/types/fns.rs */

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::line::{ConfigLine, LineSeq};

/// Decodes `text` into `target`. Must leave `target` untouched on failure.
pub type ParseFn<V, P> = fn(target: &mut V, text: &str, params: &P) -> Result<(), String>;
/// Decodes a single line into `target`. The key may carry meaning.
pub type KvParseFn<V, P> = fn(target: &mut V, line: &ConfigLine, params: &P) -> Result<(), String>;
/// Renders a value as one string, or `None` for an absent value.
pub type EncodeFn<V, P> = fn(value: &V, params: &P) -> Option<String>;
/// Renders a value as zero or more lines keyed by `key`, or `None` when there is nothing to encode.
pub type KvEncodeFn<V, P> = fn(key: &str, value: &V, params: &P) -> Option<LineSeq>;
/// Resets a value to its default.
pub type ClearFn<V, P> = fn(value: &mut V, params: &P);
/// Semantic equality.
pub type EqFn<V, P> = fn(a: &V, b: &V, params: &P) -> bool;
/// Copies `value` into `target`.
pub type CopyFn<V, P> = fn(target: &mut V, value: &V, params: &P) -> Result<(), String>;
/// Validity predicate.
pub type OkFn<V, P> = fn(value: &V, params: &P) -> bool;
/// Makes the next assignment to a cumulative value replace it.
pub type MarkFragileFn<V, P> = fn(value: &mut V, params: &P);

/// The capability table of a value type.
///
/// Every table needs `parse` or `kv_parse`, and `encode` or `kv_encode`.
/// Everything else may be `None`, in which case the resolver on
/// [`VarType`](super::VarType) falls back to a generic behavior.
///
/// Tables are plain data and are usually declared as constants, which lets
/// the completeness check run at compile time:
///
/// ```ignore
/// const PORT_FNS: TypeFns<u16, PortRange> = TypeFns {
///     parse: Some(parse_port),
///     encode: Some(encode_port),
///     ..TypeFns::EMPTY
/// };
/// const _: () = assert!(PORT_FNS.is_complete());
///
/// let port = VarType::builder("Port", &PORT_FNS, PortRange::default()).build()?;
/// ```
pub struct TypeFns<V, P> {
	pub parse: Option<ParseFn<V, P>>,
	pub kv_parse: Option<KvParseFn<V, P>>,
	pub encode: Option<EncodeFn<V, P>>,
	pub kv_encode: Option<KvEncodeFn<V, P>>,
	pub clear: Option<ClearFn<V, P>>,
	pub eq: Option<EqFn<V, P>>,
	pub copy: Option<CopyFn<V, P>>,
	pub ok: Option<OkFn<V, P>>,
	pub mark_fragile: Option<MarkFragileFn<V, P>>,
}

impl<V, P> TypeFns<V, P> {
	/// A table with no capabilities, meant as the base for struct-update syntax.
	pub const EMPTY: Self = Self {
		parse: None,
		kv_parse: None,
		encode: None,
		kv_encode: None,
		clear: None,
		eq: None,
		copy: None,
		ok: None,
		mark_fragile: None,
	};

	/// Returns true if the table can both parse and encode.
	pub const fn is_complete(&self) -> bool {
		(self.parse.is_some() || self.kv_parse.is_some())
			&& (self.encode.is_some() || self.kv_encode.is_some())
	}

	/// Reports which members are present.
	pub const fn capabilities(&self) -> Capabilities {
		Capabilities {
			parse: self.parse.is_some(),
			kv_parse: self.kv_parse.is_some(),
			encode: self.encode.is_some(),
			kv_encode: self.kv_encode.is_some(),
			clear: self.clear.is_some(),
			eq: self.eq.is_some(),
			copy: self.copy.is_some(),
			ok: self.ok.is_some(),
			mark_fragile: self.mark_fragile.is_some(),
		}
	}
}

impl<V, P> Clone for TypeFns<V, P> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<V, P> Copy for TypeFns<V, P> {}

impl<V, P> fmt::Debug for TypeFns<V, P> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("TypeFns").field(&self.capabilities()).finish()
	}
}

/// Which members of a [`TypeFns`] table are implemented natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Capabilities {
	pub parse: bool,
	pub kv_parse: bool,
	pub encode: bool,
	pub kv_encode: bool,
	pub clear: bool,
	pub eq: bool,
	pub copy: bool,
	pub ok: bool,
	pub mark_fragile: bool,
}

impl Capabilities {
	/// Names of the native members, in table order.
	pub fn names(&self) -> Vec<&'static str> {
		[
			(self.parse, "parse"),
			(self.kv_parse, "kv_parse"),
			(self.encode, "encode"),
			(self.kv_encode, "kv_encode"),
			(self.clear, "clear"),
			(self.eq, "eq"),
			(self.copy, "copy"),
			(self.ok, "ok"),
			(self.mark_fragile, "mark_fragile"),
		]
		.into_iter()
		.filter_map(|(present, name)| present.then_some(name))
		.collect()
	}
}
