/* src/types/mod.rs */

//!
//! Function tables, type descriptors and the dispatch resolver.
//!
//! - [`TypeFns`] - The optional capabilities a type implements
//! - [`VarType`] - A named descriptor binding a table, params and flags
//! - [`TypeFlags`] - Policies read by the engine, never by the resolver

mod def;
mod error;
mod flags;
mod fns;
mod info;
mod resolve;

#[cfg(feature = "validate")]
mod validate;

pub use def::{VarType, VarTypeBuilder};
pub use error::TypeError;
pub use flags::TypeFlags;
pub use fns::{
	Capabilities, ClearFn, CopyFn, EncodeFn, EqFn, KvEncodeFn, KvParseFn, MarkFragileFn, OkFn,
	ParseFn, TypeFns,
};
pub use info::TypeInfo;

#[cfg(feature = "validate")]
pub use validate::validator_ok;
