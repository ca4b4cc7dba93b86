/* src/lib.rs */

//!
//! Pluggable value types for a configuration engine.
//!
//! A configuration engine stores values it knows nothing about. Each value is
//! paired with a [`VarType`] descriptor, and every operation on the value goes
//! through the descriptor's dispatch entry points:
//!
//! - **line**: Key/value lines with optional provenance, the unit the engine
//!   feeds in and gets back out.
//! - **types**: Function tables ([`TypeFns`]), descriptors ([`VarType`]),
//!   flags and the resolver that synthesizes missing capabilities.
//! - **slot**: [`TypedVar`], an owned value bound to its descriptor, which
//!   applies the flag policies the resolver leaves to callers.
//! - **registry**: Type-erased descriptors and a read-only name lookup.
//!
//! ## Feature Flags
//!
//! - `full`: Enables all features.
//! - `registry`: Enables the `registry` module.
//! - `serde`: Serialization for flags, lines and introspection records.
//! - `validate`: Bridges `validator::Validate` into the `ok` capability.
//! - `logging`: Diagnostics through the `log` facade.
//!
//! ## Basic Usage
//!
//! See `demos/basic.rs` for a complete example.

pub mod line;
pub mod slot;
pub mod types;

#[cfg(feature = "registry")]
pub mod registry;

pub use line::{ConfigLine, LineSeq, Origin};
pub use slot::TypedVar;
pub use types::{TypeError, TypeFlags, TypeFns, VarType};
