/* src/line.rs */

//!
//! Key/value lines exchanged with the configuration engine.

use std::fmt;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Key used when a plain string has to be handed to a `kv_parse` implementation.
pub const DEFAULT_KEY: &str = "Unknown";

/// Key passed to `kv_encode` when the caller only wants the encoded value.
pub const PLACEHOLDER_KEY: &str = "X";

/// An ordered sequence of configuration lines.
pub type LineSeq = Vec<ConfigLine>;

/// Where a configuration line came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Origin {
	/// Source file path.
	pub source: PathBuf,
	/// 1-based line number within the source.
	pub line: usize,
}

impl Origin {
	pub fn new(source: impl Into<PathBuf>, line: usize) -> Self {
		Self {
			source: source.into(),
			line,
		}
	}
}

impl fmt::Display for Origin {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.source.display(), self.line)
	}
}

/// A single `key value` entry produced by the line tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConfigLine {
	pub key: String,
	pub value: String,
	/// Provenance, when the line was read from a file.
	#[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
	pub origin: Option<Origin>,
}

impl ConfigLine {
	/// Creates a line without provenance.
	pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			value: value.into(),
			origin: None,
		}
	}

	/// Attaches provenance to the line.
	pub fn with_origin(mut self, origin: Origin) -> Self {
		self.origin = Some(origin);
		self
	}
}

impl fmt::Display for ConfigLine {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.value.is_empty() {
			write!(f, "{}", self.key)
		} else {
			write!(f, "{} {}", self.key, self.value)
		}
	}
}

/// Compares the values of two line sequences in order.
///
/// Keys and provenance are ignored: a value read under one key and
/// written back under another is still the same value.
pub fn same_values(a: &[ConfigLine], b: &[ConfigLine]) -> bool {
	a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.value == y.value)
}
