/* src/types/error.rs */

use crate::line::Origin;

/// Errors produced by type descriptors and their dispatch entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
	/// Malformed input text. The message is meant for whoever wrote the value.
	#[error("{}", render_parse(.message, .origin))]
	Parse {
		message: String,
		origin: Option<Origin>,
	},

	/// A single string was requested from a type that encodes to several lines.
	#[error("type {type_name} cannot be encoded as a single string ({lines} lines)")]
	LossySynthesis { type_name: String, lines: usize },

	/// Duplicating a value failed.
	#[error("cannot copy value of type {type_name}: {reason}")]
	CopyFailure { type_name: String, reason: String },

	/// The descriptor cannot be used: missing capabilities or a bad name.
	#[error("misconfigured type {type_name}: {reason}")]
	Misconfigured {
		type_name: String,
		reason: &'static str,
	},

	/// Direct assignment to a type that can only be set as a side effect.
	#[error("values of type {type_name} cannot be set directly")]
	Unsettable { type_name: String },

	/// An independent copy of a value that only exists inside its parent.
	#[error("values of type {type_name} are copied only with their parent")]
	Contained { type_name: String },

	/// An erased value was handed to a descriptor that did not create it.
	#[error("value does not belong to type {type_name}")]
	ValueMismatch { type_name: String },
}

impl TypeError {
	/// Builds a parse failure without provenance.
	pub fn parse(message: impl Into<String>) -> Self {
		Self::Parse {
			message: message.into(),
			origin: None,
		}
	}

	/// Returns true for errors that describe bad user input rather than a broken type.
	pub fn is_user_facing(&self) -> bool {
		matches!(self, Self::Parse { .. } | Self::Unsettable { .. })
	}
}

fn render_parse(message: &str, origin: &Option<Origin>) -> String {
	match origin {
		Some(origin) => format!("{origin}: {message}"),
		None => message.to_string(),
	}
}
