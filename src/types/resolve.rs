/* src/types/resolve.rs */

//!
//! Dispatch entry points. Each call uses the type's own implementation when
//! it has one and otherwise synthesizes the result from the complementary
//! capability. Nothing is cached; resolution happens on every call.

use super::{TypeError, VarType};
use crate::line::{self, ConfigLine, LineSeq};

impl<V: 'static, P: 'static> VarType<V, P> {
	/// Parses `text` into `target`.
	///
	/// Types without `parse` receive a single line keyed by [`line::DEFAULT_KEY`].
	pub fn parse_text(&self, target: &mut V, text: &str) -> Result<(), TypeError> {
		if let Some(parse) = self.fns.parse {
			return parse(target, text, &self.params).map_err(TypeError::parse);
		}
		let kv_parse = self.fns.kv_parse.ok_or_else(|| self.misconfigured("no parser"))?;
		let line = ConfigLine::new(line::DEFAULT_KEY, text);
		kv_parse(target, &line, &self.params).map_err(TypeError::parse)
	}

	/// Parses one line into `target`.
	///
	/// Types without `kv_parse` only see the line's value. Failures are tagged
	/// with the line's origin when it has one.
	pub fn parse_line(&self, target: &mut V, line: &ConfigLine) -> Result<(), TypeError> {
		let result = if let Some(kv_parse) = self.fns.kv_parse {
			kv_parse(target, line, &self.params)
		} else {
			let parse = self.fns.parse.ok_or_else(|| self.misconfigured("no parser"))?;
			parse(target, &line.value, &self.params)
		};
		result.map_err(|message| TypeError::Parse {
			message,
			origin: line.origin.clone(),
		})
	}

	/// Parses the head of `lines` and returns the lines it did not consume.
	///
	/// Exactly one line is consumed per call. The tail is handed back so the
	/// caller can route each remaining line on its own.
	pub fn parse_head<'a>(
		&self,
		target: &mut V,
		lines: &'a [ConfigLine],
	) -> Result<&'a [ConfigLine], TypeError> {
		let (head, tail) = lines
			.split_first()
			.ok_or_else(|| TypeError::parse(format!("no value given for {}", self.name)))?;
		self.parse_line(target, head)?;
		Ok(tail)
	}

	/// Encodes `value` as a single string.
	///
	/// Returns `Ok(None)` for an absent value. A type that only has
	/// `kv_encode` must produce exactly one line; anything else is reported as
	/// [`TypeError::LossySynthesis`] instead of dropping or inventing lines.
	pub fn encode_text(&self, value: &V) -> Result<Option<String>, TypeError> {
		if let Some(encode) = self.fns.encode {
			return Ok(encode(value, &self.params));
		}
		let kv_encode = self.fns.kv_encode.ok_or_else(|| self.misconfigured("no encoder"))?;

		#[cfg(feature = "logging")]
		log::trace!("Encoding '{}' through kv_encode", self.name);

		match kv_encode(line::PLACEHOLDER_KEY, value, &self.params) {
			None => Ok(None),
			Some(mut lines) if lines.len() == 1 => Ok(lines.pop().map(|l| l.value)),
			Some(lines) => Err(TypeError::LossySynthesis {
				type_name: self.name.clone(),
				lines: lines.len(),
			}),
		}
	}

	/// Encodes `value` as lines keyed by `key`.
	///
	/// Types without `kv_encode` yield at most one line. `None` means nothing
	/// to encode.
	pub fn encode_lines(&self, key: &str, value: &V) -> Option<LineSeq> {
		if let Some(kv_encode) = self.fns.kv_encode {
			return kv_encode(key, value, &self.params);
		}
		let encode = self.fns.encode?;
		encode(value, &self.params).map(|text| vec![ConfigLine::new(key, text)])
	}

	/// Compares two values.
	///
	/// Without `eq`, values are equal when they encode to the same text, and
	/// two absent values are equal. When either value has no single-string
	/// form, the values of their encoded lines are compared in order; keys
	/// play no part, as they do not in the text form.
	pub fn equals(&self, a: &V, b: &V) -> bool {
		if let Some(eq) = self.fns.eq {
			return eq(a, b, &self.params);
		}
		if let (Ok(x), Ok(y)) = (self.encode_text(a), self.encode_text(b)) {
			return x == y;
		}
		let key = line::PLACEHOLDER_KEY;
		match (self.encode_lines(key, a), self.encode_lines(key, b)) {
			(None, None) => true,
			(Some(x), Some(y)) => line::same_values(&x, &y),
			_ => false,
		}
	}

	/// Copies `value` into `target`.
	///
	/// Without `copy`, the value is encoded and parsed back into `target`. An
	/// absent source clears the target.
	pub fn duplicate(&self, target: &mut V, value: &V) -> Result<(), TypeError> {
		if let Some(copy) = self.fns.copy {
			return copy(target, value, &self.params).map_err(|reason| self.copy_failure(reason));
		}

		let encoded = self
			.encode_text(value)
			.map_err(|e| self.copy_failure(e.to_string()))?;
		let Some(text) = encoded else {
			self.reset(target);
			return Ok(());
		};

		self.parse_text(target, &text).map_err(|e| {
			#[cfg(feature = "logging")]
			log::warn!(
				"Type '{}' could not re-parse its own encoding {:?}: {}",
				self.name,
				text,
				e
			);
			self.copy_failure(e.to_string())
		})
	}

	/// Resets `value` to its default. A no-op for types without `clear`.
	pub fn reset(&self, value: &mut V) {
		if let Some(clear) = self.fns.clear {
			clear(value, &self.params);
		}
	}

	/// Checks `value`. Types without `ok` accept everything.
	pub fn validate(&self, value: &V) -> bool {
		self.fns.ok.is_none_or(|ok| ok(value, &self.params))
	}

	/// Marks a cumulative value so its next assignment replaces it.
	///
	/// A no-op for types without `mark_fragile`. Checking that the type is
	/// cumulative is up to the caller.
	pub fn freeze(&self, value: &mut V) {
		if let Some(mark_fragile) = self.fns.mark_fragile {
			mark_fragile(value, &self.params);
		}
	}

	fn misconfigured(&self, reason: &'static str) -> TypeError {
		TypeError::Misconfigured {
			type_name: self.name.clone(),
			reason,
		}
	}

	fn copy_failure(&self, reason: String) -> TypeError {
		TypeError::CopyFailure {
			type_name: self.name.clone(),
			reason,
		}
	}
}
