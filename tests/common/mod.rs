/* tests/common/mod.rs */

#![allow(dead_code)]

use std::sync::Arc;

use vartype::{ConfigLine, LineSeq, TypeFlags, TypeFns, VarType};

/// Inclusive bounds for the integer test type.
#[derive(Debug, Clone, Copy)]
pub struct IntRange {
	pub min: i64,
	pub max: i64,
}

pub const PORT_RANGE: IntRange = IntRange { min: 0, max: 65535 };

fn parse_int(target: &mut i64, text: &str, range: &IntRange) -> Result<(), String> {
	let value: i64 = text
		.trim()
		.parse()
		.map_err(|_| format!("Integer {text:?} is malformed."))?;
	if value < range.min || value > range.max {
		return Err(format!(
			"Integer {value} is out of range [{}, {}].",
			range.min, range.max
		));
	}
	*target = value;
	Ok(())
}

fn encode_int(value: &i64, _: &IntRange) -> Option<String> {
	Some(value.to_string())
}

fn clear_int(value: &mut i64, _: &IntRange) {
	*value = 0;
}

fn int_ok(value: &i64, range: &IntRange) -> bool {
	(range.min..=range.max).contains(value)
}

/// Integer type with only `parse` and `encode` plus helpers.
pub const INT_FNS: TypeFns<i64, IntRange> = TypeFns {
	parse: Some(parse_int),
	encode: Some(encode_int),
	clear: Some(clear_int),
	ok: Some(int_ok),
	..TypeFns::EMPTY
};

/// Integer type with nothing but the required pair.
pub const BARE_INT_FNS: TypeFns<i64, IntRange> = TypeFns {
	parse: Some(parse_int),
	encode: Some(encode_int),
	..TypeFns::EMPTY
};

pub fn port_type() -> Arc<VarType<i64, IntRange>> {
	Arc::new(VarType::new("Port", &INT_FNS, PORT_RANGE).expect("valid type"))
}

fn parse_string(target: &mut Option<String>, text: &str, _: &()) -> Result<(), String> {
	*target = Some(text.to_string());
	Ok(())
}

fn encode_string(value: &Option<String>, _: &()) -> Option<String> {
	value.clone()
}

fn clear_string(value: &mut Option<String>, _: &()) {
	*value = None;
}

/// Optional string: absent values encode to `None`.
pub const STRING_FNS: TypeFns<Option<String>, ()> = TypeFns {
	parse: Some(parse_string),
	encode: Some(encode_string),
	clear: Some(clear_string),
	..TypeFns::EMPTY
};

pub fn string_type() -> Arc<VarType<Option<String>, ()>> {
	Arc::new(VarType::new("String", &STRING_FNS, ()).expect("valid type"))
}

/// A list of lines that remembers the key of each entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineList {
	pub lines: Vec<ConfigLine>,
	pub fragile: bool,
}

fn parse_linelist(target: &mut LineList, line: &ConfigLine, _: &()) -> Result<(), String> {
	if line.value.is_empty() {
		return Err(format!("{} needs a value.", line.key));
	}
	if target.fragile {
		target.lines.clear();
		target.fragile = false;
	}
	target.lines.push(ConfigLine::new(line.key.clone(), line.value.clone()));
	Ok(())
}

fn encode_linelist(_key: &str, value: &LineList, _: &()) -> Option<LineSeq> {
	if value.lines.is_empty() {
		None
	} else {
		Some(value.lines.clone())
	}
}

fn clear_linelist(value: &mut LineList, _: &()) {
	value.lines.clear();
	value.fragile = false;
}

fn mark_linelist_fragile(value: &mut LineList, _: &()) {
	value.fragile = true;
}

/// Cumulative list type with only the key/value line of operations.
pub const LINELIST_FNS: TypeFns<LineList, ()> = TypeFns {
	kv_parse: Some(parse_linelist),
	kv_encode: Some(encode_linelist),
	clear: Some(clear_linelist),
	mark_fragile: Some(mark_linelist_fragile),
	..TypeFns::EMPTY
};

pub fn linelist_type() -> Arc<VarType<LineList, ()>> {
	Arc::new(
		VarType::builder("LineList", &LINELIST_FNS, ())
			.flags(TypeFlags::CUMULATIVE)
			.build()
			.expect("valid type"),
	)
}

fn encode_garbage(_: &i64, _: &IntRange) -> Option<String> {
	Some("not-a-number".to_string())
}

/// Breaks round-trip fidelity on purpose: its encoding never parses.
pub const BROKEN_FNS: TypeFns<i64, IntRange> = TypeFns {
	parse: Some(parse_int),
	encode: Some(encode_garbage),
	..TypeFns::EMPTY
};

fn copy_refuse_negative(target: &mut i64, value: &i64, _: &IntRange) -> Result<(), String> {
	if *value < 0 {
		return Err("negative values cannot be copied".to_string());
	}
	*target = *value;
	Ok(())
}

fn eq_ignore_sign(a: &i64, b: &i64, _: &IntRange) -> bool {
	a.abs() == b.abs()
}

/// Integer type with native `copy` and `eq`.
pub const NATIVE_INT_FNS: TypeFns<i64, IntRange> = TypeFns {
	parse: Some(parse_int),
	encode: Some(encode_int),
	copy: Some(copy_refuse_negative),
	eq: Some(eq_ignore_sign),
	..TypeFns::EMPTY
};
