/* demos/basic.rs */

use std::sync::Arc;

use vartype::registry::TypeRegistry;
use vartype::{ConfigLine, LineSeq, Origin, TypeFlags, TypeFns, TypedVar, VarType};

#[derive(Debug, Clone, Copy)]
struct Range {
	min: u32,
	max: u32,
}

fn parse_uint(target: &mut u32, text: &str, range: &Range) -> Result<(), String> {
	let value: u32 = text
		.parse()
		.map_err(|_| format!("{text:?} is not a number."))?;
	if !(range.min..=range.max).contains(&value) {
		return Err(format!("{value} is outside {}..={}.", range.min, range.max));
	}
	*target = value;
	Ok(())
}

fn encode_uint(value: &u32, _: &Range) -> Option<String> {
	Some(value.to_string())
}

const UINT_FNS: TypeFns<u32, Range> = TypeFns {
	parse: Some(parse_uint),
	encode: Some(encode_uint),
	..TypeFns::EMPTY
};

#[derive(Debug, Default)]
struct Lines {
	entries: Vec<ConfigLine>,
	fragile: bool,
}

fn parse_lines(target: &mut Lines, line: &ConfigLine, _: &()) -> Result<(), String> {
	if target.fragile {
		target.entries.clear();
		target.fragile = false;
	}
	target.entries.push(ConfigLine::new(line.key.clone(), line.value.clone()));
	Ok(())
}

fn encode_lines(_key: &str, value: &Lines, _: &()) -> Option<LineSeq> {
	(!value.entries.is_empty()).then(|| value.entries.clone())
}

fn mark_lines_fragile(value: &mut Lines, _: &()) {
	value.fragile = true;
}

const LINES_FNS: TypeFns<Lines, ()> = TypeFns {
	kv_parse: Some(parse_lines),
	kv_encode: Some(encode_lines),
	mark_fragile: Some(mark_lines_fragile),
	..TypeFns::EMPTY
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let port = Arc::new(VarType::new("Port", &UINT_FNS, Range { min: 0, max: 65535 })?);
	let lines = Arc::new(
		VarType::builder("LineList", &LINES_FNS, ())
			.flags(TypeFlags::CUMULATIVE)
			.build()?,
	);

	let registry = TypeRegistry::builder()
		.register(port.clone())?
		.register(lines.clone())?
		.build();
	for info in registry.infos() {
		println!(
			"{} flags={:#x} native={:?}",
			info.name,
			info.flag_bits(),
			info.capabilities.names()
		);
	}

	let mut socks = TypedVar::new(port);
	socks.assign("9050")?;
	println!("SocksPort = {:?}", socks.encode()?);

	let bad = ConfigLine::new("SocksPort", "70000").with_origin(Origin::new("app.conf", 4));
	if let Err(e) = socks.assign_line(&bad) {
		println!("rejected: {e}");
	}

	let mut bridges = TypedVar::new(lines);
	bridges.assign_lines(&[
		ConfigLine::new("Bridge", "192.0.2.1:443"),
		ConfigLine::new("Bridge", "192.0.2.2:443"),
	])?;
	if let Some(dump) = bridges.dump("Bridge") {
		for line in dump {
			println!("{line}");
		}
	}
	if let Err(e) = bridges.encode() {
		println!("as one string: {e}");
	}

	bridges.mark_fragile();
	bridges.assign_line(&ConfigLine::new("Bridge", "198.51.100.7:443"))?;
	println!("after reload: {} bridge(s)", bridges.get().entries.len());

	Ok(())
}
