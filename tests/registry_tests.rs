/* tests/registry_tests.rs */

#![cfg(feature = "registry")]

mod common;

use std::sync::Arc;

use common::{INT_FNS, LineList, PORT_RANGE, linelist_type, port_type, string_type};
use vartype::registry::{AnyVarType, RegistryError, TypeRegistry};
use vartype::{ConfigLine, TypeError, TypeFlags};

fn registry() -> TypeRegistry {
	TypeRegistry::builder()
		.register(port_type())
		.unwrap()
		.register(string_type())
		.unwrap()
		.register(linelist_type())
		.unwrap()
		.build()
}

#[test]
fn test_registry_lookup() {
	let registry = registry();
	assert_eq!(registry.len(), 3);
	assert_eq!(registry.names(), vec!["LineList", "Port", "String"]);
	assert!(registry.contains("Port"));
	assert!(registry.get("Nope").is_none());

	let port = registry.require("Port").unwrap();
	let shown = format!("{port:?}");
	assert!(shown.contains("AnyVarType"));
	assert!(shown.contains("\"Port\""));

	let err = registry.require("Nope").unwrap_err();
	assert_eq!(
		err,
		RegistryError::Unknown {
			name: "Nope".to_string()
		}
	);
}

#[test]
fn test_registry_rejects_duplicates() {
	let res = TypeRegistry::builder()
		.register(port_type())
		.unwrap()
		.register(port_type());
	match res {
		Err(RegistryError::Duplicate { name }) => assert_eq!(name, "Port"),
		_ => panic!("Expected Duplicate error"),
	}
}

#[test]
fn test_registry_define_checks_table() {
	let registry = TypeRegistry::builder()
		.define("Port", &INT_FNS, PORT_RANGE)
		.unwrap()
		.build();
	assert!(registry.contains("Port"));

	let res = TypeRegistry::builder().define("Bad name", &INT_FNS, PORT_RANGE);
	assert!(matches!(
		res,
		Err(RegistryError::Type(TypeError::Misconfigured { .. }))
	));
}

#[test]
fn test_erased_operations() {
	let registry = registry();
	let port = registry.require("Port").unwrap();

	let mut value = port.new_value();
	assert_eq!(value.type_name(), "Port");
	port.parse_text(&mut value, "8080").unwrap();
	assert_eq!(value.downcast_ref::<i64>(), Some(&8080));
	assert_eq!(port.encode_text(&value).unwrap(), Some("8080".to_string()));
	assert_eq!(
		port.encode_lines("ControlPort", &value).unwrap(),
		Some(vec![ConfigLine::new("ControlPort", "8080")])
	);
	assert!(port.validate(&value).unwrap());

	let mut copy = port.new_value();
	assert!(!port.equals(&value, &copy).unwrap());
	port.duplicate(&mut copy, &value).unwrap();
	assert!(port.equals(&value, &copy).unwrap());

	port.reset(&mut copy).unwrap();
	assert_eq!(copy.downcast_ref::<i64>(), Some(&0));

	let err = port.parse_text(&mut value, "99999").unwrap_err();
	assert!(matches!(err, TypeError::Parse { .. }));
	assert_eq!(value.downcast_ref::<i64>(), Some(&8080));
}

#[test]
fn test_erased_freeze() {
	let registry = registry();
	let list = registry.require("LineList").unwrap();
	assert!(list.flags().cumulative);

	let mut value = list.new_value();
	list.parse_line(&mut value, &ConfigLine::new("Bridge", "a")).unwrap();
	list.parse_line(&mut value, &ConfigLine::new("Bridge", "b")).unwrap();
	list.freeze(&mut value).unwrap();
	list.parse_line(&mut value, &ConfigLine::new("Bridge", "c")).unwrap();

	let inner = value.downcast_ref::<LineList>().unwrap();
	assert_eq!(inner.lines, vec![ConfigLine::new("Bridge", "c")]);
}

#[test]
fn test_erased_value_mismatch() {
	let registry = registry();
	let port = registry.require("Port").unwrap();
	let string = registry.require("String").unwrap();

	let mut text = string.new_value();
	let err = port.parse_text(&mut text, "80").unwrap_err();
	assert_eq!(
		err,
		TypeError::ValueMismatch {
			type_name: "Port".to_string()
		}
	);

	// Same concrete type, different descriptor.
	let other: Arc<dyn AnyVarType> = Arc::new(
		vartype::VarType::new("OtherPort", &INT_FNS, PORT_RANGE).unwrap(),
	);
	let foreign = other.new_value();
	assert!(port.encode_text(&foreign).is_err());
	assert!(port.equals(&port.new_value(), &foreign).is_err());
}

#[test]
fn test_registry_infos() {
	let registry = registry();
	let infos = registry.infos();
	assert_eq!(infos.len(), 3);

	let list = &infos[0];
	assert_eq!(list.name, "LineList");
	assert_eq!(list.flags, TypeFlags::CUMULATIVE);
	assert!(list.capabilities.mark_fragile);

	let port = &infos[1];
	assert_eq!(port.flags, TypeFlags::NONE);
	assert!(port.capabilities.parse);
	assert!(!port.capabilities.kv_parse);
}

#[test]
fn test_registry_shared_across_threads() {
	let registry = Arc::new(registry());
	let handles: Vec<_> = (0..4)
		.map(|i| {
			let registry = Arc::clone(&registry);
			std::thread::spawn(move || {
				let port = registry.require("Port").unwrap();
				let mut value = port.new_value();
				port.parse_text(&mut value, &(1000 + i).to_string()).unwrap();
				port.encode_text(&value).unwrap()
			})
		})
		.collect();

	for (i, handle) in handles.into_iter().enumerate() {
		assert_eq!(handle.join().unwrap(), Some((1000 + i).to_string()));
	}
}

#[cfg(feature = "serde")]
#[test]
fn test_registry_infos_serialize() {
	let registry = TypeRegistry::builder()
		.define("LineList", &common::LINELIST_FNS, ())
		.unwrap()
		.build();
	let json = serde_json::to_value(registry.infos()).unwrap();

	assert_eq!(json[0]["name"], "LineList");
	assert_eq!(json[0]["flags"]["cumulative"], false);
	assert_eq!(json[0]["capabilities"]["kv_parse"], true);
	assert_eq!(json[0]["capabilities"]["parse"], false);
}
