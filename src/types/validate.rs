/* src/types/validate.rs */

use validator::Validate;

/// An `ok` capability backed by `validator` rules on the value type.
///
/// ```ignore
/// const ENDPOINT_FNS: TypeFns<Endpoint, ()> = TypeFns {
///     parse: Some(parse_endpoint),
///     encode: Some(encode_endpoint),
///     ok: Some(validator_ok::<Endpoint, ()>),
///     ..TypeFns::EMPTY
/// };
/// ```
pub fn validator_ok<V: Validate, P>(value: &V, _params: &P) -> bool {
	match value.validate() {
		Ok(()) => true,
		Err(_e) => {
			#[cfg(feature = "logging")]
			log::debug!("Value rejected by validator: {}", _e);
			false
		}
	}
}
