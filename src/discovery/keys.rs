//! JWKS export of the configured signing keys.

// self
use crate::key::{Jwk, JwkSet, KeyMaterial};

/// Projects every key onto its public JWK, preserving configuration order.
///
/// Only public members are emitted; symmetric keys publish their identifiers alone.
pub fn export(keys: &[KeyMaterial]) -> JwkSet {
	JwkSet { keys: keys.iter().map(Jwk::from).collect() }
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		auth::KeyId,
		key::{EcCurve, EcKey, RsaKey, SymmetricKey},
	};

	#[test]
	fn export_keeps_order_and_identifiers() {
		let keys: Vec<KeyMaterial> = vec![
			SymmetricKey::from_secret(b"hmac".to_vec())
				.expect("Symmetric key should be valid.")
				.into(),
			RsaKey::from_components(vec![0xC3_u8; 64], vec![1_u8, 0, 1])
				.expect("RSA key should be valid.")
				.into(),
			EcKey::from_coordinates(EcCurve::P256, vec![1_u8; 32], vec![2_u8; 32])
				.expect("EC key should be valid.")
				.into(),
		];
		let keys = keys
			.into_iter()
			.enumerate()
			.map(|(i, key)| {
				key.with_kid(KeyId::new(format!("key-{i}")).expect("Key id should be valid."))
			})
			.collect::<Vec<_>>();
		let set = export(&keys);
		let kids = set.keys.iter().map(|jwk| jwk.kid().as_str()).collect::<Vec<_>>();

		assert_eq!(kids, ["key-0", "key-1", "key-2"]);
		assert!(matches!(set.keys[0], Jwk::Oct { .. }));
		assert!(matches!(set.keys[1], Jwk::Rsa { .. }));
		assert!(matches!(set.keys[2], Jwk::Ec { .. }));
	}

	#[test]
	fn export_of_no_keys_is_empty() {
		assert!(export(&[]).keys.is_empty());
	}
}
