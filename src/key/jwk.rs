//! Public JSON Web Key projection (RFC 7517) and thumbprints (RFC 7638).

// crates.io
use base64::Engine as _;
use sha2::{Digest, Sha256};
// self
use crate::{
	_prelude::*,
	auth::KeyId,
	key::{BASE64_URL, EcCurve, KeyAlgorithm, KeyMaterial},
};

/// Intended use of a published key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyUse {
	/// Signature verification.
	#[default]
	Sig,
}

/// Public JWK for one signing key.
///
/// Each variant carries exactly the members relying parties need for its family and
/// nothing else: no private exponent, EC scalar, or symmetric `k`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kty")]
pub enum Jwk {
	/// RSA public key: `kty`, `kid`, `e`, `n`, `use`, `alg`.
	#[serde(rename = "RSA")]
	Rsa {
		/// Key identifier.
		kid: KeyId,
		/// Base64url public exponent.
		e: String,
		/// Base64url modulus.
		n: String,
		/// Key usage.
		#[serde(rename = "use")]
		key_use: KeyUse,
		/// Signing algorithm.
		alg: KeyAlgorithm,
	},
	/// EC public key: `kty`, `kid`, `crv`, `x`, `y`, `use`, `alg`.
	#[serde(rename = "EC")]
	Ec {
		/// Key identifier.
		kid: KeyId,
		/// Curve name.
		crv: EcCurve,
		/// Base64url x coordinate.
		x: String,
		/// Base64url y coordinate.
		y: String,
		/// Key usage.
		#[serde(rename = "use")]
		key_use: KeyUse,
		/// Signing algorithm.
		alg: KeyAlgorithm,
	},
	/// Symmetric key reference: `kty`, `kid`, `use`, `alg`.
	#[serde(rename = "oct")]
	Oct {
		/// Key identifier.
		kid: KeyId,
		/// Key usage.
		#[serde(rename = "use")]
		key_use: KeyUse,
		/// Signing algorithm.
		alg: KeyAlgorithm,
	},
}
impl Jwk {
	/// Key identifier shared by every variant.
	pub fn kid(&self) -> &KeyId {
		match self {
			Jwk::Rsa { kid, .. } | Jwk::Ec { kid, .. } | Jwk::Oct { kid, .. } => kid,
		}
	}

	/// Signing algorithm shared by every variant.
	pub fn alg(&self) -> KeyAlgorithm {
		match self {
			Jwk::Rsa { alg, .. } | Jwk::Ec { alg, .. } | Jwk::Oct { alg, .. } => *alg,
		}
	}
}
impl From<&KeyMaterial> for Jwk {
	fn from(key: &KeyMaterial) -> Self {
		let kid = key.kid();
		let alg = key.algorithm();
		let key_use = KeyUse::Sig;

		match key {
			KeyMaterial::Rsa(rsa) => Jwk::Rsa {
				kid,
				e: BASE64_URL.encode(rsa.exponent()),
				n: BASE64_URL.encode(rsa.modulus()),
				key_use,
				alg,
			},
			KeyMaterial::Ec(ec) => Jwk::Ec {
				kid,
				crv: ec.curve(),
				x: BASE64_URL.encode(ec.x()),
				y: BASE64_URL.encode(ec.y()),
				key_use,
				alg,
			},
			KeyMaterial::Symmetric(_) => Jwk::Oct { kid, key_use, alg },
		}
	}
}

/// JSON Web Key Set document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwkSet {
	/// Published keys in configuration order.
	pub keys: Vec<Jwk>,
}
impl JwkSet {
	/// Looks up a key by identifier.
	pub fn find(&self, kid: &str) -> Option<&Jwk> {
		self.keys.iter().find(|jwk| jwk.kid().as_str() == kid)
	}
}

/// Computes the RFC 7638 SHA-256 thumbprint of the key's required members.
///
/// Members are serialized in lexicographic order without whitespace; every value is
/// base64url or a fixed curve name, so no JSON escaping is involved.
///
/// For `oct` keys the input includes `k`, so a published thumbprint lets anyone confirm a
/// guessed secret offline. Give HMAC keys an explicit `kid` to keep the digest private.
pub fn thumbprint(key: &KeyMaterial) -> KeyId {
	let canonical = match key {
		KeyMaterial::Rsa(rsa) => format!(
			r#"{{"e":"{}","kty":"RSA","n":"{}"}}"#,
			BASE64_URL.encode(rsa.exponent()),
			BASE64_URL.encode(rsa.modulus()),
		),
		KeyMaterial::Ec(ec) => format!(
			r#"{{"crv":"{}","kty":"EC","x":"{}","y":"{}"}}"#,
			ec.curve().as_str(),
			BASE64_URL.encode(ec.x()),
			BASE64_URL.encode(ec.y()),
		),
		KeyMaterial::Symmetric(hmac) =>
			format!(r#"{{"k":"{}","kty":"oct"}}"#, BASE64_URL.encode(hmac.secret().expose())),
	};
	let digest = Sha256::digest(canonical.as_bytes());

	KeyId::from_thumbprint(BASE64_URL.encode(digest))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::key::{EcKey, RsaKey, SymmetricKey, decode_component};

	// RFC 7638 section 3.1 example key.
	const RFC_N: &str = "0vx7agoebGcQSuuPiLJXZptN9nndrQmbXEps2aiAFbWhM78LhWx4cbbfAAtVT86zwu1RK7aPFFxuhDR1L6tSoc_BJECPebWKRXjBZCiFV4n3oknjhMstn64tZ_2W-5JsGY4Hc5n9yBXArwl93lqt7_RN5w6Cf0h4QyQ5v-65YGjQR0_FDW2QvzqY368QQMicAtaSqzs8KJZgnYb9c7d0zgdAZHzu6qMQvRL5hajrn1n91CbOpbISD08qNLyrdkt-bFTWhAI4vMQFh6WeZu0fM4lFd2NcRwr3XPksINHaQ-G_xBniIqbw0Ls1jF44-csFCur-kEgU8awapJzKnqDKgw";
	const RFC_THUMBPRINT: &str = "NzbLsXh8uDCcd-6MNwXF4W_7noWXFZAfHkxZsRGC9Xs";

	fn rfc_rsa_key() -> KeyMaterial {
		let n = decode_component("n", RFC_N).expect("RFC modulus should decode.");
		let e = decode_component("e", "AQAB").expect("RFC exponent should decode.");

		RsaKey::from_components(n, e).expect("RFC key should be valid.").into()
	}

	#[test]
	fn rsa_thumbprint_matches_rfc_7638() {
		let key = rfc_rsa_key();

		assert_eq!(thumbprint(&key).as_str(), RFC_THUMBPRINT);
		assert_eq!(key.kid().as_str(), RFC_THUMBPRINT);
	}

	#[test]
	fn explicit_kid_wins_over_thumbprint() {
		let key = rfc_rsa_key().with_kid(KeyId::new("2011-04-29").expect("Kid should be valid."));

		assert_eq!(Jwk::from(&key).kid().as_str(), "2011-04-29");
	}

	#[test]
	fn explicit_hmac_kid_hides_the_secret_digest() {
		let key: KeyMaterial =
			SymmetricKey::from_secret(*b"secret").expect("HMAC fixture should be valid.").into();
		let digest = thumbprint(&key);
		let key = key.with_kid(KeyId::new("hmac-2024").expect("Kid should be valid."));
		let body = serde_json::to_string(&Jwk::from(&key)).expect("JWK should serialize.");

		assert_eq!(key.kid().as_str(), "hmac-2024");
		assert!(!body.contains(digest.as_str()));
	}

	#[test]
	fn rsa_projection_reencodes_components() {
		let jwk = Jwk::from(&rfc_rsa_key());

		match jwk {
			Jwk::Rsa { n, e, key_use, alg, .. } => {
				assert_eq!(n, RFC_N);
				assert_eq!(e, "AQAB");
				assert_eq!(key_use, KeyUse::Sig);
				assert_eq!(alg, KeyAlgorithm::Rs256);
			},
			other => panic!("Expected an RSA JWK, got {other:?}."),
		}
	}

	#[test]
	fn symmetric_projection_hides_the_secret() {
		let key: KeyMaterial = SymmetricKey::from_secret(b"top-secret-hmac-key".to_vec())
			.expect("HMAC fixture should be valid.")
			.into();
		let value = serde_json::to_value(Jwk::from(&key)).expect("JWK should serialize.");
		let object = value.as_object().expect("JWK should serialize as an object.");
		let mut members = object.keys().map(String::as_str).collect::<Vec<_>>();

		members.sort_unstable();

		assert_eq!(members, ["alg", "kid", "kty", "use"]);
		assert_eq!(object["kty"], "oct");
		assert_eq!(object["alg"], "HS256");
		assert!(!value.to_string().contains(&BASE64_URL.encode(b"top-secret-hmac-key")));
	}

	#[test]
	fn ec_projection_serializes_curve_name() {
		let x = decode_component("x", "MKBCTNIcKUSDii11ySs3526iDZ8AiTo7Tu6KPAqv7D4")
			.expect("RFC 7517 x should decode.");
		let y = decode_component("y", "4Etl6SRW2YiLUrN5vfvVHuhp7x8PxltmWWlbbM4IFyM")
			.expect("RFC 7517 y should decode.");
		let key: KeyMaterial =
			EcKey::from_coordinates(EcCurve::P256, x, y).expect("EC key should be valid.").into();
		let value = serde_json::to_value(Jwk::from(&key)).expect("JWK should serialize.");

		assert_eq!(value["kty"], "EC");
		assert_eq!(value["crv"], "P-256");
		assert_eq!(value["x"], "MKBCTNIcKUSDii11ySs3526iDZ8AiTo7Tu6KPAqv7D4");
		assert_eq!(value["y"], "4Etl6SRW2YiLUrN5vfvVHuhp7x8PxltmWWlbbM4IFyM");
		assert_eq!(value["use"], "sig");
		assert_eq!(value["alg"], "ES256");
	}

	#[test]
	fn jwk_set_finds_keys_by_kid() {
		let key = rfc_rsa_key();
		let set = JwkSet { keys: vec![Jwk::from(&key)] };

		assert!(set.find(RFC_THUMBPRINT).is_some());
		assert!(set.find("missing").is_none());

		let json = serde_json::to_string(&set).expect("JWK set should serialize.");
		let parsed: JwkSet = serde_json::from_str(&json).expect("JWK set should deserialize.");

		assert_eq!(parsed, set);
	}
}
