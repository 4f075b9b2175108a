//! JSON settings that load into a validated [`ProviderConfiguration`].

// self
use crate::{
	_prelude::*,
	auth::{ClaimDefinition, KeyId, ScopeList},
	error::{ConfigError, KeyError},
	key::{self, EcCurve, EcKey, KeyAlgorithm, KeyMaterial, RsaKey, SymmetricKey},
	provider::{
		EndpointPaths, GrantType, Protocol, ProviderConfiguration, ProviderConfigurationBuilder,
		WebFingerHref,
	},
};

/// Serializable provider settings, typically read from a JSON file at startup.
///
/// Every field except `issuer` and `signing_keys` falls back to the builder defaults.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderSettings {
	/// Issuer identifier.
	pub issuer: String,
	/// Signing keys in publication order.
	pub signing_keys: Vec<SigningKeySettings>,
	/// Algorithm for keys without their own `alg`.
	#[serde(default)]
	pub signing_algorithm: Option<KeyAlgorithm>,
	/// Fixed protocol override; the request scheme is used when absent.
	#[serde(default)]
	pub protocol: Option<Protocol>,
	/// Enabled grant flows; the builder default applies when absent.
	#[serde(default)]
	pub grant_flows: Option<Vec<GrantType>>,
	/// Refresh token feature flag.
	#[serde(default)]
	pub use_refresh_token: bool,
	/// Optional end-session endpoint.
	#[serde(default)]
	pub end_session_endpoint: Option<Url>,
	/// Claim definitions.
	#[serde(default)]
	pub claims: Vec<ClaimDefinition>,
	/// Supported scopes; `openid` is always included.
	#[serde(default)]
	pub scopes: Option<ScopeList>,
	/// Endpoint paths; missing entries keep their defaults.
	#[serde(default)]
	pub paths: EndpointPaths,
	/// WebFinger link source.
	#[serde(default)]
	pub webfinger_href: WebFingerHref,
}
impl ProviderSettings {
	/// Parses settings from a JSON string, reporting the path of the offending field.
	pub fn from_json_str(json: &str) -> Result<Self> {
		let mut deserializer = serde_json::Deserializer::from_str(json);

		serde_path_to_error::deserialize(&mut deserializer).map_err(|e| ConfigError::from(e).into())
	}

	/// Parses settings from JSON bytes.
	pub fn from_json_slice(json: &[u8]) -> Result<Self> {
		let mut deserializer = serde_json::Deserializer::from_slice(json);

		serde_path_to_error::deserialize(&mut deserializer).map_err(|e| ConfigError::from(e).into())
	}

	/// Decodes the keys and validates the settings through [`ProviderConfigurationBuilder`].
	pub fn into_configuration(self) -> Result<ProviderConfiguration> {
		let keys = self
			.signing_keys
			.into_iter()
			.map(SigningKeySettings::into_key)
			.collect::<Result<Vec<_>, _>>()?;
		let mut builder = ProviderConfigurationBuilder::new(self.issuer)
			.signing_keys(keys)
			.use_refresh_token(self.use_refresh_token)
			.claims(self.claims)
			.paths(self.paths)
			.webfinger_href(self.webfinger_href);

		if let Some(alg) = self.signing_algorithm {
			builder = builder.signing_algorithm(alg);
		}
		if let Some(protocol) = self.protocol {
			builder = builder.protocol(protocol);
		}
		if let Some(grants) = self.grant_flows {
			builder = builder.grant_flows(grants);
		}
		if let Some(url) = self.end_session_endpoint {
			builder = builder.end_session_endpoint(url);
		}
		if let Some(scopes) = self.scopes {
			builder = builder.scopes(scopes);
		}

		builder.build()
	}
}
impl FromStr for ProviderSettings {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_json_str(s)
	}
}

/// A signing key as written in settings, tagged by its JWK `kty`.
///
/// Binary components are base64url, padded or not.
#[derive(Deserialize)]
#[serde(tag = "kty")]
pub enum SigningKeySettings {
	/// RSA key given either as `n`/`e` or as a PEM document.
	#[serde(rename = "RSA")]
	Rsa {
		/// Explicit key identifier.
		#[serde(default)]
		kid: Option<KeyId>,
		/// Explicit signing algorithm.
		#[serde(default)]
		alg: Option<KeyAlgorithm>,
		/// Modulus.
		#[serde(default)]
		n: Option<String>,
		/// Public exponent.
		#[serde(default)]
		e: Option<String>,
		/// PEM document; takes precedence over `n`/`e`.
		#[cfg(feature = "pem")]
		#[serde(default)]
		pem: Option<String>,
	},
	/// Elliptic curve public point.
	#[serde(rename = "EC")]
	Ec {
		/// Explicit key identifier.
		#[serde(default)]
		kid: Option<KeyId>,
		/// Explicit signing algorithm.
		#[serde(default)]
		alg: Option<KeyAlgorithm>,
		/// Curve name.
		crv: EcCurve,
		/// Affine x coordinate.
		x: String,
		/// Affine y coordinate.
		y: String,
	},
	/// Symmetric HMAC secret.
	#[serde(rename = "oct")]
	Oct {
		/// Explicit key identifier; recommended, since the derived thumbprint hashes `k`.
		#[serde(default)]
		kid: Option<KeyId>,
		/// Explicit signing algorithm.
		#[serde(default)]
		alg: Option<KeyAlgorithm>,
		/// Secret bytes.
		k: String,
	},
}
impl SigningKeySettings {
	/// Decodes the key and applies its identifier and algorithm.
	pub fn into_key(self) -> Result<KeyMaterial, KeyError> {
		let (material, kid, alg): (KeyMaterial, _, _) = match self {
			#[cfg(feature = "pem")]
			SigningKeySettings::Rsa { kid, alg, pem: Some(pem), .. } =>
				(RsaKey::from_pem(&pem)?.into(), kid, alg),
			SigningKeySettings::Rsa { kid, alg, n, e, .. } => {
				let n = key::decode_component("n", n.as_deref().unwrap_or_default())?;
				let e = key::decode_component("e", e.as_deref().unwrap_or_default())?;

				(RsaKey::from_components(n, e)?.into(), kid, alg)
			},
			SigningKeySettings::Ec { kid, alg, crv, x, y } => {
				let x = key::decode_component("x", &x)?;
				let y = key::decode_component("y", &y)?;

				(EcKey::from_coordinates(crv, x, y)?.into(), kid, alg)
			},
			SigningKeySettings::Oct { kid, alg, k } => {
				let k = key::decode_component("k", &k)?;

				(SymmetricKey::from_secret(k)?.into(), kid, alg)
			},
		};
		let material = match kid {
			Some(kid) => material.with_kid(kid),
			None => material,
		};

		match alg {
			Some(alg) => material.with_algorithm(alg),
			None => Ok(material),
		}
	}
}
impl Debug for SigningKeySettings {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			SigningKeySettings::Rsa { kid, alg, .. } =>
				f.debug_struct("Rsa").field("kid", kid).field("alg", alg).finish_non_exhaustive(),
			SigningKeySettings::Ec { kid, alg, crv, .. } => f
				.debug_struct("Ec")
				.field("kid", kid)
				.field("alg", alg)
				.field("crv", crv)
				.finish_non_exhaustive(),
			SigningKeySettings::Oct { kid, alg, .. } => f
				.debug_struct("Oct")
				.field("kid", kid)
				.field("alg", alg)
				.field("k", &"<redacted>")
				.finish(),
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::key::KeyFamily;

	const SETTINGS: &str = r#"{
		"issuer": "https://idp.example.com",
		"signing_keys": [
			{ "kty": "oct", "kid": "hmac-1", "k": "c2lnbmluZy1zZWNyZXQ" },
			{
				"kty": "EC",
				"crv": "P-256",
				"x": "MKBCTNIcKUSDii11ySs3526iDZ8AiTo7Tu6KPAqv7D4",
				"y": "4Etl6SRW2YiLUrN5vfvVHuhp7x8PxltmWWlbbM4IFyM"
			}
		],
		"grant_flows": ["authorization_code", "password"],
		"use_refresh_token": true,
		"protocol": "https",
		"claims": [{ "name": "email", "scope": "email" }],
		"paths": { "token": "/connect/token" }
	}"#;

	#[test]
	fn settings_load_into_configuration() {
		let config = ProviderSettings::from_json_str(SETTINGS)
			.expect("Settings should parse.")
			.into_configuration()
			.expect("Settings should build a configuration.");

		assert_eq!(config.issuer, "https://idp.example.com");
		assert_eq!(config.signing_keys.len(), 2);
		assert_eq!(config.signing_keys[0].kid().as_str(), "hmac-1");
		assert_eq!(config.signing_keys[1].family(), KeyFamily::Ec);
		assert_eq!(
			config.grant_types(),
			vec![GrantType::AuthorizationCode, GrantType::Password, GrantType::RefreshToken]
		);
		assert_eq!(config.paths.token, "/connect/token");
		assert_eq!(config.paths.authorization, "/oauth/authorize");
		assert_eq!(config.claim_names().last(), Some(&"email"));
	}

	#[test]
	fn parse_errors_report_the_field_path() {
		let err = ProviderSettings::from_json_str(
			r#"{ "issuer": "https://idp.example.com", "signing_keys": [{ "kty": "oct", "k": 7 }] }"#,
		)
		.expect_err("A numeric secret must be rejected.");
		let Error::Config(ConfigError::Parse(inner)) = &err else {
			panic!("Expected a parse error, got {err:?}.");
		};

		assert!(inner.path().to_string().starts_with("signing_keys[0]"));
	}

	#[test]
	fn unknown_key_types_and_fields_are_rejected() {
		let unknown_kty = r#"{ "issuer": "i", "signing_keys": [{ "kty": "OKP", "x": "AA" }] }"#;
		let unknown_field = r#"{ "issuer": "i", "signing_keys": [], "colour": "blue" }"#;

		assert!(ProviderSettings::from_json_str(unknown_kty).is_err());
		assert!(ProviderSettings::from_json_str(unknown_field).is_err());
	}

	#[test]
	fn mismatched_key_algorithm_fails_conversion() {
		let settings = ProviderSettings::from_json_str(
			r#"{ "issuer": "i", "signing_keys": [{ "kty": "oct", "alg": "RS256", "k": "c2VjcmV0" }] }"#,
		)
		.expect("Settings should parse.");

		assert!(matches!(
			settings.into_configuration(),
			Err(Error::Key(KeyError::AlgorithmMismatch { alg: "RS256", kty: "oct" }))
		));
	}

	#[test]
	fn lowercase_algorithms_are_accepted() {
		let config = ProviderSettings::from_json_str(
			r#"{
				"issuer": "i",
				"signing_algorithm": "hs384",
				"signing_keys": [
					{ "kty": "oct", "alg": "hs512", "k": "c2VjcmV0" },
					{ "kty": "oct", "k": "b3RoZXI" }
				]
			}"#,
		)
		.expect("Lowercase algorithm names should parse.")
		.into_configuration()
		.expect("Settings should build a configuration.");

		assert_eq!(config.signing_keys[0].algorithm(), KeyAlgorithm::Hs512);
		assert_eq!(config.signing_keys[1].algorithm(), KeyAlgorithm::Hs384);
	}

	#[test]
	fn debug_output_redacts_secrets() {
		let settings = ProviderSettings::from_json_str(SETTINGS).expect("Settings should parse.");
		let rendered = format!("{settings:?}");

		assert!(!rendered.contains("c2lnbmluZy1zZWNyZXQ"));
		assert!(rendered.contains("<redacted>"));
	}
}
