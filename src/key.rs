//! Signing key material, algorithms, and their public JWK projections.
//!
//! [`KeyMaterial`] is a closed sum over the RSA, EC, and symmetric (HMAC) families. Every
//! constructor validates its components up front so the JWK projection in [`jwk`] is
//! infallible and never carries private or secret values.

pub mod jwk;
#[cfg(feature = "pem")] pub mod pem;
pub mod secret;

pub use jwk::*;
pub use secret::*;

// crates.io
use base64::{
	Engine as _, alphabet,
	engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
// self
use crate::{_prelude::*, auth::KeyId, error::KeyError};

/// Base64url engine that emits no padding and tolerates padded input.
pub(crate) const BASE64_URL: GeneralPurpose = GeneralPurpose::new(
	&alphabet::URL_SAFE,
	GeneralPurposeConfig::new()
		.with_encode_padding(false)
		.with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// JWK key type (`kty`) of a key family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyFamily {
	/// RSA public/private key pair.
	Rsa,
	/// Elliptic curve key pair.
	Ec,
	/// Symmetric octet sequence (HMAC).
	Oct,
}
impl KeyFamily {
	/// Returns the RFC 7518 `kty` identifier.
	pub const fn as_str(self) -> &'static str {
		match self {
			KeyFamily::Rsa => "RSA",
			KeyFamily::Ec => "EC",
			KeyFamily::Oct => "oct",
		}
	}
}
impl Display for KeyFamily {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// JWS signing algorithms accepted for ID token signing keys.
///
/// Names parse case-insensitively and always serialize in their uppercase RFC 7518 form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum KeyAlgorithm {
	/// RSASSA-PKCS1-v1_5 using SHA-256.
	Rs256,
	/// RSASSA-PKCS1-v1_5 using SHA-384.
	Rs384,
	/// RSASSA-PKCS1-v1_5 using SHA-512.
	Rs512,
	/// RSASSA-PSS using SHA-256.
	Ps256,
	/// RSASSA-PSS using SHA-384.
	Ps384,
	/// RSASSA-PSS using SHA-512.
	Ps512,
	/// ECDSA using P-256 and SHA-256.
	Es256,
	/// ECDSA using P-384 and SHA-384.
	Es384,
	/// ECDSA using P-521 and SHA-512.
	Es512,
	/// HMAC using SHA-256.
	Hs256,
	/// HMAC using SHA-384.
	Hs384,
	/// HMAC using SHA-512.
	Hs512,
}
impl KeyAlgorithm {
	/// Returns the RFC 7518 `alg` identifier.
	pub const fn as_str(self) -> &'static str {
		match self {
			KeyAlgorithm::Rs256 => "RS256",
			KeyAlgorithm::Rs384 => "RS384",
			KeyAlgorithm::Rs512 => "RS512",
			KeyAlgorithm::Ps256 => "PS256",
			KeyAlgorithm::Ps384 => "PS384",
			KeyAlgorithm::Ps512 => "PS512",
			KeyAlgorithm::Es256 => "ES256",
			KeyAlgorithm::Es384 => "ES384",
			KeyAlgorithm::Es512 => "ES512",
			KeyAlgorithm::Hs256 => "HS256",
			KeyAlgorithm::Hs384 => "HS384",
			KeyAlgorithm::Hs512 => "HS512",
		}
	}

	/// Key family the algorithm signs with.
	pub const fn family(self) -> KeyFamily {
		match self {
			KeyAlgorithm::Rs256
			| KeyAlgorithm::Rs384
			| KeyAlgorithm::Rs512
			| KeyAlgorithm::Ps256
			| KeyAlgorithm::Ps384
			| KeyAlgorithm::Ps512 => KeyFamily::Rsa,
			KeyAlgorithm::Es256 | KeyAlgorithm::Es384 | KeyAlgorithm::Es512 => KeyFamily::Ec,
			KeyAlgorithm::Hs256 | KeyAlgorithm::Hs384 | KeyAlgorithm::Hs512 => KeyFamily::Oct,
		}
	}
}
impl Display for KeyAlgorithm {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for KeyAlgorithm {
	type Err = KeyError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let alg = match s.to_ascii_uppercase().as_str() {
			"RS256" => KeyAlgorithm::Rs256,
			"RS384" => KeyAlgorithm::Rs384,
			"RS512" => KeyAlgorithm::Rs512,
			"PS256" => KeyAlgorithm::Ps256,
			"PS384" => KeyAlgorithm::Ps384,
			"PS512" => KeyAlgorithm::Ps512,
			"ES256" => KeyAlgorithm::Es256,
			"ES384" => KeyAlgorithm::Es384,
			"ES512" => KeyAlgorithm::Es512,
			"HS256" => KeyAlgorithm::Hs256,
			"HS384" => KeyAlgorithm::Hs384,
			"HS512" => KeyAlgorithm::Hs512,
			_ => return Err(KeyError::UnsupportedAlgorithm { alg: s.to_owned() }),
		};

		Ok(alg)
	}
}
impl TryFrom<String> for KeyAlgorithm {
	type Error = KeyError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}
impl From<KeyAlgorithm> for String {
	fn from(value: KeyAlgorithm) -> Self {
		value.as_str().to_owned()
	}
}

/// NIST curves supported for EC signing keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EcCurve {
	/// NIST P-256 (secp256r1).
	#[serde(rename = "P-256")]
	P256,
	/// NIST P-384 (secp384r1).
	#[serde(rename = "P-384")]
	P384,
	/// NIST P-521 (secp521r1).
	#[serde(rename = "P-521")]
	P521,
}
impl EcCurve {
	/// Returns the RFC 7518 `crv` identifier.
	pub const fn as_str(self) -> &'static str {
		match self {
			EcCurve::P256 => "P-256",
			EcCurve::P384 => "P-384",
			EcCurve::P521 => "P-521",
		}
	}

	/// Byte length of each affine coordinate.
	pub const fn coordinate_len(self) -> usize {
		match self {
			EcCurve::P256 => 32,
			EcCurve::P384 => 48,
			EcCurve::P521 => 66,
		}
	}

	/// The only ECDSA algorithm defined for the curve.
	pub const fn algorithm(self) -> KeyAlgorithm {
		match self {
			EcCurve::P256 => KeyAlgorithm::Es256,
			EcCurve::P384 => KeyAlgorithm::Es384,
			EcCurve::P521 => KeyAlgorithm::Es512,
		}
	}
}
impl Display for EcCurve {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for EcCurve {
	type Err = KeyError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"P-256" => Ok(EcCurve::P256),
			"P-384" => Ok(EcCurve::P384),
			"P-521" => Ok(EcCurve::P521),
			_ => Err(KeyError::UnsupportedCurve { crv: s.to_owned() }),
		}
	}
}

/// RSA public components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaKey {
	n: Vec<u8>,
	e: Vec<u8>,
	kid: Option<KeyId>,
	alg: Option<KeyAlgorithm>,
}
impl RsaKey {
	/// Builds a key from big-endian modulus and exponent bytes; leading zero bytes are dropped.
	pub fn from_components(
		n: impl Into<Vec<u8>>,
		e: impl Into<Vec<u8>>,
	) -> Result<Self, KeyError> {
		let n = strip_leading_zeros("n", n.into())?;
		let e = strip_leading_zeros("e", e.into())?;

		Ok(Self { n, e, kid: None, alg: None })
	}

	/// Big-endian modulus bytes.
	pub fn modulus(&self) -> &[u8] {
		&self.n
	}

	/// Big-endian public exponent bytes.
	pub fn exponent(&self) -> &[u8] {
		&self.e
	}
}

/// EC public point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcKey {
	crv: EcCurve,
	x: Vec<u8>,
	y: Vec<u8>,
	kid: Option<KeyId>,
	alg: Option<KeyAlgorithm>,
}
impl EcKey {
	/// Builds a key from fixed-length big-endian affine coordinates.
	pub fn from_coordinates(
		crv: EcCurve,
		x: impl Into<Vec<u8>>,
		y: impl Into<Vec<u8>>,
	) -> Result<Self, KeyError> {
		let x = check_coordinate(crv, "x", x.into())?;
		let y = check_coordinate(crv, "y", y.into())?;

		Ok(Self { crv, x, y, kid: None, alg: None })
	}

	/// Curve of the key.
	pub fn curve(&self) -> EcCurve {
		self.crv
	}

	/// Affine x coordinate.
	pub fn x(&self) -> &[u8] {
		&self.x
	}

	/// Affine y coordinate.
	pub fn y(&self) -> &[u8] {
		&self.y
	}
}

/// Shared HMAC secret; only its identifiers are ever published.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymmetricKey {
	k: KeySecret,
	kid: Option<KeyId>,
	alg: Option<KeyAlgorithm>,
}
impl SymmetricKey {
	/// Wraps the raw secret bytes.
	pub fn from_secret(k: impl Into<Vec<u8>>) -> Result<Self, KeyError> {
		let k = KeySecret::new(k);

		if k.is_empty() {
			return Err(KeyError::EmptyComponent { component: "k" });
		}

		Ok(Self { k, kid: None, alg: None })
	}

	/// Secret bytes. Callers must avoid logging them.
	pub fn secret(&self) -> &KeySecret {
		&self.k
	}
}

/// Signing key configured for the provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyMaterial {
	/// RSA key.
	Rsa(RsaKey),
	/// Elliptic curve key.
	Ec(EcKey),
	/// Symmetric HMAC key.
	Symmetric(SymmetricKey),
}
impl KeyMaterial {
	/// Key family of the variant.
	pub fn family(&self) -> KeyFamily {
		match self {
			KeyMaterial::Rsa(_) => KeyFamily::Rsa,
			KeyMaterial::Ec(_) => KeyFamily::Ec,
			KeyMaterial::Symmetric(_) => KeyFamily::Oct,
		}
	}

	/// Attaches an explicit key identifier.
	pub fn with_kid(mut self, kid: KeyId) -> Self {
		*self.kid_slot() = Some(kid);

		self
	}

	/// Attaches an explicit signing algorithm after checking it fits the key.
	pub fn with_algorithm(mut self, alg: KeyAlgorithm) -> Result<Self, KeyError> {
		self.ensure_compatible(alg)?;

		*self.alg_slot() = Some(alg);

		Ok(self)
	}

	/// Returns the explicit identifier or, when unset, the RFC 7638 thumbprint.
	pub fn kid(&self) -> KeyId {
		let explicit = match self {
			KeyMaterial::Rsa(key) => key.kid.as_ref(),
			KeyMaterial::Ec(key) => key.kid.as_ref(),
			KeyMaterial::Symmetric(key) => key.kid.as_ref(),
		};

		explicit.cloned().unwrap_or_else(|| jwk::thumbprint(self))
	}

	/// Algorithm set on the key, if any.
	pub fn explicit_algorithm(&self) -> Option<KeyAlgorithm> {
		match self {
			KeyMaterial::Rsa(key) => key.alg,
			KeyMaterial::Ec(key) => key.alg,
			KeyMaterial::Symmetric(key) => key.alg,
		}
	}

	/// Algorithm the key signs with: the explicit one, else the family default.
	pub fn algorithm(&self) -> KeyAlgorithm {
		self.explicit_algorithm().unwrap_or(match self {
			KeyMaterial::Rsa(_) => KeyAlgorithm::Rs256,
			KeyMaterial::Ec(key) => key.crv.algorithm(),
			KeyMaterial::Symmetric(_) => KeyAlgorithm::Hs256,
		})
	}

	/// Fails when `alg` cannot sign with this key.
	pub fn ensure_compatible(&self, alg: KeyAlgorithm) -> Result<(), KeyError> {
		let compatible = match self {
			KeyMaterial::Ec(key) => key.crv.algorithm() == alg,
			_ => alg.family() == self.family(),
		};

		if compatible {
			Ok(())
		} else {
			Err(KeyError::AlgorithmMismatch { alg: alg.as_str(), kty: self.family().as_str() })
		}
	}

	fn kid_slot(&mut self) -> &mut Option<KeyId> {
		match self {
			KeyMaterial::Rsa(key) => &mut key.kid,
			KeyMaterial::Ec(key) => &mut key.kid,
			KeyMaterial::Symmetric(key) => &mut key.kid,
		}
	}

	fn alg_slot(&mut self) -> &mut Option<KeyAlgorithm> {
		match self {
			KeyMaterial::Rsa(key) => &mut key.alg,
			KeyMaterial::Ec(key) => &mut key.alg,
			KeyMaterial::Symmetric(key) => &mut key.alg,
		}
	}
}
impl From<RsaKey> for KeyMaterial {
	fn from(value: RsaKey) -> Self {
		Self::Rsa(value)
	}
}
impl From<EcKey> for KeyMaterial {
	fn from(value: EcKey) -> Self {
		Self::Ec(value)
	}
}
impl From<SymmetricKey> for KeyMaterial {
	fn from(value: SymmetricKey) -> Self {
		Self::Symmetric(value)
	}
}

/// Decodes a base64url component, accepting padded or unpadded input.
pub(crate) fn decode_component(component: &'static str, value: &str) -> Result<Vec<u8>, KeyError> {
	BASE64_URL.decode(value).map_err(|source| KeyError::InvalidEncoding { component, source })
}

fn strip_leading_zeros(component: &'static str, bytes: Vec<u8>) -> Result<Vec<u8>, KeyError> {
	let start = bytes.iter().position(|b| *b != 0).ok_or(KeyError::EmptyComponent { component })?;

	Ok(bytes[start..].to_vec())
}

fn check_coordinate(
	crv: EcCurve,
	component: &'static str,
	bytes: Vec<u8>,
) -> Result<Vec<u8>, KeyError> {
	if bytes.is_empty() {
		return Err(KeyError::EmptyComponent { component });
	}
	if bytes.len() != crv.coordinate_len() {
		return Err(KeyError::CoordinateLength {
			component,
			curve: crv.as_str(),
			expected: crv.coordinate_len(),
			actual: bytes.len(),
		});
	}

	Ok(bytes)
}
