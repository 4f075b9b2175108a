//! RSA key loading from PEM documents.
//!
//! Private keys are reduced to their public components right after decoding; the
//! private exponent and primes are dropped with the decoded key.

// crates.io
use rsa::{
	RsaPrivateKey, RsaPublicKey,
	pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey},
	pkcs8::{DecodePrivateKey, DecodePublicKey},
	traits::PublicKeyParts,
};
// self
use crate::{_prelude::*, error::KeyError, key::RsaKey};

const PKCS1_PRIVATE_LABEL: &str = "BEGIN RSA PRIVATE KEY";
const PKCS1_PUBLIC_LABEL: &str = "BEGIN RSA PUBLIC KEY";
const PKCS8_PRIVATE_LABEL: &str = "BEGIN PRIVATE KEY";
const SPKI_PUBLIC_LABEL: &str = "BEGIN PUBLIC KEY";

impl RsaKey {
	/// Loads an RSA key from a PKCS#8/PKCS#1 private key or an SPKI/PKCS#1 public key.
	pub fn from_pem(pem: &str) -> Result<Self, KeyError> {
		let public = if pem.contains(PKCS8_PRIVATE_LABEL) {
			RsaPrivateKey::from_pkcs8_pem(pem).map_err(KeyError::pem)?.to_public_key()
		} else if pem.contains(PKCS1_PRIVATE_LABEL) {
			RsaPrivateKey::from_pkcs1_pem(pem).map_err(KeyError::pem)?.to_public_key()
		} else if pem.contains(SPKI_PUBLIC_LABEL) {
			RsaPublicKey::from_public_key_pem(pem).map_err(KeyError::pem)?
		} else if pem.contains(PKCS1_PUBLIC_LABEL) {
			RsaPublicKey::from_pkcs1_pem(pem).map_err(KeyError::pem)?
		} else {
			return Err(KeyError::pem(UnsupportedPemLabel));
		};

		Self::from_components(public.n().to_bytes_be(), public.e().to_bytes_be())
	}
}

#[derive(Debug, ThisError)]
#[error("PEM label is not an RSA private or public key.")]
struct UnsupportedPemLabel;
