//! Secure key secret wrapper that redacts sensitive material.

// self
use crate::_prelude::*;

/// Redacted secret bytes keeping HMAC keys out of logs and serialized documents.
///
/// The type deliberately implements neither `Serialize` nor `Deserialize`.
#[derive(Clone, PartialEq, Eq)]
pub struct KeySecret(Vec<u8>);
impl KeySecret {
	/// Wraps new secret bytes.
	pub fn new(value: impl Into<Vec<u8>>) -> Self {
		Self(value.into())
	}

	/// Returns the raw secret. Callers must avoid logging it.
	pub fn expose(&self) -> &[u8] {
		&self.0
	}

	/// Number of secret bytes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when no secret bytes are present.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl Debug for KeySecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("KeySecret").field(&"<redacted>").finish()
	}
}
impl Display for KeySecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
