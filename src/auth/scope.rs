//! Ordered scope list advertised through `scopes_supported`.

// std
use std::slice::Iter;
// crates.io
use serde::{Deserializer, Serializer, de::Error as DeError, ser::SerializeSeq};
// self
use crate::_prelude::*;

/// Scope every OpenID Connect provider must support.
pub const OPENID_SCOPE: &str = "openid";

/// Errors emitted when validating scopes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ScopeValidationError {
	/// Empty scope entries are not allowed.
	#[error("Scope entries cannot be empty.")]
	Empty,
	/// Scopes cannot contain embedded whitespace characters.
	#[error("Scope contains whitespace: {scope}.")]
	ContainsWhitespace {
		/// The offending scope string.
		scope: String,
	},
}

/// Deduplicated scope list that keeps configuration order and always carries `openid`.
///
/// Unlike token scope sets, discovery scopes are published in the order the server
/// registered them, so the list is never sorted. `openid` is inserted at the front
/// when the configuration omits it.
#[derive(Clone, PartialEq, Eq)]
pub struct ScopeList(Vec<String>);
impl ScopeList {
	/// Builds a validated list from any iterator.
	pub fn new<I, S>(scopes: I) -> Result<Self, ScopeValidationError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut list = Vec::new();

		for scope in scopes {
			let owned: String = scope.into();

			if owned.is_empty() {
				return Err(ScopeValidationError::Empty);
			}
			if owned.chars().any(char::is_whitespace) {
				return Err(ScopeValidationError::ContainsWhitespace { scope: owned });
			}
			if !list.contains(&owned) {
				list.push(owned);
			}
		}

		if !list.iter().any(|scope| scope == OPENID_SCOPE) {
			list.insert(0, OPENID_SCOPE.to_owned());
		}

		Ok(Self(list))
	}

	/// Number of distinct scopes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Always false; the list carries `openid` at minimum.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns true if the list contains the provided scope.
	pub fn contains(&self, scope: &str) -> bool {
		self.0.iter().any(|candidate| candidate == scope)
	}

	/// Iterator over scopes in configuration order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(|s| s.as_str())
	}

	/// Returns the underlying slice of scope strings.
	pub fn as_slice(&self) -> &[String] {
		&self.0
	}
}
impl Default for ScopeList {
	fn default() -> Self {
		Self(vec![OPENID_SCOPE.to_owned()])
	}
}
impl Debug for ScopeList {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ScopeList").field(&self.0).finish()
	}
}
impl Display for ScopeList {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0.join(" "))
	}
}

/// Iterator over scope strings.
pub struct ScopeIter<'a> {
	inner: Iter<'a, String>,
}
impl<'a> Iterator for ScopeIter<'a> {
	type Item = &'a str;

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(|s| s.as_str())
	}
}
impl<'a> IntoIterator for &'a ScopeList {
	type IntoIter = ScopeIter<'a>;
	type Item = &'a str;

	fn into_iter(self) -> Self::IntoIter {
		ScopeIter { inner: self.0.iter() }
	}
}
impl FromStr for ScopeList {
	type Err = ScopeValidationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.is_empty() {
			return Ok(Self::default());
		}
		if s.chars().all(char::is_whitespace) {
			return Err(ScopeValidationError::Empty);
		}

		Self::new(s.split_whitespace())
	}
}
impl Serialize for ScopeList {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut seq = serializer.serialize_seq(Some(self.0.len()))?;

		for scope in self.0.iter() {
			seq.serialize_element(scope)?;
		}

		seq.end()
	}
}
impl<'de> Deserialize<'de> for ScopeList {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let values = <Vec<String>>::deserialize(deserializer)?;

		ScopeList::new(values).map_err(DeError::custom)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn scopes_keep_order_and_deduplicate() {
		let scopes = ScopeList::new(["openid", "profile", "email", "profile"])
			.expect("Scope list fixture should be valid.");

		assert_eq!(scopes.iter().collect::<Vec<_>>(), vec!["openid", "profile", "email"]);
		assert_eq!(scopes.to_string(), "openid profile email");
	}

	#[test]
	fn openid_is_inserted_when_missing() {
		let scopes = ScopeList::new(["profile"]).expect("Scope list fixture should be valid.");

		assert_eq!(scopes.as_slice(), ["openid".to_string(), "profile".to_string()]);
		assert_eq!(ScopeList::default().as_slice(), ["openid".to_string()]);
		assert!(!ScopeList::default().is_empty());
	}

	#[test]
	fn scopes_reject_whitespace_and_empty_entries() {
		let err = ScopeList::new([" profile "]).expect_err("Padded scopes must be rejected.");

		assert!(matches!(err, ScopeValidationError::ContainsWhitespace { .. }));
		assert_eq!(ScopeList::new([""]), Err(ScopeValidationError::Empty));
		assert!(ScopeList::from_str("").is_ok(), "Empty string represents the default list.");
		assert!(ScopeList::from_str("   ").is_err(), "Whitespace-only input must be rejected.");
	}

	#[test]
	fn serde_uses_plain_arrays() {
		let scopes: ScopeList = serde_json::from_str("[\"email\",\"openid\"]")
			.expect("Scope array should deserialize.");

		assert_eq!(
			serde_json::to_string(&scopes).expect("Scope list should serialize."),
			"[\"email\",\"openid\"]"
		);
		assert!(serde_json::from_str::<ScopeList>("[\"bad scope\"]").is_err());
	}
}
