//! Claim definitions registered with the provider.

// self
use crate::{_prelude::*, auth::ClaimName};

/// Registered ID token claims every provider emits, advertised ahead of custom claims.
pub const STANDARD_CLAIMS: [&str; 5] = ["iss", "sub", "aud", "exp", "iat"];

/// Response in which a claim value is delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimResponse {
	/// Claim is embedded in the ID token.
	IdToken,
	/// Claim is returned by the userinfo endpoint.
	UserInfo,
}

/// A claim the provider can release about the resource owner.
///
/// Discovery only publishes the name; resolving values is the token issuer's job.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimDefinition {
	/// Claim name published in `claims_supported`.
	pub name: ClaimName,
	/// Scope that must be granted before the claim is released.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub scope: Option<String>,
	/// Responses carrying the claim.
	#[serde(default = "ClaimDefinition::default_responses")]
	pub response: Vec<ClaimResponse>,
}
impl ClaimDefinition {
	/// Creates a claim released through the userinfo endpoint.
	pub fn new(name: ClaimName) -> Self {
		Self { name, scope: None, response: Self::default_responses() }
	}

	/// Requires the provided scope before the claim is released.
	pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
		self.scope = Some(scope.into());

		self
	}

	/// Overrides the responses carrying the claim.
	pub fn with_responses<I>(mut self, responses: I) -> Self
	where
		I: IntoIterator<Item = ClaimResponse>,
	{
		self.response = responses.into_iter().collect();

		self
	}

	/// Returns true if the claim is delivered in the provided response.
	pub fn delivered_in(&self, response: ClaimResponse) -> bool {
		self.response.contains(&response)
	}

	fn default_responses() -> Vec<ClaimResponse> {
		vec![ClaimResponse::UserInfo]
	}
}
