//! Provider configuration data structures shared by every discovery endpoint.
//!
//! The module exposes the validated configuration, its builder, grant helpers, and the
//! endpoint paths owned by the OAuth 2.0 server.

/// Builder API for assembling provider configurations.
pub mod builder;
/// Grant helpers wired into provider configurations.
pub mod grant;
/// Endpoint path table.
pub mod paths;

pub use builder::*;
pub use grant::*;
pub use paths::*;

// self
use crate::{
	_prelude::*,
	auth::{ClaimDefinition, STANDARD_CLAIMS, ScopeList},
	key::{KeyAlgorithm, KeyMaterial},
	provider::ProtocolResolver,
};

/// Source of the `href` published in WebFinger issuer links.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebFingerHref {
	#[default]
	/// The configured issuer.
	Issuer,
	/// Root URL of the current request, rendered with the resolved protocol.
	RequestRoot,
}

/// Immutable provider configuration consumed by discovery endpoints.
///
/// Values are produced by [`ProviderConfigurationBuilder::build`], which enforces the
/// invariants documented on each field. Mutating a published configuration is not
/// supported; swap a new one into the [`ConfigurationRegistry`](crate::provider::ConfigurationRegistry)
/// instead.
#[derive(Clone)]
pub struct ProviderConfiguration {
	/// Issuer identifier; never empty.
	pub issuer: String,
	/// Signing keys in publication order; the first key signs ID tokens.
	pub signing_keys: Vec<KeyMaterial>,
	/// Scheme resolver applied to every rendered URL.
	pub protocol: Arc<dyn ProtocolResolver>,
	/// Grant flows enabled on the OAuth 2.0 server.
	pub grant_flows: SupportedGrants,
	/// Whether refresh tokens are issued.
	pub use_refresh_token: bool,
	/// RP-initiated logout endpoint, published only when set.
	pub end_session_endpoint: Option<Url>,
	/// Claims the provider can release, with unique names.
	pub claims: Vec<ClaimDefinition>,
	/// Scopes the provider supports; always includes `openid`.
	pub scopes: ScopeList,
	/// Relative endpoint paths.
	pub paths: EndpointPaths,
	/// WebFinger link source.
	pub webfinger_href: WebFingerHref,
}
impl ProviderConfiguration {
	/// Creates a new builder for the provided issuer.
	pub fn builder(issuer: impl Into<String>) -> ProviderConfigurationBuilder {
		ProviderConfigurationBuilder::new(issuer)
	}

	/// Key currently used to sign ID tokens.
	pub fn signing_key(&self) -> Option<&KeyMaterial> {
		self.signing_keys.first()
	}

	/// Checks whether a grant type is advertised.
	pub fn supports(&self, grant: GrantType) -> bool {
		match grant {
			GrantType::RefreshToken => self.use_refresh_token,
			_ => self.grant_flows.supports(grant),
		}
	}

	/// Grant types in advertised order.
	pub fn grant_types(&self) -> Vec<GrantType> {
		self.grant_flows.grant_types(self.use_refresh_token)
	}

	/// Distinct signing algorithms of the configured keys, in key order.
	pub fn signing_algorithms(&self) -> Vec<KeyAlgorithm> {
		let mut algorithms = Vec::with_capacity(self.signing_keys.len());

		for alg in self.signing_keys.iter().map(KeyMaterial::algorithm) {
			if !algorithms.contains(&alg) {
				algorithms.push(alg);
			}
		}

		algorithms
	}

	/// Standard ID token claims followed by configured claim names, without repeats.
	pub fn claim_names(&self) -> Vec<&str> {
		let mut names = STANDARD_CLAIMS.to_vec();

		for claim in &self.claims {
			if !names.contains(&claim.name.as_str()) {
				names.push(claim.name.as_str());
			}
		}

		names
	}
}
impl Debug for ProviderConfiguration {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ProviderConfiguration")
			.field("issuer", &self.issuer)
			.field("signing_keys", &self.signing_keys)
			.field("grant_flows", &self.grant_flows)
			.field("use_refresh_token", &self.use_refresh_token)
			.field("end_session_endpoint", &self.end_session_endpoint)
			.field("claims", &self.claims)
			.field("scopes", &self.scopes)
			.field("paths", &self.paths)
			.field("webfinger_href", &self.webfinger_href)
			.finish_non_exhaustive()
	}
}
