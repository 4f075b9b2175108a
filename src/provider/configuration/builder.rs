// std
use std::iter::IntoIterator;
// self
use crate::{
	_prelude::*,
	auth::{ClaimDefinition, ScopeList},
	error::ConfigError,
	key::{KeyAlgorithm, KeyMaterial},
	provider::{
		EndpointPaths, GrantType, ProtocolResolver, ProviderConfiguration, RequestProtocol,
		SupportedGrants, WebFingerHref,
	},
};

/// Builder for [`ProviderConfiguration`] values.
pub struct ProviderConfigurationBuilder {
	/// Issuer identifier.
	pub issuer: String,
	/// Signing keys in publication order.
	pub signing_keys: Vec<KeyMaterial>,
	/// Algorithm applied to keys that do not carry their own.
	pub signing_algorithm: Option<KeyAlgorithm>,
	/// Scheme resolver; defaults to [`RequestProtocol`].
	pub protocol: Arc<dyn ProtocolResolver>,
	/// Enabled grant flows.
	pub grant_flows: SupportedGrants,
	/// Refresh token feature flag.
	pub use_refresh_token: bool,
	/// Optional end-session endpoint.
	pub end_session_endpoint: Option<Url>,
	/// Claim definitions.
	pub claims: Vec<ClaimDefinition>,
	/// Supported scopes.
	pub scopes: ScopeList,
	/// Endpoint paths.
	pub paths: EndpointPaths,
	/// WebFinger link source.
	pub webfinger_href: WebFingerHref,
}
impl ProviderConfigurationBuilder {
	/// Creates a new builder seeded with the provided issuer.
	pub fn new(issuer: impl Into<String>) -> Self {
		Self {
			issuer: issuer.into(),
			signing_keys: Vec::new(),
			signing_algorithm: None,
			protocol: Arc::new(RequestProtocol),
			grant_flows: SupportedGrants::default(),
			use_refresh_token: false,
			end_session_endpoint: None,
			claims: Vec::new(),
			scopes: ScopeList::default(),
			paths: EndpointPaths::default(),
			webfinger_href: WebFingerHref::default(),
		}
	}

	/// Appends a signing key.
	pub fn signing_key(mut self, key: impl Into<KeyMaterial>) -> Self {
		self.signing_keys.push(key.into());

		self
	}

	/// Appends multiple signing keys, keeping their order.
	pub fn signing_keys<I>(mut self, keys: I) -> Self
	where
		I: IntoIterator<Item = KeyMaterial>,
	{
		self.signing_keys.extend(keys);

		self
	}

	/// Sets the algorithm for keys without an explicit `alg`.
	pub fn signing_algorithm(mut self, alg: KeyAlgorithm) -> Self {
		self.signing_algorithm = Some(alg);

		self
	}

	/// Overrides the protocol resolver.
	pub fn protocol(mut self, resolver: impl 'static + ProtocolResolver) -> Self {
		self.protocol = Arc::new(resolver);

		self
	}

	/// Enables a single grant flow on top of the current set.
	pub fn grant_flow(mut self, grant: GrantType) -> Self {
		self.grant_flows = self.grant_flows.enable(grant);

		self
	}

	/// Replaces the enabled grant flows with exactly the provided ones.
	pub fn grant_flows<I>(mut self, grants: I) -> Self
	where
		I: IntoIterator<Item = GrantType>,
	{
		self.grant_flows = grants.into_iter().fold(SupportedGrants::none(), SupportedGrants::enable);

		self
	}

	/// Toggles refresh token issuance.
	pub fn use_refresh_token(mut self, enabled: bool) -> Self {
		self.use_refresh_token = enabled;

		self
	}

	/// Sets the end-session endpoint.
	pub fn end_session_endpoint(mut self, url: Url) -> Self {
		self.end_session_endpoint = Some(url);

		self
	}

	/// Appends a claim definition.
	pub fn claim(mut self, claim: ClaimDefinition) -> Self {
		self.claims.push(claim);

		self
	}

	/// Appends multiple claim definitions.
	pub fn claims<I>(mut self, claims: I) -> Self
	where
		I: IntoIterator<Item = ClaimDefinition>,
	{
		self.claims.extend(claims);

		self
	}

	/// Overrides the supported scopes.
	pub fn scopes(mut self, scopes: ScopeList) -> Self {
		self.scopes = scopes;

		self
	}

	/// Overrides the endpoint paths.
	pub fn paths(mut self, paths: EndpointPaths) -> Self {
		self.paths = paths;

		self
	}

	/// Overrides the WebFinger link source.
	pub fn webfinger_href(mut self, href: WebFingerHref) -> Self {
		self.webfinger_href = href;

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ProviderConfiguration> {
		if self.issuer.trim().is_empty() {
			return Err(ConfigError::MissingIssuer.into());
		}
		if self.signing_keys.is_empty() {
			return Err(ConfigError::NoSigningKeys.into());
		}
		if self.grant_flows.is_empty() {
			return Err(ConfigError::NoSupportedGrants.into());
		}

		validate_claims(&self.claims)?;
		self.paths.validate()?;

		let signing_keys = apply_signing_algorithm(self.signing_keys, self.signing_algorithm)?;

		Ok(ProviderConfiguration {
			issuer: self.issuer,
			signing_keys,
			protocol: self.protocol,
			grant_flows: self.grant_flows,
			use_refresh_token: self.use_refresh_token,
			end_session_endpoint: self.end_session_endpoint,
			claims: self.claims,
			scopes: self.scopes,
			paths: self.paths,
			webfinger_href: self.webfinger_href,
		})
	}
}
impl Debug for ProviderConfigurationBuilder {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ProviderConfigurationBuilder")
			.field("issuer", &self.issuer)
			.field("signing_keys", &self.signing_keys.len())
			.field("signing_algorithm", &self.signing_algorithm)
			.finish_non_exhaustive()
	}
}

fn validate_claims(claims: &[ClaimDefinition]) -> Result<(), ConfigError> {
	let mut seen = HashSet::with_capacity(claims.len());

	for claim in claims {
		if !seen.insert(claim.name.as_str()) {
			return Err(ConfigError::DuplicateClaim { name: claim.name.to_string() });
		}
	}

	Ok(())
}

fn apply_signing_algorithm(
	keys: Vec<KeyMaterial>,
	alg: Option<KeyAlgorithm>,
) -> Result<Vec<KeyMaterial>> {
	let Some(alg) = alg else {
		return Ok(keys);
	};

	keys.into_iter()
		.map(|key| match key.explicit_algorithm() {
			Some(_) => Ok(key),
			None => key.with_algorithm(alg).map_err(Error::from),
		})
		.collect()
}
