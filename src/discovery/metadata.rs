//! OpenID Provider Metadata assembly (OpenID Connect Discovery 1.0, section 3).

// self
use crate::{
	_prelude::*,
	auth::ScopeList,
	error::ConfigError,
	key::KeyAlgorithm,
	provider::{GrantType, Protocol, ProviderConfiguration, RequestContext},
};

/// Response types advertised by every provider.
pub const RESPONSE_TYPES_SUPPORTED: [&str; 4] = ["code", "token", "id_token", "id_token token"];
/// Response modes advertised by every provider.
pub const RESPONSE_MODES_SUPPORTED: [&str; 2] = ["query", "fragment"];
/// Client authentication methods accepted by the token endpoint.
pub const TOKEN_ENDPOINT_AUTH_METHODS_SUPPORTED: [&str; 2] =
	["client_secret_basic", "client_secret_post"];
/// Subject identifier types.
pub const SUBJECT_TYPES_SUPPORTED: [&str; 1] = ["public"];
/// Claim types.
pub const CLAIM_TYPES_SUPPORTED: [&str; 1] = ["normal"];

/// OpenID Provider Metadata document.
///
/// `end_session_endpoint` is omitted from the JSON when unset, never rendered as null.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderMetadata {
	/// Issuer identifier.
	pub issuer: String,
	/// Authorization endpoint.
	pub authorization_endpoint: Url,
	/// Token endpoint.
	pub token_endpoint: Url,
	/// Token revocation endpoint (RFC 7009).
	pub revocation_endpoint: Url,
	/// Token introspection endpoint (RFC 7662).
	pub introspection_endpoint: Url,
	/// Userinfo endpoint.
	pub userinfo_endpoint: Url,
	/// JWKS document location.
	pub jwks_uri: Url,
	/// RP-initiated logout endpoint.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub end_session_endpoint: Option<Url>,
	/// Supported scopes.
	pub scopes_supported: ScopeList,
	/// Supported response types.
	pub response_types_supported: Vec<String>,
	/// Supported response modes.
	pub response_modes_supported: Vec<String>,
	/// Grant types in advertised order.
	pub grant_types_supported: Vec<GrantType>,
	/// Token endpoint client authentication methods.
	pub token_endpoint_auth_methods_supported: Vec<String>,
	/// Subject identifier types.
	pub subject_types_supported: Vec<String>,
	/// Algorithms the provider signs ID tokens with.
	pub id_token_signing_alg_values_supported: Vec<KeyAlgorithm>,
	/// Claim types.
	pub claim_types_supported: Vec<String>,
	/// Claim names the provider can release.
	pub claims_supported: Vec<String>,
}

/// Assembles the metadata document for `request` from `config`.
///
/// Endpoint URLs are rendered against the request host with the scheme chosen by the
/// configured [`ProtocolResolver`](crate::provider::ProtocolResolver).
pub fn assemble(
	config: &ProviderConfiguration,
	request: &RequestContext,
) -> Result<ProviderMetadata> {
	let protocol = config.protocol.resolve(request);
	let paths = &config.paths;

	Ok(ProviderMetadata {
		issuer: config.issuer.clone(),
		authorization_endpoint: render(request, &protocol, "authorization", &paths.authorization)?,
		token_endpoint: render(request, &protocol, "token", &paths.token)?,
		revocation_endpoint: render(request, &protocol, "revocation", &paths.revocation)?,
		introspection_endpoint: render(request, &protocol, "introspection", &paths.introspection)?,
		userinfo_endpoint: render(request, &protocol, "userinfo", &paths.userinfo)?,
		jwks_uri: render(request, &protocol, "jwks", &paths.jwks)?,
		end_session_endpoint: config.end_session_endpoint.clone(),
		scopes_supported: config.scopes.clone(),
		response_types_supported: to_owned(&RESPONSE_TYPES_SUPPORTED),
		response_modes_supported: to_owned(&RESPONSE_MODES_SUPPORTED),
		grant_types_supported: config.grant_types(),
		token_endpoint_auth_methods_supported: to_owned(&TOKEN_ENDPOINT_AUTH_METHODS_SUPPORTED),
		subject_types_supported: to_owned(&SUBJECT_TYPES_SUPPORTED),
		id_token_signing_alg_values_supported: config.signing_algorithms(),
		claim_types_supported: to_owned(&CLAIM_TYPES_SUPPORTED),
		claims_supported: config.claim_names().into_iter().map(str::to_owned).collect(),
	})
}

fn render(
	request: &RequestContext,
	protocol: &Protocol,
	endpoint: &'static str,
	path: &str,
) -> Result<Url> {
	request
		.url(protocol, path)
		.map_err(|source| ConfigError::InvalidEndpoint { endpoint, source }.into())
}

fn to_owned(values: &[&str]) -> Vec<String> {
	values.iter().map(|value| (*value).to_owned()).collect()
}
