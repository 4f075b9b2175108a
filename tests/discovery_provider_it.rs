// crates.io
use serde_json::{Value, json};
// self
use oidc_discovery::{
	auth::{ClaimDefinition, ClaimName, ClaimResponse},
	discovery::Discovery,
	key::{KeyAlgorithm, KeyMaterial, RsaKey},
	provider::{
		GrantType, Protocol, ProviderConfiguration, ProviderConfigurationBuilder, RequestContext,
	},
	url::Url,
};

fn rsa_key() -> KeyMaterial {
	let mut n = vec![0xA7_u8; 256];

	n[255] = 0x01;

	RsaKey::from_components(n, vec![1_u8, 0, 1])
		.expect("RSA fixture key should be valid.")
		.into()
}

fn claim(name: &str) -> ClaimDefinition {
	ClaimDefinition::new(ClaimName::new(name).expect("Claim fixture name should be valid."))
}

fn builder() -> ProviderConfigurationBuilder {
	ProviderConfiguration::builder("dummy").signing_key(rsa_key()).claims([
		claim("name"),
		claim("variable_name"),
		claim("created_at"),
		claim("updated_at"),
		claim("token_id"),
		claim("both_responses").with_responses([ClaimResponse::IdToken, ClaimResponse::UserInfo]),
		claim("id_token_response").with_responses([ClaimResponse::IdToken]),
		claim("user_info_response"),
	])
}

fn request() -> RequestContext {
	RequestContext::new(Protocol::Http, "test.host").expect("Request fixture should be valid.")
}

fn metadata_json(builder: ProviderConfigurationBuilder) -> Value {
	let discovery = Discovery::new(builder.build().expect("Configuration fixture should build."));
	let metadata = discovery.provider_metadata(&request()).expect("Metadata should assemble.");

	serde_json::to_value(metadata).expect("Metadata should serialize.")
}

#[test]
fn provider_metadata_matches_reference_document() {
	let expected = json!({
		"issuer": "dummy",
		"authorization_endpoint": "http://test.host/oauth/authorize",
		"token_endpoint": "http://test.host/oauth/token",
		"revocation_endpoint": "http://test.host/oauth/revoke",
		"introspection_endpoint": "http://test.host/oauth/introspect",
		"userinfo_endpoint": "http://test.host/oauth/userinfo",
		"jwks_uri": "http://test.host/oauth/discovery/keys",
		"scopes_supported": ["openid"],
		"response_types_supported": ["code", "token", "id_token", "id_token token"],
		"response_modes_supported": ["query", "fragment"],
		"grant_types_supported": ["authorization_code", "client_credentials"],
		"token_endpoint_auth_methods_supported": ["client_secret_basic", "client_secret_post"],
		"subject_types_supported": ["public"],
		"id_token_signing_alg_values_supported": ["RS256"],
		"claim_types_supported": ["normal"],
		"claims_supported": [
			"iss",
			"sub",
			"aud",
			"exp",
			"iat",
			"name",
			"variable_name",
			"created_at",
			"updated_at",
			"token_id",
			"both_responses",
			"id_token_response",
			"user_info_response"
		],
	});

	assert_eq!(metadata_json(builder()), expected);
}

#[test]
fn refresh_token_is_appended_to_grant_types() {
	let data = metadata_json(builder().use_refresh_token(true));

	assert_eq!(
		data["grant_types_supported"],
		json!(["authorization_code", "client_credentials", "refresh_token"])
	);
}

#[test]
fn grant_types_follow_canonical_order() {
	let data = metadata_json(builder().grant_flows([
		GrantType::ClientCredentials,
		GrantType::Password,
		GrantType::Implicit,
		GrantType::AuthorizationCode,
	]));

	assert_eq!(
		data["grant_types_supported"],
		json!(["authorization_code", "implicit", "password", "client_credentials"])
	);
}

#[test]
fn protocol_option_changes_only_the_scheme() {
	let data = metadata_json(builder().protocol(Protocol::Custom("testing".into())));

	for (field, path) in [
		("authorization_endpoint", "/oauth/authorize"),
		("token_endpoint", "/oauth/token"),
		("revocation_endpoint", "/oauth/revoke"),
		("introspection_endpoint", "/oauth/introspect"),
		("userinfo_endpoint", "/oauth/userinfo"),
		("jwks_uri", "/oauth/discovery/keys"),
	] {
		assert_eq!(
			data[field],
			format!("testing://test.host{path}"),
			"Field {field} should use the testing scheme."
		);
	}
}

#[test]
fn protocol_closure_sees_the_request() {
	let resolver = |request: &RequestContext| {
		if request.host() == "test.host" { Protocol::Https } else { Protocol::Http }
	};
	let data = metadata_json(builder().protocol(resolver));

	assert_eq!(data["authorization_endpoint"], "https://test.host/oauth/authorize");
}

#[test]
fn end_session_endpoint_is_omitted_unless_configured() {
	let without = metadata_json(builder());
	let logout = Url::parse("http://test.host/logout").expect("Logout URL should parse.");
	let with = metadata_json(builder().end_session_endpoint(logout));

	assert!(without.get("end_session_endpoint").is_none());
	assert_eq!(with["end_session_endpoint"], "http://test.host/logout");
}

#[test]
fn signing_algorithm_setting_applies_to_keys_without_alg() {
	let data = metadata_json(builder().signing_algorithm(KeyAlgorithm::Rs512));

	assert_eq!(data["id_token_signing_alg_values_supported"], json!(["RS512"]));
}

#[test]
fn repeated_requests_are_byte_identical() {
	let discovery = Discovery::new(builder().build().expect("Configuration fixture should build."));
	let first = serde_json::to_string(
		&discovery.provider_metadata(&request()).expect("Metadata should assemble."),
	)
	.expect("Metadata should serialize.");
	let second = serde_json::to_string(
		&discovery.provider_metadata(&request()).expect("Metadata should assemble."),
	)
	.expect("Metadata should serialize.");

	assert_eq!(first, second);
}
