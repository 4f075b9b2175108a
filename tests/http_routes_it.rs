// crates.io
use serde_json::Value;
// self
use oidc_discovery::{
	discovery::Discovery,
	http::{DiscoveryRequest, JSON_CONTENT_TYPE},
	key::{KeyMaterial, RsaKey},
	provider::{EndpointPaths, ProviderConfiguration},
	url::Url,
};

fn discovery(paths: EndpointPaths) -> Discovery {
	let key: KeyMaterial = RsaKey::from_components(vec![0xE1_u8; 128], vec![1_u8, 0, 1])
		.expect("RSA fixture key should be valid.")
		.into();

	Discovery::new(
		ProviderConfiguration::builder("https://issuer.example")
			.signing_key(key)
			.paths(paths)
			.build()
			.expect("Configuration fixture should build."),
	)
}

fn get(discovery: &Discovery, url: &str) -> (u16, Value) {
	let url = Url::parse(url).expect("Request URL should parse.");
	let request = DiscoveryRequest::from_url(&url).expect("Request should be valid.");
	let response = discovery.respond(&request);

	assert_eq!(response.content_type, JSON_CONTENT_TYPE);

	(response.status, serde_json::from_str(&response.body).expect("Body should be JSON."))
}

#[test]
fn well_known_routes_render_documents() {
	let discovery = discovery(EndpointPaths::default());
	let (status, metadata) =
		get(&discovery, "https://idp.example:8443/.well-known/openid-configuration");

	assert_eq!(status, 200);
	assert_eq!(metadata["jwks_uri"], "https://idp.example:8443/oauth/discovery/keys");

	let (status, keys) = get(&discovery, "https://idp.example:8443/oauth/discovery/keys");

	assert_eq!(status, 200);
	assert_eq!(keys["keys"][0]["kty"], "RSA");
}

#[test]
fn webfinger_decodes_the_resource_and_requires_it() {
	let discovery = discovery(EndpointPaths::default());
	let (status, document) = get(
		&discovery,
		"http://test.host/.well-known/webfinger?resource=acct%3Ajane%40test.host&rel=ignored",
	);

	assert_eq!(status, 200);
	assert_eq!(document["subject"], "acct:jane@test.host");
	assert_eq!(document["links"][0]["href"], "https://issuer.example");

	let (status, error) = get(&discovery, "http://test.host/.well-known/webfinger");

	assert_eq!(status, 400);
	assert_eq!(error["error"], "invalid_request");
}

#[test]
fn routes_follow_configured_paths() {
	let paths = EndpointPaths { jwks: "/jwks.json".into(), ..EndpointPaths::default() };
	let discovery = discovery(paths);
	let (status, _) = get(&discovery, "http://test.host/oauth/discovery/keys");
	let (moved, keys) = get(&discovery, "http://test.host/jwks.json");
	let (_, metadata) = get(&discovery, "http://test.host/.well-known/openid-configuration");

	assert_eq!(status, 404);
	assert_eq!(moved, 200);
	assert_eq!(keys["keys"].as_array().map(Vec::len), Some(1));
	assert_eq!(metadata["jwks_uri"], "http://test.host/jwks.json");
}
