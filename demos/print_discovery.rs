//! Loads provider settings (from the path given as the first argument, or a built-in
//! HMAC sample) and prints every discovery document for a sample request.

// std
use std::{env, fs};
// crates.io
use color_eyre::Result;
use url::Url;
// self
use oidc_discovery::{
	discovery::Discovery,
	http::DiscoveryRequest,
	provider::{ProviderSettings, RequestContext},
};

const SAMPLE_SETTINGS: &str = r#"{
	"issuer": "https://idp.example.com",
	"signing_keys": [{ "kty": "oct", "kid": "demo-hmac", "k": "ZGVtby1zZWNyZXQtZG8tbm90LXVzZQ" }],
	"use_refresh_token": true,
	"claims": [{ "name": "email", "scope": "email" }]
}"#;

fn main() -> Result<()> {
	color_eyre::install()?;

	let settings = match env::args().nth(1) {
		Some(path) => ProviderSettings::from_json_slice(&fs::read(path)?)?,
		None => SAMPLE_SETTINGS.parse::<ProviderSettings>()?,
	};
	let discovery = Discovery::new(settings.into_configuration()?);
	let base = Url::parse("https://idp.example.com/")?;
	let context = RequestContext::from_url(&base)?;

	let metadata = discovery.provider_metadata(&context)?;
	let document = discovery.webfinger(Some("acct:demo@idp.example.com"), &context)?;

	println!("{}", serde_json::to_string_pretty(&metadata)?);
	println!("{}", serde_json::to_string_pretty(&document)?);
	println!("{}", serde_json::to_string_pretty(&discovery.keys())?);

	let mut url = base.join("/.well-known/webfinger")?;

	url.set_query(Some("resource=acct%3Ademo%40idp.example.com"));

	let request = DiscoveryRequest::from_url(&url)?;
	let response = discovery.respond(&request);

	println!("GET {} -> {} {}", request.path, response.status, response.body);

	Ok(())
}
