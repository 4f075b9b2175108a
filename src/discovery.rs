//! Discovery endpoints served from the current provider configuration.
//!
//! [`Discovery`] owns the shared [`ConfigurationRegistry`] and exposes one method per
//! endpoint. Every call reads a single snapshot, so documents produced by one request
//! are always consistent even while the provider is being reconfigured. The pure
//! operations behind those methods live in the submodules, for callers that manage
//! configuration themselves.

pub mod keys;
pub mod metadata;
pub mod webfinger;

pub use keys::*;
pub use metadata::*;
pub use webfinger::*;

// self
use crate::{
	_prelude::*,
	key::JwkSet,
	obs::{self, EndpointKind, EndpointOutcome, EndpointSpan},
	provider::{ConfigurationRegistry, ProviderConfiguration, RequestContext},
};

/// Serves discovery documents for a single provider.
#[derive(Clone, Debug)]
pub struct Discovery {
	registry: Arc<ConfigurationRegistry>,
}
impl Discovery {
	/// Creates a discovery service with its own registry seeded with `configuration`.
	pub fn new(configuration: ProviderConfiguration) -> Self {
		Self { registry: Arc::new(ConfigurationRegistry::new(configuration)) }
	}

	/// Creates a discovery service reading from a shared registry.
	pub fn with_registry(registry: Arc<ConfigurationRegistry>) -> Self {
		Self { registry }
	}

	/// Registry the service reads from; use it to publish new configurations.
	pub fn registry(&self) -> &Arc<ConfigurationRegistry> {
		&self.registry
	}

	/// Builds the OpenID Provider Metadata document for the request.
	pub fn provider_metadata(&self, request: &RequestContext) -> Result<ProviderMetadata> {
		provider_metadata_for(&self.registry.snapshot().configuration, request)
	}

	/// Resolves a WebFinger issuer lookup for `resource`.
	pub fn webfinger(
		&self,
		resource: Option<&str>,
		request: &RequestContext,
	) -> Result<WebFingerDocument> {
		webfinger_for(&self.registry.snapshot().configuration, resource, request)
	}

	/// Exports the public signing keys.
	pub fn keys(&self) -> JwkSet {
		keys_for(&self.registry.snapshot().configuration)
	}
}

pub(crate) fn provider_metadata_for(
	config: &ProviderConfiguration,
	request: &RequestContext,
) -> Result<ProviderMetadata> {
	obs::observe(EndpointKind::ProviderMetadata, "provider_metadata", || {
		metadata::assemble(config, request)
	})
}

pub(crate) fn webfinger_for(
	config: &ProviderConfiguration,
	resource: Option<&str>,
	request: &RequestContext,
) -> Result<WebFingerDocument> {
	obs::observe(EndpointKind::WebFinger, "webfinger", || {
		webfinger::resolve(resource, config, request)
	})
}

pub(crate) fn keys_for(config: &ProviderConfiguration) -> JwkSet {
	const KIND: EndpointKind = EndpointKind::Keys;

	let _guard = EndpointSpan::new(KIND, "keys").entered();

	obs::record_endpoint_outcome(KIND, EndpointOutcome::Attempt);

	let set = keys::export(&config.signing_keys);

	obs::record_endpoint_outcome(KIND, EndpointOutcome::Success);

	set
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		key::{KeyMaterial, SymmetricKey},
		provider::Protocol,
	};

	fn configuration(issuer: &str) -> ProviderConfiguration {
		let key: KeyMaterial = SymmetricKey::from_secret(b"discovery-secret".to_vec())
			.expect("Key should be valid.")
			.into();

		ProviderConfiguration::builder(issuer)
			.signing_key(key)
			.build()
			.expect("Configuration fixture should build.")
	}

	#[test]
	fn documents_follow_registry_updates() {
		let discovery = Discovery::new(configuration("https://one.example"));
		let request =
			RequestContext::new(Protocol::Https, "idp.example").expect("Request should be valid.");
		let before = discovery.provider_metadata(&request).expect("Metadata should assemble.");

		discovery.registry().reconfigure(configuration("https://two.example"));

		let after = discovery.provider_metadata(&request).expect("Metadata should assemble.");

		assert_eq!(before.issuer, "https://one.example");
		assert_eq!(after.issuer, "https://two.example");
	}

	#[test]
	fn clones_share_the_registry() {
		let discovery = Discovery::new(configuration("https://one.example"));
		let clone = discovery.clone();

		clone.registry().reconfigure(configuration("https://two.example"));

		assert_eq!(discovery.registry().version(), 2);
		assert_eq!(discovery.keys().keys.len(), 1);
	}
}
