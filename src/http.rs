//! Framework-agnostic HTTP boundary for the discovery routes.
//!
//! Web frameworks translate their request type into a [`DiscoveryRequest`], call
//! [`Discovery::respond`], and copy the [`DiscoveryResponse`] status, content type,
//! and body back out. Routing uses the paths of the configuration snapshot the
//! request is served from.

// self
use crate::{
	_prelude::*,
	discovery::{self, Discovery},
	provider::{EndpointPaths, RequestContext},
};

/// Content type of every discovery response.
pub const JSON_CONTENT_TYPE: &str = "application/json";

const SERVER_ERROR_BODY: &str = r#"{"error":"server_error"}"#;

/// Discovery routes served by [`Discovery::respond`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiscoveryRoute {
	/// `/.well-known/openid-configuration` by default.
	ProviderMetadata,
	/// `/.well-known/webfinger` by default.
	WebFinger,
	/// `/oauth/discovery/keys` by default.
	Keys,
}
impl DiscoveryRoute {
	/// Matches a request path against the configured paths; no prefix or trailing-slash matching.
	pub fn match_path(path: &str, paths: &EndpointPaths) -> Option<Self> {
		if path == paths.provider {
			Some(Self::ProviderMetadata)
		} else if path == paths.webfinger {
			Some(Self::WebFinger)
		} else if path == paths.jwks {
			Some(Self::Keys)
		} else {
			None
		}
	}
}

/// Incoming request as seen by the discovery routes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscoveryRequest {
	/// Request path without the query string.
	pub path: String,
	/// Raw query string, without the leading `?`.
	pub query: Option<String>,
	/// Scheme and host the request was addressed to.
	pub context: RequestContext,
}
impl DiscoveryRequest {
	/// Creates a request for `path` without a query string.
	pub fn new(context: RequestContext, path: impl Into<String>) -> Self {
		Self { path: path.into(), query: None, context }
	}

	/// Attaches the raw query string.
	pub fn with_query(mut self, query: impl Into<String>) -> Self {
		self.query = Some(query.into());

		self
	}

	/// Splits an absolute request URL into context, path, and query.
	pub fn from_url(url: &Url) -> Result<Self> {
		Ok(Self {
			path: url.path().to_owned(),
			query: url.query().map(str::to_owned),
			context: RequestContext::from_url(url)?,
		})
	}

	/// First value of the query parameter `name`, percent-decoded.
	pub fn query_param(&self, name: &str) -> Option<String> {
		let query = self.query.as_deref()?;

		url::form_urlencoded::parse(query.as_bytes())
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.into_owned())
	}
}

/// Response produced for a [`DiscoveryRequest`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscoveryResponse {
	/// HTTP status code.
	pub status: u16,
	/// Value of the `Content-Type` header.
	pub content_type: &'static str,
	/// JSON body.
	pub body: String,
}
impl DiscoveryResponse {
	fn json<T>(status: u16, value: &T) -> Self
	where
		T: ?Sized + Serialize,
	{
		match serde_json::to_string(value) {
			Ok(body) => Self { status, content_type: JSON_CONTENT_TYPE, body },
			Err(_e) => {
				#[cfg(feature = "tracing")]
				tracing::error!(error = %_e, "oidc_discovery.serialize_failed");

				Self::server_error()
			},
		}
	}

	fn server_error() -> Self {
		Self { status: 500, content_type: JSON_CONTENT_TYPE, body: SERVER_ERROR_BODY.into() }
	}

	fn from_error(error: &Error) -> Self {
		if error.is_client_error() {
			Self::json(
				400,
				&serde_json::json!({
					"error": "invalid_request",
					"error_description": error.to_string(),
				}),
			)
		} else {
			Self::server_error()
		}
	}

	/// Returns true for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

impl Discovery {
	/// Routes a request and renders the matching document.
	///
	/// Unknown paths yield 404, client input problems 400, and configuration problems
	/// 500 without leaking their details.
	pub fn respond(&self, request: &DiscoveryRequest) -> DiscoveryResponse {
		let snapshot = self.registry().snapshot();
		let config = &snapshot.configuration;
		let result = match DiscoveryRoute::match_path(&request.path, &config.paths) {
			Some(DiscoveryRoute::ProviderMetadata) =>
				discovery::provider_metadata_for(config, &request.context)
					.map(|metadata| DiscoveryResponse::json(200, &metadata)),
			Some(DiscoveryRoute::WebFinger) => {
				let resource = request.query_param("resource");

				discovery::webfinger_for(config, resource.as_deref(), &request.context)
					.map(|document| DiscoveryResponse::json(200, &document))
			},
			Some(DiscoveryRoute::Keys) =>
				Ok(DiscoveryResponse::json(200, &discovery::keys_for(config))),
			None =>
				return DiscoveryResponse::json(404, &serde_json::json!({ "error": "not_found" })),
		};

		result.unwrap_or_else(|e| DiscoveryResponse::from_error(&e))
	}
}
