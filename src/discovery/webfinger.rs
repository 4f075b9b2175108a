//! WebFinger issuer discovery (RFC 7033, OpenID Connect Discovery 1.0 section 2).

// self
use crate::{
	_prelude::*,
	error::ConfigError,
	provider::{ProviderConfiguration, RequestContext, WebFingerHref},
};

/// Link relation identifying an OpenID Connect issuer.
pub const WEBFINGER_ISSUER_REL: &str = "http://openid.net/specs/connect/1.0/issuer";

/// WebFinger JSON Resource Descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebFingerDocument {
	/// Resource the lookup was made for, echoed verbatim.
	pub subject: String,
	/// Issuer links.
	pub links: Vec<WebFingerLink>,
}

/// Single WebFinger link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebFingerLink {
	/// Link relation type.
	pub rel: String,
	/// Link target.
	pub href: String,
}

/// Resolves the issuer link for `resource`.
///
/// Any non-blank resource resolves to this provider; a missing or blank one is a
/// [`Error::MissingParameter`] for `resource`.
pub fn resolve(
	resource: Option<&str>,
	config: &ProviderConfiguration,
	request: &RequestContext,
) -> Result<WebFingerDocument> {
	let subject = resource
		.filter(|resource| !resource.trim().is_empty())
		.ok_or(Error::MissingParameter { name: "resource" })?;
	let href = match config.webfinger_href {
		WebFingerHref::Issuer => config.issuer.clone(),
		WebFingerHref::RequestRoot => request
			.url(&config.protocol.resolve(request), "/")
			.map_err(|source| ConfigError::InvalidEndpoint { endpoint: "webfinger", source })?
			.into(),
	};

	Ok(WebFingerDocument {
		subject: subject.to_owned(),
		links: vec![WebFingerLink { rel: WEBFINGER_ISSUER_REL.into(), href }],
	})
}
