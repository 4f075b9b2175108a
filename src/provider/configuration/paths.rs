// self
use crate::{_prelude::*, error::ConfigError};

/// Relative paths of the endpoints mounted by the OAuth 2.0 server and the discovery routes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointPaths {
	/// Authorization endpoint.
	pub authorization: String,
	/// Token endpoint.
	pub token: String,
	/// Token revocation endpoint (RFC 7009).
	pub revocation: String,
	/// Token introspection endpoint (RFC 7662).
	pub introspection: String,
	/// Userinfo endpoint.
	pub userinfo: String,
	/// JWKS document.
	pub jwks: String,
	/// Provider metadata document.
	pub provider: String,
	/// WebFinger resolver.
	pub webfinger: String,
}
impl EndpointPaths {
	pub(crate) fn validate(&self) -> Result<(), ConfigError> {
		for (endpoint, path) in [
			("authorization", &self.authorization),
			("token", &self.token),
			("revocation", &self.revocation),
			("introspection", &self.introspection),
			("userinfo", &self.userinfo),
			("jwks", &self.jwks),
			("provider", &self.provider),
			("webfinger", &self.webfinger),
		] {
			if !path.starts_with('/') {
				return Err(ConfigError::InvalidPath { endpoint, path: path.clone() });
			}
		}

		Ok(())
	}
}
impl Default for EndpointPaths {
	fn default() -> Self {
		Self {
			authorization: "/oauth/authorize".into(),
			token: "/oauth/token".into(),
			revocation: "/oauth/revoke".into(),
			introspection: "/oauth/introspect".into(),
			userinfo: "/oauth/userinfo".into(),
			jwks: "/oauth/discovery/keys".into(),
			provider: "/.well-known/openid-configuration".into(),
			webfinger: "/.well-known/webfinger".into(),
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn relative_paths_are_rejected() {
		let paths = EndpointPaths { userinfo: "oauth/userinfo".into(), ..Default::default() };

		assert!(matches!(
			paths.validate(),
			Err(ConfigError::InvalidPath { endpoint: "userinfo", .. })
		));
		assert!(EndpointPaths::default().validate().is_ok());
	}

	#[test]
	fn partial_settings_keep_defaults() {
		let paths: EndpointPaths = serde_json::from_str(r#"{"token":"/auth/token"}"#)
			.expect("Partial path settings should deserialize.");

		assert_eq!(paths.token, "/auth/token");
		assert_eq!(paths.authorization, "/oauth/authorize");
	}
}
