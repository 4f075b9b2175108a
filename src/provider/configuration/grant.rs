// self
use crate::_prelude::*;

/// OAuth 2.0 grant types advertised in `grant_types_supported`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
	/// Authorization Code grant.
	AuthorizationCode,
	/// Implicit grant.
	Implicit,
	/// Resource Owner Password Credentials grant.
	Password,
	/// Client Credentials grant for app-only tokens.
	ClientCredentials,
	/// Refresh Token grant; driven by the `use_refresh_token` flag, not by grant flows.
	RefreshToken,
}
impl GrantType {
	/// Returns the RFC 6749 identifier for the grant type.
	pub fn as_str(self) -> &'static str {
		match self {
			GrantType::AuthorizationCode => "authorization_code",
			GrantType::Implicit => "implicit",
			GrantType::Password => "password",
			GrantType::ClientCredentials => "client_credentials",
			GrantType::RefreshToken => "refresh_token",
		}
	}
}
impl Display for GrantType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Grant flows enabled on the underlying OAuth 2.0 server.
///
/// Defaults to the Authorization Code and Client Credentials flows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportedGrants {
	/// Indicates whether the Authorization Code grant is enabled.
	pub authorization_code: bool,
	/// Indicates whether the Implicit grant is enabled.
	pub implicit: bool,
	/// Indicates whether the Password grant is enabled.
	pub password: bool,
	/// Indicates whether the Client Credentials grant is enabled.
	pub client_credentials: bool,
}
impl SupportedGrants {
	/// Returns a set with every flow disabled.
	pub fn none() -> Self {
		Self { authorization_code: false, implicit: false, password: false, client_credentials: false }
	}

	/// Returns true if the provided grant flow is enabled.
	///
	/// `RefreshToken` is never a flow; see [`SupportedGrants::grant_types`].
	pub fn supports(self, grant: GrantType) -> bool {
		match grant {
			GrantType::AuthorizationCode => self.authorization_code,
			GrantType::Implicit => self.implicit,
			GrantType::Password => self.password,
			GrantType::ClientCredentials => self.client_credentials,
			GrantType::RefreshToken => false,
		}
	}

	/// Marks a grant flow as enabled; `RefreshToken` is ignored.
	pub fn enable(mut self, grant: GrantType) -> Self {
		match grant {
			GrantType::AuthorizationCode => self.authorization_code = true,
			GrantType::Implicit => self.implicit = true,
			GrantType::Password => self.password = true,
			GrantType::ClientCredentials => self.client_credentials = true,
			GrantType::RefreshToken => (),
		}

		self
	}

	/// Returns true when no flows are enabled.
	pub fn is_empty(self) -> bool {
		!self.authorization_code && !self.implicit && !self.password && !self.client_credentials
	}

	/// Lists enabled flows in canonical order, then `refresh_token` when requested.
	pub fn grant_types(self, use_refresh_token: bool) -> Vec<GrantType> {
		let mut grants = [
			GrantType::AuthorizationCode,
			GrantType::Implicit,
			GrantType::Password,
			GrantType::ClientCredentials,
		]
		.into_iter()
		.filter(|grant| self.supports(*grant))
		.collect::<Vec<_>>();

		if use_refresh_token {
			grants.push(GrantType::RefreshToken);
		}

		grants
	}
}
impl Default for SupportedGrants {
	fn default() -> Self {
		Self::none().enable(GrantType::AuthorizationCode).enable(GrantType::ClientCredentials)
	}
}
