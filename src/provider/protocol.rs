//! Per-request protocol resolution for rendered endpoint URLs.
//!
//! Discovery documents are rendered against the host of the incoming request. The
//! scheme comes from a [`ProtocolResolver`] so deployments behind TLS terminators, or
//! native apps using private-use schemes, can override what the request itself says.

// self
use crate::{_prelude::*, error::ConfigError};

/// URL scheme used when rendering endpoint URLs.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Protocol {
	/// Plain HTTP.
	Http,
	/// HTTP over TLS.
	Https,
	/// Any other RFC 3986 scheme (lowercase).
	Custom(String),
}
impl Protocol {
	/// Parses a scheme, mapping `http`/`https` onto their variants.
	pub fn parse(scheme: &str) -> Result<Self, ConfigError> {
		let lowered = scheme.to_ascii_lowercase();
		let mut chars = lowered.chars();
		let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
			&& chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

		if !valid {
			return Err(ConfigError::InvalidProtocol { scheme: scheme.to_owned() });
		}

		Ok(match lowered.as_str() {
			"http" => Protocol::Http,
			"https" => Protocol::Https,
			_ => Protocol::Custom(lowered),
		})
	}

	/// Returns the scheme string.
	pub fn as_str(&self) -> &str {
		match self {
			Protocol::Http => "http",
			Protocol::Https => "https",
			Protocol::Custom(scheme) => scheme,
		}
	}
}
impl Debug for Protocol {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Protocol({})", self.as_str())
	}
}
impl Display for Protocol {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for Protocol {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}
impl TryFrom<String> for Protocol {
	type Error = ConfigError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::parse(&value)
	}
}
impl From<Protocol> for String {
	fn from(value: Protocol) -> Self {
		value.as_str().to_owned()
	}
}

/// Scheme and host of the request being served.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestContext {
	protocol: Protocol,
	host: String,
}
impl RequestContext {
	/// Creates a context from the request scheme and `Host` value (host with optional port).
	///
	/// The host is stored in its normalized form (lowercased, default port of the request
	/// scheme dropped) so every resolved scheme renders the same authority.
	pub fn new(protocol: Protocol, host: impl Into<String>) -> Result<Self> {
		let host = host.into();
		let malformed = host.is_empty()
			|| host.chars().any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '@' | '\\'));
		let base = if protocol == Protocol::Https { "https" } else { "http" };
		let parsed = if malformed { None } else { Url::parse(&format!("{base}://{host}/")).ok() };
		let Some(normalized) = parsed.as_ref().and_then(|url| {
			url.host_str().map(|name| match url.port() {
				Some(port) => format!("{name}:{port}"),
				None => name.to_owned(),
			})
		}) else {
			return Err(Error::InvalidHost { host });
		};

		Ok(Self { protocol, host: normalized })
	}

	/// Creates a context from an absolute request URL.
	pub fn from_url(url: &Url) -> Result<Self> {
		let host = url.host_str().ok_or_else(|| Error::InvalidHost { host: url.to_string() })?;
		let host = match url.port() {
			Some(port) => format!("{host}:{port}"),
			None => host.to_owned(),
		};
		let protocol = Protocol::parse(url.scheme()).map_err(Error::from)?;

		Self::new(protocol, host)
	}

	/// Scheme the request arrived with.
	pub fn protocol(&self) -> &Protocol {
		&self.protocol
	}

	/// Host (and port) the request was addressed to.
	pub fn host(&self) -> &str {
		&self.host
	}

	/// Renders `{protocol}://{host}{path}`.
	pub fn url(&self, protocol: &Protocol, path: &str) -> Result<Url, url::ParseError> {
		Url::parse(&format!("{}://{}{}", protocol.as_str(), self.host, path))
	}
}

/// Hook deciding the scheme of every URL rendered for a request.
///
/// Implementations must be pure: the same request must always resolve to the same
/// protocol. Closures of type `Fn(&RequestContext) -> Protocol` implement the trait,
/// and a bare [`Protocol`] acts as a fixed override.
pub trait ProtocolResolver: Send + Sync {
	/// Resolves the scheme for the provided request.
	fn resolve(&self, request: &RequestContext) -> Protocol;
}
impl ProtocolResolver for Protocol {
	fn resolve(&self, _request: &RequestContext) -> Protocol {
		self.clone()
	}
}
impl<F> ProtocolResolver for F
where
	F: Fn(&RequestContext) -> Protocol + Send + Sync,
{
	fn resolve(&self, request: &RequestContext) -> Protocol {
		self(request)
	}
}

/// Default resolver that echoes the scheme the request arrived with.
#[derive(Debug, Default)]
pub struct RequestProtocol;
impl Display for RequestProtocol {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("request-protocol")
	}
}
impl ProtocolResolver for RequestProtocol {
	fn resolve(&self, request: &RequestContext) -> Protocol {
		request.protocol().clone()
	}
}
