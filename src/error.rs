//! Crate-level error types shared across configuration, keys, and discovery endpoints.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem; fatal at startup.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Signing key material is unusable.
	#[error(transparent)]
	Key(#[from] KeyError),

	/// A required request parameter was absent or empty.
	#[error("Missing required parameter `{name}`.")]
	MissingParameter {
		/// Name of the missing parameter.
		name: &'static str,
	},
	/// The request host cannot be used to render endpoint URLs.
	#[error("Request host is invalid: {host}.")]
	InvalidHost {
		/// Host (with optional port) supplied by the request.
		host: String,
	},
}
impl Error {
	/// Returns true when the caller must fix the request; false for server-side conditions.
	pub fn is_client_error(&self) -> bool {
		matches!(self, Self::MissingParameter { .. } | Self::InvalidHost { .. })
	}
}

/// Configuration and validation failures raised while building provider configuration.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Issuer is empty or whitespace.
	#[error("Issuer must not be empty.")]
	MissingIssuer,
	/// No signing key was configured.
	#[error("At least one signing key must be configured.")]
	NoSigningKeys,
	/// Every grant flow was disabled.
	#[error("At least one grant flow must be enabled.")]
	NoSupportedGrants,
	/// Two claims share the same name.
	#[error("Claim `{name}` is defined more than once.")]
	DuplicateClaim {
		/// Duplicated claim name.
		name: String,
	},
	/// Endpoint path is not absolute.
	#[error("The {endpoint} path must start with '/': {path}.")]
	InvalidPath {
		/// Which path failed validation.
		endpoint: &'static str,
		/// Offending path.
		path: String,
	},
	/// A rendered endpoint URL could not be parsed.
	#[error("The {endpoint} endpoint URL is invalid.")]
	InvalidEndpoint {
		/// Which endpoint failed to render.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Protocol scheme is not a valid URL scheme.
	#[error("Protocol scheme is invalid: {scheme}.")]
	InvalidProtocol {
		/// Offending scheme.
		scheme: String,
	},
	/// Identifier validation failed.
	#[error(transparent)]
	Identifier(#[from] crate::auth::IdentifierError),
	/// Scope list validation failed.
	#[error("Configured scopes are invalid.")]
	InvalidScope(#[from] crate::auth::ScopeValidationError),
	/// Settings document could not be parsed.
	#[error("Provider settings could not be parsed.")]
	Parse(#[from] serde_path_to_error::Error<serde_json::Error>),
}

/// Signing key failures raised while constructing or loading key material.
#[derive(Debug, ThisError)]
pub enum KeyError {
	/// A numeric key component is empty (or all zero bytes).
	#[error("The {component} component must not be empty.")]
	EmptyComponent {
		/// Name of the component (`n`, `e`, `x`, `y`, `k`).
		component: &'static str,
	},
	/// EC coordinate length does not match the curve.
	#[error("The {component} coordinate must be {expected} bytes for {curve}, got {actual}.")]
	CoordinateLength {
		/// Coordinate name (`x` or `y`).
		component: &'static str,
		/// Curve name.
		curve: &'static str,
		/// Required byte length.
		expected: usize,
		/// Supplied byte length.
		actual: usize,
	},
	/// Algorithm cannot be used with the key family.
	#[error("Algorithm {alg} cannot be used with a {kty} key.")]
	AlgorithmMismatch {
		/// Algorithm identifier.
		alg: &'static str,
		/// Key type of the key.
		kty: &'static str,
	},
	/// Algorithm identifier is unknown.
	#[error("Unsupported signing algorithm: {alg}.")]
	UnsupportedAlgorithm {
		/// Offending identifier.
		alg: String,
	},
	/// Curve identifier is unknown.
	#[error("Unsupported elliptic curve: {crv}.")]
	UnsupportedCurve {
		/// Offending identifier.
		crv: String,
	},
	/// Component is not valid base64url.
	#[error("The {component} component is not valid base64url.")]
	InvalidEncoding {
		/// Name of the component.
		component: &'static str,
		/// Underlying decoding failure.
		#[source]
		source: base64::DecodeError,
	},
	/// PEM document could not be decoded into an RSA key.
	#[error("PEM document does not contain a supported RSA key.")]
	Pem {
		/// Underlying decoder failure.
		#[source]
		source: BoxError,
	},
}
impl KeyError {
	/// Wraps a PEM decoder failure inside [`KeyError`].
	pub fn pem(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Pem { source: Box::new(src) }
	}
}
