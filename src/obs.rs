//! Optional observability helpers for discovery endpoints.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oidc_discovery.request` with the
//!   `endpoint` and `stage` (call site) fields.
//! - Enable `metrics` to increment the `oidc_discovery_request_total` counter for every
//!   attempt/success/failure, labeled by `endpoint` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Discovery endpoints observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EndpointKind {
	/// OpenID Provider Metadata document.
	ProviderMetadata,
	/// WebFinger issuer lookup.
	WebFinger,
	/// JWKS document.
	Keys,
}
impl EndpointKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			EndpointKind::ProviderMetadata => "provider_metadata",
			EndpointKind::WebFinger => "webfinger",
			EndpointKind::Keys => "keys",
		}
	}
}
impl Display for EndpointKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EndpointOutcome {
	/// Entry to an endpoint operation.
	Attempt,
	/// Document produced.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl EndpointOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			EndpointOutcome::Attempt => "attempt",
			EndpointOutcome::Success => "success",
			EndpointOutcome::Failure => "failure",
		}
	}
}
impl Display for EndpointOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs `op` inside an endpoint span, recording the attempt and its outcome.
pub(crate) fn observe<T>(
	kind: EndpointKind,
	stage: &'static str,
	op: impl FnOnce() -> Result<T>,
) -> Result<T> {
	let _guard = EndpointSpan::new(kind, stage).entered();

	record_endpoint_outcome(kind, EndpointOutcome::Attempt);

	let result = op();

	match &result {
		Ok(_) => record_endpoint_outcome(kind, EndpointOutcome::Success),
		Err(_e) => {
			#[cfg(feature = "tracing")]
			::tracing::warn!(error = %_e, "oidc_discovery.request_failed");

			record_endpoint_outcome(kind, EndpointOutcome::Failure);
		},
	}

	result
}
