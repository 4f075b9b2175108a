//! Provider configuration (data), protocol resolution (behavior), and the shared registry.
//!
//! `configuration` exposes the validated [`ProviderConfiguration`] covering the issuer,
//! signing keys, enabled grant flows, feature flags, claims, scopes, and the endpoint
//! paths owned by the OAuth 2.0 server. `protocol` defines [`ProtocolResolver`], the
//! per-request hook deciding which URL scheme discovery documents render with.
//! `registry` holds the versioned snapshot every request reads, and `settings` loads a
//! configuration from a JSON document.

pub mod configuration;
pub mod protocol;
pub mod registry;
pub mod settings;

pub use configuration::*;
pub use protocol::*;
pub use registry::*;
pub use settings::*;
