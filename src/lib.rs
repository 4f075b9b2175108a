//! OpenID Connect discovery for OAuth 2.0 servers: provider metadata, WebFinger issuer links,
//! and JWKS documents projected from live signing keys.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod discovery;
pub mod error;
pub mod http;
pub mod key;
pub mod obs;
pub mod provider;

mod _prelude {
	pub use std::{
		collections::HashSet,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use url;
#[cfg(test)] use color_eyre as _;
