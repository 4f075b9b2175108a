//! Process-wide configuration registry read by every discovery request.

// self
use crate::{_prelude::*, provider::ProviderConfiguration};

/// Configuration published under a monotonically increasing version.
#[derive(Debug)]
pub struct ConfigurationSnapshot {
	/// Version of the snapshot; the first published configuration is version 1.
	pub version: u64,
	/// Configuration served while the snapshot is current.
	pub configuration: ProviderConfiguration,
}

/// Shared holder of the current [`ConfigurationSnapshot`].
///
/// Readers clone an `Arc` under a short read lock and then work lock-free, so a request
/// keeps observing the snapshot it started with even if [`reconfigure`](Self::reconfigure)
/// publishes a new one mid-flight. Published snapshots are never mutated.
#[derive(Debug)]
pub struct ConfigurationRegistry {
	current: RwLock<Arc<ConfigurationSnapshot>>,
}
impl ConfigurationRegistry {
	/// Publishes the initial configuration as version 1.
	pub fn new(configuration: ProviderConfiguration) -> Self {
		Self { current: RwLock::new(Arc::new(ConfigurationSnapshot { version: 1, configuration })) }
	}

	/// Returns the current snapshot.
	pub fn snapshot(&self) -> Arc<ConfigurationSnapshot> {
		self.current.read().clone()
	}

	/// Current version number.
	pub fn version(&self) -> u64 {
		self.current.read().version
	}

	/// Replaces the configuration and returns the new version.
	pub fn reconfigure(&self, configuration: ProviderConfiguration) -> u64 {
		let mut current = self.current.write();
		let version = current.version + 1;

		*current = Arc::new(ConfigurationSnapshot { version, configuration });

		#[cfg(feature = "tracing")]
		tracing::info!(version, "oidc_discovery.reconfigured");

		version
	}
}
