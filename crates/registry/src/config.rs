//! Serde-loadable registry configuration
//!
//! The topology is plain data: callers can ship their own file instead
//! of the compiled-in mainnet set, and fixture registries for tests are
//! just small configs.

use crate::{group::PoolGroup, Registry};
use bridge_types::{Asset, Network, RegistryError};
use config::{Config, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// On-disk shape of a registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
	pub networks: Vec<Network>,
	pub assets: Vec<Asset>,
	#[serde(default)]
	pub pool_groups: Vec<PoolGroup>,
	#[serde(default)]
	pub bridge_tokens: Vec<String>,
	#[serde(default)]
	pub restrictions: Vec<PairRestriction>,
}

/// Allow-list entry for one ordered network pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairRestriction {
	pub from_chain: u64,
	pub to_chain: u64,
	/// Bridge tokens permitted on this pair; everything else is refused
	pub allowed: Vec<String>,
}

/// Errors surfaced while loading a registry from disk
#[derive(Error, Debug)]
pub enum RegistryLoadError {
	#[error("failed to read registry configuration: {0}")]
	Read(#[from] config::ConfigError),

	#[error("registry configuration is inconsistent: {0}")]
	Invalid(#[from] RegistryError),
}

impl RegistryConfig {
	pub fn into_registry(self) -> Result<Registry, RegistryError> {
		Registry::new(
			self.networks,
			self.assets,
			self.pool_groups,
			self.bridge_tokens,
			self.restrictions
				.into_iter()
				.map(|r| ((r.from_chain, r.to_chain), r.allowed))
				.collect(),
		)
	}
}

/// Load and validate a registry from a configuration file
///
/// `path` is passed without extension; JSON, TOML and YAML sources are
/// all accepted.
pub fn load_registry(path: &str) -> Result<Registry, RegistryLoadError> {
	let raw = Config::builder()
		.add_source(File::with_name(path))
		.build()?;
	let parsed: RegistryConfig = raw.try_deserialize()?;
	Ok(parsed.into_registry()?)
}
