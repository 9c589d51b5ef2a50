//! Static routing topology: networks, assets, pool groups and
//! network-pair restrictions
//!
//! Loaded once into an immutable [`Registry`] at process start and
//! passed by shared reference into the engine, never looked up through
//! globals, so tests can substitute fixture registries. Consistency is
//! validated at construction; per-call lookups trust it and are O(1)
//! map reads.

pub mod config;
pub mod group;
pub mod mainnet;

pub use config::{load_registry, RegistryConfig, RegistryLoadError};
pub use group::PoolGroup;

use bridge_types::{Asset, Network, RegistryError, WrapPair};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Immutable lookup tables for route classification and transaction
/// construction
#[derive(Debug, Clone)]
pub struct Registry {
	networks: HashMap<u64, Network>,
	assets: HashMap<String, Asset>,
	/// Keyed by (group ID, chain ID); an asset belongs to at most one
	/// group per network
	groups: HashMap<(String, u64), PoolGroup>,
	bridge_tokens: HashSet<String>,
	/// Ordered (from, to) network pair -> bridge tokens allowed on that
	/// pair; an absent pair is unrestricted
	restrictions: HashMap<(u64, u64), HashSet<String>>,
}

impl Registry {
	/// Build and validate a registry
	///
	/// Validation runs once here; dangling references are configuration
	/// defects and fail construction rather than surfacing per call.
	pub fn new(
		networks: Vec<Network>,
		assets: Vec<Asset>,
		groups: Vec<PoolGroup>,
		bridge_tokens: Vec<String>,
		restrictions: Vec<((u64, u64), Vec<String>)>,
	) -> Result<Self, RegistryError> {
		let registry = Self {
			networks: networks.into_iter().map(|n| (n.chain_id, n)).collect(),
			assets: assets.into_iter().map(|a| (a.symbol.clone(), a)).collect(),
			groups: groups
				.into_iter()
				.map(|g| ((g.id.clone(), g.chain_id), g))
				.collect(),
			bridge_tokens: bridge_tokens.into_iter().collect(),
			restrictions: restrictions
				.into_iter()
				.map(|(pair, allowed)| (pair, allowed.into_iter().collect()))
				.collect(),
		};
		registry.validate()?;
		debug!(
			networks = registry.networks.len(),
			assets = registry.assets.len(),
			groups = registry.groups.len(),
			"registry constructed"
		);
		Ok(registry)
	}

	fn validate(&self) -> Result<(), RegistryError> {
		for symbol in &self.bridge_tokens {
			if !self.assets.contains_key(symbol) {
				return Err(RegistryError::DanglingBridgeToken {
					symbol: symbol.clone(),
				});
			}
		}

		for ((id, chain_id), group) in &self.groups {
			self.network(*chain_id)?;
			let mut has_bridge_member = false;
			for member in &group.members {
				let consistent = self
					.assets
					.get(member)
					.filter(|asset| asset.exists_on(*chain_id))
					.map(|asset| asset.pool_group_on(*chain_id) == Some(id.as_str()))
					.unwrap_or(false);
				if !consistent {
					return Err(RegistryError::DanglingGroupMember {
						group_id: id.clone(),
						chain_id: *chain_id,
						symbol: member.clone(),
					});
				}
				has_bridge_member |= self.bridge_tokens.contains(member);
			}
			if !has_bridge_member {
				return Err(RegistryError::GroupWithoutBridgeToken {
					group_id: id.clone(),
					chain_id: *chain_id,
				});
			}
		}

		for network in self.networks.values() {
			if let Some(pair) = &network.wrap_pair {
				for symbol in [&pair.native_symbol, &pair.wrapped_symbol] {
					let registered = self
						.assets
						.get(symbol)
						.map(|asset| asset.exists_on(network.chain_id))
						.unwrap_or(false);
					if !registered {
						return Err(RegistryError::DanglingWrapSymbol {
							chain_id: network.chain_id,
							symbol: symbol.clone(),
						});
					}
				}
			}
		}

		for ((from_chain, to_chain), allowed) in &self.restrictions {
			self.network(*from_chain)?;
			self.network(*to_chain)?;
			for token in allowed {
				if !self.bridge_tokens.contains(token) {
					return Err(RegistryError::DanglingRestriction {
						from_chain: *from_chain,
						to_chain: *to_chain,
						token: token.clone(),
					});
				}
			}
		}

		Ok(())
	}

	/// Look up a network; an unknown chain ID is a configuration
	/// defect, not a routing outcome
	pub fn network(&self, chain_id: u64) -> Result<&Network, RegistryError> {
		self.networks
			.get(&chain_id)
			.ok_or(RegistryError::UnknownNetwork { chain_id })
	}

	pub fn asset(&self, symbol: &str) -> Option<&Asset> {
		self.assets.get(symbol)
	}

	/// Contract address of an asset on a chain; `None` means the asset
	/// is absent there and no route may pass through the pair
	pub fn address_of(&self, symbol: &str, chain_id: u64) -> Option<&str> {
		self.assets.get(symbol)?.address_on(chain_id)
	}

	/// The pool group an asset belongs to on a chain, if any
	pub fn pool_group(&self, symbol: &str, chain_id: u64) -> Option<&PoolGroup> {
		let group_id = self.assets.get(symbol)?.pool_group_on(chain_id)?;
		self.groups.get(&(group_id.to_string(), chain_id))
	}

	pub fn is_bridge_token(&self, symbol: &str) -> bool {
		self.bridge_tokens.contains(symbol)
	}

	pub fn wrap_pair_of(&self, chain_id: u64) -> Option<&WrapPair> {
		self.networks.get(&chain_id)?.wrap_pair.as_ref()
	}

	/// Whether a bridge token is permitted on the ordered network pair
	pub fn pair_allows(&self, from_chain: u64, to_chain: u64, token: &str) -> bool {
		match self.restrictions.get(&(from_chain, to_chain)) {
			Some(allowed) => allowed.contains(token),
			None => true,
		}
	}

	pub fn networks(&self) -> impl Iterator<Item = &Network> {
		self.networks.values()
	}

	pub fn assets(&self) -> impl Iterator<Item = &Asset> {
		self.assets.values()
	}
}
