//! Logical asset identities and their per-network deployments

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A logical token identity, deployed on one or more networks
///
/// The same symbol can resolve to different contract addresses per
/// network; a network missing from `addresses` means the asset does not
/// exist there and no route may pass through that (network, asset) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Asset {
	/// Token symbol (e.g., "USDC", "nUSD", "SYN")
	pub symbol: String,
	/// Human-readable name (e.g., "USD Coin")
	pub name: String,
	/// Canonical number of decimal places
	pub decimals: u8,
	/// Contract address per chain ID; absent key = not deployed there
	pub addresses: HashMap<u64, String>,
	/// Pool-group membership per chain ID; absent key = ungrouped
	#[serde(default)]
	pub pool_groups: HashMap<u64, String>,
	/// True only for a chain's gas-fee coin (no ERC-20 contract)
	#[serde(default)]
	pub is_native: bool,
	/// For bridge tokens: the chain where supply is locked rather than
	/// minted. Leaving the home chain deposits; leaving any other chain
	/// burns and redeems.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub home_chain_id: Option<u64>,
}

impl Asset {
	pub fn new(symbol: impl Into<String>, name: impl Into<String>, decimals: u8) -> Self {
		Self {
			symbol: symbol.into(),
			name: name.into(),
			decimals,
			addresses: HashMap::new(),
			pool_groups: HashMap::new(),
			is_native: false,
			home_chain_id: None,
		}
	}

	/// Builder method registering a deployment on a chain
	pub fn on_chain(mut self, chain_id: u64, address: impl Into<String>) -> Self {
		self.addresses.insert(chain_id, address.into());
		self
	}

	/// Builder method registering a deployment that is also a pool member
	pub fn on_chain_in_group(
		mut self,
		chain_id: u64,
		address: impl Into<String>,
		group_id: impl Into<String>,
	) -> Self {
		self.addresses.insert(chain_id, address.into());
		self.pool_groups.insert(chain_id, group_id.into());
		self
	}

	pub fn native(mut self) -> Self {
		self.is_native = true;
		self
	}

	pub fn with_home_chain(mut self, chain_id: u64) -> Self {
		self.home_chain_id = Some(chain_id);
		self
	}

	/// Contract address on a chain, if deployed there
	pub fn address_on(&self, chain_id: u64) -> Option<&str> {
		self.addresses.get(&chain_id).map(String::as_str)
	}

	/// Pool-group ID on a chain, if the asset is grouped there
	pub fn pool_group_on(&self, chain_id: u64) -> Option<&str> {
		self.pool_groups.get(&chain_id).map(String::as_str)
	}

	pub fn exists_on(&self, chain_id: u64) -> bool {
		self.addresses.contains_key(&chain_id)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_asset_builder() {
		let asset = Asset::new("USDC", "USD Coin", 6)
			.on_chain_in_group(1, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", "nusd-pool")
			.on_chain(56, "0x8AC76a51cc950d9822D68b83fE1Ad97B32Cd580d");

		assert!(asset.exists_on(1));
		assert!(asset.exists_on(56));
		assert!(!asset.exists_on(137));
		assert_eq!(asset.pool_group_on(1), Some("nusd-pool"));
		assert_eq!(asset.pool_group_on(56), None);
		assert!(!asset.is_native);
	}

	#[test]
	fn test_native_asset_flag() {
		let ether = Asset::new("ETH", "Ether", 18)
			.native()
			.on_chain(1, "0x0000000000000000000000000000000000000000");
		assert!(ether.is_native);
		assert!(ether.home_chain_id.is_none());
	}
}
