//! Per-network static configuration

use serde::{Deserialize, Serialize};

/// A supported chain and its bridge-side contract deployments
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Network {
	/// Chain ID (e.g., 1 for Ethereum mainnet, 56 for BSC)
	pub chain_id: u64,
	/// Human-readable name
	pub name: String,
	/// Bridge contract handling plain deposits and redeems
	pub bridge_address: String,
	/// Zap contract combining a local pool swap (or native wrap) with
	/// the bridge call in one transaction
	pub zap_address: String,
	/// Native-coin wrap pair on this chain, if one exists
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub wrap_pair: Option<WrapPair>,
}

/// Native coin ↔ wrapped ERC-20 pairing on one chain
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WrapPair {
	/// Native coin symbol (e.g., "ETH")
	pub native_symbol: String,
	/// Wrapped ERC-20 symbol (e.g., "WETH")
	pub wrapped_symbol: String,
	/// Wrapped-native contract address (deposit()/withdraw() target)
	pub wrapped_address: String,
}

impl Network {
	pub fn new(
		chain_id: u64,
		name: impl Into<String>,
		bridge_address: impl Into<String>,
		zap_address: impl Into<String>,
	) -> Self {
		Self {
			chain_id,
			name: name.into(),
			bridge_address: bridge_address.into(),
			zap_address: zap_address.into(),
			wrap_pair: None,
		}
	}

	pub fn with_wrap_pair(
		mut self,
		native_symbol: impl Into<String>,
		wrapped_symbol: impl Into<String>,
		wrapped_address: impl Into<String>,
	) -> Self {
		self.wrap_pair = Some(WrapPair {
			native_symbol: native_symbol.into(),
			wrapped_symbol: wrapped_symbol.into(),
			wrapped_address: wrapped_address.into(),
		});
		self
	}

	/// True if (a, b) is exactly this chain's wrap pair, in either
	/// direction
	pub fn is_wrap_pair(&self, a: &str, b: &str) -> bool {
		match &self.wrap_pair {
			Some(pair) => {
				(pair.native_symbol == a && pair.wrapped_symbol == b)
					|| (pair.native_symbol == b && pair.wrapped_symbol == a)
			},
			None => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_wrap_pair_symmetry() {
		let net = Network::new(1, "Ethereum", "0xb1", "0xb2").with_wrap_pair(
			"ETH",
			"WETH",
			"0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
		);

		assert!(net.is_wrap_pair("ETH", "WETH"));
		assert!(net.is_wrap_pair("WETH", "ETH"));
		assert!(!net.is_wrap_pair("ETH", "ETH"));
		assert!(!net.is_wrap_pair("ETH", "USDC"));
	}

	#[test]
	fn test_no_wrap_pair() {
		let net = Network::new(1313161554, "Aurora", "0xb1", "0xb2");
		assert!(!net.is_wrap_pair("ETH", "WETH"));
	}
}
