//! Pool groups: per-network equivalence classes of mutually swappable assets

use serde::{Deserialize, Serialize};

/// A set of assets mutually swappable through one liquidity pool on one
/// specific network
///
/// Members are ordered by bridge-token priority: the group's designated
/// primary bridge token comes first and wins ties when several members
/// could serve as the cross-network leg.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PoolGroup {
	/// Group ID (e.g., "nusd-pool")
	pub id: String,
	/// Chain this pool lives on
	pub chain_id: u64,
	/// Member symbols in priority order, primary bridge token first
	pub members: Vec<String>,
}

impl PoolGroup {
	pub fn new(id: impl Into<String>, chain_id: u64, members: Vec<&str>) -> Self {
		Self {
			id: id.into(),
			chain_id,
			members: members.into_iter().map(String::from).collect(),
		}
	}

	pub fn contains(&self, symbol: &str) -> bool {
		self.members.iter().any(|m| m == symbol)
	}

	/// The designated primary bridge token
	pub fn primary(&self) -> Option<&str> {
		self.members.first().map(String::as_str)
	}
}
