//! Error taxonomy for the routing core
//!
//! Expected conditions are typed results the caller branches on;
//! exceptions never carry control flow between components.

use crate::oracle::OracleError;
use thiserror::Error;

/// Why a requested (network, asset) pair cannot be routed
///
/// Always a user-input condition, recoverable by choosing a different
/// pair. The reason set is closed so callers can match on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnsupportedRoute {
	#[error("source and destination network are the same and the pair is not a wrap pair")]
	SameNetwork,

	#[error("asset {symbol} has no deployment on chain {chain_id}")]
	AssetAbsent { symbol: String, chain_id: u64 },

	#[error("no bridge token is reachable from both endpoints")]
	NoCommonBridgeToken,

	#[error("bridge token {token} is disabled for the {from_chain} -> {to_chain} network pair")]
	PairRestricted {
		from_chain: u64,
		to_chain: u64,
		token: String,
	},
}

/// Why an output estimate could not be produced
///
/// Reflects live external state (liquidity, limits) at query time;
/// recoverable by retrying later or adjusting the amount. A successful
/// zero-output estimate is never coerced into one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimateError {
	#[error("insufficient liquidity for the requested amount")]
	InsufficientLiquidity,

	#[error("amount is below the bridge minimum")]
	BelowMinimum,

	#[error("amount is above the bridge maximum")]
	AboveMaximum,

	#[error("external quote timed out after {timeout_ms}ms")]
	Timeout { timeout_ms: u64 },

	#[error("oracle unavailable: {reason}")]
	OracleUnavailable { reason: String },
}

impl From<OracleError> for EstimateError {
	fn from(err: OracleError) -> Self {
		match err {
			OracleError::InsufficientLiquidity => EstimateError::InsufficientLiquidity,
			OracleError::BelowMinimum => EstimateError::BelowMinimum,
			OracleError::AboveMaximum => EstimateError::AboveMaximum,
			OracleError::Unavailable { reason } => EstimateError::OracleUnavailable { reason },
		}
	}
}

/// Why a transaction payload could not be constructed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
	#[error("invalid amount: {reason}")]
	InvalidAmount { reason: String },

	#[error("invalid recipient address: {address}")]
	InvalidRecipient { address: String },
}

/// Registry construction and lookup defects
///
/// These indicate a configuration bug, not a transient or user
/// condition; they surface at load time or on a programmer-error
/// lookup, never as a routing outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
	#[error("unknown network: chain ID {chain_id}")]
	UnknownNetwork { chain_id: u64 },

	#[error("unknown asset: {symbol}")]
	UnknownAsset { symbol: String },

	#[error("pool group {group_id} on chain {chain_id} references unregistered asset {symbol}")]
	DanglingGroupMember {
		group_id: String,
		chain_id: u64,
		symbol: String,
	},

	#[error("pool group {group_id} on chain {chain_id} has no bridge-token member")]
	GroupWithoutBridgeToken { group_id: String, chain_id: u64 },

	#[error("wrap pair on chain {chain_id} references unregistered symbol {symbol}")]
	DanglingWrapSymbol { chain_id: u64, symbol: String },

	#[error("bridge token {symbol} is not registered as an asset")]
	DanglingBridgeToken { symbol: String },

	#[error("network-pair restriction {from_chain} -> {to_chain} names unknown bridge token {token}")]
	DanglingRestriction {
		from_chain: u64,
		to_chain: u64,
		token: String,
	},
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_oracle_error_maps_onto_estimate_error() {
		assert_eq!(
			EstimateError::from(OracleError::InsufficientLiquidity),
			EstimateError::InsufficientLiquidity
		);
		assert_eq!(
			EstimateError::from(OracleError::BelowMinimum),
			EstimateError::BelowMinimum
		);
		assert_eq!(
			EstimateError::from(OracleError::Unavailable {
				reason: "rpc down".to_string()
			}),
			EstimateError::OracleUnavailable {
				reason: "rpc down".to_string()
			}
		);
	}

	#[test]
	fn test_display_strings_are_caller_readable() {
		let err = UnsupportedRoute::AssetAbsent {
			symbol: "MIM".to_string(),
			chain_id: 288,
		};
		assert_eq!(err.to_string(), "asset MIM has no deployment on chain 288");
	}
}
