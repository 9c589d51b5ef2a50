//! Read-only external query contracts consumed by the estimator
//!
//! The deployed bridge and pool contracts own fee, slippage and
//! liquidity state; this crate only specifies the interface boundary.
//! Every query is idempotent and mutates nothing.

use crate::Amount;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Bridge fee/limit quote for one cross-network leg
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BridgeQuote {
	/// Amount delivered on the destination chain after the fee
	pub amount_out: Amount,
	/// Fee retained by the bridge
	pub fee: Amount,
}

/// Failures reported by the external bridge and pool contracts
///
/// These reflect live on-chain state at query time; retrying blind is
/// not meaningful for a point-in-time quote, so the estimator never
/// retries on the caller's behalf.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
	#[error("insufficient liquidity for the requested amount")]
	InsufficientLiquidity,

	#[error("amount is below the bridge minimum")]
	BelowMinimum,

	#[error("amount is above the bridge maximum")]
	AboveMaximum,

	#[error("oracle unavailable: {reason}")]
	Unavailable { reason: String },
}

pub type OracleResult<T> = Result<T, OracleError>;

/// Fee/limit oracle for the cross-network bridge leg
#[async_trait]
pub trait BridgeFeeOracle: Send + Sync + Debug {
	/// Quote the bridge leg for `token` moving `from_chain` → `to_chain`
	async fn quote_bridge(
		&self,
		token: &str,
		from_chain: u64,
		to_chain: u64,
		amount_in: Amount,
	) -> OracleResult<BridgeQuote>;
}

/// Per-network liquidity-pool quote oracle
#[async_trait]
pub trait SwapQuoteOracle: Send + Sync + Debug {
	/// Quote swapping `symbol_in` → `symbol_out` through the pool on
	/// `chain_id`
	async fn quote_swap(
		&self,
		chain_id: u64,
		symbol_in: &str,
		symbol_out: &str,
		amount_in: Amount,
	) -> OracleResult<Amount>;
}
