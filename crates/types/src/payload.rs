//! Unsigned transaction payload descriptions

use crate::Amount;
use serde::{Deserialize, Serialize};

/// One typed argument of a contract call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "type", content = "value")]
pub enum CallArg {
	/// 20-byte hex address
	Address(String),
	/// Token amount
	Amount(Amount),
	/// Plain unsigned integer (chain IDs and the like)
	Uint(u64),
}

/// An inert description of the transaction to sign and broadcast
///
/// The builder never holds keys; signing and submission belong to an
/// external signer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPayload {
	/// Chain the transaction executes on
	pub chain_id: u64,
	/// Target contract address
	pub to: String,
	/// Solidity function signature selecting the entry point
	pub function: String,
	/// Arguments in declaration order
	pub args: Vec<CallArg>,
	/// Native coin attached to the call; zero for plain ERC-20 paths
	pub value: Amount,
}
