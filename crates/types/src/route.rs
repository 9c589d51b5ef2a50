//! Transfer requests and route classification results

use crate::Amount;
use serde::{Deserialize, Serialize};

/// A caller's request to move value between two (network, asset) endpoints
///
/// Ephemeral: constructed per call, validated by the classifier, then
/// discarded or promoted into a [`RouteClassification`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
	pub from_chain: u64,
	pub from_symbol: String,
	pub to_chain: u64,
	pub to_symbol: String,
	pub amount_in: Amount,
}

impl TransferRequest {
	pub fn new(
		from_chain: u64,
		from_symbol: impl Into<String>,
		to_chain: u64,
		to_symbol: impl Into<String>,
		amount_in: Amount,
	) -> Self {
		Self {
			from_chain,
			from_symbol: from_symbol.into(),
			to_chain,
			to_symbol: to_symbol.into(),
			amount_in,
		}
	}
}

/// The strategy needed to move value along a classified route
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum RouteKind {
	/// Source and destination are both the bridge token; no swaps
	Direct,
	/// Swap into the bridge token on the source chain, then bridge
	LocalSwap,
	/// Bridge, then swap out of the bridge token on the destination
	RemoteSwap,
	/// Swap on both sides of the bridge leg
	SwapBoth,
	/// Same-network native → wrapped conversion; no bridge leg
	Wrap,
	/// Same-network wrapped → native conversion; no bridge leg
	Unwrap,
}

impl RouteKind {
	pub fn needs_local_swap(&self) -> bool {
		matches!(self, RouteKind::LocalSwap | RouteKind::SwapBoth)
	}

	pub fn needs_remote_swap(&self) -> bool {
		matches!(self, RouteKind::RemoteSwap | RouteKind::SwapBoth)
	}

	pub fn has_bridge_leg(&self) -> bool {
		!matches!(self, RouteKind::Wrap | RouteKind::Unwrap)
	}
}

/// Which bridge entry family the source-side transaction belongs to
///
/// Leaving the bridge token's home chain locks collateral (deposit);
/// leaving any other chain burns the synthetic and redeems it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum BridgeDirection {
	Deposit,
	Redeem,
}

/// A positively classified route, consumed by the estimator and the
/// transaction builder
///
/// Never cached across calls: pool composition can change between
/// requests, so classification is recomputed per request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RouteClassification {
	pub kind: RouteKind,
	/// The asset crossing networks; for Wrap/Unwrap this is the wrapped
	/// symbol and there is no bridge leg
	pub bridge_token: String,
	pub from_chain: u64,
	pub from_symbol: String,
	pub to_chain: u64,
	pub to_symbol: String,
	/// Deposit vs. redeem on the source side; None for Wrap/Unwrap
	#[serde(skip_serializing_if = "Option::is_none")]
	pub direction: Option<BridgeDirection>,
	/// Source endpoint is the chain's native coin
	pub native_source: bool,
	/// Destination endpoint is the chain's native coin
	pub native_dest: bool,
}

/// Estimator output: what the recipient receives and what the bridge kept
///
/// An `amount_out` of exactly zero is a valid, successful result meaning
/// "not economically viable at this size" and is distinct from an
/// estimation failure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BridgeEstimate {
	pub amount_out: Amount,
	pub bridge_fee: Amount,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_route_kind_legs() {
		assert!(!RouteKind::Direct.needs_local_swap());
		assert!(!RouteKind::Direct.needs_remote_swap());
		assert!(RouteKind::LocalSwap.needs_local_swap());
		assert!(RouteKind::RemoteSwap.needs_remote_swap());
		assert!(RouteKind::SwapBoth.needs_local_swap());
		assert!(RouteKind::SwapBoth.needs_remote_swap());
	}

	#[test]
	fn test_wrap_routes_have_no_bridge_leg() {
		assert!(!RouteKind::Wrap.has_bridge_leg());
		assert!(!RouteKind::Unwrap.has_bridge_leg());
		assert!(RouteKind::Direct.has_bridge_leg());
	}

	#[test]
	fn test_classification_serde() {
		let classification = RouteClassification {
			kind: RouteKind::SwapBoth,
			bridge_token: "nUSD".to_string(),
			from_chain: 1,
			from_symbol: "DAI".to_string(),
			to_chain: 56,
			to_symbol: "USDC".to_string(),
			direction: Some(BridgeDirection::Deposit),
			native_source: false,
			native_dest: false,
		};

		let json = serde_json::to_string(&classification).unwrap();
		let back: RouteClassification = serde_json::from_str(&json).unwrap();
		assert_eq!(back, classification);
	}
}
