//! Route classification
//!
//! Maps a (network, asset) pair onto a transfer strategy, or explains
//! why none exists. Classification is recomputed per request; pool
//! composition can change between calls, so results are never cached.

use bridge_registry::Registry;
use bridge_types::{
	BridgeDirection, RouteClassification, RouteKind, TransferRequest, UnsupportedRoute,
};
use std::sync::Arc;
use tracing::debug;

/// Decides whether a requested transfer is routable and which strategy
/// applies
#[derive(Debug, Clone)]
pub struct RouteClassifier {
	registry: Arc<Registry>,
}

impl RouteClassifier {
	pub fn new(registry: Arc<Registry>) -> Self {
		Self { registry }
	}

	/// Classify a transfer request
	///
	/// Failure is always a typed [`UnsupportedRoute`]; callers branch on
	/// it directly.
	pub fn classify(&self, request: &TransferRequest) -> Result<RouteClassification, UnsupportedRoute> {
		if request.from_chain == request.to_chain {
			return self.classify_same_network(request);
		}

		self.require_deployed(&request.from_symbol, request.from_chain)?;
		self.require_deployed(&request.to_symbol, request.to_chain)?;

		let bridge_token = self.resolve_bridge_token(request)?;

		if !self
			.registry
			.pair_allows(request.from_chain, request.to_chain, &bridge_token)
		{
			return Err(UnsupportedRoute::PairRestricted {
				from_chain: request.from_chain,
				to_chain: request.to_chain,
				token: bridge_token,
			});
		}

		let kind = match (
			request.from_symbol == bridge_token,
			request.to_symbol == bridge_token,
		) {
			(true, true) => RouteKind::Direct,
			(false, true) => RouteKind::LocalSwap,
			(true, false) => RouteKind::RemoteSwap,
			(false, false) => RouteKind::SwapBoth,
		};

		// Leaving the bridge token's home chain locks collateral;
		// leaving anywhere else burns and redeems. Tokens without a
		// recorded home burn and mint on every chain.
		let home = self
			.registry
			.asset(&bridge_token)
			.and_then(|asset| asset.home_chain_id);
		let direction = if home == Some(request.from_chain) {
			BridgeDirection::Deposit
		} else {
			BridgeDirection::Redeem
		};

		debug!(
			from = %request.from_symbol,
			to = %request.to_symbol,
			token = %bridge_token,
			?kind,
			"route classified"
		);

		Ok(RouteClassification {
			kind,
			bridge_token,
			from_chain: request.from_chain,
			from_symbol: request.from_symbol.clone(),
			to_chain: request.to_chain,
			to_symbol: request.to_symbol.clone(),
			direction: Some(direction),
			native_source: self.is_native(&request.from_symbol),
			native_dest: self.is_native(&request.to_symbol),
		})
	}

	/// Yes/no convenience over [`classify`](Self::classify) for callers
	/// that only gate on support
	pub fn swap_supported(&self, request: &TransferRequest) -> (bool, Option<UnsupportedRoute>) {
		match self.classify(request) {
			Ok(_) => (true, None),
			Err(reason) => (false, Some(reason)),
		}
	}

	/// The one permitted same-network case is a native wrap/unwrap pair;
	/// everything else on a single chain is rejected.
	fn classify_same_network(
		&self,
		request: &TransferRequest,
	) -> Result<RouteClassification, UnsupportedRoute> {
		let pair = self
			.registry
			.wrap_pair_of(request.from_chain)
			.filter(|pair| {
				(pair.native_symbol == request.from_symbol
					&& pair.wrapped_symbol == request.to_symbol)
					|| (pair.wrapped_symbol == request.from_symbol
						&& pair.native_symbol == request.to_symbol)
			})
			.ok_or(UnsupportedRoute::SameNetwork)?;

		let wrapping = pair.native_symbol == request.from_symbol;
		Ok(RouteClassification {
			kind: if wrapping {
				RouteKind::Wrap
			} else {
				RouteKind::Unwrap
			},
			bridge_token: pair.wrapped_symbol.clone(),
			from_chain: request.from_chain,
			from_symbol: request.from_symbol.clone(),
			to_chain: request.to_chain,
			to_symbol: request.to_symbol.clone(),
			direction: None,
			native_source: wrapping,
			native_dest: !wrapping,
		})
	}

	fn require_deployed(&self, symbol: &str, chain_id: u64) -> Result<(), UnsupportedRoute> {
		if self.registry.address_of(symbol, chain_id).is_none() {
			return Err(UnsupportedRoute::AssetAbsent {
				symbol: symbol.to_string(),
				chain_id,
			});
		}
		Ok(())
	}

	/// Find an asset that is a bridge token, reachable from the source
	/// endpoint on the source pool, and reachable to the destination
	/// endpoint on the destination pool
	///
	/// Tie-break order when several qualify: an endpoint asset itself
	/// (minimizes swap legs), then the source group's members in their
	/// configured priority order.
	fn resolve_bridge_token(&self, request: &TransferRequest) -> Result<String, UnsupportedRoute> {
		let group_from = self
			.registry
			.pool_group(&request.from_symbol, request.from_chain);
		let group_to = self.registry.pool_group(&request.to_symbol, request.to_chain);

		let reachable_from = |symbol: &str| {
			symbol == request.from_symbol
				|| group_from.map(|g| g.contains(symbol)).unwrap_or(false)
		};
		let reachable_to = |symbol: &str| {
			symbol == request.to_symbol || group_to.map(|g| g.contains(symbol)).unwrap_or(false)
		};
		let qualifies = |symbol: &str| {
			self.registry.is_bridge_token(symbol)
				&& reachable_from(symbol)
				&& reachable_to(symbol)
				&& self.registry.address_of(symbol, request.from_chain).is_some()
				&& self.registry.address_of(symbol, request.to_chain).is_some()
		};

		let mut candidates: Vec<&str> = vec![&request.from_symbol, &request.to_symbol];
		if let Some(group) = group_from {
			candidates.extend(group.members.iter().map(String::as_str));
		}

		candidates
			.into_iter()
			.find(|symbol| qualifies(symbol))
			.map(String::from)
			.ok_or(UnsupportedRoute::NoCommonBridgeToken)
	}

	fn is_native(&self, symbol: &str) -> bool {
		self.registry
			.asset(symbol)
			.map(|asset| asset.is_native)
			.unwrap_or(false)
	}
}
