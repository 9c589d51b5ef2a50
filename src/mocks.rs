//! Deterministic oracle implementations for tests and examples
//!
//! Both mocks answer from in-memory configuration, track call counts,
//! and can inject failures or latency, so estimator behavior can be
//! pinned down without a network in sight.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::{Amount, BridgeFeeOracle, BridgeQuote, OracleError, OracleResult, SwapQuoteOracle};

/// Bridge fee oracle with a flat fee plus a proportional component
///
/// Quotes `amount_in - (flat_fee + amount_in * fee_bps)`, saturating at
/// zero when the fee swallows the whole amount. Optional hard limits
/// reject amounts outside `[min_amount, max_amount]`.
#[derive(Debug, Default)]
pub struct MockBridgeOracle {
	flat_fee: Amount,
	fee_bps: u32,
	min_amount: Option<Amount>,
	max_amount: Option<Amount>,
	fail_with: Option<OracleError>,
	delay: Option<Duration>,
	calls: AtomicUsize,
}

impl MockBridgeOracle {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_flat_fee(mut self, fee: Amount) -> Self {
		self.flat_fee = fee;
		self
	}

	pub fn with_fee_bps(mut self, bps: u32) -> Self {
		self.fee_bps = bps;
		self
	}

	pub fn with_min_amount(mut self, min: Amount) -> Self {
		self.min_amount = Some(min);
		self
	}

	pub fn with_max_amount(mut self, max: Amount) -> Self {
		self.max_amount = Some(max);
		self
	}

	/// Fail every quote with the given error
	pub fn with_failure(mut self, error: OracleError) -> Self {
		self.fail_with = Some(error);
		self
	}

	/// Delay every quote, for exercising deadlines
	pub fn with_delay(mut self, delay: Duration) -> Self {
		self.delay = Some(delay);
		self
	}

	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::Relaxed)
	}
}

#[async_trait]
impl BridgeFeeOracle for MockBridgeOracle {
	async fn quote_bridge(
		&self,
		_token: &str,
		_from_chain: u64,
		_to_chain: u64,
		amount_in: Amount,
	) -> OracleResult<BridgeQuote> {
		self.calls.fetch_add(1, Ordering::Relaxed);

		if let Some(delay) = self.delay {
			tokio::time::sleep(delay).await;
		}
		if let Some(err) = &self.fail_with {
			return Err(err.clone());
		}
		if let Some(min) = self.min_amount {
			if amount_in < min {
				return Err(OracleError::BelowMinimum);
			}
		}
		if let Some(max) = self.max_amount {
			if amount_in > max {
				return Err(OracleError::AboveMaximum);
			}
		}

		let fee = match self.flat_fee.checked_add(amount_in.mul_bps(self.fee_bps)) {
			Some(fee) => fee,
			None => amount_in,
		};
		Ok(BridgeQuote {
			amount_out: amount_in.saturating_sub(fee),
			fee,
		})
	}
}

/// Swap quote oracle answering from a per-pair rate table
///
/// Rates are in basis points of the input amount (10_000 = 1:1). Pairs
/// absent from the table fall back to `default_rate_bps`; pairs marked
/// dry report [`OracleError::InsufficientLiquidity`].
#[derive(Debug)]
pub struct MockSwapOracle {
	rates: HashMap<(u64, String, String), u32>,
	dry_pairs: HashSet<(u64, String, String)>,
	default_rate_bps: u32,
	fail_with: Option<OracleError>,
	delay: Option<Duration>,
	calls: AtomicUsize,
}

impl Default for MockSwapOracle {
	fn default() -> Self {
		Self {
			rates: HashMap::new(),
			dry_pairs: HashSet::new(),
			default_rate_bps: 10_000,
			fail_with: None,
			delay: None,
			calls: AtomicUsize::new(0),
		}
	}
}

impl MockSwapOracle {
	pub fn new() -> Self {
		Self::default()
	}

	/// Rate applied to pairs with no explicit table entry
	pub fn with_default_rate_bps(mut self, bps: u32) -> Self {
		self.default_rate_bps = bps;
		self
	}

	/// Pin the rate for one directed pair on one chain
	pub fn with_rate(mut self, chain_id: u64, symbol_in: &str, symbol_out: &str, bps: u32) -> Self {
		self.rates
			.insert((chain_id, symbol_in.to_string(), symbol_out.to_string()), bps);
		self
	}

	/// Mark a directed pair as having no liquidity
	pub fn with_dry_pair(mut self, chain_id: u64, symbol_in: &str, symbol_out: &str) -> Self {
		self.dry_pairs
			.insert((chain_id, symbol_in.to_string(), symbol_out.to_string()));
		self
	}

	pub fn with_failure(mut self, error: OracleError) -> Self {
		self.fail_with = Some(error);
		self
	}

	pub fn with_delay(mut self, delay: Duration) -> Self {
		self.delay = Some(delay);
		self
	}

	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::Relaxed)
	}
}

#[async_trait]
impl SwapQuoteOracle for MockSwapOracle {
	async fn quote_swap(
		&self,
		chain_id: u64,
		symbol_in: &str,
		symbol_out: &str,
		amount_in: Amount,
	) -> OracleResult<Amount> {
		self.calls.fetch_add(1, Ordering::Relaxed);

		if let Some(delay) = self.delay {
			tokio::time::sleep(delay).await;
		}
		if let Some(err) = &self.fail_with {
			return Err(err.clone());
		}

		let key = (chain_id, symbol_in.to_string(), symbol_out.to_string());
		if self.dry_pairs.contains(&key) {
			return Err(OracleError::InsufficientLiquidity);
		}

		let bps = self.rates.get(&key).copied().unwrap_or(self.default_rate_bps);
		Ok(amount_in.mul_bps(bps))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_bridge_mock_applies_flat_and_proportional_fee() {
		let oracle = MockBridgeOracle::new()
			.with_flat_fee(Amount::new(50))
			.with_fee_bps(100); // 1%

		let quote = oracle
			.quote_bridge("nUSD", 1, 56, Amount::new(10_000))
			.await
			.unwrap();
		assert_eq!(quote.fee, Amount::new(150));
		assert_eq!(quote.amount_out, Amount::new(9_850));
		assert_eq!(oracle.call_count(), 1);
	}

	#[tokio::test]
	async fn test_bridge_mock_saturates_to_zero_below_fee() {
		let oracle = MockBridgeOracle::new().with_flat_fee(Amount::new(500));

		let quote = oracle
			.quote_bridge("nUSD", 1, 56, Amount::new(100))
			.await
			.unwrap();
		assert_eq!(quote.amount_out, Amount::ZERO);
		assert_eq!(quote.fee, Amount::new(500));
	}

	#[tokio::test]
	async fn test_bridge_mock_enforces_limits() {
		let oracle = MockBridgeOracle::new()
			.with_min_amount(Amount::new(100))
			.with_max_amount(Amount::new(1_000));

		assert_eq!(
			oracle.quote_bridge("nUSD", 1, 56, Amount::new(99)).await,
			Err(OracleError::BelowMinimum)
		);
		assert_eq!(
			oracle.quote_bridge("nUSD", 1, 56, Amount::new(1_001)).await,
			Err(OracleError::AboveMaximum)
		);
		assert!(oracle
			.quote_bridge("nUSD", 1, 56, Amount::new(500))
			.await
			.is_ok());
	}

	#[tokio::test]
	async fn test_swap_mock_rate_table_overrides_default() {
		let oracle = MockSwapOracle::new()
			.with_default_rate_bps(10_000)
			.with_rate(1, "DAI", "nUSD", 9_900);

		let pinned = oracle
			.quote_swap(1, "DAI", "nUSD", Amount::new(10_000))
			.await
			.unwrap();
		assert_eq!(pinned, Amount::new(9_900));

		let fallback = oracle
			.quote_swap(1, "USDC", "nUSD", Amount::new(10_000))
			.await
			.unwrap();
		assert_eq!(fallback, Amount::new(10_000));
		assert_eq!(oracle.call_count(), 2);
	}

	#[tokio::test]
	async fn test_swap_mock_dry_pair_reports_no_liquidity() {
		let oracle = MockSwapOracle::new().with_dry_pair(56, "nUSD", "USDC");

		assert_eq!(
			oracle.quote_swap(56, "nUSD", "USDC", Amount::new(100)).await,
			Err(OracleError::InsufficientLiquidity)
		);
		// reverse direction is untouched
		assert!(oracle
			.quote_swap(56, "USDC", "nUSD", Amount::new(100))
			.await
			.is_ok());
	}
}
