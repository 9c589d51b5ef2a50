//! Output estimation through the facade with mocked oracles

mod mocks;

use std::sync::Arc;
use std::time::Duration;

use bridge_sdk::mocks::{MockBridgeOracle, MockSwapOracle};
use bridge_sdk::mainnet::chains;
use bridge_sdk::{Amount, Bridge, BridgeError, EstimateError};
use mocks::{bridge_with, request};

#[tokio::test]
async fn test_direct_route_deducts_only_the_bridge_fee() {
	let bridge_oracle = Arc::new(MockBridgeOracle::new().with_flat_fee(Amount::new(250)));
	let swap_oracle = Arc::new(MockSwapOracle::new());
	let bridge = bridge_with(bridge_oracle.clone(), swap_oracle.clone());

	let estimate = bridge
		.estimate(&request(chains::ETHEREUM, "nUSD", chains::BSC, "nUSD"))
		.await
		.unwrap();

	assert_eq!(estimate.amount_out, Amount::new(999_750));
	assert_eq!(estimate.bridge_fee, Amount::new(250));
	assert_eq!(bridge_oracle.call_count(), 1);
	assert_eq!(swap_oracle.call_count(), 0);
}

#[tokio::test]
async fn test_swap_both_threads_quotes_through_all_three_stages() {
	// 0.5% slippage on each pool leg, 100 flat bridge fee
	let bridge_oracle = Arc::new(MockBridgeOracle::new().with_flat_fee(Amount::new(100)));
	let swap_oracle = Arc::new(
		MockSwapOracle::new()
			.with_rate(chains::ETHEREUM, "DAI", "nUSD", 9_950)
			.with_rate(chains::BSC, "nUSD", "USDC", 9_950),
	);
	let bridge = bridge_with(bridge_oracle.clone(), swap_oracle.clone());

	let estimate = bridge
		.estimate(&request(chains::ETHEREUM, "DAI", chains::BSC, "USDC"))
		.await
		.unwrap();

	// 1_000_000 -> 995_000 -> 994_900 -> 989_925 (floor of 994_900 * 0.995)
	assert_eq!(estimate.amount_out, Amount::new(989_925));
	assert_eq!(estimate.bridge_fee, Amount::new(100));
	assert_eq!(bridge_oracle.call_count(), 1);
	assert_eq!(swap_oracle.call_count(), 2);
}

#[tokio::test]
async fn test_fee_swallowing_the_amount_is_a_zero_estimate() {
	let bridge = bridge_with(
		Arc::new(MockBridgeOracle::new().with_flat_fee(Amount::new(2_000_000))),
		Arc::new(MockSwapOracle::new()),
	);

	let estimate = bridge
		.estimate(&request(chains::ETHEREUM, "nUSD", chains::BSC, "nUSD"))
		.await
		.unwrap();
	assert_eq!(estimate.amount_out, Amount::ZERO);
	assert_eq!(estimate.bridge_fee, Amount::new(2_000_000));
}

#[tokio::test]
async fn test_dry_pool_is_a_liquidity_error_not_a_zero() {
	let bridge = bridge_with(
		Arc::new(MockBridgeOracle::new()),
		Arc::new(MockSwapOracle::new().with_dry_pair(chains::ETHEREUM, "DAI", "nUSD")),
	);

	let err = bridge
		.estimate(&request(chains::ETHEREUM, "DAI", chains::BSC, "USDC"))
		.await
		.unwrap_err();
	assert_eq!(err, BridgeError::Estimate(EstimateError::InsufficientLiquidity));
}

#[tokio::test]
async fn test_bridge_limits_surface_as_typed_errors() {
	let bridge = bridge_with(
		Arc::new(MockBridgeOracle::new().with_min_amount(Amount::new(10_000_000))),
		Arc::new(MockSwapOracle::new()),
	);

	let err = bridge
		.estimate(&request(chains::ETHEREUM, "nUSD", chains::BSC, "nUSD"))
		.await
		.unwrap_err();
	assert_eq!(err, BridgeError::Estimate(EstimateError::BelowMinimum));
}

#[tokio::test]
async fn test_slow_oracle_hits_the_configured_deadline() {
	let bridge = Bridge::builder()
		.with_bridge_oracle(Arc::new(
			MockBridgeOracle::new().with_delay(Duration::from_millis(200)),
		))
		.with_swap_oracle(Arc::new(MockSwapOracle::new()))
		.with_deadline(Duration::from_millis(20))
		.build()
		.unwrap();

	let err = bridge
		.estimate(&request(chains::ETHEREUM, "nUSD", chains::BSC, "nUSD"))
		.await
		.unwrap_err();
	assert_eq!(
		err,
		BridgeError::Estimate(EstimateError::Timeout { timeout_ms: 20 })
	);
}

#[tokio::test]
async fn test_unsupported_route_fails_before_any_oracle_call() {
	let bridge_oracle = Arc::new(MockBridgeOracle::new());
	let swap_oracle = Arc::new(MockSwapOracle::new());
	let bridge = bridge_with(bridge_oracle.clone(), swap_oracle.clone());

	let err = bridge
		.estimate(&request(chains::ETHEREUM, "ETH", chains::BSC, "USDC"))
		.await
		.unwrap_err();
	assert!(matches!(err, BridgeError::Unsupported(_)));
	assert_eq!(bridge_oracle.call_count(), 0);
	assert_eq!(swap_oracle.call_count(), 0);
}

#[tokio::test]
async fn test_larger_input_never_estimates_smaller_output() {
	let bridge = bridge_with(
		Arc::new(MockBridgeOracle::new().with_flat_fee(Amount::new(100)).with_fee_bps(10)),
		Arc::new(MockSwapOracle::new().with_default_rate_bps(9_990)),
	);

	let mut previous = Amount::ZERO;
	for amount in [1_000u128, 10_000, 100_000, 1_000_000] {
		let mut req = request(chains::ETHEREUM, "DAI", chains::BSC, "USDC");
		req.amount_in = Amount::new(amount);
		let estimate = bridge.estimate(&req).await.unwrap();
		assert!(estimate.amount_out >= previous, "regressed at {amount}");
		previous = estimate.amount_out;
	}
}
