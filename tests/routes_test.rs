//! Route support matrix over the mainnet topology
//!
//! Table-driven coverage of which (network, asset) pairs are bridgeable
//! and why the unsupported ones fail.

mod mocks;

use bridge_sdk::mainnet::chains;
use bridge_sdk::{RouteKind, UnsupportedRoute};
use mocks::{bridge, request};

#[test]
fn test_route_support_matrix() {
	let bridge = bridge();

	// (from chain, from symbol, to chain, to symbol, supported)
	let table = [
		// stables cross through the nUSD pools
		(chains::ETHEREUM, "DAI", chains::BSC, "USDC", true),
		(chains::ETHEREUM, "USDC", chains::POLYGON, "USDT", true),
		(chains::BSC, "USDT", chains::AVALANCHE, "DAI", true),
		(chains::FANTOM, "MIM", chains::BSC, "USDT", true),
		(chains::AURORA, "USDC", chains::ARBITRUM, "nUSD", true),
		// ether legs through the nETH pools
		(chains::ETHEREUM, "ETH", chains::OPTIMISM, "ETH", true),
		(chains::ARBITRUM, "ETH", chains::AVALANCHE, "nETH", true),
		(chains::ETHEREUM, "WETH", chains::AVALANCHE, "WETH.e", true),
		(chains::OPTIMISM, "WETH", chains::ARBITRUM, "ETH", true),
		// ungrouped bridge tokens route directly
		(chains::ETHEREUM, "SYN", chains::AURORA, "SYN", true),
		(chains::MOONRIVER, "FRAX", chains::ETHEREUM, "FRAX", true),
		(chains::POLYGON, "gOHM", chains::AVALANCHE, "gOHM", true),
		(chains::BSC, "JUMP", chains::FANTOM, "JUMP", true),
		(chains::ETHEREUM, "DOG", chains::POLYGON, "DOG", true),
		// same-chain wrap pair
		(chains::ARBITRUM, "ETH", chains::ARBITRUM, "WETH", true),
		// no common bridge token across pools
		(chains::ETHEREUM, "ETH", chains::BSC, "USDC", false),
		(chains::ETHEREUM, "USDC", chains::OPTIMISM, "ETH", false),
		// the Boba ether leg is restricted in both directions
		(chains::ETHEREUM, "ETH", chains::BOBA, "ETH", false),
		(chains::BOBA, "ETH", chains::ETHEREUM, "ETH", false),
		// missing deployments; Avalanche carries ether as WETH.e, never
		// as a bare ETH symbol
		(chains::ARBITRUM, "WETH", chains::AVALANCHE, "ETH", false),
		(chains::ETHEREUM, "DAI", chains::FANTOM, "DAI", false),
		(chains::MOONRIVER, "USDC", chains::ETHEREUM, "USDC", false),
		(chains::BSC, "FRAX", chains::ETHEREUM, "FRAX", false),
		// same chain without a wrap pair involved
		(chains::AURORA, "USDC", chains::AURORA, "USDT", false),
		(chains::BSC, "SYN", chains::BSC, "SYN", false),
	];

	for (from_chain, from, to_chain, to, expected) in table {
		let (supported, reason) = bridge.swap_supported(&request(from_chain, from, to_chain, to));
		assert_eq!(
			supported, expected,
			"{from}@{from_chain} -> {to}@{to_chain}, reason: {reason:?}"
		);
		assert_eq!(reason.is_none(), expected);
	}
}

#[test]
fn test_unsupported_reasons_are_specific() {
	let bridge = bridge();

	let err = bridge
		.classify(&request(chains::ETHEREUM, "ETH", chains::BOBA, "ETH"))
		.unwrap_err();
	assert_eq!(
		err,
		UnsupportedRoute::PairRestricted {
			from_chain: chains::ETHEREUM,
			to_chain: chains::BOBA,
			token: "nETH".to_string(),
		}
	);

	let err = bridge
		.classify(&request(chains::ETHEREUM, "DAI", chains::FANTOM, "DAI"))
		.unwrap_err();
	assert_eq!(
		err,
		UnsupportedRoute::AssetAbsent {
			symbol: "DAI".to_string(),
			chain_id: chains::FANTOM,
		}
	);

	let err = bridge
		.classify(&request(chains::ETHEREUM, "ETH", chains::BSC, "USDC"))
		.unwrap_err();
	assert_eq!(err, UnsupportedRoute::NoCommonBridgeToken);

	let err = bridge
		.classify(&request(chains::ARBITRUM, "WETH", chains::AVALANCHE, "ETH"))
		.unwrap_err();
	assert_eq!(
		err,
		UnsupportedRoute::AssetAbsent {
			symbol: "ETH".to_string(),
			chain_id: chains::AVALANCHE,
		}
	);

	let err = bridge
		.classify(&request(chains::BSC, "USDC", chains::BSC, "USDT"))
		.unwrap_err();
	assert_eq!(err, UnsupportedRoute::SameNetwork);
}

#[test]
fn test_classification_kinds_across_the_matrix() {
	let bridge = bridge();

	let cases = [
		(chains::ETHEREUM, "nUSD", chains::BSC, "nUSD", RouteKind::Direct),
		(chains::ETHEREUM, "DAI", chains::BSC, "nUSD", RouteKind::LocalSwap),
		(chains::ETHEREUM, "nUSD", chains::BSC, "USDC", RouteKind::RemoteSwap),
		(chains::ETHEREUM, "DAI", chains::BSC, "USDC", RouteKind::SwapBoth),
		(chains::OPTIMISM, "ETH", chains::OPTIMISM, "WETH", RouteKind::Wrap),
		(chains::OPTIMISM, "WETH", chains::OPTIMISM, "ETH", RouteKind::Unwrap),
	];

	for (from_chain, from, to_chain, to, expected) in cases {
		let c = bridge
			.classify(&request(from_chain, from, to_chain, to))
			.unwrap();
		assert_eq!(c.kind, expected, "{from}@{from_chain} -> {to}@{to_chain}");
	}
}
