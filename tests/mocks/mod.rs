//! Shared fixtures for the integration suites

#![allow(dead_code)]

use std::sync::Arc;

use bridge_sdk::mocks::{MockBridgeOracle, MockSwapOracle};
use bridge_sdk::{Amount, Bridge, TransferRequest};

pub const RECIPIENT: &str = "0x00000000000000000000000000000000DeaDBeef";

/// Bridge over the mainnet topology with caller-supplied oracle mocks
///
/// Takes the mocks behind `Arc` so tests can keep a handle for call
/// count assertions after wiring them in.
pub fn bridge_with(bridge_oracle: Arc<MockBridgeOracle>, swap_oracle: Arc<MockSwapOracle>) -> Bridge {
	Bridge::builder()
		.with_bridge_oracle(bridge_oracle)
		.with_swap_oracle(swap_oracle)
		.build()
		.unwrap()
}

/// Bridge with benign oracle defaults: a small flat fee and 1:1 swaps
pub fn bridge() -> Bridge {
	bridge_with(
		Arc::new(MockBridgeOracle::new().with_flat_fee(Amount::new(100))),
		Arc::new(MockSwapOracle::new()),
	)
}

pub fn request(from_chain: u64, from: &str, to_chain: u64, to: &str) -> TransferRequest {
	TransferRequest::new(from_chain, from, to_chain, to, Amount::new(1_000_000))
}
