//! Output estimation
//!
//! Threads an input amount through the read-only query pipeline a
//! classified route requires: local pool quote, bridge fee lookup,
//! remote pool quote. Stages within one call are causally ordered and
//! run sequentially; separate calls share no mutable state and are safe
//! to run fully in parallel.

use bridge_types::{
	Amount, BridgeEstimate, BridgeFeeOracle, EstimateError, OracleResult, RouteClassification,
	SwapQuoteOracle,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

/// Default per-query deadline
pub const DEFAULT_QUERY_DEADLINE: Duration = Duration::from_secs(10);

/// Composes external quotes into a single amount-out and fee breakdown
#[derive(Debug, Clone)]
pub struct OutputEstimator {
	bridge_oracle: Arc<dyn BridgeFeeOracle>,
	swap_oracle: Arc<dyn SwapQuoteOracle>,
	/// Deadline applied to each external query; an elapsed deadline
	/// reports [`EstimateError::Timeout`] with nothing to undo, since
	/// every query is read-only.
	deadline: Duration,
}

impl OutputEstimator {
	pub fn new(
		bridge_oracle: Arc<dyn BridgeFeeOracle>,
		swap_oracle: Arc<dyn SwapQuoteOracle>,
		deadline: Duration,
	) -> Self {
		Self {
			bridge_oracle,
			swap_oracle,
			deadline,
		}
	}

	/// Estimate the destination amount for a classified route
	///
	/// Idempotent against unchanged external state; never retries,
	/// since a point-in-time quote against caller-visible state gains
	/// nothing from a blind retry. A zero amount at any stage
	/// short-circuits to a successful zero estimate instead of feeding
	/// nonsense into downstream quotes.
	pub async fn estimate(
		&self,
		classification: &RouteClassification,
		amount_in: Amount,
	) -> Result<BridgeEstimate, EstimateError> {
		// Wrap and unwrap convert 1:1 on one chain; no external state
		// is involved.
		if !classification.kind.has_bridge_leg() {
			return Ok(BridgeEstimate {
				amount_out: amount_in,
				bridge_fee: Amount::ZERO,
			});
		}

		let mut amount = amount_in;

		if classification.kind.needs_local_swap() {
			amount = self
				.bounded(self.swap_oracle.quote_swap(
					classification.from_chain,
					&classification.from_symbol,
					&classification.bridge_token,
					amount,
				))
				.await?;
			debug!(%amount, "local swap quoted");
			if amount.is_zero() {
				return Ok(BridgeEstimate {
					amount_out: Amount::ZERO,
					bridge_fee: Amount::ZERO,
				});
			}
		}

		let quote = self
			.bounded(self.bridge_oracle.quote_bridge(
				&classification.bridge_token,
				classification.from_chain,
				classification.to_chain,
				amount,
			))
			.await?;
		amount = quote.amount_out;
		debug!(%amount, fee = %quote.fee, "bridge leg quoted");
		if amount.is_zero() {
			return Ok(BridgeEstimate {
				amount_out: Amount::ZERO,
				bridge_fee: quote.fee,
			});
		}

		if classification.kind.needs_remote_swap() {
			amount = self
				.bounded(self.swap_oracle.quote_swap(
					classification.to_chain,
					&classification.bridge_token,
					&classification.to_symbol,
					amount,
				))
				.await?;
			debug!(%amount, "remote swap quoted");
		}

		Ok(BridgeEstimate {
			amount_out: amount,
			bridge_fee: quote.fee,
		})
	}

	/// Run one external query under the configured deadline
	async fn bounded<T, F>(&self, query: F) -> Result<T, EstimateError>
	where
		F: Future<Output = OracleResult<T>>,
	{
		match timeout(self.deadline, query).await {
			Ok(result) => result.map_err(EstimateError::from),
			Err(_) => Err(EstimateError::Timeout {
				timeout_ms: self.deadline.as_millis() as u64,
			}),
		}
	}
}
