//! Bridge SDK
//!
//! Determines whether a cross-network asset transfer is possible,
//! estimates what the recipient will receive, and produces the
//! correctly-shaped unsigned transaction to execute it. Signing,
//! broadcast and RPC transport stay with the caller.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::info;

// Core domain types
pub use bridge_types::{
	Amount,
	Asset,
	BridgeDirection,
	BridgeEstimate,
	// Oracle boundary
	BridgeFeeOracle,
	BridgeQuote,
	// Error taxonomy
	BuildError,
	CallArg,
	EstimateError,
	Network,
	OracleError,
	OracleResult,
	RegistryError,
	RouteClassification,
	RouteKind,
	SwapQuoteOracle,
	TransactionPayload,
	TransferRequest,
	UnsupportedRoute,
	WrapPair,
};

// Registry layer
pub use bridge_registry::{
	load_registry, mainnet, PoolGroup, Registry, RegistryConfig, RegistryLoadError,
};

// Engine layer
pub use bridge_engine::{
	EntryPoint, OutputEstimator, RouteClassifier, TransactionBuilder, DEFAULT_QUERY_DEADLINE,
};

// Re-exported external dependencies for downstream convenience
pub use async_trait;
pub use serde_json;

pub mod mocks;

/// Failures surfaced by the combined facade operations
///
/// Each variant wraps one component's typed failure; single-component
/// entry points return the component error directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
	#[error("route unsupported: {0}")]
	Unsupported(#[from] UnsupportedRoute),

	#[error("estimation failed: {0}")]
	Estimate(#[from] EstimateError),

	#[error("transaction construction failed: {0}")]
	Build(#[from] BuildError),
}

/// Wiring mistakes caught when assembling a [`Bridge`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
	#[error("no {which} oracle was provided")]
	MissingOracle { which: &'static str },
}

/// Handle over one registry topology and one pair of oracle endpoints
///
/// Classifier, estimator and builder all consume the same registry
/// reference, so the read path and the write path can never disagree
/// about strategy. The handle is cheap to clone and safe to share
/// across tasks.
#[derive(Debug, Clone)]
pub struct Bridge {
	classifier: RouteClassifier,
	estimator: OutputEstimator,
	builder: TransactionBuilder,
}

impl Bridge {
	pub fn builder() -> BridgeBuilder {
		BridgeBuilder::default()
	}

	/// Classify a transfer request; see [`RouteClassifier::classify`]
	pub fn classify(
		&self,
		request: &TransferRequest,
	) -> Result<RouteClassification, UnsupportedRoute> {
		self.classifier.classify(request)
	}

	/// Yes/no support check with the failure reason when unsupported
	pub fn swap_supported(&self, request: &TransferRequest) -> (bool, Option<UnsupportedRoute>) {
		self.classifier.swap_supported(request)
	}

	/// Classify and estimate in one call
	pub async fn estimate(&self, request: &TransferRequest) -> Result<BridgeEstimate, BridgeError> {
		let classification = self.classifier.classify(request)?;
		Ok(self
			.estimator
			.estimate(&classification, request.amount_in)
			.await?)
	}

	/// Estimate an already-classified route
	pub async fn estimate_classified(
		&self,
		classification: &RouteClassification,
		amount_in: Amount,
	) -> Result<BridgeEstimate, EstimateError> {
		self.estimator.estimate(classification, amount_in).await
	}

	/// Build the unsigned transaction for an already-classified route
	pub fn build(
		&self,
		classification: &RouteClassification,
		amount_in: Amount,
		amount_out_min: Amount,
		recipient: &str,
	) -> Result<TransactionPayload, BuildError> {
		self.builder
			.build(classification, amount_in, amount_out_min, recipient)
	}

	/// ERC-20 allowance payload to mine before [`build`](Self::build)'s
	/// transaction, or `None` when the route spends no token
	pub fn build_approval(
		&self,
		classification: &RouteClassification,
		amount: Amount,
	) -> Result<Option<TransactionPayload>, BuildError> {
		self.builder.build_approval(classification, amount)
	}

	/// Classify, estimate, and build with the estimate as the minimum
	/// acceptable output
	///
	/// The convenience path most callers want: quote first, then
	/// construct the transaction that enforces the quoted output.
	pub async fn estimate_and_build(
		&self,
		request: &TransferRequest,
		recipient: &str,
	) -> Result<(BridgeEstimate, TransactionPayload), BridgeError> {
		let classification = self.classifier.classify(request)?;
		let estimate = self
			.estimator
			.estimate(&classification, request.amount_in)
			.await?;
		let payload = self.builder.build(
			&classification,
			request.amount_in,
			estimate.amount_out.min(request.amount_in),
			recipient,
		)?;
		Ok((estimate, payload))
	}
}

/// Assembles a [`Bridge`] from a registry and oracle handles
#[derive(Default)]
pub struct BridgeBuilder {
	registry: Option<Arc<Registry>>,
	bridge_oracle: Option<Arc<dyn BridgeFeeOracle>>,
	swap_oracle: Option<Arc<dyn SwapQuoteOracle>>,
	deadline: Option<Duration>,
}

impl BridgeBuilder {
	/// Use a specific registry; defaults to the compiled-in mainnet
	/// topology
	pub fn with_registry(mut self, registry: Arc<Registry>) -> Self {
		self.registry = Some(registry);
		self
	}

	pub fn with_bridge_oracle(mut self, oracle: Arc<dyn BridgeFeeOracle>) -> Self {
		self.bridge_oracle = Some(oracle);
		self
	}

	pub fn with_swap_oracle(mut self, oracle: Arc<dyn SwapQuoteOracle>) -> Self {
		self.swap_oracle = Some(oracle);
		self
	}

	/// Per-query deadline propagated into each external call
	pub fn with_deadline(mut self, deadline: Duration) -> Self {
		self.deadline = Some(deadline);
		self
	}

	pub fn build(self) -> Result<Bridge, SetupError> {
		let registry = self
			.registry
			.unwrap_or_else(|| Arc::new(mainnet::mainnet()));
		let bridge_oracle = self
			.bridge_oracle
			.ok_or(SetupError::MissingOracle { which: "bridge fee" })?;
		let swap_oracle = self
			.swap_oracle
			.ok_or(SetupError::MissingOracle { which: "swap quote" })?;
		let deadline = self.deadline.unwrap_or(DEFAULT_QUERY_DEADLINE);

		info!(
			networks = registry.networks().count(),
			assets = registry.assets().count(),
			deadline_ms = deadline.as_millis() as u64,
			"bridge handle assembled"
		);

		Ok(Bridge {
			classifier: RouteClassifier::new(Arc::clone(&registry)),
			estimator: OutputEstimator::new(bridge_oracle, swap_oracle, deadline),
			builder: TransactionBuilder::new(registry),
		})
	}
}

/// Initialize tracing from `RUST_LOG`, defaulting to `info`
///
/// Convenience for binaries and examples; library callers normally own
/// their own subscriber.
pub fn init_tracing() {
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
	tracing_subscriber::fmt()
		.compact()
		.with_env_filter(env_filter)
		.init();
}
