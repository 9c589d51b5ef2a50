//! Bridge SDK domain types
//!
//! Models, the error taxonomy and the external oracle traits shared by
//! the registry and engine crates. This crate performs no I/O.

pub mod amount;
pub mod asset;
pub mod errors;
pub mod network;
pub mod oracle;
pub mod payload;
pub mod route;

pub use amount::Amount;
pub use asset::Asset;
pub use errors::{BuildError, EstimateError, RegistryError, UnsupportedRoute};
pub use network::{Network, WrapPair};
pub use oracle::{BridgeFeeOracle, BridgeQuote, OracleError, OracleResult, SwapQuoteOracle};
pub use payload::{CallArg, TransactionPayload};
pub use route::{BridgeDirection, BridgeEstimate, RouteClassification, RouteKind, TransferRequest};

// Re-exported for downstream convenience
pub use serde_json;
