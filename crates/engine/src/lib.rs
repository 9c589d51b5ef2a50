//! Bridge routing engine
//!
//! Three pure decision components over immutable registry data: the
//! route classifier, the output estimator and the transaction builder.
//! Classifier and builder are synchronous; the estimator's only
//! suspension points are the read-only oracle queries. None of them
//! hold mutable state, so one engine instance serves concurrent
//! requests without locking.

pub mod builder;
pub mod classifier;
pub mod estimator;

pub use builder::{EntryPoint, TransactionBuilder};
pub use classifier::RouteClassifier;
pub use estimator::{OutputEstimator, DEFAULT_QUERY_DEADLINE};
