//! Transaction construction
//!
//! Maps a classified route onto exactly one contract entry point and
//! produces the matching unsigned payload. The entry-point table is
//! total over every classification the classifier can produce; a gap
//! would be a defect in the table, not a runtime condition, and the
//! totality is asserted by test.

use bridge_registry::Registry;
use bridge_types::{
	Amount, BridgeDirection, BuildError, CallArg, RouteClassification, RouteKind,
	TransactionPayload,
};
use std::sync::Arc;
use tracing::debug;

/// The contract entry points a payload can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPoint {
	/// Plain ERC-20 deposit on the bridge token's home chain
	Deposit,
	/// Native-coin deposit; the zap wraps before depositing
	DepositNative,
	/// Plain ERC-20 burn-and-redeem off the home chain
	Redeem,
	/// Redeem delivering the destination chain's native coin
	RedeemNative,
	/// Local pool swap, then deposit, in one transaction
	SwapAndDeposit,
	/// Deposit with a swap instruction for the destination chain
	DepositAndSwap,
	/// Local pool swap, then redeem
	SwapAndRedeem,
	/// Native-coin wrap-and-swap, then redeem
	SwapNativeAndRedeem,
	/// Redeem with a swap instruction for the destination chain
	RedeemAndSwap,
	/// Native deposit with a destination swap instruction
	DepositNativeAndSwap,
	/// Both swap legs around a deposit, atomically
	SwapAndDepositAndSwap,
	/// Both swap legs around a redeem, atomically
	SwapAndRedeemAndSwap,
	/// Native wrap-and-swap, redeem, then a destination swap
	SwapNativeAndRedeemAndSwap,
	/// Same-chain native wrap; targets the wrapped-native contract
	WrapNative,
	/// Same-chain unwrap back to the native coin
	UnwrapNative,
}

impl EntryPoint {
	/// Select the single entry point for a classification
	///
	/// Total by construction: every (kind, direction, native flags)
	/// combination the classifier emits lands in exactly one arm.
	pub fn select(classification: &RouteClassification) -> EntryPoint {
		use BridgeDirection::{Deposit, Redeem};
		use EntryPoint as E;
		use RouteKind as K;

		let native_src = classification.native_source;
		let native_dst = classification.native_dest;
		// Wrap/Unwrap carry no direction; any bridge-leg kind does.
		let direction = classification.direction.unwrap_or(Redeem);

		match (classification.kind, direction) {
			(K::Wrap, _) => E::WrapNative,
			(K::Unwrap, _) => E::UnwrapNative,
			(K::Direct, Deposit) => E::Deposit,
			(K::Direct, Redeem) => {
				if native_dst {
					E::RedeemNative
				} else {
					E::Redeem
				}
			},
			(K::LocalSwap, Deposit) => {
				if native_src {
					E::DepositNative
				} else {
					E::SwapAndDeposit
				}
			},
			(K::LocalSwap, Redeem) => {
				if native_src {
					E::SwapNativeAndRedeem
				} else {
					E::SwapAndRedeem
				}
			},
			(K::RemoteSwap, Deposit) => E::DepositAndSwap,
			(K::RemoteSwap, Redeem) => E::RedeemAndSwap,
			(K::SwapBoth, Deposit) => {
				if native_src {
					E::DepositNativeAndSwap
				} else {
					E::SwapAndDepositAndSwap
				}
			},
			(K::SwapBoth, Redeem) => {
				if native_src {
					E::SwapNativeAndRedeemAndSwap
				} else {
					E::SwapAndRedeemAndSwap
				}
			},
		}
	}

	/// Solidity signature of the entry point
	pub fn signature(&self) -> &'static str {
		match self {
			EntryPoint::Deposit => "deposit(address,uint256,address,uint256)",
			EntryPoint::Redeem => "redeem(address,uint256,address,uint256)",
			EntryPoint::RedeemNative => "redeemAndUnwrap(address,uint256,address,uint256)",
			EntryPoint::DepositNative => "depositETH(address,uint256,uint256,uint256)",
			EntryPoint::SwapAndDeposit => "swapAndDeposit(address,uint256,address,uint256,uint256)",
			EntryPoint::DepositAndSwap => "depositAndSwap(address,uint256,address,uint256,uint256)",
			EntryPoint::SwapAndRedeem => "swapAndRedeem(address,uint256,address,uint256,uint256)",
			EntryPoint::SwapNativeAndRedeem => "swapETHAndRedeem(address,uint256,uint256,uint256)",
			EntryPoint::RedeemAndSwap => "redeemAndSwap(address,uint256,address,uint256,uint256)",
			EntryPoint::DepositNativeAndSwap => "depositETHAndSwap(address,uint256,uint256,uint256)",
			EntryPoint::SwapAndDepositAndSwap => {
				"swapAndDepositAndSwap(address,uint256,address,uint256,uint256)"
			},
			EntryPoint::SwapAndRedeemAndSwap => {
				"swapAndRedeemAndSwap(address,uint256,address,uint256,uint256)"
			},
			EntryPoint::SwapNativeAndRedeemAndSwap => {
				"swapETHAndRedeemAndSwap(address,uint256,uint256,uint256)"
			},
			EntryPoint::WrapNative => "deposit()",
			EntryPoint::UnwrapNative => "withdraw(uint256)",
		}
	}

	/// Whether the call attaches the input amount as native value
	pub fn attaches_value(&self) -> bool {
		matches!(
			self,
			EntryPoint::DepositNative
				| EntryPoint::DepositNativeAndSwap
				| EntryPoint::SwapNativeAndRedeem
				| EntryPoint::SwapNativeAndRedeemAndSwap
				| EntryPoint::WrapNative
		)
	}

	/// Whether the ERC-20 bridge token address appears in the argument
	/// list (native variants imply it; same-chain wrap calls take none)
	fn takes_token_arg(&self) -> bool {
		!matches!(
			self,
			EntryPoint::DepositNative
				| EntryPoint::DepositNativeAndSwap
				| EntryPoint::SwapNativeAndRedeem
				| EntryPoint::SwapNativeAndRedeemAndSwap
				| EntryPoint::WrapNative
				| EntryPoint::UnwrapNative
		)
	}

	/// Whether a minimum-out argument is appended (any variant with a
	/// swap leg on either side)
	fn takes_min_arg(&self) -> bool {
		!matches!(
			self,
			EntryPoint::Deposit
				| EntryPoint::Redeem
				| EntryPoint::RedeemNative
				| EntryPoint::WrapNative
				| EntryPoint::UnwrapNative
		)
	}
}

/// Produces unsigned transaction payloads for classified routes
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
	registry: Arc<Registry>,
}

impl TransactionBuilder {
	pub fn new(registry: Arc<Registry>) -> Self {
		Self { registry }
	}

	/// Build the unsigned source-side transaction for a route
	///
	/// The payload is inert: target, entry point, arguments and native
	/// value, to be signed and broadcast by an external signer.
	pub fn build(
		&self,
		classification: &RouteClassification,
		amount_in: Amount,
		amount_out_min: Amount,
		recipient: &str,
	) -> Result<TransactionPayload, BuildError> {
		if amount_in.is_zero() {
			return Err(BuildError::InvalidAmount {
				reason: "amount in must be positive".to_string(),
			});
		}
		if amount_out_min > amount_in {
			return Err(BuildError::InvalidAmount {
				reason: "minimum amount out exceeds amount in".to_string(),
			});
		}
		if !is_plausible_address(recipient) {
			return Err(BuildError::InvalidRecipient {
				address: recipient.to_string(),
			});
		}

		let entry = EntryPoint::select(classification);
		let target = self.target_for(classification, entry);

		let mut args = Vec::new();
		match entry {
			EntryPoint::WrapNative => {},
			EntryPoint::UnwrapNative => args.push(CallArg::Amount(amount_in)),
			_ => {
				args.push(CallArg::Address(recipient.to_string()));
				args.push(CallArg::Uint(classification.to_chain));
				if entry.takes_token_arg() {
					args.push(CallArg::Address(self.bridge_token_address(classification)));
				}
				args.push(CallArg::Amount(amount_in));
				if entry.takes_min_arg() {
					args.push(CallArg::Amount(amount_out_min));
				}
			},
		}

		let value = if entry.attaches_value() {
			amount_in
		} else {
			Amount::ZERO
		};

		debug!(?entry, target = %target, "payload constructed");

		Ok(TransactionPayload {
			chain_id: classification.from_chain,
			to: target,
			function: entry.signature().to_string(),
			args,
			value,
		})
	}

	/// Build the ERC-20 allowance payload that must be mined before the
	/// bridging transaction can spend the source asset
	///
	/// `None` means no allowance is involved: native sources attach the
	/// amount as call value instead of spending a token, and a same-chain
	/// unwrap draws on the caller's own wrapped balance. The spender is
	/// the same contract [`build`](Self::build) will target.
	pub fn build_approval(
		&self,
		classification: &RouteClassification,
		amount: Amount,
	) -> Result<Option<TransactionPayload>, BuildError> {
		if amount.is_zero() {
			return Err(BuildError::InvalidAmount {
				reason: "approval amount must be positive".to_string(),
			});
		}

		let entry = EntryPoint::select(classification);
		if entry.attaches_value() || entry == EntryPoint::UnwrapNative {
			return Ok(None);
		}

		let spender = self.target_for(classification, entry);
		let token = self
			.registry
			.address_of(&classification.from_symbol, classification.from_chain)
			.expect("classified route references an undeployed source asset")
			.to_string();

		debug!(?entry, token = %token, spender = %spender, "approval payload constructed");

		Ok(Some(TransactionPayload {
			chain_id: classification.from_chain,
			to: token,
			function: "approve(address,uint256)".to_string(),
			args: vec![CallArg::Address(spender), CallArg::Amount(amount)],
			value: Amount::ZERO,
		}))
	}

	/// Which deployed contract the entry point lives on
	fn target_for(&self, classification: &RouteClassification, entry: EntryPoint) -> String {
		// A classification only exists for registered endpoints, so the
		// network lookup cannot fail here; a miss is a registry defect.
		let network = self
			.registry
			.network(classification.from_chain)
			.expect("classified route references an unregistered network");

		match entry {
			EntryPoint::WrapNative | EntryPoint::UnwrapNative => network
				.wrap_pair
				.as_ref()
				.expect("wrap route classified on a network without a wrap pair")
				.wrapped_address
				.clone(),
			EntryPoint::Deposit | EntryPoint::Redeem | EntryPoint::RedeemNative => {
				network.bridge_address.clone()
			},
			_ => network.zap_address.clone(),
		}
	}

	fn bridge_token_address(&self, classification: &RouteClassification) -> String {
		self.registry
			.address_of(&classification.bridge_token, classification.from_chain)
			.expect("classified bridge token has no deployment on the source network")
			.to_string()
	}
}

fn is_plausible_address(address: &str) -> bool {
	address.len() == 42
		&& address.starts_with("0x")
		&& address[2..].chars().all(|c| c.is_ascii_hexdigit())
}
