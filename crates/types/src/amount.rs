//! Wei-scale token amounts as strings on the wire, integers in memory

/// Token amount in the asset's smallest unit
///
/// Serialized as a decimal string to preserve precision across JSON
/// boundaries that cannot represent large integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(pub u128);

impl Amount {
	pub const ZERO: Amount = Amount(0);

	pub fn new(value: u128) -> Self {
		Self(value)
	}

	pub fn value(&self) -> u128 {
		self.0
	}

	pub fn is_zero(&self) -> bool {
		self.0 == 0
	}

	/// Subtraction clamped at zero; a fee larger than the input yields
	/// a zero output, not an underflow.
	pub fn saturating_sub(&self, other: Amount) -> Amount {
		Amount(self.0.saturating_sub(other.0))
	}

	pub fn checked_add(&self, other: Amount) -> Option<Amount> {
		self.0.checked_add(other.0).map(Amount)
	}

	/// Scale by a basis-point factor (10_000 = identity)
	pub fn mul_bps(&self, bps: u32) -> Amount {
		Amount(self.0 / 10_000 * bps as u128 + self.0 % 10_000 * bps as u128 / 10_000)
	}

	/// Parse a decimal string
	pub fn parse(value: &str) -> Result<Self, std::num::ParseIntError> {
		value.parse().map(Amount)
	}

	/// Whole-unit value scaled by the asset's decimals (`5` with 18
	/// decimals becomes 5 * 10^18 smallest units)
	pub fn from_units(units: u128, decimals: u8) -> Self {
		Amount(units * 10u128.pow(decimals as u32))
	}
}

impl std::fmt::Display for Amount {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<u128> for Amount {
	fn from(value: u128) -> Self {
		Amount(value)
	}
}

impl From<u64> for Amount {
	fn from(value: u64) -> Self {
		Amount(value as u128)
	}
}

impl serde::Serialize for Amount {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(&self.0.to_string())
	}
}

impl<'de> serde::Deserialize<'de> for Amount {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let value = <String as serde::Deserialize>::deserialize(deserializer)?;
		Amount::parse(&value).map_err(serde::de::Error::custom)
	}
}
