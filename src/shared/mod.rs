//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize as the
//! raw strings the contract ABI carries, so they can be used directly in call
//! payloads without conversion overhead.

pub mod scaling;

pub use scaling::{
    format_units, parse_units, to_fixed_or_zero, ScalingError, FIXED_POINT_DECIMALS,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use uuid::Uuid;

// ─── MarketId ────────────────────────────────────────────────────────────────

/// Spot market identifier (a `0x`-prefixed hash, e.g. the INJ/USDT market).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarketId(String);

impl MarketId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MarketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MarketId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for MarketId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for MarketId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for MarketId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(MarketId(s))
    }
}

// ─── SubaccountId ────────────────────────────────────────────────────────────

/// A subaccount identifier, conventionally `{address}-{index}` (e.g. `0xABC-0`).
///
/// The format is owned by the contract and is not validated locally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubaccountId(String);

impl SubaccountId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Blank ids never reach the contract.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for SubaccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SubaccountId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SubaccountId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ─── ClientId ────────────────────────────────────────────────────────────────

/// Client-generated order id (CID), a UUID v4 rendered in hyphenated form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Generate a fresh random id. Every order attempt gets its own.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ClientId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ClientId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ─── OrderSide ───────────────────────────────────────────────────────────────

/// Order side as encoded in the contract's `orderType` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    #[default]
    Buy = 1,
    Sell = 2,
}

impl OrderSide {
    /// The `uint8` value sent as `orderType`.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for OrderSide {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(OrderSide::Buy),
            2 => Ok(OrderSide::Sell),
            other => Err(format!("invalid order side: {}", other)),
        }
    }
}

impl FromStr for OrderSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(OrderSide::Buy),
            "2" => Ok(OrderSide::Sell),
            other => Err(format!("invalid order side: {}", other)),
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "买入"),
            OrderSide::Sell => write!(f, "卖出"),
        }
    }
}
