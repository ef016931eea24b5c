//! Unified error types.

use thiserror::Error;

/// Top-level error, returned by construction and configuration loading.
#[derive(Error, Debug)]
pub enum PanelError {
    #[error("Contract call failed: {0}")]
    Call(#[from] CallError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Failure of a single contract call.
///
/// `Display` is the bare failure reason; the panel prefixes it with an
/// operation label before showing it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    /// The contract reverted (reason string as reported by the node).
    #[error("{0}")]
    Reverted(String),

    /// JSON-RPC error object returned by the node or wallet.
    #[error("{message}")]
    Rpc { code: i64, message: String },

    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// Return data did not match the ABI.
    #[error("{0}")]
    Decode(String),
}

impl CallError {
    /// The failure reason without any operation prefix.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<alloy_sol_types::Error> for CallError {
    fn from(e: alloy_sol_types::Error) -> Self {
        CallError::Decode(format!("ABI decode failed: {}", e))
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for CallError {
    fn from(e: reqwest::Error) -> Self {
        CallError::Transport(e.to_string())
    }
}
