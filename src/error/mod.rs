//! Error types and handling module.
//!
//! Defines all client-specific error types and conversions.

use thiserror::Error;

/// Client-wide error type.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The configured node endpoint could not be reached.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Node-reported RPC errors on read paths.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Malformed or missing private key, or an unbuildable transaction request.
    #[error("Signing error: {0}")]
    Signing(String),

    /// The node rejected a well-formed signed transaction.
    #[error("Submission error: {0}")]
    Submission(String),

    /// Function missing from an ABI, or calldata/return-data mismatch.
    #[error("ABI error: {0}")]
    Abi(String),

    /// Explorer transport or parse failure, distinct from "no ABI available".
    #[error("Explorer error: {0}")]
    Explorer(String),

    /// Invalid Ethereum address.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<alloy::transports::TransportError> for ClientError {
    fn from(err: alloy::transports::TransportError) -> Self {
        ClientError::Rpc(err.to_string())
    }
}

impl From<alloy::contract::Error> for ClientError {
    fn from(err: alloy::contract::Error) -> Self {
        ClientError::Rpc(err.to_string())
    }
}

impl From<alloy::signers::local::LocalSignerError> for ClientError {
    fn from(err: alloy::signers::local::LocalSignerError) -> Self {
        ClientError::Signing(err.to_string())
    }
}

impl From<alloy::dyn_abi::Error> for ClientError {
    fn from(err: alloy::dyn_abi::Error) -> Self {
        ClientError::Abi(err.to_string())
    }
}

impl From<alloy::hex::FromHexError> for ClientError {
    fn from(err: alloy::hex::FromHexError) -> Self {
        ClientError::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Explorer(err.to_string())
    }
}

/// Result type alias using ClientError.
pub type Result<T> = std::result::Result<T, ClientError>;
