//! Configuration management module.
//!
//! Handles loading configuration from environment variables.

use std::env;

use crate::error::ClientError;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Ethereum JSON-RPC endpoint URL.
    pub node_endpoint_url: String,
    /// Block explorer API key. Absent keys are valid; the remote service
    /// simply serves rate-limited unauthenticated responses.
    pub explorer_api_key: Option<String>,
    /// Private key for the first account (hex string, 0x prefix optional).
    pub account1_private_key: Option<String>,
    /// Private key for the second account (hex string, 0x prefix optional).
    pub account2_private_key: Option<String>,
    /// Expected chain id. When set, construction verifies the node is on
    /// this network.
    pub chain_id: Option<u64>,
    /// Logging level (default: info).
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `NODE_ENDPOINT_URL`: Ethereum JSON-RPC endpoint
    ///
    /// Optional environment variables:
    /// - `EXPLORER_API_KEY`: block explorer API key
    /// - `ACCOUNT_1_PRIVATE_KEY`, `ACCOUNT_2_PRIVATE_KEY`: signing keys (hex)
    /// - `CHAIN_ID`: expected network chain id
    /// - `LOG_LEVEL`: logging level (default: info)
    pub fn from_env() -> Result<Self, ClientError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let node_endpoint_url = env::var("NODE_ENDPOINT_URL").map_err(|_| {
            ClientError::Config("NODE_ENDPOINT_URL environment variable not set".into())
        })?;

        let explorer_api_key = env::var("EXPLORER_API_KEY").ok();
        let account1_private_key = env::var("ACCOUNT_1_PRIVATE_KEY").ok();
        let account2_private_key = env::var("ACCOUNT_2_PRIVATE_KEY").ok();

        let chain_id = match env::var("CHAIN_ID") {
            Ok(raw) => Some(raw.parse::<u64>().map_err(|_| {
                ClientError::Config(format!("CHAIN_ID is not a valid chain id: {}", raw))
            })?),
            Err(_) => None,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            node_endpoint_url,
            explorer_api_key,
            account1_private_key,
            account2_private_key,
            chain_id,
            log_level,
        })
    }
}
