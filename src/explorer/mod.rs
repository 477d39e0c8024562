//! Block explorer API client.

use alloy::{json_abi::JsonAbi, primitives::Address};
use serde::Deserialize;

use crate::error::{ClientError, Result};

/// Base URL of the Etherscan-compatible explorer API.
const EXPLORER_API_URL: &str = "https://api.etherscan.io/api";

/// Response envelope returned by the explorer API.
///
/// `status` is a string: `"0"` means the request was understood but there
/// is no result (e.g. no verified ABI), anything else means `result` holds
/// the payload.
#[derive(Debug, Deserialize)]
struct ExplorerResponse {
    status: String,
    #[allow(dead_code)]
    message: String,
    result: String,
}

/// Client for an Etherscan-style block explorer API.
#[derive(Debug, Clone)]
pub struct ExplorerClient {
    /// The client that executes the http requests.
    client: reqwest::Client,
    /// Explorer API key. Absent keys receive rate-limited responses from
    /// the remote service; that is not this client's concern to validate.
    api_key: Option<String>,
    /// API endpoint.
    api_url: String,
}

impl ExplorerClient {
    /// Create a new explorer client.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url: EXPLORER_API_URL.to_string(),
        }
    }

    /// Override the API base URL, for explorer deployments on other
    /// networks.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Fetch a contract's ABI from the explorer.
    ///
    /// Returns `Ok(None)` when the explorer reports no verified ABI for the
    /// address (status `"0"`). Transport failures and malformed responses
    /// are explorer errors, never `None`: callers can always distinguish
    /// "no ABI available" from "could not reach the service".
    pub async fn get_contract_abi(&self, address: Address) -> Result<Option<JsonAbi>> {
        tracing::debug!(address = %address, "Fetching contract ABI from explorer");

        let mut query: Vec<(&str, String)> = vec![
            ("module", "contract".to_string()),
            ("action", "getabi".to_string()),
            ("address", format!("{:?}", address)),
        ];
        if let Some(key) = &self.api_key {
            query.push(("api_key", key.clone()));
        }

        let response = self
            .client
            .get(&self.api_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| ClientError::Explorer(format!("request failed: {}", e)))?;

        let envelope: ExplorerResponse = response.json().await.map_err(|e| {
            ClientError::Explorer(format!("response body was not valid JSON: {}", e))
        })?;

        if envelope.status == "0" {
            // Not an error: the contract simply has no verified ABI.
            tracing::debug!(address = %address, "No verified ABI for address");
            return Ok(None);
        }

        let abi: JsonAbi = serde_json::from_str(&envelope.result).map_err(|e| {
            ClientError::Explorer(format!("explorer returned an unparsable ABI: {}", e))
        })?;

        Ok(Some(abi))
    }
}
