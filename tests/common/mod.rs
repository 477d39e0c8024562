//! Common utilities for integration tests.

use ethereum_chain_client::{ExplorerClient, NodeClient};

/// Helper to create a node client from environment variables.
pub async fn create_node_client() -> Option<NodeClient> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let rpc_url = std::env::var("NODE_ENDPOINT_URL").ok()?;
    if rpc_url.is_empty() {
        return None;
    }

    NodeClient::connect(&rpc_url, None).await.ok()
}

/// Helper to create an explorer client from environment variables.
pub fn create_explorer_client() -> Option<ExplorerClient> {
    let _ = dotenvy::dotenv();

    let api_key = std::env::var("EXPLORER_API_KEY").ok()?;
    if api_key.is_empty() {
        return None;
    }

    Some(ExplorerClient::new(Some(api_key)))
}

/// Skip test if a node client cannot be created (missing env vars).
#[macro_export]
macro_rules! skip_if_no_node {
    () => {
        match common::create_node_client().await {
            Some(client) => client,
            None => {
                eprintln!("Skipping test: NODE_ENDPOINT_URL not set or node unreachable");
                return;
            }
        }
    };
}

/// Skip test if an explorer client cannot be created (missing env vars).
#[macro_export]
macro_rules! skip_if_no_explorer {
    () => {
        match common::create_explorer_client() {
            Some(client) => client,
            None => {
                eprintln!("Skipping test: EXPLORER_API_KEY not set");
                return;
            }
        }
    };
}
