//! Ethereum Chain Client Library
//!
//! A thin client for Ethereum node and block explorer operations.
//! Provides balance queries, value transfers, message signing and
//! verification, ABI-driven contract calls, block/transaction
//! introspection, and contract ABI retrieval from a block explorer.
//!
//! # Features
//!
//! - **Node operations**: balances, value transfers, contract reads and
//!   writes, block and transaction inspection
//! - **Local signing**: EIP-191 message signing and signer recovery
//! - **Explorer lookups**: contract ABI retrieval with explicit
//!   absent-vs-failure semantics
//!
//! # Example
//!
//! ```rust,ignore
//! use ethereum_chain_client::{Config, NodeClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = NodeClient::connect(&config.node_endpoint_url, config.chain_id).await?;
//!     let balance = client.balance_of("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045".parse()?).await?;
//!     println!("{balance}");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod ethereum;
pub mod explorer;
pub mod types;

pub use config::Config;
pub use error::{ClientError, Result};
pub use ethereum::constants::*;
pub use ethereum::{verify_text, NodeClient, Wallet};
pub use explorer::ExplorerClient;
