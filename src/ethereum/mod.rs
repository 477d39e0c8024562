//! Ethereum interaction module.
//!
//! Contains the node client, wallet management, ABI helpers, and contract
//! bindings.

pub mod abi;
pub mod client;
pub mod constants;
pub mod contracts;
pub mod wallet;

pub use client::{HttpProvider, NodeClient};
pub use wallet::{verify_text, Wallet};
