//! Ethereum network constants.
//!
//! Contains chain IDs, gas limits, and well-known mainnet addresses.

use alloy::primitives::{address, Address};

// ============================================================================
// Chain IDs
// ============================================================================

/// Ethereum Mainnet chain ID.
pub const ETHEREUM_MAINNET_CHAIN_ID: u64 = 1;

/// Sepolia testnet chain ID.
pub const SEPOLIA_CHAIN_ID: u64 = 11155111;

// ============================================================================
// Gas
// ============================================================================

/// Gas limit for a plain value transfer.
pub const VALUE_TRANSFER_GAS_LIMIT: u64 = 21_000;

// ============================================================================
// Well-known Contract Addresses (Ethereum Mainnet)
// ============================================================================

/// DAI stablecoin address on Ethereum Mainnet.
pub const DAI_ADDRESS: Address = address!("6B175474E89094C44Da98b954EedeAC495271d0F");
