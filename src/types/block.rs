//! Read-only block and transaction snapshots.

use alloy::{
    consensus::Transaction as _,
    network::TransactionResponse,
    primitives::{Address, Bytes, B256, U256},
    rpc::types::{Block, Transaction},
};
use serde::{Deserialize, Serialize};

/// Snapshot of a block header plus its transaction list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockInfo {
    /// Block number.
    pub number: u64,
    /// Block hash.
    pub hash: B256,
    /// Parent block hash.
    pub parent_hash: B256,
    /// Unix timestamp in seconds.
    pub timestamp: u64,
    /// Hashes of the block's transactions, in order.
    pub transactions: Vec<B256>,
}

impl BlockInfo {
    /// Build a snapshot from a node block response.
    pub fn from_block(block: &Block) -> Self {
        Self {
            number: block.header.number,
            hash: block.header.hash,
            parent_hash: block.header.parent_hash,
            timestamp: block.header.timestamp,
            transactions: block.transactions.hashes().collect(),
        }
    }

    /// Number of transactions in the block.
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}

/// Snapshot of one transaction as reported by the node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionInfo {
    /// Transaction hash.
    pub hash: B256,
    /// Position within the containing block, if mined.
    pub index: Option<u64>,
    /// Sender address.
    pub from: Address,
    /// Recipient address. Absent for contract-creation transactions.
    pub to: Option<Address>,
    /// Transferred value in wei.
    pub value: U256,
    /// Input data.
    pub input: Bytes,
}

impl TransactionInfo {
    /// Build a snapshot from a node transaction response.
    pub fn from_transaction(tx: &Transaction) -> Self {
        Self {
            hash: tx.tx_hash(),
            index: tx.transaction_index,
            from: tx.from(),
            to: tx.to(),
            value: tx.value(),
            input: tx.input().clone(),
        }
    }
}
