//! Ethereum RPC client.

use alloy::{
    dyn_abi::DynSolValue,
    eips::{eip2718::Encodable2718, BlockNumberOrTag},
    json_abi::JsonAbi,
    network::{Ethereum, EthereumWallet, TransactionBuilder},
    primitives::{Address, Bytes, TxHash, U256},
    providers::{Provider, ProviderBuilder, RootProvider},
    rpc::types::TransactionRequest,
};
use std::sync::Arc;

use crate::{
    error::{ClientError, Result},
    ethereum::{abi, constants::VALUE_TRANSFER_GAS_LIMIT, Wallet},
    types::{BlockInfo, TransactionInfo},
};

/// Type alias for the HTTP provider.
pub type HttpProvider = RootProvider<Ethereum>;

/// Client for a single configured Ethereum JSON-RPC node.
#[derive(Clone)]
pub struct NodeClient {
    /// The underlying provider.
    provider: Arc<HttpProvider>,
    /// RPC URL for logging.
    rpc_url: String,
    /// Chain id reported by the node at construction.
    chain_id: u64,
}

impl NodeClient {
    /// Connect to a node endpoint.
    ///
    /// Probes the node for its chain id and fails with a connection error
    /// if the endpoint is unreachable, or if `expected_chain_id` is set and
    /// the node reports a different network.
    pub async fn connect(rpc_url: &str, expected_chain_id: Option<u64>) -> Result<Self> {
        let url = rpc_url
            .parse()
            .map_err(|_| ClientError::Config(format!("Invalid RPC URL: {}", rpc_url)))?;

        #[allow(deprecated)]
        let provider = ProviderBuilder::new().connect_http(url).root().clone();

        let chain_id = provider.get_chain_id().await.map_err(|e| {
            ClientError::Connection(format!("could not reach node at {}: {}", rpc_url, e))
        })?;

        if let Some(expected) = expected_chain_id {
            if chain_id != expected {
                return Err(ClientError::Connection(format!(
                    "node at {} is on chain {}, expected chain {}",
                    rpc_url, chain_id, expected
                )));
            }
        }

        tracing::info!(chain_id, rpc_url = %rpc_url, "Connected to Ethereum node");

        Ok(Self { provider: Arc::new(provider), rpc_url: rpc_url.to_string(), chain_id })
    }

    /// Chain id of the connected network.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Get the underlying provider.
    pub fn provider(&self) -> &HttpProvider {
        &self.provider
    }

    /// Get an address's balance in wei.
    pub async fn balance_of(&self, address: Address) -> Result<U256> {
        let balance = self.provider.get_balance(address).await?;
        Ok(balance)
    }

    /// Transfer `amount` wei from a locally held account to `to`.
    ///
    /// The sender's nonce and the fee estimates are read from the node
    /// immediately before signing; overlapping sends from the same account
    /// must be serialized by the caller. Returns the transaction hash with
    /// no inclusion guarantee.
    pub async fn send_value(&self, from: &Wallet, to: Address, amount: U256) -> Result<TxHash> {
        tracing::info!(
            from = %from.address(),
            to = %to,
            amount = %amount,
            "Sending value transfer"
        );

        let nonce = self.provider.get_transaction_count(from.address()).await?;
        let fees = self.provider.estimate_eip1559_fees().await?;

        let tx = TransactionRequest::default()
            .with_from(from.address())
            .with_to(to)
            .with_value(amount)
            .with_nonce(nonce)
            .with_chain_id(self.chain_id)
            .with_gas_limit(VALUE_TRANSFER_GAS_LIMIT)
            .with_max_fee_per_gas(fees.max_fee_per_gas)
            .with_max_priority_fee_per_gas(fees.max_priority_fee_per_gas);

        self.sign_and_submit(tx, from, false).await
    }

    /// Execute a read-only contract call and decode the result.
    ///
    /// No side effects, no gas cost.
    pub async fn call_contract_function(
        &self,
        contract: Address,
        abi: &JsonAbi,
        function_name: &str,
        args: &[DynSolValue],
    ) -> Result<Vec<DynSolValue>> {
        let function = abi::find_function(abi, function_name)?;
        let calldata = abi::encode_call(function, args)?;

        tracing::debug!(contract = %contract, function = function_name, "Calling contract");

        let tx = TransactionRequest::default().to(contract).input(Bytes::from(calldata).into());
        let ret = self.provider.call(tx).await?;

        abi::decode_return(function, &ret)
    }

    /// Build, sign, and submit a state-changing contract call.
    ///
    /// Same nonce/fee/signing path as [`send_value`](Self::send_value),
    /// with the gas limit estimated by the node. When `wait` is true,
    /// blocks until the node reports the transaction as mined.
    pub async fn submit_contract_transaction(
        &self,
        contract: Address,
        abi: &JsonAbi,
        function_name: &str,
        args: &[DynSolValue],
        sender: &Wallet,
        wait: bool,
    ) -> Result<TxHash> {
        let function = abi::find_function(abi, function_name)?;
        let calldata = abi::encode_call(function, args)?;

        tracing::info!(
            contract = %contract,
            function = function_name,
            sender = %sender.address(),
            "Submitting contract transaction"
        );

        let nonce = self.provider.get_transaction_count(sender.address()).await?;
        let fees = self.provider.estimate_eip1559_fees().await?;

        let tx = TransactionRequest::default()
            .with_from(sender.address())
            .with_to(contract)
            .input(Bytes::from(calldata).into())
            .with_nonce(nonce)
            .with_chain_id(self.chain_id)
            .with_max_fee_per_gas(fees.max_fee_per_gas)
            .with_max_priority_fee_per_gas(fees.max_priority_fee_per_gas);

        let gas = self.provider.estimate_gas(tx.clone()).await?;
        let tx = tx.with_gas_limit(gas);

        self.sign_and_submit(tx, sender, wait).await
    }

    /// Fetch the most recent block header plus its transaction list.
    pub async fn get_latest_block(&self) -> Result<BlockInfo> {
        let block = self
            .provider
            .get_block_by_number(BlockNumberOrTag::Latest)
            .await?
            .ok_or_else(|| ClientError::Rpc("node returned no latest block".into()))?;

        Ok(BlockInfo::from_block(&block))
    }

    /// Fetch one transaction by its position within a block.
    ///
    /// Returns `None` when the position is out of range for the block.
    pub async fn get_transaction(
        &self,
        block_number: u64,
        index: usize,
    ) -> Result<Option<TransactionInfo>> {
        let tx = self
            .provider
            .get_transaction_by_block_number_and_index(
                BlockNumberOrTag::Number(block_number),
                index,
            )
            .await?;

        Ok(tx.map(|tx| TransactionInfo::from_transaction(&tx)))
    }

    /// Whether the node reports deployed code at `address`.
    ///
    /// Distinguishes contract accounts from externally owned accounts.
    pub async fn is_contract_address(&self, address: Address) -> Result<bool> {
        let code = self.provider.get_code_at(address).await?;
        Ok(!code.is_empty())
    }

    /// Sign a prepared request with `sender`'s key and submit the raw bytes.
    async fn sign_and_submit(
        &self,
        tx: TransactionRequest,
        sender: &Wallet,
        wait: bool,
    ) -> Result<TxHash> {
        let wallet = EthereumWallet::from(sender.signer().clone());
        let envelope =
            tx.build(&wallet).await.map_err(|e| ClientError::Signing(e.to_string()))?;

        let pending = self
            .provider
            .send_raw_transaction(&envelope.encoded_2718())
            .await
            .map_err(|e| ClientError::Submission(e.to_string()))?;
        let tx_hash = *pending.tx_hash();

        tracing::info!(tx_hash = %tx_hash, rpc_url = %self.rpc_url, "Transaction submitted");

        if wait {
            let receipt = pending
                .get_receipt()
                .await
                .map_err(|e| ClientError::Submission(e.to_string()))?;
            tracing::info!(
                tx_hash = %tx_hash,
                block_number = ?receipt.block_number,
                "Transaction mined"
            );
        }

        Ok(tx_hash)
    }
}

impl std::fmt::Debug for NodeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeClient")
            .field("rpc_url", &self.rpc_url)
            .field("chain_id", &self.chain_id)
            .finish()
    }
}
