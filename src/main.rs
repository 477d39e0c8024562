//! Ethereum chain client demo.
//!
//! Exercises the library against the configured node: prints account
//! balances, signs and verifies a message, reads the DAI token contract,
//! and walks the latest block's transactions.

use alloy::primitives::Address;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ethereum_chain_client::{
    ethereum::{constants::DAI_ADDRESS, contracts::IERC20, verify_text, NodeClient, Wallet},
    types::format_units,
    Config, Result,
};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    tracing::info!("Starting Ethereum chain client demo");

    let client = NodeClient::connect(&config.node_endpoint_url, config.chain_id).await?;

    // Account balances
    let mut wallets = Vec::new();
    for key in [&config.account1_private_key, &config.account2_private_key]
        .into_iter()
        .flatten()
    {
        wallets.push(Wallet::from_private_key(key)?);
    }
    for wallet in &wallets {
        let balance = client.balance_of(wallet.address()).await?;
        println!("{} {} ether ({} wei)", wallet.address(), format_units(balance, 18), balance);
    }

    // Sign and verify a message signature
    if let Some(wallet) = wallets.first() {
        let message = "Me gusta Miami";
        let signature = wallet.sign_text(message)?;
        let recovered = verify_text(message, &signature)?;
        assert_eq!(recovered, wallet.address(), "message could not be verified");
        println!("Recovered signer for {:?} = {}", message, recovered);
    }

    // Read some data from the DAI token contract
    let dai = IERC20::new(DAI_ADDRESS, client.provider().clone());
    let symbol = dai.symbol().call().await?;
    let name = dai.name().call().await?;
    let total_supply = dai.totalSupply().call().await?;
    println!("Total Supply = {} {}", format_units(total_supply, 18), symbol);
    println!("Token Name = {}", name);

    // Read block data
    let block = client.get_latest_block().await?;
    println!("Latest block number = {}", block.number);
    println!("Block hash = {}", block.hash);
    println!("Parent block hash = {}", block.parent_hash);
    println!("Number of transactions = {}", block.transaction_count());

    for index in 0..block.transaction_count() {
        let Some(tx) = client.get_transaction(block.number, index).await? else {
            continue;
        };

        println!("==========================================================");
        println!("Transaction Hash = {}", tx.hash);
        println!("Transaction Index = {}", index);
        println!("From = {} ({})", tx.from, account_kind(&client, tx.from).await?);
        match tx.to {
            Some(to) => println!("To = {} ({})", to, account_kind(&client, to).await?),
            None => println!("To = contract creation"),
        }
        println!("Value = {} gwei", format_units(tx.value, 9));
    }

    // Check an address is a contract
    assert!(
        client.is_contract_address(DAI_ADDRESS).await?,
        "DAI address should be a contract"
    );

    Ok(())
}

async fn account_kind(client: &NodeClient, address: Address) -> Result<&'static str> {
    Ok(if client.is_contract_address(address).await? {
        "contract"
    } else {
        "externally owned account"
    })
}
