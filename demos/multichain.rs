//! Example: Query the Ankr multichain API for a wallet's assets.
//!
//! Run with: cargo run --example multichain -- <API_KEY> [WALLET]
//! Set `RUST_LOG=ankr_multichain_client=debug` to see each request.

use ankr_multichain_client::{AnkrClient, client::Result, types::*};
use tracing_subscriber::EnvFilter;

const VITALIK: &str = "0xd8da6bf26964af9d7eed9e03e53415d37aa96045";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(api_key) = args.next() else {
        eprintln!("usage: multichain <API_KEY> [WALLET]");
        std::process::exit(2);
    };
    let wallet = args.next().unwrap_or_else(|| VITALIK.to_string());

    let client = AnkrClient::new(api_key);

    println!("=== Ankr Multichain API ===\n");

    // 1. Native coin price
    println!("1. Fetching ETH price...");
    let price = client
        .get_token_price(GetTokenPriceRequest::native(Blockchain::Eth))
        .await?;
    println!("   USD price: {}", price.usd_price);
    if let Some(synced) = price.sync_status.as_ref().and_then(|s| s.timestamp_utc()) {
        println!("   Indexed up to: {synced}");
    }
    println!();

    // 2. Latest block
    println!("2. Fetching latest Ethereum block...");
    let blocks = client
        .get_blocks(GetBlocksRequest::latest(Blockchain::Eth))
        .await?;
    if let Some(block) = blocks.blocks.first() {
        println!("   Height: {:?}", block.number_u64());
        println!("   Hash: {}", block.hash);
        println!("   Time: {:?}", block.timestamp_utc());
    }
    println!();

    // 3. Balances
    println!("3. Fetching balances of {wallet}...");
    let balances = client
        .get_account_balance(GetAccountBalanceRequest::new(wallet.as_str()))
        .await?;
    println!("   Total: ${}", balances.total_balance_usd);
    for asset in balances.assets.iter().take(5) {
        println!(
            "   {} {} on {} (${})",
            asset.balance, asset.token_symbol, asset.blockchain, asset.balance_usd
        );
    }
    println!();

    // 4. NFTs
    println!("4. Fetching NFTs of {wallet}...");
    let nfts = client
        .get_nfts_by_owner(GetNftsByOwnerRequest::new(wallet.as_str()).on(Blockchain::Eth))
        .await?;
    println!("   Owned (first page): {}", nfts.assets.len());
    if let Some(nft) = nfts.assets.first() {
        println!("   First: {} #{} ({})", nft.collection_name, nft.token_id, nft.name);
    }

    println!("\n=== Done! ===");
    Ok(())
}
