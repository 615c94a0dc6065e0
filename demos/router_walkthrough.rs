//! Router and messenger walkthrough.
//!
//! Loads a deployment file, seeds a pool, trades against it, then sends a
//! cross-chain message through its full lifecycle.  Set `RUST_LOG=debug`
//! to see rejected calls as well.
//!
//! # Run
//!
//! ```bash
//! cargo run --example router_walkthrough
//! ```

use liquidity_router::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Liquidity Router walkthrough ===\n");

    // ── 1. Deployment ───────────────────────────────────────────────────
    let owner = Identity::from_bytes([0xA0; 32]);
    let custody = Identity::from_bytes([0xC0; 32]);
    let validator = Identity::from_bytes([0xB0; 32]);
    let trader = Identity::from_bytes([0x01; 32]);

    let deployment: DeploymentConfig = format!(
        "[router]\nowner = \"{owner}\"\ncustody = \"{custody}\"\nfee_rate = 300\n\n\
         [messenger]\nowner = \"{owner}\"\nbase_fee = 10\n"
    )
    .parse()?;
    let mut router = LiquidityRouter::from_config(&deployment.router)?;
    let mut messenger = CrossChainMessenger::from_config(&deployment.messenger)?;
    println!("Router fee rate: {}", router.fee_rate());
    println!("Messenger base fee: {}", messenger.base_fee());

    // ── 2. Assets ───────────────────────────────────────────────────────
    let mut usdc = LedgerAsset::new(AssetId::from_bytes([10; 32]), "USD Coin", "USDC", 6);
    let mut weth = LedgerAsset::new(AssetId::from_bytes([11; 32]), "Wrapped Ether", "WETH", 18);
    usdc.mint(&trader, Amount::new(1_000))?;
    weth.mint(&trader, Amount::new(1_000))?;
    let setup = CallContext::new(owner, 99);
    let usdc = router.register_asset(&setup, Box::new(usdc))?;
    let weth = router.register_asset(&setup, Box::new(weth))?;

    // ── 3. Pool, swap, deposit ──────────────────────────────────────────
    let eth = NetworkTag::new("ethereum")?;
    let ctx = CallContext::new(trader, 100);
    let pool_id =
        router.create_pool(&ctx, usdc, weth, Amount::new(100), Amount::new(100), &eth)?;
    println!("\nCreated {pool_id} on {eth}");

    let quote = router.quote_swap(usdc, weth, Amount::new(10), &eth)?;
    println!("Quote for 10 USDC: {} WETH (fee {})", quote.amount_out(), quote.fee());

    let swap = router.swap_exact_in(
        &CallContext::new(trader, 101),
        usdc,
        weth,
        Amount::new(10),
        quote.amount_out(),
        &eth,
    )?;
    println!("Swapped {} USDC for {} WETH", swap.amount_in(), swap.amount_out());

    let minted = router.add_liquidity(
        &CallContext::new(trader, 102),
        usdc,
        weth,
        Amount::new(55),
        Amount::new(46),
        &eth,
    )?;
    if let Some(pool) = router.get_pool(pool_id) {
        println!(
            "Deposit minted {minted}; reserves now {} / {}, supply {}",
            pool.reserve_a(),
            pool.reserve_b(),
            pool.total_shares()
        );
    }

    // ── 4. Cross-chain message ──────────────────────────────────────────
    let admin = CallContext::new(owner, 103);
    let inbox = ContractRef::new("0x00000000000000000000000000000000000000aa")?;
    let bridge_id = BridgeId::new(1);
    messenger.register_bridge(
        &admin,
        Bridge::new(bridge_id, "canonical", validator, vec![eth.clone()], 50, Amount::new(10))?,
    )?;
    messenger.register_chain_config(
        &admin,
        eth.clone(),
        ChainConfig::new(1, 12, 300_000, inbox.clone()),
    )?;

    let payload = Payload::new(vec![0u8; 100])?;
    let message_id = messenger.send_message(
        &CallContext::new(trader, 104),
        eth,
        inbox,
        payload,
        bridge_id,
    )?;
    let relay = CallContext::new(validator, 105);
    messenger.validate_message(&relay, message_id, b"opaque signature")?;
    messenger.process_message(&relay, message_id)?;
    if let Some(message) = messenger.get_message(message_id) {
        println!(
            "\n{message_id}: fee {}, processed {}",
            message.fee, message.processed
        );
    }

    // ── 5. Event stream ─────────────────────────────────────────────────
    println!("\nEvents:");
    for record in router.drain_events().iter().chain(messenger.drain_events().iter()) {
        println!("  {}", serde_json::to_string(record)?);
    }

    Ok(())
}
