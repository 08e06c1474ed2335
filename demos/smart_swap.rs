//! SmartSwap walkthrough: registry, tokens, pool, seeding, trading.
//!
//! Creates a registry and two test tokens, registers a pool through the
//! registry, seeds it, swaps in both directions, then adds and removes
//! liquidity. Pool events are printed as they are drained.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=smartswap_amm=debug cargo run --example smart_swap
//! ```

use smartswap_amm::config::RegistryConfig;
use smartswap_amm::domain::{AccountId, Amount, Liquidity, SwapDirection, TokenAddress};
use smartswap_amm::ledger::InMemoryLedger;
use smartswap_amm::registry::PoolRegistry;
use smartswap_amm::traits::{LiquidityPool, SwapPool, TokenLedger};
use tracing_subscriber::EnvFilter;

const E18: u128 = 1_000_000_000_000_000_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== SmartSwap constant product AMM ===\n");

    // ── 1. Registry ─────────────────────────────────────────────────────
    let mut registry = PoolRegistry::new(RegistryConfig::default());
    println!("Registry ready, pool fee {}", registry.config().pool().fee_tier());

    // ── 2. Test tokens, minted to the deployer ──────────────────────────
    let tt1 = TokenAddress::from_bytes([0x71; 32]);
    let tt2 = TokenAddress::from_bytes([0x72; 32]);
    let deployer = AccountId::from_bytes([0xde; 32]);
    let trader = AccountId::from_bytes([0x7a; 32]);

    let mut ledger = InMemoryLedger::new();
    ledger.mint(tt1, deployer, Amount::new(1_000 * E18))?;
    ledger.mint(tt2, deployer, Amount::new(1_000 * E18))?;
    ledger.mint(tt1, trader, Amount::new(50 * E18))?;
    println!("Test token 1: {tt1}");
    println!("Test token 2: {tt2}");

    // ── 3. Pool via the registry ────────────────────────────────────────
    let handle = registry.create_pool(tt1, tt2)?;
    for event in registry.take_events() {
        println!("\n{event}");
    }
    println!("Pool account: {}", handle.account());

    // ── 4. Seed with 100 / 100 ──────────────────────────────────────────
    let mut pool = handle.lock();
    ledger.approve(tt1, deployer, pool.account(), Amount::new(100 * E18))?;
    ledger.approve(tt2, deployer, pool.account(), Amount::new(100 * E18))?;
    let seeded = pool.init(&mut ledger, deployer, Amount::new(100 * E18), Amount::new(100 * E18))?;
    println!("\nSeeded: {seeded}");
    println!("  State:      {}", pool.state());
    println!("  Total LP:   {}", pool.total_liquidity());

    // ── 5. Quote and swap A → B ─────────────────────────────────────────
    let amount_in = Amount::new(10 * E18);
    let quote = pool.price(SwapDirection::AToB, amount_in)?;
    println!("\nQuote: {amount_in} token 1 → {quote} token 2");

    ledger.approve(tt1, trader, pool.account(), amount_in)?;
    let result = pool.swap(&mut ledger, trader, SwapDirection::AToB, amount_in)?;
    println!("Swap:  {result}");
    let (ra, rb) = pool.reserves();
    println!("  Reserves:   ({ra}, {rb})");

    // ── 6. Swap back B → A ──────────────────────────────────────────────
    ledger.approve(tt2, trader, pool.account(), result.amount_out())?;
    let back = pool.swap(&mut ledger, trader, SwapDirection::BToA, result.amount_out())?;
    println!(
        "Swap back: {back} (round trip lost {} token 1 to fees)",
        amount_in.get().saturating_sub(back.amount_out().get())
    );

    // ── 7. Add and remove liquidity ─────────────────────────────────────
    ledger.approve(tt1, deployer, pool.account(), Amount::new(5 * E18))?;
    // token 2 follows the reserve ratio, so leave headroom
    ledger.approve(tt2, deployer, pool.account(), Amount::new(10 * E18))?;
    let added = pool.add_liquidity(&mut ledger, deployer, Amount::new(5 * E18))?;
    println!("\nAdded:   {added}");

    let removed = pool.remove_liquidity(&mut ledger, deployer, Liquidity::new(5 * E18))?;
    println!("Removed: {removed}");
    println!("  LP of deployer: {}", pool.liquidity_of(&deployer));

    // ── 8. Event journal ────────────────────────────────────────────────
    println!("\nPool events:");
    for event in pool.take_events() {
        println!("  {event}");
    }

    println!("\n=== Done ===");
    Ok(())
}
