//! # SmartSwap AMM
//!
//! Constant-product Automated Market Maker: a registry of token-pair pools
//! where providers deposit both tokens for liquidity shares and traders
//! swap one token for the other at a `x · y = k` price with a 0.30% fee.
//!
//! Pools never hold tokens themselves. Every deposit, payout and swap leg
//! settles through a [`TokenLedger`](traits::TokenLedger), an ERC-20-style
//! boundary with balances and allowances. [`InMemoryLedger`](ledger::InMemoryLedger)
//! implements it for tests and simulation.
//!
//! # Quick Start
//!
//! ```rust
//! use smartswap_amm::config::RegistryConfig;
//! use smartswap_amm::domain::{AccountId, Amount, SwapDirection, TokenAddress};
//! use smartswap_amm::ledger::InMemoryLedger;
//! use smartswap_amm::registry::PoolRegistry;
//! use smartswap_amm::traits::{LiquidityPool, SwapPool, TokenLedger};
//!
//! // 1. Two tokens and a funded provider
//! let usdc = TokenAddress::from_bytes([1u8; 32]);
//! let weth = TokenAddress::from_bytes([2u8; 32]);
//! let alice = AccountId::from_bytes([0xa1; 32]);
//!
//! let mut ledger = InMemoryLedger::new();
//! ledger.mint(usdc, alice, Amount::new(10_000_000)).expect("mint");
//! ledger.mint(weth, alice, Amount::new(10_000_000)).expect("mint");
//!
//! // 2. Create the pool through the registry
//! let mut registry = PoolRegistry::new(RegistryConfig::default());
//! let handle = registry.create_pool(usdc, weth).expect("pool created");
//!
//! // 3. Approve the pool's account and seed it
//! ledger.approve(usdc, alice, handle.account(), Amount::MAX).expect("approve");
//! ledger.approve(weth, alice, handle.account(), Amount::MAX).expect("approve");
//!
//! let mut pool = handle.lock();
//! pool.init(&mut ledger, alice, Amount::new(1_000_000), Amount::new(1_000_000))
//!     .expect("init");
//!
//! // 4. Sell 10 000 units of token A for token B
//! let result = pool
//!     .swap(&mut ledger, alice, SwapDirection::AToB, Amount::new(10_000))
//!     .expect("swap succeeded");
//!
//! assert!(result.amount_out().get() > 0);
//! assert!(result.fee().get() > 0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  owns PoolRegistry + a TokenLedger
//! └──────┬───────┘
//!        │ create_pool / lookup
//!        ▼
//! ┌──────────────┐
//! │   Registry    │  one pool per unordered pair, PoolCreated events
//! └──────┬───────┘
//!        │ PoolHandle (Arc<Mutex<_>>)
//!        ▼
//! ┌──────────────┐
//! │    Pools      │  ConstantProductPool: SwapPool + LiquidityPool
//! └──────┬───────┘
//!        │ preflight, commit, transfer
//!        ▼
//! ┌──────────────┐
//! │ TokenLedger   │  balances and allowances per token
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`TokenPair`](domain::TokenPair), [`PoolEvent`](domain::PoolEvent), etc. |
//! | [`traits`] | [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`TokenLedger`](traits::TokenLedger) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) and [`RegistryConfig`](config::RegistryConfig) |
//! | [`pools`]  | [`ConstantProductPool`](pools::ConstantProductPool) and [`PoolHandle`](pools::PoolHandle) |
//! | [`registry`] | [`PoolRegistry`](registry::PoolRegistry) |
//! | [`ledger`] | [`InMemoryLedger`](ledger::InMemoryLedger) |
//! | [`math`]   | Checked arithmetic and 256-bit `mul_div` / `sqrt_product` |
//! | [`error`]  | [`AmmError`](error::AmmError) and [`LedgerError`](error::LedgerError) |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Logging
//!
//! State changes are reported through [`tracing`] at `info` level and
//! quotes at `debug`. The library never installs a subscriber.

pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod registry;
pub mod traits;
