//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use smartswap_amm::prelude::*;
//!
//! let registry = PoolRegistry::new(RegistryConfig::default());
//! assert!(registry.is_empty());
//! ```

pub use crate::domain::{
    AccountId, Amount, BasisPoints, ChangeKind, FeeTier, Liquidity, LiquidityReceipt, PoolEvent,
    PoolState, SwapDirection, SwapResult, TokenAddress, TokenPair,
};

pub use crate::traits::{LiquidityPool, SwapPool, TokenLedger};

pub use crate::config::{PoolConfig, RegistryConfig};

pub use crate::error::{AmmError, LedgerError, Result};

pub use crate::ledger::InMemoryLedger;
pub use crate::pools::{ConstantProductPool, PoolHandle};
pub use crate::registry::PoolRegistry;
