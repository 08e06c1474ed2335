//! Notifications emitted for off-chain observers.

use core::fmt;

use super::{AccountId, Amount, Liquidity, SwapDirection, TokenAddress};

/// A state change observers may want to index.
///
/// Pools and the registry append events to an in-memory journal that
/// callers drain with `take_events()`; each event is also logged through
/// `tracing` when it is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolEvent {
    /// The registry created a pool.
    PoolCreated {
        /// Account of the new pool.
        pool: AccountId,
        /// First token, in creation argument order.
        token_a: TokenAddress,
        /// Second token, in creation argument order.
        token_b: TokenAddress,
    },
    /// A trader swapped through a pool.
    Swap {
        /// Pool account.
        pool: AccountId,
        /// Trader account.
        trader: AccountId,
        /// Swap direction.
        direction: SwapDirection,
        /// Input pulled from the trader.
        amount_in: Amount,
        /// Output pushed to the trader.
        amount_out: Amount,
    },
    /// Shares were minted against a deposit (including `init`).
    LiquidityAdded {
        /// Pool account.
        pool: AccountId,
        /// Depositor.
        provider: AccountId,
        /// Token A deposited.
        amount_a: Amount,
        /// Token B deposited.
        amount_b: Amount,
        /// Shares minted.
        shares: Liquidity,
    },
    /// Shares were burned and reserves paid out.
    LiquidityRemoved {
        /// Pool account.
        pool: AccountId,
        /// Redeemer.
        provider: AccountId,
        /// Token A withdrawn.
        amount_a: Amount,
        /// Token B withdrawn.
        amount_b: Amount,
        /// Shares burned.
        shares: Liquidity,
    },
}

impl PoolEvent {
    /// Returns the account of the pool the event belongs to.
    #[must_use]
    pub const fn pool(&self) -> AccountId {
        match self {
            Self::PoolCreated { pool, .. }
            | Self::Swap { pool, .. }
            | Self::LiquidityAdded { pool, .. }
            | Self::LiquidityRemoved { pool, .. } => *pool,
        }
    }

    /// Returns the event name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PoolCreated { .. } => "PoolCreated",
            Self::Swap { .. } => "Swap",
            Self::LiquidityAdded { .. } => "LiquidityAdded",
            Self::LiquidityRemoved { .. } => "LiquidityRemoved",
        }
    }
}

impl fmt::Display for PoolEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(pool={})", self.name(), self.pool())
    }
}
