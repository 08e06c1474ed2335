//! Lifecycle state of a pool.

use core::fmt;

/// Where a pool is in its lifecycle.
///
/// ```text
/// Empty ──init──▶ Active ──remove last share──▶ Drained ──init──▶ Active
/// ```
///
/// Pools are never torn down; a drained pool keeps its identity and its
/// registry entry and can be seeded again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolState {
    /// Created but never initialized. All reserves and shares are zero.
    Empty,
    /// Holds liquidity; swaps and deposits are accepted.
    Active,
    /// Every share has been redeemed; reserves are zero again.
    Drained,
}

impl PoolState {
    /// Returns `true` if the pool can price swaps and accept deposits.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Returns `true` if `init` is accepted in this state.
    #[must_use]
    pub const fn accepts_init(&self) -> bool {
        !self.is_active()
    }
}

impl fmt::Display for PoolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Active => write!(f, "Active"),
            Self::Drained => write!(f, "Drained"),
        }
    }
}
