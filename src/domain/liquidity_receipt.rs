//! Token and share movements produced by a liquidity change.

use core::fmt;

use super::{Amount, Liquidity};

/// Whether shares were minted or burned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Tokens deposited, shares minted.
    Add,
    /// Shares burned, tokens withdrawn.
    Remove,
}

/// What a liquidity provider paid or received in one operation.
///
/// Returned by `init`, `add_liquidity` and `remove_liquidity`.
///
/// # Examples
///
/// ```
/// use smartswap_amm::domain::{Amount, ChangeKind, Liquidity, LiquidityReceipt};
///
/// let receipt = LiquidityReceipt::new(
///     ChangeKind::Add,
///     Amount::new(5),
///     Amount::new(5),
///     Liquidity::new(5),
/// );
/// assert_eq!(receipt.shares(), Liquidity::new(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LiquidityReceipt {
    kind: ChangeKind,
    amount_a: Amount,
    amount_b: Amount,
    shares: Liquidity,
}

impl LiquidityReceipt {
    /// Creates a receipt.
    pub const fn new(kind: ChangeKind, amount_a: Amount, amount_b: Amount, shares: Liquidity) -> Self {
        Self {
            kind,
            amount_a,
            amount_b,
            shares,
        }
    }

    /// Returns whether shares were minted or burned.
    #[must_use]
    pub const fn kind(&self) -> ChangeKind {
        self.kind
    }

    /// Token A moved (deposited for `Add`, withdrawn for `Remove`).
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Token B moved.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Shares minted or burned.
    #[must_use]
    pub const fn shares(&self) -> Liquidity {
        self.shares
    }
}

impl fmt::Display for LiquidityReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.kind {
            ChangeKind::Add => "minted",
            ChangeKind::Remove => "burned",
        };
        write!(
            f,
            "{verb} {} shares for a={}, b={}",
            self.shares, self.amount_a, self.amount_b
        )
    }
}
