//! Core swap trait for quoting and executing swaps.
//!
//! [`SwapPool`] covers the trading half of a pool:
//!
//! 1. **Quote**: [`SwapPool::price`] returns the output a swap would
//!    produce without touching any state.
//! 2. **Execute**: [`SwapPool::swap`] settles the trade through a
//!    [`TokenLedger`].
//! 3. **Inspect**: [`SwapPool::reserves`] and [`SwapPool::fee_tier`].
//!
//! # Fee Deduction Invariant
//!
//! The fee is deducted from the input **before** the pricing formula is
//! applied, and the full input (fee included) enters the reserves:
//!
//! ```text
//! effective_in = amount_in × (10 000 − fee_bps) / 10 000
//! amount_out   = price_curve(effective_in)
//! reserve_in  += amount_in
//! ```
//!
//! # Dispatch Model
//!
//! Methods are generic over the ledger, so the trait is used through
//! static dispatch only.

use super::TokenLedger;
use crate::domain::{AccountId, Amount, FeeTier, SwapDirection, SwapResult};
use crate::error::AmmError;

/// Trait for pools that quote and execute swaps.
///
/// # Implementors
///
/// - [`ConstantProductPool`](crate::pools::ConstantProductPool), `x · y = k`
pub trait SwapPool {
    /// Returns the output amount for selling `amount_in` in `direction`,
    /// computed on the current reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidInputAmount`] if `amount_in` is zero.
    /// - [`AmmError::PoolNotInitialized`] if the pool holds no liquidity.
    /// - [`AmmError::Overflow`] if the input reserve would overflow.
    fn price(&self, direction: SwapDirection, amount_in: Amount) -> Result<Amount, AmmError>;

    /// Executes a swap for `trader`, who must have approved the pool's
    /// account for `amount_in` of the input token.
    ///
    /// The output is priced on the reserves before this call. State changes
    /// are all-or-nothing.
    ///
    /// # Errors
    ///
    /// - Every error of [`SwapPool::price`].
    /// - [`AmmError::InvalidInputAmount`] if the quote is zero.
    /// - [`AmmError::Ledger`] if the ledger refuses a transfer.
    fn swap<L: TokenLedger + ?Sized>(
        &mut self,
        ledger: &mut L,
        trader: AccountId,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapResult, AmmError>;

    /// Returns `(reserve_a, reserve_b)`.
    #[must_use]
    fn reserves(&self) -> (Amount, Amount);

    /// Returns the fee tier applied to swaps.
    ///
    /// The fee tier is constant for the lifetime of the pool.
    #[must_use]
    fn fee_tier(&self) -> FeeTier;
}
