//! Liquidity management trait extending [`SwapPool`].
//!
//! [`LiquidityPool`] adds share issuance and redemption on top of the swap
//! functionality provided by [`SwapPool`].
//!
//! # Liquidity Accounting Invariant
//!
//! The total reported by [`LiquidityPool::total_liquidity`] changes only
//! through `init`, `add_liquidity` and `remove_liquidity`, and always
//! equals the sum of every holder's balance:
//!
//! ```text
//! L = Σ liquidity_of(holder)   for all holders
//! ```
//!
//! Swaps never mint shares; their fee grows the reserves backing the
//! existing shares instead.

use super::{SwapPool, TokenLedger};
use crate::domain::{AccountId, Amount, Liquidity, LiquidityReceipt};
use crate::error::AmmError;

/// Trait for pools that issue and redeem liquidity shares.
///
/// # Implementors
///
/// - [`ConstantProductPool`](crate::pools::ConstantProductPool)
pub trait LiquidityPool: SwapPool {
    /// Seeds an empty (or drained) pool with its first reserves and mints
    /// `floor(√(amount_a × amount_b))` shares to `provider`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::AlreadyHasLiquidity`] if shares are outstanding.
    /// - [`AmmError::InvalidInputAmount`] if either amount is zero.
    /// - [`AmmError::Ledger`] if the provider has not approved or does not
    ///   hold both amounts.
    fn init<L: TokenLedger + ?Sized>(
        &mut self,
        ledger: &mut L,
        provider: AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<LiquidityReceipt, AmmError>;

    /// Deposits `amount_a` of token A plus the matching amount of token B
    /// at the current reserve ratio and mints proportional shares.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidInputAmount`] if `amount_a` is zero or too
    ///   small to mint a share or require any token B.
    /// - [`AmmError::PoolNotInitialized`] if the pool holds no liquidity.
    /// - [`AmmError::Ledger`] if either pull is refused.
    fn add_liquidity<L: TokenLedger + ?Sized>(
        &mut self,
        ledger: &mut L,
        provider: AccountId,
        amount_a: Amount,
    ) -> Result<LiquidityReceipt, AmmError>;

    /// Burns `shares` of `provider` and pays out the proportional slice of
    /// both reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidInputAmount`] if `shares` is zero or redeems
    ///   nothing from either reserve.
    /// - [`AmmError::InsufficientShares`] if `provider` holds fewer shares.
    /// - [`AmmError::Ledger`] if a payout is refused.
    fn remove_liquidity<L: TokenLedger + ?Sized>(
        &mut self,
        ledger: &mut L,
        provider: AccountId,
        shares: Liquidity,
    ) -> Result<LiquidityReceipt, AmmError>;

    /// Returns the total outstanding shares.
    #[must_use]
    fn total_liquidity(&self) -> Liquidity;

    /// Returns the shares held by `holder` (zero if none).
    #[must_use]
    fn liquidity_of(&self, holder: &AccountId) -> Liquidity;
}
