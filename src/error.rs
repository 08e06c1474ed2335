//! Unified error types for the SmartSwap AMM library.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type, ensuring a consistent error handling experience for consumers.
//! Failures coming from the external token ledger are carried unchanged in
//! [`AmmError::Ledger`].
//!
//! Every error leaves pool and registry state exactly as it was before the
//! failing call.

use crate::domain::{AccountId, Amount, Liquidity, TokenAddress};

/// Convenience alias used by every fallible function in the crate.
pub type Result<T, E = AmmError> = core::result::Result<T, E>;

/// Errors produced by pool and registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmmError {
    /// A pool was requested for a token paired with itself.
    #[error("a pool needs two different tokens")]
    NeedTwoDifferentTokens,

    /// One of the token identifiers is the zero address.
    #[error("token address must not be zero")]
    ZeroTokenError,

    /// A pool already exists for this unordered token pair.
    #[error("a pool already exists for this token pair")]
    PoolAlreadyExists,

    /// `init` was called on a pool that still has outstanding shares.
    #[error("pool already has liquidity")]
    AlreadyHasLiquidity,

    /// An input amount is zero or too small to have any effect.
    #[error("invalid input amount: {0}")]
    InvalidInputAmount(&'static str),

    /// The pool has no liquidity, so it cannot price or accept deposits.
    #[error("pool has no liquidity")]
    PoolNotInitialized,

    /// The caller tried to redeem more shares than it holds.
    #[error("insufficient liquidity shares: requested {requested}, available {available}")]
    InsufficientShares {
        /// Shares the caller asked to burn.
        requested: Liquidity,
        /// Shares the caller actually holds.
        available: Liquidity,
    },

    /// The configured fee is outside the supported range.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The token ledger rejected a transfer.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Errors reported by a [`TokenLedger`](crate::traits::TokenLedger).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// The spender is not approved for the requested amount.
    #[error("insufficient allowance for {token}: needed {needed}, available {available}")]
    InsufficientAllowance {
        /// Token being moved.
        token: TokenAddress,
        /// Account whose tokens are spent.
        owner: AccountId,
        /// Account spending on the owner's behalf.
        spender: AccountId,
        /// Amount requested.
        needed: Amount,
        /// Amount currently approved.
        available: Amount,
    },

    /// The holder's balance is lower than the requested amount.
    #[error("insufficient balance of {token} for {holder}: needed {needed}, available {available}")]
    InsufficientBalance {
        /// Token being moved.
        token: TokenAddress,
        /// Account being debited.
        holder: AccountId,
        /// Amount requested.
        needed: Amount,
        /// Amount currently held.
        available: Amount,
    },

    /// Crediting the recipient would overflow its balance.
    #[error("balance overflow for {token}")]
    BalanceOverflow {
        /// Token being credited.
        token: TokenAddress,
    },
}
