//! Boundary to the external fungible-token ledger.
//!
//! Pools never hold token balances themselves: they ask a [`TokenLedger`]
//! to move tokens between accounts and mirror the result in their reserve
//! bookkeeping. The trait models ERC-20 semantics addressed by token, so
//! one ledger value can serve every token of every pool.
//!
//! # Atomicity
//!
//! Each call is expected to be atomic: a failed `transfer` or
//! `transfer_from` moves nothing. Pools additionally preflight every
//! transfer with [`balance_of`](TokenLedger::balance_of) and
//! [`allowance`](TokenLedger::allowance) before committing any state.

use crate::domain::{AccountId, Amount, TokenAddress};
use crate::error::LedgerError;

/// ERC-20 style token ledger.
///
/// # Implementors
///
/// - [`InMemoryLedger`](crate::ledger::InMemoryLedger), `HashMap`-backed
///   reference ledger for tests, demos and simulation.
pub trait TokenLedger {
    /// Returns the balance of `token` held by `holder`.
    #[must_use]
    fn balance_of(&self, token: TokenAddress, holder: AccountId) -> Amount;

    /// Returns how much of `owner`'s `token` the `spender` may move.
    #[must_use]
    fn allowance(&self, token: TokenAddress, owner: AccountId, spender: AccountId) -> Amount;

    /// Sets the allowance of `spender` over `owner`'s `token` to `amount`.
    ///
    /// # Errors
    ///
    /// Implementation-defined; the in-memory ledger never fails.
    fn approve(
        &mut self,
        token: TokenAddress,
        owner: AccountId,
        spender: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Moves `amount` of `token` from `from` to `to`, authorised by `from`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientBalance`] if `from` holds too little.
    /// - [`LedgerError::BalanceOverflow`] if `to`'s balance would overflow.
    fn transfer(
        &mut self,
        token: TokenAddress,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Moves `amount` of `owner`'s `token` to `to`, authorised by a prior
    /// approval of `spender`, and decreases that allowance.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientAllowance`] if the approval is too small.
    /// - [`LedgerError::InsufficientBalance`] if `owner` holds too little.
    /// - [`LedgerError::BalanceOverflow`] if `to`'s balance would overflow.
    fn transfer_from(
        &mut self,
        token: TokenAddress,
        spender: AccountId,
        owner: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;
}
