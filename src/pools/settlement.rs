//! Ledger transfers that settle one pool operation.
//!
//! Pool operations compute their effects first, [`preflight`] every
//! transfer against the ledger, commit their own state, and only then
//! [`execute`] the transfers. Execution stops at the first refusal and
//! reverses the transfers already applied.
//!
//! [`preflight`]: Settlement::preflight
//! [`execute`]: Settlement::execute

use crate::domain::{AccountId, Amount, TokenAddress};
use crate::error::LedgerError;
use crate::traits::TokenLedger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transfer {
    /// `from` → pool, spent through the pool's allowance.
    Pull {
        token: TokenAddress,
        from: AccountId,
        amount: Amount,
    },
    /// pool → `to`.
    Push {
        token: TokenAddress,
        to: AccountId,
        amount: Amount,
    },
}

/// Ordered list of transfers between a pool account and its counterparty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settlement {
    pool: AccountId,
    transfers: Vec<Transfer>,
}

impl Settlement {
    pub(crate) const fn new(pool: AccountId) -> Self {
        Self {
            pool,
            transfers: Vec::new(),
        }
    }

    /// Queues a pull of `amount` of `token` from `from` into the pool.
    #[must_use]
    pub(crate) fn pull(mut self, token: TokenAddress, from: AccountId, amount: Amount) -> Self {
        self.transfers.push(Transfer::Pull {
            token,
            from,
            amount,
        });
        self
    }

    /// Queues a payout of `amount` of `token` from the pool to `to`.
    #[must_use]
    pub(crate) fn push(mut self, token: TokenAddress, to: AccountId, amount: Amount) -> Self {
        self.transfers.push(Transfer::Push { token, to, amount });
        self
    }

    /// Checks that the ledger would accept every queued transfer, without
    /// moving anything.
    ///
    /// Each transfer is checked against current balances; operations never
    /// queue two transfers debiting the same account in the same token.
    ///
    /// # Errors
    ///
    /// Returns the [`LedgerError`] the first refused transfer would raise.
    pub(crate) fn preflight<L: TokenLedger + ?Sized>(&self, ledger: &L) -> Result<(), LedgerError> {
        for transfer in &self.transfers {
            match *transfer {
                Transfer::Pull {
                    token,
                    from,
                    amount,
                } => {
                    let approved = ledger.allowance(token, from, self.pool);
                    if approved < amount {
                        return Err(LedgerError::InsufficientAllowance {
                            token,
                            owner: from,
                            spender: self.pool,
                            needed: amount,
                            available: approved,
                        });
                    }
                    Self::require_balance(ledger, token, from, amount)?;
                }
                Transfer::Push { token, amount, .. } => {
                    Self::require_balance(ledger, token, self.pool, amount)?;
                }
            }
        }
        Ok(())
    }

    /// Applies the queued transfers in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`LedgerError`] raised; transfers applied before
    /// it are reversed first.
    pub(crate) fn execute<L: TokenLedger + ?Sized>(&self, ledger: &mut L) -> Result<(), LedgerError> {
        for (done, transfer) in self.transfers.iter().enumerate() {
            if let Err(err) = self.apply(ledger, *transfer) {
                self.reverse(ledger, &self.transfers[..done]);
                return Err(err);
            }
        }
        Ok(())
    }

    fn apply<L: TokenLedger + ?Sized>(
        &self,
        ledger: &mut L,
        transfer: Transfer,
    ) -> Result<(), LedgerError> {
        match transfer {
            Transfer::Pull {
                token,
                from,
                amount,
            } => ledger.transfer_from(token, self.pool, from, self.pool, amount),
            Transfer::Push { token, to, amount } => ledger.transfer(token, self.pool, to, amount),
        }
    }

    fn reverse<L: TokenLedger + ?Sized>(&self, ledger: &mut L, applied: &[Transfer]) {
        for transfer in applied.iter().rev() {
            let undone = match *transfer {
                Transfer::Pull {
                    token,
                    from,
                    amount,
                } => ledger.transfer(token, self.pool, from, amount),
                Transfer::Push { token, to, amount } => ledger.transfer(token, to, self.pool, amount),
            };
            if let Err(err) = undone {
                tracing::warn!(pool = %self.pool, ?transfer, %err, "could not reverse transfer");
            }
        }
    }

    fn require_balance<L: TokenLedger + ?Sized>(
        ledger: &L,
        token: TokenAddress,
        holder: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let available = ledger.balance_of(token, holder);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                token,
                holder,
                needed: amount,
                available,
            });
        }
        Ok(())
    }
}
