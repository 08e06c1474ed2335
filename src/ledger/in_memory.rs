//! `HashMap`-backed token ledger.

use std::collections::HashMap;

use crate::domain::{AccountId, Amount, TokenAddress};
use crate::error::LedgerError;
use crate::traits::TokenLedger;

/// In-memory [`TokenLedger`] with ERC-20 semantics for any number of
/// tokens.
///
/// Balances start at zero; [`mint`](Self::mint) credits accounts during
/// setup. Every transfer validates before mutating, so failed calls leave
/// the ledger untouched.
///
/// # Examples
///
/// ```
/// use smartswap_amm::domain::{AccountId, Amount, TokenAddress};
/// use smartswap_amm::ledger::InMemoryLedger;
/// use smartswap_amm::traits::TokenLedger;
///
/// let token = TokenAddress::from_bytes([1u8; 32]);
/// let alice = AccountId::from_bytes([0xa1; 32]);
/// let bob = AccountId::from_bytes([0xb0; 32]);
///
/// let mut ledger = InMemoryLedger::new();
/// ledger.mint(token, alice, Amount::new(100)).expect("mint");
/// ledger.transfer(token, alice, bob, Amount::new(40)).expect("transfer");
/// assert_eq!(ledger.balance_of(token, bob), Amount::new(40));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryLedger {
    balances: HashMap<(TokenAddress, AccountId), Amount>,
    allowances: HashMap<(TokenAddress, AccountId, AccountId), Amount>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` of `token` to `to` out of thin air.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::BalanceOverflow`] if the balance would
    /// overflow.
    pub fn mint(
        &mut self,
        token: TokenAddress,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let credited = self
            .balance_of(token, to)
            .checked_add(&amount)
            .ok_or(LedgerError::BalanceOverflow { token })?;
        self.balances.insert((token, to), credited);
        Ok(())
    }

    fn move_balance(
        &mut self,
        token: TokenAddress,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let available = self.balance_of(token, from);
        let debited = available
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientBalance {
                token,
                holder: from,
                needed: amount,
                available,
            })?;
        if from == to {
            return Ok(());
        }
        let credited = self
            .balance_of(token, to)
            .checked_add(&amount)
            .ok_or(LedgerError::BalanceOverflow { token })?;

        self.balances.insert((token, from), debited);
        self.balances.insert((token, to), credited);
        Ok(())
    }
}

impl TokenLedger for InMemoryLedger {
    fn balance_of(&self, token: TokenAddress, holder: AccountId) -> Amount {
        self.balances
            .get(&(token, holder))
            .copied()
            .unwrap_or_default()
    }

    fn allowance(&self, token: TokenAddress, owner: AccountId, spender: AccountId) -> Amount {
        self.allowances
            .get(&(token, owner, spender))
            .copied()
            .unwrap_or_default()
    }

    fn approve(
        &mut self,
        token: TokenAddress,
        owner: AccountId,
        spender: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.allowances.insert((token, owner, spender), amount);
        Ok(())
    }

    fn transfer(
        &mut self,
        token: TokenAddress,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.move_balance(token, from, to, amount)
    }

    fn transfer_from(
        &mut self,
        token: TokenAddress,
        spender: AccountId,
        owner: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let approved = self.allowance(token, owner, spender);
        let remaining = approved
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientAllowance {
                token,
                owner,
                spender,
                needed: amount,
                available: approved,
            })?;
        self.move_balance(token, owner, to, amount)?;
        self.allowances.insert((token, owner, spender), remaining);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const TOKEN: TokenAddress = TokenAddress::from_bytes([1u8; 32]);
    const ALICE: AccountId = AccountId::from_bytes([0xa1; 32]);
    const BOB: AccountId = AccountId::from_bytes([0xb0; 32]);
    const POOL: AccountId = AccountId::from_bytes([0x70; 32]);

    fn funded() -> InMemoryLedger {
        let mut ledger = InMemoryLedger::new();
        let Ok(()) = ledger.mint(TOKEN, ALICE, Amount::new(100)) else {
            panic!("mint");
        };
        ledger
    }

    #[test]
    fn transfer_moves_balance() {
        let mut ledger = funded();
        assert_eq!(ledger.transfer(TOKEN, ALICE, BOB, Amount::new(30)), Ok(()));
        assert_eq!(ledger.balance_of(TOKEN, ALICE), Amount::new(70));
        assert_eq!(ledger.balance_of(TOKEN, BOB), Amount::new(30));
    }

    #[test]
    fn transfer_insufficient_balance_is_atomic() {
        let mut ledger = funded();
        let before = ledger.clone();
        let Err(LedgerError::InsufficientBalance { needed, available, .. }) =
            ledger.transfer(TOKEN, ALICE, BOB, Amount::new(101))
        else {
            panic!("expected InsufficientBalance");
        };
        assert_eq!(needed, Amount::new(101));
        assert_eq!(available, Amount::new(100));
        assert_eq!(ledger, before);
    }

    #[test]
    fn transfer_from_requires_allowance() {
        let mut ledger = funded();
        let result = ledger.transfer_from(TOKEN, POOL, ALICE, POOL, Amount::new(10));
        assert!(matches!(
            result,
            Err(LedgerError::InsufficientAllowance { .. })
        ));
        assert_eq!(ledger.balance_of(TOKEN, POOL), Amount::ZERO);
    }

    #[test]
    fn transfer_from_consumes_allowance() {
        let mut ledger = funded();
        let Ok(()) = ledger.approve(TOKEN, ALICE, POOL, Amount::new(50)) else {
            panic!("approve");
        };
        assert_eq!(
            ledger.transfer_from(TOKEN, POOL, ALICE, POOL, Amount::new(20)),
            Ok(())
        );
        assert_eq!(ledger.allowance(TOKEN, ALICE, POOL), Amount::new(30));
        assert_eq!(ledger.balance_of(TOKEN, POOL), Amount::new(20));
    }

    #[test]
    fn transfer_from_with_allowance_but_no_balance() {
        let mut ledger = funded();
        let Ok(()) = ledger.approve(TOKEN, ALICE, POOL, Amount::new(500)) else {
            panic!("approve");
        };
        let result = ledger.transfer_from(TOKEN, POOL, ALICE, POOL, Amount::new(200));
        assert!(matches!(result, Err(LedgerError::InsufficientBalance { .. })));
        // allowance untouched by the failed call
        assert_eq!(ledger.allowance(TOKEN, ALICE, POOL), Amount::new(500));
    }

    #[test]
    fn mint_overflow() {
        let mut ledger = InMemoryLedger::new();
        let Ok(()) = ledger.mint(TOKEN, ALICE, Amount::MAX) else {
            panic!("mint");
        };
        assert_eq!(
            ledger.mint(TOKEN, ALICE, Amount::new(1)),
            Err(LedgerError::BalanceOverflow { token: TOKEN })
        );
    }
}
