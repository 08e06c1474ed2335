//! Ledger account identity for traders, liquidity providers and pools.

use core::fmt;

use sha3::{Digest, Keccak256};

use super::token_address::write_hex;
use super::TokenPair;

/// An account on the host token ledger.
///
/// Traders and liquidity providers are accounts, and so is every pool: the
/// pool's reserves are the balances held by its own account.
///
/// # Examples
///
/// ```
/// use smartswap_amm::domain::AccountId;
///
/// let alice = AccountId::from_bytes([7u8; 32]);
/// assert_eq!(alice.as_bytes(), [7u8; 32]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Derives the account of the pool serving `pair`.
    ///
    /// The account is `keccak256(first ‖ second ‖ nonce)` over the canonical
    /// pair and a big-endian deployment nonce. Both argument orders of the
    /// same two tokens hash alike; two deployments over one pair do not.
    #[must_use]
    pub fn for_pool(pair: &TokenPair, nonce: u64) -> Self {
        let mut hasher = Keccak256::new();
        hasher.update(pair.first().as_bytes());
        hasher.update(pair.second().as_bytes());
        hasher.update(nonce.to_be_bytes());
        let digest = hasher.finalize();

        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0)
    }
}
