//! Shared, lockable reference to a registered pool.

use std::sync::{Arc, Mutex, MutexGuard};

use super::ConstantProductPool;
use crate::domain::{AccountId, TokenAddress};

/// Cloneable handle to a pool owned jointly by the registry and its callers.
///
/// The mutex is the mutual-exclusion unit for one pool: hold the guard
/// returned by [`lock`](Self::lock) for the whole read-compute-write
/// sequence of an operation. Identity fields are cached outside the lock.
///
/// Two handles compare equal when they refer to the same pool.
#[derive(Debug, Clone)]
pub struct PoolHandle {
    account: AccountId,
    token_a: TokenAddress,
    token_b: TokenAddress,
    inner: Arc<Mutex<ConstantProductPool>>,
}

impl PoolHandle {
    /// Wraps `pool` in a new handle.
    #[must_use]
    pub fn new(pool: ConstantProductPool) -> Self {
        Self {
            account: pool.account(),
            token_a: pool.token_a(),
            token_b: pool.token_b(),
            inner: Arc::new(Mutex::new(pool)),
        }
    }

    /// Returns the pool's ledger account.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// Returns token A, in creation order.
    #[must_use]
    pub const fn token_a(&self) -> TokenAddress {
        self.token_a
    }

    /// Returns token B, in creation order.
    #[must_use]
    pub const fn token_b(&self) -> TokenAddress {
        self.token_b
    }

    /// Locks the pool for exclusive access.
    ///
    /// A poisoned lock is recovered: pools commit state only after every
    /// check has passed, so a panicking holder cannot leave a partial update.
    pub fn lock(&self) -> MutexGuard<'_, ConstantProductPool> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::error!(pool = %self.account, "pool mutex poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }
}

impl PartialEq for PoolHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for PoolHandle {}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::thread;

    use super::*;
    use crate::config::PoolConfig;
    use crate::traits::SwapPool;

    fn handle() -> PoolHandle {
        let Ok(pool) = ConstantProductPool::new(
            TokenAddress::from_bytes([1u8; 32]),
            TokenAddress::from_bytes([2u8; 32]),
            PoolConfig::default(),
        ) else {
            panic!("expected valid pool");
        };
        PoolHandle::new(pool)
    }

    #[test]
    fn clones_share_the_pool() {
        let first = handle();
        let second = first.clone();
        assert_eq!(first, second);
        assert_eq!(first.account(), second.lock().account());
    }

    #[test]
    fn distinct_pools_are_not_equal() {
        let (first, second) = (handle(), handle());
        // same pair, but two separate pools with separate reserves
        assert_ne!(first.account(), second.account());
        assert_ne!(first, second);
    }

    #[test]
    fn lock_recovers_from_poison() {
        let shared = handle();
        let poisoner = shared.clone();
        let joined = thread::spawn(move || {
            let _guard = poisoner.lock();
            panic!("poison the pool lock");
        })
        .join();
        assert!(joined.is_err());
        assert_eq!(shared.lock().fee_tier().basis_points().get(), 30);
    }
}
