//! Registry of constant-product pools, one per unordered token pair.

use std::collections::HashMap;

use crate::config::RegistryConfig;
use crate::domain::{PoolEvent, TokenAddress, TokenPair};
use crate::error::AmmError;
use crate::pools::{ConstantProductPool, PoolHandle};

/// Owner of every pool, keyed by canonical [`TokenPair`].
///
/// `PoolRegistry` is the single entry point for creating pools. It rejects
/// self-pairs, zero addresses and duplicate pairs (in either order), then
/// builds the pool with the registry's [`PoolConfig`](crate::config::PoolConfig)
/// and hands out a shared [`PoolHandle`].
///
/// The registry is an ordinary value owned by the caller; wrap it in a lock
/// to share it across threads.
///
/// # Example
///
/// ```rust
/// use smartswap_amm::config::RegistryConfig;
/// use smartswap_amm::domain::TokenAddress;
/// use smartswap_amm::error::AmmError;
/// use smartswap_amm::registry::PoolRegistry;
///
/// let usdc = TokenAddress::from_bytes([1u8; 32]);
/// let weth = TokenAddress::from_bytes([2u8; 32]);
///
/// let mut registry = PoolRegistry::new(RegistryConfig::default());
/// let pool = registry.create_pool(usdc, weth).expect("pool created");
///
/// assert_eq!(registry.lookup(weth, usdc), Some(pool));
/// assert_eq!(registry.create_pool(weth, usdc), Err(AmmError::PoolAlreadyExists));
/// ```
#[derive(Debug, Default)]
pub struct PoolRegistry {
    config: RegistryConfig,
    pools: HashMap<TokenPair, PoolHandle>,
    all: Vec<PoolHandle>,
    events: Vec<PoolEvent>,
}

impl PoolRegistry {
    /// Creates an empty registry that builds pools with `config`.
    #[must_use]
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            pools: HashMap::new(),
            all: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Creates the pool for `token_x` and `token_y`.
    ///
    /// The new pool keeps the argument order: `token_x` becomes token A.
    ///
    /// # Flow
    ///
    /// 1. Canonicalize the pair, rejecting self-pairs and zero addresses.
    /// 2. Reject the pair if it is registered in either order.
    /// 3. Build the pool, record it and emit [`PoolEvent::PoolCreated`].
    ///
    /// # Errors
    ///
    /// - [`AmmError::NeedTwoDifferentTokens`] if `token_x == token_y`.
    /// - [`AmmError::ZeroTokenError`] if either token is the zero address.
    /// - [`AmmError::PoolAlreadyExists`] if the pair already has a pool.
    /// - [`AmmError::InvalidFee`] if the registry configuration is invalid.
    pub fn create_pool(
        &mut self,
        token_x: TokenAddress,
        token_y: TokenAddress,
    ) -> Result<PoolHandle, AmmError> {
        let pair = TokenPair::new(token_x, token_y)?;
        if self.pools.contains_key(&pair) {
            return Err(AmmError::PoolAlreadyExists);
        }

        let pool = ConstantProductPool::new(token_x, token_y, self.config.pool())?;
        let handle = PoolHandle::new(pool);
        self.pools.insert(pair, handle.clone());
        self.all.push(handle.clone());

        let event = PoolEvent::PoolCreated {
            pool: handle.account(),
            token_a: token_x,
            token_b: token_y,
        };
        tracing::info!(pool = %handle.account(), %token_x, %token_y, count = self.all.len(), "pool created");
        self.events.push(event);

        Ok(handle)
    }

    /// Returns the pool for the pair, in either order.
    ///
    /// Equal or zero-address tokens never have a pool, so they yield `None`.
    #[must_use]
    pub fn lookup(&self, token_x: TokenAddress, token_y: TokenAddress) -> Option<PoolHandle> {
        let pair = TokenPair::new(token_x, token_y).ok()?;
        self.pools.get(&pair).cloned()
    }

    /// Returns every pool in creation order.
    #[must_use]
    pub fn all_pools(&self) -> &[PoolHandle] {
        &self.all
    }

    /// Returns the number of pools created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.all.len()
    }

    /// Returns `true` if no pool has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Returns the configuration new pools are built with.
    #[must_use]
    pub const fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Drains the `PoolCreated` events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<PoolEvent> {
        core::mem::take(&mut self.events)
    }
}
