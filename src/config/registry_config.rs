//! Configuration for the pool registry.

use super::PoolConfig;
use crate::error::AmmError;

/// Parameters applied by a [`PoolRegistry`](crate::registry::PoolRegistry)
/// to every pool it creates.
///
/// # Examples
///
/// ```
/// use smartswap_amm::config::{PoolConfig, RegistryConfig};
///
/// let config = RegistryConfig::new(PoolConfig::default()).expect("valid");
/// assert_eq!(config.pool(), PoolConfig::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegistryConfig {
    pool: PoolConfig,
}

impl RegistryConfig {
    /// Creates a validated `RegistryConfig`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    pub fn new(pool: PoolConfig) -> Result<Self, AmmError> {
        let config = Self { pool };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    pub fn validate(&self) -> Result<(), AmmError> {
        self.pool.validate()
    }

    /// Returns the configuration given to newly created pools.
    #[must_use]
    pub const fn pool(&self) -> PoolConfig {
        self.pool
    }
}
