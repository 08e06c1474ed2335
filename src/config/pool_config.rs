//! Configuration for constant-product pools.

use crate::domain::{BasisPoints, FeeTier};
use crate::error::AmmError;

/// Immutable parameters of a constant-product pool.
///
/// The token pair is not part of the configuration: it is fixed when the
/// pool is created. What remains is the fee retained on each swap.
///
/// # Validation
///
/// - The fee must be strictly below 100%, otherwise no input would ever
///   reach the pricing formula.
///
/// # Examples
///
/// ```
/// use smartswap_amm::config::PoolConfig;
/// use smartswap_amm::domain::{BasisPoints, FeeTier};
///
/// let config = PoolConfig::default();
/// assert_eq!(config.fee_tier(), FeeTier::DEFAULT);
///
/// let custom = PoolConfig::new(FeeTier::new(BasisPoints::new(5))).expect("valid fee");
/// assert_eq!(custom.fee_tier().basis_points().get(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoolConfig {
    fee_tier: FeeTier,
}

impl PoolConfig {
    /// Creates a validated `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the fee is 100% or more.
    pub fn new(fee_tier: FeeTier) -> Result<Self, AmmError> {
        let config = Self { fee_tier };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the fee is 100% or more.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.fee_tier.basis_points() >= BasisPoints::MAX_PERCENT {
            return Err(AmmError::InvalidFee("fee must be below 100%"));
        }
        Ok(())
    }

    /// Returns the fee tier.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(PoolConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_fee_is_valid() {
        assert!(PoolConfig::new(FeeTier::new(BasisPoints::ZERO)).is_ok());
    }

    #[test]
    fn full_fee_rejected() {
        assert!(matches!(
            PoolConfig::new(FeeTier::new(BasisPoints::MAX_PERCENT)),
            Err(AmmError::InvalidFee(_))
        ));
        assert!(PoolConfig::new(FeeTier::new(BasisPoints::new(9_999))).is_ok());
    }
}
