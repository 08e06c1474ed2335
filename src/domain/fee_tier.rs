//! Swap fee rate built on [`BasisPoints`].

use core::fmt;

use super::{Amount, BasisPoints};
use crate::error::AmmError;
use crate::math::mul_div;

/// Fee rate retained by a pool on every swap input.
///
/// The fee is never minted or paid out separately: it is the part of the
/// input that enters the reserves without being priced, so it accrues to
/// all share holders.
///
/// # Examples
///
/// ```
/// use smartswap_amm::domain::{Amount, FeeTier};
///
/// let fee = FeeTier::DEFAULT;
/// // 0.3% fee: 1 000 in, 997 priced
/// assert_eq!(fee.effective_input(Amount::new(1_000)), Ok(Amount::new(997)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// 0.30% fee (30 bp), the rate every pool uses unless configured otherwise.
    pub const DEFAULT: Self = Self(BasisPoints::new(30));

    /// Creates a new `FeeTier` from arbitrary [`BasisPoints`].
    ///
    /// Range checks happen in [`PoolConfig::validate`](crate::config::PoolConfig::validate).
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Returns the part of `amount_in` that enters the pricing formula:
    /// `floor(amount_in × (10 000 − bps) / 10 000)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the rate exceeds 100%.
    pub fn effective_input(&self, amount_in: Amount) -> crate::error::Result<Amount> {
        let complement = self
            .0
            .complement()
            .ok_or(AmmError::InvalidFee("fee exceeds 100%"))?;
        let scaled = mul_div(
            amount_in.get(),
            u128::from(complement.get()),
            u128::from(BasisPoints::MAX_PERCENT.get()),
        )?;
        Ok(Amount::new(scaled))
    }
}

impl Default for FeeTier {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}
