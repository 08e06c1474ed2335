//! Outcome of a swap operation.

use core::fmt;

use super::{Amount, SwapDirection};
use crate::error::AmmError;

/// The outcome of an executed swap.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0`.
/// - `fee <= amount_in`.
///
/// # Examples
///
/// ```
/// use smartswap_amm::domain::{Amount, SwapDirection, SwapResult};
///
/// let result = SwapResult::new(
///     SwapDirection::AToB,
///     Amount::new(1_000),
///     Amount::new(990),
///     Amount::new(3),
/// );
/// assert!(result.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapResult {
    direction: SwapDirection,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapResult {
    /// Creates a new `SwapResult` with validated invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidInputAmount`] if either amount is zero or
    /// the fee exceeds the input.
    pub const fn new(
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidInputAmount("amount_in must be positive"));
        }
        if amount_out.is_zero() {
            return Err(AmmError::InvalidInputAmount(
                "input too small to produce any output",
            ));
        }
        if fee.get() > amount_in.get() {
            return Err(AmmError::InvalidInputAmount("fee exceeds amount_in"));
        }
        Ok(Self {
            direction,
            amount_in,
            amount_out,
            fee,
        })
    }

    /// Returns the swap direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Returns the input amount pulled from the trader.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount pushed to the trader.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the part of the input retained as fee.
    pub const fn fee(&self) -> Amount {
        self.fee
    }
}

impl fmt::Display for SwapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapResult({}, in={}, out={}, fee={})",
            self.direction, self.amount_in, self.amount_out, self.fee
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_result() {
        let result = SwapResult::new(
            SwapDirection::BToA,
            Amount::new(1_000),
            Amount::new(990),
            Amount::new(3),
        );
        assert!(result.is_ok_and(|r| r.fee() == Amount::new(3)
            && r.direction() == SwapDirection::BToA));
    }

    #[test]
    fn zero_output_rejected() {
        let result = SwapResult::new(SwapDirection::AToB, Amount::new(1), Amount::ZERO, Amount::ZERO);
        assert!(matches!(result, Err(AmmError::InvalidInputAmount(_))));
    }

    #[test]
    fn fee_above_input_rejected() {
        let result = SwapResult::new(
            SwapDirection::AToB,
            Amount::new(10),
            Amount::new(5),
            Amount::new(11),
        );
        assert!(result.is_err());
    }
}
