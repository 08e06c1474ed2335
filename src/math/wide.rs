//! 256-bit widened arithmetic for pricing and share issuance.
//!
//! Pool amounts are `u128`, but products such as `reserve_a × reserve_b`
//! reach 2²⁵⁶. Every product-then-divide in the engine goes through
//! [`mul_div`], which multiplies in 256 bits and only narrows the final
//! quotient.

use ruint::aliases::U256;

use crate::error::AmmError;

/// Computes `floor(a × b / d)` with a 256-bit intermediate.
///
/// Every quotient the pools form rounds down, which keeps payouts and
/// minted shares in the pool's favour.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `d` is zero.
/// - [`AmmError::Overflow`] if the quotient does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use smartswap_amm::math::mul_div;
///
/// // (2^127 × 4) / 8 would overflow in u128, but the result fits.
/// let half = 1u128 << 127;
/// assert_eq!(mul_div(half, 4, 8), Ok(1u128 << 126));
/// assert_eq!(mul_div(10, 1, 3), Ok(3));
/// ```
pub fn mul_div(a: u128, b: u128, d: u128) -> Result<u128, AmmError> {
    if d == 0 {
        return Err(AmmError::DivisionByZero);
    }
    let numerator = U256::from(a)
        .checked_mul(U256::from(b))
        .ok_or(AmmError::Overflow("mul_div numerator overflow"))?;
    let quotient = numerator
        .checked_div(U256::from(d))
        .ok_or(AmmError::DivisionByZero)?;

    u128::try_from(quotient).map_err(|_| AmmError::Overflow("mul_div result exceeds u128"))
}

/// Constant-product output `floor(reserve_out × net_in / (reserve_in + net_in))`.
///
/// Both the product and the sum are formed in 256 bits, so the quote stays
/// defined when `reserve_in + net_in` exceeds `u128`. The result is always
/// below `reserve_out`.
///
/// # Errors
///
/// Returns [`AmmError::DivisionByZero`] if `reserve_in` and `net_in` are
/// both zero.
///
/// # Examples
///
/// ```
/// use smartswap_amm::math::swap_output;
///
/// let e18 = 10u128.pow(18);
/// assert_eq!(
///     swap_output(100 * e18, 100 * e18, 9_970_000_000_000_000_000),
///     Ok(9_066_108_938_801_491_315)
/// );
/// ```
pub fn swap_output(reserve_in: u128, reserve_out: u128, net_in: u128) -> Result<u128, AmmError> {
    let denominator = U256::from(reserve_in) + U256::from(net_in);
    if denominator.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    let quotient = U256::from(reserve_out)
        .checked_mul(U256::from(net_in))
        .ok_or(AmmError::Overflow("swap output numerator overflow"))?
        / denominator;

    u128::try_from(quotient).map_err(|_| AmmError::Overflow("swap output exceeds u128"))
}

/// Returns `floor(√(a × b))`, the geometric mean of two amounts.
///
/// The product is formed in 256 bits, so any pair of `u128` inputs is
/// accepted and the root always fits back into `u128`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] only if an intermediate step overflows,
/// which cannot happen for `u128` inputs.
///
/// # Examples
///
/// ```
/// use smartswap_amm::math::sqrt_product;
///
/// let e18 = 10u128.pow(18);
/// assert_eq!(sqrt_product(100 * e18, 100 * e18), Ok(100 * e18));
/// assert_eq!(sqrt_product(2, 3), Ok(2));
/// ```
pub fn sqrt_product(a: u128, b: u128) -> Result<u128, AmmError> {
    let n = U256::from(a)
        .checked_mul(U256::from(b))
        .ok_or(AmmError::Overflow("sqrt product overflow"))?;
    if n.is_zero() {
        return Ok(0);
    }

    // Newton's method, starting above the root and decreasing monotonically.
    let two = U256::from(2u8);
    let mut x = n;
    let mut y = n
        .checked_add(U256::from(1u8))
        .ok_or(AmmError::Overflow("isqrt seed overflow"))?
        / two;
    while y < x {
        x = y;
        let step = n / x;
        y = x
            .checked_add(step)
            .ok_or(AmmError::Overflow("isqrt step overflow"))?
            / two;
    }

    u128::try_from(x).map_err(|_| AmmError::Overflow("isqrt result exceeds u128"))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn mul_div_exceeding_u128_intermediate() {
        let e18 = 10u128.pow(18);
        // 100e18 * 100e18 = 1e40 > u128::MAX
        let Ok(q) = mul_div(100 * e18, 100 * e18, 110 * e18) else {
            panic!("expected Ok");
        };
        assert_eq!(q, 90_909_090_909_090_909_090);
    }

    #[test]
    fn mul_div_floors() {
        assert_eq!(mul_div(7, 3, 2), Ok(10));
        assert_eq!(mul_div(8, 3, 2), Ok(12));
        assert_eq!(mul_div(1, 1, 2), Ok(0));
    }

    #[test]
    fn mul_div_zero_divisor() {
        assert_eq!(mul_div(1, 1, 0), Err(AmmError::DivisionByZero));
    }

    #[test]
    fn mul_div_result_overflow() {
        assert!(matches!(
            mul_div(u128::MAX, 2, 1),
            Err(AmmError::Overflow(_))
        ));
    }

    #[test]
    fn swap_output_past_u128_reserve() {
        // reserve_in + net_in overflows u128, the quote does not
        let Ok(out) = swap_output(u128::MAX, 1_000, u128::MAX) else {
            panic!("expected Ok");
        };
        assert_eq!(out, 500);
    }

    #[test]
    fn swap_output_empty_side() {
        assert_eq!(swap_output(0, 0, 0), Err(AmmError::DivisionByZero));
        assert_eq!(swap_output(10, 0, 5), Ok(0));
    }

    #[test]
    fn sqrt_small_values() {
        assert_eq!(sqrt_product(0, 5), Ok(0));
        assert_eq!(sqrt_product(1, 1), Ok(1));
        assert_eq!(sqrt_product(3, 5), Ok(3));
        assert_eq!(sqrt_product(4, 4), Ok(4));
        assert_eq!(sqrt_product(100, 200), Ok(141));
    }

    #[test]
    fn sqrt_of_max_product() {
        assert_eq!(sqrt_product(u128::MAX, u128::MAX), Ok(u128::MAX));
    }

    #[test]
    fn sqrt_is_floor() {
        let e9 = 10u128.pow(9);
        let Ok(r) = sqrt_product(2 * e9, e9) else {
            panic!("expected Ok");
        };
        // floor(sqrt(2e18)) = 1_414_213_562
        assert_eq!(r, 1_414_213_562);
    }
}
