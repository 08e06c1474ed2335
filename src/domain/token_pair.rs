//! Unordered pair of distinct tokens.

use super::TokenAddress;
use crate::error::AmmError;

/// An unordered pair of distinct, non-zero tokens, canonically sorted by
/// address.
///
/// The canonical ordering guarantees that `first() < second()`, so `(X, Y)`
/// and `(Y, X)` build equal pairs. The registry keys its pool map by this
/// type instead of storing mirrored entries.
///
/// # Examples
///
/// ```
/// use smartswap_amm::domain::{TokenAddress, TokenPair};
///
/// let x = TokenAddress::from_bytes([1u8; 32]);
/// let y = TokenAddress::from_bytes([2u8; 32]);
///
/// let pair = TokenPair::new(y, x).expect("distinct tokens");
/// assert_eq!(pair.first(), x);
/// assert_eq!(pair, TokenPair::new(x, y).expect("distinct tokens"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenPair {
    first: TokenAddress,
    second: TokenAddress,
}

impl TokenPair {
    /// Creates a new canonically-ordered `TokenPair`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NeedTwoDifferentTokens`] if both addresses are equal
    ///   (checked first, so two zero addresses report this error).
    /// - [`AmmError::ZeroTokenError`] if either address is zero.
    pub fn new(x: TokenAddress, y: TokenAddress) -> Result<Self, AmmError> {
        if x == y {
            return Err(AmmError::NeedTwoDifferentTokens);
        }
        if x.is_zero() || y.is_zero() {
            return Err(AmmError::ZeroTokenError);
        }

        let (first, second) = if x < y { (x, y) } else { (y, x) };
        Ok(Self { first, second })
    }

    /// Returns the token with the lower address.
    #[must_use]
    pub const fn first(&self) -> TokenAddress {
        self.first
    }

    /// Returns the token with the higher address.
    #[must_use]
    pub const fn second(&self) -> TokenAddress {
        self.second
    }

    /// Returns `true` if the given token is part of this pair.
    #[must_use]
    pub fn contains(&self, token: &TokenAddress) -> bool {
        self.first == *token || self.second == *token
    }
}
