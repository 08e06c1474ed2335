//! Which side of a pool a swap sells into.

use core::fmt;

/// Direction of a swap relative to a pool's `(token_a, token_b)` order.
///
/// # Examples
///
/// ```
/// use smartswap_amm::domain::SwapDirection;
///
/// assert_eq!(SwapDirection::from_a_to_b(true), SwapDirection::AToB);
/// assert_eq!(SwapDirection::AToB.reverse(), SwapDirection::BToA);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Sell token A, receive token B.
    AToB,
    /// Sell token B, receive token A.
    BToA,
}

impl SwapDirection {
    /// Builds a direction from the boolean flag used by the pool ABI
    /// (`true` means A → B).
    #[must_use]
    pub const fn from_a_to_b(a_to_b: bool) -> Self {
        if a_to_b {
            Self::AToB
        } else {
            Self::BToA
        }
    }

    /// Returns `true` for [`SwapDirection::AToB`].
    #[must_use]
    pub const fn is_a_to_b(&self) -> bool {
        matches!(self, Self::AToB)
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn reverse(&self) -> Self {
        match self {
            Self::AToB => Self::BToA,
            Self::BToA => Self::AToB,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AToB => write!(f, "A->B"),
            Self::BToA => write!(f, "B->A"),
        }
    }
}
