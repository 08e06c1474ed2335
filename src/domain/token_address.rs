//! Chain-agnostic token address.

use core::fmt;

/// Identifier of a token contract on the host ledger.
///
/// Wraps a fixed-size `[u8; 32]` byte array. The all-zero address is the
/// "null token" and is rejected by the registry.
///
/// # Examples
///
/// ```
/// use smartswap_amm::domain::TokenAddress;
///
/// let addr = TokenAddress::from_bytes([1u8; 32]);
/// assert_eq!(addr.as_bytes(), [1u8; 32]);
/// assert!(TokenAddress::zero().is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenAddress([u8; 32]);

impl TokenAddress {
    /// Creates a `TokenAddress` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns the all-zero (null token) address.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` for the null token address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0)
    }
}

/// Writes `bytes` as a `0x`-prefixed lowercase hex string.
pub(crate) fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    f.write_str("0x")?;
    for byte in bytes {
        write!(f, "{byte:02x}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_detection() {
        assert!(TokenAddress::zero().is_zero());
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        assert!(!TokenAddress::from_bytes(bytes).is_zero());
    }

    #[test]
    fn ordering_is_lexicographic() {
        let lo = TokenAddress::from_bytes([1u8; 32]);
        let hi = TokenAddress::from_bytes([2u8; 32]);
        assert!(lo < hi);
    }

    #[test]
    fn display_is_hex() {
        let shown = TokenAddress::from_bytes([0xab; 32]).to_string();
        assert!(shown.starts_with("0xabab"));
        assert_eq!(shown.len(), 2 + 64);
    }
}
