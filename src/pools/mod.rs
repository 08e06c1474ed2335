//! Pool implementation and the shared [`PoolHandle`].
//!
//! | Pool | Style |
//! |------|-------|
//! | [`ConstantProductPool`] | Uniswap V2, `x · y = k` |
//!
//! Pools hold their reserves in a [`TokenLedger`](crate::traits::TokenLedger)
//! account and move tokens only through it.

pub mod constant_product;
mod handle;
mod settlement;

pub use constant_product::ConstantProductPool;
pub use handle::PoolHandle;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;
