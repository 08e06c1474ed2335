//! Pool discovery and creation.
//!
//! [`PoolRegistry`] enforces one pool per unordered token pair and keeps
//! every pool it creates in creation order.

mod pool_registry;

pub use pool_registry::PoolRegistry;
