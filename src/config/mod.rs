//! Declarative configuration for pools and the registry.
//!
//! Configuration structs validate their invariants at construction time
//! and expose a `validate()` method so that values built through `Default`
//! can be re-checked before use.

mod pool_config;
mod registry_config;

pub use pool_config::PoolConfig;
pub use registry_config::RegistryConfig;
