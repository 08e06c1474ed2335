//! Reference implementation of the [`TokenLedger`](crate::traits::TokenLedger)
//! boundary.
//!
//! Production deployments plug in their own ledger; [`InMemoryLedger`]
//! exists for tests, demos and off-chain simulation.

mod in_memory;

pub use in_memory::InMemoryLedger;
