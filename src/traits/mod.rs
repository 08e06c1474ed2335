//! Core trait abstractions for pools and their token ledger.
//!
//! [`SwapPool`] covers quoting and executing swaps, [`LiquidityPool`]
//! covers share issuance and redemption, and [`TokenLedger`] is the
//! boundary to the external token ledger every pool settles through.

mod liquidity_pool;
mod swap_pool;
mod token_ledger;

pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;
pub use token_ledger::TokenLedger;
