//! Fundamental domain value types used throughout the AMM library.
//!
//! This module contains the value types that model the AMM domain:
//! token and account identities, amounts, shares, fee rates, swap and
//! liquidity outcomes, and emitted events. Newtypes with validated
//! constructors enforce invariants at the edges.

mod account_id;
mod amount;
mod basis_points;
mod event;
mod fee_tier;
mod liquidity;
mod liquidity_receipt;
mod pool_state;
mod swap_direction;
mod swap_result;
mod token_address;
mod token_pair;

pub use account_id::AccountId;
pub use amount::Amount;
pub use basis_points::BasisPoints;
pub use event::PoolEvent;
pub use fee_tier::FeeTier;
pub use liquidity::Liquidity;
pub use liquidity_receipt::{ChangeKind, LiquidityReceipt};
pub use pool_state::PoolState;
pub use swap_direction::SwapDirection;
pub use swap_result::SwapResult;
pub use token_address::TokenAddress;
pub use token_pair::TokenPair;
