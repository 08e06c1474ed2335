//! Arithmetic utilities for AMM calculations.
//!
//! This module provides [`CheckedArithmetic`] for overflow-safe updates of
//! reserves and share balances, and the 256-bit helpers [`mul_div`],
//! [`swap_output`] and [`sqrt_product`] used by pricing and share issuance.

mod checked;
mod wide;

pub use checked::CheckedArithmetic;
pub use wide::{mul_div, sqrt_product, swap_output};
