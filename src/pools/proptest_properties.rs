//! Property-based tests using `proptest` for AMM invariant validation.
//!
//! 1. **Swap reversibility**: round-trip A→B→A returns ≤ original.
//! 2. **Invariant preservation**: `reserve_a × reserve_b` never decreases.
//! 3. **Quote consistency**: `price` matches the executed swap.
//! 4. **Fee monotonicity**: larger input ⇒ larger or equal fee and output.
//! 5. **Genesis shares**: `init` mints `floor(√(a × b))`.
//! 6. **Liquidity conservation**: add then remove ≈ original amounts.
//! 7. **Pair symmetry**: the registry rejects a pair in either order once created.
//! 8. **Share backing**: `reserve_a × reserve_b ≥ L²` holds after seeding
//!    and any trades, so redeeming a single share pays out something.

use proptest::prelude::*;
use ruint::aliases::U256;

use crate::config::{PoolConfig, RegistryConfig};
use crate::domain::{AccountId, Amount, Liquidity, SwapDirection, TokenAddress};
use crate::error::AmmError;
use crate::ledger::InMemoryLedger;
use crate::pools::ConstantProductPool;
use crate::registry::PoolRegistry;
use crate::traits::{LiquidityPool, SwapPool, TokenLedger};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const TOKEN_A: TokenAddress = TokenAddress::from_bytes([1u8; 32]);
const TOKEN_B: TokenAddress = TokenAddress::from_bytes([2u8; 32]);
const LP: AccountId = AccountId::from_bytes([0x11; 32]);
const TRADER: AccountId = AccountId::from_bytes([0x22; 32]);

/// Reserves from dust up to 2¹⁰⁰, so products exceed `u128`.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    prop_oneof![1_000u128..=1_000_000_000, 1_000u128..=(1u128 << 100)]
}

fn direction_strategy() -> impl Strategy<Value = SwapDirection> {
    any::<bool>().prop_map(SwapDirection::from_a_to_b)
}

fn fund(ledger: &mut InMemoryLedger, pool: &ConstantProductPool, who: AccountId) {
    for token in [TOKEN_A, TOKEN_B] {
        let Ok(()) = ledger.mint(token, who, Amount::new(u128::MAX / 4)) else {
            panic!("mint");
        };
        let Ok(()) = ledger.approve(token, who, pool.account(), Amount::MAX) else {
            panic!("approve");
        };
    }
}

fn make_cp(ra: u128, rb: u128) -> (ConstantProductPool, InMemoryLedger) {
    let Ok(mut pool) = ConstantProductPool::new(TOKEN_A, TOKEN_B, PoolConfig::default()) else {
        panic!("valid pool");
    };
    let mut ledger = InMemoryLedger::new();
    fund(&mut ledger, &pool, LP);
    fund(&mut ledger, &pool, TRADER);
    let Ok(_) = pool.init(&mut ledger, LP, Amount::new(ra), Amount::new(rb)) else {
        panic!("valid init");
    };
    (pool, ledger)
}

fn k(pool: &ConstantProductPool) -> U256 {
    let (ra, rb) = pool.reserves();
    U256::from(ra.get()) * U256::from(rb.get())
}

// ---------------------------------------------------------------------------
// Property 1: Swap Reversibility
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_reversibility_constant_product(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let swap_in = (ra / 1_000).max(1_000);
        let (mut pool, mut ledger) = make_cp(ra, rb);

        let Ok(result_ab) = pool.swap(&mut ledger, TRADER, SwapDirection::AToB, Amount::new(swap_in)) else {
            return Ok(());
        };
        let Ok(result_ba) = pool.swap(&mut ledger, TRADER, SwapDirection::BToA, result_ab.amount_out()) else {
            return Ok(());
        };
        let final_a = result_ba.amount_out().get();

        prop_assert!(
            final_a <= swap_in,
            "round-trip should lose value: final={} > original={}",
            final_a, swap_in
        );
    }
}

// ---------------------------------------------------------------------------
// Property 2: Invariant Preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_invariant_preservation_constant_product(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        swaps in prop::collection::vec((direction_strategy(), 1u128..=(1u128 << 96)), 1..8),
    ) {
        let (mut pool, mut ledger) = make_cp(ra, rb);

        for (direction, amount) in swaps {
            let k_before = k(&pool);
            if pool.swap(&mut ledger, TRADER, direction, Amount::new(amount)).is_err() {
                prop_assert_eq!(k(&pool), k_before);
                continue;
            }
            let k_after = k(&pool);
            prop_assert!(
                k_after >= k_before,
                "CP invariant k should not shrink: k_after={} < k_before={}",
                k_after, k_before
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Quote Consistency
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_price_matches_swap(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        direction in direction_strategy(),
        amount in 1u128..=(1u128 << 100),
    ) {
        let (mut pool, mut ledger) = make_cp(ra, rb);
        let (_, reserve_out) = if direction.is_a_to_b() {
            (pool.reserve_a(), pool.reserve_b())
        } else {
            (pool.reserve_b(), pool.reserve_a())
        };

        let Ok(quote) = pool.price(direction, Amount::new(amount)) else {
            return Ok(());
        };
        prop_assert!(quote < reserve_out);

        match pool.swap(&mut ledger, TRADER, direction, Amount::new(amount)) {
            Ok(result) => prop_assert_eq!(result.amount_out(), quote),
            Err(err) => {
                prop_assert!(quote.is_zero());
                prop_assert!(matches!(err, AmmError::InvalidInputAmount(_)));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Fee Monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_fee_monotonicity_constant_product(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        small in 1_000u128..=1_000_000,
        extra in 1u128..=1_000_000,
    ) {
        let large = small + extra;
        let (mut pool_small, mut ledger_small) = make_cp(ra, rb);
        let (mut pool_large, mut ledger_large) = make_cp(ra, rb);

        let (Ok(r_small), Ok(r_large)) = (
            pool_small.swap(&mut ledger_small, TRADER, SwapDirection::AToB, Amount::new(small)),
            pool_large.swap(&mut ledger_large, TRADER, SwapDirection::AToB, Amount::new(large)),
        ) else {
            return Ok(());
        };

        prop_assert!(r_large.fee() >= r_small.fee());
        prop_assert!(r_large.amount_out() >= r_small.amount_out());
    }
}

// ---------------------------------------------------------------------------
// Property 5: Genesis Shares
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_init_mints_floor_sqrt(
        a in 1u128..=u128::MAX / 4,
        b in 1u128..=u128::MAX / 4,
    ) {
        let (pool, _) = make_cp(a, b);
        let minted = pool.total_liquidity();
        let root = U256::from(minted.get());
        let product = U256::from(a) * U256::from(b);

        prop_assert!(root * root <= product);
        prop_assert!((root + U256::from(1u8)) * (root + U256::from(1u8)) > product);
        prop_assert_eq!(pool.liquidity_of(&LP), minted);
    }
}

// ---------------------------------------------------------------------------
// Property 6: Liquidity Conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_liquidity_conservation_constant_product(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        deposit in 1_000u128..=1_000_000_000,
    ) {
        let (mut pool, mut ledger) = make_cp(ra, rb);
        let before_a = ledger.balance_of(TOKEN_A, TRADER).get();
        let before_b = ledger.balance_of(TOKEN_B, TRADER).get();

        let Ok(added) = pool.add_liquidity(&mut ledger, TRADER, Amount::new(deposit)) else {
            return Ok(());
        };
        prop_assert_eq!(pool.liquidity_of(&TRADER), added.shares());

        let Ok(removed) = pool.remove_liquidity(&mut ledger, TRADER, added.shares()) else {
            return Err(TestCaseError::fail("remove of freshly minted shares failed"));
        };
        prop_assert_eq!(pool.liquidity_of(&TRADER), Liquidity::ZERO);
        prop_assert!(removed.amount_a() <= added.amount_a());
        prop_assert!(removed.amount_b() <= added.amount_b());

        let after_a = ledger.balance_of(TOKEN_A, TRADER).get();
        let after_b = ledger.balance_of(TOKEN_B, TRADER).get();
        // shares are floored on entry, so the depositor may lose the
        // remainder of one share's worth, never gain
        prop_assert!(after_a <= before_a && after_b <= before_b);
        let share_a = pool.reserve_a().get() / pool.total_liquidity().get() + 1;
        let share_b = pool.reserve_b().get() / pool.total_liquidity().get() + 1;
        prop_assert!(before_a - after_a <= share_a + 1);
        prop_assert!(before_b - after_b <= share_b + 1);
    }
}

// ---------------------------------------------------------------------------
// Property 7: Pair Symmetry
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_registry_pair_symmetry(
        x in any::<[u8; 32]>(),
        y in any::<[u8; 32]>(),
    ) {
        let (x, y) = (TokenAddress::from_bytes(x), TokenAddress::from_bytes(y));
        prop_assume!(x != y && !x.is_zero() && !y.is_zero());

        let mut registry = PoolRegistry::new(RegistryConfig::default());
        let Ok(created) = registry.create_pool(x, y) else {
            return Err(TestCaseError::fail("first create_pool failed"));
        };
        prop_assert_eq!(registry.create_pool(x, y), Err(AmmError::PoolAlreadyExists));
        prop_assert_eq!(registry.create_pool(y, x), Err(AmmError::PoolAlreadyExists));
        prop_assert_eq!(registry.lookup(y, x), Some(created));
        prop_assert_eq!(registry.len(), 1);
    }
}

// ---------------------------------------------------------------------------
// Property 8: Share Backing
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_single_share_always_redeems_something(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        swaps in prop::collection::vec((direction_strategy(), 1u128..=(1u128 << 96)), 0..6),
    ) {
        let (mut pool, mut ledger) = make_cp(ra, rb);
        for (direction, amount) in swaps {
            let _ = pool.swap(&mut ledger, TRADER, direction, Amount::new(amount));
        }

        let total = U256::from(pool.total_liquidity().get());
        prop_assert!(k(&pool) >= total * total);

        let Ok(removed) = pool.remove_liquidity(&mut ledger, LP, Liquidity::new(1)) else {
            return Err(TestCaseError::fail("remove of one share failed"));
        };
        prop_assert!(!(removed.amount_a().is_zero() && removed.amount_b().is_zero()));
    }
}
