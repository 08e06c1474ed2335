//! Constant Product pool implementation (Uniswap V2 style).
//!
//! The swap invariant is `x × y = k` where `x` and `y` are the reserves
//! of the two tokens.  Fees are deducted from the input amount **before**
//! the pricing formula is applied.
//!
//! # Swap Algorithm (Token A → Token B)
//!
//! 1. `net_input = floor(amount_in × (10 000 − fee_bps) / 10 000)`
//! 2. `amount_out = floor(reserve_b × net_input / (reserve_a + net_input))`
//! 3. `reserve_a += amount_in` (fee stays in the pool)
//! 4. `reserve_b -= amount_out`
//!
//! Products are formed in 256 bits, so reserves may use the full `u128`
//! range.
//!
//! # Invariant
//!
//! After every swap, `k_after ≥ k_before` because the fee component
//! increases reserves without a corresponding output and the output is
//! rounded down.
//!
//! # Settlement
//!
//! Every mutating operation validates and prices first, checks each ledger
//! transfer it needs, commits the new reserves and shares, and only then
//! moves tokens. A ledger refusal at that point restores the previous
//! state.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::settlement::Settlement;
use crate::config::PoolConfig;
use crate::domain::{
    AccountId, Amount, ChangeKind, FeeTier, Liquidity, LiquidityReceipt, PoolEvent, PoolState,
    SwapDirection, SwapResult, TokenAddress, TokenPair,
};
use crate::error::AmmError;
use crate::math::{mul_div, sqrt_product, swap_output, CheckedArithmetic};
use crate::traits::{LiquidityPool, SwapPool, TokenLedger};

/// Deployment nonce mixed into every pool account, so no two pools in a
/// process ever share reserves or allowances.
static DEPLOYMENTS: AtomicU64 = AtomicU64::new(0);

/// Reserves and share balances, committed and restored as one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Book {
    reserve_a: Amount,
    reserve_b: Amount,
    total_liq: Liquidity,
    shares: HashMap<AccountId, Liquidity>,
}

impl Book {
    fn share_of(&self, holder: &AccountId) -> Liquidity {
        self.shares.get(holder).copied().unwrap_or_default()
    }

    fn set_share(&mut self, holder: AccountId, balance: Liquidity) {
        if balance.is_zero() {
            self.shares.remove(&holder);
        } else {
            self.shares.insert(holder, balance);
        }
    }
}

/// A Constant Product AMM pool (`x · y = k`) over two tokens.
///
/// Pools are normally created through
/// [`PoolRegistry::create_pool`](crate::registry::PoolRegistry::create_pool),
/// which guarantees one pool per unordered pair. Token A and token B keep
/// the order the pool was created with.
///
/// # State
///
/// - `reserve_a` / `reserve_b`: token balances held for trading (fees included)
/// - `total_liq`: outstanding shares, `√(amount_a × amount_b)` at genesis
/// - `shares`: per-holder share balances, summing to `total_liq`
///
/// # Example
///
/// ```rust
/// use smartswap_amm::config::PoolConfig;
/// use smartswap_amm::domain::{AccountId, Amount, SwapDirection, TokenAddress};
/// use smartswap_amm::ledger::InMemoryLedger;
/// use smartswap_amm::pools::ConstantProductPool;
/// use smartswap_amm::traits::{LiquidityPool, SwapPool, TokenLedger};
///
/// let tok_a = TokenAddress::from_bytes([1u8; 32]);
/// let tok_b = TokenAddress::from_bytes([2u8; 32]);
/// let alice = AccountId::from_bytes([0xa1; 32]);
///
/// let mut pool = ConstantProductPool::new(tok_a, tok_b, PoolConfig::default())
///     .expect("distinct tokens");
/// let mut ledger = InMemoryLedger::new();
/// for token in [tok_a, tok_b] {
///     ledger.mint(token, alice, Amount::new(1_000_000)).expect("mint");
///     ledger.approve(token, alice, pool.account(), Amount::MAX).expect("approve");
/// }
///
/// pool.init(&mut ledger, alice, Amount::new(100_000), Amount::new(100_000))
///     .expect("init ok");
/// let result = pool
///     .swap(&mut ledger, alice, SwapDirection::AToB, Amount::new(1_000))
///     .expect("swap ok");
/// assert!(result.amount_out().get() > 0);
/// assert!(result.fee().get() > 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantProductPool {
    account: AccountId,
    token_a: TokenAddress,
    token_b: TokenAddress,
    fee_tier: FeeTier,
    book: Book,
    seeded: bool,
    events: Vec<PoolEvent>,
}

impl ConstantProductPool {
    /// Creates an empty pool for `token_a` and `token_b`.
    ///
    /// Each call deploys a fresh pool with its own ledger account, even for
    /// a pair that already has one.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NeedTwoDifferentTokens`] if the tokens are equal.
    /// - [`AmmError::ZeroTokenError`] if either token is the zero address.
    /// - Propagates any error from [`PoolConfig::validate`].
    pub fn new(
        token_a: TokenAddress,
        token_b: TokenAddress,
        config: PoolConfig,
    ) -> Result<Self, AmmError> {
        config.validate()?;
        let pair = TokenPair::new(token_a, token_b)?;
        let nonce = DEPLOYMENTS.fetch_add(1, Ordering::Relaxed);

        Ok(Self {
            account: AccountId::for_pool(&pair, nonce),
            token_a,
            token_b,
            fee_tier: config.fee_tier(),
            book: Book::default(),
            seeded: false,
            events: Vec::new(),
        })
    }

    /// Returns the ledger account that holds this pool's reserves.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// Returns token A.
    #[must_use]
    pub const fn token_a(&self) -> TokenAddress {
        self.token_a
    }

    /// Returns token B.
    #[must_use]
    pub const fn token_b(&self) -> TokenAddress {
        self.token_b
    }

    /// Returns the current reserve of token A.
    #[must_use]
    pub const fn reserve_a(&self) -> Amount {
        self.book.reserve_a
    }

    /// Returns the current reserve of token B.
    #[must_use]
    pub const fn reserve_b(&self) -> Amount {
        self.book.reserve_b
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub fn state(&self) -> PoolState {
        if !self.book.total_liq.is_zero() {
            PoolState::Active
        } else if self.seeded {
            PoolState::Drained
        } else {
            PoolState::Empty
        }
    }

    /// Drains the events recorded since the last call, oldest first.
    pub fn take_events(&mut self) -> Vec<PoolEvent> {
        core::mem::take(&mut self.events)
    }

    fn oriented(&self, direction: SwapDirection) -> (Amount, Amount) {
        if direction.is_a_to_b() {
            (self.book.reserve_a, self.book.reserve_b)
        } else {
            (self.book.reserve_b, self.book.reserve_a)
        }
    }

    /// Computes the exact-in swap output.
    ///
    /// Formula: `amount_out = reserve_out × net_input / (reserve_in + net_input)`
    ///
    /// Returns `(amount_out, fee)`.
    fn compute_exact_in(
        &self,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<(Amount, Amount), AmmError> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidInputAmount("amount_in must be positive"));
        }
        if !self.state().is_active() {
            return Err(AmmError::PoolNotInitialized);
        }

        let (reserve_in, reserve_out) = self.oriented(direction);
        let net_input = self.fee_tier.effective_input(amount_in)?;
        let fee = amount_in.safe_sub(&net_input)?;

        let amount_out = swap_output(reserve_in.get(), reserve_out.get(), net_input.get())?;

        Ok((Amount::new(amount_out), fee))
    }

    /// Checks, commits and settles one operation.
    fn settle<L: TokenLedger + ?Sized>(
        &mut self,
        ledger: &mut L,
        plan: &Settlement,
        next: Book,
    ) -> Result<(), AmmError> {
        plan.preflight(&*ledger)?;

        let snapshot = core::mem::replace(&mut self.book, next);
        if let Err(err) = plan.execute(ledger) {
            tracing::warn!(pool = %self.account, %err, "ledger refused transfer, restoring pool state");
            self.book = snapshot;
            return Err(err.into());
        }
        Ok(())
    }

    fn record(&mut self, event: PoolEvent) {
        tracing::info!(pool = %self.account, %event, "{}", event.name());
        self.events.push(event);
    }
}

impl SwapPool for ConstantProductPool {
    fn price(&self, direction: SwapDirection, amount_in: Amount) -> Result<Amount, AmmError> {
        let (amount_out, fee) = self.compute_exact_in(direction, amount_in)?;
        tracing::debug!(pool = %self.account, %direction, %amount_in, %amount_out, %fee, "quote");
        Ok(amount_out)
    }

    /// Executes a token swap on the constant product pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidInputAmount`] if `amount_in` is zero or buys nothing.
    /// - [`AmmError::PoolNotInitialized`] if the pool holds no liquidity.
    /// - [`AmmError::Overflow`] if the input reserve would overflow.
    /// - [`AmmError::Ledger`] if the trader has not approved or lacks the input.
    fn swap<L: TokenLedger + ?Sized>(
        &mut self,
        ledger: &mut L,
        trader: AccountId,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapResult, AmmError> {
        let (amount_out, fee) = self.compute_exact_in(direction, amount_in)?;
        let result = SwapResult::new(direction, amount_in, amount_out, fee)?;

        let (reserve_in, reserve_out) = self.oriented(direction);
        // the full input lands in reserve_in
        let new_reserve_in = reserve_in
            .checked_add(&amount_in)
            .ok_or(AmmError::Overflow("reserve_in overflow after swap"))?;
        let new_reserve_out = reserve_out.safe_sub(&amount_out)?;

        let (token_in, token_out) = if direction.is_a_to_b() {
            (self.token_a, self.token_b)
        } else {
            (self.token_b, self.token_a)
        };

        let mut next = self.book.clone();
        if direction.is_a_to_b() {
            next.reserve_a = new_reserve_in;
            next.reserve_b = new_reserve_out;
        } else {
            next.reserve_b = new_reserve_in;
            next.reserve_a = new_reserve_out;
        }

        let plan = Settlement::new(self.account)
            .pull(token_in, trader, amount_in)
            .push(token_out, trader, amount_out);
        self.settle(ledger, &plan, next)?;

        self.record(PoolEvent::Swap {
            pool: self.account,
            trader,
            direction,
            amount_in,
            amount_out,
        });
        Ok(result)
    }

    fn reserves(&self) -> (Amount, Amount) {
        (self.book.reserve_a, self.book.reserve_b)
    }

    fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }
}

impl LiquidityPool for ConstantProductPool {
    fn init<L: TokenLedger + ?Sized>(
        &mut self,
        ledger: &mut L,
        provider: AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<LiquidityReceipt, AmmError> {
        if !self.state().accepts_init() {
            return Err(AmmError::AlreadyHasLiquidity);
        }
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(AmmError::InvalidInputAmount(
                "first deposit requires both tokens",
            ));
        }

        // initial LP = sqrt(amount_a * amount_b)
        let minted = Liquidity::new(sqrt_product(amount_a.get(), amount_b.get())?);

        let mut next = Book {
            reserve_a: amount_a,
            reserve_b: amount_b,
            total_liq: minted,
            shares: HashMap::new(),
        };
        next.set_share(provider, minted);

        let plan = Settlement::new(self.account)
            .pull(self.token_a, provider, amount_a)
            .pull(self.token_b, provider, amount_b);
        self.settle(ledger, &plan, next)?;
        self.seeded = true;

        self.record(PoolEvent::LiquidityAdded {
            pool: self.account,
            provider,
            amount_a,
            amount_b,
            shares: minted,
        });
        Ok(LiquidityReceipt::new(
            ChangeKind::Add,
            amount_a,
            amount_b,
            minted,
        ))
    }

    /// Adds liquidity at the current reserve ratio.
    ///
    /// `amount_b = floor(amount_a × Rb / Ra)` and
    /// `minted = floor(amount_a × L / Ra)`; both round against the depositor.
    fn add_liquidity<L: TokenLedger + ?Sized>(
        &mut self,
        ledger: &mut L,
        provider: AccountId,
        amount_a: Amount,
    ) -> Result<LiquidityReceipt, AmmError> {
        if amount_a.is_zero() {
            return Err(AmmError::InvalidInputAmount("amount_a must be positive"));
        }
        if !self.state().is_active() {
            return Err(AmmError::PoolNotInitialized);
        }

        let book = &self.book;
        let amount_b = Amount::new(mul_div(
            amount_a.get(),
            book.reserve_b.get(),
            book.reserve_a.get(),
        )?);
        let minted = Liquidity::new(mul_div(
            amount_a.get(),
            book.total_liq.get(),
            book.reserve_a.get(),
        )?);
        if minted.is_zero() {
            return Err(AmmError::InvalidInputAmount(
                "deposit too small to mint liquidity",
            ));
        }
        if amount_b.is_zero() {
            return Err(AmmError::InvalidInputAmount(
                "deposit too small to require token B",
            ));
        }

        let mut next = book.clone();
        next.reserve_a = next.reserve_a.safe_add(&amount_a)?;
        next.reserve_b = next.reserve_b.safe_add(&amount_b)?;
        next.total_liq = next.total_liq.safe_add(&minted)?;
        let credited = next.share_of(&provider).safe_add(&minted)?;
        next.set_share(provider, credited);

        let plan = Settlement::new(self.account)
            .pull(self.token_a, provider, amount_a)
            .pull(self.token_b, provider, amount_b);
        self.settle(ledger, &plan, next)?;

        self.record(PoolEvent::LiquidityAdded {
            pool: self.account,
            provider,
            amount_a,
            amount_b,
            shares: minted,
        });
        Ok(LiquidityReceipt::new(
            ChangeKind::Add,
            amount_a,
            amount_b,
            minted,
        ))
    }

    /// Burns shares and pays out `floor(shares × R / L)` of each reserve.
    ///
    /// A redemption that would pay nothing on both sides is rejected rather
    /// than burning the shares.
    fn remove_liquidity<L: TokenLedger + ?Sized>(
        &mut self,
        ledger: &mut L,
        provider: AccountId,
        shares: Liquidity,
    ) -> Result<LiquidityReceipt, AmmError> {
        if shares.is_zero() {
            return Err(AmmError::InvalidInputAmount("shares must be positive"));
        }
        let available = self.book.share_of(&provider);
        if available < shares {
            return Err(AmmError::InsufficientShares {
                requested: shares,
                available,
            });
        }

        let book = &self.book;
        let amount_a = Amount::new(mul_div(
            shares.get(),
            book.reserve_a.get(),
            book.total_liq.get(),
        )?);
        let amount_b = Amount::new(mul_div(
            shares.get(),
            book.reserve_b.get(),
            book.total_liq.get(),
        )?);

        if amount_a.is_zero() && amount_b.is_zero() {
            return Err(AmmError::InvalidInputAmount(
                "shares too few to redeem any tokens",
            ));
        }

        let mut next = book.clone();
        next.reserve_a = next.reserve_a.safe_sub(&amount_a)?;
        next.reserve_b = next.reserve_b.safe_sub(&amount_b)?;
        next.total_liq = next.total_liq.safe_sub(&shares)?;
        next.set_share(provider, available.safe_sub(&shares)?);

        let plan = Settlement::new(self.account)
            .push(self.token_a, provider, amount_a)
            .push(self.token_b, provider, amount_b);
        self.settle(ledger, &plan, next)?;

        self.record(PoolEvent::LiquidityRemoved {
            pool: self.account,
            provider,
            amount_a,
            amount_b,
            shares,
        });
        if self.book.total_liq.is_zero() {
            tracing::info!(pool = %self.account, "pool drained");
        }
        Ok(LiquidityReceipt::new(
            ChangeKind::Remove,
            amount_a,
            amount_b,
            shares,
        ))
    }

    fn total_liquidity(&self) -> Liquidity {
        self.book.total_liq
    }

    fn liquidity_of(&self, holder: &AccountId) -> Liquidity {
        self.book.share_of(holder)
    }
}
