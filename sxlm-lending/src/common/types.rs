use soroban_sdk::{Address, Symbol, contracttype, symbol_short};

/// 7 decimals - exchange rate, interest accumulator and health factor scale
/// 1.0 = 10_000_000
pub const RATE_PRECISION: i128 = 10_000_000;

/// Basis points scale (10_000 = 100%)
pub const BPS_SCALE: i128 = 10_000;

/// Ledgers per year (~5 seconds per ledger on Stellar)
pub const LEDGERS_PER_YEAR: i128 = 6_307_200;

/// Health factor representing exactly the liquidation threshold
pub const HEALTH_FACTOR_ONE: i128 = RATE_PRECISION;

/// Ledgers per day
pub const ONE_DAY_LEDGERS: u32 = 17280;

/// Instance storage TTL (pool config and aggregates) - 30 days
pub const INSTANCE_TTL: u32 = ONE_DAY_LEDGERS * 30;
pub const INSTANCE_BUMP: u32 = ONE_DAY_LEDGERS * 31;

/// Position storage TTL - 100 days
pub const USER_TTL: u32 = ONE_DAY_LEDGERS * 100;
pub const USER_BUMP: u32 = ONE_DAY_LEDGERS * 120;

pub const STORAGE: Symbol = symbol_short!("STORAGE");

/// Main lending pool storage structure
#[contracttype]
#[derive(Clone)]
pub struct LendingStorage {
    pub admin: Address,
    pub sxlm_token: Address,
    pub native_token: Address,

    /// Sum of all position collateral, in sXLM stroops
    pub total_collateral: i128,
    /// Sum of all fresh debt, in XLM stroops
    pub total_borrowed: i128,
    /// Free XLM available to borrowers
    pub pool_balance: i128,

    /// sXLM -> XLM rate pushed by the staking keeper (RATE_PRECISION scale)
    pub exchange_rate: i128,

    pub collateral_factor_bps: u32,
    pub liquidation_threshold_bps: u32,
    /// Per-year borrow rate, basis points
    pub borrow_rate_bps: u32,
    /// Fraction of debt a liquidator may repay per call, basis points
    pub close_factor_bps: u32,
    /// Liquidator discount on seized collateral, basis points
    pub liquidation_bonus_bps: u32,

    /// Monotone interest index (RATE_PRECISION scale)
    pub accumulator: i128,
    pub last_accrual_ledger: u32,
    /// Unrealised protocol earnings from borrow interest
    pub total_accrued_interest: i128,
}

/// A borrower's collateralised debt position
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub sxlm_collateral: i128,
    /// Debt principal, valid at `borrow_index`
    pub xlm_borrowed_principal: i128,
    /// Accumulator value the principal was last rebased at
    pub borrow_index: i128,
    pub last_update_ledger: u32,
}

/// Persistent storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Position(Address),
}
