use soroban_sdk::{Address, Symbol, contracttype, symbol_short};

/// 7 decimals - pool price scale
pub const RATE_PRECISION: i128 = 10_000_000;

/// Basis points scale (10_000 = 100%)
pub const BPS_SCALE: i128 = 10_000;

/// LP shares permanently locked to the pool on first deposit, guarding the
/// share price against donation manipulation.
pub const MIN_LIQUIDITY: i128 = 1000;

/// Ledgers per day
pub const ONE_DAY_LEDGERS: u32 = 17280;

/// Instance storage TTL (pool config and reserves) - 30 days
pub const INSTANCE_TTL: u32 = ONE_DAY_LEDGERS * 30;
pub const INSTANCE_BUMP: u32 = ONE_DAY_LEDGERS * 31;

/// LP balance TTL - 100 days
pub const USER_TTL: u32 = ONE_DAY_LEDGERS * 100;
pub const USER_BUMP: u32 = ONE_DAY_LEDGERS * 120;

pub const STORAGE: Symbol = symbol_short!("STORAGE");

/// Main pool storage structure
#[contracttype]
#[derive(Clone)]
pub struct AmmStorage {
    pub admin: Address,
    pub sxlm_token: Address,
    pub native_token: Address,

    /// Swap fee, basis points, retained in the reserves
    pub fee_bps: u32,

    pub reserve_xlm: i128,
    pub reserve_sxlm: i128,
    pub total_lp_supply: i128,
}

/// Persistent storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    LpBalance(Address),
}
