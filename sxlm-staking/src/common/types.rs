use soroban_sdk::{Address, Symbol, Vec, contracttype, symbol_short};

/// 7 decimals - exchange rate and slash index scale
/// 1:1 rate = 10_000_000
pub const RATE_PRECISION: i128 = 10_000_000;

/// Basis points scale (10_000 = 100%)
pub const BPS_SCALE: i128 = 10_000;

/// Minimum deposit: 1 XLM (10^7 stroops)
pub const MIN_STAKE: i128 = 10_000_000;

/// Sentinel id returned for withdrawals served instantly from the buffer
pub const INSTANT_WITHDRAWAL_ID: u64 = u64::MAX;

/// Ledgers per day (~5 seconds per ledger on Stellar)
pub const ONE_DAY_LEDGERS: u32 = 17280;

/// Instance storage TTL (pool config and aggregates) - 30 days
pub const INSTANCE_TTL: u32 = ONE_DAY_LEDGERS * 30;
pub const INSTANCE_BUMP: u32 = ONE_DAY_LEDGERS * 31;

/// Withdrawal record TTL - 100 days
pub const USER_TTL: u32 = ONE_DAY_LEDGERS * 100;
pub const USER_BUMP: u32 = ONE_DAY_LEDGERS * 120;

pub const STORAGE: Symbol = symbol_short!("STORAGE");
pub const ADMIN_KEY: Symbol = symbol_short!("ADMIN");

/// Main staking pool storage structure
#[contracttype]
#[derive(Clone)]
pub struct StakingStorage {
    pub admin: Address,
    pub sxlm_token: Address,
    pub native_token: Address,

    /// Authoritative XLM reserve backing the sXLM supply
    pub total_xlm_staked: i128,
    /// Portion of total_xlm_staked held back for instant withdrawals
    pub liquidity_buffer: i128,
    /// Accumulated protocol fees
    pub treasury_balance: i128,

    /// Ledgers a delayed withdrawal waits before claiming
    pub cooldown_period: u32,
    /// Fee taken from rewards, in basis points
    pub protocol_fee_bps: u32,
    pub is_paused: bool,

    pub next_withdrawal_id: u64,

    /// Global slash index (RATE_PRECISION scale). Multiplied down by every
    /// slash so pending withdrawal claims stay proportional to the remaining
    /// reserve.
    pub slash_index: i128,

    /// Advisory validator list consumed by the off-chain delegator
    pub validators: Vec<Address>,
}

/// A delayed withdrawal claim on unstaked XLM
#[contracttype]
#[derive(Clone)]
pub struct Withdrawal {
    pub owner: Address,
    pub xlm_amount: i128,
    pub unlock_ledger: u32,
    pub claimed: bool,
    /// Slash index at creation; claims pay xlm_amount scaled by the index
    /// movement since then.
    pub slash_index: i128,
}

/// Outcome of request_withdrawal
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalResult {
    pub withdrawal_id: u64,
    pub is_instant: bool,
    pub xlm_amount: i128,
}

/// Persistent storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Withdrawal(u64),
}
