use soroban_sdk::{Address, String, Symbol, contracttype, symbol_short};

/// Basis points scale (10_000 = 100%)
pub const BPS_SCALE: i128 = 10_000;

/// sXLM a proposer must hold: 100 sXLM
pub const MIN_PROPOSAL_STAKE: i128 = 100_0000000;

/// Ledgers per day
pub const ONE_DAY_LEDGERS: u32 = 17280;

/// Instance storage TTL (config and proposal counter) - 30 days
pub const INSTANCE_TTL: u32 = ONE_DAY_LEDGERS * 30;
pub const INSTANCE_BUMP: u32 = ONE_DAY_LEDGERS * 31;

/// Proposal/vote/param record TTL - 100 days
pub const USER_TTL: u32 = ONE_DAY_LEDGERS * 100;
pub const USER_BUMP: u32 = ONE_DAY_LEDGERS * 120;

pub const STORAGE: Symbol = symbol_short!("STORAGE");

/// Main governance storage structure
#[contracttype]
#[derive(Clone)]
pub struct GovernanceStorage {
    pub admin: Address,
    pub sxlm_token: Address,
    pub voting_period_ledgers: u32,
    pub quorum_bps: u32,
    pub proposal_count: u64,
}

/// A parameter-change proposal
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub proposer: Address,
    pub param_key: String,
    pub new_value: String,
    pub start_ledger: u32,
    pub end_ledger: u32,
    pub votes_for: i128,
    pub votes_against: i128,
    pub executed: bool,
}

/// Persistent storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Proposal(u64),
    HasVoted(u64, Address),
    Param(String),
}
