use soroban_sdk::{Address, String, Symbol, contracttype, symbol_short};

/// Ledgers per day (~5 seconds per ledger on Stellar)
pub const ONE_DAY_LEDGERS: u32 = 17280;

/// Instance storage TTL (metadata, admin, minter, supply) - 30 days
pub const INSTANCE_TTL: u32 = ONE_DAY_LEDGERS * 30;
pub const INSTANCE_BUMP: u32 = ONE_DAY_LEDGERS * 31;

pub const METADATA_KEY: Symbol = symbol_short!("METADATA");
pub const ADMIN_KEY: Symbol = symbol_short!("ADMIN");
pub const MINTER_KEY: Symbol = symbol_short!("MINTER");
pub const TOTAL_SUPPLY_KEY: Symbol = symbol_short!("SUPPLY");

/// Token metadata fixed at initialization
#[contracttype]
#[derive(Clone)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

/// (owner, spender) pair keying an allowance entry
#[contracttype]
#[derive(Clone)]
pub struct Txn(pub Address, pub Address);

/// Allowance entry with its expiration ledger
#[contracttype]
#[derive(Clone)]
pub struct Allowance {
    pub amount: i128,
    pub expiration_ledger: u32,
}

/// Persistent storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Balance(Address),
    Allowance(Txn),
}
