use soroban_sdk::{Address, Env, panic_with_error};

use crate::common::error::Error;
use crate::common::types::{
    AmmStorage, DataKey, INSTANCE_BUMP, INSTANCE_TTL, STORAGE, USER_BUMP, USER_TTL,
};

/// Storage operations for the AMM pool
pub struct Storage;

impl Storage {
    /// Extend instance storage TTL if needed
    pub fn extend_instance_ttl(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL, INSTANCE_BUMP);
    }

    pub fn is_initialized(env: &Env) -> bool {
        env.storage().instance().has(&STORAGE)
    }

    pub fn get(env: &Env) -> AmmStorage {
        Self::extend_instance_ttl(env);
        env.storage()
            .instance()
            .get(&STORAGE)
            .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
    }

    pub fn set(env: &Env, storage: &AmmStorage) {
        env.storage().instance().set(&STORAGE, storage);
        Self::extend_instance_ttl(env);
    }

    // ========== LP balances (persistent, TTL-bumped) ==========

    pub fn get_lp_balance(env: &Env, id: &Address) -> i128 {
        let key = DataKey::LpBalance(id.clone());
        let balance: Option<i128> = env.storage().persistent().get(&key);
        if balance.is_some() {
            env.storage()
                .persistent()
                .extend_ttl(&key, USER_TTL, USER_BUMP);
        }
        balance.unwrap_or(0)
    }

    /// Store an LP balance; zero entries are removed.
    pub fn set_lp_balance(env: &Env, id: &Address, amount: i128) {
        let key = DataKey::LpBalance(id.clone());
        if amount == 0 {
            env.storage().persistent().remove(&key);
            return;
        }
        env.storage().persistent().set(&key, &amount);
        env.storage()
            .persistent()
            .extend_ttl(&key, USER_TTL, USER_BUMP);
    }
}
