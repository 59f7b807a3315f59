use soroban_sdk::{Env, panic_with_error};

use crate::common::error::Error;
use crate::common::types::{
    DataKey, INSTANCE_BUMP, INSTANCE_TTL, STORAGE, StakingStorage, USER_BUMP, USER_TTL, Withdrawal,
};

/// Storage operations for the staking pool
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

    pub fn get(env: &Env) -> StakingStorage {
        Self::extend_instance_ttl(env);
        env.storage()
            .instance()
            .get(&STORAGE)
            .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
    }

    pub fn set(env: &Env, storage: &StakingStorage) {
        env.storage().instance().set(&STORAGE, storage);
        Self::extend_instance_ttl(env);
    }

    // ========== Withdrawal records (persistent, TTL-bumped) ==========

    pub fn get_withdrawal(env: &Env, id: u64) -> Option<Withdrawal> {
        let key = DataKey::Withdrawal(id);
        let withdrawal: Option<Withdrawal> = env.storage().persistent().get(&key);
        if withdrawal.is_some() {
            env.storage()
                .persistent()
                .extend_ttl(&key, USER_TTL, USER_BUMP);
        }
        withdrawal
    }

    pub fn set_withdrawal(env: &Env, id: u64, withdrawal: &Withdrawal) {
        let key = DataKey::Withdrawal(id);
        env.storage().persistent().set(&key, withdrawal);
        env.storage()
            .persistent()
            .extend_ttl(&key, USER_TTL, USER_BUMP);
    }
}
