use soroban_sdk::{Address, Env, panic_with_error};

use crate::common::error::Error;
use crate::common::types::{
    DataKey, INSTANCE_BUMP, INSTANCE_TTL, LendingStorage, Position, STORAGE, USER_BUMP, USER_TTL,
};

/// Storage operations for the lending pool
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

    pub fn get(env: &Env) -> LendingStorage {
        Self::extend_instance_ttl(env);
        env.storage()
            .instance()
            .get(&STORAGE)
            .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
    }

    pub fn set(env: &Env, storage: &LendingStorage) {
        env.storage().instance().set(&STORAGE, storage);
        Self::extend_instance_ttl(env);
    }

    // ========== Positions (persistent, TTL-bumped) ==========

    pub fn get_position(env: &Env, borrower: &Address) -> Option<Position> {
        let key = DataKey::Position(borrower.clone());
        let position: Option<Position> = env.storage().persistent().get(&key);
        if position.is_some() {
            env.storage()
                .persistent()
                .extend_ttl(&key, USER_TTL, USER_BUMP);
        }
        position
    }

    /// Store a position; empty positions are removed instead.
    pub fn set_position(env: &Env, borrower: &Address, position: &Position) {
        let key = DataKey::Position(borrower.clone());
        if position.sxlm_collateral == 0 && position.xlm_borrowed_principal == 0 {
            env.storage().persistent().remove(&key);
            return;
        }
        env.storage().persistent().set(&key, position);
        env.storage()
            .persistent()
            .extend_ttl(&key, USER_TTL, USER_BUMP);
    }
}
