use soroban_sdk::{Address, Env, String, panic_with_error};

use crate::common::error::Error;
use crate::common::types::{
    DataKey, GovernanceStorage, INSTANCE_BUMP, INSTANCE_TTL, Proposal, STORAGE, USER_BUMP,
    USER_TTL,
};

/// Storage operations for the governance module
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

    pub fn get(env: &Env) -> GovernanceStorage {
        Self::extend_instance_ttl(env);
        env.storage()
            .instance()
            .get(&STORAGE)
            .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
    }

    pub fn set(env: &Env, storage: &GovernanceStorage) {
        env.storage().instance().set(&STORAGE, storage);
        Self::extend_instance_ttl(env);
    }

    // ========== Proposals ==========

    pub fn get_proposal(env: &Env, id: u64) -> Option<Proposal> {
        let key = DataKey::Proposal(id);
        let proposal: Option<Proposal> = env.storage().persistent().get(&key);
        if proposal.is_some() {
            env.storage()
                .persistent()
                .extend_ttl(&key, USER_TTL, USER_BUMP);
        }
        proposal
    }

    pub fn set_proposal(env: &Env, id: u64, proposal: &Proposal) {
        let key = DataKey::Proposal(id);
        env.storage().persistent().set(&key, proposal);
        env.storage()
            .persistent()
            .extend_ttl(&key, USER_TTL, USER_BUMP);
    }

    // ========== Vote markers ==========

    pub fn has_voted(env: &Env, id: u64, voter: &Address) -> bool {
        let key = DataKey::HasVoted(id, voter.clone());
        env.storage().persistent().get(&key).unwrap_or(false)
    }

    pub fn set_voted(env: &Env, id: u64, voter: &Address) {
        let key = DataKey::HasVoted(id, voter.clone());
        env.storage().persistent().set(&key, &true);
        env.storage()
            .persistent()
            .extend_ttl(&key, USER_TTL, USER_BUMP);
    }

    // ========== Parameter store ==========

    pub fn get_param(env: &Env, key: &String) -> Option<String> {
        let key = DataKey::Param(key.clone());
        env.storage().persistent().get(&key)
    }

    pub fn set_param(env: &Env, key: &String, value: &String) {
        let key = DataKey::Param(key.clone());
        env.storage().persistent().set(&key, value);
        env.storage()
            .persistent()
            .extend_ttl(&key, USER_TTL, USER_BUMP);
    }
}
