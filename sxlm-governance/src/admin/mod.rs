use soroban_sdk::{Address, Env, panic_with_error};

use crate::common::error::Error;
use crate::common::events::Events;
use crate::common::storage::Storage;
use crate::common::types::{BPS_SCALE, GovernanceStorage};

/// Administrative functions for the governance module
pub struct Admin;

impl Admin {
    pub fn initialize(
        env: &Env,
        admin: &Address,
        sxlm_token: &Address,
        voting_period_ledgers: u32,
        quorum_bps: u32,
    ) {
        if Storage::is_initialized(env) {
            panic_with_error!(env, Error::AlreadyInitialized);
        }
        if quorum_bps as i128 > BPS_SCALE {
            panic_with_error!(env, Error::InvalidParameter);
        }

        let storage = GovernanceStorage {
            admin: admin.clone(),
            sxlm_token: sxlm_token.clone(),
            voting_period_ledgers,
            quorum_bps,
            proposal_count: 0,
        };
        Storage::set(env, &storage);
    }

    pub fn require_admin(env: &Env) {
        let storage = Storage::get(env);
        storage.admin.require_auth();
    }

    pub fn set_voting_period(env: &Env, voting_period_ledgers: u32) {
        Self::require_admin(env);
        let mut storage = Storage::get(env);
        storage.voting_period_ledgers = voting_period_ledgers;
        Storage::set(env, &storage);
        Events::voting_period_updated(env, voting_period_ledgers);
    }

    pub fn set_quorum_bps(env: &Env, quorum_bps: u32) {
        Self::require_admin(env);
        if quorum_bps as i128 > BPS_SCALE {
            panic_with_error!(env, Error::InvalidParameter);
        }
        let mut storage = Storage::get(env);
        storage.quorum_bps = quorum_bps;
        Storage::set(env, &storage);
        Events::quorum_updated(env, quorum_bps);
    }

    /// Upgrade the contract to a new WASM hash. Admin-only.
    pub fn upgrade(env: &Env, new_wasm_hash: &soroban_sdk::BytesN<32>) {
        Self::require_admin(env);
        env.deployer()
            .update_current_contract_wasm(new_wasm_hash.clone());
    }
}
