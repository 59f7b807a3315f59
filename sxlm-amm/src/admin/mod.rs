use soroban_sdk::{Address, Env, panic_with_error};

use crate::common::error::Error;
use crate::common::events::Events;
use crate::common::storage::Storage;
use crate::common::types::AmmStorage;

/// Administrative functions for the AMM pool
pub struct Admin;

impl Admin {
    pub fn initialize(
        env: &Env,
        admin: &Address,
        sxlm_token: &Address,
        native_token: &Address,
        fee_bps: u32,
    ) {
        if Storage::is_initialized(env) {
            panic_with_error!(env, Error::AlreadyInitialized);
        }
        if fee_bps > 1000 {
            panic_with_error!(env, Error::InvalidParameter);
        }

        let storage = AmmStorage {
            admin: admin.clone(),
            sxlm_token: sxlm_token.clone(),
            native_token: native_token.clone(),
            fee_bps,
            reserve_xlm: 0,
            reserve_sxlm: 0,
            total_lp_supply: 0,
        };
        Storage::set(env, &storage);
    }

    pub fn require_admin(env: &Env) {
        let storage = Storage::get(env);
        storage.admin.require_auth();
    }

    /// Set the swap fee in basis points, capped at 10%.
    pub fn set_fee_bps(env: &Env, fee_bps: u32) {
        Self::require_admin(env);
        if fee_bps > 1000 {
            panic_with_error!(env, Error::InvalidParameter);
        }
        let mut storage = Storage::get(env);
        storage.fee_bps = fee_bps;
        Storage::set(env, &storage);
        Events::set_fee(env, fee_bps);
    }

    /// Upgrade the contract to a new WASM hash. Admin-only.
    pub fn upgrade(env: &Env, new_wasm_hash: &soroban_sdk::BytesN<32>) {
        Self::require_admin(env);
        env.deployer()
            .update_current_contract_wasm(new_wasm_hash.clone());
    }
}
