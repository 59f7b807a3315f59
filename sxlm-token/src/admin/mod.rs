pub mod supply;

use soroban_sdk::{Address, Env, String, panic_with_error};

use crate::common::error::Error;
use crate::common::events::Events;
use crate::common::types::{
    ADMIN_KEY, INSTANCE_BUMP, INSTANCE_TTL, METADATA_KEY, MINTER_KEY, TokenMetadata,
};

/// Administrative functions for the receipt token
pub struct Admin;

impl Admin {
    pub fn initialize(
        env: &Env,
        admin: &Address,
        minter: &Address,
        decimals: u32,
        name: &String,
        symbol: &String,
    ) {
        if env.storage().instance().has(&METADATA_KEY) {
            panic_with_error!(env, Error::AlreadyInitialized);
        }
        let metadata = TokenMetadata {
            name: name.clone(),
            symbol: symbol.clone(),
            decimals,
        };
        env.storage().instance().set(&METADATA_KEY, &metadata);
        env.storage().instance().set(&ADMIN_KEY, admin);
        env.storage().instance().set(&MINTER_KEY, minter);
        Self::extend_instance_ttl(env);
        Events::init(env, admin, minter);
    }

    pub fn extend_instance_ttl(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL, INSTANCE_BUMP);
    }

    pub fn get_metadata(env: &Env) -> TokenMetadata {
        env.storage()
            .instance()
            .get(&METADATA_KEY)
            .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
    }

    pub fn get_admin(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&ADMIN_KEY)
            .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
    }

    pub fn get_minter(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&MINTER_KEY)
            .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
    }

    pub fn require_admin(env: &Env) {
        Self::get_admin(env).require_auth();
    }

    pub fn require_minter(env: &Env) {
        Self::get_minter(env).require_auth();
    }

    pub fn set_minter(env: &Env, new_minter: &Address) {
        Self::require_admin(env);
        env.storage().instance().set(&MINTER_KEY, new_minter);
        Self::extend_instance_ttl(env);
        Events::set_minter(env, new_minter);
    }

    pub fn set_admin(env: &Env, new_admin: &Address) {
        Self::require_admin(env);
        env.storage().instance().set(&ADMIN_KEY, new_admin);
        Self::extend_instance_ttl(env);
        Events::set_admin(env, new_admin);
    }

    /// Upgrade the contract to a new WASM hash. Admin-only.
    pub fn upgrade(env: &Env, new_wasm_hash: &soroban_sdk::BytesN<32>) {
        Self::require_admin(env);
        env.deployer()
            .update_current_contract_wasm(new_wasm_hash.clone());
    }
}
