use soroban_sdk::{Address, Env, Vec, panic_with_error, token::TokenClient};

use crate::common::error::Error;
use crate::common::events::Events;
use crate::common::storage::Storage;
use crate::common::types::{BPS_SCALE, RATE_PRECISION, StakingStorage};

/// Administrative functions for the staking pool
pub struct Admin;

impl Admin {
    pub fn initialize(
        env: &Env,
        admin: &Address,
        sxlm_token: &Address,
        native_token: &Address,
        cooldown_period: u32,
    ) {
        if Storage::is_initialized(env) {
            panic_with_error!(env, Error::AlreadyInitialized);
        }

        let storage = StakingStorage {
            admin: admin.clone(),
            sxlm_token: sxlm_token.clone(),
            native_token: native_token.clone(),
            total_xlm_staked: 0,
            liquidity_buffer: 0,
            treasury_balance: 0,
            cooldown_period,
            protocol_fee_bps: 0,
            is_paused: false,
            next_withdrawal_id: 0,
            slash_index: RATE_PRECISION,
            validators: Vec::new(env),
        };
        Storage::set(env, &storage);
    }

    pub fn require_admin(env: &Env) {
        let storage = Storage::get(env);
        storage.admin.require_auth();
    }

    pub fn pause(env: &Env) {
        Self::require_admin(env);
        let mut storage = Storage::get(env);
        storage.is_paused = true;
        Storage::set(env, &storage);
        Events::paused(env);
    }

    pub fn unpause(env: &Env) {
        Self::require_admin(env);
        let mut storage = Storage::get(env);
        storage.is_paused = false;
        Storage::set(env, &storage);
        Events::unpaused(env);
    }

    /// Set the protocol fee taken from rewards, in basis points.
    pub fn set_protocol_fee_bps(env: &Env, fee_bps: u32) {
        Self::require_admin(env);
        if fee_bps as i128 > BPS_SCALE {
            panic_with_error!(env, Error::InvalidParameter);
        }
        let mut storage = Storage::get(env);
        storage.protocol_fee_bps = fee_bps;
        Storage::set(env, &storage);
        Events::protocol_fee_updated(env, fee_bps);
    }

    pub fn set_cooldown_period(env: &Env, cooldown_period: u32) {
        Self::require_admin(env);
        let mut storage = Storage::get(env);
        storage.cooldown_period = cooldown_period;
        Storage::set(env, &storage);
        Events::cooldown_updated(env, cooldown_period);
    }

    /// Rebalance hook for the off-chain delegator: how much of the reserve is
    /// held back for instant withdrawals. Clamped to the reserve.
    pub fn set_liquidity_buffer(env: &Env, amount: i128) {
        Self::require_admin(env);
        if amount < 0 {
            panic_with_error!(env, Error::NegativeAmount);
        }
        let mut storage = Storage::get(env);
        storage.liquidity_buffer = amount.min(storage.total_xlm_staked);
        let buffer = storage.liquidity_buffer;
        Storage::set(env, &storage);
        Events::buffer_updated(env, buffer);
    }

    /// Replace the advisory validator list.
    pub fn set_validators(env: &Env, validators: &Vec<Address>) {
        Self::require_admin(env);
        let mut storage = Storage::get(env);
        storage.validators = validators.clone();
        Storage::set(env, &storage);
        Events::validators_updated(env, validators);
    }

    /// Pay accumulated protocol fees out of the contract's XLM balance.
    pub fn withdraw_treasury(env: &Env, to: &Address, amount: i128) {
        Self::require_admin(env);
        if amount < 0 {
            panic_with_error!(env, Error::NegativeAmount);
        }
        let mut storage = Storage::get(env);
        if amount > storage.treasury_balance {
            panic_with_error!(env, Error::InsufficientTreasury);
        }
        storage.treasury_balance -= amount;
        Storage::set(env, &storage);

        let native = TokenClient::new(env, &storage.native_token);
        native.transfer(&env.current_contract_address(), to, &amount);
        Events::treasury_withdrawn(env, to, amount);
    }

    /// Upgrade the contract to a new WASM hash. Admin-only.
    pub fn upgrade(env: &Env, new_wasm_hash: &soroban_sdk::BytesN<32>) {
        Self::require_admin(env);
        env.deployer()
            .update_current_contract_wasm(new_wasm_hash.clone());
    }
}
