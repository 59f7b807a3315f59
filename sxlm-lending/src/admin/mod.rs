use soroban_sdk::{Address, Env, panic_with_error, symbol_short, token::TokenClient};

use crate::common::error::Error;
use crate::common::events::Events;
use crate::common::storage::Storage;
use crate::common::types::{BPS_SCALE, LendingStorage, RATE_PRECISION};
use crate::operations::interest::Interest;

/// Administrative functions for the lending pool
pub struct Admin;

impl Admin {
    pub fn initialize(
        env: &Env,
        admin: &Address,
        sxlm_token: &Address,
        native_token: &Address,
        collateral_factor_bps: u32,
        liquidation_threshold_bps: u32,
        borrow_rate_bps: u32,
    ) {
        if Storage::is_initialized(env) {
            panic_with_error!(env, Error::AlreadyInitialized);
        }
        if collateral_factor_bps as i128 > BPS_SCALE
            || liquidation_threshold_bps as i128 > BPS_SCALE
        {
            panic_with_error!(env, Error::InvalidParameter);
        }

        let storage = LendingStorage {
            admin: admin.clone(),
            sxlm_token: sxlm_token.clone(),
            native_token: native_token.clone(),
            total_collateral: 0,
            total_borrowed: 0,
            pool_balance: 0,
            exchange_rate: RATE_PRECISION,
            collateral_factor_bps,
            liquidation_threshold_bps,
            borrow_rate_bps,
            close_factor_bps: 5000,
            liquidation_bonus_bps: 500,
            accumulator: RATE_PRECISION,
            last_accrual_ledger: env.ledger().sequence(),
            total_accrued_interest: 0,
        };
        Storage::set(env, &storage);
    }

    pub fn require_admin(env: &Env) {
        let storage = Storage::get(env);
        storage.admin.require_auth();
    }

    /// Push the authoritative sXLM -> XLM rate from the staking side.
    pub fn update_exchange_rate(env: &Env, new_rate: i128) -> Result<(), Error> {
        Self::require_admin(env);
        if new_rate <= 0 {
            return Err(Error::InvalidParameter);
        }
        let mut storage = Storage::get(env);
        Interest::accrue(env, &mut storage)?;
        storage.exchange_rate = new_rate;
        Storage::set(env, &storage);
        Events::rate(env, new_rate);
        Ok(())
    }

    /// Pull realised interest earnings to the admin for piping back into
    /// staking rewards. Interest only becomes XLM as repayments land, so the
    /// pool balance caps the harvest.
    pub fn harvest_interest(env: &Env) -> Result<i128, Error> {
        Self::require_admin(env);
        let mut storage = Storage::get(env);
        Interest::accrue(env, &mut storage)?;

        let amount = storage.total_accrued_interest.min(storage.pool_balance);
        if amount > 0 {
            storage.total_accrued_interest -= amount;
            storage.pool_balance -= amount;
            Storage::set(env, &storage);

            let native = TokenClient::new(env, &storage.native_token);
            native.transfer(&env.current_contract_address(), &storage.admin, &amount);
        } else {
            Storage::set(env, &storage);
        }
        Events::harvest(env, amount);
        Ok(amount)
    }

    /// Fund the pool with borrowable XLM.
    pub fn fund_pool(env: &Env, funder: &Address, amount: i128) -> Result<(), Error> {
        if amount <= 0 {
            return Err(Error::NegativeAmount);
        }
        let mut storage = Storage::get(env);
        Interest::accrue(env, &mut storage)?;

        let native = TokenClient::new(env, &storage.native_token);
        native.transfer(funder, &env.current_contract_address(), &amount);

        storage.pool_balance = storage
            .pool_balance
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        Storage::set(env, &storage);
        Events::fund(env, funder, amount);
        Ok(())
    }

    // ========== Parameter setters (governance surface) ==========

    pub fn set_collateral_factor(env: &Env, bps: u32) {
        Self::require_admin(env);
        Self::check_bps(env, bps);
        let mut storage = Storage::get(env);
        storage.collateral_factor_bps = bps;
        Storage::set(env, &storage);
        Events::param_updated(env, &symbol_short!("cf"), bps as i128);
    }

    pub fn set_liquidation_threshold(env: &Env, bps: u32) {
        Self::require_admin(env);
        Self::check_bps(env, bps);
        let mut storage = Storage::get(env);
        storage.liquidation_threshold_bps = bps;
        Storage::set(env, &storage);
        Events::param_updated(env, &symbol_short!("lt"), bps as i128);
    }

    pub fn set_borrow_rate(env: &Env, bps: u32) -> Result<(), Error> {
        Self::require_admin(env);
        let mut storage = Storage::get(env);
        // Settle the old rate up to now before the new one takes over.
        Interest::accrue(env, &mut storage)?;
        storage.borrow_rate_bps = bps;
        Storage::set(env, &storage);
        Events::param_updated(env, &symbol_short!("rate_bps"), bps as i128);
        Ok(())
    }

    pub fn set_close_factor(env: &Env, bps: u32) {
        Self::require_admin(env);
        Self::check_bps(env, bps);
        let mut storage = Storage::get(env);
        storage.close_factor_bps = bps;
        Storage::set(env, &storage);
        Events::param_updated(env, &symbol_short!("close"), bps as i128);
    }

    pub fn set_liquidation_bonus(env: &Env, bps: u32) {
        Self::require_admin(env);
        Self::check_bps(env, bps);
        let mut storage = Storage::get(env);
        storage.liquidation_bonus_bps = bps;
        Storage::set(env, &storage);
        Events::param_updated(env, &symbol_short!("bonus"), bps as i128);
    }

    fn check_bps(env: &Env, bps: u32) {
        if bps as i128 > BPS_SCALE {
            panic_with_error!(env, Error::InvalidParameter);
        }
    }

    /// Upgrade the contract to a new WASM hash. Admin-only.
    pub fn upgrade(env: &Env, new_wasm_hash: &soroban_sdk::BytesN<32>) {
        Self::require_admin(env);
        env.deployer()
            .update_current_contract_wasm(new_wasm_hash.clone());
    }
}
