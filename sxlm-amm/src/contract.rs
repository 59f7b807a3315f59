use soroban_sdk::{Address, BytesN, Env, contract, contractimpl};

use crate::admin::Admin;
use crate::common::error::Error;
use crate::common::storage::Storage;
use crate::common::types::RATE_PRECISION;
use crate::operations::liquidity::Liquidity;
use crate::operations::swap::Swap;

/// Constant-product XLM/sXLM pool with LP shares.
#[contract]
pub struct AmmContract;

#[contractimpl]
impl AmmContract {
    /// Initialize the pool. One-shot.
    pub fn initialize(
        env: Env,
        admin: Address,
        sxlm_token: Address,
        native_token: Address,
        fee_bps: u32,
    ) {
        Admin::initialize(&env, &admin, &sxlm_token, &native_token, fee_bps);
    }

    // ========== Liquidity ==========

    /// Deposit both sides and mint LP shares. Returns the shares credited.
    pub fn add_liquidity(
        env: Env,
        user: Address,
        xlm_amount: i128,
        sxlm_amount: i128,
    ) -> Result<i128, Error> {
        user.require_auth();
        Liquidity::add_liquidity(&env, &user, xlm_amount, sxlm_amount)
    }

    /// Burn LP shares for a pro-rata slice of both reserves. Returns
    /// (xlm_out, sxlm_out).
    pub fn remove_liquidity(env: Env, user: Address, lp_amount: i128) -> Result<(i128, i128), Error> {
        user.require_auth();
        Liquidity::remove_liquidity(&env, &user, lp_amount)
    }

    // ========== Swaps ==========

    pub fn swap_xlm_to_sxlm(
        env: Env,
        user: Address,
        xlm_in: i128,
        min_sxlm_out: i128,
    ) -> Result<i128, Error> {
        user.require_auth();
        Swap::swap_xlm_to_sxlm(&env, &user, xlm_in, min_sxlm_out)
    }

    pub fn swap_sxlm_to_xlm(
        env: Env,
        user: Address,
        sxlm_in: i128,
        min_xlm_out: i128,
    ) -> Result<i128, Error> {
        user.require_auth();
        Swap::swap_sxlm_to_xlm(&env, &user, sxlm_in, min_xlm_out)
    }

    // ========== Views ==========

    pub fn get_reserves(env: Env) -> (i128, i128) {
        let storage = Storage::get(&env);
        (storage.reserve_xlm, storage.reserve_sxlm)
    }

    pub fn get_lp_balance(env: Env, id: Address) -> i128 {
        Storage::get_lp_balance(&env, &id)
    }

    pub fn total_lp_supply(env: Env) -> i128 {
        Storage::get(&env).total_lp_supply
    }

    /// Pool mid-price: XLM per sXLM, RATE_PRECISION scale.
    pub fn get_price(env: Env) -> Result<i128, Error> {
        let storage = Storage::get(&env);
        if storage.reserve_sxlm == 0 {
            return Err(Error::InsufficientLiquidity);
        }
        storage
            .reserve_xlm
            .checked_mul(RATE_PRECISION)
            .ok_or(Error::ArithmeticOverflow)?
            .checked_div(storage.reserve_sxlm)
            .ok_or(Error::ArithmeticOverflow)
    }

    pub fn get_fee_bps(env: Env) -> u32 {
        Storage::get(&env).fee_bps
    }

    // ========== Admin ==========

    /// Set the swap fee. Admin-only.
    pub fn set_fee_bps(env: Env, fee_bps: u32) {
        Admin::set_fee_bps(&env, fee_bps);
    }

    /// Extend the instance storage TTL.
    pub fn bump_instance(env: Env) {
        Storage::extend_instance_ttl(&env);
    }

    /// Upgrade the contract to new wasm. Admin-only.
    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        Admin::upgrade(&env, &new_wasm_hash);
    }
}
