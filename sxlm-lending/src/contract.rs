use soroban_sdk::{Address, BytesN, Env, contract, contractimpl};

use crate::admin::Admin;
use crate::common::error::Error;
use crate::common::storage::Storage;
use crate::common::types::Position;
use crate::operations::borrow::Borrowing;
use crate::operations::collateral::Collateral;
use crate::operations::interest::Interest;
use crate::operations::liquidation::Liquidations;

/// Lending pool: XLM loans against sXLM collateral.
#[contract]
pub struct LendingContract;

#[contractimpl]
impl LendingContract {
    /// Initialize the lending pool. One-shot.
    pub fn initialize(
        env: Env,
        admin: Address,
        sxlm_token: Address,
        native_token: Address,
        collateral_factor_bps: u32,
        liquidation_threshold_bps: u32,
        borrow_rate_bps: u32,
    ) {
        Admin::initialize(
            &env,
            &admin,
            &sxlm_token,
            &native_token,
            collateral_factor_bps,
            liquidation_threshold_bps,
            borrow_rate_bps,
        );
    }

    // ========== Position management ==========

    /// Deposit sXLM as collateral.
    pub fn deposit_collateral(env: Env, user: Address, sxlm_amount: i128) -> Result<(), Error> {
        user.require_auth();
        Collateral::deposit_collateral(&env, &user, sxlm_amount)
    }

    /// Withdraw collateral, keeping the position healthy.
    pub fn withdraw_collateral(env: Env, user: Address, sxlm_amount: i128) -> Result<(), Error> {
        user.require_auth();
        Collateral::withdraw_collateral(&env, &user, sxlm_amount)
    }

    /// Borrow XLM from the pool against collateral.
    pub fn borrow(env: Env, user: Address, xlm_amount: i128) -> Result<(), Error> {
        user.require_auth();
        Borrowing::borrow(&env, &user, xlm_amount)
    }

    /// Repay debt; overpayment is clamped to the fresh debt.
    pub fn repay(env: Env, user: Address, xlm_amount: i128) -> Result<i128, Error> {
        user.require_auth();
        Borrowing::repay(&env, &user, xlm_amount)
    }

    /// Liquidate an unhealthy borrower. Returns (debt_repaid,
    /// collateral_seized).
    pub fn liquidate(
        env: Env,
        liquidator: Address,
        borrower: Address,
    ) -> Result<(i128, i128), Error> {
        liquidator.require_auth();
        Liquidations::liquidate(&env, &liquidator, &borrower)
    }

    // ========== Admin ==========

    /// Push the sXLM -> XLM rate. Admin-only.
    pub fn update_exchange_rate(env: Env, new_rate: i128) -> Result<(), Error> {
        Admin::update_exchange_rate(&env, new_rate)
    }

    /// Pull realised interest to the admin. Admin-only.
    pub fn harvest_interest(env: Env) -> Result<i128, Error> {
        Admin::harvest_interest(&env)
    }

    /// Fund the pool with borrowable XLM.
    pub fn fund_pool(env: Env, funder: Address, amount: i128) -> Result<(), Error> {
        funder.require_auth();
        Admin::fund_pool(&env, &funder, amount)
    }

    pub fn set_collateral_factor(env: Env, bps: u32) {
        Admin::set_collateral_factor(&env, bps);
    }

    pub fn set_liquidation_threshold(env: Env, bps: u32) {
        Admin::set_liquidation_threshold(&env, bps);
    }

    pub fn set_borrow_rate(env: Env, bps: u32) -> Result<(), Error> {
        Admin::set_borrow_rate(&env, bps)
    }

    pub fn set_close_factor(env: Env, bps: u32) {
        Admin::set_close_factor(&env, bps);
    }

    pub fn set_liquidation_bonus(env: Env, bps: u32) {
        Admin::set_liquidation_bonus(&env, bps);
    }

    // ========== Views ==========

    pub fn get_position(env: Env, user: Address) -> Option<Position> {
        Storage::get_position(&env, &user)
    }

    /// Health factor at the current accumulator, RATE_PRECISION scale.
    pub fn health_factor(env: Env, user: Address) -> Result<i128, Error> {
        let mut storage = Storage::get(&env);
        Interest::accrue(&env, &mut storage)?;
        let position = Storage::get_position(&env, &user).ok_or(Error::PositionEmpty)?;
        Liquidations::health_factor_of(&storage, &position)
    }

    /// Remaining borrow headroom under the collateral factor.
    pub fn max_borrow(env: Env, user: Address) -> Result<i128, Error> {
        let mut storage = Storage::get(&env);
        Interest::accrue(&env, &mut storage)?;
        let position = Storage::get_position(&env, &user).ok_or(Error::PositionEmpty)?;
        Liquidations::max_borrow_of(&storage, &position)
    }

    pub fn get_pool_balance(env: Env) -> i128 {
        Storage::get(&env).pool_balance
    }

    pub fn total_collateral(env: Env) -> i128 {
        Storage::get(&env).total_collateral
    }

    pub fn total_borrowed(env: Env) -> i128 {
        Storage::get(&env).total_borrowed
    }

    pub fn total_accrued_interest(env: Env) -> i128 {
        Storage::get(&env).total_accrued_interest
    }

    pub fn get_collateral_factor(env: Env) -> u32 {
        Storage::get(&env).collateral_factor_bps
    }

    pub fn get_liquidation_threshold(env: Env) -> u32 {
        Storage::get(&env).liquidation_threshold_bps
    }

    pub fn get_borrow_rate(env: Env) -> u32 {
        Storage::get(&env).borrow_rate_bps
    }

    pub fn get_close_factor(env: Env) -> u32 {
        Storage::get(&env).close_factor_bps
    }

    pub fn get_liquidation_bonus(env: Env) -> u32 {
        Storage::get(&env).liquidation_bonus_bps
    }

    pub fn get_exchange_rate(env: Env) -> i128 {
        Storage::get(&env).exchange_rate
    }

    pub fn get_accumulator(env: Env) -> i128 {
        Storage::get(&env).accumulator
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
