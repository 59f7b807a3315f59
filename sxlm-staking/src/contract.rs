use soroban_sdk::{Address, BytesN, Env, Vec, contract, contractimpl};

use crate::admin::Admin;
use crate::common::error::Error;
use crate::common::storage::Storage;
use crate::common::types::{Withdrawal, WithdrawalResult};
use crate::operations::deposit::Deposits;
use crate::operations::rewards::Rewards;
use crate::operations::withdrawals::Withdrawals;

/// Staking pool: converts XLM to sXLM at the pool exchange rate and back,
/// with an instant-withdrawal buffer and a cooldown queue.
#[contract]
pub struct StakingContract;

#[contractimpl]
impl StakingContract {
    /// Initialize the staking pool. One-shot.
    pub fn initialize(
        env: Env,
        admin: Address,
        sxlm_token: Address,
        native_token: Address,
        cooldown_period: u32,
    ) {
        Admin::initialize(&env, &admin, &sxlm_token, &native_token, cooldown_period);
    }

    // ========== Staking ==========

    /// Stake XLM and receive sXLM at the current exchange rate.
    pub fn deposit(env: Env, user: Address, xlm_amount: i128) -> Result<i128, Error> {
        user.require_auth();
        Deposits::deposit(&env, &user, xlm_amount)
    }

    /// Burn sXLM for XLM. Pays instantly from the liquidity buffer when the
    /// caller asks for it and the buffer suffices; queues a delayed
    /// withdrawal otherwise.
    pub fn request_withdrawal(
        env: Env,
        user: Address,
        sxlm_amount: i128,
        instant: bool,
    ) -> Result<WithdrawalResult, Error> {
        user.require_auth();
        Withdrawals::request_withdrawal(&env, &user, sxlm_amount, instant)
    }

    /// Claim a matured delayed withdrawal.
    pub fn claim_withdrawal(env: Env, user: Address, withdrawal_id: u64) -> Result<i128, Error> {
        user.require_auth();
        Withdrawals::claim_withdrawal(&env, &user, withdrawal_id)
    }

    // ========== Rewards & slashing ==========

    /// Add harvested staking rewards to the reserve. Admin-only.
    pub fn add_rewards(env: Env, amount: i128) -> Result<(), Error> {
        Admin::require_admin(&env);
        Rewards::add_rewards(&env, amount)
    }

    /// Apply a validator slash to the reserve. Admin-only.
    pub fn apply_slashing(env: Env, slash_amount: i128) -> Result<(), Error> {
        Admin::require_admin(&env);
        Rewards::apply_slashing(&env, slash_amount)
    }

    /// Emit the current exchange rate for off-chain consumers.
    pub fn recalibrate_rate(env: Env) -> Result<i128, Error> {
        Rewards::recalibrate_rate(&env)
    }

    // ========== Views ==========

    pub fn get_exchange_rate(env: Env) -> Result<i128, Error> {
        let storage = Storage::get(&env);
        Deposits::exchange_rate(&env, &storage)
    }

    pub fn total_xlm_staked(env: Env) -> i128 {
        Storage::get(&env).total_xlm_staked
    }

    pub fn liquidity_buffer(env: Env) -> i128 {
        Storage::get(&env).liquidity_buffer
    }

    pub fn treasury_balance(env: Env) -> i128 {
        Storage::get(&env).treasury_balance
    }

    pub fn is_paused(env: Env) -> bool {
        Storage::get(&env).is_paused
    }

    pub fn protocol_fee_bps(env: Env) -> u32 {
        Storage::get(&env).protocol_fee_bps as u32
    }

    pub fn cooldown_period(env: Env) -> u32 {
        Storage::get(&env).cooldown_period
    }

    pub fn get_withdrawal(env: Env, withdrawal_id: u64) -> Option<Withdrawal> {
        Storage::get_withdrawal(&env, withdrawal_id)
    }

    pub fn get_validators(env: Env) -> Vec<Address> {
        Storage::get(&env).validators
    }

    // ========== Admin ==========

    /// Block deposits and withdrawal requests (claims stay open). Admin-only.
    pub fn pause(env: Env) {
        Admin::pause(&env);
    }

    pub fn unpause(env: Env) {
        Admin::unpause(&env);
    }

    /// Set the protocol fee on rewards, in basis points. Admin-only.
    pub fn set_protocol_fee_bps(env: Env, fee_bps: u32) {
        Admin::set_protocol_fee_bps(&env, fee_bps);
    }

    /// Set the withdrawal cooldown, in ledgers. Admin-only.
    pub fn set_cooldown_period(env: Env, cooldown_period: u32) {
        Admin::set_cooldown_period(&env, cooldown_period);
    }

    /// Set the instant-withdrawal buffer target. Admin-only.
    pub fn set_liquidity_buffer(env: Env, amount: i128) {
        Admin::set_liquidity_buffer(&env, amount);
    }

    /// Replace the advisory validator list. Admin-only.
    pub fn set_validators(env: Env, validators: Vec<Address>) {
        Admin::set_validators(&env, &validators);
    }

    /// Pay protocol fees out of the treasury. Admin-only.
    pub fn withdraw_treasury(env: Env, to: Address, amount: i128) {
        Admin::withdraw_treasury(&env, &to, amount);
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
