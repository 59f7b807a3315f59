use soroban_sdk::{Address, BytesN, Env, String, contract, contractimpl};

use crate::admin::Admin;
use crate::admin::supply::TotalSupplyStorage;
use crate::token::balance::BalanceStorage;
use crate::token::ops::TokenOps;

/// sXLM receipt token.
///
/// A fungible token whose supply may only be changed by the configured
/// `minter` - in production, the staking contract's identity.
#[contract]
pub struct SxlmTokenContract;

#[contractimpl]
impl SxlmTokenContract {
    /// Initialize the token. One-shot; repeat calls fail.
    pub fn initialize(
        env: Env,
        admin: Address,
        minter: Address,
        decimals: u32,
        name: String,
        symbol: String,
    ) {
        Admin::initialize(&env, &admin, &minter, decimals, &name, &symbol);
    }

    // ========== Supply ==========

    /// Mint tokens to an address. Minter-only.
    pub fn mint(env: Env, to: Address, amount: i128) {
        Admin::require_minter(&env);
        Admin::extend_instance_ttl(&env);
        TokenOps::mint(&env, &to, amount);
    }

    /// Burn tokens from an address. Minter-only.
    pub fn burn(env: Env, from: Address, amount: i128) {
        Admin::require_minter(&env);
        Admin::extend_instance_ttl(&env);
        TokenOps::burn(&env, &from, amount);
    }

    pub fn total_supply(env: Env) -> i128 {
        TotalSupplyStorage::get(&env)
    }

    // ========== Balances & transfers ==========

    pub fn balance(env: Env, id: Address) -> i128 {
        BalanceStorage::get(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        Admin::extend_instance_ttl(&env);
        TokenOps::transfer(&env, &from, &to, amount);
    }

    pub fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        Admin::extend_instance_ttl(&env);
        TokenOps::transfer_from(&env, &spender, &from, &to, amount);
    }

    // ========== Allowances ==========

    pub fn approve(
        env: Env,
        owner: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) {
        owner.require_auth();
        Admin::extend_instance_ttl(&env);
        TokenOps::approve(&env, &owner, &spender, amount, expiration_ledger);
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        TokenOps::allowance(&env, &owner, &spender)
    }

    // ========== Metadata ==========

    pub fn name(env: Env) -> String {
        Admin::get_metadata(&env).name
    }

    pub fn symbol(env: Env) -> String {
        Admin::get_metadata(&env).symbol
    }

    pub fn decimals(env: Env) -> u32 {
        Admin::get_metadata(&env).decimals
    }

    // ========== Admin ==========

    pub fn admin(env: Env) -> Address {
        Admin::get_admin(&env)
    }

    pub fn minter(env: Env) -> Address {
        Admin::get_minter(&env)
    }

    /// Rotate the minter. Admin-only.
    pub fn set_minter(env: Env, new_minter: Address) {
        Admin::set_minter(&env, &new_minter);
    }

    /// Rotate the admin. Admin-only.
    pub fn set_admin(env: Env, new_admin: Address) {
        Admin::set_admin(&env, &new_admin);
    }

    /// Extend the instance storage TTL.
    pub fn bump_instance(env: Env) {
        Admin::extend_instance_ttl(&env);
    }

    /// Upgrade the contract to new wasm. Admin-only.
    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        Admin::upgrade(&env, &new_wasm_hash);
    }
}
