use soroban_sdk::{Address, Env, panic_with_error};

use crate::admin::supply::TotalSupplyStorage;
use crate::common::error::Error;
use crate::common::events::Events;
use crate::token::allowance::AllowanceStorage;
use crate::token::balance::BalanceStorage;

/// Balance-moving operations shared by the public entry points.
///
/// Authentication happens in the contract layer; these functions only
/// validate amounts and move state.
pub struct TokenOps;

impl TokenOps {
    pub fn check_non_negative(env: &Env, amount: i128) {
        if amount < 0 {
            panic_with_error!(env, Error::NegativeAmount);
        }
    }

    pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
        Self::check_non_negative(env, amount);
        // Self-transfer is a no-op but still checks the sender can cover it.
        if from == to {
            if BalanceStorage::get(env, from) < amount {
                panic_with_error!(env, Error::InsufficientBalance);
            }
            Events::transfer(env, from, to, amount);
            return;
        }
        BalanceStorage::subtract(env, from, amount);
        BalanceStorage::add(env, to, amount);
        Events::transfer(env, from, to, amount);
    }

    pub fn transfer_from(
        env: &Env,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: i128,
    ) {
        Self::check_non_negative(env, amount);
        AllowanceStorage::spend(env, from, spender, amount);
        if from == to {
            if BalanceStorage::get(env, from) < amount {
                panic_with_error!(env, Error::InsufficientBalance);
            }
            Events::transfer(env, from, to, amount);
            return;
        }
        BalanceStorage::subtract(env, from, amount);
        BalanceStorage::add(env, to, amount);
        Events::transfer(env, from, to, amount);
    }

    pub fn approve(
        env: &Env,
        owner: &Address,
        spender: &Address,
        amount: i128,
        expiration_ledger: u32,
    ) {
        Self::check_non_negative(env, amount);
        if amount > 0 && expiration_ledger < env.ledger().sequence() {
            panic_with_error!(env, Error::InvalidLedgerSequence);
        }
        AllowanceStorage::set(env, owner, spender, amount, expiration_ledger);
        Events::approve(env, owner, spender, amount, expiration_ledger);
    }

    /// Live allowance amount; expired entries read as zero.
    pub fn allowance(env: &Env, owner: &Address, spender: &Address) -> i128 {
        let allowance = AllowanceStorage::get(env, owner, spender);
        if AllowanceStorage::is_live(env, &allowance) {
            allowance.amount
        } else {
            0
        }
    }

    pub fn mint(env: &Env, to: &Address, amount: i128) {
        Self::check_non_negative(env, amount);
        TotalSupplyStorage::add(env, amount);
        BalanceStorage::add(env, to, amount);
        Events::mint(env, to, amount);
    }

    pub fn burn(env: &Env, from: &Address, amount: i128) {
        Self::check_non_negative(env, amount);
        BalanceStorage::subtract(env, from, amount);
        TotalSupplyStorage::subtract(env, amount);
        Events::burn(env, from, amount);
    }
}
