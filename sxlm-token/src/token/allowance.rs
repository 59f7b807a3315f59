use soroban_sdk::{Address, Env, panic_with_error};

use crate::common::error::Error;
use crate::common::types::{Allowance, DataKey, Txn};

/// Allowance storage operations
pub struct AllowanceStorage;

impl AllowanceStorage {
    pub fn get(env: &Env, owner: &Address, spender: &Address) -> Allowance {
        let key = DataKey::Allowance(Txn(owner.clone(), spender.clone()));
        env.storage().persistent().get(&key).unwrap_or(Allowance {
            amount: 0,
            expiration_ledger: 0,
        })
    }

    pub fn set(
        env: &Env,
        owner: &Address,
        spender: &Address,
        amount: i128,
        expiration_ledger: u32,
    ) {
        let key = DataKey::Allowance(Txn(owner.clone(), spender.clone()));
        if amount == 0 {
            env.storage().persistent().remove(&key);
            return;
        }
        let allowance = Allowance {
            amount,
            expiration_ledger,
        };
        env.storage().persistent().set(&key, &allowance);
        let ttl = env.storage().max_ttl();
        env.storage().persistent().extend_ttl(&key, ttl, ttl);
    }

    /// Consume part of an allowance. Expired entries hold no spending power.
    pub fn spend(env: &Env, owner: &Address, spender: &Address, amount: i128) {
        let allowance = Self::get(env, owner, spender);
        if allowance.amount < amount {
            panic_with_error!(env, Error::InsufficientAllowance);
        }
        if allowance.expiration_ledger < env.ledger().sequence() {
            panic_with_error!(env, Error::AllowanceExpired);
        }
        let remaining = allowance
            .amount
            .checked_sub(amount)
            .unwrap_or_else(|| panic_with_error!(env, Error::ArithmeticOverflow));
        Self::set(env, owner, spender, remaining, allowance.expiration_ledger);
    }

    pub fn is_live(env: &Env, allowance: &Allowance) -> bool {
        allowance.amount > 0 && allowance.expiration_ledger >= env.ledger().sequence()
    }
}
