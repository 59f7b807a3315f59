use soroban_sdk::{Address, Env, token::TokenClient};

use sxlm_token::contract::SxlmTokenContractClient;

use crate::common::error::Error;
use crate::common::events::Events;
use crate::common::storage::Storage;
use crate::common::types::{MIN_STAKE, RATE_PRECISION, StakingStorage};

/// Deposit path: XLM in, sXLM out at the pool exchange rate.
pub struct Deposits;

impl Deposits {
    /// Stake `xlm_amount` for the caller and mint sXLM at the current rate.
    /// Returns the amount of sXLM minted.
    pub fn deposit(env: &Env, user: &Address, xlm_amount: i128) -> Result<i128, Error> {
        let mut storage = Storage::get(env);
        if storage.is_paused {
            return Err(Error::Paused);
        }
        if xlm_amount < 0 {
            return Err(Error::NegativeAmount);
        }
        if xlm_amount < MIN_STAKE {
            return Err(Error::BelowMinStake);
        }

        let sxlm = SxlmTokenContractClient::new(env, &storage.sxlm_token);
        let supply_before = sxlm.total_supply();
        let staked_before = storage.total_xlm_staked;

        // Pull the XLM first so the quote is backed by delivered funds.
        let native = TokenClient::new(env, &storage.native_token);
        native.transfer(user, &env.current_contract_address(), &xlm_amount);

        // Quote against the pre-deposit aggregates; bootstrap is 1:1.
        let sxlm_to_mint = if supply_before == 0 || staked_before == 0 {
            xlm_amount
        } else {
            xlm_amount
                .checked_mul(supply_before)
                .ok_or(Error::ArithmeticOverflow)?
                .checked_div(staked_before)
                .ok_or(Error::ArithmeticOverflow)?
        };

        storage.total_xlm_staked = storage
            .total_xlm_staked
            .checked_add(xlm_amount)
            .ok_or(Error::ArithmeticOverflow)?;
        storage.liquidity_buffer = storage
            .liquidity_buffer
            .checked_add(xlm_amount)
            .ok_or(Error::ArithmeticOverflow)?;
        Storage::set(env, &storage);

        sxlm.mint(user, &sxlm_to_mint);

        Events::deposit(env, user, xlm_amount, sxlm_to_mint);
        Ok(sxlm_to_mint)
    }

    /// Current XLM-per-sXLM exchange rate, RATE_PRECISION scale.
    /// Defined as 1:1 while no sXLM exists.
    pub fn exchange_rate(env: &Env, storage: &StakingStorage) -> Result<i128, Error> {
        let sxlm = SxlmTokenContractClient::new(env, &storage.sxlm_token);
        let supply = sxlm.total_supply();
        if supply == 0 {
            return Ok(RATE_PRECISION);
        }
        storage
            .total_xlm_staked
            .checked_mul(RATE_PRECISION)
            .ok_or(Error::ArithmeticOverflow)?
            .checked_div(supply)
            .ok_or(Error::ArithmeticOverflow)
    }
}
