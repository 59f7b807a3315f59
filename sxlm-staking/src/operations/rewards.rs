use soroban_sdk::{Env, token::TokenClient};

use crate::common::error::Error;
use crate::common::events::Events;
use crate::common::storage::Storage;
use crate::common::types::BPS_SCALE;
use crate::operations::deposit::Deposits;

/// Reward accrual and slashing against the staked reserve.
pub struct Rewards;

impl Rewards {
    /// Pull harvested rewards from the admin and credit the reserve, minus
    /// the protocol fee. The exchange rate rises as a consequence.
    pub fn add_rewards(env: &Env, amount: i128) -> Result<(), Error> {
        if amount < 0 {
            return Err(Error::NegativeAmount);
        }
        let mut storage = Storage::get(env);

        let native = TokenClient::new(env, &storage.native_token);
        native.transfer(&storage.admin, &env.current_contract_address(), &amount);

        let protocol_fee = amount
            .checked_mul(storage.protocol_fee_bps as i128)
            .ok_or(Error::ArithmeticOverflow)?
            .checked_div(BPS_SCALE)
            .ok_or(Error::ArithmeticOverflow)?;

        storage.treasury_balance = storage
            .treasury_balance
            .checked_add(protocol_fee)
            .ok_or(Error::ArithmeticOverflow)?;
        storage.total_xlm_staked = storage
            .total_xlm_staked
            .checked_add(amount - protocol_fee)
            .ok_or(Error::ArithmeticOverflow)?;
        Storage::set(env, &storage);

        Events::rewards(env, amount);
        Ok(())
    }

    /// Apply a slash to the reserve. The exchange rate falls immediately and
    /// the slash index is walked down so pending withdrawal claims absorb
    /// the same fraction.
    pub fn apply_slashing(env: &Env, slash_amount: i128) -> Result<(), Error> {
        if slash_amount < 0 {
            return Err(Error::NegativeAmount);
        }
        let mut storage = Storage::get(env);

        let staked_before = storage.total_xlm_staked;
        let applied = slash_amount.min(staked_before);

        if staked_before > 0 {
            let remaining = staked_before
                .checked_sub(applied)
                .ok_or(Error::ArithmeticOverflow)?;
            storage.slash_index = storage
                .slash_index
                .checked_mul(remaining)
                .ok_or(Error::ArithmeticOverflow)?
                .checked_div(staked_before)
                .ok_or(Error::ArithmeticOverflow)?;
            storage.total_xlm_staked = remaining;
        }
        if storage.liquidity_buffer > storage.total_xlm_staked {
            storage.liquidity_buffer = storage.total_xlm_staked;
        }
        Storage::set(env, &storage);

        let new_rate = Deposits::exchange_rate(env, &storage)?;
        Events::slash(env, applied, new_rate);
        Ok(())
    }

    /// Emit the current exchange rate for off-chain consumers.
    pub fn recalibrate_rate(env: &Env) -> Result<i128, Error> {
        let storage = Storage::get(env);
        let rate = Deposits::exchange_rate(env, &storage)?;
        Events::rate(env, rate);
        Ok(rate)
    }
}
