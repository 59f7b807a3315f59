use soroban_sdk::{Address, Env, token::TokenClient};

use crate::common::error::Error;
use crate::common::events::Events;
use crate::common::math::isqrt;
use crate::common::storage::Storage;
use crate::common::types::MIN_LIQUIDITY;

/// LP share accounting for the pool.
pub struct Liquidity;

impl Liquidity {
    /// Deposit both sides and mint LP shares.
    ///
    /// The first provider seeds the pool at `isqrt(xlm * sxlm)` shares, of
    /// which MIN_LIQUIDITY is booked to the pool itself and never
    /// withdrawable. Later providers are quoted on the lesser side ratio;
    /// any excess on the other side stays in the reserves and accrues to all
    /// LPs. Returns the shares credited to the caller.
    pub fn add_liquidity(
        env: &Env,
        user: &Address,
        xlm_amount: i128,
        sxlm_amount: i128,
    ) -> Result<i128, Error> {
        if xlm_amount <= 0 || sxlm_amount <= 0 {
            return Err(Error::NegativeAmount);
        }
        let mut storage = Storage::get(env);

        // Pull both legs before any share math settles.
        let native = TokenClient::new(env, &storage.native_token);
        native.transfer(user, &env.current_contract_address(), &xlm_amount);
        let sxlm = TokenClient::new(env, &storage.sxlm_token);
        sxlm.transfer(user, &env.current_contract_address(), &sxlm_amount);

        let minted = if storage.total_lp_supply == 0 {
            let shares = isqrt(
                xlm_amount
                    .checked_mul(sxlm_amount)
                    .ok_or(Error::ArithmeticOverflow)?,
            );
            if shares <= MIN_LIQUIDITY {
                return Err(Error::BelowMinLiquidity);
            }
            let pool = env.current_contract_address();
            Storage::set_lp_balance(env, &pool, MIN_LIQUIDITY);
            storage.total_lp_supply = shares;
            shares - MIN_LIQUIDITY
        } else {
            let by_xlm = xlm_amount
                .checked_mul(storage.total_lp_supply)
                .ok_or(Error::ArithmeticOverflow)?
                .checked_div(storage.reserve_xlm)
                .ok_or(Error::ArithmeticOverflow)?;
            let by_sxlm = sxlm_amount
                .checked_mul(storage.total_lp_supply)
                .ok_or(Error::ArithmeticOverflow)?
                .checked_div(storage.reserve_sxlm)
                .ok_or(Error::ArithmeticOverflow)?;
            let shares = by_xlm.min(by_sxlm);
            if shares == 0 {
                return Err(Error::InsufficientLiquidity);
            }
            storage.total_lp_supply = storage
                .total_lp_supply
                .checked_add(shares)
                .ok_or(Error::ArithmeticOverflow)?;
            shares
        };

        let user_balance = Storage::get_lp_balance(env, user)
            .checked_add(minted)
            .ok_or(Error::ArithmeticOverflow)?;
        Storage::set_lp_balance(env, user, user_balance);

        storage.reserve_xlm = storage
            .reserve_xlm
            .checked_add(xlm_amount)
            .ok_or(Error::ArithmeticOverflow)?;
        storage.reserve_sxlm = storage
            .reserve_sxlm
            .checked_add(sxlm_amount)
            .ok_or(Error::ArithmeticOverflow)?;
        Storage::set(env, &storage);

        Events::add_liq(env, user, xlm_amount, sxlm_amount, minted);
        Ok(minted)
    }

    /// Burn LP shares for a pro-rata slice of both reserves.
    pub fn remove_liquidity(
        env: &Env,
        user: &Address,
        lp_amount: i128,
    ) -> Result<(i128, i128), Error> {
        if lp_amount <= 0 {
            return Err(Error::NegativeAmount);
        }
        let mut storage = Storage::get(env);

        let user_balance = Storage::get_lp_balance(env, user);
        if user_balance < lp_amount {
            return Err(Error::InsufficientLpBalance);
        }

        let xlm_out = lp_amount
            .checked_mul(storage.reserve_xlm)
            .ok_or(Error::ArithmeticOverflow)?
            .checked_div(storage.total_lp_supply)
            .ok_or(Error::ArithmeticOverflow)?;
        let sxlm_out = lp_amount
            .checked_mul(storage.reserve_sxlm)
            .ok_or(Error::ArithmeticOverflow)?
            .checked_div(storage.total_lp_supply)
            .ok_or(Error::ArithmeticOverflow)?;

        Storage::set_lp_balance(env, user, user_balance - lp_amount);
        storage.total_lp_supply -= lp_amount;
        storage.reserve_xlm -= xlm_out;
        storage.reserve_sxlm -= sxlm_out;
        Storage::set(env, &storage);

        let native = TokenClient::new(env, &storage.native_token);
        native.transfer(&env.current_contract_address(), user, &xlm_out);
        let sxlm = TokenClient::new(env, &storage.sxlm_token);
        sxlm.transfer(&env.current_contract_address(), user, &sxlm_out);

        Events::rem_liq(env, user, lp_amount, xlm_out, sxlm_out);
        Ok((xlm_out, sxlm_out))
    }
}
