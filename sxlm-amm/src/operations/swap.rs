use soroban_sdk::{Address, Env, symbol_short, token::TokenClient};

use crate::common::error::Error;
use crate::common::events::Events;
use crate::common::storage::Storage;
use crate::common::types::BPS_SCALE;

/// Constant-product swaps with the fee retained in the reserves.
pub struct Swap;

impl Swap {
    /// Swap XLM into sXLM.
    pub fn swap_xlm_to_sxlm(
        env: &Env,
        user: &Address,
        xlm_in: i128,
        min_sxlm_out: i128,
    ) -> Result<i128, Error> {
        let mut storage = Storage::get(env);

        let sxlm_out = Self::quote_out(
            xlm_in,
            storage.reserve_xlm,
            storage.reserve_sxlm,
            storage.fee_bps,
            min_sxlm_out,
        )?;

        // k must not shrink with the full pre-fee input credited.
        Self::check_invariant(
            storage.reserve_xlm,
            storage.reserve_sxlm,
            storage.reserve_xlm + xlm_in,
            storage.reserve_sxlm - sxlm_out,
        )?;

        let native = TokenClient::new(env, &storage.native_token);
        native.transfer(user, &env.current_contract_address(), &xlm_in);

        storage.reserve_xlm += xlm_in;
        storage.reserve_sxlm -= sxlm_out;
        Storage::set(env, &storage);

        let sxlm = TokenClient::new(env, &storage.sxlm_token);
        sxlm.transfer(&env.current_contract_address(), user, &sxlm_out);

        Events::swap(env, user, &symbol_short!("XLM"), xlm_in, sxlm_out);
        Ok(sxlm_out)
    }

    /// Swap sXLM into XLM.
    pub fn swap_sxlm_to_xlm(
        env: &Env,
        user: &Address,
        sxlm_in: i128,
        min_xlm_out: i128,
    ) -> Result<i128, Error> {
        let mut storage = Storage::get(env);

        let xlm_out = Self::quote_out(
            sxlm_in,
            storage.reserve_sxlm,
            storage.reserve_xlm,
            storage.fee_bps,
            min_xlm_out,
        )?;

        Self::check_invariant(
            storage.reserve_xlm,
            storage.reserve_sxlm,
            storage.reserve_xlm - xlm_out,
            storage.reserve_sxlm + sxlm_in,
        )?;

        let sxlm = TokenClient::new(env, &storage.sxlm_token);
        sxlm.transfer(user, &env.current_contract_address(), &sxlm_in);

        storage.reserve_sxlm += sxlm_in;
        storage.reserve_xlm -= xlm_out;
        Storage::set(env, &storage);

        let native = TokenClient::new(env, &storage.native_token);
        native.transfer(&env.current_contract_address(), user, &xlm_out);

        Events::swap(env, user, &symbol_short!("sXLM"), sxlm_in, xlm_out);
        Ok(xlm_out)
    }

    /// Fee-adjusted constant-product output:
    /// `out = in_after_fee * reserve_out / (reserve_in + in_after_fee)`
    /// (floor), with `in_after_fee = in * (10000 - fee) / 10000`.
    ///
    /// The floor lands on the output side, so the quotient form
    /// `reserve_out - k / (reserve_in + in_after_fee)` rounds against the
    /// trader and k never shrinks, fee or no fee.
    fn quote_out(
        amount_in: i128,
        reserve_in: i128,
        reserve_out: i128,
        fee_bps: u32,
        min_out: i128,
    ) -> Result<i128, Error> {
        if amount_in <= 0 {
            return Err(Error::NegativeAmount);
        }
        if reserve_in == 0 || reserve_out == 0 {
            return Err(Error::InsufficientLiquidity);
        }

        let in_after_fee = amount_in
            .checked_mul(BPS_SCALE - fee_bps as i128)
            .ok_or(Error::ArithmeticOverflow)?
            .checked_div(BPS_SCALE)
            .ok_or(Error::ArithmeticOverflow)?;

        let new_reserve_in = reserve_in
            .checked_add(in_after_fee)
            .ok_or(Error::ArithmeticOverflow)?;
        let amount_out = in_after_fee
            .checked_mul(reserve_out)
            .ok_or(Error::ArithmeticOverflow)?
            .checked_div(new_reserve_in)
            .ok_or(Error::ArithmeticOverflow)?;

        if amount_out < min_out {
            return Err(Error::SlippageExceeded);
        }
        if amount_out >= reserve_out {
            return Err(Error::InsufficientLiquidity);
        }
        Ok(amount_out)
    }

    fn check_invariant(
        reserve_xlm: i128,
        reserve_sxlm: i128,
        new_reserve_xlm: i128,
        new_reserve_sxlm: i128,
    ) -> Result<(), Error> {
        let k = reserve_xlm
            .checked_mul(reserve_sxlm)
            .ok_or(Error::ArithmeticOverflow)?;
        let k_new = new_reserve_xlm
            .checked_mul(new_reserve_sxlm)
            .ok_or(Error::ArithmeticOverflow)?;
        if k_new < k {
            return Err(Error::InvariantViolated);
        }
        Ok(())
    }
}
