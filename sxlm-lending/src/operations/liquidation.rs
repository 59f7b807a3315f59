use soroban_sdk::{Address, Env, token::TokenClient};

use crate::common::error::Error;
use crate::common::events::Events;
use crate::common::storage::Storage;
use crate::common::types::{BPS_SCALE, HEALTH_FACTOR_ONE, LendingStorage, Position, RATE_PRECISION};
use crate::operations::interest::Interest;

/// Health factor math and the liquidation path.
pub struct Liquidations;

impl Liquidations {
    /// Health factor of a position, RATE_PRECISION scale. `i128::MAX` when
    /// debt-free.
    ///
    /// `hf = collateral * exchange_rate * liquidation_threshold_bps
    ///        / (debt_fresh * 10000)`
    /// (the rate's own 10^7 scale carries through, keeping the result 10^7).
    pub fn health_factor_of(
        storage: &LendingStorage,
        position: &Position,
    ) -> Result<i128, Error> {
        let debt_fresh = Interest::fresh_debt(storage, position)?;
        if debt_fresh == 0 {
            return Ok(i128::MAX);
        }
        position
            .sxlm_collateral
            .checked_mul(storage.exchange_rate)
            .ok_or(Error::ArithmeticOverflow)?
            .checked_mul(storage.liquidation_threshold_bps as i128)
            .ok_or(Error::ArithmeticOverflow)?
            .checked_div(
                debt_fresh
                    .checked_mul(BPS_SCALE)
                    .ok_or(Error::ArithmeticOverflow)?,
            )
            .ok_or(Error::ArithmeticOverflow)
    }

    /// XLM the position could still draw under the collateral factor.
    pub fn max_borrow_of(storage: &LendingStorage, position: &Position) -> Result<i128, Error> {
        let ceiling = position
            .sxlm_collateral
            .checked_mul(storage.exchange_rate)
            .ok_or(Error::ArithmeticOverflow)?
            .checked_mul(storage.collateral_factor_bps as i128)
            .ok_or(Error::ArithmeticOverflow)?
            .checked_div(
                BPS_SCALE
                    .checked_mul(RATE_PRECISION)
                    .ok_or(Error::ArithmeticOverflow)?,
            )
            .ok_or(Error::ArithmeticOverflow)?;
        let debt_fresh = Interest::fresh_debt(storage, position)?;
        Ok((ceiling - debt_fresh).max(0))
    }

    /// Repay part of an unhealthy borrower's debt and seize discounted
    /// collateral. The repayment is capped by the close factor; the seizure
    /// is clamped to the borrower's collateral.
    pub fn liquidate(
        env: &Env,
        liquidator: &Address,
        borrower: &Address,
    ) -> Result<(i128, i128), Error> {
        let mut storage = Storage::get(env);
        Interest::accrue(env, &mut storage)?;

        let mut position = Storage::get_position(env, borrower).ok_or(Error::PositionEmpty)?;
        let hf = Self::health_factor_of(&storage, &position)?;
        if hf >= HEALTH_FACTOR_ONE {
            return Err(Error::HealthyBorrower);
        }

        let debt_fresh = Interest::fresh_debt(&storage, &position)?;
        let debt_repaid = debt_fresh
            .checked_mul(storage.close_factor_bps as i128)
            .ok_or(Error::ArithmeticOverflow)?
            .checked_div(BPS_SCALE)
            .ok_or(Error::ArithmeticOverflow)?;

        // Collateral seized at the pushed rate, plus the liquidation bonus.
        let collateral_seized = debt_repaid
            .checked_mul(RATE_PRECISION)
            .ok_or(Error::ArithmeticOverflow)?
            .checked_mul(
                BPS_SCALE
                    .checked_add(storage.liquidation_bonus_bps as i128)
                    .ok_or(Error::ArithmeticOverflow)?,
            )
            .ok_or(Error::ArithmeticOverflow)?
            .checked_div(storage.exchange_rate)
            .ok_or(Error::ArithmeticOverflow)?
            .checked_div(BPS_SCALE)
            .ok_or(Error::ArithmeticOverflow)?
            .min(position.sxlm_collateral);

        // Pull the repayment before handing out collateral.
        let native = TokenClient::new(env, &storage.native_token);
        native.transfer(liquidator, &env.current_contract_address(), &debt_repaid);

        position.xlm_borrowed_principal = debt_fresh - debt_repaid;
        position.borrow_index = storage.accumulator;
        position.sxlm_collateral -= collateral_seized;
        position.last_update_ledger = env.ledger().sequence();
        Storage::set_position(env, borrower, &position);

        storage.total_borrowed = storage
            .total_borrowed
            .checked_sub(debt_repaid)
            .ok_or(Error::ArithmeticOverflow)?
            .max(0);
        storage.pool_balance = storage
            .pool_balance
            .checked_add(debt_repaid)
            .ok_or(Error::ArithmeticOverflow)?;
        storage.total_collateral = storage
            .total_collateral
            .checked_sub(collateral_seized)
            .ok_or(Error::ArithmeticOverflow)?;
        Storage::set(env, &storage);

        let sxlm = TokenClient::new(env, &storage.sxlm_token);
        sxlm.transfer(&env.current_contract_address(), liquidator, &collateral_seized);

        Events::liq(env, liquidator, borrower, debt_repaid, collateral_seized);
        Ok((debt_repaid, collateral_seized))
    }
}
