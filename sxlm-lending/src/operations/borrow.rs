use soroban_sdk::{Address, Env, token::TokenClient};

use crate::common::error::Error;
use crate::common::events::Events;
use crate::common::storage::Storage;
use crate::common::types::HEALTH_FACTOR_ONE;
use crate::operations::interest::Interest;
use crate::operations::liquidation::Liquidations;

/// Borrow and repay against sXLM collateral.
pub struct Borrowing;

impl Borrowing {
    /// Draw XLM from the pool against the caller's collateral. The position
    /// must remain at or above the liquidation threshold afterwards.
    pub fn borrow(env: &Env, user: &Address, xlm_amount: i128) -> Result<(), Error> {
        if xlm_amount <= 0 {
            return Err(Error::NegativeAmount);
        }
        let mut storage = Storage::get(env);
        Interest::accrue(env, &mut storage)?;

        if storage.pool_balance < xlm_amount {
            return Err(Error::InsufficientPoolLiquidity);
        }

        let mut position = Storage::get_position(env, user).ok_or(Error::PositionEmpty)?;
        let debt_fresh = Interest::fresh_debt(&storage, &position)?;
        position.xlm_borrowed_principal = debt_fresh
            .checked_add(xlm_amount)
            .ok_or(Error::ArithmeticOverflow)?;
        position.borrow_index = storage.accumulator;
        position.last_update_ledger = env.ledger().sequence();

        let hf = Liquidations::health_factor_of(&storage, &position)?;
        if hf < HEALTH_FACTOR_ONE {
            return Err(Error::UnhealthyAfter);
        }

        Storage::set_position(env, user, &position);
        storage.total_borrowed = storage
            .total_borrowed
            .checked_add(xlm_amount)
            .ok_or(Error::ArithmeticOverflow)?;
        storage.pool_balance -= xlm_amount;
        Storage::set(env, &storage);

        let native = TokenClient::new(env, &storage.native_token);
        native.transfer(&env.current_contract_address(), user, &xlm_amount);

        Events::borrow(env, user, xlm_amount);
        Ok(())
    }

    /// Repay up to the caller's fresh debt; overpayment is clamped. Returns
    /// the amount actually pulled.
    pub fn repay(env: &Env, user: &Address, xlm_amount: i128) -> Result<i128, Error> {
        if xlm_amount <= 0 {
            return Err(Error::NegativeAmount);
        }
        let mut storage = Storage::get(env);
        Interest::accrue(env, &mut storage)?;

        let mut position = Storage::get_position(env, user).ok_or(Error::NothingToRepay)?;
        let debt_fresh = Interest::fresh_debt(&storage, &position)?;
        if debt_fresh == 0 {
            return Err(Error::NothingToRepay);
        }
        let actual = xlm_amount.min(debt_fresh);

        // Pull first so the debt reduction is backed by delivered funds.
        let native = TokenClient::new(env, &storage.native_token);
        native.transfer(user, &env.current_contract_address(), &actual);

        position.xlm_borrowed_principal = debt_fresh - actual;
        position.borrow_index = storage.accumulator;
        position.last_update_ledger = env.ledger().sequence();
        Storage::set_position(env, user, &position);

        storage.total_borrowed = storage
            .total_borrowed
            .checked_sub(actual)
            .ok_or(Error::ArithmeticOverflow)?
            .max(0);
        storage.pool_balance = storage
            .pool_balance
            .checked_add(actual)
            .ok_or(Error::ArithmeticOverflow)?;
        Storage::set(env, &storage);

        Events::repay(env, user, actual);
        Ok(actual)
    }
}
