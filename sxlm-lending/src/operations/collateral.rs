use soroban_sdk::{Address, Env, token::TokenClient};

use crate::common::error::Error;
use crate::common::events::Events;
use crate::common::storage::Storage;
use crate::common::types::{HEALTH_FACTOR_ONE, Position};
use crate::operations::interest::Interest;
use crate::operations::liquidation::Liquidations;

/// Collateral management for borrow positions.
pub struct Collateral;

impl Collateral {
    /// Pull sXLM from the user and credit it as collateral. Always healthy.
    pub fn deposit_collateral(env: &Env, user: &Address, sxlm_amount: i128) -> Result<(), Error> {
        if sxlm_amount <= 0 {
            return Err(Error::NegativeAmount);
        }
        let mut storage = Storage::get(env);
        Interest::accrue(env, &mut storage)?;

        let sxlm = TokenClient::new(env, &storage.sxlm_token);
        sxlm.transfer(user, &env.current_contract_address(), &sxlm_amount);

        let mut position = Storage::get_position(env, user).unwrap_or(Position {
            sxlm_collateral: 0,
            xlm_borrowed_principal: 0,
            borrow_index: storage.accumulator,
            last_update_ledger: env.ledger().sequence(),
        });
        position.sxlm_collateral = position
            .sxlm_collateral
            .checked_add(sxlm_amount)
            .ok_or(Error::ArithmeticOverflow)?;
        position.last_update_ledger = env.ledger().sequence();
        Storage::set_position(env, user, &position);

        storage.total_collateral = storage
            .total_collateral
            .checked_add(sxlm_amount)
            .ok_or(Error::ArithmeticOverflow)?;
        Storage::set(env, &storage);

        Events::deposit(env, user, sxlm_amount);
        Ok(())
    }

    /// Release collateral back to the user, provided the position stays at or
    /// above the liquidation threshold.
    pub fn withdraw_collateral(env: &Env, user: &Address, sxlm_amount: i128) -> Result<(), Error> {
        if sxlm_amount <= 0 {
            return Err(Error::NegativeAmount);
        }
        let mut storage = Storage::get(env);
        Interest::accrue(env, &mut storage)?;

        let mut position = Storage::get_position(env, user).ok_or(Error::PositionEmpty)?;
        if position.sxlm_collateral < sxlm_amount {
            return Err(Error::InsufficientCollateral);
        }
        position.sxlm_collateral -= sxlm_amount;
        position.last_update_ledger = env.ledger().sequence();

        let hf = Liquidations::health_factor_of(&storage, &position)?;
        if hf < HEALTH_FACTOR_ONE {
            return Err(Error::UnhealthyAfter);
        }

        Storage::set_position(env, user, &position);
        storage.total_collateral = storage
            .total_collateral
            .checked_sub(sxlm_amount)
            .ok_or(Error::ArithmeticOverflow)?;
        Storage::set(env, &storage);

        let sxlm = TokenClient::new(env, &storage.sxlm_token);
        sxlm.transfer(&env.current_contract_address(), user, &sxlm_amount);

        Events::withdraw(env, user, sxlm_amount);
        Ok(())
    }
}
