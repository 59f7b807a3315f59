use soroban_sdk::Env;

use crate::common::error::Error;
use crate::common::types::{BPS_SCALE, LEDGERS_PER_YEAR, LendingStorage, Position};

/// Interest accrual over the global accumulator.
///
/// The accumulator starts at RATE_PRECISION and grows by
/// `accumulator * borrow_rate_bps * delta_ledgers / (10000 * LEDGERS_PER_YEAR)`
/// (floor) on every state change. Per-position debt is stored as a principal
/// pinned to the accumulator value it was last rebased at; the fresh debt is
/// `principal * accumulator / borrow_index`.
pub struct Interest;

impl Interest {
    /// Advance the accumulator to the current ledger and roll the interest
    /// delta into `total_borrowed` / `total_accrued_interest`.
    pub fn accrue(env: &Env, storage: &mut LendingStorage) -> Result<(), Error> {
        let current_ledger = env.ledger().sequence();
        if current_ledger <= storage.last_accrual_ledger {
            return Ok(());
        }
        let delta_ledgers = (current_ledger - storage.last_accrual_ledger) as i128;

        let increment = storage
            .accumulator
            .checked_mul(storage.borrow_rate_bps as i128)
            .ok_or(Error::ArithmeticOverflow)?
            .checked_mul(delta_ledgers)
            .ok_or(Error::ArithmeticOverflow)?
            .checked_div(
                BPS_SCALE
                    .checked_mul(LEDGERS_PER_YEAR)
                    .ok_or(Error::ArithmeticOverflow)?,
            )
            .ok_or(Error::ArithmeticOverflow)?;

        let old_accumulator = storage.accumulator;
        let new_accumulator = old_accumulator
            .checked_add(increment)
            .ok_or(Error::ArithmeticOverflow)?;

        if storage.total_borrowed > 0 && increment > 0 {
            let new_total = storage
                .total_borrowed
                .checked_mul(new_accumulator)
                .ok_or(Error::ArithmeticOverflow)?
                .checked_div(old_accumulator)
                .ok_or(Error::ArithmeticOverflow)?;
            let interest_delta = new_total
                .checked_sub(storage.total_borrowed)
                .ok_or(Error::ArithmeticOverflow)?;
            storage.total_borrowed = new_total;
            storage.total_accrued_interest = storage
                .total_accrued_interest
                .checked_add(interest_delta)
                .ok_or(Error::ArithmeticOverflow)?;
        }

        storage.accumulator = new_accumulator;
        storage.last_accrual_ledger = current_ledger;
        Ok(())
    }

    /// Current debt of a position, grown with the accumulator since the last
    /// rebase.
    pub fn fresh_debt(storage: &LendingStorage, position: &Position) -> Result<i128, Error> {
        if position.xlm_borrowed_principal == 0 {
            return Ok(0);
        }
        position
            .xlm_borrowed_principal
            .checked_mul(storage.accumulator)
            .ok_or(Error::ArithmeticOverflow)?
            .checked_div(position.borrow_index)
            .ok_or(Error::ArithmeticOverflow)
    }
}
