use soroban_sdk::{Address, Env, token::TokenClient};

use sxlm_token::contract::SxlmTokenContractClient;

use crate::common::error::Error;
use crate::common::events::Events;
use crate::common::storage::Storage;
use crate::common::types::{INSTANT_WITHDRAWAL_ID, Withdrawal, WithdrawalResult};

/// Withdrawal paths: instant out of the liquidity buffer, or a delayed
/// cooldown-gated claim.
pub struct Withdrawals;

impl Withdrawals {
    /// Burn `sxlm_amount` and either pay XLM out instantly (caller opted in
    /// and the buffer covers the quote) or queue a delayed withdrawal.
    ///
    /// The quote uses the pre-burn supply; the XLM leaves the staked reserve
    /// at request time either way, so delayed records are claims on unstaked
    /// XLM, not on rate-sensitive sXLM.
    pub fn request_withdrawal(
        env: &Env,
        user: &Address,
        sxlm_amount: i128,
        instant: bool,
    ) -> Result<WithdrawalResult, Error> {
        let mut storage = Storage::get(env);
        if storage.is_paused {
            return Err(Error::Paused);
        }
        if sxlm_amount <= 0 {
            return Err(Error::NegativeAmount);
        }

        let sxlm = SxlmTokenContractClient::new(env, &storage.sxlm_token);
        if sxlm.balance(user) < sxlm_amount {
            return Err(Error::InsufficientSxlm);
        }
        let supply_before = sxlm.total_supply();
        if supply_before == 0 {
            return Err(Error::InsufficientSxlm);
        }

        let xlm_out = sxlm_amount
            .checked_mul(storage.total_xlm_staked)
            .ok_or(Error::ArithmeticOverflow)?
            .checked_div(supply_before)
            .ok_or(Error::ArithmeticOverflow)?;

        sxlm.burn(user, &sxlm_amount);

        storage.total_xlm_staked = storage
            .total_xlm_staked
            .checked_sub(xlm_out)
            .ok_or(Error::ArithmeticOverflow)?;

        if instant && storage.liquidity_buffer >= xlm_out {
            storage.liquidity_buffer = storage
                .liquidity_buffer
                .checked_sub(xlm_out)
                .ok_or(Error::ArithmeticOverflow)?;
            Storage::set(env, &storage);

            let native = TokenClient::new(env, &storage.native_token);
            native.transfer(&env.current_contract_address(), user, &xlm_out);

            Events::instant(env, user, xlm_out);
            return Ok(WithdrawalResult {
                withdrawal_id: INSTANT_WITHDRAWAL_ID,
                is_instant: true,
                xlm_amount: xlm_out,
            });
        }

        // Earmarked XLM is out of the reserve; keep the buffer within it.
        if storage.liquidity_buffer > storage.total_xlm_staked {
            storage.liquidity_buffer = storage.total_xlm_staked;
        }

        let withdrawal_id = storage.next_withdrawal_id;
        storage.next_withdrawal_id = withdrawal_id
            .checked_add(1)
            .ok_or(Error::ArithmeticOverflow)?;

        let unlock_ledger = env
            .ledger()
            .sequence()
            .checked_add(storage.cooldown_period)
            .ok_or(Error::ArithmeticOverflow)?;

        let withdrawal = Withdrawal {
            owner: user.clone(),
            xlm_amount: xlm_out,
            unlock_ledger,
            claimed: false,
            slash_index: storage.slash_index,
        };
        Storage::set_withdrawal(env, withdrawal_id, &withdrawal);
        Storage::set(env, &storage);

        Events::delayed(env, user, xlm_out, withdrawal_id, unlock_ledger);
        Ok(WithdrawalResult {
            withdrawal_id,
            is_instant: false,
            xlm_amount: xlm_out,
        })
    }

    /// Claim a matured delayed withdrawal. Pays the recorded amount scaled
    /// by any slashing that landed after the request.
    pub fn claim_withdrawal(env: &Env, user: &Address, withdrawal_id: u64) -> Result<i128, Error> {
        let storage = Storage::get(env);
        let mut withdrawal = Storage::get_withdrawal(env, withdrawal_id).ok_or(Error::NotFound)?;

        if withdrawal.owner != *user {
            return Err(Error::NotOwner);
        }
        if withdrawal.claimed {
            return Err(Error::AlreadyClaimed);
        }
        if env.ledger().sequence() < withdrawal.unlock_ledger {
            return Err(Error::WithdrawalLocked);
        }

        let payout = if withdrawal.slash_index == 0 {
            0
        } else {
            withdrawal
                .xlm_amount
                .checked_mul(storage.slash_index)
                .ok_or(Error::ArithmeticOverflow)?
                .checked_div(withdrawal.slash_index)
                .ok_or(Error::ArithmeticOverflow)?
        };

        withdrawal.claimed = true;
        Storage::set_withdrawal(env, withdrawal_id, &withdrawal);

        let native = TokenClient::new(env, &storage.native_token);
        native.transfer(&env.current_contract_address(), user, &payout);

        Events::claimed(env, user, payout, withdrawal_id);
        Ok(payout)
    }
}
