use soroban_sdk::{Address, Env};

use sxlm_token::contract::SxlmTokenContractClient;

use crate::common::error::Error;
use crate::common::events::Events;
use crate::common::storage::Storage;

/// Vote tally over live sXLM balances.
pub struct Voting;

impl Voting {
    /// Cast a vote weighted by the voter's sXLM balance at vote time. One
    /// vote per account per proposal.
    pub fn vote(env: &Env, voter: &Address, proposal_id: u64, support: bool) -> Result<(), Error> {
        let storage = Storage::get(env);
        let mut proposal =
            Storage::get_proposal(env, proposal_id).ok_or(Error::ProposalNotFound)?;

        if env.ledger().sequence() > proposal.end_ledger {
            return Err(Error::VotingClosed);
        }
        if Storage::has_voted(env, proposal_id, voter) {
            return Err(Error::AlreadyVoted);
        }

        let sxlm = SxlmTokenContractClient::new(env, &storage.sxlm_token);
        let weight = sxlm.balance(voter);

        if support {
            proposal.votes_for = proposal
                .votes_for
                .checked_add(weight)
                .ok_or(Error::ArithmeticOverflow)?;
        } else {
            proposal.votes_against = proposal
                .votes_against
                .checked_add(weight)
                .ok_or(Error::ArithmeticOverflow)?;
        }
        Storage::set_voted(env, proposal_id, voter);
        Storage::set_proposal(env, proposal_id, &proposal);

        Events::voted(env, proposal_id, voter, support, weight);
        Ok(())
    }
}
