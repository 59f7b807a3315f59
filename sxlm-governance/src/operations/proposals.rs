use soroban_sdk::{Address, Env, String};

use sxlm_token::contract::SxlmTokenContractClient;

use crate::common::error::Error;
use crate::common::events::Events;
use crate::common::storage::Storage;
use crate::common::types::{BPS_SCALE, MIN_PROPOSAL_STAKE, Proposal};

/// Proposal lifecycle: Active -> Passed -> Executed, or Active -> Rejected.
pub struct Proposals;

impl Proposals {
    /// Open a proposal to set `param_key` to `new_value`. The proposer must
    /// hold the minimum stake.
    pub fn create_proposal(
        env: &Env,
        proposer: &Address,
        param_key: &String,
        new_value: &String,
    ) -> Result<u64, Error> {
        let mut storage = Storage::get(env);

        let sxlm = SxlmTokenContractClient::new(env, &storage.sxlm_token);
        if sxlm.balance(proposer) < MIN_PROPOSAL_STAKE {
            return Err(Error::InsufficientStakeToPropose);
        }

        let id = storage.proposal_count;
        storage.proposal_count = id.checked_add(1).ok_or(Error::ArithmeticOverflow)?;

        let start_ledger = env.ledger().sequence();
        let end_ledger = start_ledger
            .checked_add(storage.voting_period_ledgers)
            .ok_or(Error::ArithmeticOverflow)?;

        let proposal = Proposal {
            proposer: proposer.clone(),
            param_key: param_key.clone(),
            new_value: new_value.clone(),
            start_ledger,
            end_ledger,
            votes_for: 0,
            votes_against: 0,
            executed: false,
        };
        Storage::set_proposal(env, id, &proposal);
        Storage::set(env, &storage);

        Events::propose(env, id, proposer, param_key, new_value);
        Ok(id)
    }

    /// Execute a passed proposal after its voting window: writes the
    /// parameter and seals the proposal.
    pub fn execute_proposal(env: &Env, proposal_id: u64) -> Result<(), Error> {
        let storage = Storage::get(env);
        let mut proposal =
            Storage::get_proposal(env, proposal_id).ok_or(Error::ProposalNotFound)?;

        if env.ledger().sequence() <= proposal.end_ledger {
            return Err(Error::VotingOpen);
        }
        if proposal.executed {
            return Err(Error::AlreadyExecuted);
        }
        if proposal.votes_for <= proposal.votes_against {
            return Err(Error::RejectedProposal);
        }

        let sxlm = SxlmTokenContractClient::new(env, &storage.sxlm_token);
        let quorum = sxlm
            .total_supply()
            .checked_mul(storage.quorum_bps as i128)
            .ok_or(Error::ArithmeticOverflow)?
            .checked_div(BPS_SCALE)
            .ok_or(Error::ArithmeticOverflow)?;
        let participation = proposal
            .votes_for
            .checked_add(proposal.votes_against)
            .ok_or(Error::ArithmeticOverflow)?;
        if participation < quorum {
            return Err(Error::QuorumNotMet);
        }

        Storage::set_param(env, &proposal.param_key, &proposal.new_value);
        proposal.executed = true;
        Storage::set_proposal(env, proposal_id, &proposal);

        Events::executed(env, proposal_id);
        Ok(())
    }
}
