use soroban_sdk::{Address, BytesN, Env, String, contract, contractimpl};

use crate::admin::Admin;
use crate::common::error::Error;
use crate::common::storage::Storage;
use crate::common::types::Proposal;
use crate::operations::proposals::Proposals;
use crate::operations::voting::Voting;

/// Parameter governance weighted by sXLM holdings.
#[contract]
pub struct GovernanceContract;

#[contractimpl]
impl GovernanceContract {
    /// Initialize the governance module. One-shot.
    pub fn initialize(
        env: Env,
        admin: Address,
        sxlm_token: Address,
        voting_period_ledgers: u32,
        quorum_bps: u32,
    ) {
        Admin::initialize(&env, &admin, &sxlm_token, voting_period_ledgers, quorum_bps);
    }

    // ========== Proposals ==========

    /// Open a proposal to change a named parameter.
    pub fn create_proposal(
        env: Env,
        proposer: Address,
        param_key: String,
        new_value: String,
    ) -> Result<u64, Error> {
        proposer.require_auth();
        Proposals::create_proposal(&env, &proposer, &param_key, &new_value)
    }

    /// Vote on an open proposal, weighted by current sXLM balance.
    pub fn vote(env: Env, voter: Address, proposal_id: u64, support: bool) -> Result<(), Error> {
        voter.require_auth();
        Voting::vote(&env, &voter, proposal_id, support)
    }

    /// Execute a passed proposal once its voting window closed.
    pub fn execute_proposal(env: Env, proposal_id: u64) -> Result<(), Error> {
        Proposals::execute_proposal(&env, proposal_id)
    }

    // ========== Views ==========

    pub fn get_proposal(env: Env, proposal_id: u64) -> Option<Proposal> {
        Storage::get_proposal(&env, proposal_id)
    }

    pub fn get_vote_count(env: Env, proposal_id: u64) -> Result<(i128, i128), Error> {
        let proposal =
            Storage::get_proposal(&env, proposal_id).ok_or(Error::ProposalNotFound)?;
        Ok((proposal.votes_for, proposal.votes_against))
    }

    pub fn has_voted(env: Env, proposal_id: u64, voter: Address) -> bool {
        Storage::has_voted(&env, proposal_id, &voter)
    }

    pub fn proposal_count(env: Env) -> u64 {
        Storage::get(&env).proposal_count
    }

    pub fn get_param(env: Env, key: String) -> Option<String> {
        Storage::get_param(&env, &key)
    }

    pub fn voting_period(env: Env) -> u32 {
        Storage::get(&env).voting_period_ledgers
    }

    pub fn quorum_bps(env: Env) -> u32 {
        Storage::get(&env).quorum_bps
    }

    // ========== Admin ==========

    pub fn set_voting_period(env: Env, voting_period_ledgers: u32) {
        Admin::set_voting_period(&env, voting_period_ledgers);
    }

    pub fn set_quorum_bps(env: Env, quorum_bps: u32) {
        Admin::set_quorum_bps(&env, quorum_bps);
    }

    /// Extend the instance storage TTL.
    pub fn bump_instance(env: Env) {
        Storage::extend_instance_ttl(&env);
    }

    /// Upgrade the contract to new wasm. Admin-only.
    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        Admin::upgrade(&env, &new_wasm_hash);
    }
}
