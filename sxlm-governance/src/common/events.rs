use soroban_sdk::{Address, Env, String, symbol_short};

pub struct Events;

impl Events {
    /// Event emitted when a proposal is created
    pub fn propose(
        env: &Env,
        id: u64,
        proposer: &Address,
        param_key: &String,
        new_value: &String,
    ) {
        let topics = (symbol_short!("propose"), id, proposer);
        env.events()
            .publish(topics, (param_key.clone(), new_value.clone()));
    }

    /// Event emitted when a vote is cast
    pub fn voted(env: &Env, id: u64, voter: &Address, support: bool, weight: i128) {
        let topics = (symbol_short!("voted"), id, voter);
        env.events().publish(topics, (support, weight));
    }

    /// Event emitted when a passed proposal is executed
    pub fn executed(env: &Env, id: u64) {
        let topics = (symbol_short!("executed"),);
        env.events().publish(topics, id);
    }

    pub fn voting_period_updated(env: &Env, voting_period_ledgers: u32) {
        let topics = (symbol_short!("set_vp"),);
        env.events().publish(topics, voting_period_ledgers);
    }

    pub fn quorum_updated(env: &Env, quorum_bps: u32) {
        let topics = (symbol_short!("set_quo"),);
        env.events().publish(topics, quorum_bps);
    }
}
