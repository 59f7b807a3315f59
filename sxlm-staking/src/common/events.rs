use soroban_sdk::{Address, Env, Vec, symbol_short};

pub struct Events;

impl Events {
    /// Event emitted when XLM is staked for sXLM
    pub fn deposit(env: &Env, user: &Address, xlm_amount: i128, sxlm_minted: i128) {
        let topics = (symbol_short!("deposit"), user);
        env.events().publish(topics, (xlm_amount, sxlm_minted));
    }

    /// Event emitted when a withdrawal is served instantly from the buffer
    pub fn instant(env: &Env, user: &Address, xlm_amount: i128) {
        let topics = (symbol_short!("instant"), user);
        env.events().publish(topics, xlm_amount);
    }

    /// Event emitted when a withdrawal enters the cooldown queue
    pub fn delayed(
        env: &Env,
        user: &Address,
        xlm_amount: i128,
        withdrawal_id: u64,
        unlock_ledger: u32,
    ) {
        let topics = (symbol_short!("delayed"), user);
        env.events()
            .publish(topics, (xlm_amount, withdrawal_id, unlock_ledger));
    }

    /// Event emitted when a matured withdrawal is claimed
    pub fn claimed(env: &Env, user: &Address, xlm_amount: i128, withdrawal_id: u64) {
        let topics = (symbol_short!("claimed"), user);
        env.events().publish(topics, (xlm_amount, withdrawal_id));
    }

    /// Event emitted when harvested rewards are added to the reserve
    pub fn rewards(env: &Env, amount: i128) {
        let topics = (symbol_short!("rewards"),);
        env.events().publish(topics, amount);
    }

    /// Event emitted when a slash is applied to the reserve
    pub fn slash(env: &Env, applied: i128, new_rate: i128) {
        let topics = (symbol_short!("slash"),);
        env.events().publish(topics, (applied, new_rate));
    }

    /// Event emitted by recalibrate_rate for off-chain consumption
    pub fn rate(env: &Env, rate: i128) {
        let topics = (symbol_short!("rate"),);
        env.events().publish(topics, rate);
    }

    pub fn paused(env: &Env) {
        let topics = (symbol_short!("paused"),);
        env.events().publish(topics, true);
    }

    pub fn unpaused(env: &Env) {
        let topics = (symbol_short!("unpaused"),);
        env.events().publish(topics, false);
    }

    pub fn protocol_fee_updated(env: &Env, fee_bps: u32) {
        let topics = (symbol_short!("set_fee"),);
        env.events().publish(topics, fee_bps);
    }

    pub fn cooldown_updated(env: &Env, cooldown_period: u32) {
        let topics = (symbol_short!("set_cool"),);
        env.events().publish(topics, cooldown_period);
    }

    pub fn buffer_updated(env: &Env, liquidity_buffer: i128) {
        let topics = (symbol_short!("set_buf"),);
        env.events().publish(topics, liquidity_buffer);
    }

    pub fn validators_updated(env: &Env, validators: &Vec<Address>) {
        let topics = (symbol_short!("set_vals"),);
        env.events().publish(topics, validators.len());
    }

    pub fn treasury_withdrawn(env: &Env, to: &Address, amount: i128) {
        let topics = (symbol_short!("treasury"), to);
        env.events().publish(topics, amount);
    }
}
