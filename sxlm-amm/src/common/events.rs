use soroban_sdk::{Address, Env, Symbol, symbol_short};

pub struct Events;

impl Events {
    /// Event emitted when liquidity is added
    pub fn add_liq(env: &Env, user: &Address, xlm_in: i128, sxlm_in: i128, lp_minted: i128) {
        let topics = (symbol_short!("add_liq"), user);
        env.events().publish(topics, (xlm_in, sxlm_in, lp_minted));
    }

    /// Event emitted when liquidity is removed
    pub fn rem_liq(env: &Env, user: &Address, lp_burned: i128, xlm_out: i128, sxlm_out: i128) {
        let topics = (symbol_short!("rem_liq"), user);
        env.events().publish(topics, (lp_burned, xlm_out, sxlm_out));
    }

    /// Event emitted on every swap; `in_sym` names the input side
    pub fn swap(env: &Env, user: &Address, in_sym: &Symbol, in_amt: i128, out_amt: i128) {
        let topics = (symbol_short!("swap"), user);
        env.events().publish(topics, (in_sym.clone(), in_amt, out_amt));
    }

    /// Event emitted when the fee is changed
    pub fn set_fee(env: &Env, fee_bps: u32) {
        let topics = (symbol_short!("set_fee"),);
        env.events().publish(topics, fee_bps);
    }
}
