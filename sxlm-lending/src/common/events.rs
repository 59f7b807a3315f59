use soroban_sdk::{Address, Env, symbol_short};

pub struct Events;

impl Events {
    /// Event emitted when sXLM collateral is deposited
    pub fn deposit(env: &Env, user: &Address, sxlm_amount: i128) {
        let topics = (symbol_short!("deposit"), user);
        env.events().publish(topics, sxlm_amount);
    }

    /// Event emitted when sXLM collateral is withdrawn
    pub fn withdraw(env: &Env, user: &Address, sxlm_amount: i128) {
        let topics = (symbol_short!("withdraw"), user);
        env.events().publish(topics, sxlm_amount);
    }

    /// Event emitted when XLM is borrowed from the pool
    pub fn borrow(env: &Env, user: &Address, xlm_amount: i128) {
        let topics = (symbol_short!("borrow"), user);
        env.events().publish(topics, xlm_amount);
    }

    /// Event emitted when debt is repaid
    pub fn repay(env: &Env, user: &Address, xlm_amount: i128) {
        let topics = (symbol_short!("repay"), user);
        env.events().publish(topics, xlm_amount);
    }

    /// Event emitted when an unhealthy position is liquidated
    pub fn liq(
        env: &Env,
        liquidator: &Address,
        borrower: &Address,
        debt_repaid: i128,
        collateral_seized: i128,
    ) {
        let topics = (symbol_short!("liq"), liquidator, borrower);
        env.events().publish(topics, (debt_repaid, collateral_seized));
    }

    /// Event emitted when the keeper pushes a new sXLM -> XLM rate
    pub fn rate(env: &Env, new_rate: i128) {
        let topics = (symbol_short!("rate"),);
        env.events().publish(topics, new_rate);
    }

    /// Event emitted when accrued interest is harvested to the admin
    pub fn harvest(env: &Env, amount: i128) {
        let topics = (symbol_short!("harvest"),);
        env.events().publish(topics, amount);
    }

    /// Event emitted when the pool is funded with borrowable XLM
    pub fn fund(env: &Env, funder: &Address, amount: i128) {
        let topics = (symbol_short!("fund"), funder);
        env.events().publish(topics, amount);
    }

    pub fn param_updated(env: &Env, name: &soroban_sdk::Symbol, value: i128) {
        let topics = (symbol_short!("set_param"), name.clone());
        env.events().publish(topics, value);
    }
}
