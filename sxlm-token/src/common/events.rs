use soroban_sdk::{Address, Env, symbol_short};

pub struct Events;

impl Events {
    /// Event emitted once when the token is initialized
    pub fn init(env: &Env, admin: &Address, minter: &Address) {
        let topics = (symbol_short!("init"), admin);
        env.events().publish(topics, minter);
    }

    /// Event emitted when tokens are minted
    pub fn mint(env: &Env, to: &Address, amount: i128) {
        let topics = (symbol_short!("mint"), to);
        env.events().publish(topics, amount);
    }

    /// Event emitted when tokens are burned
    pub fn burn(env: &Env, from: &Address, amount: i128) {
        let topics = (symbol_short!("burn"), from);
        env.events().publish(topics, amount);
    }

    /// Event emitted on every transfer, including transfer_from settlements
    pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
        let topics = (symbol_short!("transfer"), from, to);
        env.events().publish(topics, amount);
    }

    /// Event emitted when an allowance is set
    pub fn approve(
        env: &Env,
        owner: &Address,
        spender: &Address,
        amount: i128,
        expiration_ledger: u32,
    ) {
        let topics = (symbol_short!("approve"), owner, spender);
        env.events().publish(topics, (amount, expiration_ledger));
    }

    /// Event emitted when the minter is rotated
    pub fn set_minter(env: &Env, new_minter: &Address) {
        let topics = (symbol_short!("set_mint"),);
        env.events().publish(topics, new_minter);
    }

    /// Event emitted when the admin is rotated
    pub fn set_admin(env: &Env, new_admin: &Address) {
        let topics = (symbol_short!("set_admin"),);
        env.events().publish(topics, new_admin);
    }
}
