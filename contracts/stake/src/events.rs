use soroban_sdk::{Address, Env, Symbol};

use crate::storage::StakeAsset;

pub struct StakeEvents {}

impl StakeEvents {
    /// Emitted when the pool is constructed
    ///
    /// - topics - `["initialize", owner: Address]`
    /// - data - `[token: Address, native: Address, min_deposit_amount: i128]`
    pub fn initialize(
        env: &Env,
        owner: Address,
        token: Address,
        native: Address,
        min_deposit_amount: i128,
    ) {
        let topics = (Symbol::new(env, "initialize"), owner);
        env.events()
            .publish(topics, (token, native, min_deposit_amount));
    }

    /// Emitted when a staker opens a stake
    ///
    /// - topics - `["deposit", user: Address]`
    /// - data - `[asset: StakeAsset, amount: i128, opened_at: u32]`
    pub fn deposit(env: &Env, user: Address, asset: StakeAsset, amount: i128, opened_at: u32) {
        let topics = (Symbol::new(env, "deposit"), user);
        env.events().publish(topics, (asset, amount, opened_at));
    }

    /// Emitted when a staker closes a stake
    ///
    /// - topics - `["withdraw", user: Address]`
    /// - data - `[asset: StakeAsset, payout: i128, fee: i128]`
    pub fn withdraw(env: &Env, user: Address, asset: StakeAsset, payout: i128, fee: i128) {
        let topics = (Symbol::new(env, "withdraw"), user);
        env.events().publish(topics, (asset, payout, fee));
    }

    /// Emitted when the owner sweeps collected fees
    ///
    /// - topics - `["withdraw_owner", owner: Address]`
    /// - data - `[token_amount: i128, native_amount: i128]`
    pub fn withdraw_owner(env: &Env, owner: Address, token_amount: i128, native_amount: i128) {
        let topics = (Symbol::new(env, "withdraw_owner"), owner);
        env.events().publish(topics, (token_amount, native_amount));
    }

    /// Emitted when the reward reserve is topped up
    ///
    /// - topics - `["fund", sender: Address]`
    /// - data - `[token_amount: i128, native_amount: i128]`
    pub fn fund(env: &Env, sender: Address, token_amount: i128, native_amount: i128) {
        let topics = (Symbol::new(env, "fund"), sender);
        env.events().publish(topics, (token_amount, native_amount));
    }
}
