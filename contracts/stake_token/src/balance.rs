use dualstake::{
    constants::{BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD},
    math::safe_math::SafeMath,
};
use soroban_sdk::{log, panic_with_error, Address, Env};

use crate::{errors::TokenError, storage_types::DataKey};

pub fn read_balance(env: &Env, addr: Address) -> i128 {
    let key = DataKey::Balance(addr);
    if let Some(balance) = env.storage().persistent().get::<DataKey, i128>(&key) {
        env.storage()
            .persistent()
            .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
        balance
    } else {
        0
    }
}

fn write_balance(env: &Env, addr: Address, amount: i128) {
    let key = DataKey::Balance(addr);
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn receive_balance(env: &Env, addr: Address, amount: i128) {
    let balance = read_balance(env, addr.clone());
    let updated = balance
        .safe_add(amount, env)
        .unwrap_or_else(|error| panic_with_error!(env, TokenError::from(error)));
    write_balance(env, addr, updated);
}

pub fn spend_balance(env: &Env, addr: Address, amount: i128) {
    let balance = read_balance(env, addr.clone());
    if balance < amount {
        log!(env, "Stake token: balance {} < amount {}", balance, amount);
        panic_with_error!(env, TokenError::InsufficientBalance);
    }
    write_balance(env, addr, balance - amount);
}
