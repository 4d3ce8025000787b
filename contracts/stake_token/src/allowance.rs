use dualstake::math::safe_math::SafeMath;
use soroban_sdk::{log, panic_with_error, Address, Env};

use crate::{
    errors::TokenError,
    storage_types::{AllowanceDataKey, AllowanceValue, DataKey},
};

/// An expired allowance reads as zero but keeps its expiration ledger.
pub fn read_allowance(env: &Env, from: Address, spender: Address) -> AllowanceValue {
    let key = DataKey::Allowance(AllowanceDataKey { from, spender });
    match env.storage().temporary().get::<_, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger < env.ledger().sequence() => {
            AllowanceValue {
                amount: 0,
                expiration_ledger: allowance.expiration_ledger,
            }
        }
        Some(allowance) => allowance,
        None => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

pub fn write_allowance(
    env: &Env,
    from: Address,
    spender: Address,
    amount: i128,
    expiration_ledger: u32,
) {
    let current_ledger = env.ledger().sequence();
    if amount > 0 && expiration_ledger < current_ledger {
        log!(
            env,
            "Stake token: expiration ledger {} is before the current ledger {}",
            expiration_ledger,
            current_ledger
        );
        panic_with_error!(env, TokenError::InvalidExpiration);
    }

    let key = DataKey::Allowance(AllowanceDataKey { from, spender });
    env.storage().temporary().set(
        &key,
        &AllowanceValue {
            amount,
            expiration_ledger,
        },
    );

    if amount > 0 {
        let live_for = expiration_ledger - current_ledger;
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}

pub fn spend_allowance(env: &Env, from: Address, spender: Address, amount: i128) {
    let allowance = read_allowance(env, from.clone(), spender.clone());
    if allowance.amount < amount {
        log!(
            env,
            "Stake token: allowance {} < amount {}",
            allowance.amount,
            amount
        );
        panic_with_error!(env, TokenError::InsufficientAllowance);
    }

    if amount > 0 {
        let remaining = allowance
            .amount
            .safe_sub(amount, env)
            .unwrap_or_else(|error| panic_with_error!(env, TokenError::from(error)));
        write_allowance(env, from, spender, remaining, allowance.expiration_ledger);
    }
}
