use soroban_sdk::{log, panic_with_error, Address, Env};

use crate::{errors::TokenError, storage_types::DataKey};

pub fn read_administrator(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| {
            log!(env, "Stake token: Admin not set");
            panic_with_error!(env, TokenError::NotInitialized)
        })
}

pub fn write_administrator(env: &Env, id: &Address) {
    env.storage().instance().set(&DataKey::Admin, id);
}
