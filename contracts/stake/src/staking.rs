use soroban_sdk::{Address, Env};

use crate::{
    errors::ErrorCode,
    math::Withdrawal,
    msg::{ConfigResponse, ReservesResponse},
    storage::StakeRecord,
};

pub trait StakeTrait {
    // ################################################################
    //                             Users
    // ################################################################

    fn deposit(env: Env, sender: Address, amount: i128) -> Result<StakeRecord, ErrorCode>;

    fn deposit_ether(env: Env, sender: Address, amount: i128) -> Result<StakeRecord, ErrorCode>;

    fn withdraw(env: Env, sender: Address) -> Result<Withdrawal, ErrorCode>;

    fn withdraw_ether(env: Env, sender: Address) -> Result<Withdrawal, ErrorCode>;

    fn fund(
        env: Env,
        sender: Address,
        token_amount: i128,
        ether_amount: i128,
    ) -> Result<(), ErrorCode>;

    // ################################################################
    //                             Owner
    // ################################################################

    fn withdraw_owner(
        env: Env,
        sender: Address,
        token_amount: i128,
        ether_amount: i128,
    ) -> Result<(), ErrorCode>;

    // ################################################################
    //                             Queries
    // ################################################################

    fn min_deposit_amount(env: Env) -> i128;

    fn stakes_t(env: Env, address: Address) -> StakeRecord;

    fn stakes_e(env: Env, address: Address) -> StakeRecord;

    fn owner_profit_t(env: Env) -> i128;

    fn owner_profit_e(env: Env) -> i128;

    fn token(env: Env) -> Address;

    fn native(env: Env) -> Address;

    fn owner(env: Env) -> Address;

    fn query_config(env: Env) -> ConfigResponse;

    fn query_reserves(env: Env) -> ReservesResponse;
}
