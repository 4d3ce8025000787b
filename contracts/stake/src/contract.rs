use dualstake::constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use soroban_sdk::{contract, contractimpl, contractmeta, log, panic_with_error, Address, Env};

use crate::{
    errors::ErrorCode,
    events::StakeEvents,
    ledger::Ledger,
    math::Withdrawal,
    msg::{ConfigResponse, ReservesResponse},
    profit,
    staking::StakeTrait,
    storage::{get_config, save_config, Config, RewardPolicy, StakeAsset, StakeRecord},
};

contractmeta!(
    key = "Description",
    val = "Staking pool for a fungible token and the native currency"
);

#[contract]
pub struct Stake;

#[contractimpl]
impl Stake {
    pub fn __constructor(
        env: Env,
        owner: Address,
        token: Address,
        native: Address,
        min_deposit_amount: i128,
        policy: Option<RewardPolicy>,
    ) {
        if min_deposit_amount < 0 {
            log!(&env, "Stack: Wrong amount: minimum deposit cannot be negative");
            panic_with_error!(&env, ErrorCode::WrongAmount);
        }

        let policy = policy.unwrap_or_else(RewardPolicy::standard);
        if let Err(error) = policy.validate(&env) {
            log!(&env, "Stack: Invalid reward policy");
            panic_with_error!(&env, error);
        }

        save_config(
            &env,
            &Config {
                owner: owner.clone(),
                token: token.clone(),
                native: native.clone(),
                min_deposit_amount,
                policy,
            },
        );

        StakeEvents::initialize(&env, owner, token, native, min_deposit_amount);
    }
}

#[contractimpl]
impl StakeTrait for Stake {
    // ################################################################
    //                             Users
    // ################################################################

    fn deposit(env: Env, sender: Address, amount: i128) -> Result<StakeRecord, ErrorCode> {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let record = Ledger::token(&config).deposit(&env, &sender, amount)?;

        StakeEvents::deposit(&env, sender, StakeAsset::Token, amount, record.opened_at);

        Ok(record)
    }

    fn deposit_ether(env: Env, sender: Address, amount: i128) -> Result<StakeRecord, ErrorCode> {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let record = Ledger::native(&config).deposit(&env, &sender, amount)?;

        StakeEvents::deposit(&env, sender, StakeAsset::Native, amount, record.opened_at);

        Ok(record)
    }

    fn withdraw(env: Env, sender: Address) -> Result<Withdrawal, ErrorCode> {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let withdrawal = Ledger::token(&config).withdraw(&env, &sender)?;

        StakeEvents::withdraw(
            &env,
            sender,
            StakeAsset::Token,
            withdrawal.payout,
            withdrawal.fee,
        );

        Ok(withdrawal)
    }

    fn withdraw_ether(env: Env, sender: Address) -> Result<Withdrawal, ErrorCode> {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let withdrawal = Ledger::native(&config).withdraw(&env, &sender)?;

        StakeEvents::withdraw(
            &env,
            sender,
            StakeAsset::Native,
            withdrawal.payout,
            withdrawal.fee,
        );

        Ok(withdrawal)
    }

    fn fund(
        env: Env,
        sender: Address,
        token_amount: i128,
        ether_amount: i128,
    ) -> Result<(), ErrorCode> {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        if token_amount < 0 || ether_amount < 0 {
            log!(&env, "Stack: Wrong amount: negative fund amount");
            return Err(ErrorCode::WrongAmount);
        }

        let config = get_config(&env);
        Ledger::token(&config).fund(&env, &sender, token_amount);
        Ledger::native(&config).fund(&env, &sender, ether_amount);

        StakeEvents::fund(&env, sender, token_amount, ether_amount);

        Ok(())
    }

    // ################################################################
    //                             Owner
    // ################################################################

    fn withdraw_owner(
        env: Env,
        sender: Address,
        token_amount: i128,
        ether_amount: i128,
    ) -> Result<(), ErrorCode> {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        profit::withdraw_owner(&env, &config, &sender, token_amount, ether_amount)?;

        StakeEvents::withdraw_owner(&env, sender, token_amount, ether_amount);

        Ok(())
    }

    // ################################################################
    //                             Queries
    // ################################################################

    fn min_deposit_amount(env: Env) -> i128 {
        get_config(&env).min_deposit_amount
    }

    fn stakes_t(env: Env, address: Address) -> StakeRecord {
        Ledger::token(&get_config(&env)).stake(&env, &address)
    }

    fn stakes_e(env: Env, address: Address) -> StakeRecord {
        Ledger::native(&get_config(&env)).stake(&env, &address)
    }

    fn owner_profit_t(env: Env) -> i128 {
        profit::balance(&env, StakeAsset::Token)
    }

    fn owner_profit_e(env: Env) -> i128 {
        profit::balance(&env, StakeAsset::Native)
    }

    fn token(env: Env) -> Address {
        get_config(&env).token
    }

    fn native(env: Env) -> Address {
        get_config(&env).native
    }

    fn owner(env: Env) -> Address {
        get_config(&env).owner
    }

    fn query_config(env: Env) -> ConfigResponse {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        ConfigResponse {
            config: get_config(&env),
        }
    }

    fn query_reserves(env: Env) -> ReservesResponse {
        let config = get_config(&env);
        ReservesResponse {
            token: Ledger::token(&config).reserve(&env),
            native: Ledger::native(&config).reserve(&env),
        }
    }
}
