use dualstake::{
    constants::{
        INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
        PERSISTENT_LIFETIME_THRESHOLD,
    },
    validate,
};
use soroban_sdk::{contracttype, log, panic_with_error, Address, Env};

use crate::{
    constants::{
        DEFAULT_FEE_DENOMINATOR, DEFAULT_FEE_NUMERATOR, DEFAULT_REWARD_RATE_DENOMINATOR,
        DEFAULT_REWARD_RATE_NUMERATOR,
    },
    errors::ErrorCode,
};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    Stake(StakeAsset, Address),
    OwnerProfit(StakeAsset),
}

/// The two assets the pool accepts. Each one has its own records and its
/// own owner profit balance.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum StakeAsset {
    Token = 0,
    Native = 1,
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardPolicy {
    /// Reward per closed ledger, as a fraction of the principal
    pub reward_rate_numerator: i128,
    pub reward_rate_denominator: i128,
    /// Share of the gross redeemable value kept as protocol fee
    pub fee_numerator: i128,
    pub fee_denominator: i128,
}

impl RewardPolicy {
    pub fn standard() -> Self {
        RewardPolicy {
            reward_rate_numerator: DEFAULT_REWARD_RATE_NUMERATOR,
            reward_rate_denominator: DEFAULT_REWARD_RATE_DENOMINATOR,
            fee_numerator: DEFAULT_FEE_NUMERATOR,
            fee_denominator: DEFAULT_FEE_DENOMINATOR,
        }
    }

    pub fn validate(&self, env: &Env) -> Result<(), ErrorCode> {
        validate!(
            env,
            self.reward_rate_denominator > 0 && self.fee_denominator > 0,
            ErrorCode::InvalidPolicy,
            "Stack: Invalid reward policy: denominators must be positive"
        )?;
        validate!(
            env,
            self.reward_rate_numerator >= 0 && self.fee_numerator >= 0,
            ErrorCode::InvalidPolicy,
            "Stack: Invalid reward policy: numerators must not be negative"
        )?;
        validate!(
            env,
            self.fee_numerator <= self.fee_denominator,
            ErrorCode::InvalidPolicy,
            "Stack: Invalid reward policy: fee cannot exceed the redeemable value"
        )
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub owner: Address,
    pub token: Address,
    pub native: Address,
    pub min_deposit_amount: i128,
    pub policy: RewardPolicy,
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn get_config(env: &Env) -> Config {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| {
            log!(env, "Stack: Not initialized");
            panic_with_error!(env, ErrorCode::NotInitialized)
        })
}

// ################################################################
//                             Stakes
// ################################################################

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum StakeStatus {
    Inactive = 0,
    Active = 1,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeRecord {
    /// Principal locked by the staker, zero when there is no stake
    pub amount: i128,
    /// Ledger sequence the deposit was made in
    pub opened_at: u32,
    pub status: StakeStatus,
}

impl StakeRecord {
    pub fn inactive() -> Self {
        StakeRecord {
            amount: 0,
            opened_at: 0,
            status: StakeStatus::Inactive,
        }
    }

    pub fn open(amount: i128, ledger: u32) -> Self {
        StakeRecord {
            amount,
            opened_at: ledger,
            status: StakeStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == StakeStatus::Active
    }
}

pub fn get_stake(env: &Env, asset: StakeAsset, staker: &Address) -> StakeRecord {
    let key = DataKey::Stake(asset, staker.clone());
    let stake = match env.storage().persistent().get::<_, StakeRecord>(&key) {
        Some(stake) => stake,
        None => StakeRecord::inactive(),
    };
    env.storage().persistent().has(&key).then(|| {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    });

    stake
}

pub fn save_stake(env: &Env, asset: StakeAsset, staker: &Address, stake: &StakeRecord) {
    let key = DataKey::Stake(asset, staker.clone());
    env.storage().persistent().set(&key, stake);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn clear_stake(env: &Env, asset: StakeAsset, staker: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Stake(asset, staker.clone()));
}

// ################################################################
//                          Owner profit
// ################################################################

pub(crate) fn get_owner_profit(env: &Env, asset: StakeAsset) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::OwnerProfit(asset))
        .unwrap_or(0)
}

pub(crate) fn save_owner_profit(env: &Env, asset: StakeAsset, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::OwnerProfit(asset), &amount);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
