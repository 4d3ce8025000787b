use dualstake::{math::safe_math::SafeMath, validate};
use soroban_sdk::{log, Address, Env};

use crate::{
    asset::{AssetTransfer, NativeAsset, TokenAsset},
    errors::ErrorCode,
    math::{compute_withdrawal, Withdrawal},
    profit,
    storage::{clear_stake, get_stake, save_stake, Config, RewardPolicy, StakeRecord},
};

/// Staking state machine for a single asset:
/// `Inactive --deposit--> Active --withdraw--> Inactive`.
pub struct Ledger<A: AssetTransfer> {
    asset: A,
    min_deposit_amount: i128,
    policy: RewardPolicy,
}

impl Ledger<TokenAsset> {
    pub fn token(config: &Config) -> Self {
        Ledger::new(TokenAsset::new(config.token.clone()), config)
    }
}

impl Ledger<NativeAsset> {
    pub fn native(config: &Config) -> Self {
        Ledger::new(NativeAsset::new(config.native.clone()), config)
    }
}

impl<A: AssetTransfer> Ledger<A> {
    pub fn new(asset: A, config: &Config) -> Self {
        Ledger {
            asset,
            min_deposit_amount: config.min_deposit_amount,
            policy: config.policy.clone(),
        }
    }

    pub fn stake(&self, env: &Env, staker: &Address) -> StakeRecord {
        get_stake(env, self.asset.kind(), staker)
    }

    pub fn deposit(
        &self,
        env: &Env,
        sender: &Address,
        amount: i128,
    ) -> Result<StakeRecord, ErrorCode> {
        validate!(
            env,
            amount > 0 && amount >= self.min_deposit_amount,
            ErrorCode::WrongAmount,
            "Stack: Wrong amount: {} below minimum {}",
            amount,
            self.min_deposit_amount
        )?;

        let current = self.stake(env, sender);
        validate!(
            env,
            !current.is_active(),
            ErrorCode::AlreadyStaked,
            "Stack: You already have amount"
        )?;

        // opened_at doubles as the "has a stake" marker, so it must be non-zero
        let opened_at = env.ledger().sequence();
        validate!(
            env,
            opened_at > 0,
            ErrorCode::InvalidLedger,
            "Stack: Invalid ledger: cannot open a stake at sequence {}",
            opened_at
        )?;

        self.asset.check_deposit(env, sender, amount)?;
        self.asset.collect(env, sender, amount);

        let record = StakeRecord::open(amount, opened_at);
        save_stake(env, self.asset.kind(), sender, &record);

        Ok(record)
    }

    pub fn withdraw(&self, env: &Env, sender: &Address) -> Result<Withdrawal, ErrorCode> {
        let record = self.stake(env, sender);
        validate!(
            env,
            record.is_active(),
            ErrorCode::NoActiveStake,
            "Stack: You don't have amount"
        )?;

        let blocks_elapsed = env.ledger().sequence().safe_sub(record.opened_at, env)?;
        let withdrawal = compute_withdrawal(env, &self.policy, record.amount, blocks_elapsed)?;

        log!(
            env,
            "Stake: Withdraw: principal {} after {} ledgers, payout {}, fee {}",
            record.amount,
            blocks_elapsed,
            withdrawal.payout,
            withdrawal.fee
        );

        // record and profit are settled before funds leave the pool
        clear_stake(env, self.asset.kind(), sender);
        profit::credit(env, self.asset.kind(), withdrawal.fee)?;
        self.asset.pay(env, sender, withdrawal.payout);

        Ok(withdrawal)
    }

    /// Tops up the reward reserve. Reserve funds never touch stake records
    /// or owner profit.
    pub fn fund(&self, env: &Env, sender: &Address, amount: i128) {
        if amount > 0 {
            self.asset.top_up(env, sender, amount);
        }
    }

    pub fn reserve(&self, env: &Env) -> i128 {
        self.asset.reserve(env)
    }
}
