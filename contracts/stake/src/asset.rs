use dualstake::validate;
use soroban_sdk::{token, Address, Env};

use crate::{errors::ErrorCode, storage::StakeAsset};

/// Moves one asset between stakers and the pool held by this contract.
pub trait AssetTransfer {
    fn kind(&self) -> StakeAsset;

    fn address(&self) -> &Address;

    /// Preconditions the pool can check before pulling a deposit in.
    fn check_deposit(&self, env: &Env, from: &Address, amount: i128) -> Result<(), ErrorCode>;

    /// Pulls a staker's deposit into the pool.
    fn collect(&self, env: &Env, from: &Address, amount: i128);

    /// Adds to the reward reserve. The sender authorises the transfer itself.
    fn top_up(&self, env: &Env, from: &Address, amount: i128) {
        token::Client::new(env, self.address()).transfer(
            from,
            &env.current_contract_address(),
            &amount,
        );
    }

    fn pay(&self, env: &Env, to: &Address, amount: i128) {
        token::Client::new(env, self.address()).transfer(
            &env.current_contract_address(),
            to,
            &amount,
        );
    }

    fn reserve(&self, env: &Env) -> i128 {
        token::Client::new(env, self.address()).balance(&env.current_contract_address())
    }
}

/// The stakeable fungible token. Deposits go through an allowance granted
/// to this contract.
pub struct TokenAsset {
    address: Address,
}

impl TokenAsset {
    pub fn new(address: Address) -> Self {
        TokenAsset { address }
    }
}

impl AssetTransfer for TokenAsset {
    fn kind(&self) -> StakeAsset {
        StakeAsset::Token
    }

    fn address(&self) -> &Address {
        &self.address
    }

    fn check_deposit(&self, env: &Env, from: &Address, amount: i128) -> Result<(), ErrorCode> {
        let token_client = token::Client::new(env, &self.address);

        let balance = token_client.balance(from);
        validate!(
            env,
            balance >= amount,
            ErrorCode::InsufficientFunds,
            "Stack: Not enough funds: balance {} < amount {}",
            balance,
            amount
        )?;

        let allowance = token_client.allowance(from, &env.current_contract_address());
        validate!(
            env,
            allowance >= amount,
            ErrorCode::InsufficientAllowance,
            "Stack: Not enough allowance: allowance {} < amount {}",
            allowance,
            amount
        )
    }

    fn collect(&self, env: &Env, from: &Address, amount: i128) {
        let pool = env.current_contract_address();
        token::Client::new(env, &self.address).transfer_from(&pool, from, &pool, &amount);
    }
}

/// The chain's native currency, reached through its asset contract. The
/// staker authorises the transfer directly and the asset contract enforces
/// that the funds exist.
pub struct NativeAsset {
    address: Address,
}

impl NativeAsset {
    pub fn new(address: Address) -> Self {
        NativeAsset { address }
    }
}

impl AssetTransfer for NativeAsset {
    fn kind(&self) -> StakeAsset {
        StakeAsset::Native
    }

    fn address(&self) -> &Address {
        &self.address
    }

    fn check_deposit(&self, _env: &Env, _from: &Address, _amount: i128) -> Result<(), ErrorCode> {
        Ok(())
    }

    fn collect(&self, env: &Env, from: &Address, amount: i128) {
        self.top_up(env, from, amount);
    }
}
