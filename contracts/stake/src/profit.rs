use dualstake::{safe_decrement, safe_increment, validate};
use soroban_sdk::{Address, Env};

use crate::{
    asset::{AssetTransfer, NativeAsset, TokenAsset},
    errors::ErrorCode,
    storage::{get_owner_profit, save_owner_profit, Config, StakeAsset},
};

pub fn balance(env: &Env, asset: StakeAsset) -> i128 {
    get_owner_profit(env, asset)
}

/// Adds a withdrawal fee to the owner profit of the asset.
pub fn credit(env: &Env, asset: StakeAsset, fee: i128) -> Result<i128, ErrorCode> {
    let mut profit = get_owner_profit(env, asset);
    safe_increment!(env, profit, fee);
    save_owner_profit(env, asset, profit);

    Ok(profit)
}

pub fn ensure_available(env: &Env, asset: StakeAsset, amount: i128) -> Result<(), ErrorCode> {
    let available = get_owner_profit(env, asset);
    validate!(
        env,
        amount <= available,
        ErrorCode::InsufficientProfit,
        "Stack: Not enought profit: requested {} > available {}",
        amount,
        available
    )
}

pub fn debit(env: &Env, asset: StakeAsset, amount: i128) -> Result<i128, ErrorCode> {
    ensure_available(env, asset, amount)?;

    let mut profit = get_owner_profit(env, asset);
    safe_decrement!(env, profit, amount);
    save_owner_profit(env, asset, profit);

    Ok(profit)
}

/// Sweeps collected fees of both assets to the owner in one call. A zero
/// amount leaves that asset untouched. Both requests are checked before any
/// funds move.
pub fn withdraw_owner(
    env: &Env,
    config: &Config,
    sender: &Address,
    token_amount: i128,
    native_amount: i128,
) -> Result<(), ErrorCode> {
    validate!(
        env,
        *sender == config.owner,
        ErrorCode::Unauthorized,
        "Stack: You are not the owner"
    )?;
    validate!(
        env,
        token_amount >= 0 && native_amount >= 0,
        ErrorCode::WrongAmount,
        "Stack: Wrong amount: negative sweep amount"
    )?;

    ensure_available(env, StakeAsset::Token, token_amount)?;
    ensure_available(env, StakeAsset::Native, native_amount)?;

    let token = TokenAsset::new(config.token.clone());
    let native = NativeAsset::new(config.native.clone());
    sweep(env, &token, &config.owner, token_amount)?;
    sweep(env, &native, &config.owner, native_amount)
}

fn sweep(
    env: &Env,
    asset: &impl AssetTransfer,
    to: &Address,
    amount: i128,
) -> Result<(), ErrorCode> {
    if amount == 0 {
        return Ok(());
    }

    debit(env, asset.kind(), amount)?;
    asset.pay(env, to, amount);

    Ok(())
}
