extern crate std;

use pretty_assertions::assert_eq;
use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation, Events, Ledger},
    Address, IntoVal, Symbol, TryFromVal,
};

use super::setup::{Fixture, MIN_DEPOSIT, NATIVE_RESERVE, START_LEDGER, TOKEN_RESERVE};
use crate::{
    errors::ErrorCode,
    storage::{StakeAsset, StakeRecord, StakeStatus},
};

#[test]
fn initializes_with_minimum_deposit() {
    let fixture = Fixture::new();

    assert_eq!(fixture.stake.min_deposit_amount(), MIN_DEPOSIT);
    assert_eq!(fixture.stake.token(), fixture.token.address);
    assert_eq!(fixture.stake.native(), fixture.native.address);
    assert_eq!(fixture.stake.owner(), fixture.owner);
}

#[test]
fn deposit_records_amount_ledger_and_status() {
    let fixture = Fixture::new();
    fixture.mint_and_approve(&fixture.caller, 1_000);

    let record = fixture.stake.deposit(&fixture.caller, &1_000);

    let expected = StakeRecord {
        amount: 1_000,
        opened_at: START_LEDGER,
        status: StakeStatus::Active,
    };
    assert_eq!(record, expected);
    assert_eq!(fixture.stake.stakes_t(&fixture.caller), expected);
    assert_eq!(
        fixture.stake.stakes_e(&fixture.caller),
        StakeRecord::inactive()
    );
}

#[test]
fn deposit_moves_exact_amount_into_pool() {
    let fixture = Fixture::new();
    fixture.mint_and_approve(&fixture.caller, 1_000);

    fixture.stake.deposit(&fixture.caller, &1_000);

    assert_eq!(
        fixture.token.token.balance(&fixture.stake.address),
        TOKEN_RESERVE + 1_000
    );
    assert_eq!(fixture.token.token.balance(&fixture.caller), 0);
    assert_eq!(
        fixture
            .token
            .token
            .allowance(&fixture.caller, &fixture.stake.address),
        0
    );
}

#[test]
fn deposit_publishes_event() {
    let fixture = Fixture::new();
    fixture.mint_and_approve(&fixture.caller, 1_000);

    fixture.stake.deposit(&fixture.caller, &1_000);

    let (contract, topics, data) = fixture.env.events().all().last().unwrap();
    assert_eq!(contract, fixture.stake.address);

    let name = Symbol::try_from_val(&fixture.env, &topics.get(0).unwrap()).unwrap();
    let user = Address::try_from_val(&fixture.env, &topics.get(1).unwrap()).unwrap();
    assert_eq!(name, Symbol::new(&fixture.env, "deposit"));
    assert_eq!(user, fixture.caller);

    let data = <(StakeAsset, i128, u32)>::try_from_val(&fixture.env, &data).unwrap();
    assert_eq!(data, (StakeAsset::Token, 1_000, START_LEDGER));
}

#[test]
fn deposit_twice_fails_already_staked() {
    let fixture = Fixture::new();
    fixture.mint_and_approve(&fixture.caller, 2_000);

    fixture.stake.deposit(&fixture.caller, &1_000);

    assert_eq!(
        fixture.stake.try_deposit(&fixture.caller, &1_000),
        Err(Ok(ErrorCode::AlreadyStaked))
    );
    assert_eq!(fixture.token.token.balance(&fixture.caller), 1_000);
}

#[test]
fn deposit_below_minimum_fails_wrong_amount() {
    let fixture = Fixture::new();
    fixture.mint_and_approve(&fixture.caller, 10);

    assert_eq!(
        fixture.stake.try_deposit(&fixture.caller, &10),
        Err(Ok(ErrorCode::WrongAmount))
    );
    assert_eq!(
        fixture.stake.stakes_t(&fixture.caller),
        StakeRecord::inactive()
    );
}

#[test]
fn deposit_without_funds_fails() {
    let fixture = Fixture::new();
    fixture.approve(&fixture.caller, 1_000);

    assert_eq!(
        fixture.stake.try_deposit(&fixture.caller, &1_000),
        Err(Ok(ErrorCode::InsufficientFunds))
    );
}

#[test]
fn deposit_without_allowance_fails() {
    let fixture = Fixture::new();
    fixture.token.admin.mint(&fixture.caller, &1_000);

    assert_eq!(
        fixture.stake.try_deposit(&fixture.caller, &1_000),
        Err(Ok(ErrorCode::InsufficientAllowance))
    );
}

#[test]
fn deposit_with_partial_allowance_fails() {
    let fixture = Fixture::new();
    fixture.token.admin.mint(&fixture.caller, &1_000);
    fixture.approve(&fixture.caller, 999);

    assert_eq!(
        fixture.stake.try_deposit(&fixture.caller, &1_000),
        Err(Ok(ErrorCode::InsufficientAllowance))
    );
    assert_eq!(fixture.token.token.balance(&fixture.caller), 1_000);
}

#[test]
fn deposit_ether_records_amount_ledger_and_status() {
    let fixture = Fixture::new();
    fixture.mint_native(&fixture.caller, 1_000);

    fixture.stake.deposit_ether(&fixture.caller, &1_000);

    assert_eq!(
        fixture.stake.stakes_e(&fixture.caller),
        StakeRecord {
            amount: 1_000,
            opened_at: START_LEDGER,
            status: StakeStatus::Active,
        }
    );
    assert_eq!(
        fixture.stake.stakes_t(&fixture.caller),
        StakeRecord::inactive()
    );
}

#[test]
fn deposit_ether_moves_exact_amount_into_pool() {
    let fixture = Fixture::new();
    fixture.mint_native(&fixture.caller, 1_000);

    fixture.stake.deposit_ether(&fixture.caller, &1_000);

    assert_eq!(
        fixture.native.token.balance(&fixture.stake.address),
        NATIVE_RESERVE + 1_000
    );
    assert_eq!(fixture.native.token.balance(&fixture.caller), 0);
}

#[test]
fn deposit_ether_authorizes_the_native_transfer() {
    let fixture = Fixture::new();
    fixture.mint_native(&fixture.caller, 1_000);

    fixture.stake.deposit_ether(&fixture.caller, &1_000);

    assert_eq!(
        fixture.env.auths(),
        [(
            fixture.caller.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    fixture.stake.address.clone(),
                    Symbol::new(&fixture.env, "deposit_ether"),
                    (&fixture.caller, 1_000i128).into_val(&fixture.env),
                )),
                sub_invocations: std::vec![AuthorizedInvocation {
                    function: AuthorizedFunction::Contract((
                        fixture.native.address.clone(),
                        symbol_short!("transfer"),
                        (&fixture.caller, &fixture.stake.address, 1_000i128)
                            .into_val(&fixture.env),
                    )),
                    sub_invocations: std::vec![],
                }],
            },
        )]
    );
}

#[test]
fn deposit_ether_twice_fails_already_staked() {
    let fixture = Fixture::new();
    fixture.mint_native(&fixture.caller, 2_000);

    fixture.stake.deposit_ether(&fixture.caller, &1_000);

    assert_eq!(
        fixture.stake.try_deposit_ether(&fixture.caller, &1_000),
        Err(Ok(ErrorCode::AlreadyStaked))
    );
}

#[test]
fn deposit_ether_below_minimum_fails_wrong_amount() {
    let fixture = Fixture::new();
    fixture.mint_native(&fixture.caller, 10);

    assert_eq!(
        fixture.stake.try_deposit_ether(&fixture.caller, &10),
        Err(Ok(ErrorCode::WrongAmount))
    );
}

#[test]
fn deposit_ether_without_funds_is_rejected_by_the_asset() {
    let fixture = Fixture::new();

    assert!(fixture
        .stake
        .try_deposit_ether(&fixture.caller, &1_000)
        .is_err());
    assert_eq!(
        fixture.stake.stakes_e(&fixture.caller),
        StakeRecord::inactive()
    );
}

#[test]
fn zero_and_negative_deposits_fail_wrong_amount() {
    let fixture = Fixture::new();

    assert_eq!(
        fixture.stake.try_deposit(&fixture.caller, &0),
        Err(Ok(ErrorCode::WrongAmount))
    );
    assert_eq!(
        fixture.stake.try_deposit_ether(&fixture.caller, &-1_000),
        Err(Ok(ErrorCode::WrongAmount))
    );
}

#[test]
fn token_and_native_stakes_are_independent() {
    let fixture = Fixture::new();
    fixture.mint_and_approve(&fixture.caller, 1_000);
    fixture.mint_native(&fixture.caller, 500);

    fixture.stake.deposit(&fixture.caller, &1_000);
    fixture.stake.deposit_ether(&fixture.caller, &500);

    assert_eq!(fixture.stake.stakes_t(&fixture.caller).amount, 1_000);
    assert_eq!(fixture.stake.stakes_e(&fixture.caller).amount, 500);
}

#[test]
fn every_staker_holds_one_stake_per_asset() {
    let fixture = Fixture::new();
    let other = Address::generate(&fixture.env);
    fixture.mint_and_approve(&fixture.caller, 1_000);
    fixture.mint_and_approve(&other, 2_000);

    fixture.stake.deposit(&fixture.caller, &1_000);
    fixture.stake.deposit(&other, &1_000);

    assert_eq!(
        fixture.stake.try_deposit(&other, &1_000),
        Err(Ok(ErrorCode::AlreadyStaked))
    );
    assert_eq!(fixture.stake.stakes_t(&fixture.caller).amount, 1_000);
    assert_eq!(fixture.stake.stakes_t(&other).amount, 1_000);
}

#[test]
fn deposit_at_ledger_zero_fails_invalid_ledger() {
    let fixture = Fixture::new();
    fixture.mint_and_approve(&fixture.caller, 1_000);
    fixture.env.ledger().with_mut(|li| {
        li.sequence_number = 0;
    });

    assert_eq!(
        fixture.stake.try_deposit(&fixture.caller, &1_000),
        Err(Ok(ErrorCode::InvalidLedger))
    );
    assert_eq!(
        fixture.stake.stakes_t(&fixture.caller),
        StakeRecord::inactive()
    );
    assert_eq!(fixture.token.token.balance(&fixture.caller), 1_000);
}
