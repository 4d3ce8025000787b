use soroban_sdk::contracttype;

use crate::storage::Config;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigResponse {
    pub config: Config,
}

/// Balances the pool currently holds: principals, undrained owner profit
/// and the reward reserve together.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReservesResponse {
    pub token: i128,
    pub native: i128,
}
