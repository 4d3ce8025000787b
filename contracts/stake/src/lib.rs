#![no_std]

mod asset;
mod constants;
mod contract;
pub mod errors;
mod events;
mod ledger;
mod math;
pub mod msg;
mod profit;
mod staking;
pub mod storage;

pub use contract::*;
pub use math::Withdrawal;
