#![no_std]

mod admin;
mod allowance;
mod balance;
mod contract;
pub mod errors;
mod metadata;
mod storage_types;


pub use crate::contract::{StakeToken, StakeTokenClient};
