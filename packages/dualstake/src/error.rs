use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    MathError = 1,
}

pub type DualStakeResult<T = ()> = core::result::Result<T, ErrorCode>;
