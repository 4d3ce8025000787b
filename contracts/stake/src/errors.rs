use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    WrongAmount = 1,
    AlreadyStaked = 2,
    InsufficientFunds = 3,
    InsufficientAllowance = 4,
    NoActiveStake = 5,
    Unauthorized = 6,
    InsufficientProfit = 7,
    InvalidPolicy = 8,
    MathError = 9,
    NotInitialized = 10,
    InvalidLedger = 11,
}

impl ErrorCode {
    /// Revert reason reported to callers, kept stable across releases.
    pub fn reason(&self) -> &'static str {
        match self {
            ErrorCode::WrongAmount => "Stack: Wrong amount",
            ErrorCode::AlreadyStaked => "Stack: You already have amount",
            ErrorCode::InsufficientFunds => "Stack: Not enough funds",
            ErrorCode::InsufficientAllowance => "Stack: Not enough allowance",
            ErrorCode::NoActiveStake => "Stack: You don't have amount",
            ErrorCode::Unauthorized => "Stack: You are not the owner",
            ErrorCode::InsufficientProfit => "Stack: Not enought profit",
            ErrorCode::InvalidPolicy => "Stack: Invalid reward policy",
            ErrorCode::MathError => "Stack: Math error",
            ErrorCode::NotInitialized => "Stack: Not initialized",
            ErrorCode::InvalidLedger => "Stack: Invalid ledger",
        }
    }
}

impl From<dualstake::error::ErrorCode> for ErrorCode {
    fn from(error: dualstake::error::ErrorCode) -> Self {
        match error {
            dualstake::error::ErrorCode::MathError => ErrorCode::MathError,
        }
    }
}
