use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    NegativeAmount = 1,
    InsufficientBalance = 2,
    InsufficientAllowance = 3,
    InvalidExpiration = 4,
    InvalidDecimal = 5,
    NotInitialized = 6,
    MathError = 7,
}

impl From<dualstake::error::ErrorCode> for TokenError {
    fn from(error: dualstake::error::ErrorCode) -> Self {
        match error {
            dualstake::error::ErrorCode::MathError => TokenError::MathError,
        }
    }
}
