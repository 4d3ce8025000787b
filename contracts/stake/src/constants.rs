// Reward accrues linearly per closed ledger: 1000 held for 28 ledgers grosses 1200
pub const DEFAULT_REWARD_RATE_NUMERATOR: i128 = 1;
pub const DEFAULT_REWARD_RATE_DENOMINATOR: i128 = 140;

// Protocol fee taken from the gross redeemable value
pub const DEFAULT_FEE_NUMERATOR: i128 = 3;
pub const DEFAULT_FEE_DENOMINATOR: i128 = 100;
