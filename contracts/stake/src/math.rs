use dualstake::math::safe_math::SafeMath;
use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{contracttype, log, Env};

use crate::{errors::ErrorCode, storage::RewardPolicy};

/// Split of a stake's redeemable value at withdrawal time.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawal {
    /// Principal plus accrued reward
    pub gross: i128,
    /// Sent back to the staker
    pub payout: i128,
    /// Credited to the owner profit of the asset
    pub fee: i128,
}

fn mul_div_floor(env: &Env, x: i128, y: i128, denominator: i128) -> Result<i128, ErrorCode> {
    x.fixed_mul_floor(y, denominator).ok_or_else(|| {
        log!(env, "Stack: Math error: {} * {} / {}", x, y, denominator);
        ErrorCode::MathError
    })
}

/// Reward grows linearly with the ledgers elapsed since the deposit. The fee
/// is taken first and the payout is whatever is left, so the two always add
/// up to the gross value.
pub fn compute_withdrawal(
    env: &Env,
    policy: &RewardPolicy,
    principal: i128,
    blocks_elapsed: u32,
) -> Result<Withdrawal, ErrorCode> {
    let rate = i128::from(blocks_elapsed).safe_mul(policy.reward_rate_numerator, env)?;
    let reward = mul_div_floor(env, principal, rate, policy.reward_rate_denominator)?;
    let gross = principal.safe_add(reward, env)?;

    let fee = mul_div_floor(env, gross, policy.fee_numerator, policy.fee_denominator)?;
    let payout = gross.safe_sub(fee, env)?;

    Ok(Withdrawal { gross, payout, fee })
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn calibration_point() {
        let env = Env::default();
        let withdrawal = compute_withdrawal(&env, &RewardPolicy::standard(), 1_000, 28).unwrap();

        assert_eq!(
            withdrawal,
            Withdrawal {
                gross: 1_200,
                payout: 1_164,
                fee: 36,
            }
        );
    }

    #[test]
    fn no_elapsed_ledgers_only_charges_the_fee() {
        let env = Env::default();
        let withdrawal = compute_withdrawal(&env, &RewardPolicy::standard(), 1_000, 0).unwrap();

        assert_eq!(withdrawal.gross, 1_000);
        assert_eq!(withdrawal.fee, 30);
        assert_eq!(withdrawal.payout, 970);
    }

    #[test_case(100, 1 ; "minimum deposit after one ledger")]
    #[test_case(1_007, 3 ; "fee truncates")]
    #[test_case(12_345, 139 ; "just under the full rate period")]
    #[test_case(999_999_999, 17_280 ; "one day of ledgers")]
    #[test_case(1, 1 ; "dust")]
    fn fee_and_payout_add_up_to_gross(principal: i128, blocks_elapsed: u32) {
        let env = Env::default();
        let withdrawal =
            compute_withdrawal(&env, &RewardPolicy::standard(), principal, blocks_elapsed)
                .unwrap();

        assert_eq!(withdrawal.payout + withdrawal.fee, withdrawal.gross);
        assert!(withdrawal.fee >= 0);
        assert!(withdrawal.payout >= 0);
        assert!(withdrawal.gross >= principal);
    }

    #[test]
    fn conservation_holds_across_a_sweep_of_inputs() {
        let env = Env::default();
        let policy = RewardPolicy::standard();

        for principal in [100_i128, 101, 333, 1_000, 7_919, 65_537] {
            for blocks_elapsed in (0_u32..500).step_by(13) {
                let withdrawal =
                    compute_withdrawal(&env, &policy, principal, blocks_elapsed).unwrap();
                assert_eq!(withdrawal.payout + withdrawal.fee, withdrawal.gross);
            }
        }
    }

    #[test]
    fn custom_policy() {
        let env = Env::default();
        let policy = RewardPolicy {
            reward_rate_numerator: 1,
            reward_rate_denominator: 100,
            fee_numerator: 0,
            fee_denominator: 1,
        };
        let withdrawal = compute_withdrawal(&env, &policy, 1_000, 10).unwrap();

        assert_eq!(
            withdrawal,
            Withdrawal {
                gross: 1_100,
                payout: 1_100,
                fee: 0,
            }
        );
    }

    #[test]
    fn overflow_is_reported() {
        let env = Env::default();
        let result = compute_withdrawal(&env, &RewardPolicy::standard(), i128::MAX / 2, u32::MAX);

        assert_eq!(result, Err(ErrorCode::MathError));
    }
}
