//! Tiered emission schedule math (exact; no truncation).
//! - tier i covers [upper_{i-1}, upper_i), with upper_{-1} = 0
//! - upper bounds strictly increasing, last tier open-ended (u64::MAX)
//! - reward over [before, after) = sum over tiers of overlap * rate

use crate::constants::{MAX_TIERS, SCHEDULE_HASH_DOMAIN, UNBOUNDED};
use crate::error::EmissionError;
use crate::state::EmissionTier;

pub fn validate_schedule(tiers: &[EmissionTier]) -> Result<(), EmissionError> {
    if tiers.is_empty() {
        return Err(EmissionError::InvalidSchedule);
    }
    if tiers.len() > MAX_TIERS {
        return Err(EmissionError::TooManyTiers);
    }
    let mut prev: Option<u64> = None;
    for t in tiers {
        // A zero-width first tier is rejected along with non-increasing bounds.
        let lower = prev.unwrap_or(0);
        if t.upper_bound <= lower {
            return Err(EmissionError::InvalidSchedule);
        }
        prev = Some(t.upper_bound);
    }
    if prev != Some(UNBOUNDED) {
        return Err(EmissionError::InvalidSchedule);
    }
    Ok(())
}

/// Lower bound (inclusive) of tier `index`.
pub fn tier_lower_bound(tiers: &[EmissionTier], index: usize) -> u64 {
    match index {
        0 => 0,
        i => tiers.get(i - 1).map(|t| t.upper_bound).unwrap_or(UNBOUNDED),
    }
}

/// Index of the tier whose range contains `minted`.
pub fn tier_index_for(tiers: &[EmissionTier], minted: u64) -> Option<usize> {
    tiers.iter().position(|t| minted < t.upper_bound)
}

/// Where `minted` sits in the schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierPosition {
    /// Tier index; equals the tier count once every tier is exhausted.
    pub index: u8,
    pub lower_bound: u64,
    pub rate: u64,
    /// Base units left before the next tier boundary.
    pub remaining: u64,
}

pub fn tier_position(tiers: &[EmissionTier], minted: u64) -> TierPosition {
    match tier_index_for(tiers, minted) {
        Some(i) => {
            let tier = tiers[i];
            TierPosition {
                index: i as u8,
                lower_bound: tier_lower_bound(tiers, i),
                rate: tier.rate,
                remaining: tier.upper_bound - minted,
            }
        }
        // Only reachable at minted == u64::MAX, past every tier.
        None => TierPosition {
            index: tiers.len() as u8,
            lower_bound: tiers.last().map(|t| t.upper_bound).unwrap_or(0),
            rate: 0,
            remaining: 0,
        },
    }
}

/// Reward accrued by moving cumulative minted supply from `before` to `after`.
///
/// Additive over adjacent intervals: `r(a, b) + r(b, c) == r(a, c)`.
pub fn reward_for_interval(
    tiers: &[EmissionTier],
    before: u64,
    after: u64,
) -> Result<u128, EmissionError> {
    if after < before {
        return Err(EmissionError::MathOverflow);
    }
    let mut reward: u128 = 0;
    if after == before {
        return Ok(reward);
    }
    let mut lower: u64 = 0;
    for t in tiers {
        let upper = t.upper_bound;
        if lower >= after {
            break;
        }
        if upper > before {
            let overlap = after
                .min(upper)
                .checked_sub(before.max(lower))
                .ok_or(EmissionError::MathOverflow)?;
            let slice = (overlap as u128)
                .checked_mul(t.rate as u128)
                .ok_or(EmissionError::MathOverflow)?;
            reward = reward
                .checked_add(slice)
                .ok_or(EmissionError::MathOverflow)?;
        }
        lower = upper;
    }
    Ok(reward)
}

/// Commitment over the tier table, pinned at initialization.
pub fn schedule_hash(tiers: &[EmissionTier]) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(SCHEDULE_HASH_DOMAIN);
    hasher.update(&(tiers.len() as u64).to_le_bytes());
    hasher.update(bytemuck::cast_slice(tiers));
    *hasher.finalize().as_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tier() -> Vec<EmissionTier> {
        vec![EmissionTier::new(100, 2), EmissionTier::new(UNBOUNDED, 1)]
    }

    #[test]
    fn crossing_one_boundary_splits_reward() {
        let tiers = two_tier();
        // 10 units at rate 2, 10 units at rate 1
        assert_eq!(reward_for_interval(&tiers, 90, 110).unwrap(), 30);
    }

    #[test]
    fn crossing_many_boundaries() {
        let tiers = vec![
            EmissionTier::new(10, 5),
            EmissionTier::new(20, 3),
            EmissionTier::new(30, 0),
            EmissionTier::new(UNBOUNDED, 1),
        ];
        // [5,10)*5 + [10,20)*3 + [20,30)*0 + [30,35)*1
        assert_eq!(reward_for_interval(&tiers, 5, 35).unwrap(), 25 + 30 + 0 + 5);
    }

    #[test]
    fn interval_ending_on_boundary_stays_in_lower_tier() {
        let tiers = two_tier();
        assert_eq!(reward_for_interval(&tiers, 0, 100).unwrap(), 200);
        assert_eq!(reward_for_interval(&tiers, 100, 101).unwrap(), 1);
    }

    #[test]
    fn reward_is_additive_over_splits() {
        let tiers = vec![
            EmissionTier::new(7, 11),
            EmissionTier::new(50, 4),
            EmissionTier::new(UNBOUNDED, 1),
        ];
        let whole = reward_for_interval(&tiers, 3, 97).unwrap();
        for mid in [3u64, 6, 7, 8, 49, 50, 51, 96, 97] {
            let split = reward_for_interval(&tiers, 3, mid).unwrap()
                + reward_for_interval(&tiers, mid, 97).unwrap();
            assert_eq!(split, whole, "split at {mid}");
        }
    }

    #[test]
    fn empty_and_reversed_intervals() {
        let tiers = two_tier();
        assert_eq!(reward_for_interval(&tiers, 42, 42).unwrap(), 0);
        assert!(matches!(
            reward_for_interval(&tiers, 43, 42),
            Err(EmissionError::MathOverflow)
        ));
    }

    #[test]
    fn full_range_at_max_rate_fits_u128() {
        let tiers = vec![EmissionTier::new(UNBOUNDED, u64::MAX)];
        let r = reward_for_interval(&tiers, 0, u64::MAX).unwrap();
        assert_eq!(r, (u64::MAX as u128) * (u64::MAX as u128));
    }

    #[test]
    fn validate_rejects_bad_shapes() {
        assert!(validate_schedule(&two_tier()).is_ok());
        assert!(matches!(
            validate_schedule(&[]),
            Err(EmissionError::InvalidSchedule)
        ));
        // last tier must be open-ended
        assert!(matches!(
            validate_schedule(&[EmissionTier::new(100, 1)]),
            Err(EmissionError::InvalidSchedule)
        ));
        // non-increasing bounds
        assert!(matches!(
            validate_schedule(&[
                EmissionTier::new(100, 1),
                EmissionTier::new(100, 1),
                EmissionTier::new(UNBOUNDED, 1),
            ]),
            Err(EmissionError::InvalidSchedule)
        ));
        // zero-width first tier
        assert!(matches!(
            validate_schedule(&[EmissionTier::new(0, 1), EmissionTier::new(UNBOUNDED, 1)]),
            Err(EmissionError::InvalidSchedule)
        ));
        let mut long: Vec<EmissionTier> = (1..=MAX_TIERS as u64)
            .map(|i| EmissionTier::new(i * 10, 1))
            .collect();
        long.push(EmissionTier::new(UNBOUNDED, 0));
        assert!(matches!(
            validate_schedule(&long),
            Err(EmissionError::TooManyTiers)
        ));
    }

    #[test]
    fn tier_lookup() {
        let tiers = two_tier();
        assert_eq!(tier_index_for(&tiers, 0), Some(0));
        assert_eq!(tier_index_for(&tiers, 99), Some(0));
        assert_eq!(tier_index_for(&tiers, 100), Some(1));
        assert_eq!(tier_index_for(&tiers, u64::MAX), None);
        assert_eq!(tier_lower_bound(&tiers, 0), 0);
        assert_eq!(tier_lower_bound(&tiers, 1), 100);
    }

    #[test]
    fn tier_position_at_boundaries() {
        let tiers = vec![
            EmissionTier::new(100, 5),
            EmissionTier::new(250, 3),
            EmissionTier::new(UNBOUNDED, 1),
        ];
        assert_eq!(
            tier_position(&tiers, 0),
            TierPosition { index: 0, lower_bound: 0, rate: 5, remaining: 100 }
        );
        assert_eq!(
            tier_position(&tiers, 99),
            TierPosition { index: 0, lower_bound: 0, rate: 5, remaining: 1 }
        );
        // exactly on a boundary belongs to the upper tier
        assert_eq!(
            tier_position(&tiers, 100),
            TierPosition { index: 1, lower_bound: 100, rate: 3, remaining: 150 }
        );
        assert_eq!(
            tier_position(&tiers, 250),
            TierPosition { index: 2, lower_bound: 250, rate: 1, remaining: UNBOUNDED - 250 }
        );
        assert_eq!(
            tier_position(&tiers, u64::MAX - 1),
            TierPosition { index: 2, lower_bound: 250, rate: 1, remaining: 1 }
        );
    }

    #[test]
    fn tier_position_past_every_tier() {
        let tiers = two_tier();
        assert_eq!(
            tier_position(&tiers, u64::MAX),
            TierPosition { index: 2, lower_bound: UNBOUNDED, rate: 0, remaining: 0 }
        );
    }

    #[test]
    fn schedule_hash_binds_every_field() {
        let base = two_tier();
        let h = schedule_hash(&base);
        assert_eq!(h, schedule_hash(&two_tier()));

        let mut rate_changed = base.clone();
        rate_changed[0].rate = 3;
        assert_ne!(h, schedule_hash(&rate_changed));

        let mut bound_changed = base;
        bound_changed[0].upper_bound = 101;
        assert_ne!(h, schedule_hash(&bound_changed));
    }
}
