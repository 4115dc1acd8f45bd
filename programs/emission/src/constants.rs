//! Program-wide constants.

/// Max tiers stored in the emission schedule.
pub const MAX_TIERS: usize = 16;

/// Upper bound of the open-ended final tier.
pub const UNBOUNDED: u64 = u64::MAX;

/// Domain tag mixed into the schedule commitment hash.
pub const SCHEDULE_HASH_DOMAIN: &[u8] = b"emission-schedule-v1";

/// PDA seed for the emission state account (per mint).
pub const EMISSION_STATE_SEED: &[u8] = b"emission_state";

/// PDA seed for the pool vault token account.
pub const POOL_SEED: &[u8] = b"pool";
