use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};

/// One entry of the emission schedule.
///
/// A tier covers `[lower, upper_bound)` of cumulative minted supply, where
/// `lower` is the previous tier's `upper_bound` (0 for the first tier).
/// Every base unit minted inside the tier accrues `rate` reward units.
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable,
)]
#[repr(C)]
pub struct EmissionTier {
    /// Exclusive cumulative-minted threshold.
    pub upper_bound: u64,
    /// Reward units per base unit minted inside this tier.
    pub rate: u64,
}

impl EmissionTier {
    pub const SIZE: usize = 8 + 8;

    pub const fn new(upper_bound: u64, rate: u64) -> Self {
        Self { upper_bound, rate }
    }
}
