use anchor_lang::prelude::*;

use crate::constants::MAX_TIERS;
use crate::error::EmissionError;
use crate::state::EmissionTier;
use crate::utils::schedule;

/// Emission state PDA (one per mint).
#[account]
#[derive(Default)]
pub struct EmissionState {
    /// Token mint emitted by this pool.
    pub mint: Pubkey,
    /// Authority allowed to distribute.
    pub authority: Pubkey,
    /// Pool vault token account.
    pub pool: Pubkey,
    /// Hard cap on cumulative minted supply.
    pub supply_cap: u64,
    /// Cumulative amount ever distributed (monotonic).
    pub minted: u64,
    /// Cumulative tier-weighted reward (monotonic).
    pub reward: u128,
    /// Pool balance as of the last committed distribution or deposit.
    pub pool_balance: u64,
    /// blake3 commitment over `tiers`, fixed at initialization.
    pub schedule_hash: [u8; 32],
    /// Ascending by `upper_bound`; immutable after initialization.
    pub tiers: Vec<EmissionTier>,
}

impl EmissionState {
    pub const SIZE: usize =
        32 + // mint
        32 + // authority
        32 + // pool
        8 +  // supply_cap
        8 +  // minted
        16 + // reward
        8 +  // pool_balance
        32 + // schedule_hash
        4 + MAX_TIERS * EmissionTier::SIZE; // tiers (vec header + entries)

    /// Validates and installs the schedule; counters start at zero.
    pub fn configure(
        &mut self,
        mint: Pubkey,
        authority: Pubkey,
        pool: Pubkey,
        tiers: Vec<EmissionTier>,
        supply_cap: u64,
    ) -> std::result::Result<(), EmissionError> {
        if supply_cap == 0 {
            return Err(EmissionError::InvalidConfig);
        }
        if authority == Pubkey::default() || pool == Pubkey::default() {
            return Err(EmissionError::InvalidPubkey);
        }
        schedule::validate_schedule(&tiers)?;

        self.mint = mint;
        self.authority = authority;
        self.pool = pool;
        self.supply_cap = supply_cap;
        self.minted = 0;
        self.reward = 0;
        self.pool_balance = 0;
        self.schedule_hash = schedule::schedule_hash(&tiers);
        self.tiers = tiers;
        Ok(())
    }

    /// Computes every effect of distributing `amount` without mutating state.
    ///
    /// `pool_accounts` are the identities that must never receive from the
    /// pool (the pool itself and its authority PDA).
    pub fn stage_distribution(
        &self,
        recipient: &Pubkey,
        pool_accounts: &[Pubkey],
        amount: u64,
        pool_balance: u64,
    ) -> std::result::Result<StagedDistribution, EmissionError> {
        if amount == 0 {
            return Err(EmissionError::InvalidAmount);
        }
        if *recipient == Pubkey::default() || pool_accounts.contains(recipient) {
            return Err(EmissionError::InvalidRecipient);
        }
        if amount > pool_balance {
            return Err(EmissionError::InsufficientPoolBalance);
        }

        let before = self.minted;
        let after = before
            .checked_add(amount)
            .ok_or(EmissionError::MathOverflow)?;
        if after > self.supply_cap {
            return Err(EmissionError::SupplyCapExceeded);
        }

        if schedule::schedule_hash(&self.tiers) != self.schedule_hash {
            return Err(EmissionError::InvalidSchedule);
        }
        let reward_delta = schedule::reward_for_interval(&self.tiers, before, after)?;
        let reward_after = self
            .reward
            .checked_add(reward_delta)
            .ok_or(EmissionError::MathOverflow)?;

        Ok(StagedDistribution {
            recipient: *recipient,
            amount,
            minted_before: before,
            minted_after: after,
            reward_delta,
            reward_after,
            pool_balance_after: pool_balance - amount,
        })
    }

    /// Applies a staged distribution once the ledger transfer is confirmed.
    pub fn commit(&mut self, staged: &StagedDistribution) {
        self.minted = staged.minted_after;
        self.reward = staged.reward_after;
        self.pool_balance = staged.pool_balance_after;
    }

    /// Checks a deposit against the remaining cap; returns the vault balance after it.
    ///
    /// Tokens beyond the remaining cap could never be distributed.
    pub fn check_deposit(
        &self,
        vault_amount: u64,
        amount: u64,
    ) -> std::result::Result<u64, EmissionError> {
        if amount == 0 {
            return Err(EmissionError::InvalidAmount);
        }
        let post = vault_amount
            .checked_add(amount)
            .ok_or(EmissionError::MathOverflow)?;
        if post > self.remaining_cap() {
            return Err(EmissionError::OverDeposit);
        }
        Ok(post)
    }

    /// Amount the pool may still emit before hitting the supply cap.
    pub fn remaining_cap(&self) -> u64 {
        self.supply_cap.saturating_sub(self.minted)
    }
}

/// Effects of one distribution, computed before any mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StagedDistribution {
    pub recipient: Pubkey,
    pub amount: u64,
    pub minted_before: u64,
    pub minted_after: u64,
    pub reward_delta: u128,
    pub reward_after: u128,
    pub pool_balance_after: u64,
}
