//! Host-agnostic emission scheduler: the on-chain accounting bound to any [`Ledger`].

use anchor_lang::prelude::*;

use crate::error::EmissionError;
use crate::ledger::Ledger;
use crate::state::{EmissionState, EmissionTier, StagedDistribution};

pub struct EmissionScheduler<L: Ledger> {
    ledger: L,
    state: EmissionState,
}

impl<L: Ledger> EmissionScheduler<L> {
    /// Binds a pool account on `ledger` to an emission schedule.
    ///
    /// The pool may be funded before or after construction; every
    /// distribution reads the pool balance from the ledger.
    pub fn new(
        ledger: L,
        pool: Pubkey,
        tiers: Vec<EmissionTier>,
        supply_cap: u64,
    ) -> std::result::Result<Self, EmissionError> {
        let mut state = EmissionState::default();
        // Off-chain there is no separate authority PDA; the pool signs for itself.
        state.configure(Pubkey::default(), pool, pool, tiers, supply_cap)?;
        state.pool_balance = ledger.balance_of(&pool);
        Ok(Self { ledger, state })
    }

    /// Moves `amount` from the pool to `recipient` and accrues tier-weighted reward.
    ///
    /// All-or-nothing: on any error no counter, balance or ledger entry changes.
    /// The returned receipt is informational only; the committed counters are
    /// already applied when it is returned.
    pub fn distribute(
        &mut self,
        recipient: &Pubkey,
        amount: u64,
    ) -> std::result::Result<StagedDistribution, EmissionError> {
        let pool = self.state.pool;
        let pool_balance = self.ledger.balance_of(&pool);
        let staged = self
            .state
            .stage_distribution(recipient, &[pool], amount, pool_balance)?;

        self.ledger
            .transfer(&pool, recipient, amount)
            .map_err(|e| {
                msg!("ledger rejected transfer of {} to {}: {:?}", amount, recipient, e);
                EmissionError::LedgerTransferFailed
            })?;

        self.state.commit(&staged);
        Ok(staged)
    }

    pub fn reward(&self) -> u128 {
        self.state.reward
    }

    pub fn minted(&self) -> u64 {
        self.state.minted
    }

    pub fn pool(&self) -> Pubkey {
        self.state.pool
    }

    /// Current pool balance as recorded by the ledger.
    pub fn pool_balance(&self) -> u64 {
        self.ledger.balance_of(&self.state.pool)
    }

    /// Pool balance as of the last committed distribution.
    pub fn committed_pool_balance(&self) -> u64 {
        self.state.pool_balance
    }

    pub fn supply_cap(&self) -> u64 {
        self.state.supply_cap
    }

    pub fn schedule(&self) -> &[EmissionTier] {
        &self.state.tiers
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }
}
