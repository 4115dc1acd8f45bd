//! Fungible-token ledger interface consumed by the off-chain scheduler.
//!
//! On-chain the ledger is the SPL Token program (reached by CPI); this trait
//! lets the same accounting run against any balance store.

use std::collections::BTreeMap;

use anchor_lang::prelude::Pubkey;

/// Failure reported by a ledger transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferError {
    InsufficientFunds { balance: u64, requested: u64 },
    BalanceOverflow,
}

/// Balance store with atomic transfers and conserved total supply.
pub trait Ledger {
    /// Moves `amount` from `from` to `to`; either fully applies or leaves balances untouched.
    fn transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<(), TransferError>;

    fn balance_of(&self, account: &Pubkey) -> u64;
}

/// Deterministic in-memory ledger for simulation and tests.
#[derive(Clone, Debug, Default)]
pub struct InMemoryLedger {
    balances: BTreeMap<Pubkey, u64>,
    total_supply: u64,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits freshly issued tokens (genesis allocation).
    pub fn issue(&mut self, account: &Pubkey, amount: u64) -> Result<(), TransferError> {
        let supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(TransferError::BalanceOverflow)?;
        let balance = self
            .balance_of(account)
            .checked_add(amount)
            .ok_or(TransferError::BalanceOverflow)?;
        self.balances.insert(*account, balance);
        self.total_supply = supply;
        Ok(())
    }

    pub fn total_supply(&self) -> u64 {
        self.total_supply
    }
}

impl Ledger for InMemoryLedger {
    fn transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<(), TransferError> {
        let from_balance = self.balance_of(from);
        if amount > from_balance {
            return Err(TransferError::InsufficientFunds {
                balance: from_balance,
                requested: amount,
            });
        }
        if from == to {
            return Ok(());
        }
        let to_balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(TransferError::BalanceOverflow)?;
        self.balances.insert(*from, from_balance - amount);
        self.balances.insert(*to, to_balance);
        Ok(())
    }

    fn balance_of(&self, account: &Pubkey) -> u64 {
        self.balances.get(account).copied().unwrap_or(0)
    }
}
