use anchor_lang::prelude::*;

/// Custom error codes for the emission program.
#[error_code]
pub enum EmissionError {
    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Invalid recipient: null account or the pool itself")]
    InvalidRecipient,

    #[msg("Insufficient pool balance")]
    InsufficientPoolBalance,

    #[msg("Ledger rejected the transfer")]
    LedgerTransferFailed,

    #[msg("Distribution would exceed the supply cap")]
    SupplyCapExceeded,

    #[msg("Invalid emission schedule")]
    InvalidSchedule,

    #[msg("Too many tiers in emission schedule")]
    TooManyTiers,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Unauthorized: authority signature required")]
    UnauthorizedAuthority,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Deposit would exceed the remaining supply cap")]
    OverDeposit,

    #[msg("Pool balance does not match tracked accounting")]
    PoolBalanceMismatch,

    #[msg("Math overflow")]
    MathOverflow,
}
