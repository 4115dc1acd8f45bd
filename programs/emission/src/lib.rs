use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod ledger;
pub mod scheduler;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::EmissionTier;

declare_id!("icC263fsF69T3K9sBpyqwwkjA34LpfHqu8ZXywvijgv");

#[program]
pub mod emission {
    use super::*;

    pub fn initialize_emission(
        ctx: Context<InitializeEmission>,
        tiers: Vec<EmissionTier>,
        supply_cap: u64,
    ) -> Result<()> {
        instructions::initialize_emission::handle_initialize_emission(ctx, tiers, supply_cap)
    }

    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens::handle_deposit_tokens(ctx, amount)
    }

    pub fn distribute(ctx: Context<Distribute>, recipient: Pubkey, amount: u64) -> Result<()> {
        instructions::distribute::handle_distribute(ctx, recipient, amount)
    }

    pub fn set_authority(ctx: Context<SetAuthority>, new_authority: Pubkey) -> Result<()> {
        instructions::set_authority::handle_set_authority(ctx, new_authority)
    }

    pub fn reward(ctx: Context<ReadCounters>) -> Result<u128> {
        instructions::read_counters::handle_reward(ctx)
    }

    pub fn minted(ctx: Context<ReadCounters>) -> Result<u64> {
        instructions::read_counters::handle_minted(ctx)
    }

    pub fn emit_emission_quote(ctx: Context<EmitEmissionQuote>) -> Result<()> {
        instructions::emit_emission_quote::handle_emit_emission_quote(ctx)
    }
}
