use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{EMISSION_STATE_SEED, POOL_SEED};
use crate::state::{EmissionState, EmissionTier};

pub fn handle_initialize_emission(
    ctx: Context<InitializeEmission>,
    tiers: Vec<EmissionTier>,
    supply_cap: u64,
) -> Result<()> {
    let mint = ctx.accounts.mint.key();
    let authority = ctx.accounts.authority.key();
    let pool = ctx.accounts.pool_vault.key();

    let st = &mut ctx.accounts.emission_state;
    st.configure(mint, authority, pool, tiers, supply_cap)?;

    msg!(
        "emission initialized: mint={} tiers={} supply_cap={}",
        mint,
        st.tiers.len(),
        supply_cap
    );
    emit!(EmissionInitialized {
        mint,
        authority,
        pool,
        supply_cap,
        tier_count: st.tiers.len() as u8,
        schedule_hash: st.schedule_hash,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeEmission<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + EmissionState::SIZE,
        seeds = [EMISSION_STATE_SEED, mint.key().as_ref()],
        bump
    )]
    pub emission_state: Account<'info, EmissionState>,

    #[account(
        init,
        payer = authority,
        token::mint = mint,
        token::authority = emission_state,
        seeds = [POOL_SEED, emission_state.key().as_ref()],
        bump
    )]
    pub pool_vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct EmissionInitialized {
    pub mint: Pubkey,
    pub authority: Pubkey,
    pub pool: Pubkey,
    pub supply_cap: u64,
    pub tier_count: u8,
    pub schedule_hash: [u8; 32],
}
