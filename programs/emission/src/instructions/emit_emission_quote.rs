use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{EMISSION_STATE_SEED, POOL_SEED};
use crate::error::EmissionError;
use crate::state::EmissionState;
use crate::utils::schedule;

pub fn handle_emit_emission_quote(ctx: Context<EmitEmissionQuote>) -> Result<()> {
    let st = &ctx.accounts.emission_state;
    let position = schedule::tier_position(&st.tiers, st.minted);

    emit!(EmissionQuote {
        minted: st.minted,
        reward: st.reward,
        pool_balance: ctx.accounts.pool_vault.amount,
        remaining_cap: st.remaining_cap(),
        tier_index: position.index,
        tier_lower_bound: position.lower_bound,
        tier_rate: position.rate,
        tier_remaining: position.remaining,
        schedule_hash: st.schedule_hash,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitEmissionQuote<'info> {
    #[account(seeds = [EMISSION_STATE_SEED, emission_state.mint.as_ref()], bump)]
    pub emission_state: Account<'info, EmissionState>,

    #[account(
        seeds = [POOL_SEED, emission_state.key().as_ref()],
        bump,
        constraint = pool_vault.mint == emission_state.mint @ EmissionError::InvalidTokenMint,
    )]
    pub pool_vault: Account<'info, TokenAccount>,
}

#[event]
pub struct EmissionQuote {
    pub minted: u64,
    pub reward: u128,
    pub pool_balance: u64,
    pub remaining_cap: u64,
    pub tier_index: u8,
    pub tier_lower_bound: u64,
    pub tier_rate: u64,
    pub tier_remaining: u64,
    pub schedule_hash: [u8; 32],
}
