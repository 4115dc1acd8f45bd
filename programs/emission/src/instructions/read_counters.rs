use anchor_lang::prelude::*;

use crate::constants::EMISSION_STATE_SEED;
use crate::state::EmissionState;

pub fn handle_reward(ctx: Context<ReadCounters>) -> Result<u128> {
    Ok(ctx.accounts.emission_state.reward)
}

pub fn handle_minted(ctx: Context<ReadCounters>) -> Result<u64> {
    Ok(ctx.accounts.emission_state.minted)
}

#[derive(Accounts)]
pub struct ReadCounters<'info> {
    #[account(seeds = [EMISSION_STATE_SEED, emission_state.mint.as_ref()], bump)]
    pub emission_state: Account<'info, EmissionState>,
}
