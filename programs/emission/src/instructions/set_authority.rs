use anchor_lang::prelude::*;

use crate::constants::EMISSION_STATE_SEED;
use crate::error::EmissionError;
use crate::state::EmissionState;

pub fn handle_set_authority(ctx: Context<SetAuthority>, new_authority: Pubkey) -> Result<()> {
    require!(new_authority != Pubkey::default(), EmissionError::InvalidPubkey);

    let emission_state_key = ctx.accounts.emission_state.key();
    let st = &mut ctx.accounts.emission_state;
    require_keys_eq!(
        ctx.accounts.authority.key(),
        st.authority,
        EmissionError::UnauthorizedAuthority
    );

    // Program-owned accounts cannot sign.
    require!(new_authority != emission_state_key, EmissionError::InvalidConfig);
    require!(new_authority != st.pool, EmissionError::InvalidConfig);
    require!(new_authority != crate::ID, EmissionError::InvalidConfig);

    let old = st.authority;
    st.authority = new_authority;

    emit!(AuthoritySet {
        old_authority: old,
        new_authority,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetAuthority<'info> {
    #[account(
        mut,
        seeds = [EMISSION_STATE_SEED, emission_state.mint.as_ref()],
        bump
    )]
    pub emission_state: Account<'info, EmissionState>,

    pub authority: Signer<'info>,
}

#[event]
pub struct AuthoritySet {
    pub old_authority: Pubkey,
    pub new_authority: Pubkey,
}
