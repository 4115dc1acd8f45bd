use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{EMISSION_STATE_SEED, POOL_SEED};
use crate::error::EmissionError;
use crate::state::EmissionState;

pub fn handle_distribute(ctx: Context<Distribute>, recipient: Pubkey, amount: u64) -> Result<()> {
    // Capture AccountInfos/keys before taking mutable borrows.
    let emission_state_ai = ctx.accounts.emission_state.to_account_info();
    let emission_state_key = ctx.accounts.emission_state.key();
    let emission_state_bump = ctx.bumps.emission_state;
    let pool_key = ctx.accounts.pool_vault.key();

    let st = &ctx.accounts.emission_state;
    require_keys_eq!(
        ctx.accounts.authority.key(),
        st.authority,
        EmissionError::UnauthorizedAuthority
    );
    require_keys_eq!(
        ctx.accounts.recipient_token_account.mint,
        st.mint,
        EmissionError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.recipient_token_account.owner,
        recipient,
        EmissionError::InvalidTokenAccount
    );

    // The vault is readable synchronously, so direct pre-funding transfers count.
    let staged = st.stage_distribution(
        &recipient,
        &[emission_state_key, pool_key],
        amount,
        ctx.accounts.pool_vault.amount,
    )?;
    let mint = st.mint;

    let signer_seeds: &[&[&[u8]]] = &[&[
        EMISSION_STATE_SEED,
        mint.as_ref(),
        &[emission_state_bump],
    ]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.pool_vault.to_account_info(),
                to: ctx.accounts.recipient_token_account.to_account_info(),
                authority: emission_state_ai,
            },
            signer_seeds,
        ),
        amount,
    )
    .map_err(|e| {
        msg!("ledger rejected transfer of {} to {}: {:?}", amount, recipient, e);
        EmissionError::LedgerTransferFailed
    })?;

    ctx.accounts.pool_vault.reload()?;
    require!(
        ctx.accounts.pool_vault.amount == staged.pool_balance_after,
        EmissionError::PoolBalanceMismatch
    );

    let st = &mut ctx.accounts.emission_state;
    st.commit(&staged);

    emit!(TokensDistributed {
        recipient,
        amount,
        minted_before: staged.minted_before,
        minted: st.minted,
        reward_delta: staged.reward_delta,
        reward: st.reward,
        pool_balance: st.pool_balance,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Distribute<'info> {
    #[account(
        mut,
        seeds = [EMISSION_STATE_SEED, emission_state.mint.as_ref()],
        bump
    )]
    pub emission_state: Account<'info, EmissionState>,

    #[account(
        mut,
        seeds = [POOL_SEED, emission_state.key().as_ref()],
        bump,
        constraint = pool_vault.mint == emission_state.mint @ EmissionError::InvalidTokenMint,
    )]
    pub pool_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub recipient_token_account: Account<'info, TokenAccount>,

    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensDistributed {
    pub recipient: Pubkey,
    pub amount: u64,
    pub minted_before: u64,
    pub minted: u64,
    pub reward_delta: u128,
    pub reward: u128,
    pub pool_balance: u64,
}
