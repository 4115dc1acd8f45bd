use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{EMISSION_STATE_SEED, POOL_SEED};
use crate::error::EmissionError;
use crate::state::EmissionState;

pub fn handle_deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
    let st = &ctx.accounts.emission_state;
    require_keys_eq!(
        ctx.accounts.funder_token_account.mint,
        st.mint,
        EmissionError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.funder_token_account.owner,
        ctx.accounts.funder.key(),
        EmissionError::InvalidTokenAccount
    );

    st.check_deposit(ctx.accounts.pool_vault.amount, amount)?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.funder_token_account.to_account_info(),
                to: ctx.accounts.pool_vault.to_account_info(),
                authority: ctx.accounts.funder.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.pool_vault.reload()?;
    let pool_balance = ctx.accounts.pool_vault.amount;
    ctx.accounts.emission_state.pool_balance = pool_balance;

    emit!(TokensDeposited {
        funder: ctx.accounts.funder.key(),
        amount,
        pool_balance,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DepositTokens<'info> {
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
    pub funder_token_account: Account<'info, TokenAccount>,

    pub funder: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensDeposited {
    pub funder: Pubkey,
    pub amount: u64,
    pub pool_balance: u64,
}
