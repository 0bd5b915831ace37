use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{STAKE_RECORD_SEED, STAKING_AUTHORITY_SEED, TOKEN_MINT_SEED};
use crate::error::StakingError;
use crate::state::StakeRecord;

/// Unstake tokens from the vault
///
/// # Arguments
/// * `ctx` - The context containing all accounts
/// * `amount` - Amount of tokens to unstake
///
/// # Flow
/// 1. Validate the user has at least `amount` staked
/// 2. Transfer `amount` from the vault back to the user, staking authority
///    PDA signing
/// 3. Debit the user's stake record
///
#[derive(Accounts)]
pub struct Unstake<'info> {
    /// Token mint
    #[account(seeds = [TOKEN_MINT_SEED], bump)]
    pub token_mint: Account<'info, Mint>,

    /// CHECK: keyless PDA, owns the staking vault and signs the transfer
    #[account(seeds = [STAKING_AUTHORITY_SEED], bump)]
    pub staking_authority: UncheckedAccount<'info>,

    /// Vault releasing the staked tokens
    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = staking_authority
    )]
    pub staking_vault: Account<'info, TokenAccount>,

    /// User unstaking their tokens
    #[account(mut)]
    pub user: Signer<'info>,

    /// User's token account (destination of the unstaked tokens)
    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = user
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// User's stake record
    #[account(
        mut,
        seeds = [user.key().as_ref(), STAKE_RECORD_SEED],
        bump
    )]
    pub stake_record: Account<'info, StakeRecord>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn handler_unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
    // Validate before touching any balance
    require!(
        ctx.accounts.stake_record.amount >= amount,
        StakingError::InsufficientStake
    );

    // Transfer from vault back to user, staking authority PDA signs
    let seeds = &[STAKING_AUTHORITY_SEED, &[ctx.bumps.staking_authority]];
    let signer_seeds = &[&seeds[..]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.staking_vault.to_account_info(),
                to: ctx.accounts.user_token_account.to_account_info(),
                authority: ctx.accounts.staking_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    let stake_record = &mut ctx.accounts.stake_record;
    stake_record.debit(amount)?;

    msg!(
        "Unstaked {} tokens. User total staked: {}",
        amount,
        stake_record.amount
    );

    Ok(())
}
