use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{STAKE_RECORD_SEED, STAKING_AUTHORITY_SEED, TOKEN_MINT_SEED};
use crate::error::StakingError;
use crate::state::StakeRecord;

/// Stake tokens into the vault
///
/// # Arguments
/// * `ctx` - The context containing all accounts
/// * `amount` - Amount of tokens to stake
///
/// # Flow
/// 1. Validate the user holds at least `amount`
/// 2. Transfer `amount` from the user's token account to the vault
/// 3. Credit the user's stake record (created at 0 on first stake)
///
/// All three updates land in one transaction or not at all.
///
#[derive(Accounts)]
pub struct Stake<'info> {
    /// Token mint
    #[account(seeds = [TOKEN_MINT_SEED], bump)]
    pub token_mint: Account<'info, Mint>,

    /// CHECK: keyless PDA, owns the staking vault
    #[account(seeds = [STAKING_AUTHORITY_SEED], bump)]
    pub staking_authority: UncheckedAccount<'info>,

    /// Vault receiving the staked tokens
    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = staking_authority
    )]
    pub staking_vault: Account<'info, TokenAccount>,

    /// User staking their tokens, pays for record creation
    #[account(mut)]
    pub user: Signer<'info>,

    /// User's token account (source of the staked tokens)
    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = user
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// User's stake record (created if first stake)
    #[account(
        init_if_needed,
        payer = user,
        space = StakeRecord::SIZE,
        seeds = [user.key().as_ref(), STAKE_RECORD_SEED],
        bump
    )]
    pub stake_record: Account<'info, StakeRecord>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn handler_stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
    // Validate before touching any balance
    require!(
        ctx.accounts.user_token_account.amount >= amount,
        StakingError::InsufficientFunds
    );

    // Transfer from user to vault, user signs
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.user_token_account.to_account_info(),
                to: ctx.accounts.staking_vault.to_account_info(),
                authority: ctx.accounts.user.to_account_info(),
            },
        ),
        amount,
    )?;

    let stake_record = &mut ctx.accounts.stake_record;
    stake_record.credit(amount)?;

    msg!(
        "Staked {} tokens. User total staked: {}",
        amount,
        stake_record.amount
    );

    Ok(())
}
