use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

use crate::constants::{MINT_AUTHORITY_SEED, TOKEN_MINT_SEED};

/// Mint tokens directly to the caller
///
/// # Arguments
/// * `ctx` - The context containing all accounts
/// * `amount` - Amount of tokens to mint, any value including 0
///
/// # Flow
/// 1. Mint `amount` to the user's token account, mint authority PDA signing
/// 2. Repeated calls accumulate into the same associated account
///
#[derive(Accounts)]
pub struct Airdrop<'info> {
    /// Token mint, supply increases by `amount`
    #[account(mut, seeds = [TOKEN_MINT_SEED], bump)]
    pub token_mint: Account<'info, Mint>,

    /// CHECK: keyless PDA, signs the mint CPI
    #[account(seeds = [MINT_AUTHORITY_SEED], bump)]
    pub mint_authority: UncheckedAccount<'info>,

    /// User receiving the tokens, pays for account creation
    #[account(mut)]
    pub user: Signer<'info>,

    /// User's token account (created if first airdrop)
    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = token_mint,
        associated_token::authority = user
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    pub rent: Sysvar<'info, Rent>,
    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn handler_airdrop(ctx: Context<Airdrop>, amount: u64) -> Result<()> {
    msg!("Airdropping {} tokens", amount);

    // Mint authority PDA signs
    let seeds = &[MINT_AUTHORITY_SEED, &[ctx.bumps.mint_authority]];
    let signer_seeds = &[&seeds[..]];

    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.token_mint.to_account_info(),
                to: ctx.accounts.user_token_account.to_account_info(),
                authority: ctx.accounts.mint_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    ctx.accounts.user_token_account.reload()?;

    msg!(
        "Airdrop complete. User balance: {}",
        ctx.accounts.user_token_account.amount
    );

    Ok(())
}
