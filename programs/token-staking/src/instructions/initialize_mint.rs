use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{MINT_AUTHORITY_SEED, STAKING_AUTHORITY_SEED, TOKEN_MINT_SEED};

/// Create the token mint and the staking vault
///
/// # Arguments
/// * `ctx` - The context containing all accounts
/// * `decimals` - Decimal precision for the new mint
///
/// # Accounts
/// * `token_mint` - The mint PDA to create, controlled by the mint authority
/// * `mint_authority` - Keyless PDA that signs all future mint operations
/// * `staking_authority` - Keyless PDA that owns the staking vault
/// * `staking_vault` - Associated token account custodying all staked tokens
/// * `payer` - Funds the account allocations (signer)
///
#[derive(Accounts)]
#[instruction(decimals: u8)]
pub struct InitializeMint<'info> {
    /// Token mint PDA
    ///
    /// `init` at a fixed derived address can only succeed once; a second
    /// call fails before any state is written.
    #[account(
        init,
        payer = payer,
        seeds = [TOKEN_MINT_SEED],
        bump,
        mint::decimals = decimals,
        mint::authority = mint_authority
    )]
    pub token_mint: Account<'info, Mint>,

    /// CHECK: keyless PDA, used only as the mint's signing authority
    #[account(seeds = [MINT_AUTHORITY_SEED], bump)]
    pub mint_authority: UncheckedAccount<'info>,

    /// CHECK: keyless PDA, used only as the vault's owner and signing authority
    #[account(seeds = [STAKING_AUTHORITY_SEED], bump)]
    pub staking_authority: UncheckedAccount<'info>,

    /// Vault custodying staked tokens, created empty
    #[account(
        init,
        payer = payer,
        associated_token::mint = token_mint,
        associated_token::authority = staking_authority
    )]
    pub staking_vault: Account<'info, TokenAccount>,

    /// Pays rent for the mint and vault
    #[account(mut)]
    pub payer: Signer<'info>,

    pub rent: Sysvar<'info, Rent>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn handler_initialize_mint(ctx: Context<InitializeMint>, decimals: u8) -> Result<()> {
    msg!(
        "Created token mint {} with {} decimals",
        ctx.accounts.token_mint.key(),
        decimals
    );
    msg!("Created staking vault {}", ctx.accounts.staking_vault.key());

    Ok(())
}
