use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("4Y6Rdcas5WKGSTUB8PKVqM9QGkFxkbqMvDhDbj88Tb6r");

#[program]
pub mod token_staking {
    use super::*;

    /// Create the token mint and the staking vault
    ///
    /// One-time setup. The mint lives at a fixed PDA under the keyless mint
    /// authority, the vault under the keyless staking authority; calling this
    /// a second time fails with the accounts already in use.
    ///
    /// # Arguments
    /// * `ctx` - Context containing all required accounts
    /// * `decimals` - Decimal precision for the new mint
    ///
    pub fn initialize_mint(ctx: Context<InitializeMint>, decimals: u8) -> Result<()> {
        instructions::initialize_mint::handler_initialize_mint(ctx, decimals)
    }

    /// Mint tokens directly to the caller
    ///
    /// Open faucet: any amount, any caller, balances accumulate across calls.
    ///
    /// # Arguments
    /// * `ctx` - Context containing all required accounts
    /// * `amount` - Amount of tokens to mint
    ///
    pub fn airdrop(ctx: Context<Airdrop>, amount: u64) -> Result<()> {
        instructions::airdrop::handler_airdrop(ctx, amount)
    }

    /// Stake tokens into the vault
    ///
    /// # Arguments
    /// * `ctx` - Context containing all required accounts
    /// * `amount` - Amount of tokens to stake
    ///
    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        instructions::stake::handler_stake(ctx, amount)
    }

    /// Unstake tokens from the vault
    ///
    /// # Arguments
    /// * `ctx` - Context containing all required accounts
    /// * `amount` - Amount of tokens to unstake
    ///
    pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
        instructions::unstake::handler_unstake(ctx, amount)
    }
}
