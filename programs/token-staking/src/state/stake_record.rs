use anchor_lang::prelude::*;

use crate::error::StakingError;

/// Per-user staked amount
/// PDA: [owner, "state_account"]
///
/// The owner is implicit in the address derivation; the account body is a
/// single running total that must always match the tokens this user holds
/// in the staking vault.
#[account]
#[derive(Default)]
pub struct StakeRecord {
    /// Amount of tokens currently held in the staking vault for this user
    pub amount: u64,
}

impl StakeRecord {
    /// Account size for allocation
    pub const SIZE: usize = 8 + // discriminator
        8; // amount

    /// Record tokens moving into the staking vault
    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;

        Ok(())
    }

    /// Record tokens leaving the staking vault
    ///
    /// Rejects any debit larger than the current staked amount; callers rely
    /// on this running before the vault transfer so a failed debit leaves
    /// every account untouched.
    pub fn debit(&mut self, amount: u64) -> Result<()> {
        require!(self.amount >= amount, StakingError::InsufficientStake);

        self.amount = self
            .amount
            .checked_sub(amount)
            .ok_or(StakingError::MathUnderflow)?;

        Ok(())
    }
}
