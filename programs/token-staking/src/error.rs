use anchor_lang::prelude::*;

#[error_code]
pub enum StakingError {
    // Amount Errors
    #[msg("Insufficient token balance to stake")]
    InsufficientFunds,

    #[msg("Insufficient staked balance")]
    InsufficientStake,

    // Math Errors
    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Math underflow")]
    MathUnderflow,
}
