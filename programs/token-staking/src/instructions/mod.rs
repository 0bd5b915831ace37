// =============================================================================
// Instructions Module - Token Staking
// =============================================================================

pub mod airdrop;
pub mod initialize_mint;
pub mod stake;
pub mod unstake;

pub use airdrop::*;
pub use initialize_mint::*;
pub use stake::*;
pub use unstake::*;
