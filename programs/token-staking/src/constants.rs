// =============================================================================
// Token Staking Constants
// =============================================================================

// PDA Seeds
pub const TOKEN_MINT_SEED: &[u8] = b"token-mint";
pub const MINT_AUTHORITY_SEED: &[u8] = b"mint-authority";
pub const STAKING_AUTHORITY_SEED: &[u8] = b"staking-authority";

// Stake record PDA is derived as [user, STAKE_RECORD_SEED], user key first.
// Existing stake records depend on this exact ordering.
pub const STAKE_RECORD_SEED: &[u8] = b"state_account";
