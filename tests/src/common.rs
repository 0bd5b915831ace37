use anchor_lang::{AccountDeserialize, InstructionData, ToAccountMetas};
use anchor_spl::associated_token::get_associated_token_address;
use anchor_spl::token::{Mint, TokenAccount};
use litesvm::types::TransactionResult;
use litesvm::LiteSVM;
use solana_instruction::Instruction;
use solana_keypair::Keypair;
use solana_native_token::LAMPORTS_PER_SOL;
use solana_pubkey::Pubkey;
use solana_signer::Signer;
use solana_transaction::Transaction;
use std::path::PathBuf;
use token_staking::state::StakeRecord;

fn read_program() -> Vec<u8> {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../target/deploy/token_staking.so");
    std::fs::read(&path).unwrap_or_else(|_| panic!("Failed to read program from {:?}", path))
}

// ---------------------------------------------------------------------------
// PDA derivations
//
// Seeds are spelled out as literals so these tests independently pin the
// on-chain addresses the program must keep deriving.
// ---------------------------------------------------------------------------

pub fn token_mint_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"token-mint"], &token_staking::ID)
}

pub fn mint_authority_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"mint-authority"], &token_staking::ID)
}

pub fn staking_authority_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"staking-authority"], &token_staking::ID)
}

pub fn stake_record_pda(user: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[user.as_ref(), b"state_account"], &token_staking::ID)
}

pub fn staking_vault() -> Pubkey {
    get_associated_token_address(&staking_authority_pda().0, &token_mint_pda().0)
}

pub fn user_token_account(user: &Pubkey) -> Pubkey {
    get_associated_token_address(user, &token_mint_pda().0)
}

// ---------------------------------------------------------------------------
// SVM setup and transaction plumbing
// ---------------------------------------------------------------------------

pub fn setup() -> (LiteSVM, Keypair) {
    let mut svm = LiteSVM::new();
    svm.add_program(token_staking::ID, &read_program());

    let payer = Keypair::new();
    svm.airdrop(&payer.pubkey(), 10 * LAMPORTS_PER_SOL).unwrap();

    (svm, payer)
}

pub fn fund_user(svm: &mut LiteSVM) -> Keypair {
    let user = Keypair::new();
    svm.airdrop(&user.pubkey(), 10 * LAMPORTS_PER_SOL).unwrap();
    user
}

pub fn send_instruction(svm: &mut LiteSVM, signer: &Keypair, ix: Instruction) -> TransactionResult {
    let blockhash = svm.latest_blockhash();
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&signer.pubkey()),
        &[signer],
        blockhash,
    );

    svm.send_transaction(tx)
}

// ---------------------------------------------------------------------------
// Instruction builders
// ---------------------------------------------------------------------------

pub fn initialize_mint_ix(payer: &Pubkey, decimals: u8) -> Instruction {
    let accounts = token_staking::accounts::InitializeMint {
        token_mint: token_mint_pda().0,
        mint_authority: mint_authority_pda().0,
        staking_authority: staking_authority_pda().0,
        staking_vault: staking_vault(),
        payer: *payer,
        rent: solana_sdk_ids::sysvar::rent::ID,
        token_program: anchor_spl::token::ID,
        system_program: solana_sdk_ids::system_program::ID,
        associated_token_program: anchor_spl::associated_token::ID,
    };

    Instruction {
        program_id: token_staking::ID,
        accounts: accounts.to_account_metas(None),
        data: token_staking::instruction::InitializeMint { decimals }.data(),
    }
}

pub fn airdrop_ix(user: &Pubkey, amount: u64) -> Instruction {
    let accounts = token_staking::accounts::Airdrop {
        token_mint: token_mint_pda().0,
        mint_authority: mint_authority_pda().0,
        user: *user,
        user_token_account: user_token_account(user),
        rent: solana_sdk_ids::sysvar::rent::ID,
        system_program: solana_sdk_ids::system_program::ID,
        token_program: anchor_spl::token::ID,
        associated_token_program: anchor_spl::associated_token::ID,
    };

    Instruction {
        program_id: token_staking::ID,
        accounts: accounts.to_account_metas(None),
        data: token_staking::instruction::Airdrop { amount }.data(),
    }
}

pub fn stake_ix(user: &Pubkey, amount: u64) -> Instruction {
    let accounts = token_staking::accounts::Stake {
        token_mint: token_mint_pda().0,
        staking_authority: staking_authority_pda().0,
        staking_vault: staking_vault(),
        user: *user,
        user_token_account: user_token_account(user),
        stake_record: stake_record_pda(user).0,
        system_program: solana_sdk_ids::system_program::ID,
        token_program: anchor_spl::token::ID,
        associated_token_program: anchor_spl::associated_token::ID,
    };

    Instruction {
        program_id: token_staking::ID,
        accounts: accounts.to_account_metas(None),
        data: token_staking::instruction::Stake { amount }.data(),
    }
}

pub fn unstake_ix(user: &Pubkey, amount: u64) -> Instruction {
    let accounts = token_staking::accounts::Unstake {
        token_mint: token_mint_pda().0,
        staking_authority: staking_authority_pda().0,
        staking_vault: staking_vault(),
        user: *user,
        user_token_account: user_token_account(user),
        stake_record: stake_record_pda(user).0,
        system_program: solana_sdk_ids::system_program::ID,
        token_program: anchor_spl::token::ID,
        associated_token_program: anchor_spl::associated_token::ID,
    };

    Instruction {
        program_id: token_staking::ID,
        accounts: accounts.to_account_metas(None),
        data: token_staking::instruction::Unstake { amount }.data(),
    }
}

// ---------------------------------------------------------------------------
// Account state readers
// ---------------------------------------------------------------------------

pub fn token_balance(svm: &LiteSVM, address: &Pubkey) -> u64 {
    let account = svm
        .get_account(address)
        .unwrap_or_else(|| panic!("token account {} does not exist", address));

    TokenAccount::try_deserialize(&mut account.data.as_slice())
        .expect("not a token account")
        .amount
}

pub fn mint_supply(svm: &LiteSVM) -> u64 {
    let account = svm
        .get_account(&token_mint_pda().0)
        .expect("mint does not exist");

    Mint::try_deserialize(&mut account.data.as_slice())
        .expect("not a mint account")
        .supply
}

/// Staked amount for a user, 0 if the stake record was never created
pub fn staked_amount(svm: &LiteSVM, user: &Pubkey) -> u64 {
    match svm.get_account(&stake_record_pda(user).0) {
        Some(account) if !account.data.is_empty() => {
            StakeRecord::try_deserialize(&mut account.data.as_slice())
                .expect("not a stake record")
                .amount
        }
        _ => 0,
    }
}
