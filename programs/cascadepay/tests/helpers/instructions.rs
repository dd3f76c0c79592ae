//! Instruction builders for Mollusk tests
//!
//! NOTE: This is written for mollusk-svm 0.5.1 with solana-sdk 2.2
//! All imports from solana_sdk::*, not modular crates

use {
    solana_sdk::{
        instruction::{AccountMeta, Instruction},
        pubkey::Pubkey,
        system_program,
    },
    spl_associated_token_account,
};

/// Program ID - must match lib.rs
pub const PROGRAM_ID: Pubkey = solana_sdk::pubkey!("Bi1y2G3hteJwbeQk7QAW9Uk7Qq2h9bPbDYhPCKSuE2W2");

/// Protocol fee wallet - must match constants.rs
pub const PROTOCOL_WALLET: Pubkey =
    solana_sdk::pubkey!("2zMEvEkyQKTRjiGkwYPXjPsJUp8eR1rVjoYQ7PzVVZnP");

// Anchor discriminators (first 8 bytes of sha256("global:function_name"))
// These must match the IDL/program
pub const DISCRIMINATOR_CREATE_SPLIT_CONFIG: [u8; 8] = [0x80, 0x2a, 0x3c, 0x6a, 0x04, 0xe9, 0x12, 0xbe];
pub const DISCRIMINATOR_EXECUTE_SPLIT: [u8; 8] = [0x06, 0x2d, 0xab, 0x28, 0x31, 0x81, 0x17, 0x59];
pub const DISCRIMINATOR_UPDATE_SPLIT_CONFIG: [u8; 8] = [0x2f, 0x67, 0x4a, 0xaa, 0x37, 0xfb, 0x82, 0x92];
pub const DISCRIMINATOR_CLOSE_SPLIT_CONFIG: [u8; 8] = [0xaa, 0xca, 0xfc, 0x5c, 0xc4, 0xa0, 0xf7, 0xe5];
pub const DISCRIMINATOR_CLAIM_UNCLAIMED: [u8; 8] = [0x53, 0xb4, 0x45, 0xd9, 0xb0, 0xf6, 0x23, 0xaf];

/// Recipient input for instructions
#[derive(Clone, Debug)]
pub struct RecipientInput {
    pub address: Pubkey,
    pub percentage_bps: u16,
}

/// Derive split config PDA
pub fn derive_split_config(authority: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[b"split_config", authority.as_ref(), mint.as_ref()],
        &PROGRAM_ID,
    )
}

/// Derive vault address (ATA owned by split_config)
///
/// The vault is an Associated Token Account with split_config as the authority,
/// NOT a custom PDA. This matches the CreateSplitConfig context:
/// `associated_token::authority = split_config`
pub fn derive_vault(split_config: &Pubkey, mint: &Pubkey) -> Pubkey {
    spl_associated_token_account::get_associated_token_address(split_config, mint)
}

/// Derive the protocol fee ATA for a mint
pub fn derive_protocol_ata(mint: &Pubkey) -> Pubkey {
    spl_associated_token_account::get_associated_token_address(&PROTOCOL_WALLET, mint)
}

fn serialize_recipients(data: &mut Vec<u8>, recipients: &[RecipientInput]) {
    // Recipients vector: 4-byte length prefix + each recipient
    data.extend_from_slice(&(recipients.len() as u32).to_le_bytes());
    for recipient in recipients {
        data.extend_from_slice(&recipient.address.to_bytes());
        data.extend_from_slice(&recipient.percentage_bps.to_le_bytes());
    }
}

/// Build create_split_config instruction
///
/// Accounts (matching CreateSplitConfig context order):
/// 0. split_config (writable) - init
/// 1. authority (signer)
/// 2. payer (writable, signer)
/// 3. mint_account (readonly)
/// 4. vault (writable) - init
/// 5. token_program (readonly)
/// 6. associated_token_program (readonly)
/// 7. system_program (readonly)
/// remaining_accounts: recipient ATAs for validation (read-only)
#[allow(clippy::too_many_arguments)]
pub fn build_create_split_config(
    split_config: Pubkey,
    vault: Pubkey,
    authority: Pubkey,
    payer: Pubkey,
    mint: Pubkey,
    recipients: &[RecipientInput],
    recipient_atas: &[Pubkey],
) -> Instruction {
    let mut data = Vec::new();
    data.extend_from_slice(&DISCRIMINATOR_CREATE_SPLIT_CONFIG);
    data.extend_from_slice(&mint.to_bytes());
    serialize_recipients(&mut data, recipients);

    let mut accounts = vec![
        AccountMeta::new(split_config, false),
        AccountMeta::new_readonly(authority, true),
        AccountMeta::new(payer, true),
        AccountMeta::new_readonly(mint, false),
        AccountMeta::new(vault, false),
        AccountMeta::new_readonly(spl_token::id(), false),
        AccountMeta::new_readonly(spl_associated_token_account::id(), false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    for ata in recipient_atas {
        accounts.push(AccountMeta::new_readonly(*ata, false));
    }

    Instruction {
        program_id: PROGRAM_ID,
        accounts,
        data,
    }
}

/// Build execute_split instruction
///
/// Accounts:
/// 0. split_config (writable)
/// 1. vault (writable)
/// 2. mint
/// 3. executor
/// 4. token_program
/// remaining_accounts: recipient ATAs (in order) + protocol_ata (last)
pub fn build_execute_split(
    split_config: Pubkey,
    vault: Pubkey,
    mint: Pubkey,
    executor: Pubkey,
    recipient_atas: &[Pubkey],
    protocol_ata: Pubkey,
) -> Instruction {
    let mut accounts = vec![
        AccountMeta::new(split_config, false),
        AccountMeta::new(vault, false),
        AccountMeta::new_readonly(mint, false),
        AccountMeta::new_readonly(executor, false),
        AccountMeta::new_readonly(spl_token::id(), false),
    ];

    for ata in recipient_atas {
        accounts.push(AccountMeta::new(*ata, false));
    }

    // Protocol ATA is last
    accounts.push(AccountMeta::new(protocol_ata, false));

    Instruction {
        program_id: PROGRAM_ID,
        accounts,
        data: DISCRIMINATOR_EXECUTE_SPLIT.to_vec(),
    }
}

/// Build claim_unclaimed instruction
///
/// Accounts:
/// 0. recipient (signer)
/// 1. split_config (writable)
/// 2. vault (writable)
/// 3. mint
/// 4. recipient_ata (writable)
/// 5. token_program
pub fn build_claim_unclaimed(
    recipient: Pubkey,
    split_config: Pubkey,
    vault: Pubkey,
    mint: Pubkey,
    recipient_ata: Pubkey,
) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(recipient, true),
            AccountMeta::new(split_config, false),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(mint, false),
            AccountMeta::new(recipient_ata, false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ],
        data: DISCRIMINATOR_CLAIM_UNCLAIMED.to_vec(),
    }
}

/// Build update_split_config instruction
///
/// Accounts (matching UpdateSplitConfig context order):
/// 0. authority (signer)
/// 1. split_config (writable)
/// 2. vault (readonly)
/// 3. token_program (readonly)
/// remaining_accounts: new recipient ATAs (read-only)
pub fn build_update_split_config(
    split_config: Pubkey,
    vault: Pubkey,
    authority: Pubkey,
    new_recipients: &[RecipientInput],
    recipient_atas: &[Pubkey],
) -> Instruction {
    let mut data = Vec::new();
    data.extend_from_slice(&DISCRIMINATOR_UPDATE_SPLIT_CONFIG);
    serialize_recipients(&mut data, new_recipients);

    let mut accounts = vec![
        AccountMeta::new_readonly(authority, true),
        AccountMeta::new(split_config, false),
        AccountMeta::new_readonly(vault, false),
        AccountMeta::new_readonly(spl_token::id(), false),
    ];

    for ata in recipient_atas {
        accounts.push(AccountMeta::new_readonly(*ata, false));
    }

    Instruction {
        program_id: PROGRAM_ID,
        accounts,
        data,
    }
}

/// Build close_split_config instruction
///
/// Accounts:
/// 0. split_config (writable)
/// 1. vault (writable)
/// 2. authority (writable, signer)
/// 3. token_program
pub fn build_close_split_config(
    split_config: Pubkey,
    vault: Pubkey,
    authority: Pubkey,
) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(split_config, false),
            AccountMeta::new(vault, false),
            AccountMeta::new(authority, true),
            AccountMeta::new_readonly(spl_token::id(), false),
        ],
        data: DISCRIMINATOR_CLOSE_SPLIT_CONFIG.to_vec(),
    }
}
