use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::get_associated_token_address_with_program_id,
    token,
    token_2022::{self, spl_token_2022::state::AccountState},
    token_interface::TokenAccount,
};

use crate::{
    constants::{MAX_RECIPIENTS, MIN_RECIPIENTS, PROTOCOL_WALLET, REQUIRED_SPLIT_TOTAL},
    errors::ErrorCode,
    math::sum_recipient_bps,
    state::Recipient,
};

/// Outcome of inspecting a payout token account.
///
/// `Missing` and `Frozen` are soft failures: funds are held instead of sent.
/// Anything that looks tampered with (wrong address, owner, mint or program)
/// is returned as an error and aborts the instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenAccountStatus {
    Missing,
    Frozen,
    Ready,
}

#[derive(Clone, Copy)]
enum AtaRole {
    Recipient,
    Protocol,
}

#[derive(Clone, Copy)]
enum AtaCheck {
    Address,
    ProgramOwner,
    Malformed,
    WalletOwner,
    Mint,
}

impl AtaRole {
    fn error(self, check: AtaCheck) -> ErrorCode {
        match (self, check) {
            (AtaRole::Protocol, _) => ErrorCode::InvalidProtocolFeeAccount,
            (AtaRole::Recipient, AtaCheck::Address) => ErrorCode::RecipientAtaInvalid,
            (AtaRole::Recipient, AtaCheck::ProgramOwner) => ErrorCode::RecipientAtaInvalidOwner,
            (AtaRole::Recipient, AtaCheck::Malformed) => ErrorCode::RecipientAtaInvalid,
            (AtaRole::Recipient, AtaCheck::WalletOwner) => ErrorCode::RecipientAtaWrongOwner,
            (AtaRole::Recipient, AtaCheck::Mint) => ErrorCode::RecipientAtaWrongMint,
        }
    }
}

pub fn is_token_program(program_id: &Pubkey) -> bool {
    program_id == &token::ID || program_id == &token_2022::ID
}

fn inspect_ata(
    ata_info: &AccountInfo,
    wallet: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
    role: AtaRole,
) -> Result<TokenAccountStatus> {
    // Only the canonical ATA is accepted, even when it does not exist yet
    let expected_ata = get_associated_token_address_with_program_id(wallet, mint, token_program);
    require!(
        ata_info.key() == expected_ata,
        role.error(AtaCheck::Address)
    );

    if ata_info.data_is_empty() {
        return Ok(TokenAccountStatus::Missing);
    }

    require!(
        is_token_program(ata_info.owner),
        role.error(AtaCheck::ProgramOwner)
    );

    let token_account = TokenAccount::try_deserialize(&mut &ata_info.data.borrow()[..])
        .map_err(|_| role.error(AtaCheck::Malformed))?;

    require!(
        token_account.owner == *wallet,
        role.error(AtaCheck::WalletOwner)
    );
    require!(token_account.mint == *mint, role.error(AtaCheck::Mint));

    if token_account.state == AccountState::Frozen {
        return Ok(TokenAccountStatus::Frozen);
    }

    Ok(TokenAccountStatus::Ready)
}

/// Inspects a recipient's ATA for a payout
pub fn inspect_recipient_ata(
    ata_info: &AccountInfo,
    recipient: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> Result<TokenAccountStatus> {
    inspect_ata(ata_info, recipient, mint, token_program, AtaRole::Recipient)
}

/// Inspects the protocol fee ATA. Every integrity failure is reported as
/// `InvalidProtocolFeeAccount` so a substituted account can never be paid.
pub fn inspect_protocol_ata(
    ata_info: &AccountInfo,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> Result<TokenAccountStatus> {
    require!(ata_info.is_writable, ErrorCode::InvalidProtocolFeeAccount);
    inspect_ata(
        ata_info,
        &PROTOCOL_WALLET,
        mint,
        token_program,
        AtaRole::Protocol,
    )
}

/// Validates that a recipient ATA exists and is correctly configured
/// Used during config creation/update to ensure recipients are ready
pub fn validate_recipient_ata(
    ata_info: &AccountInfo,
    recipient: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> Result<()> {
    require!(
        !ata_info.is_writable,
        ErrorCode::RecipientAtaShouldBeReadOnly
    );

    match inspect_recipient_ata(ata_info, recipient, mint, token_program)? {
        TokenAccountStatus::Missing => err!(ErrorCode::RecipientAtaDoesNotExist),
        TokenAccountStatus::Frozen | TokenAccountStatus::Ready => Ok(()),
    }
}

/// Validates one ATA per recipient, passed in recipient order
pub fn validate_recipient_atas(
    ata_infos: &[AccountInfo],
    recipients: &[Recipient],
    mint: &Pubkey,
    token_program: &Pubkey,
) -> Result<()> {
    require!(
        ata_infos.len() == recipients.len(),
        ErrorCode::RecipientAtaCountMismatch
    );

    for (ata_info, recipient) in ata_infos.iter().zip(recipients) {
        validate_recipient_ata(ata_info, &recipient.address, mint, token_program)?;
    }

    Ok(())
}

/// Structural rules for a recipient list: 2-20 entries, shares summing to
/// 9900 bps, no zero address, no zero share, no duplicates.
///
/// The split config itself is never a valid recipient: its ATA is the vault,
/// so a payout to it would stay in the vault unreserved.
pub fn validate_recipient_set(recipients: &[Recipient], split_config: &Pubkey) -> Result<()> {
    require!(
        (MIN_RECIPIENTS..=MAX_RECIPIENTS).contains(&recipients.len()),
        ErrorCode::InvalidRecipientCount
    );

    let total_bps = sum_recipient_bps(recipients).ok_or(ErrorCode::MathOverflow)?;
    require!(
        total_bps == REQUIRED_SPLIT_TOTAL as u32,
        ErrorCode::InvalidSplitTotal
    );

    for (i, recipient) in recipients.iter().enumerate() {
        require!(recipient.address != Pubkey::default(), ErrorCode::ZeroAddress);
        require!(recipient.percentage_bps > 0, ErrorCode::ZeroPercentage);
        require!(
            recipient.address != *split_config,
            ErrorCode::RecipientIsSplitConfig
        );

        for other in recipients.iter().skip(i + 1) {
            require!(
                recipient.address != other.address,
                ErrorCode::DuplicateRecipient
            );
        }
    }

    Ok(())
}
