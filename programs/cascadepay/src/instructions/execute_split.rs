use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::SPLIT_CONFIG_SEED,
    errors::ErrorCode,
    events::{HoldReason, ProtocolFeeHeld, RecipientPaymentHeld, SplitExecuted},
    math::compute_split,
    state::SplitConfig,
    utils::transfer_from_vault,
    validation::{inspect_protocol_ata, inspect_recipient_ata, TokenAccountStatus},
};

#[derive(Accounts)]
pub struct ExecuteSplit<'info> {
    #[account(
        mut,
        seeds = [
            SPLIT_CONFIG_SEED,
            split_config.authority.as_ref(),
            split_config.mint.as_ref()
        ],
        bump = split_config.bump
    )]
    pub split_config: Box<Account<'info, SplitConfig>>,

    #[account(
        mut,
        constraint = vault.key() == split_config.vault @ ErrorCode::InvalidVault,
        constraint = *vault.to_account_info().owner == token_program.key() @ ErrorCode::InvalidTokenProgram
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        constraint = mint.key() == split_config.mint @ ErrorCode::InvalidMint
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// CHECK: Intentionally not a Signer - permissionless execution allows anyone to trigger
    /// distribution (e.g., recipients, bots, facilitators). The executor field is used only
    /// for event attribution and has no security implications.
    pub executor: AccountInfo<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Where one share ends up. A rejected account never reaches this point:
/// inspection returns an error and the whole instruction aborts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Payout {
    Sent(u64),
    Held(u64, HoldReason),
}

impl Payout {
    fn route(status: TokenAccountStatus, amount: u64) -> Self {
        match status {
            TokenAccountStatus::Ready => Payout::Sent(amount),
            TokenAccountStatus::Missing => Payout::Held(amount, HoldReason::AccountMissing),
            TokenAccountStatus::Frozen => Payout::Held(amount, HoldReason::AccountFrozen),
        }
    }
}

/// Drains the distributable vault balance to recipients and the protocol
/// Permissionless - anyone can call
///
/// remaining_accounts: recipient ATAs in recipient order, then the protocol ATA
pub fn handler<'info>(ctx: Context<'_, '_, 'info, 'info, ExecuteSplit<'info>>) -> Result<()> {
    let vault_balance = ctx.accounts.vault.amount;
    if vault_balance == 0 {
        return Ok(());
    }

    let recipients = ctx.accounts.split_config.recipients.clone();
    let recipients_count = recipients.len();

    require!(
        ctx.remaining_accounts.len() >= recipients_count,
        ErrorCode::RecipientAtaCountMismatch
    );
    let protocol_ata = ctx
        .remaining_accounts
        .get(recipients_count)
        .ok_or(ErrorCode::MissingProtocolAccount)?;

    // Held funds stay in the vault and are never re-split. A vault drained
    // below its reserve (e.g. by a permanent delegate) distributes nothing.
    let reserved = ctx.accounts.split_config.reserved_balance()?;
    let distributable = vault_balance.saturating_sub(reserved);

    #[cfg(feature = "verbose")]
    msg!(
        "Vault balance {}, reserved {}, distributable {}",
        vault_balance,
        reserved,
        distributable
    );

    let split = compute_split(distributable, &recipients)?;

    // Setup PDA signer (capture values before any mutations)
    let authority = ctx.accounts.split_config.authority;
    let mint_key = ctx.accounts.split_config.mint;
    let bump = ctx.accounts.split_config.bump;
    let config_key = ctx.accounts.split_config.key();

    let seeds = &[
        SPLIT_CONFIG_SEED,
        authority.as_ref(),
        mint_key.as_ref(),
        &[bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let split_config_info = ctx.accounts.split_config.to_account_info();
    let token_program_key = ctx.accounts.token_program.key();
    let timestamp = Clock::get()?.unix_timestamp;

    let mut distributed = 0u64;
    let mut held_as_unclaimed = 0u64;
    let mut held_count = 0u8;

    for ((recipient, &share), ata_info) in recipients
        .iter()
        .zip(split.shares.iter())
        .zip(ctx.remaining_accounts.iter())
    {
        // Validate even for zero shares: a substituted account always aborts
        let status =
            inspect_recipient_ata(ata_info, &recipient.address, &mint_key, &token_program_key)?;

        if share == 0 {
            continue;
        }

        match Payout::route(status, share) {
            Payout::Sent(amount) => {
                transfer_from_vault(
                    &ctx.accounts.vault,
                    &ctx.accounts.mint,
                    ata_info,
                    &split_config_info,
                    &ctx.accounts.token_program,
                    signer_seeds,
                    amount,
                )?;

                distributed = distributed
                    .checked_add(amount)
                    .ok_or(ErrorCode::MathOverflow)?;
            }
            Payout::Held(amount, reason) => {
                let total_unclaimed =
                    ctx.accounts
                        .split_config
                        .hold_for(recipient.address, amount, timestamp)?;

                held_as_unclaimed = held_as_unclaimed
                    .checked_add(amount)
                    .ok_or(ErrorCode::MathOverflow)?;
                held_count = held_count.checked_add(1).ok_or(ErrorCode::MathOverflow)?;

                #[cfg(feature = "verbose")]
                msg!(
                    "Recipient {} ATA unavailable ({:?}), holding {} as unclaimed",
                    recipient.address,
                    reason,
                    amount
                );

                emit!(RecipientPaymentHeld {
                    config: config_key,
                    recipient: recipient.address,
                    amount,
                    total_unclaimed,
                    reason,
                    timestamp,
                });
            }
        }
    }

    // Protocol fee (1% + dust) plus anything held from earlier executions
    let protocol_status = inspect_protocol_ata(protocol_ata, &mint_key, &token_program_key)?;
    let protocol_fee_due = split
        .protocol_fee
        .checked_add(ctx.accounts.split_config.protocol_unclaimed)
        .ok_or(ErrorCode::MathOverflow)?;

    let mut protocol_fee_sent = 0u64;

    if protocol_fee_due > 0 {
        match Payout::route(protocol_status, protocol_fee_due) {
            Payout::Sent(amount) => {
                // Never more than the vault still holds; any shortfall stays owed
                let available = vault_balance
                    .checked_sub(distributed)
                    .ok_or(ErrorCode::MathUnderflow)?;
                let payable = amount.min(available);

                if payable > 0 {
                    transfer_from_vault(
                        &ctx.accounts.vault,
                        &ctx.accounts.mint,
                        protocol_ata,
                        &split_config_info,
                        &ctx.accounts.token_program,
                        signer_seeds,
                        payable,
                    )?;
                }

                ctx.accounts.split_config.protocol_unclaimed = amount
                    .checked_sub(payable)
                    .ok_or(ErrorCode::MathUnderflow)?;
                protocol_fee_sent = payable;
            }
            Payout::Held(amount, reason) => {
                ctx.accounts.split_config.protocol_unclaimed = amount;

                #[cfg(feature = "verbose")]
                msg!(
                    "Protocol ATA unavailable ({:?}), holding {} in vault",
                    reason,
                    amount
                );

                emit!(ProtocolFeeHeld {
                    config: config_key,
                    amount: split.protocol_fee,
                    protocol_unclaimed: amount,
                    reason,
                    timestamp,
                });
            }
        }
    }

    emit!(SplitExecuted {
        config: config_key,
        vault: ctx.accounts.vault.key(),
        vault_balance,
        total_amount: distributable,
        recipients_count: recipients_count as u8,
        recipients_distributed: distributed,
        protocol_fee: split.protocol_fee,
        protocol_fee_sent,
        held_as_unclaimed,
        held_count,
        executor: ctx.accounts.executor.key(),
        timestamp,
    });

    Ok(())
}
