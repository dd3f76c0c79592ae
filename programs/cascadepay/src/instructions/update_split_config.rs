use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

use crate::{
    constants::SPLIT_CONFIG_SEED,
    errors::ErrorCode,
    events::SplitConfigUpdated,
    state::SplitConfig,
    validation::{validate_recipient_atas, validate_recipient_set},
};

use super::create_split_config::{to_recipients, RecipientInput};

#[derive(Accounts)]
pub struct UpdateSplitConfig<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [
            SPLIT_CONFIG_SEED,
            split_config.authority.as_ref(),
            split_config.mint.as_ref()
        ],
        bump = split_config.bump,
        constraint = split_config.authority == authority.key() @ ErrorCode::Unauthorized
    )]
    pub split_config: Box<Account<'info, SplitConfig>>,

    #[account(
        constraint = vault.key() == split_config.vault @ ErrorCode::InvalidVault,
        constraint = *vault.to_account_info().owner == token_program.key() @ ErrorCode::InvalidTokenProgram,
        constraint = vault.amount == 0 @ ErrorCode::VaultNotEmpty
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Updates split configuration with new recipients
/// Requires vault to be empty; authority, mint, vault and unclaimed entries are kept
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, UpdateSplitConfig<'info>>,
    new_recipients: Vec<RecipientInput>,
) -> Result<()> {
    let new_recipients = to_recipients(&new_recipients);

    validate_recipient_set(&new_recipients, &ctx.accounts.split_config.key())?;

    let mint = ctx.accounts.split_config.mint;
    validate_recipient_atas(
        ctx.remaining_accounts,
        &new_recipients,
        &mint,
        &ctx.accounts.token_program.key(),
    )?;

    let new_recipients_count = new_recipients.len() as u8;

    let split_config = &mut ctx.accounts.split_config;
    let old_recipients_count = split_config.recipients.len() as u8;
    split_config.set_recipients(new_recipients)?;

    emit!(SplitConfigUpdated {
        config: split_config.key(),
        authority: ctx.accounts.authority.key(),
        old_recipients_count,
        new_recipients_count,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
