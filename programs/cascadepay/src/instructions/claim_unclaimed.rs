use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::SPLIT_CONFIG_SEED,
    errors::ErrorCode,
    events::UnclaimedFundsClaimed,
    state::SplitConfig,
    utils::transfer_from_vault,
    validation::{inspect_recipient_ata, TokenAccountStatus},
};

#[derive(Accounts)]
pub struct ClaimUnclaimed<'info> {
    pub recipient: Signer<'info>,

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

    /// CHECK: Validated in handler against the recipient's canonical ATA
    #[account(mut)]
    pub recipient_ata: AccountInfo<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Transfers the signer's full unclaimed balance from the vault to their ATA
pub fn handler(ctx: Context<ClaimUnclaimed>) -> Result<()> {
    let claimer = ctx.accounts.recipient.key();
    let mint_key = ctx.accounts.mint.key();

    let unclaimed = ctx.accounts.split_config.take_unclaimed(&claimer)?;

    // The ATA must exist now; a claim is an explicit request to be paid
    match inspect_recipient_ata(
        &ctx.accounts.recipient_ata,
        &claimer,
        &mint_key,
        &ctx.accounts.token_program.key(),
    )? {
        TokenAccountStatus::Missing => return err!(ErrorCode::RecipientAtaDoesNotExist),
        TokenAccountStatus::Frozen | TokenAccountStatus::Ready => {}
    }

    let authority = ctx.accounts.split_config.authority;
    let bump = ctx.accounts.split_config.bump;
    let seeds = &[
        SPLIT_CONFIG_SEED,
        authority.as_ref(),
        mint_key.as_ref(),
        &[bump],
    ];
    let signer_seeds = &[&seeds[..]];

    transfer_from_vault(
        &ctx.accounts.vault,
        &ctx.accounts.mint,
        &ctx.accounts.recipient_ata,
        &ctx.accounts.split_config.to_account_info(),
        &ctx.accounts.token_program,
        signer_seeds,
        unclaimed.amount,
    )?;

    emit!(UnclaimedFundsClaimed {
        config: ctx.accounts.split_config.key(),
        recipient: claimer,
        amount: unclaimed.amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
