use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

use crate::{
    constants::SPLIT_CONFIG_SEED,
    errors::ErrorCode,
    events::SplitConfigClosed,
    state::SplitConfig,
    utils::close_vault,
};

#[derive(Accounts)]
pub struct CloseSplitConfig<'info> {
    #[account(
        mut,
        seeds = [
            SPLIT_CONFIG_SEED,
            split_config.authority.as_ref(),
            split_config.mint.as_ref()
        ],
        bump = split_config.bump,
        constraint = split_config.authority == authority.key() @ ErrorCode::Unauthorized,
        close = authority
    )]
    pub split_config: Box<Account<'info, SplitConfig>>,

    #[account(
        mut,
        constraint = vault.key() == split_config.vault @ ErrorCode::InvalidVault,
        constraint = *vault.to_account_info().owner == token_program.key() @ ErrorCode::InvalidTokenProgram,
        constraint = vault.amount == 0 @ ErrorCode::VaultNotEmpty
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// Receives rent from both the config and the vault
    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Closes split config and its vault, recovering rent to the authority
/// Requires vault empty and all unclaimed cleared
pub fn handler(ctx: Context<CloseSplitConfig>) -> Result<()> {
    require!(
        !ctx.accounts.split_config.has_outstanding_claims(),
        ErrorCode::UnclaimedFundsExist
    );

    let authority = ctx.accounts.split_config.authority;
    let mint = ctx.accounts.split_config.mint;
    let bump = ctx.accounts.split_config.bump;

    let seeds = &[
        SPLIT_CONFIG_SEED,
        authority.as_ref(),
        mint.as_ref(),
        &[bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let rent_recovered = ctx
        .accounts
        .split_config
        .to_account_info()
        .lamports()
        .checked_add(ctx.accounts.vault.to_account_info().lamports())
        .ok_or(ErrorCode::MathOverflow)?;

    close_vault(
        &ctx.accounts.vault,
        &ctx.accounts.authority.to_account_info(),
        &ctx.accounts.split_config.to_account_info(),
        &ctx.accounts.token_program,
        signer_seeds,
    )?;

    emit!(SplitConfigClosed {
        config: ctx.accounts.split_config.key(),
        authority: ctx.accounts.authority.key(),
        rent_recovered,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
