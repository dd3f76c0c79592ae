use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{
    constants::{CURRENT_VERSION, SPLIT_CONFIG_SEED, SPLIT_CONFIG_SIZE},
    errors::ErrorCode,
    events::SplitConfigCreated,
    state::{Recipient, SplitConfig},
    validation::{validate_recipient_atas, validate_recipient_set},
};

#[derive(Accounts)]
#[instruction(mint: Pubkey, recipients: Vec<RecipientInput>)]
pub struct CreateSplitConfig<'info> {
    #[account(
        init,
        payer = payer,
        space = SPLIT_CONFIG_SIZE,
        seeds = [SPLIT_CONFIG_SEED, authority.key().as_ref(), mint.as_ref()],
        bump
    )]
    pub split_config: Box<Account<'info, SplitConfig>>,

    /// Authority that will control this split config
    pub authority: Signer<'info>,

    /// Account paying rent for split_config and vault (can be same as authority or different)
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        constraint = mint_account.key() == mint @ ErrorCode::InvalidMint
    )]
    pub mint_account: InterfaceAccount<'info, Mint>,

    #[account(
        init,
        payer = payer,
        associated_token::mint = mint_account,
        associated_token::authority = split_config,
        associated_token::token_program = token_program,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Input struct for recipients (used in instruction parameters)
#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct RecipientInput {
    pub address: Pubkey,
    pub percentage_bps: u16,
}

impl From<&RecipientInput> for Recipient {
    fn from(input: &RecipientInput) -> Self {
        Recipient {
            address: input.address,
            percentage_bps: input.percentage_bps,
        }
    }
}

pub fn to_recipients(inputs: &[RecipientInput]) -> Vec<Recipient> {
    inputs.iter().map(Recipient::from).collect()
}

/// Creates a new split configuration with vault
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, CreateSplitConfig<'info>>,
    mint: Pubkey,
    recipients: Vec<RecipientInput>,
) -> Result<()> {
    let recipients = to_recipients(&recipients);

    validate_recipient_set(&recipients, &ctx.accounts.split_config.key())?;

    // Recipient ATAs must already exist; remaining_accounts holds them in order
    validate_recipient_atas(
        ctx.remaining_accounts,
        &recipients,
        &mint,
        &ctx.accounts.token_program.key(),
    )?;

    let recipients_count = recipients.len() as u8;

    let split_config = &mut ctx.accounts.split_config;
    split_config.version = CURRENT_VERSION;
    split_config.authority = ctx.accounts.authority.key();
    split_config.mint = mint;
    split_config.vault = ctx.accounts.vault.key();
    split_config.set_recipients(recipients)?;
    split_config.unclaimed_amounts = Vec::new();
    split_config.bump = ctx.bumps.split_config;
    split_config.protocol_unclaimed = 0;

    emit!(SplitConfigCreated {
        config: split_config.key(),
        authority: split_config.authority,
        mint,
        vault: split_config.vault,
        recipients_count,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
