use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod math;
pub mod state;
mod utils;
pub mod validation;

use instructions::*;

declare_id!("Bi1y2G3hteJwbeQk7QAW9Uk7Qq2h9bPbDYhPCKSuE2W2");

// Security contact information (embedded on-chain)
#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "CascadePay",
    project_url: "https://cascadepay.io",
    contacts: "email:hello@cascadepay.io,link:https://github.com/tenequm/cascadepay/security",
    policy: "https://github.com/tenequm/cascadepay/blob/main/SECURITY.md",
    source_code: "https://github.com/tenequm/cascadepay",
    source_release: "v0.1.0"
}

#[program]
pub mod cascadepay {
    use super::*;

    /// Creates a new split configuration with vault
    /// Every recipient ATA must already exist
    pub fn create_split_config<'info>(
        ctx: Context<'_, '_, 'info, 'info, CreateSplitConfig<'info>>,
        mint: Pubkey,
        recipients: Vec<RecipientInput>,
    ) -> Result<()> {
        instructions::create_split_config::handler(ctx, mint, recipients)
    }

    /// Executes a payment split by draining the vault
    /// Permissionless - anyone can call
    /// Missing or frozen recipient ATAs are held as unclaimed
    pub fn execute_split<'info>(
        ctx: Context<'_, '_, 'info, 'info, ExecuteSplit<'info>>,
    ) -> Result<()> {
        instructions::execute_split::handler(ctx)
    }

    /// Recipients claim their unclaimed funds
    pub fn claim_unclaimed(ctx: Context<ClaimUnclaimed>) -> Result<()> {
        instructions::claim_unclaimed::handler(ctx)
    }

    /// Updates split configuration with new recipients
    /// Only callable by authority, requires vault empty
    pub fn update_split_config<'info>(
        ctx: Context<'_, '_, 'info, 'info, UpdateSplitConfig<'info>>,
        new_recipients: Vec<RecipientInput>,
    ) -> Result<()> {
        instructions::update_split_config::handler(ctx, new_recipients)
    }

    /// Closes split config and vault, recovering rent
    /// Requires vault empty and all unclaimed cleared
    pub fn close_split_config(ctx: Context<CloseSplitConfig>) -> Result<()> {
        instructions::close_split_config::handler(ctx)
    }
}
