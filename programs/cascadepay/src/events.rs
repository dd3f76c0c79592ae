use anchor_lang::prelude::*;

/// Why a payout was held instead of transferred
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoldReason {
    AccountMissing,
    AccountFrozen,
}

#[event]
pub struct SplitConfigCreated {
    pub config: Pubkey,
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub recipients_count: u8,
    pub timestamp: i64,
}

#[event]
pub struct SplitExecuted {
    pub config: Pubkey,
    pub vault: Pubkey,
    /// Vault balance before execution, including held funds
    pub vault_balance: u64,
    /// Amount split this execution (vault balance minus held funds)
    pub total_amount: u64,
    pub recipients_count: u8,
    pub recipients_distributed: u64,
    pub protocol_fee: u64,
    pub protocol_fee_sent: u64,
    pub held_as_unclaimed: u64,
    pub held_count: u8,
    pub executor: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct RecipientPaymentHeld {
    pub config: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub total_unclaimed: u64,
    pub reason: HoldReason,
    pub timestamp: i64,
}

#[event]
pub struct ProtocolFeeHeld {
    pub config: Pubkey,
    pub amount: u64,
    pub protocol_unclaimed: u64,
    pub reason: HoldReason,
    pub timestamp: i64,
}

#[event]
pub struct UnclaimedFundsClaimed {
    pub config: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct SplitConfigUpdated {
    pub config: Pubkey,
    pub authority: Pubkey,
    pub old_recipients_count: u8,
    pub new_recipients_count: u8,
    pub timestamp: i64,
}

#[event]
pub struct SplitConfigClosed {
    pub config: Pubkey,
    pub authority: Pubkey,
    pub rent_recovered: u64,
    pub timestamp: i64,
}
