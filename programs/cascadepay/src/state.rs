use anchor_lang::prelude::*;

use crate::{constants::MAX_RECIPIENTS, errors::ErrorCode};

/// Per-split configuration, one per authority/mint pair
#[account]
#[derive(Default, Debug)]
pub struct SplitConfig {
    /// Schema version for future upgrades
    pub version: u8,
    /// Authority that can update/close this config
    pub authority: Pubkey,
    /// Token mint for this split
    pub mint: Pubkey,
    /// Vault address (PDA-owned ATA) for receiving payments
    pub vault: Pubkey,
    /// Recipients in payout order (2-20, shares sum to 9900 bps)
    pub recipients: Vec<Recipient>,
    /// Funds held in the vault for recipients whose ATA was unavailable
    pub unclaimed_amounts: Vec<UnclaimedAmount>,
    /// Bump seed for PDA derivation
    pub bump: u8,
    /// Protocol fees held in the vault while the protocol ATA is unavailable
    pub protocol_unclaimed: u64,
}

/// Recipient in a split configuration
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Recipient {
    /// Recipient's wallet address
    pub address: Pubkey,
    /// Percentage in basis points (100 = 1%)
    pub percentage_bps: u16,
}

/// Unclaimed amount for a recipient
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnclaimedAmount {
    /// Recipient wallet allowed to claim this entry
    pub recipient: Pubkey,
    /// Amount held as unclaimed
    pub amount: u64,
    /// Timestamp of the most recent hold
    pub timestamp: i64,
}

impl SplitConfig {
    /// Replaces the recipient list. Structural rules are checked by the caller
    /// through `validate_recipient_set`; only the capacity bound lives here.
    pub fn set_recipients(&mut self, recipients: Vec<Recipient>) -> Result<()> {
        require!(
            recipients.len() <= MAX_RECIPIENTS,
            ErrorCode::InvalidRecipientCount
        );
        self.recipients = recipients;
        Ok(())
    }

    /// Sum of all recipient unclaimed entries
    pub fn total_unclaimed(&self) -> Result<u64> {
        let total = self
            .unclaimed_amounts
            .iter()
            .try_fold(0u64, |acc, u| acc.checked_add(u.amount))
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(total)
    }

    /// Vault balance owed to someone and excluded from the next split
    pub fn reserved_balance(&self) -> Result<u64> {
        let reserved = self
            .total_unclaimed()?
            .checked_add(self.protocol_unclaimed)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(reserved)
    }

    pub fn has_outstanding_claims(&self) -> bool {
        !self.unclaimed_amounts.is_empty() || self.protocol_unclaimed > 0
    }

    pub fn unclaimed_for(&self, recipient: &Pubkey) -> Option<&UnclaimedAmount> {
        self.unclaimed_amounts
            .iter()
            .find(|u| u.recipient == *recipient)
    }

    /// Records `amount` as owed to `recipient`, accumulating into an existing
    /// entry. Returns the entry's new total.
    pub fn hold_for(&mut self, recipient: Pubkey, amount: u64, timestamp: i64) -> Result<u64> {
        if let Some(existing) = self
            .unclaimed_amounts
            .iter_mut()
            .find(|u| u.recipient == recipient)
        {
            existing.amount = existing
                .amount
                .checked_add(amount)
                .ok_or(ErrorCode::MathOverflow)?;
            existing.timestamp = timestamp;
            return Ok(existing.amount);
        }

        require!(
            self.unclaimed_amounts.len() < MAX_RECIPIENTS,
            ErrorCode::TooManyUnclaimedEntries
        );

        self.unclaimed_amounts.push(UnclaimedAmount {
            recipient,
            amount,
            timestamp,
        });

        Ok(amount)
    }

    /// Removes and returns the entry for `recipient`; no partial claims
    pub fn take_unclaimed(&mut self, recipient: &Pubkey) -> Result<UnclaimedAmount> {
        let index = self
            .unclaimed_amounts
            .iter()
            .position(|u| u.recipient == *recipient)
            .ok_or(ErrorCode::NothingToClaim)?;

        Ok(self.unclaimed_amounts.remove(index))
    }
}
