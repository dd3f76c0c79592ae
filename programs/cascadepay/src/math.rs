use anchor_lang::prelude::*;

use crate::{constants::BPS_DENOMINATOR, errors::ErrorCode, state::Recipient};

/// Per-recipient shares (in recipient order) and the protocol fee for one split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitAmounts {
    pub shares: Vec<u64>,
    pub protocol_fee: u64,
}

/// Recipient's floored share of `total`
pub fn recipient_share(total: u64, percentage_bps: u16) -> Result<u64> {
    let amount: u64 = (total as u128)
        .checked_mul(percentage_bps as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(BPS_DENOMINATOR)
        .ok_or(ErrorCode::MathOverflow)?
        .try_into()
        .map_err(|_| ErrorCode::MathOverflow)?;
    Ok(amount)
}

/// Sum all recipient basis points
/// Returns None on overflow
pub fn sum_recipient_bps(recipients: &[Recipient]) -> Option<u32> {
    recipients
        .iter()
        .try_fold(0u32, |acc, r| acc.checked_add(r.percentage_bps as u32))
}

/// Splits `total` across `recipients`.
///
/// Shares are floored; the protocol fee is whatever remains, so rounding dust
/// goes to the protocol and `sum(shares) + protocol_fee == total` always holds.
pub fn compute_split(total: u64, recipients: &[Recipient]) -> Result<SplitAmounts> {
    let mut shares = Vec::with_capacity(recipients.len());
    let mut distributed = 0u64;

    for recipient in recipients {
        let share = recipient_share(total, recipient.percentage_bps)?;
        distributed = distributed
            .checked_add(share)
            .ok_or(ErrorCode::MathOverflow)?;
        shares.push(share);
    }

    let protocol_fee = total
        .checked_sub(distributed)
        .ok_or(ErrorCode::MathUnderflow)?;

    Ok(SplitAmounts {
        shares,
        protocol_fee,
    })
}
