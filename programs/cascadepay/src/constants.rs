use anchor_lang::prelude::*;

// Protocol wallet (receives the 1% fee plus rounding dust)
pub const PROTOCOL_WALLET: Pubkey = pubkey!("2zMEvEkyQKTRjiGkwYPXjPsJUp8eR1rVjoYQ7PzVVZnP");

// Fee configuration
pub const PROTOCOL_FEE_BPS: u16 = 100;        // 1%
pub const REQUIRED_SPLIT_TOTAL: u16 = 9900;   // Recipients must total 99%
pub const BPS_DENOMINATOR: u128 = 10_000;

// Recipient limits (also bounds the unclaimed ledger)
pub const MIN_RECIPIENTS: usize = 2;
pub const MAX_RECIPIENTS: usize = 20;

pub const SPLIT_CONFIG_SEED: &[u8] = b"split_config";
pub const CURRENT_VERSION: u8 = 1;

// SplitConfig size calculation (Borsh, pre-allocated for MAX_RECIPIENTS):
// - discriminator: 8
// - version: 1
// - authority: 32
// - mint: 32
// - vault: 32
// - recipients: 4 (len) + (32 + 2) * 20 = 684
// - unclaimed_amounts: 4 (len) + (32 + 8 + 8) * 20 = 964
// - bump: 1
// - protocol_unclaimed: 8
// Total: 8 + 1 + 32 + 32 + 32 + 684 + 964 + 1 + 8 = 1762
pub const RECIPIENT_SIZE: usize = 32 + 2;
pub const UNCLAIMED_AMOUNT_SIZE: usize = 32 + 8 + 8;
pub const SPLIT_CONFIG_SIZE: usize = 8
    + 1
    + 32
    + 32
    + 32
    + 4
    + RECIPIENT_SIZE * MAX_RECIPIENTS
    + 4
    + UNCLAIMED_AMOUNT_SIZE * MAX_RECIPIENTS
    + 1
    + 8;

const _: () = assert!(SPLIT_CONFIG_SIZE == 1762);
const _: () = assert!(REQUIRED_SPLIT_TOTAL as u128 + PROTOCOL_FEE_BPS as u128 == BPS_DENOMINATOR);
