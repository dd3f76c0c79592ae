//! Serialization helpers for the Borsh-encoded SplitConfig account
//!
//! NOTE: This is written for mollusk-svm 0.5.1 with solana-sdk 2.2
//! Layout must match the #[account] struct field order exactly:
//! discriminator | version | authority | mint | vault | recipients vec |
//! unclaimed_amounts vec | bump | protocol_unclaimed

use solana_sdk::pubkey::Pubkey;

// Constants matching the program
pub const SPLIT_CONFIG_SIZE: usize = 1762;

// Anchor discriminator (first 8 bytes of sha256("account:SplitConfig"))
pub const SPLIT_CONFIG_DISCRIMINATOR: [u8; 8] = [0x31, 0xc9, 0x32, 0xe4, 0x16, 0x8e, 0x0c, 0xde];

/// Recipient data for serialization
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecipientData {
    pub address: Pubkey,
    pub percentage_bps: u16,
}

/// Unclaimed amount data for serialization
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnclaimedAmountData {
    pub recipient: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

/// Decoded SplitConfig account
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitConfigData {
    pub version: u8,
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub recipients: Vec<RecipientData>,
    pub unclaimed_amounts: Vec<UnclaimedAmountData>,
    pub bump: u8,
    pub protocol_unclaimed: u64,
}

impl SplitConfigData {
    pub fn unclaimed_for(&self, recipient: &Pubkey) -> Option<UnclaimedAmountData> {
        self.unclaimed_amounts
            .iter()
            .copied()
            .find(|u| u.recipient == *recipient)
    }
}

/// Serialize SplitConfig for test account data, zero-padded to SPLIT_CONFIG_SIZE
#[allow(clippy::too_many_arguments)]
pub fn serialize_split_config(
    version: u8,
    authority: Pubkey,
    mint: Pubkey,
    vault: Pubkey,
    recipients: &[RecipientData],
    unclaimed_amounts: &[UnclaimedAmountData],
    bump: u8,
    protocol_unclaimed: u64,
) -> Vec<u8> {
    let mut data = Vec::with_capacity(SPLIT_CONFIG_SIZE);

    data.extend_from_slice(&SPLIT_CONFIG_DISCRIMINATOR);
    data.push(version);
    data.extend_from_slice(&authority.to_bytes());
    data.extend_from_slice(&mint.to_bytes());
    data.extend_from_slice(&vault.to_bytes());

    // Recipients vec: 4-byte length prefix + (address, percentage_bps)
    data.extend_from_slice(&(recipients.len() as u32).to_le_bytes());
    for recipient in recipients {
        data.extend_from_slice(&recipient.address.to_bytes());
        data.extend_from_slice(&recipient.percentage_bps.to_le_bytes());
    }

    // Unclaimed vec: 4-byte length prefix + (recipient, amount, timestamp)
    data.extend_from_slice(&(unclaimed_amounts.len() as u32).to_le_bytes());
    for unclaimed in unclaimed_amounts {
        data.extend_from_slice(&unclaimed.recipient.to_bytes());
        data.extend_from_slice(&unclaimed.amount.to_le_bytes());
        data.extend_from_slice(&unclaimed.timestamp.to_le_bytes());
    }

    data.push(bump);
    data.extend_from_slice(&protocol_unclaimed.to_le_bytes());

    assert!(data.len() <= SPLIT_CONFIG_SIZE, "split config exceeds allocated space");
    data.resize(SPLIT_CONFIG_SIZE, 0);
    data
}

struct Reader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, len: usize) -> &'a [u8] {
        let bytes = &self.data[self.offset..self.offset + len];
        self.offset += len;
        bytes
    }

    fn u8(&mut self) -> u8 {
        self.take(1)[0]
    }

    fn u16(&mut self) -> u16 {
        u16::from_le_bytes(self.take(2).try_into().unwrap())
    }

    fn u32(&mut self) -> u32 {
        u32::from_le_bytes(self.take(4).try_into().unwrap())
    }

    fn u64(&mut self) -> u64 {
        u64::from_le_bytes(self.take(8).try_into().unwrap())
    }

    fn i64(&mut self) -> i64 {
        i64::from_le_bytes(self.take(8).try_into().unwrap())
    }

    fn pubkey(&mut self) -> Pubkey {
        Pubkey::new_from_array(self.take(32).try_into().unwrap())
    }
}

/// Decode SplitConfig account data written by the program
pub fn deserialize_split_config(data: &[u8]) -> SplitConfigData {
    assert_eq!(data[..8], SPLIT_CONFIG_DISCRIMINATOR, "not a SplitConfig account");
    let mut reader = Reader { data, offset: 8 };

    let version = reader.u8();
    let authority = reader.pubkey();
    let mint = reader.pubkey();
    let vault = reader.pubkey();

    let recipients_len = reader.u32() as usize;
    let recipients = (0..recipients_len)
        .map(|_| RecipientData {
            address: reader.pubkey(),
            percentage_bps: reader.u16(),
        })
        .collect();

    let unclaimed_len = reader.u32() as usize;
    let unclaimed_amounts = (0..unclaimed_len)
        .map(|_| UnclaimedAmountData {
            recipient: reader.pubkey(),
            amount: reader.u64(),
            timestamp: reader.i64(),
        })
        .collect();

    let bump = reader.u8();
    let protocol_unclaimed = reader.u64();

    SplitConfigData {
        version,
        authority,
        mint,
        vault,
        recipients,
        unclaimed_amounts,
        bump,
        protocol_unclaimed,
    }
}
