use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Recipients must total exactly 9900 basis points (99%)")]
    InvalidSplitTotal,

    #[msg("Recipient count must be between 2 and 20")]
    InvalidRecipientCount,

    #[msg("Duplicate recipient address")]
    DuplicateRecipient,

    #[msg("Recipient address cannot be zero")]
    ZeroAddress,

    #[msg("Recipient percentage cannot be zero")]
    ZeroPercentage,

    #[msg("Vault must be empty for this operation")]
    VaultNotEmpty,

    #[msg("Invalid vault account")]
    InvalidVault,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Math underflow")]
    MathUnderflow,

    #[msg("Number of recipient ATAs does not match recipient count")]
    RecipientAtaCountMismatch,

    #[msg("Recipient ATA does not exist")]
    RecipientAtaDoesNotExist,

    #[msg("Recipient ATA is invalid")]
    RecipientAtaInvalid,

    #[msg("Recipient ATA has wrong owner")]
    RecipientAtaWrongOwner,

    #[msg("Recipient ATA has wrong mint")]
    RecipientAtaWrongMint,

    #[msg("Recipient ATA is not owned by a token program")]
    RecipientAtaInvalidOwner,

    #[msg("Recipient ATA must be read-only when validating a config")]
    RecipientAtaShouldBeReadOnly,

    #[msg("Too many unclaimed entries")]
    TooManyUnclaimedEntries,

    #[msg("Protocol fee account not provided")]
    MissingProtocolAccount,

    #[msg("Protocol fee account must be the protocol wallet ATA")]
    InvalidProtocolFeeAccount,

    #[msg("Nothing to claim")]
    NothingToClaim,

    #[msg("Unclaimed funds must be cleared before closing")]
    UnclaimedFundsExist,

    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Invalid token program")]
    InvalidTokenProgram,

    #[msg("Split config cannot be its own recipient")]
    RecipientIsSplitConfig,

    #[msg("Mint does not match split config")]
    InvalidMint,
}
