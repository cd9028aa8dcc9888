use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Commission percent must be between 0 and 100")]
    InvalidCommissionPercent,

    #[msg("Splitter is already initialized")]
    AlreadyInitialized,

    #[msg("Payment list cannot be empty")]
    EmptyBatch,

    #[msg("Total value must be greater than zero")]
    InsufficientValue,

    #[msg("Not enough accounts provided in remaining_accounts")]
    InsufficientRemainingAccounts,

    #[msg("Recipient account does not match payment entry")]
    RecipientMismatch,

    #[msg("Recipient account must be writable")]
    RecipientNotWritable,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Math underflow")]
    MathUnderflow,

    #[msg("Unauthorized")]
    Unauthorized,
}
