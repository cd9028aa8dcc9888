use anchor_lang::{prelude::*, system_program};

use crate::errors::ErrorCode;

/// Commission retained from a batch: `total_value * percent / 100`
/// Truncates toward zero; returns None on overflow
pub fn calculate_commission(total_value: u64, percent: u8) -> Option<u64> {
    (total_value as u128)
        .checked_mul(percent as u128)?
        .checked_div(100)?
        .try_into()
        .ok()
}

/// A recipient's share of the net pool: `net_pool * amount / total_value`
///
/// The divisor is the declared batch total, not the sum of payment amounts.
/// When the amounts do not sum to `total_value` the shares do not exhaust
/// the pool; the shortfall stays with the sender. Truncates toward zero;
/// returns None on overflow or a zero total.
pub fn calculate_share(net_pool: u64, amount: u64, total_value: u64) -> Option<u64> {
    (net_pool as u128)
        .checked_mul(amount as u128)?
        .checked_div(total_value as u128)?
        .try_into()
        .ok()
}

/// Validates that the paired account matches the payment entry, then
/// transfers `amount` lamports from the sender to it via the system program
pub fn validate_and_pay_recipient<'info>(
    recipient_info: &AccountInfo<'info>,
    expected_recipient: &Pubkey,
    amount: u64,
    sender: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
) -> Result<()> {
    require!(
        recipient_info.key() == *expected_recipient,
        ErrorCode::RecipientMismatch
    );
    require!(recipient_info.is_writable, ErrorCode::RecipientNotWritable);

    let cpi_ctx = CpiContext::new(
        system_program.clone(),
        system_program::Transfer {
            from: sender.clone(),
            to: recipient_info.clone(),
        },
    );
    system_program::transfer(cpi_ctx, amount)
}
