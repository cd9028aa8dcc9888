use anchor_lang::{prelude::*, system_program};

use crate::{
    errors::ErrorCode,
    events::BatchTransferred,
    state::SplitterConfig,
    utils::{calculate_commission, calculate_share, validate_and_pay_recipient},
};

#[derive(Accounts)]
pub struct TransferToMultipleAddresses<'info> {
    #[account(
        mut,
        seeds = [b"splitter_config"],
        bump = splitter_config.load()?.bump
    )]
    pub splitter_config: AccountLoader<'info, SplitterConfig>,

    #[account(mut)]
    pub sender: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Input struct for payments (used in instruction parameters)
#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct PaymentInput {
    pub recipient: Pubkey,
    pub amount: u64,
}

/// Fans a payment out to multiple recipients, retaining the configured
/// commission. Recipient accounts are passed as remaining accounts paired
/// positionally with the payment entries.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, TransferToMultipleAddresses<'info>>,
    payments: Vec<PaymentInput>,
    total_value: u64,
) -> Result<()> {
    let payment_count = payments.len();

    require!(payment_count > 0, ErrorCode::EmptyBatch);
    require!(total_value > 0, ErrorCode::InsufficientValue);

    // Each payment entry pairs with a recipient account in order
    require!(
        ctx.remaining_accounts.len() >= payment_count,
        ErrorCode::InsufficientRemainingAccounts
    );

    // Phase 1: Read config and DROP borrow before CPIs
    let commission_percent = {
        let config = ctx.accounts.splitter_config.load()?;
        config.commission_percent
    }; // ← Borrow DROPPED here

    let commission =
        calculate_commission(total_value, commission_percent).ok_or(ErrorCode::MathOverflow)?;
    let net_pool = total_value
        .checked_sub(commission)
        .ok_or(ErrorCode::MathUnderflow)?;

    let sender_info = ctx.accounts.sender.to_account_info();
    let system_program_info = ctx.accounts.system_program.to_account_info();

    // Phase 2: All CPIs - no borrow held
    let mut distributed = 0u64;

    for (i, payment) in payments.iter().enumerate() {
        // Floor division intentionally rounds down - rounding dust is never
        // debited from the sender. For very small amounts a share may come
        // to 0 (skipped below).
        let share =
            calculate_share(net_pool, payment.amount, total_value).ok_or(ErrorCode::MathOverflow)?;

        if share == 0 {
            continue; // Skip zero-lamport transfers (from rounding or zero amounts)
        }

        let recipient_info = &ctx.remaining_accounts[i];

        // Validate and transfer - no borrow held, CPI is safe
        validate_and_pay_recipient(
            recipient_info,
            &payment.recipient,
            share,
            &sender_info,
            &system_program_info,
        )?;

        distributed = distributed
            .checked_add(share)
            .ok_or(ErrorCode::MathOverflow)?;

        #[cfg(feature = "verbose")]
        msg!("Paid {} lamports to {}", share, payment.recipient);
    }

    // Commission lamports are held by the config account until withdrawn
    if commission > 0 {
        let cpi_ctx = CpiContext::new(
            system_program_info.clone(),
            system_program::Transfer {
                from: sender_info.clone(),
                to: ctx.accounts.splitter_config.to_account_info(),
            },
        );
        system_program::transfer(cpi_ctx, commission)?;

        #[cfg(feature = "verbose")]
        msg!("Retained {} lamports as commission", commission);
    }

    // Phase 3: Mutable borrow to write back accrued commission
    {
        let mut config = ctx.accounts.splitter_config.load_mut()?;
        config.accrued_commission = config
            .accrued_commission
            .checked_add(commission)
            .ok_or(ErrorCode::MathOverflow)?;
    } // ← Borrow DROPPED here

    emit!(BatchTransferred {
        sender: ctx.accounts.sender.key(),
        total_value,
        commission,
        distributed,
        recipient_count: payment_count as u64,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
