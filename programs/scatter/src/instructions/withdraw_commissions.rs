use anchor_lang::prelude::*;

use crate::{errors::ErrorCode, events::CommissionsWithdrawn, state::SplitterConfig};

#[derive(Accounts)]
pub struct WithdrawCommissions<'info> {
    #[account(
        mut,
        seeds = [b"splitter_config"],
        bump = splitter_config.load()?.bump,
        constraint = splitter_config.load()?.owner == owner.key() @ ErrorCode::Unauthorized
    )]
    pub splitter_config: AccountLoader<'info, SplitterConfig>,

    #[account(mut)]
    pub owner: Signer<'info>,
}

/// Pays out all accrued commission lamports to the owner and resets the
/// accrual to zero. Withdrawing with nothing accrued is a no-op.
pub fn handler(ctx: Context<WithdrawCommissions>) -> Result<()> {
    // Phase 1: Take the accrued amount and DROP borrow before moving lamports
    let amount = {
        let mut config = ctx.accounts.splitter_config.load_mut()?;
        let amount = config.accrued_commission;
        config.accrued_commission = 0;
        amount
    }; // ← Borrow DROPPED here

    if amount > 0 {
        let config_info = ctx.accounts.splitter_config.to_account_info();
        let owner_info = ctx.accounts.owner.to_account_info();

        let config_lamports = config_info.lamports();
        let owner_lamports = owner_info.lamports();

        // The config account holds its rent-exempt reserve plus accrued
        // commissions, so the reserve is never touched
        **config_info.try_borrow_mut_lamports()? = config_lamports
            .checked_sub(amount)
            .ok_or(ErrorCode::MathUnderflow)?;
        **owner_info.try_borrow_mut_lamports()? = owner_lamports
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;

        #[cfg(feature = "verbose")]
        msg!("Withdrew {} lamports of commission", amount);
    }

    emit!(CommissionsWithdrawn {
        owner: ctx.accounts.owner.key(),
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
