use anchor_lang::prelude::*;

use crate::state::SplitterConfig;

#[derive(Accounts)]
pub struct GetCommissionPercent<'info> {
    #[account(
        seeds = [b"splitter_config"],
        bump = splitter_config.load()?.bump
    )]
    pub splitter_config: AccountLoader<'info, SplitterConfig>,
}

/// Returns the configured commission percent via program return data
pub fn handler(ctx: Context<GetCommissionPercent>) -> Result<u8> {
    let splitter_config = ctx.accounts.splitter_config.load()?;
    Ok(splitter_config.commission_percent)
}
