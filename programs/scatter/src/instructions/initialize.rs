use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_COMMISSION_PERCENT, SPLITTER_CONFIG_SIZE},
    errors::ErrorCode,
    events::SplitterInitialized,
    state::SplitterConfig,
    ID,
};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = SPLITTER_CONFIG_SIZE,
        seeds = [b"splitter_config"],
        bump
    )]
    pub splitter_config: AccountLoader<'info, SplitterConfig>,

    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: The program's executable data account - validated in handler
    #[account(
        constraint = program_data.owner == &anchor_lang::solana_program::bpf_loader_upgradeable::id()
            @ ErrorCode::Unauthorized
    )]
    pub program_data: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates the splitter configuration with the given commission percent
/// Can only be called once by the program's upgrade authority
pub fn handler(ctx: Context<Initialize>, commission_percent: u8) -> Result<()> {
    require!(
        commission_percent <= MAX_COMMISSION_PERCENT,
        ErrorCode::InvalidCommissionPercent
    );

    // Verify program_data is the correct PDA for our program
    let (expected_program_data, _) = Pubkey::find_program_address(
        &[ID.as_ref()],
        &anchor_lang::solana_program::bpf_loader_upgradeable::id(),
    );
    require!(
        ctx.accounts.program_data.key() == expected_program_data,
        ErrorCode::Unauthorized
    );

    // Deserialize program data to get upgrade authority
    let program_data_account = &ctx.accounts.program_data;
    let data = program_data_account.try_borrow_data()?;

    // Check minimum size for UpgradeableLoaderState::ProgramData
    require!(data.len() >= 45, ErrorCode::Unauthorized);

    // Parse upgrade authority (starts at offset 13, 32 bytes for pubkey, 1 byte for Option discriminant)
    // UpgradeableLoaderState::ProgramData layout:
    // - 4 bytes: discriminant
    // - 8 bytes: slot
    // - 1 byte: Option discriminant for upgrade_authority
    // - 32 bytes: upgrade_authority pubkey (if Some)
    let upgrade_authority_option = data[12];
    require!(upgrade_authority_option == 1, ErrorCode::Unauthorized); // Must have upgrade authority

    let upgrade_authority =
        Pubkey::try_from(&data[13..45]).map_err(|_| ErrorCode::Unauthorized)?;

    require!(
        upgrade_authority == ctx.accounts.owner.key(),
        ErrorCode::Unauthorized
    );

    let splitter_config = &mut ctx.accounts.splitter_config.load_init()?;

    splitter_config.owner = ctx.accounts.owner.key();
    splitter_config.accrued_commission = 0;
    splitter_config.commission_percent = commission_percent;
    splitter_config.bump = ctx.bumps.splitter_config;

    emit!(SplitterInitialized {
        owner: ctx.accounts.owner.key(),
        commission_percent,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
