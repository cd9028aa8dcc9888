use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
mod utils;

use instructions::*;

declare_id!("Scatter3pUyXkEYqFkGcKwXpV4dWmA9s8yZbR2tHnQe");

// Security contact information (embedded on-chain)
#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Scatter",
    project_url: "https://scatterpay.xyz",
    contacts: "email:security@scatterpay.xyz,link:https://github.com/scatter-labs/scatter/security",
    policy: "https://github.com/scatter-labs/scatter/blob/main/SECURITY.md",
    source_code: "https://github.com/scatter-labs/scatter",
    source_release: "v0.1.0"
}

#[program]
pub mod scatter {
    use super::*;

    /// Initializes the splitter configuration with its commission percent
    /// Can only be called once, by the program's upgrade authority
    pub fn initialize(ctx: Context<Initialize>, commission_percent: u8) -> Result<()> {
        instructions::initialize::handler(ctx, commission_percent)
    }

    /// Returns the configured commission percent via return data
    /// Pure read, no side effects
    pub fn get_commission_percent(ctx: Context<GetCommissionPercent>) -> Result<u8> {
        instructions::get_commission_percent::handler(ctx)
    }

    /// Splits a payment across the listed recipients, proportional to their
    /// declared amounts, retaining the configured commission for the owner
    /// Recipient accounts travel in remaining_accounts, one per payment, in order
    pub fn transfer_to_multiple_addresses<'info>(
        ctx: Context<'_, '_, 'info, 'info, TransferToMultipleAddresses<'info>>,
        payments: Vec<PaymentInput>,
        total_value: u64,
    ) -> Result<()> {
        instructions::transfer_to_multiple_addresses::handler(ctx, payments, total_value)
    }

    /// Sends the entire accrued commission balance to the owner
    /// A zero balance withdraws nothing and succeeds
    pub fn withdraw_commissions(ctx: Context<WithdrawCommissions>) -> Result<()> {
        instructions::withdraw_commissions::handler(ctx)
    }
}
