//! Instruction builders for Mollusk tests
//!
//! NOTE: This is written for mollusk-svm 0.5.1 with solana-sdk 2.2
//! All imports from solana_sdk::*, not modular crates

use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

/// Program ID - must match lib.rs
pub const PROGRAM_ID: Pubkey = solana_sdk::pubkey!("Scatter3pUyXkEYqFkGcKwXpV4dWmA9s8yZbR2tHnQe");

// Anchor discriminators (first 8 bytes of sha256("global:function_name"))
// These must match the IDL/program
pub const DISCRIMINATOR_INITIALIZE: [u8; 8] = [0xaf, 0xaf, 0x6d, 0x1f, 0x0d, 0x98, 0x9b, 0xed];
pub const DISCRIMINATOR_GET_COMMISSION_PERCENT: [u8; 8] =
    [0x63, 0x37, 0xca, 0xa1, 0xf3, 0x52, 0x45, 0x44];
pub const DISCRIMINATOR_TRANSFER_TO_MULTIPLE_ADDRESSES: [u8; 8] =
    [0x4f, 0x85, 0xdd, 0xeb, 0x5d, 0xd3, 0x86, 0xb8];
pub const DISCRIMINATOR_WITHDRAW_COMMISSIONS: [u8; 8] =
    [0x15, 0x41, 0x35, 0x8e, 0x8b, 0xdc, 0x9b, 0x13];

/// Payment input for instructions
#[derive(Clone, Debug)]
pub struct PaymentInput {
    pub recipient: Pubkey,
    pub amount: u64,
}

/// Derive splitter config PDA
pub fn derive_splitter_config() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"splitter_config"], &PROGRAM_ID)
}

/// Derive program data PDA for BPF upgradeable loader
pub fn derive_program_data() -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[PROGRAM_ID.as_ref()],
        &solana_sdk::bpf_loader_upgradeable::id(),
    )
}

// Instruction discriminators (Anchor uses first 8 bytes of sha256("global:function_name"))
// We need to serialize these manually for Mollusk tests

/// Build initialize instruction
///
/// Accounts:
/// 0. splitter_config (writable) - PDA to initialize
/// 1. owner (writable, signer) - Must be upgrade authority
/// 2. program_data - BPF loader program data
/// 3. system_program
pub fn build_initialize(
    splitter_config: Pubkey,
    owner: Pubkey,
    program_data: Pubkey,
    commission_percent: u8,
) -> Instruction {
    let discriminator = DISCRIMINATOR_INITIALIZE;

    let mut data = Vec::with_capacity(8 + 1);
    data.extend_from_slice(&discriminator);
    data.push(commission_percent);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(splitter_config, false),
            AccountMeta::new(owner, true),
            AccountMeta::new_readonly(program_data, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    }
}

/// Build get_commission_percent instruction
///
/// Accounts:
/// 0. splitter_config (readonly)
pub fn build_get_commission_percent(splitter_config: Pubkey) -> Instruction {
    let discriminator = DISCRIMINATOR_GET_COMMISSION_PERCENT;

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![AccountMeta::new_readonly(splitter_config, false)],
        data: discriminator.to_vec(),
    }
}

/// Build transfer_to_multiple_addresses instruction
///
/// Accounts (matching TransferToMultipleAddresses context order):
/// 0. splitter_config (writable)
/// 1. sender (writable, signer)
/// 2. system_program
/// remaining_accounts: recipient accounts (writable), paired with payments in order
pub fn build_transfer_to_multiple_addresses(
    splitter_config: Pubkey,
    sender: Pubkey,
    payments: &[PaymentInput],
    total_value: u64,
    recipient_accounts: &[Pubkey],
) -> Instruction {
    let discriminator = DISCRIMINATOR_TRANSFER_TO_MULTIPLE_ADDRESSES;

    // Serialize instruction data
    let mut data = Vec::new();
    data.extend_from_slice(&discriminator);

    // Payments vector: 4-byte length prefix + each payment
    data.extend_from_slice(&(payments.len() as u32).to_le_bytes());
    for payment in payments {
        data.extend_from_slice(&payment.recipient.to_bytes());
        data.extend_from_slice(&payment.amount.to_le_bytes());
    }

    // Total value
    data.extend_from_slice(&total_value.to_le_bytes());

    // Build accounts - order must match TransferToMultipleAddresses context
    let mut accounts = vec![
        AccountMeta::new(splitter_config, false),
        AccountMeta::new(sender, true),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    // Add recipient accounts as remaining_accounts
    for recipient in recipient_accounts {
        accounts.push(AccountMeta::new(*recipient, false));
    }

    Instruction {
        program_id: PROGRAM_ID,
        accounts,
        data,
    }
}

/// Build withdraw_commissions instruction
///
/// Accounts:
/// 0. splitter_config (writable)
/// 1. owner (writable, signer)
pub fn build_withdraw_commissions(splitter_config: Pubkey, owner: Pubkey) -> Instruction {
    let discriminator = DISCRIMINATOR_WITHDRAW_COMMISSIONS;

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(splitter_config, false),
            AccountMeta::new(owner, true),
        ],
        data: discriminator.to_vec(),
    }
}
