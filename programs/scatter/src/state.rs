use anchor_lang::prelude::*;

/// Global splitter configuration (single instance)
///
/// Also the holder of retained commission lamports: every batch credits its
/// commission here on top of the rent-exempt reserve, and withdrawal debits
/// it back down to the reserve.
#[account(zero_copy(unsafe))]
#[repr(C)]
pub struct SplitterConfig {
    /// Owner recorded at initialization; sole receiver of withdrawn commissions
    pub owner: Pubkey,
    /// Lamports retained as commission and awaiting withdrawal
    pub accrued_commission: u64,
    /// Commission percentage in whole percent (0-100)
    pub commission_percent: u8,
    /// Bump seed for PDA derivation (stored for CU optimization)
    pub bump: u8,
}

// Compile-time size assertions to catch accidental struct changes
// SplitterConfig: owner (32) + accrued_commission (8) + commission_percent (1)
// + bump (1) = 42, padded to 48 by #[repr(C)] for the u64's 8-byte alignment
const _: () = assert!(std::mem::size_of::<SplitterConfig>() == 48);
const _: () =
    assert!(crate::constants::SPLITTER_CONFIG_SIZE == 8 + std::mem::size_of::<SplitterConfig>());
