use anchor_lang::prelude::*;

#[event]
pub struct SplitterInitialized {
    pub owner: Pubkey,
    pub commission_percent: u8,
    pub timestamp: i64,
}

#[event]
pub struct BatchTransferred {
    pub sender: Pubkey,
    pub total_value: u64,
    pub commission: u64,
    pub distributed: u64,
    pub recipient_count: u64,
    pub timestamp: i64,
}

#[event]
pub struct CommissionsWithdrawn {
    pub owner: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
