#![allow(ambiguous_glob_reexports)]

pub mod get_commission_percent;
pub mod initialize;
pub mod transfer_to_multiple_addresses;
pub mod withdraw_commissions;

pub use get_commission_percent::*;
pub use initialize::*;
pub use transfer_to_multiple_addresses::*;
pub use withdraw_commissions::*;
