// Commission configuration
pub const MAX_COMMISSION_PERCENT: u8 = 100;

// Account size for the zero-copy config
// SplitterConfig: discriminator (8) + owner (32) + accrued_commission (8)
//   + commission_percent (1) + bump (1) + tail padding (6)
// NOTE: #[repr(C)] pads the struct to a multiple of its 8-byte alignment
pub const SPLITTER_CONFIG_SIZE: usize = 56;
