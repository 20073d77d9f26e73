// twqrp/src/constants.rs
//! Scheme constants shared by the builder, the validators and the renderer.

/// Scheme tag written in front of every payload (`TWQRP://`).
pub const SCHEME: &str = "TWQRP";

/// Payload format version written after the transaction type.
pub const VERSION: &str = "V1";

/// Default country code: Taiwan (ISO 3166-1 numeric 158).
pub const HOME_COUNTRY: u16 = 158;

/// Transaction type used for bank transfers.
pub const TRANSFER_TYPE: u32 = 2;

/// Currency code for New Taiwan Dollar. The builder never inserts it on its
/// own; readers of a payload without a currency field assume it.
pub const CURRENCY_TWD: &str = "901";

/// Accepted country code range
pub const COUNTRY_MIN: i32 = 1;
pub const COUNTRY_MAX: i32 = 999;

/// Accepted amount range, in whole currency units
pub const AMOUNT_MIN: i32 = 1;
pub const AMOUNT_MAX: i32 = 99_999;

/// Amounts are stored in minor units (cents).
pub const MINOR_UNITS_PER_UNIT: i32 = 100;

/// Maximum note length in bytes (not characters).
pub const NOTE_MAX_LEN: usize = 19;

/// Accounts are left-padded with zeros to this width.
pub const ACCOUNT_WIDTH: usize = 16;

/// `YYYYMMDDHHMMSS`
pub const DUE_TIME_FORMAT: &str = "%Y%m%d%H%M%S";
