// twqrp/src/error.rs

use thiserror::Error;

/// Common error type.
///
/// Every variant is an input-validation rejection. None of them is transient,
/// so retrying the same input always yields the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid bank code: {0:?} (expected 3 digits)")]
    InvalidBankCode(String),

    #[error("invalid account: {0:?} (expected 1 to 16 digits)")]
    InvalidAccount(String),

    #[error("invalid country code: {0} (expected 1..=999)")]
    InvalidCountryCode(i32),

    #[error("invalid amount: {0} (expected 1..=99999)")]
    InvalidAmount(i32),

    #[error("invalid note: {len} bytes, at most {max} allowed")]
    InvalidNote { len: usize, max: usize },

    #[error("invalid currency code: {0:?} (expected 3 digits)")]
    InvalidCurrencyCode(String),

    #[error("invalid qrcode due time: {0}")]
    InvalidQrDueTime(String),
}

pub type Result<T> = std::result::Result<T, Error>;
