// twqrp/src/payload/validate.rs
//! Validation rules for the typed setters.
//!
//! Each rule either returns the text to store or the matching [`Error`]. The
//! compiled patterns are process-wide and never mutated after first use.

use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use log::debug;
use regex::Regex;

use crate::constants::{
    ACCOUNT_WIDTH, AMOUNT_MAX, AMOUNT_MIN, COUNTRY_MAX, COUNTRY_MIN, DUE_TIME_FORMAT,
    MINOR_UNITS_PER_UNIT, NOTE_MAX_LEN,
};
use crate::{Error, Result};

static THREE_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}$").expect("three digit pattern compiles"));

static ACCOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,16}$").expect("account pattern compiles"));

pub(crate) fn bank_code(code: &str) -> Result<&str> {
    if !THREE_DIGITS.is_match(code) {
        debug!("rejected bank code {:?}", code);
        return Err(Error::InvalidBankCode(code.to_string()));
    }
    Ok(code)
}

/// Returns the account zero-padded to [`ACCOUNT_WIDTH`] digits.
pub(crate) fn account(account: &str) -> Result<String> {
    if !ACCOUNT.is_match(account) {
        debug!("rejected account {:?}", account);
        return Err(Error::InvalidAccount(account.to_string()));
    }
    Ok(format!("{:0>width$}", account, width = ACCOUNT_WIDTH))
}

pub(crate) fn country(code: i32) -> Result<u16> {
    if !(COUNTRY_MIN..=COUNTRY_MAX).contains(&code) {
        debug!("rejected country code {}", code);
        return Err(Error::InvalidCountryCode(code));
    }
    // range check above keeps this within u16
    Ok(code as u16)
}

/// Returns the amount in minor units as decimal text.
pub(crate) fn amount(amount: i32) -> Result<String> {
    if !(AMOUNT_MIN..=AMOUNT_MAX).contains(&amount) {
        debug!("rejected amount {}", amount);
        return Err(Error::InvalidAmount(amount));
    }
    Ok((amount * MINOR_UNITS_PER_UNIT).to_string())
}

pub(crate) fn note(note: &str) -> Result<&str> {
    if note.len() > NOTE_MAX_LEN {
        debug!("rejected note of {} bytes", note.len());
        return Err(Error::InvalidNote {
            len: note.len(),
            max: NOTE_MAX_LEN,
        });
    }
    Ok(note)
}

pub(crate) fn currency(code: &str) -> Result<&str> {
    if !THREE_DIGITS.is_match(code) {
        debug!("rejected currency code {:?}", code);
        return Err(Error::InvalidCurrencyCode(code.to_string()));
    }
    Ok(code)
}

/// Formats the due time in the offset it already carries; no conversion to
/// UTC happens here.
pub(crate) fn qr_due<Tz>(due: &DateTime<Tz>) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if is_unset(due) {
        debug!("rejected unset qrcode due time {}", due);
        return Err(Error::InvalidQrDueTime(due.to_string()));
    }
    Ok(due.format(DUE_TIME_FORMAT).to_string())
}

/// Unset sentinels: `DateTime::<Utc>::default()` (the Unix epoch) and the
/// `0001-01-01T00:00:00Z` instant other TWQRP tooling uses as "zero".
fn is_unset<Tz: TimeZone>(t: &DateTime<Tz>) -> bool {
    let instant = t.naive_utc();
    instant == DateTime::<Utc>::default().naive_utc() || Some(instant) == year_one()
}

fn year_one() -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(1, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
}
