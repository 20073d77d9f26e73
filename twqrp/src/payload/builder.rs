// twqrp/src/payload/builder.rs

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, TimeZone};
use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::validate;
use crate::constants::{HOME_COUNTRY, TRANSFER_TYPE};
use crate::types::{FieldKey, Prefix};
use crate::Result;

/// Builds a TWQRP payload.
///
/// The default country is Taiwan (158). Each typed setter comes in two
/// forms: `try_*` returns the validation error and leaves the builder
/// untouched, the plain form panics with that error instead. Use the plain
/// form only where the input is already known to be valid.
///
/// ```
/// use twqrp::PayloadBuilder;
///
/// let mut builder = PayloadBuilder::transfer("978", "089478")?.with_name("test");
/// builder.try_amount(100)?;
/// assert_eq!(
///     builder.sorted_string(),
///     "TWQRP://test/158/02/V1?D1=10000&D5=978&D6=0000000000089478"
/// );
/// # Ok::<(), twqrp::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PayloadBuilder {
    /// Service name chosen by the merchant. Written as-is, without
    /// percent-encoding.
    pub name: String,
    /// Whether the payer may edit the fields before paying.
    pub mutable: bool,
    pub(super) country: u16,
    pub(super) transaction_type: u32,
    pub(super) fields: HashMap<FieldKey, String>,
}

impl PayloadBuilder {
    /// Empty builder for the given transaction type.
    ///
    /// Nothing is checked; every field has to be set through
    /// [`set_field`](Self::set_field) or the typed setters.
    pub fn new(transaction_type: u32) -> Self {
        Self {
            name: String::new(),
            mutable: false,
            country: HOME_COUNTRY,
            transaction_type,
            fields: HashMap::new(),
        }
    }

    /// Builder for a bank transfer to `account` at `bank_code`.
    ///
    /// - `bank_code` must be exactly 3 digits
    /// - `account` must be 1 to 16 digits; it is stored zero-padded to 16
    ///
    /// Both inputs are checked. When both are invalid the account error is
    /// the one returned.
    pub fn transfer(bank_code: &str, account: &str) -> Result<Self> {
        let bank_code = validate::bank_code(bank_code);
        let account = validate::account(account)?;
        let bank_code = bank_code?;

        let mut builder = Self::new(TRANSFER_TYPE);
        builder.set_field(FieldKey::BANK_CODE, bank_code);
        builder.set_field(FieldKey::ACCOUNT, account);
        Ok(builder)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_mutable(mut self, mutable: bool) -> Self {
        self.mutable = mutable;
        self
    }

    pub fn country_code(&self) -> u16 {
        self.country
    }

    pub fn transaction_type(&self) -> u32 {
        self.transaction_type
    }

    pub fn prefix(&self) -> Prefix {
        Prefix::from_mutable(self.mutable)
    }

    pub fn field(&self, key: impl Into<FieldKey>) -> Option<&str> {
        self.fields.get(&key.into()).map(String::as_str)
    }

    /// Fields ordered by the decimal text of their key, so `10` comes
    /// before `2`. This is the order [`sorted_string`](Self::sorted_string)
    /// writes them in.
    pub fn sorted_fields(&self) -> Vec<(FieldKey, &str)> {
        let mut entries: Vec<(FieldKey, &str)> = self
            .fields
            .iter()
            .map(|(key, value)| (*key, value.as_str()))
            .collect();
        entries.sort_by_cached_key(|(key, _)| key.to_string());
        entries
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Stores `value` under `key`, replacing any previous value. No
    /// validation; `&` and `=` inside `value` will corrupt the payload.
    pub fn set_field(&mut self, key: impl Into<FieldKey>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        trace!("set field {} = {:?}", key, value);
        self.fields.insert(key, value);
        self
    }

    pub fn remove_field(&mut self, key: impl Into<FieldKey>) -> Option<String> {
        self.fields.remove(&key.into())
    }

    /// Sets the country code, which must be within 1..=999.
    pub fn try_country(&mut self, code: i32) -> Result<&mut Self> {
        self.country = validate::country(code)?;
        Ok(self)
    }

    /// Panicking form of [`try_country`](Self::try_country).
    pub fn country(&mut self, code: i32) -> &mut Self {
        must(self.try_country(code))
    }

    /// Sets the amount in whole currency units (1..=99999). It is stored
    /// multiplied by 100.
    pub fn try_amount(&mut self, amount: i32) -> Result<&mut Self> {
        let value = validate::amount(amount)?;
        Ok(self.set_field(FieldKey::AMOUNT, value))
    }

    /// Panicking form of [`try_amount`](Self::try_amount).
    pub fn amount(&mut self, amount: i32) -> &mut Self {
        must(self.try_amount(amount))
    }

    /// Sets the note. At most 19 bytes, so a CJK note holds 6 characters.
    pub fn try_note(&mut self, note: &str) -> Result<&mut Self> {
        let value = validate::note(note)?;
        Ok(self.set_field(FieldKey::NOTE, value))
    }

    /// Panicking form of [`try_note`](Self::try_note).
    pub fn note(&mut self, note: &str) -> &mut Self {
        must(self.try_note(note))
    }

    /// Sets the 3 digit currency code. Payloads without one are read as
    /// New Taiwan Dollar ([`CURRENCY_TWD`](crate::constants::CURRENCY_TWD)).
    pub fn try_currency(&mut self, code: &str) -> Result<&mut Self> {
        let value = validate::currency(code)?;
        Ok(self.set_field(FieldKey::CURRENCY, value))
    }

    /// Panicking form of [`try_currency`](Self::try_currency).
    pub fn currency(&mut self, code: &str) -> &mut Self {
        must(self.try_currency(code))
    }

    /// Sets when the QR code expires. The time is written in the offset it
    /// carries; convert it to Taipei time first if that is what the reader
    /// expects.
    pub fn try_qr_due<Tz>(&mut self, due: &DateTime<Tz>) -> Result<&mut Self>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let value = validate::qr_due(due)?;
        Ok(self.set_field(FieldKey::QR_DUE, value))
    }

    /// Panicking form of [`try_qr_due`](Self::try_qr_due).
    pub fn qr_due<Tz>(&mut self, due: &DateTime<Tz>) -> &mut Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        must(self.try_qr_due(due))
    }
}

fn must(result: Result<&mut PayloadBuilder>) -> &mut PayloadBuilder {
    match result {
        Ok(builder) => builder,
        Err(err) => panic!("twqrp: {}", err),
    }
}
