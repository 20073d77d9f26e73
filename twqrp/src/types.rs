// twqrp/src/types.rs

use derive_more::{Display, From};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// FieldKey - Newtype Pattern (scheme-defined field number)
///
/// The derived `Ord` is numeric. Payload rendering orders keys by their
/// decimal text instead, see [`PayloadBuilder::sorted_fields`].
///
/// [`PayloadBuilder::sorted_fields`]: crate::PayloadBuilder::sorted_fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct FieldKey(u32);

impl FieldKey {
    /// Transaction amount in minor units
    pub const AMOUNT: Self = Self(1);
    /// Receiving bank code
    pub const BANK_CODE: Self = Self(5);
    /// Receiving account, zero-padded to 16 digits
    pub const ACCOUNT: Self = Self(6);
    /// Free-form note shown to the payer
    pub const NOTE: Self = Self(9);
    /// Currency code
    pub const CURRENCY: Self = Self(10);
    /// QR code expiry (`YYYYMMDDHHMMSS`)
    pub const QR_DUE: Self = Self(12);

    pub const fn new(key: u32) -> Self {
        Self(key)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

/// Field prefix: whether the payer may edit the field before paying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Prefix {
    #[default]
    #[display(fmt = "D")]
    #[cfg_attr(feature = "serde", serde(rename = "D"))]
    Fixed,
    #[display(fmt = "M")]
    #[cfg_attr(feature = "serde", serde(rename = "M"))]
    Mutable,
}

impl Prefix {
    pub fn from_mutable(mutable: bool) -> Self {
        if mutable {
            Prefix::Mutable
        } else {
            Prefix::Fixed
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Prefix::Fixed => 'D',
            Prefix::Mutable => 'M',
        }
    }
}
