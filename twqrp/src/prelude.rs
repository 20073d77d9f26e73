// twqrp/src/prelude.rs

pub use crate::constants::{CURRENCY_TWD, HOME_COUNTRY, TRANSFER_TYPE};
pub use crate::payload::PayloadBuilder;
pub use crate::{Error, FieldKey, Prefix, Result};
