// twqrp/src/lib.rs

//! twqrp
//!
//! Builds TWQRP (Taiwan QR payment) payloads: a service name, country code,
//! transaction type and a set of integer-keyed fields rendered into one
//! URI-like string.
//!
//! ```
//! use twqrp::prelude::*;
//!
//! let mut builder = PayloadBuilder::transfer("978", "089478")?
//!     .with_name("test")
//!     .with_mutable(true);
//! builder.try_note("rent")?;
//! assert_eq!(
//!     builder.sorted_string(),
//!     "TWQRP://test/158/02/V1?M5=978&M6=0000000000089478&M9=rent"
//! );
//! # Ok::<(), twqrp::Error>(())
//! ```
//!
//! Encoding only: there is no parser, and values are never escaped.
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod payload;
pub mod prelude;
pub mod types;

// Re-export common types at crate root so `crate::Error`, `crate::Result`
// and the builder are available without naming the modules.
pub use crate::error::*;
pub use crate::payload::PayloadBuilder;
pub use crate::types::*;
