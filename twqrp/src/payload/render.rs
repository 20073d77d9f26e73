// twqrp/src/payload/render.rs
//! Payload rendering.
//!
//! Wire format:
//!
//! ```text
//! TWQRP://{name}/{country:03}/{type:02}/V1?{prefix}{key}={value}&...
//! ```
//!
//! Nothing is escaped. A name or value containing `/`, `?`, `&` or `=`
//! produces a payload readers will split differently.

use std::fmt::{self, Write};

use log::trace;

use super::PayloadBuilder;
use crate::constants::{SCHEME, VERSION};
use crate::types::FieldKey;

impl PayloadBuilder {
    /// Renders the payload with fields ordered by the decimal text of their
    /// key. The output is byte-stable for a given builder state; use it for
    /// anything that is compared, hashed or signed.
    pub fn sorted_string(&self) -> String {
        let mut out = String::with_capacity(self.estimated_len());
        // writing into a String cannot fail
        let _ = self.write_payload(&mut out, self.sorted_fields());
        trace!("rendered sorted payload with {} fields", self.len());
        out
    }

    fn write_payload<'a, W, I>(&'a self, out: &mut W, fields: I) -> fmt::Result
    where
        W: Write,
        I: IntoIterator<Item = (FieldKey, &'a str)>,
    {
        write!(
            out,
            "{}://{}/{:03}/{:02}/{}?",
            SCHEME, self.name, self.country, self.transaction_type, VERSION
        )?;

        let prefix = self.prefix();
        for (idx, (key, value)) in fields.into_iter().enumerate() {
            if idx > 0 {
                out.write_char('&')?;
            }
            write!(out, "{}{}={}", prefix, key, value)?;
        }
        Ok(())
    }

    fn estimated_len(&self) -> usize {
        let header = SCHEME.len() + self.name.len() + 16;
        let body: usize = self.fields.values().map(|v| v.len() + 6).sum();
        header + body
    }
}

/// Renders the payload in the field map's iteration order.
///
/// That order is unspecified and may differ between builders with equal
/// contents, between runs and between processes. Use
/// [`PayloadBuilder::sorted_string`] whenever the exact bytes matter.
impl fmt::Display for PayloadBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        trace!("rendering unsorted payload with {} fields", self.len());
        self.write_payload(
            f,
            self.fields.iter().map(|(key, value)| (*key, value.as_str())),
        )
    }
}
