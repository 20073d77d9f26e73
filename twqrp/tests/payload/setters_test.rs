use crate::common::fixtures;

use chrono::{FixedOffset, TimeZone, Utc};
use proptest::prelude::*;
use twqrp::{Error, FieldKey, PayloadBuilder};

#[test]
fn amount_is_stored_in_minor_units() -> anyhow::Result<()> {
    let mut builder = PayloadBuilder::new(2);
    builder.try_amount(1)?;
    assert_eq!(builder.field(FieldKey::AMOUNT), Some("100"));
    builder.try_amount(99_999)?;
    assert_eq!(builder.field(FieldKey::AMOUNT), Some("9999900"));
    Ok(())
}

#[test]
fn note_limit_is_nineteen_bytes() {
    let mut builder = PayloadBuilder::new(2);
    let ok = "n".repeat(19);
    builder.try_note(&ok).unwrap();
    assert_eq!(builder.field(FieldKey::NOTE), Some(ok.as_str()));

    let err = builder.try_note(&"n".repeat(20)).unwrap_err();
    assert_eq!(err, Error::InvalidNote { len: 20, max: 19 });
    assert_eq!(builder.field(FieldKey::NOTE), Some(ok.as_str()));
}

#[test]
fn currency_must_be_three_digits() {
    let mut builder = PayloadBuilder::new(2);
    builder.currency(twqrp::constants::CURRENCY_TWD);
    assert_eq!(builder.field(FieldKey::CURRENCY), Some("901"));
    assert_eq!(
        builder.try_currency("TWD").unwrap_err(),
        Error::InvalidCurrencyCode("TWD".to_string())
    );
}

#[test]
fn country_changes_header() {
    let mut builder = fixtures::sample_transfer();
    builder.try_country(840).unwrap();
    assert!(builder.sorted_string().starts_with("TWQRP://test/840/02/V1?"));
    assert!(matches!(
        builder.try_country(-1),
        Err(Error::InvalidCountryCode(-1))
    ));
    assert_eq!(builder.country_code(), 840);
}

#[test]
fn qr_due_uses_callers_offset() {
    let taipei = FixedOffset::east_opt(8 * 3600).unwrap();
    let due = taipei.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();

    let mut local = PayloadBuilder::new(2);
    local.qr_due(&due);
    let mut utc = PayloadBuilder::new(2);
    utc.qr_due(&due.with_timezone(&Utc));

    assert_eq!(local.field(FieldKey::QR_DUE), Some("20250102030405"));
    assert_eq!(utc.field(FieldKey::QR_DUE), Some("20250101190405"));
}

#[test]
fn qr_due_rejects_unset_time() {
    let mut builder = PayloadBuilder::new(2);
    assert!(matches!(
        builder.try_qr_due(&chrono::DateTime::<Utc>::default()),
        Err(Error::InvalidQrDueTime(_))
    ));
    assert!(builder.is_empty());
}

#[test]
fn raw_field_is_unchecked() {
    let mut builder = PayloadBuilder::new(2);
    builder.set_field(FieldKey::AMOUNT, "not a number");
    builder.set_field(4242u32, "");
    assert_eq!(
        builder.sorted_string(),
        "TWQRP:///158/02/V1?D1=not a number&D4242="
    );
}

#[test]
#[should_panic(expected = "invalid currency code")]
fn currency_panics_on_invalid() {
    PayloadBuilder::new(2).currency("1");
}

#[test]
#[should_panic(expected = "invalid qrcode due time")]
fn qr_due_panics_on_unset() {
    PayloadBuilder::new(2).qr_due(&chrono::DateTime::<Utc>::default());
}

proptest! {
    #[test]
    fn invalid_amount_leaves_fields(n in prop_oneof![i32::MIN..=0, 100_000..=i32::MAX]) {
        let mut builder = fixtures::sample_transfer();
        builder.amount(5);
        let before = builder.clone();
        prop_assert_eq!(builder.try_amount(n).unwrap_err(), Error::InvalidAmount(n));
        prop_assert_eq!(builder, before);
    }

    #[test]
    fn short_notes_are_verbatim(note in "[ -~]{0,19}") {
        let mut builder = PayloadBuilder::new(2);
        builder.try_note(&note).unwrap();
        prop_assert_eq!(builder.field(FieldKey::NOTE), Some(note.as_str()));
    }
}
