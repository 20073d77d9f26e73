// fixtures.rs — commonly used builders and expected payloads

use twqrp::PayloadBuilder;

pub const BANK_CODE: &str = "978";
pub const ACCOUNT: &str = "089478";
pub const PADDED_ACCOUNT: &str = "0000000000089478";
pub const SERVICE_NAME: &str = "test";

pub fn sample_transfer() -> PayloadBuilder {
    PayloadBuilder::transfer(BANK_CODE, ACCOUNT)
        .expect("fixture transfer is valid")
        .with_name(SERVICE_NAME)
}

pub fn expected_transfer(mutable: bool) -> String {
    let p = if mutable { 'M' } else { 'D' };
    format!(
        "TWQRP://{}/158/02/V1?{p}5={}&{p}6={}",
        SERVICE_NAME, BANK_CODE, PADDED_ACCOUNT
    )
}

/// Splits a rendered payload into its `key=value` tokens, sorted so two
/// renders can be compared regardless of field order.
pub fn sorted_tokens(payload: &str) -> Vec<String> {
    let query = payload.split_once('?').map(|(_, q)| q).unwrap_or("");
    let mut tokens: Vec<String> = query
        .split('&')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    tokens.sort();
    tokens
}
