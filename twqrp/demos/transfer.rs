// Prints a transfer payload.
//
// cargo run --example transfer -- <bank-code> <account> [amount]
// RUST_LOG=trace shows validation and rendering.

use anyhow::Context;
use chrono::{Duration, Local};
use twqrp::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let bank_code = args.next().unwrap_or_else(|| "978".to_string());
    let account = args.next().unwrap_or_else(|| "089478".to_string());

    let mut builder = PayloadBuilder::transfer(&bank_code, &account)
        .context("building transfer")?
        .with_name("demo");

    if let Some(amount) = args.next() {
        let amount: i32 = amount.parse().context("amount must be an integer")?;
        builder.try_amount(amount)?;
    }
    builder.try_qr_due(&(Local::now() + Duration::minutes(10)))?;

    println!("{}", builder.sorted_string());
    Ok(())
}
