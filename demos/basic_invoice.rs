//! Generate the sample invoice from the README-style scenario:
//! two line items, UK VAT, output written to `invoice.pdf`.
//!
//! Requires `VATBILL_VATLAYER_KEY` and `VATBILL_PDFLAYER_KEY` to be set.
//!
//! Run with: `cargo run --example basic_invoice`

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use vatbill::{ApiKeys, CustomerInfo, DEFAULT_OUTPUT, LineItem, generate_invoice_pdf};

#[tokio::main]
async fn main() {
    let keys = match ApiKeys::from_env() {
        Ok(keys) => keys,
        Err(e) => {
            eprintln!("configuration error: {e}");
            std::process::exit(2);
        }
    };

    let items = vec![
        LineItem::new("Product 1", 2, dec!(50)),
        LineItem::new("Service 1", 1, dec!(80)),
    ];

    let customer = CustomerInfo {
        invoice_number: "12345".into(),
        date: NaiveDate::from_ymd_opt(2023, 11, 29).unwrap(),
        name: "John Doe".into(),
        address: "1234 Street, City, Country".into(),
    };

    match generate_invoice_pdf(&keys, &items, &customer, "GB", DEFAULT_OUTPUT).await {
        Ok(totals) => {
            println!("wrote {DEFAULT_OUTPUT}");
            println!("  subtotal: {}", totals.subtotal);
            println!("  VAT:      {}", totals.vat);
            println!("  total:    {}", totals.total);
        }
        Err(e) => {
            eprintln!("invoice generation failed: {e}");
            std::process::exit(1);
        }
    }
}
