//! # vatbill
//!
//! VAT-inclusive invoice PDF generation backed by two remote services:
//! the [vatlayer](https://vatlayer.com) price endpoint for VAT resolution
//! and the [pdflayer](https://pdflayer.com) convert endpoint for HTML-to-PDF
//! conversion.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! The crate does no tax math beyond summing line items; VAT rates are
//! resolved by jurisdiction (country code) on the remote side.
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use vatbill::{ApiKeys, CustomerInfo, LineItem, generate_invoice_pdf};
//!
//! let keys = ApiKeys::from_env()?;
//! let items = vec![
//!     LineItem::new("Product 1", 2, dec!(50)),
//!     LineItem::new("Service 1", 1, dec!(80)),
//! ];
//! let customer = CustomerInfo {
//!     invoice_number: "12345".into(),
//!     date: NaiveDate::from_ymd_opt(2023, 11, 29).unwrap(),
//!     name: "John Doe".into(),
//!     address: "1234 Street, City, Country".into(),
//! };
//!
//! let totals = generate_invoice_pdf(&keys, &items, &customer, "GB", "invoice.pdf").await?;
//! println!("wrote invoice.pdf, gross total {}", totals.total);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`core`] | Line item, customer, and totals value types |
//! | [`config`] | API credentials from the environment |
//! | [`tax`] | vatlayer price endpoint client |
//! | [`render`] | HTML invoice templating (pure, no I/O) |
//! | [`convert`] | pdflayer conversion client and file output |
//! | [`pipeline`] | End-to-end orchestration |

pub mod config;
pub mod convert;
pub mod core;
pub mod pipeline;
pub mod render;
pub mod tax;

// Re-export the everyday surface at the crate root for convenience
pub use crate::config::{ApiKeys, ConfigError};
pub use crate::core::*;
pub use crate::pipeline::{DEFAULT_OUTPUT, InvoiceError, generate_invoice_pdf};
