//! VAT resolution via the vatlayer price endpoint.
//!
//! The remote service takes a net amount and a country code and answers with
//! the tax-exclusive and tax-inclusive prices for that jurisdiction. The VAT
//! amount is their difference; no rate tables live in this crate.

mod price;

pub use price::{PriceApiError, PriceError, PriceQuote, fetch_vat_amount};
