//! End-to-end invoice generation.
//!
//! Subtotal → remote VAT resolution → HTML rendering → remote PDF
//! conversion → file on disk. Strictly sequential, one invocation per
//! output file, no state retained between runs.

use std::path::Path;

use thiserror::Error;

use crate::config::{ApiKeys, ConfigError};
use crate::convert::{ConvertError, ConvertOptions, convert_html_to_pdf};
use crate::core::{CustomerInfo, LineItem, Totals, subtotal};
use crate::render::render_invoice_html;
use crate::tax::{PriceError, fetch_vat_amount};

/// Default output file name when the caller has no preference.
pub const DEFAULT_OUTPUT: &str = "invoice.pdf";

/// Any failure along the invoice pipeline.
///
/// Every variant is propagated to the caller as-is; there is no local
/// recovery or partial-result salvage.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tax(#[from] PriceError),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Generate a VAT-inclusive invoice PDF at `output_path`.
///
/// Computes the subtotal locally, resolves the VAT amount for
/// `country_code` via the tax service, renders the invoice HTML, and sends
/// it to the conversion service. Returns the computed [`Totals`] on
/// success; the PDF bytes are on disk at that point.
///
/// # Errors
///
/// Propagates [`PriceError`] and [`ConvertError`] from the two remote
/// calls. A non-PDF conversion response is a hard error and leaves any
/// existing file at `output_path` untouched.
pub async fn generate_invoice_pdf(
    keys: &ApiKeys,
    items: &[LineItem],
    customer: &CustomerInfo,
    country_code: &str,
    output_path: impl AsRef<Path>,
) -> Result<Totals, InvoiceError> {
    let net = subtotal(items);
    let vat = fetch_vat_amount(&keys.vatlayer, net, country_code).await?;
    let totals = Totals::from_parts(net, vat);

    let html = render_invoice_html(items, customer, &totals);
    convert_html_to_pdf(&keys.pdflayer, &html, &ConvertOptions::default(), output_path).await?;

    Ok(totals)
}
