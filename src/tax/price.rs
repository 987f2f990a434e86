//! vatlayer `price` endpoint client.

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

const PRICE_URL: &str = "https://apilayer.net/api/price";
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Error from the tax pricing endpoint.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PriceError {
    /// Network or transport error.
    #[error("tax service network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("tax service error: {0}")]
    Api(String),

    /// Well-formed response with `success: false` — the remote service
    /// declined the calculation (bad key, unsupported country, ...).
    #[error("tax calculation rejected: {0}")]
    Rejected(String),

    /// Failed to parse the response.
    #[error("tax service parse error: {0}")]
    Parse(String),

    /// The request was invalid before any network call was made.
    #[error("invalid tax request: {0}")]
    InvalidRequest(String),
}

/// Decoded price quote from the endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceQuote {
    /// Whether the remote calculation succeeded.
    pub success: bool,
    /// Tax-exclusive price.
    #[serde(default)]
    pub price_excl_vat: Option<Decimal>,
    /// Tax-inclusive price.
    #[serde(default)]
    pub price_incl_vat: Option<Decimal>,
    /// Error detail, present when `success` is false.
    #[serde(default)]
    pub error: Option<PriceApiError>,
}

/// Error object vatlayer attaches to unsuccessful responses.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceApiError {
    #[serde(default)]
    pub code: Option<u32>,
    #[serde(default)]
    pub info: Option<String>,
}

/// Resolve the VAT amount for `amount` in the jurisdiction of `country_code`.
///
/// `country_code` is the 2-letter ISO code (e.g. "GB"). Issues one GET
/// request; no retry, no caching.
///
/// # Errors
///
/// `PriceError::InvalidRequest` for a negative amount or malformed country
/// code (checked before any network call), `PriceError::Network` on
/// connection issues, `PriceError::Api` on a non-2xx status,
/// `PriceError::Rejected` when the response carries `success: false`,
/// `PriceError::Parse` on unexpected response shapes.
pub async fn fetch_vat_amount(
    access_key: &str,
    amount: Decimal,
    country_code: &str,
) -> Result<Decimal, PriceError> {
    if amount.is_sign_negative() {
        return Err(PriceError::InvalidRequest(format!(
            "amount must be non-negative, got {amount}"
        )));
    }
    let country_code = normalize_country_code(country_code)?;

    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| PriceError::Network(e.to_string()))?;

    let amount_str = amount.to_string();
    let resp = client
        .get(PRICE_URL)
        .query(&[
            ("access_key", access_key),
            ("amount", amount_str.as_str()),
            ("country_code", country_code.as_str()),
        ])
        .send()
        .await
        .map_err(|e| PriceError::Network(e.to_string()))?;

    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| PriceError::Network(e.to_string()))?;

    if !status.is_success() {
        return Err(PriceError::Api(format!("HTTP {status}: {body}")));
    }

    let quote: PriceQuote =
        serde_json::from_str(&body).map_err(|e| PriceError::Parse(e.to_string()))?;

    vat_from_quote(&quote)
}

/// Uppercase and validate a 2-letter ISO country code.
fn normalize_country_code(code: &str) -> Result<String, PriceError> {
    let code = code.trim();
    if code.len() == 2 && code.bytes().all(|b| b.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(PriceError::InvalidRequest(format!(
            "country code must be two letters, got {code:?}"
        )))
    }
}

/// VAT amount from a decoded quote: tax-inclusive minus tax-exclusive price.
fn vat_from_quote(quote: &PriceQuote) -> Result<Decimal, PriceError> {
    if !quote.success {
        let info = quote
            .error
            .as_ref()
            .and_then(|e| e.info.clone())
            .unwrap_or_else(|| "remote service reported an unsuccessful calculation".into());
        return Err(PriceError::Rejected(info));
    }
    match (quote.price_incl_vat, quote.price_excl_vat) {
        (Some(incl), Some(excl)) => Ok(incl - excl),
        _ => Err(PriceError::Parse(
            "successful response missing price_excl_vat/price_incl_vat".into(),
        )),
    }
}
