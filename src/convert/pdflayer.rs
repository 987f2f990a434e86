//! pdflayer `convert` endpoint client.
//!
//! The endpoint answers a successful conversion with raw PDF bytes and
//! `Content-Type: application/pdf`; anything else in the content type means
//! the body is an error payload, and no output file may be written or
//! overwritten in that case.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

const CONVERT_URL: &str = "https://api.pdflayer.com/api/convert";
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Error detail excerpts are capped at this many bytes.
const DETAIL_LIMIT: usize = 512;

/// Error from the conversion endpoint or the file write.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// Network or transport error.
    #[error("conversion service network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("conversion service error: {0}")]
    Api(String),

    /// 2xx response whose content type is not `application/pdf`; the body
    /// describes the failure. No file was written.
    #[error("conversion returned {content_type} instead of a PDF: {detail}")]
    NotPdf {
        content_type: String,
        detail: String,
    },

    /// Writing the PDF to disk failed.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Conversion parameters passed through to the endpoint.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Page size, e.g. "A4" or "Letter".
    pub page_size: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            page_size: "A4".into(),
        }
    }
}

/// Convert `html` to a PDF and write it to `output_path`.
///
/// Issues one POST request with the document as form data; on success the
/// raw response bytes land in `output_path` unmodified, overwriting any
/// existing file. No retry.
///
/// # Errors
///
/// `ConvertError::Network` on connection issues, `ConvertError::Api` on a
/// non-2xx status, `ConvertError::NotPdf` when the endpoint answers with a
/// non-PDF payload (nothing is written), `ConvertError::Write` on file
/// system errors.
pub async fn convert_html_to_pdf(
    access_key: &str,
    html: &str,
    options: &ConvertOptions,
    output_path: impl AsRef<Path>,
) -> Result<(), ConvertError> {
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| ConvertError::Network(e.to_string()))?;

    let resp = client
        .post(CONVERT_URL)
        .query(&[("access_key", access_key)])
        .form(&[
            ("document_html", html),
            ("page_size", options.page_size.as_str()),
        ])
        .send()
        .await
        .map_err(|e| ConvertError::Network(e.to_string()))?;

    let status = resp.status();
    let content_type = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let body = resp
        .bytes()
        .await
        .map_err(|e| ConvertError::Network(e.to_string()))?;

    if !status.is_success() {
        return Err(ConvertError::Api(format!(
            "HTTP {status}: {}",
            excerpt(&body)
        )));
    }

    persist_pdf(&content_type, &body, output_path.as_ref())
}

/// Write the response to disk if and only if it declares a PDF payload.
fn persist_pdf(content_type: &str, body: &[u8], path: &Path) -> Result<(), ConvertError> {
    if !is_pdf_content_type(content_type) {
        return Err(ConvertError::NotPdf {
            content_type: content_type.to_string(),
            detail: excerpt(body),
        });
    }
    fs::write(path, body).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// `application/pdf`, case-insensitive, parameters after `;` tolerated.
fn is_pdf_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/pdf"))
}

/// Bounded, lossy text excerpt of an error body for diagnostics.
fn excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let mut text = text.trim().to_string();
    if text.len() > DETAIL_LIMIT {
        let mut cut = DETAIL_LIMIT;
        while !text.is_char_boundary(cut) {
            cut -= 1;
        }
        text.truncate(cut);
        text.push_str("...");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("vatbill-{}-{name}", std::process::id()))
    }

    #[test]
    fn convert_url_is_https() {
        assert!(CONVERT_URL.starts_with("https://"));
    }

    #[test]
    fn pdf_content_type_variants() {
        assert!(is_pdf_content_type("application/pdf"));
        assert!(is_pdf_content_type("Application/PDF"));
        assert!(is_pdf_content_type("application/pdf; charset=binary"));
        assert!(!is_pdf_content_type("text/html"));
        assert!(!is_pdf_content_type("application/json"));
        assert!(!is_pdf_content_type(""));
    }

    #[test]
    fn pdf_payload_round_trips_to_disk() {
        let path = temp_path("roundtrip.pdf");
        let payload = b"%PDF-1.4 fake body \xff\xfe";
        persist_pdf("application/pdf", payload, &path).unwrap();
        assert_eq!(fs::read(&path).unwrap(), payload);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn non_pdf_payload_writes_nothing() {
        let path = temp_path("missing.pdf");
        let err = persist_pdf("application/json", b"{\"error\":true}", &path).unwrap_err();
        assert!(matches!(err, ConvertError::NotPdf { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn non_pdf_payload_preserves_existing_file() {
        let path = temp_path("preserved.pdf");
        fs::write(&path, b"previous run").unwrap();
        let _ = persist_pdf("text/html", b"<html>quota exceeded</html>", &path).unwrap_err();
        assert_eq!(fs::read(&path).unwrap(), b"previous run");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn not_pdf_error_carries_body_excerpt() {
        let err = persist_pdf("text/plain", b"quota exceeded", &temp_path("x.pdf")).unwrap_err();
        match err {
            ConvertError::NotPdf {
                content_type,
                detail,
            } => {
                assert_eq!(content_type, "text/plain");
                assert_eq!(detail, "quota exceeded");
            }
            other => panic!("expected NotPdf, got {other:?}"),
        }
    }

    #[test]
    fn excerpt_truncates_long_bodies() {
        let body = "e".repeat(2 * DETAIL_LIMIT);
        let text = excerpt(body.as_bytes());
        assert!(text.len() <= DETAIL_LIMIT + 3);
        assert!(text.ends_with("..."));
    }
}
