//! HTML-to-PDF conversion via the pdflayer convert endpoint.

mod pdflayer;

pub use pdflayer::{ConvertError, ConvertOptions, convert_html_to_pdf};
