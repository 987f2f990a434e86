//! HTML invoice rendering.

mod html;

pub use html::render_invoice_html;
