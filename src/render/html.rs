//! Invoice HTML template.
//!
//! Pure string templating: deterministic, no I/O, no failure modes for
//! well-formed inputs. The layout is a fixed document skeleton with one
//! table row per line item and a summary block; precise formatting is not
//! part of the contract, only the presence of the fields.

use crate::core::{CustomerInfo, LineItem, Totals};

/// Render the invoice document as a self-contained HTML string.
///
/// Embeds the invoice number, issue date (ISO), customer name and address,
/// one `<tr>` per line item in input order, and a summary showing subtotal,
/// VAT, and gross total. All free-text fields are HTML-escaped.
pub fn render_invoice_html(
    items: &[LineItem],
    customer: &CustomerInfo,
    totals: &Totals,
) -> String {
    let mut rows = String::new();
    for item in items {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>${}</td></tr>\n",
            escape_html(&item.description),
            item.quantity,
            item.unit_price
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Invoice {number}</title>
</head>
<body>
    <h1>Invoice #{number}</h1>
    <p>Date: {date}</p>
    <p>{name}<br>{address}</p>
    <h2>Invoice Details</h2>
    <table>
        <tr>
            <th>Description</th>
            <th>Quantity</th>
            <th>Unit Price</th>
        </tr>
{rows}    </table>
    <h3>Summary</h3>
    <p>Subtotal: ${subtotal}</p>
    <p>VAT: ${vat}</p>
    <p>Total: ${total}</p>
</body>
</html>
"#,
        number = escape_html(&customer.invoice_number),
        date = customer.date.format("%Y-%m-%d"),
        name = escape_html(&customer.name),
        address = escape_html(&customer.address),
        rows = rows,
        subtotal = totals.subtotal,
        vat = totals.vat,
        total = totals.total,
    )
}

/// Minimal HTML escaping for text interpolated into the template.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"Bits & Bobs"</b>"#),
            "&lt;b&gt;&quot;Bits &amp; Bobs&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(escape_html("Beratung, 10 Stunden"), "Beratung, 10 Stunden");
    }
}
