use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One billable entry on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Free-text description shown on the invoice.
    pub description: String,
    /// Invoiced quantity (positive integer).
    pub quantity: u32,
    /// Net price per unit (non-negative).
    pub unit_price: Decimal,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: u32, unit_price: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
        }
    }

    /// Net amount for this line: quantity × unit price.
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

/// Invoice header data. Purely cosmetic — rendered into the document,
/// never validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    /// Invoice number as displayed (e.g. "12345").
    pub invoice_number: String,
    /// Invoice issue date.
    pub date: NaiveDate,
    /// Customer name.
    pub name: String,
    /// Customer postal address, single line.
    pub address: String,
}

/// Derived invoice amounts. Recomputed each call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all line net amounts.
    pub subtotal: Decimal,
    /// VAT amount as resolved by the tax service.
    pub vat: Decimal,
    /// Gross total = subtotal + VAT.
    pub total: Decimal,
}

impl Totals {
    /// Combine a subtotal with an externally resolved VAT amount.
    pub fn from_parts(subtotal: Decimal, vat: Decimal) -> Self {
        Self {
            subtotal,
            vat,
            total: subtotal + vat,
        }
    }
}

/// Sum of quantity × unit price across `items`, in input order,
/// before any rounding.
pub fn subtotal(items: &[LineItem]) -> Decimal {
    items.iter().map(LineItem::line_total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn line_total_multiplies() {
        let item = LineItem::new("Product 1", 2, dec!(50));
        assert_eq!(item.line_total(), dec!(100));
    }

    #[test]
    fn line_total_fractional_price() {
        let item = LineItem::new("Hosting", 3, dec!(49.90));
        assert_eq!(item.line_total(), dec!(149.70));
    }

    #[test]
    fn subtotal_of_reference_items() {
        let items = [
            LineItem::new("Product 1", 2, dec!(50)),
            LineItem::new("Service 1", 1, dec!(80)),
        ];
        assert_eq!(subtotal(&items), dec!(180));
    }

    #[test]
    fn subtotal_of_empty_list_is_zero() {
        assert_eq!(subtotal(&[]), Decimal::ZERO);
    }

    #[test]
    fn totals_from_parts() {
        let t = Totals::from_parts(dec!(180), dec!(36));
        assert_eq!(t.total, dec!(216));
    }
}
