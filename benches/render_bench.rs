use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use vatbill::render::render_invoice_html;
use vatbill::{CustomerInfo, LineItem, Totals, subtotal};

fn build_items(n: usize) -> Vec<LineItem> {
    (1..=n)
        .map(|i| LineItem::new(format!("Service item {i}"), i as u32, dec!(99.50)))
        .collect()
}

fn customer() -> CustomerInfo {
    CustomerInfo {
        invoice_number: "BENCH-001".into(),
        date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        name: "Benchmark GmbH".into(),
        address: "Hauptstr. 1, Berlin".into(),
    }
}

fn bench_render(c: &mut Criterion) {
    let customer = customer();

    for n in [10, 100] {
        let items = build_items(n);
        let totals = Totals::from_parts(subtotal(&items), dec!(19));
        c.bench_function(&format!("render_invoice_html_{n}_lines"), |b| {
            b.iter(|| render_invoice_html(black_box(&items), black_box(&customer), &totals))
        });
    }
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
