use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use playground_core::{CustomerId, InvoiceId};
use playground_infra::{
    InMemorySnapshotStore, InvoiceRepository, JsonSnapshotCodec, SnapshotInvoiceRepository,
};
use playground_invoicing::{
    DomainObjectMapper, FieldCopyMapper, Invoice, InvoiceDto, MapperStrategy, ProductCode,
    ProductQuantity, VisitorMapper,
};

/// Invoice with `lines` distinct product codes (`AAAA000`, `AAAA001`, ...).
fn invoice_with_lines(lines: usize) -> Invoice {
    let mut invoice = Invoice::new(InvoiceId::new(), CustomerId::new()).unwrap();
    for n in 0..lines {
        let prefix = (b'A' + (n / 1000) as u8) as char;
        let code = ProductCode::new(format!("{prefix}AAA{:03}", n % 1000)).unwrap();
        let quantity = ProductQuantity::new((n % 200) as i32 + 1).unwrap();
        invoice.add_line(code, quantity).unwrap();
    }
    invoice
}

fn bench_mappers(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_invoice");

    for lines in [1usize, 10, 100, 1000] {
        let invoice = invoice_with_lines(lines);

        group.bench_with_input(BenchmarkId::new("visitor", lines), &invoice, |b, invoice| {
            b.iter(|| {
                let dto: InvoiceDto = VisitorMapper.map(black_box(invoice)).unwrap();
                black_box(dto)
            })
        });

        group.bench_with_input(BenchmarkId::new("field_copy", lines), &invoice, |b, invoice| {
            b.iter(|| {
                let dto: InvoiceDto = FieldCopyMapper.map(black_box(invoice)).unwrap();
                black_box(dto)
            })
        });
    }

    group.finish();
}

fn bench_save(c: &mut Criterion) {
    let invoice = invoice_with_lines(100);
    let repo = SnapshotInvoiceRepository::new(
        MapperStrategy::Visitor,
        JsonSnapshotCodec,
        InMemorySnapshotStore::new(),
    );

    c.bench_function("save_invoice_100_lines", |b| {
        b.iter(|| repo.save(black_box(&invoice)).unwrap())
    });
}

criterion_group!(benches, bench_mappers, bench_save);
criterion_main!(benches);
