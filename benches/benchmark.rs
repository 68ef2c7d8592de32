use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lexico::scanner::Scanner;

fn document(operations: usize) -> String {
    let mut text = String::new();
    for i in 0..operations {
        text.push_str("<Operacion= MULTIPLICACION>\n");
        text.push_str(&format!("    <Numero>{}.25</Numero>\n", i));
        text.push_str("    <Numero>3</Numero>\n");
        text.push_str("</Operacion>\n");
    }
    text
}

fn bench_scan(c: &mut Criterion) {
    let scanner = Scanner::new();

    let clean = document(500);
    let mut group = c.benchmark_group("scan");
    group.throughput(Throughput::Bytes(clean.len() as u64));
    group.bench_function("clean document", |b| b.iter(|| scanner.scan(black_box(&clean))));

    // every letter of a mixed-case name is an error
    let noisy = clean.replace("MULTIPLICACION", "Multiplicacion");
    group.bench_function("error cascade", |b| b.iter(|| scanner.scan(black_box(&noisy))));
    group.finish();
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
