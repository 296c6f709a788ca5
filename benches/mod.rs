use criterion::{criterion_group, criterion_main};


criterion_group!(
    benches,
    cli::bench_ingest_printable,
    cli::bench_dispatch_line,
    cli::bench_tab_cycle,
    cli::bench_escape_filter
);
criterion_main!(benches);
