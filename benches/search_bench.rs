use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plainpad::TextBuffer;

fn large_document() -> TextBuffer {
    let mut buffer = TextBuffer::new();
    let line = "The quick brown fox jumps over the lazy dog. THE END of the line.\n";
    buffer.set_text(&line.repeat(5_000));
    buffer
}

fn bench_search(c: &mut Criterion) {
    let buffer = large_document();

    c.bench_function("search_common_word", |b| {
        b.iter(|| buffer.search(black_box(Some("the"))))
    });

    c.bench_function("search_missing_word", |b| {
        b.iter(|| buffer.search(black_box(Some("zebra"))))
    });

    c.bench_function("status_at_end", |b| {
        b.iter(|| buffer.status(black_box(buffer.len_chars())))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
