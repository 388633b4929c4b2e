use std::io::{Read, Write};

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use uriio::{Locator, ReadStream, Scheme, UriSink, UriSource, WriteStream};

fn bench_parse_resolve(c: &mut Criterion) {
    let inputs = [
        "https://example.com/data.txt",
        "file:///tmp/data.txt",
        "relative/path/data.txt",
    ];

    c.bench_function("locator_parse_resolve", |b| {
        b.iter(|| {
            for text in inputs {
                let locator = Locator::parse(black_box(text)).unwrap();
                let _ = black_box(Scheme::of(&locator));
            }
        })
    });
}

fn bench_file_round_trip(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bench.txt");

    c.bench_function("file_write_read_round_trip", |b| {
        b.iter_batched(
            || (UriSink::new(path.clone()), UriSource::new(path.clone())),
            |(sink, source)| {
                let mut out = sink.open().unwrap();
                out.write_all(b"Hello, world!").unwrap();
                out.close().unwrap();

                let mut input = source.open().unwrap();
                let mut body = String::new();
                input.read_to_string(&mut body).unwrap();
                input.close().unwrap();
                body
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_parse_resolve, bench_file_round_trip);
criterion_main!(benches);
