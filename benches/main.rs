use banner_panel::poller::tick;
use banner_panel::sink::Label;
use banner_panel::source::{FileSource, decode_banner, read_banner};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::io::Write;

const BANNER: &str = "12% μ/d — 30% μ/h —  1h  5m 🔨";

fn banner_file(content: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode_banner", |b| {
        b.iter(|| {
            let text = decode_banner(black_box(BANNER.as_bytes().to_vec()));
            black_box(text)
        })
    });

    c.bench_function("decode_banner_invalid", |b| {
        b.iter(|| {
            let text = decode_banner(black_box(vec![0x30, 0xff, 0x31]));
            black_box(text)
        })
    });
}

fn bench_read(c: &mut Criterion) {
    let file = banner_file(BANNER.as_bytes());
    let source = FileSource::new(file.path(), 64 * 1024);

    c.bench_function("read_banner", |b| {
        b.iter(|| black_box(read_banner(&source)))
    });

    let dir = tempfile::tempdir().unwrap();
    let missing = FileSource::new(dir.path().join("banner"), 64 * 1024);

    c.bench_function("read_banner_missing", |b| {
        b.iter(|| black_box(read_banner(&missing)))
    });
}

fn bench_tick(c: &mut Criterion) {
    let file = banner_file(BANNER.as_bytes());
    let source = FileSource::new(file.path(), 64 * 1024);
    let label = Label::placeholder();

    c.bench_function("tick_update_label", |b| {
        b.iter(|| black_box(tick(&source, &label)))
    });
}

criterion_group!(benches, bench_decode, bench_read, bench_tick);
criterion_main!(benches);
