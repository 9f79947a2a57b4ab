use criterion::{black_box, criterion_group, criterion_main, Criterion};
use passforge::{analyze, CharacterClassConfig, OsRandom, PasswordGenerator, SeededRandom};

fn bench_generate(c: &mut Criterion) {
    let config = CharacterClassConfig::with_length(32);

    let mut seeded = PasswordGenerator::with_source(SeededRandom::from_seed([0x42u8; 32]));
    c.bench_function("generate_32_seeded", |b| {
        b.iter(|| seeded.generate(black_box(&config)))
    });

    let mut os = PasswordGenerator::with_source(OsRandom);
    c.bench_function("generate_32_os", |b| b.iter(|| os.generate(black_box(&config))));

    c.bench_function("generate_memorable_4", |b| {
        b.iter(|| seeded.generate_memorable(black_box(4)))
    });
}

fn bench_analyze(c: &mut Criterion) {
    c.bench_function("analyze_mixed", |b| {
        b.iter(|| analyze(black_box("Tiger-Ocean-Kettle-Meadow42#aaa")))
    });
}

criterion_group!(benches, bench_generate, bench_analyze);
criterion_main!(benches);
