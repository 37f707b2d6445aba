use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kundali::{find_matches, generate_profile, score, Role};

fn bench_score(c: &mut Criterion) {
    let groom = generate_profile("Leo", 12.0, "Magha").unwrap();
    let bride = generate_profile("Taurus", 20.0, "Rohini").unwrap();

    c.bench_function("ashtakoota_score", |b| {
        b.iter(|| score(black_box(&groom), black_box(&bride)))
    });
}

fn bench_find_matches(c: &mut Criterion) {
    let profile = generate_profile("Aries", 5.0, "Ashwini").unwrap();

    c.bench_function("find_matches", |b| {
        b.iter(|| find_matches(black_box(&profile), black_box(Role::Groom)))
    });
}

criterion_group!(benches, bench_score, bench_find_matches);
criterion_main!(benches);
