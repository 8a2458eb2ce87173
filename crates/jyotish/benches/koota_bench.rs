use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jyotish::compatibility::{KootaScorer, MoonProfile};
use jyotish::vedic::NakshatraClassifier;
use jyotish::zodiac::ZodiacSign;

fn bench_score_all(c: &mut Criterion) {
    let p1 = MoonProfile::from_indices(ZodiacSign::Aries, 2);
    let p2 = MoonProfile::from_indices(ZodiacSign::Gemini, 5);
    c.bench_function("koota_score_all", |b| {
        b.iter(|| KootaScorer::score_all(black_box(&p1), black_box(&p2)))
    });
}

fn bench_all_pairs(c: &mut Criterion) {
    c.bench_function("koota_all_nakshatra_pairs", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for n1 in 1..=27u8 {
                for n2 in 1..=27u8 {
                    let s1 = ZodiacSign::from_index(usize::from(n1) % 12);
                    let s2 = ZodiacSign::from_index(usize::from(n2) % 12);
                    let scores = KootaScorer::score_all(
                        &MoonProfile::from_indices(s1, n1),
                        &MoonProfile::from_indices(s2, n2),
                    );
                    total += scores.iter().map(|s| s.points).sum::<f64>();
                }
            }
            black_box(total)
        })
    });
}

fn bench_classifier(c: &mut Criterion) {
    c.bench_function("nakshatra_index", |b| {
        b.iter(|| NakshatraClassifier::index_for_longitude(black_box(271.3)))
    });
}

criterion_group!(benches, bench_score_all, bench_all_pairs, bench_classifier);
criterion_main!(benches);
