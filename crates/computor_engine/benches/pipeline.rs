use computor_engine::solve_equation;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_solve_equation(c: &mut Criterion) {
    let cases = [
        ("linear", "5 * X^0 + 4 * X^1 = 4 * X^0"),
        ("quadratic", "5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0"),
        ("complex", "X^2 + X + 1 = 0"),
        (
            "long",
            "1 + 2 * X + 3 * X^2 + 4 * X^3 + 5 * X^4 - 6 * X^5 = 7 * X^5 - 8 * X^4 + 9 * X^3",
        ),
    ];

    let mut group = c.benchmark_group("solve_equation");
    for (name, text) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| solve_equation(black_box(text)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve_equation);
criterion_main!(benches);
