use condition_expression::interpreter::ConditionExpression;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::collections::HashMap;

const EXPRESSIONS: [&str; 4] = [
    "deployed",
    "!being-captured && (ammo != 0 || reloading)",
    "true || ((true != false) != !(false && true))",
    "((a == b) && !c) || (d && (e || f == -1) && !!g)",
];

fn compile_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");
    for expression in EXPRESSIONS {
        group.throughput(Throughput::Bytes(expression.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(expression),
            &expression,
            |bencher, expression| {
                bencher.iter(|| ConditionExpression::new(expression));
            },
        );
    }
}

fn evaluate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let variables: HashMap<&str, i32> = [
        ("true", 1),
        ("false", 0),
        ("deployed", 1),
        ("ammo", 4),
        ("a", 2),
        ("b", 2),
        ("d", 1),
        ("f", -1),
        ("g", 3),
    ]
    .into_iter()
    .collect();

    for expression in EXPRESSIONS {
        let condition = match ConditionExpression::new(expression) {
            Ok(condition) => condition,
            Err(error) => panic!("benchmark expression `{}` is invalid: {}", expression, error),
        };

        group.bench_with_input(
            BenchmarkId::from_parameter(expression),
            &condition,
            |bencher, condition| {
                bencher.iter(|| condition.evaluate(&variables));
            },
        );
    }
}

criterion_group!(benches, compile_benchmark, evaluate_benchmark);
criterion_main!(benches);
