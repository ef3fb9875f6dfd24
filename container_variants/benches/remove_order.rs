// benches/remove_order.rs

use container_variants::{Container, Deque, DequeMode, PriorityQueue, Queue, Stack};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::Rng;

fn random_values(size: usize) -> Vec<u64> {
    let mut rng = rand::rng();
    (0..size).map(|_| rng.random_range(0..1_000)).collect()
}

fn fill_and_drain<C: Container<u64>>(mut c: C, values: &[u64]) -> u64 {
    for &v in values {
        c.add(v);
    }
    let mut sum = 0u64;
    while let Ok(v) = c.remove() {
        sum = sum.wrapping_add(black_box(v));
    }
    sum
}

fn bench_fill_and_drain(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("fill_and_drain");
    for size in sizes {
        let values = random_values(size);

        group.bench_with_input(BenchmarkId::new("stack", size), &values, |b, v| {
            b.iter(|| fill_and_drain(Stack::with_capacity(v.len()), v));
        });
        group.bench_with_input(BenchmarkId::new("queue", size), &values, |b, v| {
            b.iter(|| fill_and_drain(Queue::with_capacity(v.len()), v));
        });
        group.bench_with_input(BenchmarkId::new("priority_queue", size), &values, |b, v| {
            b.iter(|| fill_and_drain(PriorityQueue::with_capacity(v.len()), v));
        });
        group.bench_with_input(BenchmarkId::new("deque_front", size), &values, |b, v| {
            b.iter(|| fill_and_drain(Deque::with_capacity(DequeMode::Front, v.len()), v));
        });
    }
    group.finish();
}

fn bench_peek(c: &mut Criterion) {
    let sizes = vec![100, 10_000];

    let mut group = c.benchmark_group("peek");
    for size in sizes {
        let pq: PriorityQueue<u64> = random_values(size).into_iter().collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(pq.peek().copied()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fill_and_drain, bench_peek);
criterion_main!(benches);
