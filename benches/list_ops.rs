use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use chainlist::{FixedArena, List, Node, OwnedList};

const N: usize = 1024;

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    group.bench_function("owned_push_back_pop_front", |b| {
        b.iter_batched_ref(
            || OwnedList::<u64>::with_capacity(N),
            |list| {
                for i in 0..N as u64 {
                    list.push_back(black_box(i)).unwrap();
                }
                while let Ok(v) = list.pop_front() {
                    black_box(v);
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("engine_push_back_pop_front", |b| {
        b.iter_batched_ref(
            || {
                (
                    FixedArena::<Node<u64>>::with_capacity(N),
                    List::<u64, FixedArena<Node<u64>>>::new(),
                )
            },
            |(arena, list)| {
                for i in 0..N as u64 {
                    list.try_push_back(arena, black_box(i)).unwrap();
                }
                while let Some(v) = list.pop_front(arena) {
                    black_box(v);
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_remove_by_index(c: &mut Criterion) {
    c.bench_function("remove_middle_by_index", |b| {
        b.iter_batched_ref(
            || {
                let mut list = OwnedList::<u64>::with_capacity(N);
                let indices: Vec<_> = (0..N as u64)
                    .map(|i| list.push_back(i).unwrap())
                    .collect();
                (list, indices)
            },
            |(list, indices)| {
                for &idx in indices.iter() {
                    black_box(list.remove(idx));
                }
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_splice(c: &mut Criterion) {
    c.bench_function("engine_append_shared_arena", |b| {
        b.iter_batched_ref(
            || {
                let mut arena = FixedArena::<Node<u64>>::with_capacity(2 * N);
                let mut a = List::<u64, FixedArena<Node<u64>>>::new();
                let mut bl = List::<u64, FixedArena<Node<u64>>>::new();
                for i in 0..N as u64 {
                    a.try_push_back(&mut arena, i).unwrap();
                    bl.try_push_back(&mut arena, i).unwrap();
                }
                (arena, a, bl)
            },
            |(arena, a, bl)| {
                a.append(arena, bl);
                black_box(a.len());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_iterate(c: &mut Criterion) {
    c.bench_function("iterate_1024", |b| {
        let list: OwnedList<u64> = (0..N as u64).collect();
        b.iter(|| {
            let mut sum = 0u64;
            for v in list.iter() {
                sum = sum.wrapping_add(*v);
            }
            black_box(sum)
        });
    });
}

fn bench_reverse(c: &mut Criterion) {
    c.bench_function("reverse_1024", |b| {
        b.iter_batched_ref(
            || (0..N as u64).collect::<OwnedList<u64>>(),
            |list| list.reverse(),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_push_pop,
    bench_remove_by_index,
    bench_splice,
    bench_iterate,
    bench_reverse
);
criterion_main!(benches);
