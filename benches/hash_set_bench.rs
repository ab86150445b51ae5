use chained_hashset::ChainedHashSet;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("chained_hashset_insert_10k", |b| {
        b.iter_batched(
            ChainedHashSet::<u64>::new,
            |mut set| {
                for x in lcg(1).take(10_000) {
                    set.insert(x);
                }
                black_box(set)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_find_hit(c: &mut Criterion) {
    c.bench_function("chained_hashset_find_hit", |b| {
        let mut set = ChainedHashSet::new();
        let keys: Vec<u64> = lcg(7).take(20_000).collect();
        for &k in &keys {
            set.insert(k);
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(set.find(k));
        })
    });
}

fn bench_find_miss(c: &mut Criterion) {
    c.bench_function("chained_hashset_find_miss", |b| {
        let mut set = ChainedHashSet::new();
        for x in lcg(11).take(10_000) {
            set.insert(x);
        }
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            let k = miss.next().unwrap();
            black_box(set.contains(&k));
        })
    });
}

fn bench_iterate(c: &mut Criterion) {
    c.bench_function("chained_hashset_iterate_10k", |b| {
        let mut set = ChainedHashSet::new();
        for x in lcg(3).take(10_000) {
            set.insert(x);
        }
        b.iter(|| {
            let mut acc = 0u64;
            for v in &set {
                acc = acc.wrapping_add(*v);
            }
            black_box(acc)
        })
    });
}

fn bench_rehash(c: &mut Criterion) {
    c.bench_function("chained_hashset_rehash_10k", |b| {
        let mut master = ChainedHashSet::with_buckets(16_384);
        for x in lcg(5).take(10_000) {
            master.insert(x);
        }
        b.iter_batched(
            || master.clone(),
            |mut set| {
                set.rehash(set.bucket_count() * 2);
                black_box(set)
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_insert,
    bench_find_hit,
    bench_find_miss,
    bench_iterate,
    bench_rehash
);
criterion_main!(benches);
