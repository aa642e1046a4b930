use std::collections::BTreeSet;

use avl_tree::AvlTree;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

const NUM_OF_OPERATIONS: usize = 1000;

fn random_keys() -> Vec<u32> {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    (0..NUM_OF_OPERATIONS).map(|_| rng.next_u32()).collect()
}

fn bench_btreeset_insert(c: &mut Criterion) {
    c.bench_function("bench btreeset insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = BTreeSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
        })
    });
}

fn bench_btreeset_contains(c: &mut Criterion) {
    let keys = random_keys();
    let set: BTreeSet<u32> = keys.iter().cloned().collect();

    c.bench_function("bench btreeset contains", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(set.contains(key));
            }
        })
    });
}

fn bench_avl_tree_insert(c: &mut Criterion) {
    c.bench_function("bench avl_tree insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut tree = AvlTree::new();
            for _ in 0..NUM_OF_OPERATIONS {
                tree.insert(rng.next_u32());
            }
        })
    });
}

fn bench_avl_tree_contains(c: &mut Criterion) {
    let keys = random_keys();
    let mut tree = AvlTree::new();
    for key in &keys {
        tree.insert(*key);
    }

    c.bench_function("bench avl_tree contains", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(tree.contains(key));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_btreeset_contains,
    bench_btreeset_insert,
    bench_avl_tree_contains,
    bench_avl_tree_insert,
);
criterion_main!(benches);
