use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 1000;

fn bench_btreeset_insert(c: &mut Criterion) {
    c.bench_function("bench btreeset insert", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(1);
            let mut set = BTreeSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.gen::<u32>());
            }
        })
    });
}

fn bench_btreeset_contains(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let mut set = BTreeSet::new();
    let mut values = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let value = rng.gen::<u32>();
        set.insert(value);
        values.push(value);
    }

    c.bench_function("bench btreeset contains", move |b| {
        b.iter(|| {
            for value in &values {
                black_box(set.contains(value));
            }
        })
    });
}

macro_rules! bst_set_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use balanced_collections::$module_name::$type_name;
                use criterion::{black_box, Criterion};
                use rand::rngs::StdRng;
                use rand::{Rng, SeedableRng};
                use super::NUM_OF_OPERATIONS;

                pub fn bench_insert(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} insert", stringify!($module_name)), |b| b.iter(|| {
                        let mut rng = StdRng::seed_from_u64(1);
                        let mut set = $type_name::new();
                        for _ in 0..NUM_OF_OPERATIONS {
                            set.insert(rng.gen::<u32>());
                        }
                    }));
                }

                pub fn bench_contains(c: &mut Criterion) {
                    let mut rng = StdRng::seed_from_u64(1);
                    let mut set = $type_name::new();
                    let mut values = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let value = rng.gen::<u32>();
                        set.insert(value);
                        values.push(value);
                    }

                    c.bench_function(&format!("bench {} contains", stringify!($module_name)), move |b| b.iter(|| {
                        for value in &values {
                            black_box(set.contains(value));
                        }
                    }));
                }

                pub fn bench_insert_remove(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} insert remove", stringify!($module_name)), |b| b.iter(|| {
                        let mut rng = StdRng::seed_from_u64(1);
                        let mut set = $type_name::new();
                        let mut values = Vec::new();
                        for _ in 0..NUM_OF_OPERATIONS {
                            let value = rng.gen::<u32>();
                            set.insert(value);
                            values.push(value);
                        }
                        for value in &values {
                            set.remove(value);
                        }
                    }));
                }
            }
        )*

        criterion_group!(
            benches,
            bench_btreeset_contains,
            bench_btreeset_insert,
            $(
                $module_name::bench_contains,
                $module_name::bench_insert,
                $module_name::bench_insert_remove,
            )*
        );
    }
}

bst_set_benches!(
    avl: AvlSet,
    bst: BstSet,
);

criterion_main!(benches);
