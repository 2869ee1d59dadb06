use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ordered_tree::OrderedTree;
use std::collections::BTreeSet;

#[derive(Clone)]
enum SetEnum<E: Ord + Clone> {
    Ordered(OrderedTree<E>),
    BTree(BTreeSet<E>),
}

impl<E> SetEnum<E>
where
    E: Ord + Clone,
{
    fn contains(&self, e: &E) -> bool {
        match self {
            Self::Ordered(t) => t.contains(e),
            Self::BTree(t) => t.contains(e),
        }
    }

    fn higher(&self, e: &E) -> Option<&E> {
        match self {
            Self::Ordered(t) => t.higher(e),
            Self::BTree(t) => t
                .range((std::ops::Bound::Excluded(e), std::ops::Bound::Unbounded))
                .next(),
        }
    }

    fn insert(&mut self, e: E) {
        match self {
            Self::Ordered(t) => {
                t.insert(e);
            }
            Self::BTree(t) => {
                t.insert(e);
            }
        }
    }

    fn remove(&mut self, e: &E) {
        match self {
            Self::Ordered(t) => {
                t.remove(e);
            }
            Self::BTree(t) => {
                t.remove(e);
            }
        }
    }

    fn sum_in_order(&self) -> i64
    where
        E: Copy + Into<i64>,
    {
        match self {
            Self::Ordered(t) => t.in_order().map(|e| (*e).into()).sum(),
            Self::BTree(t) => t.iter().map(|e| (*e).into()).sum(),
        }
    }
}

/// Orders `low..=high` so that inserting it builds a perfectly balanced tree: the middle of every
/// range comes before its halves. Inserting in sorted order would build a chain instead.
fn balanced_order(low: i32, high: i32, out: &mut Vec<i32>) {
    if low > high {
        return;
    }
    let mid = low + (high - low) / 2;
    out.push(mid);
    balanced_order(low, mid - 1, out);
    balanced_order(mid + 1, high, out);
}

/// Helper to bench a function on an ordered set.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// implementations of sets before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut SetEnum<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let num_nodes = 2usize.pow(num_levels as u32) - 1;
        let largest_element_in_tree = num_nodes - 1;

        let mut order = Vec::with_capacity(num_nodes);
        balanced_order(0, largest_element_in_tree as i32, &mut order);

        let ordered_tree = {
            let mut tree = OrderedTree::new();
            for x in &order {
                tree.insert(*x);
            }

            tree
        };
        let btree_set: BTreeSet<i32> = order.iter().copied().collect();

        let set_tests = [
            ("ordered", SetEnum::Ordered(ordered_tree)),
            ("btree", SetEnum::BTree(btree_set)),
        ];
        for (name, set) in set_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut set = black_box(set.clone());
                        let instant = std::time::Instant::now();
                        f(&mut set, black_box(largest_element_in_tree as i32));
                        let elapsed = instant.elapsed();
                        time += elapsed;
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "contains", |set, i| {
        let _value = black_box(set.contains(&i));
    });
    bench_helper(c, "remove", |set, i| {
        set.remove(&i);
    });

    bench_helper(c, "insert", |set, i| {
        set.insert(i + 1);
    });

    bench_helper(c, "contains-miss", |set, i| {
        let _value = black_box(set.contains(&(i + 1)));
    });
    bench_helper(c, "remove-miss", |set, i| {
        set.remove(&(i + 1));
    });

    bench_helper(c, "higher", |set, i| {
        let _value = black_box(set.higher(&(i / 2)));
    });
    bench_helper(c, "in-order", |set, _| {
        let _value = black_box(set.sum_in_order());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
