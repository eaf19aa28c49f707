use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use derive_more::{Deref, From};
use editdist::{sequence_edit_distance, tree_edit_distance, Tree, UnitCost};
use itertools::Itertools;

#[derive(Default, Clone, From, Deref)]
struct Unlabeled(#[deref(forward)] Vec<Self>);

impl<'t> Tree<'t> for Unlabeled {
    type Label = ();
    fn label(&'t self) -> &'t () {
        &()
    }

    type Children = &'t [Self];
    fn children(&'t self) -> Self::Children {
        self
    }
}

fn tree(leaves: Vec<Unlabeled>, r: usize) -> Unlabeled {
    if leaves.len() < r {
        leaves.into()
    } else {
        let chunks = (leaves.len() + r - 1) / r;
        leaves
            .into_iter()
            .chunks(chunks)
            .into_iter()
            .map(|c| tree(c.collect(), r))
            .collect::<Vec<_>>()
            .into()
    }
}

fn bench_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("n-tree distance");
    for r in [4, 8, 16] {
        group.bench_with_input(
            BenchmarkId::from_parameter(r),
            &tree(vec![Unlabeled::default(); 100], r),
            |b, t| b.iter(|| tree_edit_distance(Some(t), Some(t), &UnitCost, false)),
        );
    }
    group.finish();
}

fn bench_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence distance");
    for n in [64usize, 256, 1024] {
        let a: Vec<usize> = (0..n).collect();
        let b: Vec<usize> = (0..n).map(|x| x / 2 * 2).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &(a, b), |bench, (a, b)| {
            bench.iter(|| sequence_edit_distance(a, b, &UnitCost, false, false))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tree, bench_sequence);
criterion_main!(benches);
