use derive_more::From;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, Default, Copy, Clone, PartialEq, From)]
struct OrdCost(f64);

impl Eq for OrdCost {}

impl PartialOrd for OrdCost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrdCost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Selects the `k` candidates nearest to `query` under `distance`.
///
/// Returns `min(k, candidates.len())` pairs of candidate index and distance,
/// ascending by distance with ties broken by candidate order. Uses a bounded
/// heap, `O(candidates · log k)`, rather than a full sort. `k == 0` yields an
/// empty result.
///
/// # Example
///
/// ```rust
/// use editdist::{k_nearest, sequence_edit_distance, UnitCost};
///
/// let words = ["kitten", "mitten", "sitting", "knitting"];
/// let near = k_nearest(&"mittens", &words, 2, |query, word| {
///     let q: Vec<char> = query.chars().collect();
///     let w: Vec<char> = word.chars().collect();
///     sequence_edit_distance(&q, &w, &UnitCost, false, false).unwrap()
/// });
///
/// assert_eq!(near, vec![(1, 1.0), (0, 2.0)]);
/// ```
pub fn k_nearest<Q, T, F>(query: &Q, candidates: &[T], k: usize, mut distance: F) -> Vec<(usize, f64)>
where
    Q: ?Sized,
    F: FnMut(&Q, &T) -> f64,
{
    select(candidates.iter().map(|c| distance(query, c)), k)
}

/// [`k_nearest`] with candidate distances evaluated in parallel.
///
/// Candidate evaluations are independent and read-only, so they fan out over
/// the rayon pool; the top-k merge stays sequential and yields the same
/// result as [`k_nearest`] regardless of evaluation order.
#[cfg(feature = "parallel")]
pub fn par_k_nearest<Q, T, F>(query: &Q, candidates: &[T], k: usize, distance: F) -> Vec<(usize, f64)>
where
    Q: Sync + ?Sized,
    T: Sync,
    F: Fn(&Q, &T) -> f64 + Sync,
{
    use rayon::prelude::*;

    let distances: Vec<f64> = candidates.par_iter().map(|c| distance(query, c)).collect();
    select(distances, k)
}

fn select<I: IntoIterator<Item = f64>>(distances: I, k: usize) -> Vec<(usize, f64)> {
    if k == 0 {
        return Vec::new();
    }

    // Max-heap of the k best (distance, index) pairs; the lexicographic order
    // makes equal distances evict the later candidate first.
    let mut heap: BinaryHeap<(OrdCost, usize)> = BinaryHeap::with_capacity(k);

    for (index, distance) in distances.into_iter().enumerate() {
        let entry = (OrdCost::from(distance), index);

        if heap.len() < k {
            heap.push(entry);
        } else if let Some(mut top) = heap.peek_mut() {
            if entry < *top {
                *top = entry;
            }
        }
    }

    heap.into_sorted_vec()
        .into_iter()
        .map(|(OrdCost(distance), index)| (index, distance))
        .collect()
}
