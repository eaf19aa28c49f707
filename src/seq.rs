use crate::{Checked, CostFn, EditOp, InvalidCostError};
use arrayvec::ArrayVec;

/// Bounded-in-`[0, 1]` normalization weighting by combined input size plus
/// raw cost.
pub(crate) fn normalized(raw: f64, size: usize) -> f64 {
    if raw == 0.0 {
        0.0
    } else {
        2.0 * raw / (size as f64 + raw)
    }
}

/// Pluggable-cost edit distance between two sequences.
///
/// With [`UnitCost`][crate::UnitCost] this is the Levenshtein distance, or the
/// Damerau-Levenshtein distance when `transpositions` is enabled. A transposition
/// is only considered where the two pairs match crosswise under a zero
/// substitution cost. With `normalize`, the raw cost `d` is rescaled to
/// `2d / (|a| + |b| + d)`, which is `0` for equal inputs and at most `1`.
pub fn sequence_edit_distance<T, C>(
    a: &[T],
    b: &[T],
    cost: &C,
    transpositions: bool,
    normalize: bool,
) -> Result<f64, InvalidCostError>
where
    C: CostFn<T>,
{
    let table = fill(a, b, &Checked(cost), transpositions)?;
    let raw = table[a.len()][b.len()];

    Ok(if normalize {
        normalized(raw, a.len() + b.len())
    } else {
        raw
    })
}

/// Computes the edit distance between two sequences along with a minimal edit
/// script realizing it.
///
/// The script transforms `a` into `b` left to right and its steps sum to the
/// reported distance; matches (zero-cost substitutions) are omitted. Among
/// equally cheap alignments, steps are preferred in the order transpose,
/// substitute, insert, delete.
pub fn sequence_edit_script<'a, T, C>(
    a: &'a [T],
    b: &'a [T],
    cost: &C,
    transpositions: bool,
) -> Result<(f64, Vec<EditOp<'a, T>>), InvalidCostError>
where
    C: CostFn<T>,
{
    let checked = Checked(cost);
    let table = fill(a, b, &checked, transpositions)?;

    let mut script = Vec::new();
    let (mut i, mut j) = (a.len(), b.len());

    while i > 0 || j > 0 {
        let mut moves: ArrayVec<(f64, f64, Step), 4> = ArrayVec::new();

        if transpositions && swappable(a, b, i, j, &checked)? {
            let swap = checked.transpose(&a[i - 2], &a[i - 1])?;
            moves.push((table[i - 2][j - 2], swap, Step::Transpose));
        }

        if i > 0 && j > 0 {
            let sub = checked.substitute(&a[i - 1], &b[j - 1])?;
            moves.push((table[i - 1][j - 1], sub, Step::Substitute));
        }

        if j > 0 {
            moves.push((table[i][j - 1], checked.insert(&b[j - 1])?, Step::Insert));
        }

        if i > 0 {
            moves.push((table[i - 1][j], checked.delete(&a[i - 1])?, Step::Delete));
        }

        // Exact comparison is intentional: each candidate recomputes the very
        // sum that produced the cell during the forward pass.
        let Some(&(_, op, step)) = moves.iter().find(|(prev, op, _)| table[i][j] == prev + op)
        else {
            debug_assert!(false, "cell not reproducible from its predecessors");
            break;
        };

        match step {
            Step::Transpose => {
                if op > 0.0 {
                    script.push(EditOp::Transpose {
                        left: i - 2,
                        right: j - 2,
                        first: &a[i - 2],
                        second: &a[i - 1],
                    });
                }
                i -= 2;
                j -= 2;
            }
            Step::Substitute => {
                if op > 0.0 {
                    script.push(EditOp::Substitute {
                        left: i - 1,
                        right: j - 1,
                        from: &a[i - 1],
                        to: &b[j - 1],
                    });
                }
                i -= 1;
                j -= 1;
            }
            Step::Insert => {
                if op > 0.0 {
                    script.push(EditOp::Insert {
                        index: j - 1,
                        item: &b[j - 1],
                    });
                }
                j -= 1;
            }
            Step::Delete => {
                if op > 0.0 {
                    script.push(EditOp::Delete {
                        index: i - 1,
                        item: &a[i - 1],
                    });
                }
                i -= 1;
            }
        }
    }

    script.reverse();
    Ok((table[a.len()][b.len()], script))
}

#[derive(Copy, Clone)]
enum Step {
    Transpose,
    Substitute,
    Insert,
    Delete,
}

/// Whether positions `i`, `j` end a crosswise-matching adjacent pair, making a
/// transposition applicable.
fn swappable<T, C>(
    a: &[T],
    b: &[T],
    i: usize,
    j: usize,
    cost: &Checked<C>,
) -> Result<bool, InvalidCostError>
where
    C: CostFn<T>,
{
    Ok(i > 1
        && j > 1
        && cost.substitute(&a[i - 1], &b[j - 2])? == 0.0
        && cost.substitute(&a[i - 2], &b[j - 1])? == 0.0)
}

fn fill<T, C>(
    a: &[T],
    b: &[T],
    cost: &Checked<C>,
    transpositions: bool,
) -> Result<Vec<Vec<f64>>, InvalidCostError>
where
    C: CostFn<T>,
{
    let (n, m) = (a.len(), b.len());
    let mut table = vec![vec![0.0; m + 1]; n + 1];

    for i in 1..=n {
        table[i][0] = table[i - 1][0] + cost.delete(&a[i - 1])?;
    }

    for j in 1..=m {
        table[0][j] = table[0][j - 1] + cost.insert(&b[j - 1])?;
    }

    for i in 1..=n {
        for j in 1..=m {
            let mut best = table[i - 1][j - 1] + cost.substitute(&a[i - 1], &b[j - 1])?;
            best = best.min(table[i][j - 1] + cost.insert(&b[j - 1])?);
            best = best.min(table[i - 1][j] + cost.delete(&a[i - 1])?);

            if transpositions && swappable(a, b, i, j, cost)? {
                best = best.min(table[i - 2][j - 2] + cost.transpose(&a[i - 2], &a[i - 1])?);
            }

            table[i][j] = best;
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnitCost;
    use proptest::collection::{size_range, vec};
    use test_strategy::proptest;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn a_single_deletion_costs_one() {
        let d = sequence_edit_distance(&chars("abc"), &chars("ac"), &UnitCost, false, false);
        assert_eq!(d, Ok(1.0));
    }

    #[test]
    fn kitten_to_sitting_takes_three_edits() {
        let d = sequence_edit_distance(&chars("kitten"), &chars("sitting"), &UnitCost, false, false);
        assert_eq!(d, Ok(3.0));
    }

    #[test]
    fn kitten_to_sitting_normalized() {
        let d = sequence_edit_distance(&chars("kitten"), &chars("sitting"), &UnitCost, false, true);
        assert_eq!(d, Ok(2.0 * 3.0 / 16.0));
    }

    #[test]
    fn transpositions_collapse_adjacent_swaps() {
        let (ab, ba) = (chars("ab"), chars("ba"));
        let plain = sequence_edit_distance(&ab, &ba, &UnitCost, false, false);
        let damerau = sequence_edit_distance(&ab, &ba, &UnitCost, true, false);
        assert_eq!(plain, Ok(2.0));
        assert_eq!(damerau, Ok(1.0));
    }

    #[test]
    fn empty_inputs_cost_nothing() {
        let none: [char; 0] = [];
        assert_eq!(
            sequence_edit_distance(&none, &none, &UnitCost, false, false),
            Ok(0.0)
        );
        assert_eq!(
            sequence_edit_distance(&none, &none, &UnitCost, false, true),
            Ok(0.0)
        );
    }

    #[test]
    fn kitten_to_sitting_script() {
        let (kitten, sitting) = (chars("kitten"), chars("sitting"));
        let (d, script) = sequence_edit_script(&kitten, &sitting, &UnitCost, false).unwrap();

        assert_eq!(d, 3.0);
        assert_eq!(
            script,
            vec![
                EditOp::Substitute {
                    left: 0,
                    right: 0,
                    from: &'k',
                    to: &'s'
                },
                EditOp::Substitute {
                    left: 4,
                    right: 4,
                    from: &'e',
                    to: &'i'
                },
                EditOp::Insert {
                    index: 6,
                    item: &'g'
                },
            ]
        );
    }

    #[test]
    fn transposed_pair_yields_a_single_script_step() {
        let (ab, ba) = (chars("ab"), chars("ba"));
        let (d, script) = sequence_edit_script(&ab, &ba, &UnitCost, true).unwrap();

        assert_eq!(d, 1.0);
        assert_eq!(
            script,
            vec![EditOp::Transpose {
                left: 0,
                right: 0,
                first: &'a',
                second: &'b'
            }]
        );
    }

    #[test]
    fn negative_costs_are_rejected() {
        struct Negative;

        impl CostFn<char> for Negative {
            fn delete(&self, _: &char) -> f64 {
                1.0
            }

            fn insert(&self, _: &char) -> f64 {
                1.0
            }

            fn substitute(&self, _: &char, _: &char) -> f64 {
                -0.5
            }
        }

        let d = sequence_edit_distance(&chars("ab"), &chars("cd"), &Negative, false, false);
        assert_eq!(d, Err(InvalidCostError(-0.5)));
    }

    #[proptest]
    fn the_distance_between_identical_sequences_is_zero(
        #[any(size_range(0..16).lift())] a: Vec<u8>,
    ) {
        assert_eq!(
            sequence_edit_distance(&a, &a, &UnitCost, false, false),
            Ok(0.0)
        );
    }

    #[proptest]
    fn the_distance_to_an_empty_sequence_is_the_sequence_length(
        #[any(size_range(0..16).lift())] a: Vec<u8>,
    ) {
        let none: [u8; 0] = [];
        assert_eq!(
            sequence_edit_distance(&a, &none, &UnitCost, false, false),
            Ok(a.len() as f64)
        );
        assert_eq!(
            sequence_edit_distance(&none, &a, &UnitCost, false, false),
            Ok(a.len() as f64)
        );
    }

    #[proptest]
    fn the_distance_is_symmetric(
        #[any(size_range(0..12).lift())] a: Vec<u8>,
        #[any(size_range(0..12).lift())] b: Vec<u8>,
    ) {
        assert_eq!(
            sequence_edit_distance(&a, &b, &UnitCost, false, false),
            sequence_edit_distance(&b, &a, &UnitCost, false, false),
        );
    }

    #[proptest]
    fn the_distance_satisfies_the_triangle_inequality(
        #[strategy(vec(0u8..4, 0..8))] a: Vec<u8>,
        #[strategy(vec(0u8..4, 0..8))] b: Vec<u8>,
        #[strategy(vec(0u8..4, 0..8))] c: Vec<u8>,
    ) {
        let ac = sequence_edit_distance(&a, &c, &UnitCost, false, false).unwrap();
        let ab = sequence_edit_distance(&a, &b, &UnitCost, false, false).unwrap();
        let bc = sequence_edit_distance(&b, &c, &UnitCost, false, false).unwrap();
        assert!(ac <= ab + bc);
    }

    #[proptest]
    fn transpositions_never_increase_the_distance(
        #[strategy(vec(0u8..4, 0..10))] a: Vec<u8>,
        #[strategy(vec(0u8..4, 0..10))] b: Vec<u8>,
    ) {
        let plain = sequence_edit_distance(&a, &b, &UnitCost, false, false).unwrap();
        let damerau = sequence_edit_distance(&a, &b, &UnitCost, true, false).unwrap();
        assert!(damerau <= plain);
    }

    #[proptest]
    fn the_script_cost_sums_to_the_distance(
        #[strategy(vec(0u8..6, 0..12))] a: Vec<u8>,
        #[strategy(vec(0u8..6, 0..12))] b: Vec<u8>,
    ) {
        let (d, script) = sequence_edit_script(&a, &b, &UnitCost, false).unwrap();
        assert_eq!(d, script.len() as f64);
    }

    #[proptest]
    fn the_normalized_distance_is_bounded(
        #[any(size_range(0..12).lift())] a: Vec<u8>,
        #[any(size_range(0..12).lift())] b: Vec<u8>,
    ) {
        let d = sequence_edit_distance(&a, &b, &UnitCost, false, true).unwrap();
        assert!((0.0..=1.0).contains(&d));
    }
}
