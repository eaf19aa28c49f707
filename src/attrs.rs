use crate::{Checked, CostFn, InvalidCostError};
use itertools::{merge_join_by, EitherOrBoth};
use std::collections::BTreeMap;

/// Symmetric-difference distance between two attribute bags.
///
/// Keys present on one side only contribute their deletion (left) or
/// insertion (right) cost; keys present on both sides contribute their
/// substitution cost, which is zero for matching values. Values are opaque to
/// the algorithm, so multi-valued attributes work by using a set as the value
/// type. With `normalize`, the raw cost is divided by the number of distinct
/// keys across both sides, `0` when both bags are empty.
///
/// # Example
///
/// ```rust
/// use editdist::{attribute_set_distance, UnitCost};
/// use std::collections::BTreeMap;
///
/// let noun = BTreeMap::from([("pos", "noun"), ("num", "sg")]);
/// let verb = BTreeMap::from([("pos", "verb"), ("num", "sg"), ("tense", "past")]);
///
/// let d = attribute_set_distance(&noun, &verb, &UnitCost, false)?;
/// assert_eq!(d, 2.0); // one mismatching value, one missing key
/// # Ok::<(), editdist::InvalidCostError>(())
/// ```
pub fn attribute_set_distance<K, V, C>(
    a: &BTreeMap<K, V>,
    b: &BTreeMap<K, V>,
    cost: &C,
    normalize: bool,
) -> Result<f64, InvalidCostError>
where
    K: Ord,
    C: CostFn<V>,
{
    let checked = Checked(cost);
    let mut raw = 0.0;
    let mut keys = 0usize;

    for pair in merge_join_by(a.iter(), b.iter(), |(ka, _), (kb, _)| ka.cmp(kb)) {
        keys += 1;
        raw += match pair {
            EitherOrBoth::Left((_, va)) => checked.delete(va)?,
            EitherOrBoth::Right((_, vb)) => checked.insert(vb)?,
            EitherOrBoth::Both((_, va), (_, vb)) => checked.substitute(va, vb)?,
        };
    }

    Ok(match (normalize, keys) {
        (false, _) | (true, 0) => raw,
        (true, _) => raw / keys as f64,
    })
}
