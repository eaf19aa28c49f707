use thiserror::Error;

/// A pluggable measure for the cost of elementary edits over items of type `T`.
///
/// Every method must be pure, deterministic, and return a non-negative finite
/// value. The distance routines validate each cost they receive and fail the
/// whole computation with [`InvalidCostError`] on a negative or NaN result.
///
/// # Example
///
/// ```rust
/// use editdist::CostFn;
///
/// /// Vowel swaps are cheap, everything else costs one.
/// struct Phonetic;
///
/// impl CostFn<char> for Phonetic {
///     fn delete(&self, _: &char) -> f64 {
///         1.0
///     }
///
///     fn insert(&self, _: &char) -> f64 {
///         1.0
///     }
///
///     fn substitute(&self, a: &char, b: &char) -> f64 {
///         let vowel = |c: &char| "aeiou".contains(*c);
///         match (a == b, vowel(a) && vowel(b)) {
///             (true, _) => 0.0,
///             (_, true) => 0.5,
///             _ => 1.0,
///         }
///     }
/// }
/// ```
pub trait CostFn<T: ?Sized> {
    /// The cost of deleting `a` from the left-hand input.
    fn delete(&self, a: &T) -> f64;

    /// The cost of inserting `b` from the right-hand input.
    fn insert(&self, b: &T) -> f64;

    /// The cost of substituting `a` with `b`.
    ///
    /// A zero cost means the two items match.
    fn substitute(&self, a: &T, b: &T) -> f64;

    /// The cost of transposing the adjacent pair `a`, `b`.
    ///
    /// Only consulted when transpositions are enabled.
    fn transpose(&self, a: &T, b: &T) -> f64 {
        let _ = (a, b);
        1.0
    }
}

impl<T: ?Sized, C: CostFn<T> + ?Sized> CostFn<T> for &C {
    fn delete(&self, a: &T) -> f64 {
        (**self).delete(a)
    }

    fn insert(&self, b: &T) -> f64 {
        (**self).insert(b)
    }

    fn substitute(&self, a: &T, b: &T) -> f64 {
        (**self).substitute(a, b)
    }

    fn transpose(&self, a: &T, b: &T) -> f64 {
        (**self).transpose(a, b)
    }
}

/// Unit costs: deletion, insertion, and transposition cost `1`; substitution
/// costs `0` between equal items and `1` otherwise.
///
/// This reproduces classic Levenshtein semantics, or Damerau-Levenshtein when
/// transpositions are enabled.
#[derive(Debug, Default, Copy, Clone)]
pub struct UnitCost;

impl<T: PartialEq + ?Sized> CostFn<T> for UnitCost {
    fn delete(&self, _: &T) -> f64 {
        1.0
    }

    fn insert(&self, _: &T) -> f64 {
        1.0
    }

    fn substitute(&self, a: &T, b: &T) -> f64 {
        if a == b {
            0.0
        } else {
            1.0
        }
    }
}

/// The error returned when a [`CostFn`] produces a negative or NaN cost.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
#[error("cost function returned {0}, expected a non-negative value")]
pub struct InvalidCostError(pub f64);

/// Validating adapter around a caller-supplied [`CostFn`].
///
/// All cost lookups inside the distance routines go through this, so a
/// misbehaving cost function surfaces as an error instead of a bogus distance.
pub(crate) struct Checked<'c, C: ?Sized>(pub &'c C);

impl<C: ?Sized> Checked<'_, C> {
    fn admit(cost: f64) -> Result<f64, InvalidCostError> {
        if cost >= 0.0 {
            Ok(cost)
        } else {
            Err(InvalidCostError(cost))
        }
    }

    pub fn delete<T: ?Sized>(&self, a: &T) -> Result<f64, InvalidCostError>
    where
        C: CostFn<T>,
    {
        Self::admit(self.0.delete(a))
    }

    pub fn insert<T: ?Sized>(&self, b: &T) -> Result<f64, InvalidCostError>
    where
        C: CostFn<T>,
    {
        Self::admit(self.0.insert(b))
    }

    pub fn substitute<T: ?Sized>(&self, a: &T, b: &T) -> Result<f64, InvalidCostError>
    where
        C: CostFn<T>,
    {
        Self::admit(self.0.substitute(a, b))
    }

    pub fn transpose<T: ?Sized>(&self, a: &T, b: &T) -> Result<f64, InvalidCostError>
    where
        C: CostFn<T>,
    {
        Self::admit(self.0.transpose(a, b))
    }
}
