/// A single step of an edit script.
///
/// Scripts are descriptive output only; the distances are computed without
/// materializing them. Positions are 0-based indices into the inputs the
/// script was derived from: sequence positions for sequence alignments,
/// postorder indices for tree alignments. Steps borrow the items they touch,
/// and zero-cost substitutions are matches and never appear.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EditOp<'a, T: ?Sized> {
    /// Remove the item at `index` of the left-hand input.
    Delete {
        /// Position in the left-hand input.
        index: usize,
        /// The removed item.
        item: &'a T,
    },

    /// Insert the item found at `index` of the right-hand input.
    Insert {
        /// Position in the right-hand input.
        index: usize,
        /// The inserted item.
        item: &'a T,
    },

    /// Replace the item at `left` with the one at `right`.
    Substitute {
        /// Position in the left-hand input.
        left: usize,
        /// Position in the right-hand input.
        right: usize,
        /// The replaced item.
        from: &'a T,
        /// Its replacement.
        to: &'a T,
    },

    /// Swap the adjacent pair starting at `left`, matching the pair starting
    /// at `right` of the right-hand input in reverse order.
    Transpose {
        /// Position of the first swapped item in the left-hand input.
        left: usize,
        /// Position of the matching pair in the right-hand input.
        right: usize,
        /// The first item of the swapped pair.
        first: &'a T,
        /// The second item of the swapped pair.
        second: &'a T,
    },
}

impl<T: ?Sized> EditOp<'_, T> {
    /// Whether this step touches the left-hand input.
    pub fn edits_left(&self) -> bool {
        !matches!(self, EditOp::Insert { .. })
    }

    /// Whether this step touches the right-hand input.
    pub fn edits_right(&self) -> bool {
        !matches!(self, EditOp::Delete { .. })
    }
}
