/// An abstraction for a node of an ordered tree with labeled nodes.
///
/// A tree is represented by its root node; each node exposes an opaque label
/// and its children in left-to-right order. Implementations must describe
/// finite, acyclic, single-parent trees. Edit costs are measured over labels,
/// never whole subtrees.
///
/// # Example
///
/// ```rust
/// use editdist::Tree;
///
/// struct Syntax {
///     label: String,
///     children: Vec<Syntax>,
/// }
///
/// impl<'t> Tree<'t> for Syntax {
///     type Label = str;
///     fn label(&'t self) -> &'t str {
///         &self.label
///     }
///
///     type Children = &'t [Self];
///     fn children(&'t self) -> Self::Children {
///         &self.children
///     }
/// }
/// ```
pub trait Tree<'t>: 't {
    /// The type of this node's label.
    type Label: ?Sized;

    /// Returns this node's label.
    fn label(&'t self) -> &'t Self::Label;

    /// A type that can iterate over this node's children, leftmost first.
    type Children: IntoIterator<Item = &'t Self>;

    /// Returns this node's immediate children.
    fn children(&'t self) -> Self::Children;
}

#[cfg(test)]
mod tests {
    use super::*;
    use derive_more::From;
    use proptest::{collection::vec, prelude::*, strategy::LazyJust};
    use test_strategy::proptest;

    #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, From)]
    pub struct Size {
        depth: usize,
        breadth: usize,
    }

    impl Default for Size {
        fn default() -> Self {
            (3, 3).into()
        }
    }

    fn tree<L: 'static + PartialEq + Arbitrary>(size: Size) -> impl Strategy<Value = MockTree<L>> {
        let depth = size.depth as u32;
        let breadth = size.breadth as u32;
        let size = (breadth.pow(depth + 1) - 1) / (breadth - 1) / 2; // half the maximum number of nodes

        (any::<L>(), LazyJust::new(Vec::new))
            .prop_map_into()
            .prop_recursive(depth, size, breadth, move |inner| {
                (any::<L>(), vec(inner, ..=breadth as usize)).prop_map_into()
            })
    }

    #[derive(Debug, Default, Clone, PartialEq, Eq, Hash, From)]
    pub(crate) struct MockTree<L: PartialEq> {
        pub(crate) label: L,
        pub(crate) children: Vec<Self>,
    }

    impl<L: PartialEq> MockTree<L> {
        pub(crate) fn count(&self) -> usize {
            1 + self.children.iter().map(Self::count).sum::<usize>()
        }
    }

    impl<L: 'static + PartialEq + Arbitrary> Arbitrary for MockTree<L> {
        type Parameters = Size;
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(size: Size) -> Self::Strategy {
            tree(size).boxed()
        }
    }

    impl<'t, L: 't + PartialEq> Tree<'t> for MockTree<L> {
        type Label = L;
        fn label(&'t self) -> &'t L {
            &self.label
        }

        type Children = &'t [Self];
        fn children(&'t self) -> Self::Children {
            &self.children
        }
    }

    #[proptest]
    fn count_equals_one_plus_sum_of_count_of_children(t: MockTree<u8>) {
        assert_eq!(
            t.count(),
            1 + t.children.iter().map(MockTree::count).sum::<usize>()
        );
    }
}

#[cfg(test)]
pub(crate) use tests::MockTree;
