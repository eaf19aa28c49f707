use crate::Tree;
use std::collections::HashSet;

/// Postorder view of a tree: the structural prerequisite for the keyroot
/// decomposition.
///
/// `postorder[i]` is the i-th node in postorder; `leftmost[i]` is the
/// postorder index of that node's leftmost leaf descendant (itself for a
/// leaf); `keyroots` holds, in ascending order, every index that is the
/// highest one sharing its `leftmost` value. The root is always a keyroot.
pub(crate) struct Annotated<'t, T> {
    pub postorder: Vec<&'t T>,
    pub leftmost: Vec<usize>,
    pub keyroots: Vec<usize>,
}

struct Frame<'t, T: Tree<'t>> {
    node: &'t T,
    children: <T::Children as IntoIterator>::IntoIter,
    leftmost: Option<usize>,
}

impl<'t, T: Tree<'t>> Frame<'t, T> {
    fn new(node: &'t T) -> Self {
        Frame {
            node,
            children: node.children().into_iter(),
            leftmost: None,
        }
    }
}

impl<'t, T: Tree<'t>> Annotated<'t, T> {
    /// Annotates the tree rooted at `root`, or produces the empty annotation
    /// for `None`.
    ///
    /// The walk keeps an explicit stack so that path-shaped trees of any
    /// depth stay within constant call depth.
    pub fn new(root: Option<&'t T>) -> Self {
        let mut postorder = Vec::new();
        let mut leftmost = Vec::new();

        let mut stack = match root {
            None => Vec::new(),
            Some(node) => vec![Frame::new(node)],
        };

        while let Some(frame) = stack.last_mut() {
            match frame.children.next() {
                Some(child) => stack.push(Frame::new(child)),
                None => {
                    if let Some(frame) = stack.pop() {
                        let index = postorder.len();
                        let left = frame.leftmost.unwrap_or(index);
                        postorder.push(frame.node);
                        leftmost.push(left);

                        // A node inherits the leftmost index of its first
                        // child, which is also the first to complete.
                        if let Some(parent) = stack.last_mut() {
                            parent.leftmost.get_or_insert(left);
                        }
                    }
                }
            }
        }

        let mut keyroots = Vec::new();
        let mut seen = HashSet::new();
        for index in (0..postorder.len()).rev() {
            if seen.insert(leftmost[index]) {
                keyroots.push(index);
            }
        }
        keyroots.reverse();

        Annotated {
            postorder,
            leftmost,
            keyroots,
        }
    }

    pub fn len(&self) -> usize {
        self.postorder.len()
    }

    pub fn label(&self, index: usize) -> &'t T::Label {
        self.postorder[index].label()
    }
}
