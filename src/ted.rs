use crate::annotate::Annotated;
use crate::seq::normalized;
use crate::{Checked, CostFn, EditOp, InvalidCostError, Tree};
use arrayvec::ArrayVec;

/// Zhang-Shasha edit distance between two labeled ordered trees.
///
/// An empty tree is passed as `None`; the distance between two empty trees is
/// zero and the distance to an empty tree is the total cost of deleting
/// (resp. inserting) every node of the other. With `normalize`, the raw cost
/// `d` is rescaled to `2d / (n + m + d)` over the two node counts.
///
/// Runs in `O(n · m)` for balanced trees and degrades to `O(n² · m²)` for
/// path-shaped ones, per the keyroot decomposition.
pub fn tree_edit_distance<'t, T, C>(
    a: Option<&'t T>,
    b: Option<&'t T>,
    cost: &C,
    normalize: bool,
) -> Result<f64, InvalidCostError>
where
    T: Tree<'t>,
    C: CostFn<T::Label>,
{
    let a = Annotated::new(a);
    let b = Annotated::new(b);
    let checked = Checked(cost);

    let raw = match (a.len(), b.len()) {
        (0, 0) => 0.0,
        (n, 0) => one_sided(&a, n, |label| checked.delete(label))?,
        (0, m) => one_sided(&b, m, |label| checked.insert(label))?,
        (n, m) => {
            let solver = Solver {
                a: &a,
                b: &b,
                cost: checked,
            };
            solver.solve()?[n - 1][m - 1]
        }
    };

    Ok(if normalize {
        normalized(raw, a.len() + b.len())
    } else {
        raw
    })
}

/// Computes the tree edit distance along with a minimal edit script realizing
/// it.
///
/// Script positions are postorder indices into the respective tree. The
/// backtrace stores no per-cell operation lists; it walks the forest tables
/// backwards and recurses only into the matched subtree pairs the dynamic
/// program bridged over.
pub fn tree_edit_script<'t, T, C>(
    a: Option<&'t T>,
    b: Option<&'t T>,
    cost: &C,
) -> Result<(f64, Vec<EditOp<'t, T::Label>>), InvalidCostError>
where
    T: Tree<'t>,
    C: CostFn<T::Label>,
{
    let a = Annotated::new(a);
    let b = Annotated::new(b);
    let checked = Checked(cost);

    match (a.len(), b.len()) {
        (0, 0) => Ok((0.0, Vec::new())),
        (n, 0) => {
            let mut script = Vec::new();
            let mut raw = 0.0;
            for index in 0..n {
                let op = checked.delete(a.label(index))?;
                raw += op;
                if op > 0.0 {
                    script.push(EditOp::Delete {
                        index,
                        item: a.label(index),
                    });
                }
            }
            Ok((raw, script))
        }
        (0, m) => {
            let mut script = Vec::new();
            let mut raw = 0.0;
            for index in 0..m {
                let op = checked.insert(b.label(index))?;
                raw += op;
                if op > 0.0 {
                    script.push(EditOp::Insert {
                        index,
                        item: b.label(index),
                    });
                }
            }
            Ok((raw, script))
        }
        (n, m) => {
            let solver = Solver {
                a: &a,
                b: &b,
                cost: checked,
            };

            let mut subtrees = solver.solve()?;
            let raw = subtrees[n - 1][m - 1];

            let mut script = Vec::new();
            solver.backtrace(&mut subtrees, n - 1, m - 1, &mut script)?;
            script.reverse();

            Ok((raw, script))
        }
    }
}

fn one_sided<'t, T, F>(
    annotated: &Annotated<'t, T>,
    len: usize,
    cost: F,
) -> Result<f64, InvalidCostError>
where
    T: Tree<'t>,
    F: Fn(&'t T::Label) -> Result<f64, InvalidCostError>,
{
    let mut raw = 0.0;
    for index in 0..len {
        raw += cost(annotated.label(index))?;
    }
    Ok(raw)
}

#[derive(Copy, Clone)]
enum Step {
    /// Jump over an already-solved subtree pair.
    Bridge(usize, usize),
    Substitute,
    Insert,
    Delete,
}

struct Solver<'s, 't, T, C: ?Sized> {
    a: &'s Annotated<'t, T>,
    b: &'s Annotated<'t, T>,
    cost: Checked<'s, C>,
}

impl<'s, 't, T, C> Solver<'s, 't, T, C>
where
    T: Tree<'t>,
    C: CostFn<T::Label> + ?Sized,
{
    /// Fills the subtree-pair distance table by solving a forest distance
    /// table per keyroot pair, in ascending keyroot order so that every
    /// bridged lookup is already final.
    fn solve(&self) -> Result<Vec<Vec<f64>>, InvalidCostError> {
        let mut subtrees = vec![vec![0.0; self.b.len()]; self.a.len()];

        for &i in &self.a.keyroots {
            for &j in &self.b.keyroots {
                self.forest(i, j, &mut subtrees)?;
            }
        }

        Ok(subtrees)
    }

    /// Solves the forest distance table for the subtrees rooted at postorder
    /// indices `i`, `j`, memoizing every full-subtree distance it settles
    /// into `subtrees`.
    ///
    /// Local position `x` stands for the prefix forest spanning postorder
    /// indices `leftmost(i) .. leftmost(i) + x` of the left tree, and
    /// likewise `y` on the right.
    fn forest(
        &self,
        i: usize,
        j: usize,
        subtrees: &mut [Vec<f64>],
    ) -> Result<Vec<Vec<f64>>, InvalidCostError> {
        let (li, lj) = (self.a.leftmost[i], self.b.leftmost[j]);
        let (rows, cols) = (i - li + 2, j - lj + 2);

        let mut forest = vec![vec![0.0; cols]; rows];

        for x in 1..rows {
            forest[x][0] = forest[x - 1][0] + self.cost.delete(self.a.label(li + x - 1))?;
        }

        for y in 1..cols {
            forest[0][y] = forest[0][y - 1] + self.cost.insert(self.b.label(lj + y - 1))?;
        }

        for x in 1..rows {
            let xi = li + x - 1;
            for y in 1..cols {
                let yj = lj + y - 1;

                let delete = forest[x - 1][y] + self.cost.delete(self.a.label(xi))?;
                let insert = forest[x][y - 1] + self.cost.insert(self.b.label(yj))?;

                if self.a.leftmost[xi] == li && self.b.leftmost[yj] == lj {
                    // The subtree at `xi` spans the whole prefix forest, so
                    // this cell is the full-subtree distance; memoize it.
                    let substitute = forest[x - 1][y - 1]
                        + self.cost.substitute(self.a.label(xi), self.b.label(yj))?;
                    forest[x][y] = delete.min(insert).min(substitute);
                    subtrees[xi][yj] = forest[x][y];
                } else {
                    // Bridge over the already-solved subtree pair instead of
                    // decomposing it again.
                    let (px, py) = (self.a.leftmost[xi] - li, self.b.leftmost[yj] - lj);
                    let bridge = forest[px][py] + subtrees[xi][yj];
                    forest[x][y] = delete.min(insert).min(bridge);
                }
            }
        }

        Ok(forest)
    }

    /// Emits, in reverse order, the script for the subtree pair rooted at
    /// `i`, `j` by re-solving its forest table and walking it backwards.
    ///
    /// Recomputed cells are bitwise identical to the forward pass, so exact
    /// comparisons recover the recurrence branch that produced each cell.
    /// Call depth is bounded by the nesting of bridged subtree pairs.
    fn backtrace(
        &self,
        subtrees: &mut Vec<Vec<f64>>,
        i: usize,
        j: usize,
        script: &mut Vec<EditOp<'t, T::Label>>,
    ) -> Result<(), InvalidCostError> {
        let (li, lj) = (self.a.leftmost[i], self.b.leftmost[j]);
        let forest = self.forest(i, j, subtrees)?;

        let (mut x, mut y) = (i - li + 1, j - lj + 1);

        while x > 0 || y > 0 {
            let mut moves: ArrayVec<(f64, f64, Step), 3> = ArrayVec::new();

            if x > 0 && y > 0 {
                let (xi, yj) = (li + x - 1, lj + y - 1);
                if self.a.leftmost[xi] == li && self.b.leftmost[yj] == lj {
                    let sub = self.cost.substitute(self.a.label(xi), self.b.label(yj))?;
                    moves.push((forest[x - 1][y - 1], sub, Step::Substitute));
                } else {
                    let (px, py) = (self.a.leftmost[xi] - li, self.b.leftmost[yj] - lj);
                    moves.push((forest[px][py], subtrees[xi][yj], Step::Bridge(px, py)));
                }
            }

            if y > 0 {
                let ins = self.cost.insert(self.b.label(lj + y - 1))?;
                moves.push((forest[x][y - 1], ins, Step::Insert));
            }

            if x > 0 {
                let del = self.cost.delete(self.a.label(li + x - 1))?;
                moves.push((forest[x - 1][y], del, Step::Delete));
            }

            let Some(&(_, op, step)) = moves.iter().find(|(prev, op, _)| forest[x][y] == prev + op)
            else {
                debug_assert!(false, "cell not reproducible from its predecessors");
                break;
            };

            match step {
                Step::Bridge(px, py) => {
                    if op > 0.0 {
                        self.backtrace(subtrees, li + x - 1, lj + y - 1, script)?;
                    }
                    x = px;
                    y = py;
                }
                Step::Substitute => {
                    if op > 0.0 {
                        let (xi, yj) = (li + x - 1, lj + y - 1);
                        script.push(EditOp::Substitute {
                            left: xi,
                            right: yj,
                            from: self.a.label(xi),
                            to: self.b.label(yj),
                        });
                    }
                    x -= 1;
                    y -= 1;
                }
                Step::Insert => {
                    if op > 0.0 {
                        let yj = lj + y - 1;
                        script.push(EditOp::Insert {
                            index: yj,
                            item: self.b.label(yj),
                        });
                    }
                    y -= 1;
                }
                Step::Delete => {
                    if op > 0.0 {
                        let xi = li + x - 1;
                        script.push(EditOp::Delete {
                            index: xi,
                            item: self.a.label(xi),
                        });
                    }
                    x -= 1;
                }
            }
        }

        Ok(())
    }
}
