//! # Overview
//!
//! This crate provides generalized, pluggable-cost edit distances: the classic
//! [Levenshtein distance][levenshtein] over sequences (optionally extended
//! with Damerau transpositions), the [Zhang-Shasha][zhang-shasha] edit
//! distance over labeled ordered trees, a symmetric-difference distance over
//! attribute bags, and a deterministic k-nearest-neighbor selector on top of
//! any of them. Every distance takes a caller-supplied [`CostFn`] deciding
//! what each elementary edit costs, and every alignment can be reconstructed
//! as an explicit script of [`EditOp`]s.
//!
//! [levenshtein]: https://en.wikipedia.org/wiki/Levenshtein_distance
//! [zhang-shasha]: https://doi.org/10.1137/0218082
//!
//! # Example
//!
//! ```rust
//! use editdist::{sequence_edit_distance, tree_edit_distance, Tree, UnitCost};
//!
//! let kitten: Vec<char> = "kitten".chars().collect();
//! let sitting: Vec<char> = "sitting".chars().collect();
//!
//! let d = sequence_edit_distance(&kitten, &sitting, &UnitCost, false, false)?;
//! assert_eq!(d, 3.0);
//!
//! struct Syntax {
//!     label: &'static str,
//!     children: Vec<Syntax>,
//! }
//!
//! impl<'t> Tree<'t> for Syntax {
//!     type Label = str;
//!     fn label(&'t self) -> &'t str {
//!         self.label
//!     }
//!
//!     type Children = &'t [Self];
//!     fn children(&'t self) -> Self::Children {
//!         &self.children
//!     }
//! }
//!
//! let leaf = |label| Syntax { label, children: vec![] };
//!
//! let one = Syntax { label: "f", children: vec![leaf("a")] };
//! let two = Syntax { label: "f", children: vec![leaf("a"), leaf("b")] };
//!
//! let d = tree_edit_distance(Some(&one), Some(&two), &UnitCost, false)?;
//! assert_eq!(d, 1.0);
//! # Ok::<(), editdist::InvalidCostError>(())
//! ```

mod attrs;
mod cost;
mod edit;
mod knn;
mod seq;
mod ted;
mod tree;

pub use attrs::*;
pub use cost::*;
pub use edit::*;
pub use knn::*;
pub use seq::*;
pub use ted::*;
pub use tree::*;

mod annotate;
