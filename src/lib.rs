// MIT LICENSE
//
// Copyright (c) 2021 Dash Core Group
//
// Permission is hereby granted, free of charge, to any
// person obtaining a copy of this software and associated
// documentation files (the "Software"), to deal in the
// Software without restriction, including without
// limitation the rights to use, copy, modify, merge,
// publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software
// is furnished to do so, subject to the following
// conditions:
//
// The above copyright notice and this permission notice
// shall be included in all copies or substantial portions
// of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF
// ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED
// TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A
// PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT
// SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY
// CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR
// IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
// DEALINGS IN THE SOFTWARE.

//! A persistent, immutable ordered-set container backed by a height-balanced
//! AVL tree.
//!
//! Every mutation — [`Tree::insert`], [`Tree::delete`], and their batched
//! and callback-driven variants — returns a new [`Tree`] built by
//! structural sharing with the one it was called on, which is left
//! untouched and fully usable. [`Tree::fork`] (or `Clone`) hands out an
//! independent O(1) handle to the same version, so many callers can each
//! hold, mutate from, and iterate their own view of the data without
//! synchronization.
//!
//! ```
//! use avl_set::Tree;
//!
//! let t0: Tree<i32> = Tree::new(|a, b| a < b, []);
//! let t1 = t0.insert([5, 1, 3]);
//! let t2 = t1.insert([2]);
//!
//! assert_eq!(t1.len(), 3);
//! assert_eq!(t2.len(), 4);
//! assert_eq!(t1.min(), Some(1));
//! ```

mod batch;
mod cmp;
mod error;
mod iter;
mod node;
mod ops;
#[cfg(feature = "testing")]
mod testing;
mod tree;

pub use cmp::{eq, gt, gte, lt, lte, ne};
pub use error::Error;
pub use iter::{OffsetLimitIter, Predicate, RangeIter};
#[cfg(feature = "testing")]
pub use testing::random_tree;
pub use tree::Tree;
