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

//! Tree facade.
//!
//! `Tree<T>` owns a root link, an element count, and a three-way-agnostic
//! `less` comparator shared through an `Arc`. Every mutating method forks
//! first (clones the three fields — the root clone is a refcount bump, not
//! a deep copy) and then mutates the fork via `ops::{insert, delete}`, which
//! is what makes every method here `&self -> Self` instead of `&mut self`:
//! the receiver is never touched, so any number of callers can keep using
//! it, immutably, after a method returns a new version built from it.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::batch::run_batch;
use crate::iter::{OffsetLimitIter, Predicate, RangeIter};
use crate::node::{Link, Node};
use crate::ops::{delete, descent, insert};

/// A boxed three-argument-free `less` comparator: `less(a, b)` means `a`
/// sorts strictly before `b`.
pub(crate) type LessFn<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// A persistent, immutable ordered set backed by an AVL tree.
///
/// Every mutating method returns a new `Tree` and leaves `self` untouched;
/// [`fork`](Self::fork) (and `Clone`) are O(1), since they only clone an
/// `Arc` root and an `Arc` comparator. Structural sharing means a fork that
/// touches a small part of a large tree pays for only the nodes on the
/// paths it actually changes.
pub struct Tree<T> {
    root: Link<T>,
    count: usize,
    less: LessFn<T>,
}

impl<T> Clone for Tree<T> {
    fn clone(&self) -> Self {
        Tree {
            root: self.root.clone(),
            count: self.count,
            less: self.less.clone(),
        }
    }
}

/// Renders the element count followed by `Node`'s ASCII sketch of the whole
/// tree. `less` has no useful `Debug` representation (it's an opaque
/// closure), so it's omitted rather than printed as a function pointer.
impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tree {{ len: {} }}", self.count)?;
        match &self.root {
            Some(node) => write!(f, "{:?}", node),
            None => write!(f, "(empty)"),
        }
    }
}

impl<T: Clone> Tree<T> {
    /// Builds an empty tree ordered by `less`, then inserts `seeds` into it.
    pub fn new(
        less: impl Fn(&T, &T) -> bool + Send + Sync + 'static,
        seeds: impl IntoIterator<Item = T>,
    ) -> Self {
        let empty = Tree {
            root: None,
            count: 0,
            less: Arc::new(less),
        };
        empty.insert(seeds)
    }

    /// Builds an empty tree ordered by `less`, then calls `fill` once with a
    /// closure that inserts one item per call. Equivalent to `new` with an
    /// iterator, but useful when the seed items aren't already a collection
    /// (e.g. they come from a loop with early exits).
    pub fn create_with(
        less: impl Fn(&T, &T) -> bool + Send + Sync + 'static,
        fill: impl FnOnce(&mut dyn FnMut(T)),
    ) -> Self {
        let empty = Tree {
            root: None,
            count: 0,
            less: Arc::new(less),
        };
        empty.insert_with(fill)
    }

    /// Returns an independent handle to the same version of the tree. O(1):
    /// clones an `Arc` root and an `Arc` comparator, nothing else. Equivalent
    /// to `Clone::clone`.
    pub fn fork(&self) -> Self {
        self.clone()
    }

    /// Forks, then inserts every item from `items` into the fork, each
    /// insertion overwriting any existing equivalent element.
    pub fn insert(&self, items: impl IntoIterator<Item = T>) -> Self {
        let mut root = self.root.clone();
        let mut count = self.count;
        let less = self.less.clone();
        for item in items {
            let (_, inserted_new) = insert::insert_one(&mut root, item, less.as_ref());
            if inserted_new {
                count += 1;
            }
        }
        Tree { root, count, less }
    }

    /// Forks, then calls `fill` once with a closure that inserts one item
    /// per call into the fork.
    pub fn insert_with(&self, fill: impl FnOnce(&mut dyn FnMut(T))) -> Self {
        let mut root = self.root.clone();
        let mut count = self.count;
        let less = self.less.clone();
        run_batch(&mut root, fill, |root, item| {
            let (_, inserted_new) = insert::insert_one(root, item, less.as_ref());
            if inserted_new {
                count += 1;
            }
        });
        Tree { root, count, less }
    }

    /// Forks, then removes the element equivalent to `item`, if any. Returns
    /// the new tree and the removed element (`None` if it wasn't present).
    pub fn delete(&self, item: T) -> (Self, Option<T>) {
        let mut root = self.root.clone();
        let less = self.less.clone();
        let (removed, _) = delete::delete_one(&mut root, &item, less.as_ref());
        let count = if removed.is_some() {
            self.count - 1
        } else {
            self.count
        };
        (Tree { root, count, less }, removed)
    }

    /// Forks, then calls `erase` once with a closure that removes one item
    /// per call from the fork.
    pub fn delete_with(&self, erase: impl FnOnce(&mut dyn FnMut(T))) -> Self {
        let mut root = self.root.clone();
        let mut count = self.count;
        let less = self.less.clone();
        run_batch(&mut root, erase, |root, item| {
            let (removed, _) = delete::delete_one(root, &item, less.as_ref());
            if removed.is_some() {
                count -= 1;
            }
        });
        Tree { root, count, less }
    }

    /// Forks, then removes every item in `items` from the fork.
    pub fn delete_items(&self, items: impl IntoIterator<Item = T>) -> Self {
        let mut items = items.into_iter();
        self.delete_with(|erase| {
            for item in &mut items {
                erase(item);
            }
        })
    }

    /// Looks up the element for which `cmp` returns `Equal`. `cmp` must
    /// agree with the tree's own ordering — a `cmp` that disagrees can make
    /// the walk miss an element that's actually present.
    pub fn get(&self, cmp: impl Fn(&T) -> Ordering) -> Option<T> {
        descent::find_by(&self.root, &cmp).map(|node| node.item.clone())
    }

    /// Whether an element for which `cmp` returns `Equal` is present.
    pub fn has(&self, cmp: impl Fn(&T) -> Ordering) -> bool {
        self.get(cmp).is_some()
    }

    /// Looks up the element equivalent to `item` under the tree's own `less`.
    pub fn fetch(&self, item: &T) -> Option<T> {
        descent::find(&self.root, item, self.less.as_ref()).map(|node| node.item.clone())
    }

    /// The smallest element, if the tree is non-empty.
    pub fn min(&self) -> Option<T> {
        descent::leftmost(&self.root).map(|node| node.item.clone())
    }

    /// The largest element, if the tree is non-empty.
    pub fn max(&self) -> Option<T> {
        descent::rightmost(&self.root).map(|node| node.item.clone())
    }

    /// Number of elements. O(1): tracked incrementally, not recomputed from
    /// the tree's shape.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Builds a three-way comparator against a fixed reference `r`, usable
    /// with `get`/`has` or with the predicate factories in `crate::cmp`.
    ///
    /// Bounded `Send + Sync + 'static` (hence `T: Send + Sync + 'static`
    /// here, unlike the rest of this `impl` block) so the result can be
    /// boxed into a [`Predicate`] for [`range`](Self::range). An opaque
    /// return type only exposes the bounds written on it, so a bare `impl
    /// Fn(&T) -> Ordering` would quietly fail to satisfy `Predicate`'s
    /// `Arc<dyn ... + Send + Sync>` at the call site.
    pub fn cmp(&self, r: T) -> impl Fn(&T) -> Ordering + Send + Sync + 'static
    where
        T: Send + Sync + 'static,
    {
        let less = self.less.clone();
        move |x| {
            if less(x, &r) {
                Ordering::Less
            } else if less(&r, x) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
    }

    /// Builds a tree with the opposite order: every `less(a, b)` becomes
    /// `less(b, a)`. The tree's shape is mirrored to match, so the result
    /// costs a full traversal, not just a comparator swap — a mirrored node
    /// still needs its own height/balance bookkeeping on the new side.
    pub fn reverse(&self) -> Self {
        let less = self.less.clone();
        let reversed_less: LessFn<T> = Arc::new(move |a, b| less(b, a));
        Tree {
            root: mirror(&self.root),
            count: self.count,
            less: reversed_less,
        }
    }

    /// Builds an empty tree ordered primarily by `less2`, falling back to
    /// this tree's own order to break ties. Does not copy any elements —
    /// pair with [`sorted_clone`](Self::sorted_clone) to repopulate it.
    pub fn sort_by(
        &self,
        less2: impl Fn(&T, &T) -> bool + Send + Sync + 'static,
    ) -> Self {
        let original = self.less.clone();
        let combined: LessFn<T> = Arc::new(move |a, b| {
            if less2(a, b) {
                true
            } else if less2(b, a) {
                false
            } else {
                original(a, b)
            }
        });
        Tree {
            root: None,
            count: 0,
            less: combined,
        }
    }

    /// `sort_by(less2)`, then re-inserts every element of this tree into the
    /// result in ascending order of the current comparator. O(n log n):
    /// each insertion only ever touches the (empty, then growing) result
    /// tree, so `Arc::make_mut` mutates in place throughout the whole pass.
    pub fn sorted_clone(
        &self,
        less2: impl Fn(&T, &T) -> bool + Send + Sync + 'static,
    ) -> Self {
        let mut out = self.sort_by(less2);
        let mut iter = self.range(None, None);
        while iter.next() {
            out = out.insert(std::iter::once(iter.item().clone()));
        }
        out
    }

    /// Constructs a bidirectional range iterator bounded by `start` ("out of
    /// range on the low side") and `stop` ("out of range on the high side").
    /// Either bound may be `None` for unbounded.
    ///
    /// Bounds are boxed (`Predicate<T>`, not a bare closure) so this method
    /// can be called with `None` on either side without the compiler needing
    /// to infer a concrete closure type for the side left unbounded. Build
    /// one from a closure with `Arc::new(closure) as Predicate<T>`, or from
    /// a three-way comparator with the factories in `crate::cmp` plus the
    /// same cast.
    pub fn range(&self, start: Option<Predicate<T>>, stop: Option<Predicate<T>>) -> RangeIter<T> {
        RangeIter::new(self.root.clone(), self.less.clone(), start, stop)
    }

    /// Constructs an offset/limit cursor over this tree's in-order
    /// sequence.
    pub fn cursor(&self, offset: usize, limit: Option<usize>) -> OffsetLimitIter<T> {
        OffsetLimitIter::new(self.root.clone(), offset, limit)
    }
}

fn mirror<T: Clone>(link: &Link<T>) -> Link<T> {
    link.as_ref().map(|node| {
        Arc::new(crate::node::Node {
            item: node.item.clone(),
            height: node.height,
            left: mirror(&node.right),
            right: mirror(&node.left),
        })
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn asc() -> Tree<i32> {
        Tree::new(|a: &i32, b: &i32| a < b, [])
    }

    fn collect(tree: &Tree<i32>) -> Vec<i32> {
        let mut iter = tree.range(None, None);
        let mut out = Vec::new();
        while iter.next() {
            out.push(*iter.item());
        }
        out
    }

    #[test]
    fn new_seeds_and_reports_len() {
        let t = Tree::new(|a: &i32, b: &i32| a < b, [3, 1, 2, 1]);
        assert_eq!(t.len(), 3); // duplicate 1 overwrites, doesn't grow the set
        assert_eq!(collect(&t), vec![1, 2, 3]);
    }

    #[test]
    fn create_with_matches_new() {
        let t = Tree::create_with(|a: &i32, b: &i32| a < b, |push| {
            push(3);
            push(1);
            push(2);
        });
        assert_eq!(collect(&t), vec![1, 2, 3]);
    }

    #[test]
    fn insert_forks_and_leaves_the_original_untouched() {
        let t0 = asc().insert([1, 2, 3]);
        let t1 = t0.insert([4]);
        assert_eq!(t0.len(), 3);
        assert_eq!(t1.len(), 4);
        assert_eq!(collect(&t0), vec![1, 2, 3]);
        assert_eq!(collect(&t1), vec![1, 2, 3, 4]);
    }

    #[test]
    fn len_matches_the_actual_node_count() {
        let t = asc().insert(0..50).delete_items([1, 10, 20, 30, 40]);
        assert_eq!(t.len(), Node::count(&t.root));
    }

    #[test]
    fn debug_renders_the_len_and_an_empty_tree_as_empty() {
        let t = asc();
        let rendered = format!("{:?}", t);
        assert!(rendered.contains("len: 0"));
        assert!(rendered.contains("(empty)"));

        let t = t.insert([1, 2, 3]);
        let rendered = format!("{:?}", t);
        assert!(rendered.contains("len: 3"));
        for item in ["1", "2", "3"] {
            assert!(rendered.contains(item), "expected {item} in:\n{rendered}");
        }
    }

    #[test]
    fn fork_is_an_independent_handle_to_the_same_version() {
        let t0 = asc().insert([1, 2, 3]);
        let t1 = t0.fork();
        let t2 = t1.insert([4]);
        assert_eq!(collect(&t0), vec![1, 2, 3]);
        assert_eq!(collect(&t1), vec![1, 2, 3]);
        assert_eq!(collect(&t2), vec![1, 2, 3, 4]);
    }

    #[test]
    fn delete_returns_the_removed_item_and_decrements_len() {
        let t0 = asc().insert([1, 2, 3]);
        let (t1, removed) = t0.delete(2);
        assert_eq!(removed, Some(2));
        assert_eq!(t1.len(), 2);
        assert_eq!(collect(&t1), vec![1, 3]);
        assert_eq!(t0.len(), 3);
    }

    #[test]
    fn delete_of_a_missing_item_returns_none_and_keeps_len() {
        let t0 = asc().insert([1, 2, 3]);
        let (t1, removed) = t0.delete(100);
        assert_eq!(removed, None);
        assert_eq!(t1.len(), 3);
    }

    #[test]
    fn delete_items_removes_a_batch() {
        let t0 = asc().insert(0..10);
        let t1 = t0.delete_items([1, 3, 5, 7, 9]);
        assert_eq!(collect(&t1), vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn get_and_has_use_a_three_way_comparator() {
        let t = asc().insert([1, 2, 3]);
        assert_eq!(t.get(t.cmp(2)), Some(2));
        assert!(t.has(t.cmp(2)));
        assert_eq!(t.get(t.cmp(100)), None);
        assert!(!t.has(t.cmp(100)));
    }

    #[test]
    fn get_finds_non_root_elements_on_both_sides() {
        // Balances to root 2, left child 1, right child 4 with children 3 and 5.
        let t = asc().insert([1, 2, 3, 4, 5]);
        for item in 1..=5 {
            assert_eq!(t.get(t.cmp(item)), Some(item), "lookup of {item} failed");
            assert!(t.has(t.cmp(item)), "has({item}) should be true");
        }
    }

    #[test]
    fn fetch_looks_up_by_the_tree_s_own_order() {
        let t = asc().insert([1, 2, 3]);
        assert_eq!(t.fetch(&2), Some(2));
        assert_eq!(t.fetch(&100), None);
    }

    #[test]
    fn min_and_max() {
        let empty = asc();
        assert_eq!(empty.min(), None);
        assert_eq!(empty.max(), None);

        let t = asc().insert([5, 1, 9, 3]);
        assert_eq!(t.min(), Some(1));
        assert_eq!(t.max(), Some(9));
    }

    #[test]
    fn reverse_inverts_traversal_order() {
        let t = asc().insert([3, 1, 2]);
        let r = t.reverse();
        assert_eq!(collect(&t), vec![1, 2, 3]);
        assert_eq!(collect(&r), vec![3, 2, 1]);
        assert_eq!(r.len(), t.len());
    }

    #[test]
    fn sorted_clone_reorders_by_the_new_comparator() {
        let t = asc().insert([1, 2, 3, 4, 5]);
        // Sort by distance from 3, breaking ties with the original order.
        let reordered = t.sorted_clone(move |a: &i32, b: &i32| (a - 3).abs() < (b - 3).abs());
        assert_eq!(reordered.len(), t.len());
        assert_eq!(reordered.min(), Some(3));
    }
}
