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

//! Bidirectional range iterator.
//!
//! `start`/`stop` are one-argument predicates over elements — "out of range
//! on the low side" and "out of range on the high side" respectively —
//! built from the three-way comparator factories in `crate::cmp`. Both are
//! assumed monotonic with respect to the tree's order (true for any bound
//! built from `lt`/`lte`/`gte`/`gt` against a fixed reference): everything
//! failing `start` sorts before everything passing it, and symmetrically for
//! `stop`. That's what lets a single binary-search-style descent locate the
//! first in-range element instead of a full scan.

use std::sync::Arc;

use crate::error::Error;
use crate::node::{Link, Node};

use super::Predicate;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Ascending,
    Descending,
}

/// A cursor over the elements of a tree that satisfy `start` and `stop`,
/// walkable in either direction.
///
/// An iterator starts unpositioned: call [`next`](Self::next) or
/// [`prev`](Self::prev) before [`item`](Self::item). Calling the direction
/// opposite the one most recently used performs a one-shot reseat rather
/// than stepping past the current element twice.
pub struct RangeIter<T> {
    less: Arc<dyn Fn(&T, &T) -> bool + Send + Sync>,
    root: Link<T>,
    stack: Vec<Arc<Node<T>>>,
    current: Link<T>,
    start: Option<Predicate<T>>,
    stop: Option<Predicate<T>>,
    mode: Option<Mode>,
    released: bool,
}

impl<T: Clone> RangeIter<T> {
    pub(crate) fn new(
        root: Link<T>,
        less: Arc<dyn Fn(&T, &T) -> bool + Send + Sync>,
        start: Option<Predicate<T>>,
        stop: Option<Predicate<T>>,
    ) -> Self {
        RangeIter {
            less,
            root,
            stack: Vec::new(),
            current: None,
            start,
            stop,
            mode: None,
            released: false,
        }
    }

    /// The element at the current position.
    ///
    /// # Panics
    ///
    /// Panics if the iterator has not been positioned by `next`/`prev`, has
    /// run past either end, or has been `release`d.
    pub fn item(&self) -> &T {
        match &self.current {
            Some(node) => &node.item,
            None => panic!("{}", Error::IteratorNotPositioned),
        }
    }

    /// Whether the cursor currently holds an element.
    pub fn is_positioned(&self) -> bool {
        self.current.is_some()
    }

    /// Advances to the next element in ascending order, returning whether
    /// one was found. The first call after construction (or after the last
    /// call was `prev`) positions the cursor instead of skipping an element.
    pub fn next(&mut self) -> bool {
        if self.released {
            return false;
        }
        match self.mode {
            None => {
                self.descend_ascending(None);
                self.mode = Some(Mode::Ascending);
            }
            Some(Mode::Ascending) => self.advance_ascending(),
            Some(Mode::Descending) => {
                // Reverse switch: reseat to the least element strictly
                // greater than the current one, using it as a one-shot
                // exclusive lower bound, then resume ascending from there.
                if let Some(node) = self.current.take() {
                    let bound = self.temp_start_after(&node.item);
                    self.descend_ascending(Some(bound));
                } else {
                    self.descend_ascending(None);
                }
                self.mode = Some(Mode::Ascending);
            }
        }
        self.check_stop()
    }

    /// Advances to the next element in descending order. Mirrors `next`.
    pub fn prev(&mut self) -> bool {
        if self.released {
            return false;
        }
        match self.mode {
            None => {
                self.descend_descending(None);
                self.mode = Some(Mode::Descending);
            }
            Some(Mode::Descending) => self.advance_descending(),
            Some(Mode::Ascending) => {
                if let Some(node) = self.current.take() {
                    self.descend_descending(Some(self.temp_stop_before(&node.item)));
                } else {
                    self.descend_descending(None);
                }
                self.mode = Some(Mode::Descending);
            }
        }
        self.check_start()
    }

    /// Drops held references and ends the iteration. Idempotent: `next` and
    /// `prev` keep returning `false` after this, instead of re-initializing.
    pub fn release(&mut self) {
        self.released = true;
        self.stack.clear();
        self.current = None;
        self.root = None;
    }

    fn temp_start_after(&self, reference: &T) -> Predicate<T> {
        let less = self.less.clone();
        let reference = reference.clone();
        // `lte(cmp_reference)` as a start bound: excludes everything <=
        // reference, i.e. accepts only strictly-greater elements.
        Arc::new(move |x| !less(&reference, x))
    }

    fn temp_stop_before(&self, reference: &T) -> Predicate<T> {
        let less = self.less.clone();
        let reference = reference.clone();
        // `gte(cmp_reference)` as a stop bound: excludes everything >=
        // reference, i.e. accepts only strictly-less elements.
        Arc::new(move |x| !less(x, &reference))
    }

    /// Descends leftward from the root, redirecting right out of any
    /// subtree that fails `start_override` (or `self.start` if `None`).
    /// Leaves `self.current` at the deepest element found this way, and
    /// `self.stack` holding its true ancestors (each reached by going left
    /// to get here, which is exactly the invariant `advance_ascending`
    /// relies on).
    fn descend_ascending(&mut self, start_override: Option<Predicate<T>>) {
        let start = start_override.or_else(|| self.start.clone());
        self.stack.clear();
        let mut cursor = self.root.clone();
        let mut best: Link<T> = None;
        while let Some(node) = cursor {
            let too_low = start.as_ref().is_some_and(|p| p(&node.item));
            if too_low {
                cursor = node.right.clone();
            } else {
                cursor = node.left.clone();
                if let Some(prev_best) = best.replace(node) {
                    self.stack.push(prev_best);
                }
            }
        }
        self.current = best;
    }

    /// Mirror of `descend_ascending`: descends rightward, redirecting left
    /// out of any subtree that fails `stop_override` (or `self.stop`).
    fn descend_descending(&mut self, stop_override: Option<Predicate<T>>) {
        let stop = stop_override.or_else(|| self.stop.clone());
        self.stack.clear();
        let mut cursor = self.root.clone();
        let mut best: Link<T> = None;
        while let Some(node) = cursor {
            let too_high = stop.as_ref().is_some_and(|p| p(&node.item));
            if too_high {
                cursor = node.left.clone();
            } else {
                cursor = node.right.clone();
                if let Some(prev_best) = best.replace(node) {
                    self.stack.push(prev_best);
                }
            }
        }
        self.current = best;
    }

    fn advance_ascending(&mut self) {
        let current = match self.current.take() {
            Some(node) => node,
            None => return,
        };
        match current.right.clone() {
            Some(right) => {
                let mut cursor = Some(right);
                let mut best: Link<T> = None;
                while let Some(node) = cursor {
                    let too_low = self.start.as_ref().is_some_and(|p| p(&node.item));
                    if too_low {
                        cursor = node.right.clone();
                    } else {
                        cursor = node.left.clone();
                        if let Some(prev_best) = best.replace(node) {
                            self.stack.push(prev_best);
                        }
                    }
                }
                self.current = best;
            }
            None => self.current = self.stack.pop(),
        }
    }

    fn advance_descending(&mut self) {
        let current = match self.current.take() {
            Some(node) => node,
            None => return,
        };
        match current.left.clone() {
            Some(left) => {
                let mut cursor = Some(left);
                let mut best: Link<T> = None;
                while let Some(node) = cursor {
                    let too_high = self.stop.as_ref().is_some_and(|p| p(&node.item));
                    if too_high {
                        cursor = node.left.clone();
                    } else {
                        cursor = node.right.clone();
                        if let Some(prev_best) = best.replace(node) {
                            self.stack.push(prev_best);
                        }
                    }
                }
                self.current = best;
            }
            None => self.current = self.stack.pop(),
        }
    }

    fn check_stop(&mut self) -> bool {
        if let Some(node) = &self.current {
            if self.stop.as_ref().is_some_and(|p| p(&node.item)) {
                self.current = None;
                self.stack.clear();
            }
        }
        self.current.is_some()
    }

    fn check_start(&mut self) -> bool {
        if let Some(node) = &self.current {
            if self.start.as_ref().is_some_and(|p| p(&node.item)) {
                self.current = None;
                self.stack.clear();
            }
        }
        self.current.is_some()
    }
}

#[cfg(test)]
mod test {
    use crate::{gt, gte, lt, lte, Predicate, Tree};
    use std::sync::Arc;

    fn tree() -> Tree<i32> {
        Tree::new(|a: &i32, b: &i32| a < b, 0..20)
    }

    fn bound(p: impl Fn(&i32) -> bool + Send + Sync + 'static) -> Predicate<i32> {
        Arc::new(p)
    }

    fn ascending_all(tree: &Tree<i32>) -> Vec<i32> {
        let mut iter = tree.range(None, None);
        let mut out = Vec::new();
        while iter.next() {
            out.push(*iter.item());
        }
        out
    }

    fn descending_all(tree: &Tree<i32>) -> Vec<i32> {
        let mut iter = tree.range(None, None);
        let mut out = Vec::new();
        while iter.prev() {
            out.push(*iter.item());
        }
        out
    }

    #[test]
    fn unbounded_ascent_visits_everything_in_order() {
        assert_eq!(ascending_all(&tree()), (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn unbounded_descent_visits_everything_in_reverse() {
        assert_eq!(descending_all(&tree()), (0..20).rev().collect::<Vec<_>>());
    }

    #[test]
    fn start_and_stop_bound_a_half_open_range() {
        let t = tree();
        let start = Some(bound(lt(t.cmp(5)))); // exclude < 5: inclusive lower bound
        let stop = Some(bound(gte(t.cmp(15)))); // exclude >= 15: exclusive upper bound
        let mut iter = t.range(start, stop);
        let mut out = Vec::new();
        while iter.next() {
            out.push(*iter.item());
        }
        assert_eq!(out, (5..15).collect::<Vec<_>>());
    }

    #[test]
    fn empty_range_reports_no_elements() {
        let t = tree();
        let start = Some(bound(lt(t.cmp(50))));
        let stop = Some(bound(gte(t.cmp(0))));
        let mut iter = t.range(start, stop);
        assert!(!iter.next());
    }

    #[test]
    fn direction_reversal_reseats_instead_of_double_stepping() {
        let t = tree();
        let mut iter = t.range(None, None);
        assert!(iter.next());
        assert_eq!(*iter.item(), 0);
        assert!(iter.next());
        assert_eq!(*iter.item(), 1);
        assert!(iter.next());
        assert_eq!(*iter.item(), 2);

        // Switching direction reseats to the greatest element strictly less
        // than the current one (1), not one more step past it.
        assert!(iter.prev());
        assert_eq!(*iter.item(), 1);

        assert!(iter.prev());
        assert_eq!(*iter.item(), 0);
        assert!(!iter.prev());
    }

    #[test]
    fn bounded_range_on_a_string_key_set() {
        let t = Tree::new(
            |a: &String, b: &String| a < b,
            ["apple", "banana", "cherry", "date", "fig"].map(String::from),
        );
        let start = Some(bound(lte(t.cmp("apple".to_string()))));
        let stop = Some(bound(gt(t.cmp("date".to_string()))));
        let mut iter = t.range(start, stop);
        let mut out = Vec::new();
        while iter.next() {
            out.push(iter.item().clone());
        }
        assert_eq!(out, vec!["banana", "cherry", "date"]);
    }

    #[test]
    fn release_is_idempotent_and_ends_iteration() {
        let t = tree();
        let mut iter = t.range(None, None);
        assert!(iter.next());
        iter.release();
        assert!(!iter.next());
        assert!(!iter.prev());
        iter.release();
        assert!(!iter.next());
    }

    #[test]
    #[should_panic]
    fn item_panics_before_positioning() {
        let t = tree();
        let iter = t.range(None, None);
        iter.item();
    }
}
