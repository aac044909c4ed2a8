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

//! Insert, expressed as copy-on-write recursion over `Arc::make_mut`.
//!
//! A batch of mutations needs a discipline where a node touched earlier in
//! the same batch can be mutated in place, while a node still visible from a
//! previously published tree must be copied first — normally tracked either
//! by a seen-set of node identities or by a generation stamp on each node.
//! `Arc::make_mut` gives us that distinction for free: it clones the
//! pointee only when the `Arc`'s strong count is greater than one, i.e.
//! exactly when some other reference — an older published tree, or a
//! sibling branch still walking the same batch — could observe a mutation.
//! A node fresh to this batch has strong count one until it is returned to
//! the caller, so repeated single-item inserts inside one `Tree::insert`
//! call share allocations on overlapping paths without any separate
//! bookkeeping.

use std::sync::Arc;

use super::rebalance::rebalance;
use crate::node::{Link, Node};

/// Inserts `item` into the subtree at `link`, overwriting an equivalent
/// element in place. Returns `(height_changed, inserted_new)`:
/// `height_changed` is the rebalance/short-circuit signal the caller (an
/// ancestor frame) uses to decide whether it needs to recompute and
/// re-check its own balance; `inserted_new` tells the facade whether this
/// call grew the set (as opposed to overwriting an existing element), so it
/// can keep `Tree::len` accurate without a separate lookup pass.
pub(crate) fn insert_one<T, F>(link: &mut Link<T>, item: T, less: &F) -> (bool, bool)
where
    T: Clone,
    F: Fn(&T, &T) -> bool + ?Sized,
{
    let mut arc = match link.take() {
        Some(arc) => arc,
        None => {
            *link = Some(Arc::new(Node::leaf(item)));
            return (true, true);
        }
    };
    let old_height = arc.height;

    let (grew, inserted_new) = {
        let node = Arc::make_mut(&mut arc);
        if less(&node.item, &item) {
            insert_one(&mut node.right, item, less)
        } else if less(&item, &node.item) {
            insert_one(&mut node.left, item, less)
        } else {
            // Equivalent element: later insert wins, shape is unchanged.
            node.item = item;
            *link = Some(arc);
            return (false, false);
        }
    };

    if !grew {
        *link = Some(arc);
        return (false, inserted_new);
    }

    let arc = rebalance(arc);
    let changed = arc.height != old_height;
    *link = Some(arc);
    (changed, inserted_new)
}

#[cfg(test)]
mod test {
    use super::*;

    fn less(a: &i32, b: &i32) -> bool {
        a < b
    }

    fn inorder(link: &Link<i32>, out: &mut Vec<i32>) {
        if let Some(node) = link {
            inorder(&node.left, out);
            out.push(node.item);
            inorder(&node.right, out);
        }
    }

    fn max_height(link: &Link<i32>) -> u8 {
        link.as_ref().map_or(0, |n| n.height)
    }

    #[test]
    fn inserting_into_an_empty_link_creates_a_leaf() {
        let mut link: Link<i32> = None;
        let (grew, inserted_new) = insert_one(&mut link, 5, &less);
        assert!(grew);
        assert!(inserted_new);
        assert_eq!(link.unwrap().item, 5);
    }

    #[test]
    fn inserting_an_equivalent_item_overwrites_without_growing() {
        let mut link: Link<(i32, &'static str)> = None;
        insert_one(&mut link, (1, "first"), &|a: &(i32, &str), b: &(i32, &str)| a.0 < b.0);
        let (grew, inserted_new) =
            insert_one(&mut link, (1, "second"), &|a: &(i32, &str), b: &(i32, &str)| a.0 < b.0);
        assert!(!grew);
        assert!(!inserted_new);
        assert_eq!(link.unwrap().item, (1, "second"));
    }

    #[test]
    fn repeated_insert_keeps_the_tree_balanced() {
        let mut link: Link<i32> = None;
        for item in 0..100 {
            insert_one(&mut link, item, &less);
        }
        let mut seen = Vec::new();
        inorder(&link, &mut seen);
        assert_eq!(seen, (0..100).collect::<Vec<_>>());
        // AVL bound: height <= ~1.44 * log2(n + 2).
        assert!((max_height(&link) as f64) < 1.44 * ((102_f64).log2()));
    }

    #[test]
    fn structural_sharing_survives_an_unrelated_insert() {
        let mut link: Link<i32> = None;
        for item in [10, 5, 15, 3, 7] {
            insert_one(&mut link, item, &less);
        }
        let published = link.clone();
        insert_one(&mut link, 20, &less);

        // The previously published version must be completely unaffected.
        let mut before = Vec::new();
        inorder(&published, &mut before);
        assert_eq!(before, vec![3, 5, 7, 10, 15]);
    }
}
