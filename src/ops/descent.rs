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

//! Search / descent.
//!
//! Read-only location of an element or a three-way-comparator target. Used
//! directly by the lookup side of the facade (`get`, `fetch`, `has`).
//! Insert and delete (`ops::insert`, `ops::delete`) perform an equivalent
//! descent themselves, interleaved with the mutation and rebalance of each
//! frame on the way back up — the same walk, specialized at the point where
//! it needs to write rather than just read.

use std::cmp::Ordering;

use crate::node::{Link, Node};

/// Walks down from `link` following `less`, returning a reference to the
/// node holding an element equivalent to `target`, if any.
pub(crate) fn find<'a, T, F>(mut link: &'a Link<T>, target: &T, less: &F) -> Option<&'a Node<T>>
where
    F: Fn(&T, &T) -> bool + ?Sized,
{
    while let Some(node) = link {
        if less(&node.item, target) {
            link = &node.right;
        } else if less(target, &node.item) {
            link = &node.left;
        } else {
            return Some(node);
        }
    }
    None
}

/// Three-way-comparator lookup: returns the node for which `cmp` reports
/// `Equal`. `cmp` must agree with the tree's own `less`, or the walk may
/// veer off a side of the tree that does hold a matching element.
pub(crate) fn find_by<'a, T>(
    mut link: &'a Link<T>,
    cmp: &impl Fn(&T) -> Ordering,
) -> Option<&'a Node<T>> {
    while let Some(node) = link {
        match cmp(&node.item) {
            Ordering::Less => link = &node.right,
            Ordering::Greater => link = &node.left,
            Ordering::Equal => return Some(node),
        }
    }
    None
}

/// Leftmost node reachable from `link` — the minimum element.
pub(crate) fn leftmost<T>(mut link: &Link<T>) -> Option<&Node<T>> {
    let mut last = None;
    while let Some(node) = link {
        last = Some(node.as_ref());
        link = &node.left;
    }
    last
}

/// Rightmost node reachable from `link` — the maximum element.
pub(crate) fn rightmost<T>(mut link: &Link<T>) -> Option<&Node<T>> {
    let mut last = None;
    while let Some(node) = link {
        last = Some(node.as_ref());
        link = &node.right;
    }
    last
}
