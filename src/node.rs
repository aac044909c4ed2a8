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

//! Tree node.
//!
//! A node is a plain, immutable-once-published record of an element, its
//! subtree height, and links to its children. There is no parent pointer —
//! the mutation path is carried on the recursive call stack instead (see
//! `crate::ops`), which keeps a node two pointers plus one byte slim and
//! lets unrelated traversals share the same nodes without any cross-tree
//! back-pointer hazard.

use std::cmp::max;
use std::fmt;
use std::sync::Arc;

/// A child link. `None` means the side is empty.
pub(crate) type Link<T> = Option<Arc<Node<T>>>;

/// One node of the tree.
///
/// `height` is 1 for a leaf, and `1 + max(height(left), height(right))` for
/// an interior node. The AVL bound keeps it under roughly `1.44 * log2(n)`,
/// which fits in a `u8` for any population this process could address.
#[derive(Clone)]
pub(crate) struct Node<T> {
    pub item: T,
    pub height: u8,
    pub left: Link<T>,
    pub right: Link<T>,
}

/// Renders the subtree rooted at `self` as an indented ASCII sketch, right
/// child above, left child below, one line per node with its height.
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_node<T: fmt::Debug>(
            f: &mut fmt::Formatter<'_>,
            node: &Node<T>,
            depth: usize,
            prefix: &str,
        ) -> fmt::Result {
            if let Some(right) = &node.right {
                write_node(f, right, depth + 1, " ┌-")?;
            }
            writeln!(
                f,
                "{}{}{:?} (h{})",
                "    ".repeat(depth),
                prefix,
                node.item,
                node.height
            )?;
            if let Some(left) = &node.left {
                write_node(f, left, depth + 1, " └-")?;
            }
            Ok(())
        }
        write_node(f, self, 0, "")
    }
}

impl<T> Node<T> {
    /// Creates a new leaf: height 1, no children.
    pub fn leaf(item: T) -> Self {
        Node {
            item,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Height of a (possibly absent) child link. Absent is height 0.
    pub fn height_of(link: &Link<T>) -> u8 {
        link.as_ref().map_or(0, |n| n.height)
    }

    /// Recomputes `self.height` from the current children. Must be called
    /// after any change to `left` or `right`.
    pub fn recompute_height(&mut self) {
        self.height = 1 + max(Self::height_of(&self.left), Self::height_of(&self.right));
    }

    /// `height(right) - height(left)`. In `[-2, 2]` for any node produced by
    /// this crate; outside that range means the tree is corrupted.
    pub fn balance_factor(&self) -> i16 {
        Self::height_of(&self.right) as i16 - Self::height_of(&self.left) as i16
    }

    /// Number of nodes reachable from `link`, inclusive. `Tree::len` tracks
    /// its count incrementally rather than calling this, so this is only
    /// ever used to check that incremental count against the real shape of
    /// the tree in tests.
    pub fn count(link: &Link<T>) -> usize {
        match link {
            None => 0,
            Some(n) => 1 + Self::count(&n.left) + Self::count(&n.right),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn leaf_has_height_one_and_no_children() {
        let node = Node::leaf("x");
        assert_eq!(node.height, 1);
        assert!(node.left.is_none());
        assert!(node.right.is_none());
        assert_eq!(node.balance_factor(), 0);
    }

    #[test]
    fn height_of_absent_link_is_zero() {
        let link: Link<i32> = None;
        assert_eq!(Node::height_of(&link), 0);
    }

    #[test]
    fn recompute_height_takes_the_taller_child() {
        let mut node = Node::leaf(10);
        node.left = Some(Arc::new(Node {
            item: 5,
            height: 3,
            left: None,
            right: None,
        }));
        node.recompute_height();
        assert_eq!(node.height, 4);
        assert_eq!(node.balance_factor(), -3);
    }

    #[test]
    fn count_is_recursive_node_count() {
        let empty: Link<i32> = None;
        assert_eq!(Node::count(&empty), 0);

        let link: Link<i32> = Some(Arc::new(Node {
            item: 2,
            height: 2,
            left: Some(Arc::new(Node::leaf(1))),
            right: None,
        }));
        assert_eq!(Node::count(&link), 2);
    }

    #[test]
    fn debug_prints_each_item_once_per_line() {
        let node = Node {
            item: 2,
            height: 2,
            left: Some(Arc::new(Node::leaf(1))),
            right: Some(Arc::new(Node::leaf(3))),
        };
        let rendered = format!("{:?}", node);
        assert_eq!(rendered.lines().count(), 3);
        for item in ["1", "2", "3"] {
            assert!(rendered.contains(item), "expected {item} in:\n{rendered}");
        }
    }
}
