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

//! AVL rebalancer.
//!
//! After a structural change the caller recomputes this node's height and
//! checks its balance factor. A factor outside `[-1, 1]` triggers a single
//! or double rotation; anything outside `[-2, 2]` means the tree was already
//! corrupted before this call, which is a fatal, unrecoverable condition.
//!
//! There is no explicit path stack here: a textbook AVL rebalancer walks a
//! stack of nodes root-ward after a mutation. In Rust, the recursive call
//! stack built up during descent (`ops::insert`,
//! `ops::delete`) *is* that path stack — each frame calls `rebalance` on its
//! own subtree exactly once, on the way back up, after its recursive call
//! into a child returns. The short-circuit ("stop once height stops
//! changing") falls out of each frame returning whether its own height
//! changed, rather than an explicit loop-with-break.

use std::sync::Arc;

use crate::error::Error;
use crate::node::Node;

/// Rotates `arc` left: its right child becomes the new subtree root, and
/// `arc` becomes that child's left child. Panics if `arc` has no right
/// child — callers only invoke this when `balance_factor() == 2`.
fn rotate_left<T: Clone>(mut arc: Arc<Node<T>>) -> Arc<Node<T>> {
    let mut right = Arc::make_mut(&mut arc)
        .right
        .take()
        .expect("rotate_left requires a right child");
    let right_left = Arc::make_mut(&mut right).left.take();

    {
        let node = Arc::make_mut(&mut arc);
        node.right = right_left;
        node.recompute_height();
    }
    {
        let node = Arc::make_mut(&mut right);
        node.left = Some(arc);
        node.recompute_height();
    }
    right
}

/// Mirror of [`rotate_left`]: rotates `arc` right around its left child.
fn rotate_right<T: Clone>(mut arc: Arc<Node<T>>) -> Arc<Node<T>> {
    let mut left = Arc::make_mut(&mut arc)
        .left
        .take()
        .expect("rotate_right requires a left child");
    let left_right = Arc::make_mut(&mut left).right.take();

    {
        let node = Arc::make_mut(&mut arc);
        node.left = left_right;
        node.recompute_height();
    }
    {
        let node = Arc::make_mut(&mut left);
        node.right = Some(arc);
        node.recompute_height();
    }
    left
}

/// Recomputes `arc`'s height from its (already-correct) children and
/// restores the AVL property if needed, performing a single or double
/// rotation. Returns the possibly-different node that should occupy this
/// position in the tree.
pub(crate) fn rebalance<T: Clone>(mut arc: Arc<Node<T>>) -> Arc<Node<T>> {
    Arc::make_mut(&mut arc).recompute_height();

    match arc.balance_factor() {
        -1..=1 => arc,
        2 => {
            // Right-heavy. If the right child itself leans left, this is the
            // RL case: rotate it right first so the final left rotation of
            // `arc` produces a balanced subtree (the "double rotation").
            let right_leans_left = arc
                .right
                .as_ref()
                .expect("balance_factor == 2 implies a right child")
                .balance_factor()
                < 0;
            if right_leans_left {
                let node = Arc::make_mut(&mut arc);
                let right = node.right.take().expect("checked above");
                node.right = Some(rotate_right(right));
            }
            rotate_left(arc)
        }
        -2 => {
            let left_leans_right = arc
                .left
                .as_ref()
                .expect("balance_factor == -2 implies a left child")
                .balance_factor()
                > 0;
            if left_leans_right {
                let node = Arc::make_mut(&mut arc);
                let left = node.left.take().expect("checked above");
                node.left = Some(rotate_left(left));
            }
            rotate_right(arc)
        }
        other => panic!("{}", Error::BalanceOutOfRange(other)),
    }
}
