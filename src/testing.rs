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

//! Test utilities, gated behind the `testing` feature.
//!
//! A small, public, feature-gated surface that downstream crates can enable
//! to build trees for their own tests and benchmarks without reimplementing
//! a random population strategy.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Tree;

/// Builds a tree of `len` distinct `i64`s drawn from `0..len * 4`, ordered
/// ascending, seeded deterministically from `seed`. Ties (duplicate draws)
/// are resolved by `Tree::insert`'s usual overwrite rule, so the result may
/// hold fewer than `len` elements for a small range relative to `len`.
pub fn random_tree(seed: u64, len: usize) -> Tree<i64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let bound = (len as i64).max(1) * 4;
    let items: Vec<i64> = (0..len).map(|_| rng.gen_range(0..bound)).collect();
    Tree::new(|a, b| a < b, items)
}
