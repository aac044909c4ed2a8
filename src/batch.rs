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

//! Batched multi-item entry points.
//!
//! `Tree::{insert, insert_with, delete, delete_with, create_with}` all fork
//! once and then apply a sequence of single-item operations against that
//! fork. `ops::insert`/`ops::delete` already give each call the right
//! copy-vs-mutate-in-place behavior via `Arc::make_mut`, so the only thing
//! left at this layer is running the caller-supplied callback against a
//! `&mut dyn FnMut(T)` sink.

use crate::node::Link;

/// Invokes `fill` once with a closure that applies `op` to each item it is
/// given, threading `link` through every call.
pub(crate) fn run_batch<T>(
    link: &mut Link<T>,
    fill: impl FnOnce(&mut dyn FnMut(T)),
    mut op: impl FnMut(&mut Link<T>, T),
) {
    let mut push = |item: T| op(&mut *link, item);
    fill(&mut push);
}
