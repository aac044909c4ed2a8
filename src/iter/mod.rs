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

//! Iterators over a `Tree`: the bidirectional range cursor and the
//! offset/limit cursor.
//!
//! Both hold an owned `Arc` root and an ancestor stack of owned `Arc<Node>`
//! clones rather than borrowing from the `Tree` that created them — cheap,
//! since cloning an `Arc` is a refcount bump, and it lets an iterator keep
//! working after the `Tree` it was built from is dropped or mutated.

mod cursor;
mod range;

pub use cursor::OffsetLimitIter;
pub use range::RangeIter;

use std::sync::Arc;

/// A one-argument predicate over elements, used as a `start`/`stop` bound
/// for [`RangeIter`]. Boxed rather than generic so `Tree::range` and
/// `RangeIter` don't need to carry the bound's concrete closure type as a
/// type parameter.
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;
