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

//! Three-way comparators and the range-iterator predicate factories.
//!
//! A comparison against a reference element has exactly three outcomes:
//! less, equal, or greater. `std::cmp::Ordering` already has exactly these
//! three variants with exactly this meaning, so we reuse it rather than
//! introduce a parallel enum.

use std::cmp::Ordering;

// Every factory below is bounded `Send + Sync + 'static` on both ends: the
// opaque `impl Fn` it returns only promises what's written here, so callers
// boxing the result into a `Predicate` (an `Arc<dyn ... + Send + Sync>`, see
// `crate::iter::Predicate`) need that promise spelled out rather than left
// to whatever the hidden closure happens to satisfy.

/// `x < r` — "`x` is out-of-range on the low side", suitable as a `start`
/// bound (inclusive lower bound).
pub fn lt<T>(cmp: impl Fn(&T) -> Ordering + Send + Sync + 'static) -> impl Fn(&T) -> bool + Send + Sync + 'static {
    move |x| cmp(x) == Ordering::Less
}

/// `x <= r`, suitable as a `start` bound (exclusive lower bound).
pub fn lte<T>(cmp: impl Fn(&T) -> Ordering + Send + Sync + 'static) -> impl Fn(&T) -> bool + Send + Sync + 'static {
    move |x| cmp(x) != Ordering::Greater
}

/// `x >= r`, suitable as a `stop` bound (exclusive upper bound).
pub fn gte<T>(cmp: impl Fn(&T) -> Ordering + Send + Sync + 'static) -> impl Fn(&T) -> bool + Send + Sync + 'static {
    move |x| cmp(x) != Ordering::Less
}

/// `x > r`, suitable as a `stop` bound (inclusive upper bound).
pub fn gt<T>(cmp: impl Fn(&T) -> Ordering + Send + Sync + 'static) -> impl Fn(&T) -> bool + Send + Sync + 'static {
    move |x| cmp(x) == Ordering::Greater
}

/// `x == r`.
pub fn eq<T>(cmp: impl Fn(&T) -> Ordering + Send + Sync + 'static) -> impl Fn(&T) -> bool + Send + Sync + 'static {
    move |x| cmp(x) == Ordering::Equal
}

/// `x != r`.
pub fn ne<T>(cmp: impl Fn(&T) -> Ordering + Send + Sync + 'static) -> impl Fn(&T) -> bool + Send + Sync + 'static {
    move |x| cmp(x) != Ordering::Equal
}

#[cfg(test)]
mod test {
    use super::*;

    fn cmp_against(r: i32) -> impl Fn(&i32) -> Ordering + Send + Sync + 'static {
        move |x| x.cmp(&r)
    }

    #[test]
    fn lt_is_strictly_less() {
        let p = lt(cmp_against(5));
        assert!(p(&4));
        assert!(!p(&5));
        assert!(!p(&6));
    }

    #[test]
    fn lte_includes_the_reference() {
        let p = lte(cmp_against(5));
        assert!(p(&4));
        assert!(p(&5));
        assert!(!p(&6));
    }

    #[test]
    fn gte_includes_the_reference() {
        let p = gte(cmp_against(5));
        assert!(!p(&4));
        assert!(p(&5));
        assert!(p(&6));
    }

    #[test]
    fn gt_is_strictly_greater() {
        let p = gt(cmp_against(5));
        assert!(!p(&4));
        assert!(!p(&5));
        assert!(p(&6));
    }

    #[test]
    fn eq_and_ne_are_complements() {
        let r = 5;
        for x in -2..8 {
            assert_eq!(eq(cmp_against(r))(&x), !ne(cmp_against(r))(&x));
        }
        assert!(eq(cmp_against(r))(&r));
        assert!(!ne(cmp_against(r))(&r));
    }
}
