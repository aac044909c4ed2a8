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

//! Fatal, programmer-error conditions.
//!
//! Every variant corresponds to an invariant violation: a corrupted tree, or
//! misuse of the API (querying a released iterator before positioning it).
//! None of these are recoverable, so they are never returned as `Result`
//! from a public method — they are only ever carried by a `panic!`, which
//! centralizes the message in one place instead of scattering ad hoc panic
//! strings across the call sites that can trigger them.
//!
//! A three-way comparator returning something outside `{Less, Equal,
//! Greater}` would normally need its own fatal-error variant here. Using
//! `std::cmp::Ordering` as the comparator's return type (`crate::cmp`) makes
//! that outcome a compile error rather than a runtime one — `Ordering` only
//! has those three variants — so there is no corresponding panic.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("AVL balance factor {0} is outside [-2, 2]; tree is corrupted")]
    BalanceOutOfRange(i16),

    #[error("iterator item accessed before next()/prev() or after release()")]
    IteratorNotPositioned,
}

#[cfg(test)]
mod test {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn balance_out_of_range_carries_the_offending_factor() {
        let err = Error::BalanceOutOfRange(3);
        assert_matches!(err, Error::BalanceOutOfRange(3));
        assert_eq!(
            err.to_string(),
            "AVL balance factor 3 is outside [-2, 2]; tree is corrupted"
        );
    }

    #[test]
    fn iterator_not_positioned_has_a_fixed_message() {
        let err = Error::IteratorNotPositioned;
        assert_matches!(err, Error::IteratorNotPositioned);
        assert_eq!(
            err.to_string(),
            "iterator item accessed before next()/prev() or after release()"
        );
    }
}
