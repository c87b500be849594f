// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Minimum and Maximum
//!
//! `min` and `max` over any `PartialOrd` type, with a fixed tie-break:
//!
//! - `min(a, b)` returns `a` only if `a < b`; on a tie it returns `b`.
//! - `max(a, b)` returns `b` only if `b > a`; on a tie it returns `a`.
//!
//! This is the mirror image of `std::cmp::min`/`std::cmp::max`, which return
//! the first and second argument on ties respectively. The difference only
//! shows for types whose equal values are still distinguishable, such as
//! records ordered by a single key.
//!
//! The bound is `PartialOrd` so floats work. The result is only meaningful
//! when the two operands are ordered: if either is NaN every comparison is
//! false and `min` returns `b` while `max` returns `a`.
//!
//! ## Usage
//!
//! ```rust
//! use utls::cmp::{max, min};
//!
//! assert_eq!(min(5, 2), 2);
//! assert_eq!(max(5, 2), 5);
//! assert_eq!(min(5.0, 2.0), 2.0);
//! ```

/// Returns the smaller of `a` and `b`, or `b` if they compare equal.
///
/// # Examples
///
/// ```rust
/// # use utls::cmp::min;
/// assert_eq!(min(2, 5), 2);
/// assert_eq!(min("b", "a"), "a");
/// ```
#[inline(always)]
pub fn min<T>(a: T, b: T) -> T
where
    T: PartialOrd,
{
    if a < b { a } else { b }
}

/// Returns the larger of `a` and `b`, or `a` if they compare equal.
///
/// # Examples
///
/// ```rust
/// # use utls::cmp::max;
/// assert_eq!(max(2, 5), 5);
/// assert_eq!(max(2.5, -1.0), 2.5);
/// ```
#[inline(always)]
pub fn max<T>(a: T, b: T) -> T
where
    T: PartialOrd,
{
    if b > a { b } else { a }
}
