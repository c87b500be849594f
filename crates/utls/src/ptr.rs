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

//! # Owned Pointers and Optional Dereference
//!
//! Two small helpers for moving between values and references without
//! branching at every call site.
//!
//! - `to_ptr` moves a value into a fresh heap allocation owned by the caller.
//! - `to_val` resolves an optional reference into a value plus a presence
//!   flag, falling back to `T::default()` when nothing is referenced.
//!
//! Absence is an expected outcome, not a fault: `to_val` never panics.
//!
//! ## Usage
//!
//! ```rust
//! use utls::ptr::{to_ptr, to_val};
//!
//! let boxed = to_ptr(5);
//! assert_eq!(to_val(Some(&*boxed)), (5, true));
//! assert_eq!(to_val::<i32>(None), (0, false));
//! ```

/// Moves `item` into a new heap allocation and returns the owning pointer.
///
/// The returned `Box` has no tie to the binding `item` came from, so its
/// lifetime is independent of the caller's original variable.
///
/// # Examples
///
/// ```rust
/// # use utls::ptr::to_ptr;
/// let answer = to_ptr(String::from("test"));
/// assert_eq!(*answer, "test");
///
/// let x = 5;
/// let nested = to_ptr(&x);
/// assert!(std::ptr::eq(*nested, &x));
/// ```
#[inline]
pub fn to_ptr<T>(item: T) -> Box<T> {
    Box::new(item)
}

/// Resolves an optional reference into `(value, present)`.
///
/// Returns a clone of the referent together with `true`, or `T::default()`
/// together with `false` when `ptr` is `None`. The referent is never
/// mutated or moved out of.
///
/// # Examples
///
/// ```rust
/// # use utls::ptr::to_val;
/// let s = String::from("test");
/// assert_eq!(to_val(Some(&s)), (String::from("test"), true));
/// assert_eq!(to_val::<String>(None), (String::new(), false));
/// ```
#[inline]
pub fn to_val<T>(ptr: Option<&T>) -> (T, bool)
where
    T: Clone + Default,
{
    match ptr {
        Some(value) => (value.clone(), true),
        None => (T::default(), false),
    }
}
