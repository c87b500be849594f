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

//! # utls
//!
//! Small generic helpers that turn up in almost every codebase: owning
//! pointers, optional dereference, containment tests, slice-to-set
//! conversion and `min`/`max` with a fixed tie-break.
//!
//! ## Modules
//!
//! - `ptr`: `to_ptr` boxes a value; `to_val` resolves an `Option<&T>` into
//!   `(T, bool)`, falling back to `T::default()` on absence.
//! - `collections`: `slice_contains` and `map_contains` membership queries
//!   (the latter over any `ContainsKey` mapping), and `slice_to_map`, which
//!   collapses a slice into a `SliceMap<T>` of distinct elements.
//! - `cmp`: `min` and `max` over `PartialOrd`, returning the second and first
//!   argument respectively on ties.
//!
//! Every helper is pure and never panics. Absence and misses are reported
//! through return values, and unsupported types are rejected by trait bounds
//! at compile time.
//!
//! The helpers are re-exported at the crate root:
//!
//! ```rust
//! use utls::{max, min, slice_contains, slice_to_map, to_ptr, to_val};
//!
//! let tags = ["a", "b", "a"];
//! let set = slice_to_map(&tags);
//! assert_eq!(set.len(), 2);
//! assert!(slice_contains(&tags, &"b"));
//!
//! assert_eq!(to_val(Some(&*to_ptr(7))), (7, true));
//! assert_eq!((min(3, 4), max(3, 4)), (3, 4));
//! ```

pub mod cmp;
pub mod collections;
pub mod ptr;

#[cfg(test)]
mod properties;

pub use cmp::{max, min};
pub use collections::contains::{ContainsKey, map_contains, slice_contains};
pub use collections::set::{SliceMap, slice_to_map};
pub use ptr::{to_ptr, to_val};
