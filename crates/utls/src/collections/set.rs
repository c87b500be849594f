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

//! # Slice to Membership Map
//!
//! `slice_to_map` turns a slice into a `SliceMap<T>`, a hash map from each
//! distinct element to `true`. Duplicates collapse into a single entry, so
//! the map's length is the number of distinct elements. The map carries no
//! ordering.
//!
//! `SliceMap` uses the Fx hasher from `rustc-hash`: fast for the small keys
//! these maps usually hold, but not resistant to adversarial input.
//!
//! ## Usage
//!
//! ```rust
//! use utls::collections::set::slice_to_map;
//!
//! let m = slice_to_map(&["a", "b", "a"]);
//! assert_eq!(m.len(), 2);
//! assert_eq!(m.get("a"), Some(&true));
//! ```

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Membership map produced by [`slice_to_map`]. Every stored value is `true`.
pub type SliceMap<T> = FxHashMap<T, bool>;

/// Builds a membership map holding every distinct element of `s`.
///
/// # Examples
///
/// ```rust
/// # use utls::collections::set::slice_to_map;
/// let m = slice_to_map(&[5, 2, 5]);
/// assert_eq!(m.len(), 2);
/// assert!(m[&5] && m[&2]);
/// assert!(slice_to_map::<i32>(&[]).is_empty());
/// ```
pub fn slice_to_map<T>(s: &[T]) -> SliceMap<T>
where
    T: Eq + Hash + Clone,
{
    let mut m = SliceMap::with_capacity_and_hasher(s.len(), Default::default());
    for item in s {
        m.insert(item.clone(), true);
    }

    debug_assert!(
        m.len() <= s.len(),
        "`slice_to_map` produced more entries than input elements"
    );
    m
}
