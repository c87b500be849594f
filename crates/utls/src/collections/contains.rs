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

//! # Containment Queries
//!
//! `slice_contains` scans a slice in order and stops at the first element
//! equal to the target. `map_contains` asks a mapping whether it has an
//! entry for a key, without looking at the stored value.
//!
//! Mappings opt in through `ContainsKey<Q>`, which is implemented for the
//! standard `HashMap` (any hasher, including `FxHashMap`) and `BTreeMap`.
//! Lookups go through `Borrow`, so a `HashMap<String, _>` can be queried with
//! a `&str`.
//!
//! ## Usage
//!
//! ```rust
//! use std::collections::HashMap;
//! use utls::collections::contains::{map_contains, slice_contains};
//!
//! assert!(slice_contains(&[1, 2, 3], &2));
//! assert!(!slice_contains::<i32>(&[], &2));
//!
//! let m = HashMap::from([("test".to_string(), 5)]);
//! assert!(map_contains(&m, "test"));
//! assert!(!map_contains(&m, "test2"));
//! ```

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A keyed collection that can report whether it holds an entry for a key.
///
/// The query type `Q` may differ from the stored key type, following the
/// `Borrow` conventions of the standard maps.
///
/// # Examples
///
/// ```rust
/// # use utls::collections::contains::ContainsKey;
/// use std::collections::BTreeMap;
///
/// let m = BTreeMap::from([(1, "one")]);
/// assert!(ContainsKey::contains_key(&m, &1));
/// assert!(!ContainsKey::contains_key(&m, &2));
/// ```
pub trait ContainsKey<Q: ?Sized> {
    /// Returns `true` if the collection has an entry for `key`.
    fn contains_key(&self, key: &Q) -> bool;
}

impl<K, V, S, Q> ContainsKey<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: ?Sized + Eq + Hash,
    S: BuildHasher,
{
    #[inline(always)]
    fn contains_key(&self, key: &Q) -> bool {
        HashMap::contains_key(self, key)
    }
}

impl<K, V, Q> ContainsKey<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    #[inline(always)]
    fn contains_key(&self, key: &Q) -> bool {
        BTreeMap::contains_key(self, key)
    }
}

/// Returns `true` if some element of `s` equals `item`.
///
/// Elements are compared with `T`'s `PartialEq`, in order, stopping at the
/// first match. For reference elements this compares the pointees; use
/// `std::ptr::eq` directly when identity is what matters.
///
/// # Examples
///
/// ```rust
/// # use utls::collections::contains::slice_contains;
/// assert!(slice_contains(&["test", "test2"], &"test2"));
/// assert!(!slice_contains(&[true], &false));
/// ```
#[inline]
pub fn slice_contains<T>(s: &[T], item: &T) -> bool
where
    T: PartialEq,
{
    s.iter().any(|x| x == item)
}

/// Returns `true` if `m` has an entry for `key`, whatever its value.
///
/// # Examples
///
/// ```rust
/// # use utls::collections::contains::map_contains;
/// use std::collections::HashMap;
///
/// let m: HashMap<i32, bool> = HashMap::from([(5, false)]);
/// assert!(map_contains(&m, &5));
/// assert!(!map_contains(&m, &2));
/// ```
#[inline]
pub fn map_contains<M, Q>(m: &M, key: &Q) -> bool
where
    M: ContainsKey<Q>,
    Q: ?Sized,
{
    m.contains_key(key)
}
