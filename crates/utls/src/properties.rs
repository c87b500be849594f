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

//! Property tests for the universal laws of the crate's helpers.

use crate::cmp::{max, min};
use crate::collections::contains::{map_contains, slice_contains};
use crate::collections::set::slice_to_map;
use crate::ptr::{to_ptr, to_val};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

proptest! {
    #[test]
    fn prop_to_val_of_to_ptr_round_trips(v in any::<i64>(), s in ".*") {
        prop_assert_eq!(to_val(Some(&*to_ptr(v))), (v, true));
        prop_assert_eq!(to_val(Some(&*to_ptr(s.clone()))), (s, true));
    }

    #[test]
    fn prop_slice_contains_matches_linear_search(
        s in prop::collection::vec(-20i32..20, 0..32),
        x in -20i32..20,
    ) {
        let expected = s.contains(&x);
        prop_assert_eq!(slice_contains(&s, &x), expected);
    }

    #[test]
    fn prop_map_contains_tracks_keys(
        m in prop::collection::btree_map(0u8..64, any::<bool>(), 0..16),
        k in 0u8..64,
    ) {
        let keys: Vec<u8> = m.keys().copied().collect();
        prop_assert_eq!(map_contains(&m, &k), keys.contains(&k));
    }

    #[test]
    fn prop_map_contains_empty_is_false(k in any::<u32>()) {
        let m: BTreeMap<u32, ()> = BTreeMap::new();
        prop_assert!(!map_contains(&m, &k));
    }

    #[test]
    fn prop_slice_to_map_holds_distinct_elements(
        s in prop::collection::vec("[a-d]{1,2}", 0..32),
    ) {
        let m = slice_to_map(&s);
        let distinct: BTreeSet<&String> = s.iter().collect();

        prop_assert_eq!(m.len(), distinct.len());
        for item in &s {
            prop_assert_eq!(m.get(item), Some(&true));
        }
        for key in m.keys() {
            prop_assert!(slice_contains(&s, key));
        }
    }

    #[test]
    fn prop_min_max_select_an_operand(a in any::<i32>(), b in any::<i32>()) {
        let lo = min(a, b);
        let hi = max(a, b);

        prop_assert!(lo <= hi);
        prop_assert!(lo == a || lo == b);
        prop_assert!(hi == a || hi == b);
        prop_assert_eq!(lo, a.min(b));
        prop_assert_eq!(hi, a.max(b));
    }

    #[test]
    fn prop_min_max_finite_floats(
        a in -1.0e6f64..1.0e6,
        b in -1.0e6f64..1.0e6,
    ) {
        prop_assert_eq!(min(a, b), a.min(b));
        prop_assert_eq!(max(a, b), a.max(b));
    }
}
