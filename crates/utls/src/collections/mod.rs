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

//! # Collection Helpers
//!
//! Containment queries over slices and keyed mappings, plus conversion of a
//! slice into a set-like membership map.
//!
//! ## Submodules
//!
//! - `contains`: `slice_contains` for linear membership tests and
//!   `map_contains` for key presence over any `ContainsKey` implementor
//!   (`HashMap`, `BTreeMap`).
//! - `set`: `slice_to_map`, which collapses a slice into a `SliceMap<T>`
//!   mapping each distinct element to `true`.
//!
//! ## Motivation
//!
//! Membership checks show up everywhere and are easy to get subtly wrong
//! (comparing values instead of keys, or depending on a map's values). These
//! helpers give the common cases one spelling and make the intent obvious at
//! the call site.

pub mod contains;
pub mod set;
