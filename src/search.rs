// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

//! Linear search. A missing element is reported as [`None`].

/// Returns the index of the first occurrence of `value` in `slice`, or [`None`] if not present.
///
/// # Examples
///
/// ```
/// use sliceutil::search::index;
///
/// assert_eq!(index(&[10, 20, 40], &20), Some(1));
/// assert_eq!(index(&[10, 20, 40], &30), None);
/// ```
#[must_use]
pub fn index<T: PartialEq>(slice: &[T], value: &T) -> Option<usize> {
	index_func(slice, |x| value == x)
}

/// Returns the index of the first element satisfying `predicate`, or [`None`] if none do.
///
/// Elements are visited left to right, and `predicate` is not called again after it first
/// returns `true`.
///
/// # Examples
///
/// ```
/// use sliceutil::search::index_func;
///
/// struct Point { x: i16, y: i16 }
///
/// let points = [Point { x: 10, y: 2 }, Point { x: 4, y: 4 }];
/// assert_eq!(index_func(&points, |p| p.x == 10), Some(0));
/// assert_eq!(index_func(&points, |p| p.y == 10), None);
/// ```
pub fn index_func<T, F: FnMut(&T) -> bool>(slice: &[T], predicate: F) -> Option<usize> {
	slice.iter().position(predicate)
}

/// Returns `true` if `value` is present in `slice`.
///
/// # Examples
///
/// ```
/// use sliceutil::search::contains;
///
/// let animals = ["zebra", "lion", "gopher"];
/// assert!(contains(&animals, &"gopher"));
/// assert!(!contains(&animals, &"ferris"));
/// ```
#[must_use]
pub fn contains<T: PartialEq>(slice: &[T], value: &T) -> bool {
	index(slice, value).is_some()
}
