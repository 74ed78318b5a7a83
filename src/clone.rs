// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;

/// Returns a copy of the slice, or [`None`] if the slice is absent.
///
/// Elements are copied with [`Clone`], so this is a shallow clone: anything the elements point to
/// is shared, not copied. An absent slice stays absent, while an empty slice produces a new, empty
/// vector.
///
/// # Examples
///
/// ```
/// use sliceutil::clone::clone;
///
/// let numbers = [1.0, 10.2, 39.2];
/// let mut copy = clone(Some(&numbers[..])).unwrap_or_default();
/// copy[0] = 0.0;
///
/// assert_eq!(numbers, [1.0, 10.2, 39.2]);
/// assert_eq!(copy, [0.0, 10.2, 39.2]);
///
/// assert_eq!(clone::<f64>(None), None);
/// assert_eq!(clone::<f64>(Some(&[])), Some(Vec::new()));
/// ```
#[must_use]
pub fn clone<T: Clone>(slice: Option<&[T]>) -> Option<Vec<T>> {
	slice.map(<[T]>::to_vec)
}
