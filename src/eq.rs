// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

//! Element-wise slice equality.

/// Returns `true` if two slices are equal: the same length, with all elements equal.
///
/// If the lengths differ, returns `false` without comparing any elements. Otherwise, elements are
/// compared in index order, stopping at the first unequal pair. Floating point `NaN`s are never
/// equal, so a slice containing `NaN` is not equal to itself.
///
/// # Examples
///
/// ```
/// use sliceutil::eq::equal;
///
/// assert!(equal(&[20i8, 3, 4], &[20, 3, 4]));
/// assert!(!equal(&[1, 2, 3], &[1, 2, 3, 4]));
/// assert!(!equal(&[f64::NAN], &[f64::NAN]));
/// ```
#[must_use]
pub fn equal<T: PartialEq>(s1: &[T], s2: &[T]) -> bool {
	equal_func(s1, s2, T::eq)
}

/// Returns `true` if two slices are equal under the comparison function `eq`, applied to each
/// pair of elements.
///
/// The slices may hold different element types. If the lengths differ, returns `false` without
/// calling `eq`. Otherwise, elements are compared in index order, stopping at the first index for
/// which `eq` returns `false`.
///
/// # Examples
///
/// ```
/// use sliceutil::eq::equal_func;
///
/// let s1: [i8; 2] = [20, 2];
/// let s2: [i16; 2] = [20, 2];
/// assert!(equal_func(&s1, &s2, |&a, &b| i16::from(a) == b));
/// ```
///
/// # Time complexity
///
/// Takes at most *O*(*n*) calls to `eq`, and *O*(1) time if the lengths differ.
pub fn equal_func<T1, T2, F>(s1: &[T1], s2: &[T2], mut eq: F) -> bool
where
	F: FnMut(&T1, &T2) -> bool,
{
	if s1.len() != s2.len() {
		return false
	}

	s1.iter().zip(s2).all(|(a, b)| eq(a, b))
}
