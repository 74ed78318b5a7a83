// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

//! Insertion and deletion within a vector.
//!
//! Both operations modify the vector in place, shifting the elements after the affected position
//! and reusing the vector's spare capacity where possible. Each has a panicking and a fallible
//! form; an index or range outside the vector is a bug in the caller, so the panicking form is
//! usually the right one.

use alloc::vec::Vec;
use crate::error::{OutOfBounds, Result};

/// Inserts `values` into the vector starting at position `index`, shifting all subsequent
/// elements to the right. If `values` is empty, the vector is left unchanged.
///
/// The vector only reallocates if its spare capacity can't hold the new elements. A fallible
/// version is also provided: [`try_insert`].
///
/// # Panics
///
/// Panics if `index` is greater than the vector length.
///
/// # Examples
///
/// ```
/// use sliceutil::modify::insert;
///
/// let mut vec = vec![3, 4];
/// insert(&mut vec, 0, [1, 2]);
/// assert_eq!(vec, [1, 2, 3, 4]);
///
/// let mut vec = vec![1, 2, 3];
/// insert(&mut vec, 3, [4, 5]);
/// assert_eq!(vec, [1, 2, 3, 4, 5]);
/// ```
///
/// # Time complexity
///
/// Takes *O*(*n* + *m*) time, where *m* is the number of inserted values, as all elements after
/// `index` must be shifted.
#[track_caller]
pub fn insert<T, I: IntoIterator<Item = T>>(vec: &mut Vec<T>, index: usize, values: I) {
	if let Err(err) = try_insert(vec, index, values) {
		assert_failed(err)
	}
}

/// Inserts `values` into the vector starting at position `index`, shifting all subsequent
/// elements to the right.
///
/// # Errors
///
/// Returns an error if `index` is greater than the vector length. The vector and `values` are
/// left untouched.
///
/// # Examples
///
/// ```
/// use sliceutil::error::OutOfBounds;
/// use sliceutil::modify::try_insert;
///
/// let mut vec = vec!['a', 'd'];
/// assert_eq!(try_insert(&mut vec, 1, ['b', 'c']), Ok(()));
/// assert_eq!(vec, ['a', 'b', 'c', 'd']);
/// assert_eq!(
///     try_insert(&mut vec, 5, ['e']),
///     Err(OutOfBounds::Index { index: 5, len: 4 })
/// );
/// ```
pub fn try_insert<T, I: IntoIterator<Item = T>>(vec: &mut Vec<T>, index: usize, values: I) -> Result {
	let len = vec.len();
	if index > len {
		return Err(OutOfBounds::Index { index, len })
	}

	drop(vec.splice(index..index, values));
	Ok(())
}

/// Removes the elements in the range `start..end` from the vector, shifting all subsequent
/// elements to the left. The removed elements are dropped; the vector's capacity is unchanged.
///
/// A fallible version is also provided: [`try_delete`].
///
/// # Panics
///
/// Panics if `start` is greater than `end`, or if `end` is greater than the vector length.
///
/// # Examples
///
/// ```
/// use sliceutil::modify::delete;
///
/// let mut vec = vec![1, 2, 3, 4, 5];
/// delete(&mut vec, 3, 5);
/// assert_eq!(vec, [1, 2, 3]);
///
/// let mut vec = vec![3, 4];
/// delete(&mut vec, 0, 1);
/// assert_eq!(vec, [4]);
/// ```
///
/// # Time complexity
///
/// Takes at most *O*(*n*) time, as all elements after `end` must be shifted.
#[track_caller]
pub fn delete<T>(vec: &mut Vec<T>, start: usize, end: usize) {
	if let Err(err) = try_delete(vec, start, end) {
		assert_failed(err)
	}
}

/// Removes the elements in the range `start..end` from the vector, shifting all subsequent
/// elements to the left.
///
/// # Errors
///
/// Returns an error if `start` is greater than `end`, or if `end` is greater than the vector
/// length. The vector is left untouched.
///
/// # Examples
///
/// ```
/// use sliceutil::error::OutOfBounds;
/// use sliceutil::modify::try_delete;
///
/// let mut vec = vec!['a', 'b', 'c'];
/// assert_eq!(
///     try_delete(&mut vec, 2, 1),
///     Err(OutOfBounds::Range { start: 2, end: 1, len: 3 })
/// );
/// assert_eq!(try_delete(&mut vec, 1, 2), Ok(()));
/// assert_eq!(vec, ['a', 'c']);
/// ```
pub fn try_delete<T>(vec: &mut Vec<T>, start: usize, end: usize) -> Result {
	let len = vec.len();
	if start > end || end > len {
		return Err(OutOfBounds::Range { start, end, len })
	}

	drop(vec.drain(start..end));
	Ok(())
}

#[allow(clippy::panic)]
#[cold]
#[inline(never)]
#[track_caller]
fn assert_failed(err: OutOfBounds) -> ! {
	panic!("{err}");
}
