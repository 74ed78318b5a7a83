// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

//! Unstable, in-place sorting by a "less than" predicate.
//!
//! The algorithm is an introsort: quicksort around a median-of-three pivot, insertion sort for
//! short runs, and heapsort once the recursion gets too deep. It moves elements only by swapping
//! and never indexes past the slice, so a predicate that isn't a strict weak ordering produces an
//! unspecified order, but every element is kept and the sort always terminates.

use core::mem;

/// Runs at or below this length are insertion sorted.
const INSERTION_THRESHOLD: usize = 12;

/// Sorts `slice` in place, in the order determined by `less`.
///
/// `less(a, b)` returns `true` if `a` must be placed before `b`, and must be a strict weak
/// ordering. The sort is not stable: elements for which neither `less(a, b)` nor `less(b, a)`
/// holds may be reordered relative to each other.
///
/// # Examples
///
/// ```
/// use sliceutil::sort::sort;
///
/// let mut words = ["gopher", "ox", "zebra", "lion"];
/// sort(&mut words, |a, b| a.len() < b.len());
/// assert_eq!(words[0], "ox");
/// assert_eq!(words[3], "gopher");
///
/// let mut numbers = [3, 1, 2];
/// sort(&mut numbers, |a, b| a > b);
/// assert_eq!(numbers, [3, 2, 1]);
/// ```
///
/// # Time complexity
///
/// Takes *O*(*n* log *n*) calls to `less`, in both the average and worst case.
pub fn sort<T, F: FnMut(&T, &T) -> bool>(slice: &mut [T], mut less: F) {
	let limit = usize::BITS - slice.len().leading_zeros();
	quicksort(slice, &mut less, limit * 2);
}

/// Returns `true` if `slice` is sorted in the order determined by `less`, that is, no element is
/// less than the element before it.
///
/// # Examples
///
/// ```
/// use sliceutil::sort::is_sorted_func;
///
/// assert!(is_sorted_func(&[1, 2, 2, 9], |a, b| a < b));
/// assert!(!is_sorted_func(&[1, 3, 2], |a, b| a < b));
/// assert!(is_sorted_func::<i32, _>(&[], |a, b| a < b));
/// ```
pub fn is_sorted_func<T, F: FnMut(&T, &T) -> bool>(slice: &[T], mut less: F) -> bool {
	slice.windows(2).all(|pair| !less(&pair[1], &pair[0]))
}

fn quicksort<T, F: FnMut(&T, &T) -> bool>(mut v: &mut [T], less: &mut F, mut limit: u32) {
	loop {
		if v.len() <= INSERTION_THRESHOLD {
			insertion_sort(v, less);
			return
		}

		if limit == 0 {
			heapsort(v, less);
			return
		}
		limit -= 1;

		let pivot = partition(v, less);
		let (left, right) = mem::take(&mut v).split_at_mut(pivot);
		// The pivot is in its final position.
		let right = &mut right[1..];

		// Recurse into the shorter side, loop on the longer one.
		if left.len() < right.len() {
			quicksort(left, less, limit);
			v = right;
		} else {
			quicksort(right, less, limit);
			v = left;
		}
	}
}

/// Partitions `v` around a median-of-three pivot, returning the pivot's final index. Elements
/// before it are less than the pivot; elements after it are not.
fn partition<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], less: &mut F) -> usize {
	let last = v.len() - 1;
	let mid = v.len() / 2;

	sort3(v, 0, mid, last, less);
	v.swap(mid, last);

	let mut store = 0;
	for i in 0..last {
		if less(&v[i], &v[last]) {
			v.swap(i, store);
			store += 1;
		}
	}
	v.swap(store, last);
	store
}

/// Orders the elements at `a`, `b`, and `c`, leaving the median at `b`.
fn sort3<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], a: usize, b: usize, c: usize, less: &mut F) {
	if less(&v[b], &v[a]) {
		v.swap(a, b);
	}
	if less(&v[c], &v[b]) {
		v.swap(b, c);
		if less(&v[b], &v[a]) {
			v.swap(a, b);
		}
	}
}

fn insertion_sort<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], less: &mut F) {
	for i in 1..v.len() {
		let mut j = i;
		while j > 0 && less(&v[j], &v[j - 1]) {
			v.swap(j, j - 1);
			j -= 1;
		}
	}
}

fn heapsort<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], less: &mut F) {
	for node in (0..v.len() / 2).rev() {
		sift_down(v, node, less);
	}

	for end in (1..v.len()).rev() {
		v.swap(0, end);
		sift_down(&mut v[..end], 0, less);
	}
}

/// Moves the element at `node` down the max-heap `v` until both its children are not greater.
fn sift_down<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], mut node: usize, less: &mut F) {
	loop {
		let mut child = 2 * node + 1;
		if child >= v.len() {
			break
		}

		if child + 1 < v.len() && less(&v[child], &v[child + 1]) {
			child += 1;
		}

		if !less(&v[node], &v[child]) {
			break
		}

		v.swap(node, child);
		node = child;
	}
}

#[cfg(test)]
mod tests {
	use alloc::vec::Vec;
	use super::{heapsort, insertion_sort, is_sorted_func, sort};

	/// Deterministic pseudo-random values, so failures reproduce.
	fn scrambled(len: usize, modulus: u64) -> Vec<u64> {
		let mut state = 0x2545_F491_4F6C_DD1D_u64;
		(0..len).map(|_| {
			state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
			(state >> 33) % modulus
		}).collect()
	}

	fn sorted_copy(v: &[u64]) -> Vec<u64> {
		let mut copy = v.to_vec();
		copy.sort_unstable();
		copy
	}

	#[test]
	fn sort_ints() {
		let mut v = [5, 2, 9, 1, 5, 6];
		sort(&mut v, |a, b| a < b);
		assert_eq!(v, [1, 2, 5, 5, 6, 9]);
	}

	#[test]
	fn sort_trivial() {
		let mut empty: [i32; 0] = [];
		sort(&mut empty, |a, b| a < b);

		let mut one = [7];
		sort(&mut one, |a, b| a < b);
		assert_eq!(one, [7]);
	}

	#[test]
	fn sort_descending() {
		let mut v = scrambled(500, 1000);
		sort(&mut v, |a, b| a > b);

		let mut expected = sorted_copy(&v);
		expected.reverse();
		assert_eq!(v, expected);
	}

	#[test]
	fn sort_large_matches_std() {
		for len in [13, 64, 1000, 4096] {
			let mut v = scrambled(len, u64::MAX);
			let expected = sorted_copy(&v);
			sort(&mut v, |a, b| a < b);
			assert_eq!(v, expected, "len {len}");
		}
	}

	#[test]
	fn sort_many_duplicates() {
		let mut v = scrambled(2000, 3);
		let expected = sorted_copy(&v);
		sort(&mut v, |a, b| a < b);
		assert_eq!(v, expected);
	}

	#[test]
	fn sort_presorted_and_reversed() {
		let mut ascending: Vec<u32> = (0..1000).collect();
		sort(&mut ascending, |a, b| a < b);
		assert!(is_sorted_func(&ascending, |a, b| a < b));

		let mut descending: Vec<u32> = (0..1000).rev().collect();
		sort(&mut descending, |a, b| a < b);
		assert_eq!(descending, ascending);
	}

	#[test]
	fn sort_is_idempotent() {
		let mut v = scrambled(300, 50);
		sort(&mut v, |a, b| a < b);
		let once = v.clone();
		sort(&mut v, |a, b| a < b);
		assert_eq!(v, once);
	}

	#[test]
	fn sort_by_key_field() {
		let mut pairs = [(3, 'c'), (1, 'a'), (2, 'b')];
		sort(&mut pairs, |a, b| a.0 < b.0);
		assert_eq!(pairs, [(1, 'a'), (2, 'b'), (3, 'c')]);
	}

	#[test]
	fn inconsistent_predicate_keeps_elements() {
		let mut v = scrambled(1000, 100);
		let expected = sorted_copy(&v);

		sort(&mut v, |_, _| true);
		assert_eq!(sorted_copy(&v), expected);

		let mut flip = false;
		sort(&mut v, |_, _| {
			flip = !flip;
			flip
		});
		assert_eq!(sorted_copy(&v), expected);
	}

	#[test]
	fn heapsort_sorts() {
		let mut v = scrambled(777, 500);
		let expected = sorted_copy(&v);
		heapsort(&mut v, &mut |a: &u64, b: &u64| a < b);
		assert_eq!(v, expected);
	}

	#[test]
	fn insertion_sort_sorts() {
		let mut v = scrambled(40, 10);
		let expected = sorted_copy(&v);
		insertion_sort(&mut v, &mut |a: &u64, b: &u64| a < b);
		assert_eq!(v, expected);
	}

	#[test]
	fn is_sorted_func_detects_disorder() {
		assert!(is_sorted_func(&[1], |a, b| a < b));
		assert!(is_sorted_func(&[3, 3, 3], |a, b| a < b));
		assert!(!is_sorted_func(&[2, 1], |a, b| a < b));
	}
}
