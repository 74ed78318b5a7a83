// Copyright 2024 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
	clippy::alloc_instead_of_core,
	clippy::as_underscore,
	clippy::assertions_on_result_states,
	clippy::cfg_not_test,
	clippy::clone_on_ref_ptr,
	clippy::decimal_literal_representation,
	clippy::deref_by_slicing,
	clippy::else_if_without_else,
	clippy::empty_drop,
	clippy::empty_enum_variants_with_brackets,
	clippy::empty_structs_with_brackets,
	clippy::error_impl_error,
	clippy::exhaustive_enums,
	clippy::field_scoped_visibility_modifiers,
	clippy::if_then_some_else_none,
	clippy::impl_trait_in_params,
	clippy::infinite_loop,
	clippy::map_err_ignore,
	clippy::mem_forget,
	clippy::missing_errors_doc,
	clippy::missing_panics_doc,
	clippy::missing_safety_doc,
	clippy::panic,
	clippy::partial_pub_fields,
	clippy::redundant_type_annotations,
	clippy::ref_patterns,
	clippy::renamed_function_params,
	clippy::semicolon_inside_block,
	clippy::std_instead_of_alloc,
	clippy::std_instead_of_core,
	clippy::undocumented_unsafe_blocks,
	clippy::unwrap_used,
)]
#![forbid(unsafe_code)]

//! # `sliceutil`
//!
//! `sliceutil` is a collection of generic functions over slices and vectors: element-wise
//! equality, linear search, cloning, sorting, insertion, and deletion. Each has a plain form using
//! the element type's own [`PartialEq`], and a `_func` form taking a caller-supplied function.
//!
//! | Module       | Functions                                         | Complexity     |
//! |--------------|---------------------------------------------------|----------------|
//! | [`eq`]       | [`equal`], [`equal_func`]                         | *O*(n)         |
//! | [`search`]   | [`index`], [`index_func`], [`contains`]           | *O*(n)         |
//! | [`clone`]    | [`clone`](clone::clone)                           | *O*(n)         |
//! | [`sort`]     | [`sort`](sort::sort), [`is_sorted_func`]          | *O*(n log n)   |
//! | [`modify`]   | [`insert`], [`try_insert`], [`delete`], [`try_delete`] | *O*(n + m) |
//!
//! # Absent and Empty Slices
//!
//! An absent slice is modelled as [`None`]. [`clone`](clone::clone) keeps the distinction: cloning
//! [`None`] gives [`None`], while cloning an empty slice gives a new, empty [`Vec`]. Everywhere
//! else an absent slice behaves as an empty one, so an `Option<Vec<T>>` can be passed as
//! `s.as_deref().unwrap_or_default()`.
//!
//! # Contract Violations
//!
//! An out-of-bounds index or range passed to [`insert`] or [`delete`] is a bug in the caller, and
//! panics rather than being clamped. The `try_` forms return [`OutOfBounds`] instead, leaving the
//! vector unchanged. A missing element is not an error: the search functions return [`None`].
//!
//! [`Vec`]: alloc::vec::Vec
//! [`equal`]: eq::equal
//! [`equal_func`]: eq::equal_func
//! [`index`]: search::index
//! [`index_func`]: search::index_func
//! [`contains`]: search::contains
//! [`is_sorted_func`]: sort::is_sorted_func
//! [`insert`]: modify::insert
//! [`try_insert`]: modify::try_insert
//! [`delete`]: modify::delete
//! [`try_delete`]: modify::try_delete
//! [`OutOfBounds`]: error::OutOfBounds

extern crate alloc;

pub mod error;
pub mod eq;
pub mod search;
pub mod clone;
#[cfg(feature = "sort")]
pub mod sort;
#[cfg(feature = "modify")]
pub mod modify;

pub mod prelude {
	pub use crate::error::OutOfBounds;
	pub use crate::eq::{equal, equal_func};
	pub use crate::search::{contains, index, index_func};
	pub use crate::clone::clone;
	#[cfg(feature = "sort")]
	pub use crate::sort::{is_sorted_func, sort};
	#[cfg(feature = "modify")]
	pub use crate::modify::{delete, insert, try_delete, try_insert};
}
