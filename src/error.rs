// Copyright 2024 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

use core::fmt::{self, Debug, Display, Formatter};

pub type Result<T = (), E = OutOfBounds> = core::result::Result<T, E>;

/// An error on insertion or deletion, indicating an index or range outside the vector.
#[derive(Copy, Clone, Eq, PartialEq)]
#[non_exhaustive]
pub enum OutOfBounds {
	/// An insertion index was greater than the vector length.
	Index {
		/// The requested index.
		index: usize,
		/// The vector length at the time of the call.
		len: usize,
	},
	/// A deletion range was inverted or ended past the vector length.
	Range {
		/// The inclusive start of the requested range.
		start: usize,
		/// The exclusive end of the requested range.
		end: usize,
		/// The vector length at the time of the call.
		len: usize,
	},
}

impl OutOfBounds {
	/// Returns the vector length at the time of the failed call.
	pub fn len(&self) -> usize {
		let (Self::Index { len, .. } |
			 Self::Range { len, .. }) = *self;
		len
	}
}

impl Debug for OutOfBounds {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Index { index, len } =>
				f.debug_struct("Index")
				 .field("index", index)
				 .field("len", len)
				 .finish(),
			Self::Range { start, end, len } =>
				f.debug_struct("Range")
				 .field("start", start)
				 .field("end", end)
				 .field("len", len)
				 .finish(),
		}
	}
}

impl Display for OutOfBounds {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Index { index, len } =>
				write!(f, "insertion index (is {index}) should be <= len (is {len})"),
			Self::Range { start, end, len } =>
				write!(
					f,
					"deletion range (is {start}..{end}) should be ordered and end <= len (is {len})"
				),
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for OutOfBounds { }

#[cfg(test)]
mod tests {
	use alloc::string::ToString;
	use super::OutOfBounds;

	#[test]
	fn display_names_index_and_len() {
		let err = OutOfBounds::Index { index: 4, len: 3 };
		assert_eq!(err.to_string(), "insertion index (is 4) should be <= len (is 3)");
		assert_eq!(err.len(), 3);
	}

	#[test]
	fn display_names_range_and_len() {
		let err = OutOfBounds::Range { start: 2, end: 1, len: 3 };
		assert_eq!(
			err.to_string(),
			"deletion range (is 2..1) should be ordered and end <= len (is 3)"
		);
		assert_eq!(err.len(), 3);
	}
}
