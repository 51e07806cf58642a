//! Indirect, stable LSD radix sort over 8-bit digits.
//!
//! A [`RadixSorter`] is allocated once for a [`KeyType`] and a maximum element
//! count, then reused for any number of sorts. Each sort returns the permutation
//! that orders the input as a [`SortedIndices`] view into the sorter's own
//! buffers; the caller's keys are never moved.
//!
//! ```
//! use radixsort::{KeyType, RadixSorter};
//!
//! let mut sorter = RadixSorter::new(KeyType::Int32, 7)?;
//! let keys = [5_i32, -3, 0, -3, 9, 1, -100];
//! let order = sorter.sort(&keys)?;
//! assert_eq!(order.to_vec(), [6, 1, 3, 2, 5, 0, 4]);
//! # Ok::<(), radixsort::RadixSortError>(())
//! ```

mod error;
mod index;
mod key;
mod sorter;

pub use error::RadixSortError;
pub use index::{IndexWidth, Iter, SortIndex, SortedIndices};
pub use key::{
    KeyType, RadixKey, digit, ordered_f32, ordered_f64, ordered_i32, ordered_i64, ordered_u32,
    ordered_u64,
};
pub use sorter::{RadixSorter, SorterOptions};

/// Bits per radix digit.
pub const RADIX_BITS: usize = 8;

/// Number of distinct digit values, and thus counters per histogram.
pub const NUM_BUCKETS: usize = 1 << RADIX_BITS;

/// Maximum number of passes any supported key needs.
pub const MAX_PASSES: usize = u64::BITS as usize / RADIX_BITS;
