use thiserror::Error;

use crate::{IndexWidth, KeyType};

/// Errors returned by [`RadixSorter`](crate::RadixSorter).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RadixSortError {
    #[error("cannot sort {count} elements with a sorter of capacity {capacity}")]
    CapacityExceeded { count: usize, capacity: usize },
    #[error("sorter allocated for {expected} keys was given {found} keys")]
    KeyTypeMismatch { expected: KeyType, found: KeyType },
    #[error("count {count} exceeds the {len} elements supplied")]
    CountOutOfBounds { count: usize, len: usize },
    #[error("capacity {capacity} exceeds the {max} elements addressable by the widest index")]
    CapacityTooLarge { capacity: usize, max: usize },
    #[error("{width} indices cannot address a capacity of {capacity}")]
    IndexWidthTooNarrow { capacity: usize, width: IndexWidth },
}
