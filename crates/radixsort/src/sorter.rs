use std::mem;

use log::{debug, trace};

use crate::key::digit;
use crate::{
    IndexWidth, KeyType, MAX_PASSES, NUM_BUCKETS, RadixKey, RadixSortError, SortIndex,
    SortedIndices,
};

/// Allocation-time settings for a [`RadixSorter`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SorterOptions {
    /// Overrides the index width derived from the capacity.
    pub index_width: Option<IndexWidth>,
}

/// Reusable indirect radix sorter for one [`KeyType`].
///
/// All working memory (two permutation buffers of `capacity` indices and one
/// histogram per key byte) is allocated by [`RadixSorter::new`]; sorting never
/// allocates. Dropping the sorter releases the buffers.
#[derive(Debug)]
pub struct RadixSorter {
    key_type: KeyType,
    capacity: usize,
    buffers: IndexBuffers,
    histograms: Box<[[usize; NUM_BUCKETS]; MAX_PASSES]>,
    sorted_len: usize,
}

#[derive(Debug)]
enum IndexBuffers {
    Narrow(PingPong<u16>),
    Wide(PingPong<u32>),
}

/// `front` holds the current permutation, `back` receives the next pass.
#[derive(Debug)]
struct PingPong<I> {
    front: Box<[I]>,
    back: Box<[I]>,
}

impl RadixSorter {
    pub fn new(key_type: KeyType, capacity: usize) -> Result<Self, RadixSortError> {
        Self::with_options(key_type, capacity, SorterOptions::default())
    }

    pub fn with_options(
        key_type: KeyType,
        capacity: usize,
        options: SorterOptions,
    ) -> Result<Self, RadixSortError> {
        let index_width = match options.index_width {
            Some(width) if capacity > width.max_capacity() => {
                return Err(RadixSortError::IndexWidthTooNarrow { capacity, width });
            }
            Some(width) => width,
            None => IndexWidth::for_capacity(capacity).ok_or(RadixSortError::CapacityTooLarge {
                capacity,
                max: IndexWidth::U32.max_capacity(),
            })?,
        };

        let buffers = match index_width {
            IndexWidth::U16 => IndexBuffers::Narrow(PingPong::new(capacity)),
            IndexWidth::U32 => IndexBuffers::Wide(PingPong::new(capacity)),
        };

        debug!(
            "allocated radix sorter: key_type={key_type} capacity={capacity} index_width={index_width}"
        );

        Ok(Self {
            key_type,
            capacity,
            buffers,
            histograms: Box::new([[0; NUM_BUCKETS]; MAX_PASSES]),
            sorted_len: 0,
        })
    }

    #[inline]
    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn index_width(&self) -> IndexWidth {
        match self.buffers {
            IndexBuffers::Narrow(_) => IndexWidth::U16,
            IndexBuffers::Wide(_) => IndexWidth::U32,
        }
    }

    /// Sorts `keys` and returns the permutation that orders them.
    ///
    /// Equal keys keep their relative input order. For floats, `-0.0` sorts
    /// before `+0.0`; the position of NaNs is unspecified.
    pub fn sort<K: RadixKey>(&mut self, keys: &[K]) -> Result<SortedIndices<'_>, RadixSortError> {
        if K::KEY_TYPE != self.key_type {
            return Err(RadixSortError::KeyTypeMismatch {
                expected: self.key_type,
                found: K::KEY_TYPE,
            });
        }
        if keys.len() > self.capacity {
            return Err(RadixSortError::CapacityExceeded {
                count: keys.len(),
                capacity: self.capacity,
            });
        }

        let passes = self.key_type.passes();
        trace!(
            "radix sort: key_type={} count={} passes={passes}",
            self.key_type,
            keys.len()
        );

        let histograms = &mut self.histograms[..passes];
        self.sorted_len = keys.len();
        Ok(match &mut self.buffers {
            IndexBuffers::Narrow(buffers) => buffers.sort(keys, histograms),
            IndexBuffers::Wide(buffers) => buffers.sort(keys, histograms),
        })
    }

    /// Sorts the first `count` elements of `keys`.
    pub fn sort_prefix<K: RadixKey>(
        &mut self,
        keys: &[K],
        count: usize,
    ) -> Result<SortedIndices<'_>, RadixSortError> {
        let prefix = keys.get(..count).ok_or(RadixSortError::CountOutOfBounds {
            count,
            len: keys.len(),
        })?;
        self.sort(prefix)
    }

    /// Permutation produced by the most recent successful sort; empty before
    /// the first one.
    pub fn last_sorted(&self) -> SortedIndices<'_> {
        match &self.buffers {
            IndexBuffers::Narrow(buffers) => SortIndex::view(&buffers.front[..self.sorted_len]),
            IndexBuffers::Wide(buffers) => SortIndex::view(&buffers.front[..self.sorted_len]),
        }
    }

    /// Releases the sorter's buffers. Equivalent to dropping it.
    pub fn deallocate(self) {}
}

impl Drop for RadixSorter {
    fn drop(&mut self) {
        debug!(
            "released radix sorter: key_type={} capacity={}",
            self.key_type, self.capacity
        );
    }
}

impl<I: SortIndex> PingPong<I> {
    fn new(capacity: usize) -> Self {
        Self {
            front: vec![I::default(); capacity].into_boxed_slice(),
            back: vec![I::default(); capacity].into_boxed_slice(),
        }
    }

    fn sort<K: RadixKey>(
        &mut self,
        keys: &[K],
        histograms: &mut [[usize; NUM_BUCKETS]],
    ) -> SortedIndices<'_> {
        let len = keys.len();
        debug_assert!(len <= self.front.len());

        for (i, slot) in self.front[..len].iter_mut().enumerate() {
            *slot = I::from_usize(i);
        }

        count_digits(keys, histograms);

        for (pass, offsets) in histograms.iter_mut().enumerate() {
            prefix_sum(offsets);
            scatter(keys, &self.front[..len], &mut self.back[..len], offsets, pass);
            mem::swap(&mut self.front, &mut self.back);
        }

        I::view(&self.front[..len])
    }
}

/// Fills one histogram per pass in a single read of `keys`; digit counts do
/// not depend on the permutation order.
#[inline]
fn count_digits<K: RadixKey>(keys: &[K], histograms: &mut [[usize; NUM_BUCKETS]]) {
    for counts in histograms.iter_mut() {
        counts.fill(0);
    }

    for &key in keys {
        let ordered = key.ordered();
        for (pass, counts) in histograms.iter_mut().enumerate() {
            counts[digit(ordered, pass)] += 1;
        }
    }
}

#[inline]
fn prefix_sum(counts: &mut [usize; NUM_BUCKETS]) {
    let mut sum = 0usize;
    for c in counts.iter_mut() {
        let old = *c;
        *c = sum;
        sum += old;
    }
}

/// Stable scatter of `src` into `dst` by digit `pass` of each referenced key.
#[inline]
fn scatter<K: RadixKey, I: SortIndex>(
    keys: &[K],
    src: &[I],
    dst: &mut [I],
    offsets: &mut [usize; NUM_BUCKETS],
    pass: usize,
) {
    for &index in src {
        let d = digit(keys[index.to_usize()].ordered(), pass);
        let pos = offsets[d];
        dst[pos] = index;
        offsets[d] = pos + 1;
    }
}
