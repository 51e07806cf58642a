use std::fmt;

/// Width of the index values a sorter produces.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum IndexWidth {
    U16,
    U32,
}

impl IndexWidth {
    /// Narrowest width able to address every index in `[0, capacity)`.
    /// `None` when `capacity` is beyond what `u32` indices can address.
    pub fn for_capacity(capacity: usize) -> Option<Self> {
        if capacity <= Self::U16.max_capacity() {
            Some(Self::U16)
        } else if capacity <= Self::U32.max_capacity() {
            Some(Self::U32)
        } else {
            None
        }
    }

    /// Largest element count whose indices are representable at this width.
    #[inline]
    pub const fn max_capacity(self) -> usize {
        match self {
            IndexWidth::U16 => u16::MAX as usize + 1,
            IndexWidth::U32 => (u32::MAX as usize).saturating_add(1),
        }
    }

    #[inline]
    pub const fn size_bytes(self) -> usize {
        match self {
            IndexWidth::U16 => 2,
            IndexWidth::U32 => 4,
        }
    }
}

impl fmt::Display for IndexWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexWidth::U16 => f.write_str("u16"),
            IndexWidth::U32 => f.write_str("u32"),
        }
    }
}

/// Unsigned integer stored in the sorter's permutation buffers.
pub trait SortIndex: Copy + Default + private::Sealed {
    const WIDTH: IndexWidth;

    /// Callers guarantee `value < Self::WIDTH.max_capacity()`.
    fn from_usize(value: usize) -> Self;

    fn to_usize(self) -> usize;

    fn view(indices: &[Self]) -> SortedIndices<'_>;
}

impl SortIndex for u16 {
    const WIDTH: IndexWidth = IndexWidth::U16;

    #[inline]
    fn from_usize(value: usize) -> Self {
        debug_assert!(value <= u16::MAX as usize);
        value as u16
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }

    #[inline]
    fn view(indices: &[Self]) -> SortedIndices<'_> {
        SortedIndices::Narrow(indices)
    }
}

impl SortIndex for u32 {
    const WIDTH: IndexWidth = IndexWidth::U32;

    #[inline]
    fn from_usize(value: usize) -> Self {
        debug_assert!(value <= u32::MAX as usize);
        value as u32
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }

    #[inline]
    fn view(indices: &[Self]) -> SortedIndices<'_> {
        SortedIndices::Wide(indices)
    }
}

mod private {
    pub trait Sealed {}

    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// Sorted permutation borrowed from a [`RadixSorter`](crate::RadixSorter).
///
/// Reading the input through it in order yields non-decreasing keys. The view
/// lives in the sorter's own buffer and is invalidated by the next sort call,
/// which the borrow on the sorter enforces.
#[derive(Clone, Copy, Debug)]
pub enum SortedIndices<'a> {
    Narrow(&'a [u16]),
    Wide(&'a [u32]),
}

impl<'a> SortedIndices<'a> {
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            SortedIndices::Narrow(indices) => indices.len(),
            SortedIndices::Wide(indices) => indices.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn width(&self) -> IndexWidth {
        match self {
            SortedIndices::Narrow(_) => IndexWidth::U16,
            SortedIndices::Wide(_) => IndexWidth::U32,
        }
    }

    #[inline]
    pub fn get(&self, position: usize) -> Option<usize> {
        match self {
            SortedIndices::Narrow(indices) => indices.get(position).map(|&i| i.to_usize()),
            SortedIndices::Wide(indices) => indices.get(position).map(|&i| i.to_usize()),
        }
    }

    /// Index of the element at sorted `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.len()`.
    #[inline]
    pub fn index(&self, position: usize) -> usize {
        match self {
            SortedIndices::Narrow(indices) => indices[position].to_usize(),
            SortedIndices::Wide(indices) => indices[position].to_usize(),
        }
    }

    pub fn iter(&self) -> Iter<'a> {
        Iter {
            indices: *self,
            front: 0,
            back: self.len(),
        }
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl<'a> IntoIterator for SortedIndices<'a> {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq<[usize]> for SortedIndices<'_> {
    fn eq(&self, other: &[usize]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, &b)| a == b)
    }
}

impl<const N: usize> PartialEq<[usize; N]> for SortedIndices<'_> {
    fn eq(&self, other: &[usize; N]) -> bool {
        *self == other[..]
    }
}

#[derive(Clone, Debug)]
pub struct Iter<'a> {
    indices: SortedIndices<'a>,
    front: usize,
    back: usize,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.front == self.back {
            return None;
        }
        let index = self.indices.index(self.front);
        self.front += 1;
        Some(index)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<usize> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.indices.index(self.back))
    }
}

impl ExactSizeIterator for Iter<'_> {}
