use std::fmt;

use crate::RADIX_BITS;

/// Element encodings a sorter can be allocated for.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum KeyType {
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float32,
    Float64,
}

impl KeyType {
    pub const ALL: [KeyType; 6] = [
        KeyType::Int32,
        KeyType::UInt32,
        KeyType::Int64,
        KeyType::UInt64,
        KeyType::Float32,
        KeyType::Float64,
    ];

    #[inline]
    pub const fn size_bytes(self) -> usize {
        match self {
            KeyType::Int32 | KeyType::UInt32 | KeyType::Float32 => 4,
            KeyType::Int64 | KeyType::UInt64 | KeyType::Float64 => 8,
        }
    }

    /// Number of counting-sort passes over a key of this type.
    #[inline]
    pub const fn passes(self) -> usize {
        self.size_bytes() * 8 / RADIX_BITS
    }

    pub const fn name(self) -> &'static str {
        match self {
            KeyType::Int32 => "int32",
            KeyType::UInt32 => "uint32",
            KeyType::Int64 => "int64",
            KeyType::UInt64 => "uint64",
            KeyType::Float32 => "float32",
            KeyType::Float64 => "float64",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scalar the sorter can order by its radix digits.
///
/// Implemented for `i32`, `u32`, `i64`, `u64`, `f32` and `f64` only.
/// [`RadixKey::ordered`] maps a value onto an unsigned integer whose natural
/// order matches the value's numeric order, zero-extended to `u64`.
pub trait RadixKey: Copy + private::Sealed {
    const KEY_TYPE: KeyType;

    fn ordered(self) -> u64;
}

#[inline]
pub const fn ordered_u32(value: u32) -> u32 {
    value
}

#[inline]
pub const fn ordered_u64(value: u64) -> u64 {
    value
}

#[inline]
pub const fn ordered_i32(value: i32) -> u32 {
    (value as u32) ^ (1 << 31)
}

#[inline]
pub const fn ordered_i64(value: i64) -> u64 {
    (value as u64) ^ (1 << 63)
}

#[inline]
pub const fn ordered_f32(value: f32) -> u32 {
    let bits = value.to_bits();
    if bits >> 31 == 1 { !bits } else { bits | (1 << 31) }
}

#[inline]
pub const fn ordered_f64(value: f64) -> u64 {
    let bits = value.to_bits();
    if bits >> 63 == 1 { !bits } else { bits | (1 << 63) }
}

/// Byte `pass` of an ordered key, `0` being the least significant.
#[inline]
pub const fn digit(ordered: u64, pass: usize) -> usize {
    ((ordered >> (pass * RADIX_BITS)) & 0xFF) as usize
}

macro_rules! impl_radix_key {
    ($($t:ty => $key_type:expr, $map:ident;)*) => ($(
        impl RadixKey for $t {
            const KEY_TYPE: KeyType = $key_type;

            #[inline]
            fn ordered(self) -> u64 {
                $map(self) as u64
            }
        }
    )*)
}

impl_radix_key! {
    i32 => KeyType::Int32, ordered_i32;
    u32 => KeyType::UInt32, ordered_u32;
    i64 => KeyType::Int64, ordered_i64;
    u64 => KeyType::UInt64, ordered_u64;
    f32 => KeyType::Float32, ordered_f32;
    f64 => KeyType::Float64, ordered_f64;
}

mod private {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for i64 {}
    impl Sealed for u64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
