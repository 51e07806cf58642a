use radixsort::{IndexWidth, KeyType, RadixKey, RadixSorter, SortedIndices};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MAX_BITS: u32 = 20;
const LOW_RANGE: f64 = -((1 << 30) as f64);
const HIGH_RANGE: f64 = (1 << 30) as f64;

/// `2^1 - 1, 2^2 - 1, .., 2^MAX_BITS - 1` followed by the same counts descending.
fn grow_then_shrink() -> impl Iterator<Item = usize> {
    let up = (1..=MAX_BITS).map(|bits| (1_usize << bits) - 1);
    up.clone().chain(up.rev())
}

fn full_capacity() -> usize {
    (1 << MAX_BITS) - 1
}

fn assert_sorted<K: RadixKey + PartialOrd + std::fmt::Debug>(keys: &[K], order: SortedIndices<'_>) {
    assert_eq!(order.len(), keys.len());
    if keys.len() == 1 {
        assert_eq!(order.index(0), 0);
        return;
    }

    let mut seen = vec![false; keys.len()];
    let mut prev: Option<usize> = None;
    for index in order {
        assert!(!seen[index], "index {index} collides (len={})", keys.len());
        seen[index] = true;
        if let Some(p) = prev {
            assert!(
                keys[p] <= keys[index],
                "{:?} sorted after {:?} (len={})",
                keys[p],
                keys[index],
                keys.len(),
            );
        }
        prev = Some(index);
    }
}

#[test]
fn allocation() {
    let none = RadixSorter::new(KeyType::Int32, 0).unwrap();
    let small = RadixSorter::new(KeyType::Int32, 128).unwrap();
    let large = RadixSorter::new(KeyType::Int32, u16::MAX as usize).unwrap();

    assert_eq!(none.capacity(), 0);
    assert_eq!(small.capacity(), 128);
    assert_eq!(large.capacity(), u16::MAX as usize);
    assert_eq!(large.index_width(), IndexWidth::U16);

    none.deallocate();
    small.deallocate();
    drop(large);
}

#[test]
fn sort_int32() {
    let mut rng = StdRng::seed_from_u64(0x5EED_0032);
    let mut sort_int = RadixSorter::new(KeyType::Int32, full_capacity()).unwrap();
    let mut sort_uint = RadixSorter::new(KeyType::UInt32, full_capacity()).unwrap();

    for num in grow_then_shrink() {
        let arr_int = (0..num).map(|_| rng.random::<u32>() as i32).collect::<Vec<_>>();
        let arr_uint = (0..num).map(|_| rng.random::<u32>()).collect::<Vec<_>>();

        assert_sorted(&arr_int, sort_int.sort(&arr_int).unwrap());
        assert_sorted(&arr_uint, sort_uint.sort(&arr_uint).unwrap());
    }
}

#[test]
fn sort_int64() {
    let mut rng = StdRng::seed_from_u64(0x5EED_0064);
    let mut sort_int = RadixSorter::new(KeyType::Int64, full_capacity()).unwrap();
    let mut sort_uint = RadixSorter::new(KeyType::UInt64, full_capacity()).unwrap();

    for num in grow_then_shrink() {
        let arr_int = (0..num).map(|_| rng.random::<u64>() as i64).collect::<Vec<_>>();
        let arr_uint = (0..num).map(|_| rng.random::<u64>()).collect::<Vec<_>>();

        assert_sorted(&arr_int, sort_int.sort(&arr_int).unwrap());
        assert_sorted(&arr_uint, sort_uint.sort(&arr_uint).unwrap());
    }
}

#[test]
fn sort_real() {
    let mut rng = StdRng::seed_from_u64(0x5EED_0F64);
    let mut sort_32 = RadixSorter::new(KeyType::Float32, full_capacity()).unwrap();
    let mut sort_64 = RadixSorter::new(KeyType::Float64, full_capacity()).unwrap();

    for num in grow_then_shrink() {
        for high in [HIGH_RANGE, -1.0] {
            let arr_32 = (0..num)
                .map(|_| rng.random_range(LOW_RANGE..high) as f32)
                .collect::<Vec<_>>();
            let arr_64 = (0..num)
                .map(|_| rng.random_range(LOW_RANGE..high))
                .collect::<Vec<_>>();

            assert_sorted(&arr_32, sort_32.sort(&arr_32).unwrap());
            assert_sorted(&arr_64, sort_64.sort(&arr_64).unwrap());
        }
    }
}

#[test]
fn sort_example_is_stable() {
    let keys = [5_i32, -3, 0, -3, 9, 1, -100];
    let mut sorter = RadixSorter::new(KeyType::Int32, 7).unwrap();
    let order = sorter.sort(&keys).unwrap().to_vec();

    assert_eq!(order, [6, 1, 3, 2, 5, 0, 4]);
}

#[test]
fn narrow_indices_at_full_width() {
    let mut rng = StdRng::seed_from_u64(0x5EED_FFFF);
    let capacity = u16::MAX as usize + 1;
    let mut sorter = RadixSorter::new(KeyType::UInt32, capacity).unwrap();
    assert_eq!(sorter.index_width(), IndexWidth::U16);

    let keys = (0..capacity).map(|_| rng.random::<u32>()).collect::<Vec<_>>();
    let order = sorter.sort(&keys).unwrap();
    assert_eq!(order.width(), IndexWidth::U16);
    assert_sorted(&keys, order);
}
