//! Shared benchmark support: criterion runtime presets and seeded key data.

use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 300;
const LARGE_RUNTIME_MEASURE_MS: u64 = 800;
const LARGE_INPUT_THRESHOLD: usize = 1 << 16;
const RNG_SEED: u64 = 0x5EED_2026;

const REAL_LOW: f64 = -((1 << 30) as f64);
const REAL_HIGH: f64 = (1 << 30) as f64;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
    group.sampling_mode(SamplingMode::Auto);
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
    group.sampling_mode(SamplingMode::Flat);
}

/// Picks the small or large preset from the number of elements per iteration.
pub fn apply_runtime_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size < LARGE_INPUT_THRESHOLD {
        apply_small_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Scalars the benchmarks generate input for.
pub trait RandomKey: Copy {
    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

macro_rules! impl_random_key_uniform {
    ($($t:ty)*) => ($(
        impl RandomKey for $t {
            #[inline]
            fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
                rng.random()
            }
        }
    )*)
}

impl_random_key_uniform! { i32 u32 i64 u64 }

// Reals are drawn from [-2^30, 2^30) so both signs are present.
impl RandomKey for f32 {
    #[inline]
    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.random_range(REAL_LOW..REAL_HIGH) as f32
    }
}

impl RandomKey for f64 {
    #[inline]
    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.random_range(REAL_LOW..REAL_HIGH)
    }
}

pub fn random_keys<K: RandomKey, R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<K> {
    (0..len).map(|_| K::sample(rng)).collect()
}
