//! Multiplication Workload
//!
//! Fills a large scratch buffer with random values of one numeric type, then
//! runs fixed-count timed rounds: each round multiplies every buffer element
//! by a per-round scalar drawn from the buffer and records one lap. The fill
//! pass doubles as the warm-up; buffers are owned by the caller and dropped
//! at group end.
//!
//! The fill RNG is seeded from a named constant so runs are reproducible.

use mulbench_core::{Clock, Stopwatch, StopwatchError};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

/// Elements in each scratch buffer.
pub const BUFFER_LEN: usize = 1_000_000;

/// Timed rounds per type group; equals the stopwatch slot count.
pub const ROUNDS: usize = mulbench_core::DEFAULT_SLOTS;

/// Seed for every group's fill RNG. Each group reseeds from scratch, the way
/// the original tool constructed a fresh engine per type.
pub const FILL_SEED: u64 = 0x6d75_6c62_656e_6368;

/// Random 32-bit integers spanning [-2_147_483_647, 2_147_483_646].
pub fn fill_i32(len: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(FILL_SEED);
    let dist = Uniform::new_inclusive(-2_147_483_647i32, 2_147_483_646);
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Random single-precision floats in [0, 10000).
pub fn fill_f32(len: usize) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(FILL_SEED);
    let dist = Uniform::new(0.0f32, 10_000.0);
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Random double-precision floats in [0, 10000).
pub fn fill_f64(len: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(FILL_SEED);
    let dist = Uniform::new(0.0f64, 10_000.0);
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Random extended-precision values in [0, 10000).
pub fn fill_wide(len: usize) -> Vec<Wide> {
    fill_f64(len).into_iter().map(Wide::from_f64).collect()
}

/// Extended-precision float: an unevaluated sum of two `f64` (double-double,
/// roughly 106 mantissa bits). Stands in for C's `long double`, which Rust
/// does not expose.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Wide {
    hi: f64,
    lo: f64,
}

impl Wide {
    /// Widen an `f64` exactly.
    pub fn from_f64(value: f64) -> Self {
        Self { hi: value, lo: 0.0 }
    }

    /// Collapse back to the nearest `f64`.
    pub fn to_f64(self) -> f64 {
        self.hi + self.lo
    }

    /// Full-precision product. The exact error of the head product is
    /// recovered with an FMA, then the result is renormalized so `hi` holds
    /// the rounded value and `lo` the residual.
    pub fn mul(self, rhs: Self) -> Self {
        let head = self.hi * rhs.hi;
        let err = self.hi.mul_add(rhs.hi, -head);
        let tail = self.hi * rhs.lo + self.lo * rhs.hi + err;
        let hi = head + tail;
        let lo = tail - (hi - head);
        Self { hi, lo }
    }
}

/// Run the timed rounds for one prepared buffer.
///
/// Each round takes its scalar from the buffer, multiplies every element by
/// it under `black_box` (the products are otherwise dead code), and records
/// one lap. The round count is the stopwatch capacity, so a full run fills
/// every slot exactly once.
pub fn measure<T, C, F>(
    watch: &mut Stopwatch<C>,
    values: &[T],
    mul: F,
) -> Result<(), StopwatchError>
where
    T: Copy,
    C: Clock,
    F: Fn(T, T) -> T,
{
    if values.is_empty() {
        return Ok(());
    }

    watch.start();
    for round in 0..watch.capacity() {
        let base = values[round % values.len()];
        for &value in values {
            black_box(mul(black_box(value), base));
        }
        watch.lap()?;
    }
    watch.stop()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_is_deterministic_per_seed() {
        assert_eq!(fill_i32(64), fill_i32(64));
        assert_eq!(fill_f64(64), fill_f64(64));
    }

    #[test]
    fn fill_respects_value_ranges() {
        assert!(fill_f32(256).iter().all(|&v| (0.0..10_000.0).contains(&v)));
        assert!(fill_f64(256).iter().all(|&v| (0.0..10_000.0).contains(&v)));
    }

    #[test]
    fn measure_fills_every_slot_once() {
        let mut watch = Stopwatch::new(8);
        let values: Vec<i32> = (1..=16).collect();

        measure(&mut watch, &values, |a, b| a.wrapping_mul(b)).unwrap();

        assert_eq!(watch.laps(), watch.capacity());
        assert!(watch.total() >= 0);
    }

    #[test]
    fn measure_on_empty_buffer_records_nothing() {
        let mut watch = Stopwatch::new(4);
        measure(&mut watch, &[] as &[f64], |a, b| a * b).unwrap();
        assert_eq!(watch.laps(), 0);
    }

    #[test]
    fn wide_product_matches_f64_when_exact() {
        let product = Wide::from_f64(3.0).mul(Wide::from_f64(4.0));
        assert_eq!(product.to_f64(), 12.0);
        assert_eq!(product.lo, 0.0);
    }

    #[test]
    fn wide_product_keeps_the_low_order_term() {
        // (2^27 + 1)^2 = 2^54 + 2^28 + 1; the trailing 1 does not fit in an
        // f64 mantissa and must land in the tail.
        let x = Wide::from_f64(134_217_729.0);
        let square = x.mul(x);

        assert_eq!(square.hi, 134_217_729.0f64 * 134_217_729.0);
        assert_eq!(square.lo, 1.0);
    }
}
