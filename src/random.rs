#![cfg(feature = "random")]

use fastrand::Rng as RawRng;
use std::cell::RefCell;
use std::collections::Bound;
use std::ops::RangeBounds;

thread_local! {
    static LOCAL_RNG: RefCell<Rng> = RefCell::new(Rng::new());
}

// - Random API

/// Returns the current global seed
pub fn seed() -> u64 {
    LOCAL_RNG.with(|rng| rng.borrow().seed())
}

/// Set a new seed for the global RNG
pub fn set_seed(seed: u64) {
    LOCAL_RNG.with(|rng| rng.replace(Rng::with_seed(seed)));
}

/// Generate a random value for T
/// booleans will be true|false while floats will be a number between 0 and 1
pub fn generate<T: Generator>() -> T {
    LOCAL_RNG.with(|rng| rng.borrow_mut().generate())
}

/// Generate a random value between the range passed
pub fn range<T: RangeGenerator>(range: impl RangeBounds<T>) -> T {
    LOCAL_RNG.with(|rng| rng.borrow_mut().range(range))
}

/// Sketch style random number using the global RNG, see [`Rng::random`]
pub fn random(max: impl Into<Option<f64>>, min: impl Into<Option<f64>>) -> Result<f64, String> {
    LOCAL_RNG.with(|rng| rng.borrow_mut().random(max, min))
}

/// Sort randomly a slice
pub fn shuffle<T>(slice: &mut [T]) {
    LOCAL_RNG.with(|rng| rng.borrow_mut().shuffle(slice))
}

/// Pick a value randomly
pub fn pick<I>(iter: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
{
    LOCAL_RNG.with(|rng| rng.borrow_mut().pick(iter))
}

// zero and NaN count as not given
#[inline]
fn given(n: Option<f64>) -> Option<f64> {
    n.filter(|n| *n != 0.0 && !n.is_nan())
}

/// Random generator
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Rng {
    raw: RawRng,
}

impl Default for Rng {
    fn default() -> Self {
        Self::new()
    }
}

impl Rng {
    /// New instance
    pub fn new() -> Self {
        Self { raw: RawRng::new() }
    }

    /// New instance using a seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            raw: RawRng::with_seed(seed),
        }
    }

    /// Generate a random value for T
    /// booleans will be true|false while floats will be a number between 0 and 1
    pub fn generate<T: Generator>(&mut self) -> T {
        T::generate(self)
    }

    /// Generate a random value between the range passed
    pub fn range<T: RangeGenerator>(&mut self, range: impl RangeBounds<T>) -> T {
        T::range(self, range)
    }

    /// Random number whose range depends on which arguments are given.
    ///
    /// - no `max`: `[0, 1)`
    /// - only `max`: `[0, max)`
    /// - negative `min`: `[min, max)`
    /// - positive `min`: `[min, max)` redrawing until the value is over `min`,
    ///   fails when `min >= max`
    ///
    /// Zero or NaN arguments are treated as missing.
    pub fn random(
        &mut self,
        max: impl Into<Option<f64>>,
        min: impl Into<Option<f64>>,
    ) -> Result<f64, String> {
        let r = self.raw.f64();
        let Some(mut max) = given(max.into()) else {
            return Ok(r);
        };

        let Some(mut min) = given(min.into()) else {
            return Ok(r * max);
        };

        if min < 0.0 {
            min = min.abs();
            max += min;
            return Ok(r * max - min);
        }

        if min >= max {
            let err = format!("Random min '{min}' must be lower than max '{max}'");
            log::warn!("{err}");
            return Err(err);
        }

        let mut n = r * max;
        while n < min {
            n = self.raw.f64() * max;
        }
        Ok(n)
    }

    /// Returns the current seed
    pub fn seed(&self) -> u64 {
        self.raw.get_seed()
    }

    /// Sort randomly a slice
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        self.raw.shuffle(slice)
    }

    /// Pick a value randomly
    pub fn pick<I>(&mut self, iter: I) -> Option<I::Item>
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator,
    {
        self.raw.choice(iter)
    }
}

pub trait Generator {
    fn generate(rng: &mut Rng) -> Self;
}

macro_rules! impl_generator {
    ($($t:ty, $method:ident),*) => {
        $(
            impl Generator for $t {
                fn generate(rng: &mut Rng) -> Self {
                    rng.raw.$method()
                }
            }
        )*
    };
}

impl_generator!(f32, f32, f64, f64, bool, bool);

pub trait RangeGenerator {
    fn range(rng: &mut Rng, range: impl RangeBounds<Self>) -> Self;
}

macro_rules! impl_range_generator {
    ($($t:ty, $method:ident),*) => {
        $(
            impl RangeGenerator for $t {
                fn range(rng: &mut Rng, range: impl RangeBounds<Self>) -> Self {
                    rng.raw.$method(range)
                }
            }
        )*
    };
}

impl_range_generator!(
    i8, i8, i16, i16, i32, i32, i64, i64, isize, isize, u8, u8, u16, u16, u32, u32, u64, u64,
    usize, usize
);

macro_rules! impl_float_range_generator {
    ($($t:ty),*) => {
        $(
            impl RangeGenerator for $t {
                fn range(rng: &mut Rng, range: impl RangeBounds<Self>) -> Self {
                    let min = match range.start_bound() {
                        Bound::Included(n) | Bound::Excluded(n) => *n,
                        Bound::Unbounded => 0.0,
                    };
                    let max = match range.end_bound() {
                        Bound::Included(n) | Bound::Excluded(n) => *n,
                        Bound::Unbounded => 1.0,
                    };
                    min + rng.generate::<$t>() * (max - min)
                }
            }
        )*
    };
}

impl_float_range_generator!(f32, f64);
