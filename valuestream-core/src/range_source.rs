// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Uniformly distributed numbers from an inclusive range.

use crate::ValueSource;
use core::fmt;
use core::ops::RangeInclusive;
use rand::distr::uniform::{SampleUniform, Uniform};
use rand::distr::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use valuestream_error::{Result, ValueStreamError};

/// Random `f64` values, `0.0..=1.0` by default.
pub type DoubleSource = RangeSource<f64>;

/// Random `f32` values, `0.0..=1.0` by default.
pub type FloatSource = RangeSource<f32>;

/// Random `i64` values, `0..=100` by default.
pub type IntSource = RangeSource<i64>;

/// Draws an independent, uniformly distributed value from `[low, high]` on every call.
///
/// ```
/// use valuestream_core::{IntSource, ValueSource};
///
/// let mut dice = IntSource::new(1..=6).unwrap();
/// let roll = dice.generate();
/// assert!((1..=6).contains(&roll));
///
/// // low > high is rejected up front
/// assert!(IntSource::new(6..=1).is_err());
/// ```
pub struct RangeSource<T: SampleUniform, R = StdRng> {
    low: T,
    high: T,
    distribution: Uniform<T>,
    rng: R,
}

impl<T> RangeSource<T, StdRng>
where
    T: SampleUniform + PartialOrd + Copy + fmt::Debug,
{
    /// Creates a source over `range`, seeded from the thread-local generator.
    ///
    /// # Errors
    ///
    /// Returns [`ValueStreamError::InvalidArgument`] if the lower bound exceeds the upper
    /// bound, or if either bound is not a finite number. Float ranges are also rejected when
    /// `high - low` itself overflows to infinity, e.g. `f64::MIN..=f64::MAX`.
    pub fn new(range: RangeInclusive<T>) -> Result<Self> {
        Self::with_rng(range, StdRng::from_rng(&mut rand::rng()))
    }
}

impl<T, R> RangeSource<T, R>
where
    T: SampleUniform + PartialOrd + Copy + fmt::Debug,
    R: Rng,
{
    /// Creates a source over `range` drawing from the supplied generator.
    ///
    /// Pass a seeded generator to get a reproducible sequence.
    ///
    /// # Errors
    ///
    /// Same as [`RangeSource::new`].
    pub fn with_rng(range: RangeInclusive<T>, rng: R) -> Result<Self> {
        let (low, high) = range.into_inner();
        // NaN bounds fail this comparison as well
        if !(low <= high) {
            return Err(ValueStreamError::invalid_argument(format!(
                "range lower bound {low:?} exceeds upper bound {high:?}"
            )));
        }

        let distribution = Uniform::new_inclusive(low, high).map_err(|err| {
            ValueStreamError::invalid_argument(format!("range {low:?}..={high:?}: {err}"))
        })?;

        Ok(Self {
            low,
            high,
            distribution,
            rng,
        })
    }

    /// Inclusive lower bound.
    pub fn low(&self) -> T {
        self.low
    }

    /// Inclusive upper bound.
    pub fn high(&self) -> T {
        self.high
    }
}

impl<T, R> ValueSource for RangeSource<T, R>
where
    T: SampleUniform,
    R: Rng,
{
    type Output = T;

    fn generate(&mut self) -> T {
        self.distribution.sample(&mut self.rng)
    }
}

impl<T, R> fmt::Debug for RangeSource<T, R>
where
    T: SampleUniform + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSource")
            .field("low", &self.low)
            .field("high", &self.high)
            .finish_non_exhaustive()
    }
}

macro_rules! default_range {
    ($ty:ty, $low:expr, $high:expr) => {
        impl Default for RangeSource<$ty, StdRng> {
            fn default() -> Self {
                Self::new($low..=$high).expect("default range bounds are ordered and finite")
            }
        }
    };
}

default_range!(f64, 0.0, 1.0);
default_range!(f32, 0.0, 1.0);
default_range!(i64, 0, 100);
