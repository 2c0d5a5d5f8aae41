// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::ValueSource;

/// A deterministic sine wave sampled at a fixed phase step.
///
/// The k-th call returns `sin(k * increment)`. The phase grows without bound;
/// `sin` takes care of periodicity.
///
/// ```
/// use valuestream_core::{SineWaveSource, ValueSource};
///
/// let mut wave = SineWaveSource::new(std::f64::consts::FRAC_PI_2);
/// assert!((wave.generate() - 1.0).abs() < 1e-12);
/// assert!(wave.generate().abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SineWaveSource {
    phase: f64,
    increment: f64,
}

impl SineWaveSource {
    /// Step used by [`Default`].
    pub const DEFAULT_INCREMENT: f64 = 0.1;

    /// Creates a wave starting at phase 0 that advances by `increment` per call.
    #[must_use]
    pub const fn new(increment: f64) -> Self {
        Self {
            phase: 0.0,
            increment,
        }
    }

    /// Current phase, i.e. the argument of the last returned sine.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// Changes the step for subsequent calls. The accumulated phase is kept, so the
    /// wave continues from where it is.
    pub fn set_increment(&mut self, increment: f64) {
        self.increment = increment;
    }
}

impl Default for SineWaveSource {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INCREMENT)
    }
}

impl ValueSource for SineWaveSource {
    type Output = f64;

    fn generate(&mut self) -> f64 {
        self.phase += self.increment;
        self.phase.sin()
    }
}
