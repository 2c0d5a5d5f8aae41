// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::ValueSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Coin flips: `true` and `false` with equal probability on every call.
#[derive(Debug, Clone)]
pub struct BoolSource<R = StdRng> {
    rng: R,
}

impl BoolSource<StdRng> {
    /// Creates a source seeded from the thread-local generator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> BoolSource<R> {
    /// Creates a source drawing from the supplied generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for BoolSource<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ValueSource for BoolSource<R> {
    type Output = bool;

    fn generate(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}
