// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Values picked from a fixed, non-empty list.
//!
//! Two traversal modes are available:
//!
//! - [`ArrayMode::Random`]: each call picks an independent, uniformly random element.
//! - [`ArrayMode::Increment`]: calls walk the list in order and wrap to the first element
//!   after the last one. The cursor cannot be rewound; build a new source to start over.
//!
//! ```
//! use valuestream_core::{ArrayMode, ArraySource, ValueSource};
//!
//! let mut source = ArraySource::new(vec!['a', 'b', 'c'], ArrayMode::Increment).unwrap();
//! let drawn: String = (0..5).map(|_| source.generate()).collect();
//! assert_eq!(drawn, "abcab");
//! ```

use crate::ValueSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use valuestream_error::{Result, ValueStreamError};

/// How an [`ArraySource`] walks its values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ArrayMode {
    /// Uniformly random element on every call.
    #[default]
    Random,
    /// Elements in order, wrapping around at the end.
    Increment,
}

/// Random or cyclic picks from a string list.
pub type StringsSource = ArraySource<String>;

/// Yields elements of a fixed list, either at random or cyclically.
#[derive(Debug, Clone)]
pub struct ArraySource<T, R = StdRng> {
    values: Vec<T>,
    mode: ArrayMode,
    // always < values.len()
    position: usize,
    rng: R,
}

impl<T: Clone> ArraySource<T, StdRng> {
    /// Creates a source over `values`, seeded from the thread-local generator.
    ///
    /// # Errors
    ///
    /// Returns [`ValueStreamError::InvalidArgument`] if `values` is empty.
    pub fn new(values: impl Into<Vec<T>>, mode: ArrayMode) -> Result<Self> {
        Self::with_rng(values, mode, StdRng::from_rng(&mut rand::rng()))
    }
}

impl<T: Clone, R: Rng> ArraySource<T, R> {
    /// Creates a source over `values` drawing random indices from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueStreamError::InvalidArgument`] if `values` is empty.
    pub fn with_rng(values: impl Into<Vec<T>>, mode: ArrayMode, rng: R) -> Result<Self> {
        let values = values.into();
        if values.is_empty() {
            return Err(ValueStreamError::invalid_argument(
                "array source needs at least one value",
            ));
        }

        Ok(Self {
            values,
            mode,
            position: 0,
            rng,
        })
    }

    /// The traversal mode chosen at construction.
    pub fn mode(&self) -> ArrayMode {
        self.mode
    }

    /// Index the next `Increment`-mode call will return. Stays at 0 in `Random` mode.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of values; never zero.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; empty lists are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl<T: Clone, R: Rng> ValueSource for ArraySource<T, R> {
    type Output = T;

    fn generate(&mut self) -> T {
        match self.mode {
            ArrayMode::Random => {
                let index = self.rng.random_range(0..self.values.len());
                self.values[index].clone()
            }
            ArrayMode::Increment => {
                let index = self.position;
                self.position = (index + 1) % self.values.len();
                self.values[index].clone()
            }
        }
    }
}
