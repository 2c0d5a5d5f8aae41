// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// A generator producing one value per call.
///
/// Implementations may keep state between calls (a cursor, a phase accumulator) but must
/// never block and have no error path: every call yields a value. Argument validation
/// belongs in the constructor.
///
/// # Example
///
/// ```
/// use valuestream_core::ValueSource;
///
/// struct Counter(u32);
///
/// impl ValueSource for Counter {
///     type Output = u32;
///
///     fn generate(&mut self) -> u32 {
///         self.0 += 1;
///         self.0
///     }
/// }
///
/// let mut counter = Counter(0);
/// assert_eq!(counter.generate(), 1);
/// assert_eq!(counter.generate(), 2);
/// ```
pub trait ValueSource {
    /// Type of the generated values.
    type Output;

    /// Produce the next value.
    fn generate(&mut self) -> Self::Output;
}

/// A type-erased source, for dispatchers that must hold different strategies behind one type.
pub type BoxedSource<T> = Box<dyn ValueSource<Output = T> + Send>;

impl<S: ValueSource + ?Sized> ValueSource for Box<S> {
    type Output = S::Output;

    fn generate(&mut self) -> Self::Output {
        (**self).generate()
    }
}

impl<S: ValueSource + ?Sized> ValueSource for &mut S {
    type Output = S::Output;

    fn generate(&mut self) -> Self::Output {
        (**self).generate()
    }
}
