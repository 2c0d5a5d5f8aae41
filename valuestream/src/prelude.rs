// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Everything needed to build a source and dispatch it.

pub use crate::GatedDispatcher;
#[cfg(feature = "runtime-tokio")]
pub use crate::TimedDispatcher;
pub use valuestream_core::{
    ArrayMode, ArraySource, BoolSource, DoubleSource, FloatSource, IntSource, RangeSource,
    SineWaveSource, StringsSource, ValueSource,
};
pub use valuestream_error::{Result, ValueStreamError};
