// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Building blocks for valuestream.
//!
//! - [`ValueSource`] and its strategies: [`RangeSource`], [`BoolSource`], [`ArraySource`],
//!   [`SineWaveSource`]
//! - [`ValueSubject`]: hot, multi-subscriber channel
//! - [`DeliverySink`]: one entry point that fans a value out to a callback and to subject
//!   subscribers
//! - [`StopToken`]: the signal a tick task watches to know it must end

pub mod array_source;
pub mod bool_source;
pub mod delivery_sink;
pub mod range_source;
pub mod sine_wave_source;
pub mod stop_token;
pub mod subject_error;
pub mod value_source;
pub mod value_subject;

pub use self::array_source::{ArrayMode, ArraySource, StringsSource};
pub use self::bool_source::BoolSource;
pub use self::delivery_sink::DeliverySink;
pub use self::range_source::{DoubleSource, FloatSource, IntSource, RangeSource};
pub use self::sine_wave_source::SineWaveSource;
pub use self::stop_token::{StopToken, Stopped};
pub use self::subject_error::SubjectError;
pub use self::value_source::{BoxedSource, ValueSource};
pub use self::value_subject::{ValueStream, ValueSubject};
pub use valuestream_error::{Result, ValueStreamError};
