// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! # valuestream
//!
//! Generate values from pluggable sources and deliver them to callbacks and stream
//! subscribers, either on a fixed cadence or on demand.
//!
//! ## Sources
//!
//! | source | output |
//! |---|---|
//! | [`RangeSource`] (`DoubleSource`, `FloatSource`, `IntSource`) | uniform draw from `[low, high]` |
//! | [`BoolSource`] | fair coin |
//! | [`ArraySource`] | list element, random or cyclic ([`ArrayMode`]) |
//! | [`SineWaveSource`] | `sin` of an accumulated phase |
//!
//! Any type implementing [`ValueSource`] works too.
//!
//! ## Dispatchers
//!
//! - [`TimedDispatcher`]: one value per tick of a repeating timer, `start`/`stop`.
//! - [`GatedDispatcher`]: values only when `trigger`ed, synchronously.
//!
//! Both deliver through a [`DeliverySink`]: attach a callback with `on_value` and/or take
//! any number of streams with `subscribe`.
//!
//! ## Quick Start
//!
//! ```
//! use futures::StreamExt;
//! use valuestream::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> valuestream::Result<()> {
//! let mut gate = GatedDispatcher::new(IntSource::new(1..=6)?);
//! let mut rolls = gate.subscribe()?;
//!
//! gate.trigger_count(2);
//!
//! for _ in 0..2 {
//!     let roll = rolls.next().await.unwrap();
//!     assert!((1..=6).contains(&roll));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `runtime-tokio` (default): enables [`TimedDispatcher`] on the tokio scheduler
//! - `tracing` (default): lifecycle events through `tracing`; without it warnings go to stderr

mod gated;
mod logging;
pub mod prelude;
#[cfg(feature = "runtime-tokio")]
mod timed;

pub use gated::GatedDispatcher;
#[cfg(feature = "runtime-tokio")]
pub use timed::TimedDispatcher;

pub use valuestream_core::{
    ArrayMode, ArraySource, BoolSource, BoxedSource, DeliverySink, DoubleSource, FloatSource,
    IntSource, RangeSource, SineWaveSource, StringsSource, ValueSource, ValueStream,
    ValueSubject,
};
pub use valuestream_error::{Result, ValueStreamError};
pub use valuestream_runtime::Timer;
#[cfg(feature = "runtime-tokio")]
pub use valuestream_runtime::TokioTimer;
