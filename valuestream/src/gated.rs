// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Request-driven dispatch: values leave the source only when the caller asks.
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use valuestream::{ArrayMode, ArraySource, GatedDispatcher};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let seen_clone = seen.clone();
//!
//! let source = ArraySource::new(vec![0, 1, 2], ArrayMode::Increment).unwrap();
//! let mut gate = GatedDispatcher::with_action(source, move |v| seen_clone.lock().unwrap().push(v));
//!
//! gate.trigger();
//! gate.trigger_count(3);
//!
//! assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2, 0]);
//! ```

use valuestream_core::{DeliverySink, ValueSource, ValueStream};
use valuestream_error::Result;

/// Pulls from its source and delivers, synchronously, only on [`trigger`](Self::trigger).
///
/// There is no timer and no background work. Without an observer, triggered values are
/// still generated (the source advances) and then dropped.
#[derive(Debug)]
pub struct GatedDispatcher<S>
where
    S: ValueSource,
    S::Output: Clone + Send + 'static,
{
    source: S,
    sink: DeliverySink<S::Output>,
}

impl<S> GatedDispatcher<S>
where
    S: ValueSource,
    S::Output: Clone + Send + 'static,
{
    /// Wraps `source` with no observer attached.
    pub fn new(source: S) -> Self {
        Self {
            source,
            sink: DeliverySink::new(),
        }
    }

    /// Wraps `source` and attaches `action` as the callback.
    pub fn with_action<F>(source: S, action: F) -> Self
    where
        F: FnMut(S::Output) + Send + 'static,
    {
        Self {
            source,
            sink: DeliverySink::with_action(action),
        }
    }

    /// Attaches `action`, replacing any previous callback.
    pub fn on_value<F>(&self, action: F)
    where
        F: FnMut(S::Output) + Send + 'static,
    {
        self.sink.set_action(action);
    }

    pub fn clear_action(&self) {
        self.sink.clear_action();
    }

    /// Stream of every value triggered from now on.
    ///
    /// # Errors
    ///
    /// Only fails if the sink was closed, which a live dispatcher never does.
    pub fn subscribe(&self) -> Result<ValueStream<S::Output>> {
        self.sink.subscribe()
    }

    /// Releases one value.
    pub fn trigger(&mut self) {
        self.trigger_count(1);
    }

    /// Releases `count` values, in generation order, before returning. `0` does nothing.
    pub fn trigger_count(&mut self, count: usize) {
        let mut dropped = 0usize;
        for _ in 0..count {
            let value = self.source.generate();
            if self.sink.deliver(value) == 0 {
                dropped += 1;
            }
        }

        if dropped > 0 {
            crate::trace!("gated dispatcher dropped {} of {} values: no observers", dropped, count);
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn sink(&self) -> &DeliverySink<S::Output> {
        &self.sink
    }

    /// Gives the source back, detaching every observer.
    pub fn into_source(self) -> S {
        self.source
    }
}

/// A gated dispatcher is a source in its own right: `generate` triggers one value and
/// also returns it, so a gate can sit inside another dispatcher.
impl<S> ValueSource for GatedDispatcher<S>
where
    S: ValueSource,
    S::Output: Clone + Send + 'static,
{
    type Output = S::Output;

    fn generate(&mut self) -> S::Output {
        let value = self.source.generate();
        self.sink.deliver(value.clone());
        value
    }
}
