// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single delivery point shared by every dispatcher.
//!
//! A [`DeliverySink`] accepts one value at a time and hands it to zero or more observers:
//!
//! - an optional callback, invoked synchronously on the delivering thread;
//! - any number of stream subscribers obtained from [`DeliverySink::subscribe`].
//!
//! With no observer attached the value is dropped. Nothing is buffered for observers that
//! attach later.
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use valuestream_core::DeliverySink;
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = DeliverySink::new();
//!
//! assert_eq!(sink.deliver(1), 0); // nobody listening yet
//!
//! let seen_clone = seen.clone();
//! sink.set_action(move |value| seen_clone.lock().unwrap().push(value));
//! assert_eq!(sink.deliver(2), 1);
//!
//! assert_eq!(*seen.lock().unwrap(), vec![2]);
//! ```

use crate::{ValueStream, ValueSubject};
use core::fmt;
use parking_lot::Mutex;
use valuestream_error::Result;

type Action<T> = Box<dyn FnMut(T) + Send + 'static>;

/// Fans each delivered value out to a callback and to stream subscribers.
pub struct DeliverySink<T: Clone + Send + 'static> {
    action: Mutex<Option<Action<T>>>,
    subject: ValueSubject<T>,
}

impl<T: Clone + Send + 'static> DeliverySink<T> {
    /// Creates a sink with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            action: Mutex::new(None),
            subject: ValueSubject::new(),
        }
    }

    /// Creates a sink with `action` already attached.
    pub fn with_action<F>(action: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let sink = Self::new();
        sink.set_action(action);
        sink
    }

    /// Attaches `action`, replacing any previous callback.
    ///
    /// The callback runs while the sink holds its callback lock: calling `set_action` or
    /// `clear_action` on the same sink from inside it deadlocks.
    pub fn set_action<F>(&self, action: F)
    where
        F: FnMut(T) + Send + 'static,
    {
        *self.action.lock() = Some(Box::new(action));
    }

    /// Detaches the callback, if any.
    pub fn clear_action(&self) {
        *self.action.lock() = None;
    }

    #[must_use]
    pub fn has_action(&self) -> bool {
        self.action.lock().is_some()
    }

    /// Registers a stream subscriber. Only values delivered from now on reach it.
    ///
    /// # Errors
    ///
    /// [`ValueStreamError::SubjectClosed`](valuestream_error::ValueStreamError::SubjectClosed)
    /// after [`close`](Self::close).
    pub fn subscribe(&self) -> Result<ValueStream<T>> {
        Ok(self.subject.subscribe()?)
    }

    /// Hands `value` to every observer and returns how many were reached.
    ///
    /// Stream subscribers get it first, then the callback. A return of `0` means the
    /// value was dropped.
    pub fn deliver(&self, value: T) -> usize {
        let mut reached = 0;

        if self.subject.subscriber_count() > 0 {
            // a closed subject simply has nobody left to reach
            reached += self.subject.send(value.clone()).unwrap_or(0);
        }

        if let Some(action) = self.action.lock().as_mut() {
            action(value);
            reached += 1;
        }

        reached
    }

    /// Number of attached observers, callback included.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.subject.subscriber_count() + usize::from(self.has_action())
    }

    /// Detaches the callback and ends every subscriber stream. Further deliveries are
    /// dropped and further subscriptions fail.
    pub fn close(&self) {
        self.clear_action();
        self.subject.close();
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.subject.is_closed()
    }
}

impl<T: Clone + Send + 'static> Default for DeliverySink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + 'static> fmt::Debug for DeliverySink<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeliverySink")
            .field("has_action", &self.has_action())
            .field("subscribers", &self.subject.subscriber_count())
            .field("closed", &self.subject.is_closed())
            .finish()
    }
}
