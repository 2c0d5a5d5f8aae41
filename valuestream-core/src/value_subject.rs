// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-subscriber channel for generated values.
//!
//! - **Hot**: late subscribers only see values sent after they subscribed.
//! - **Unbounded**: every subscriber has its own unbounded queue; there is no backpressure.
//! - **Shared**: clones refer to the same subscriber list.
//! - **Closable**: closing ends every subscriber stream and rejects further use.
//!
//! ```
//! use futures::StreamExt;
//! use valuestream_core::ValueSubject;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let subject = ValueSubject::<u8>::new();
//! let mut stream = subject.subscribe().unwrap();
//!
//! subject.send(1).unwrap();
//! subject.send(2).unwrap();
//! subject.close();
//!
//! assert_eq!(stream.next().await, Some(1));
//! assert_eq!(stream.next().await, Some(2));
//! assert_eq!(stream.next().await, None);
//! # }
//! ```

use crate::SubjectError;
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::Stream;
use parking_lot::Mutex;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

/// Stream handed to each subscriber.
pub type ValueStream<T> = Pin<Box<dyn Stream<Item = T> + Send + Sync + 'static>>;

struct SubjectState<T> {
    closed: bool,
    senders: Vec<UnboundedSender<T>>,
}

// Sync wrapper so the boxed stream can be shared across threads.
struct SubscriberStream<T> {
    inner: Arc<Mutex<UnboundedReceiver<T>>>,
}

impl<T: Send + 'static> SubscriberStream<T> {
    fn boxed(rx: UnboundedReceiver<T>) -> ValueStream<T> {
        Box::pin(Self {
            inner: Arc::new(Mutex::new(rx)),
        })
    }
}

impl<T> Stream for SubscriberStream<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        let mut guard = self.inner.lock();
        Pin::new(&mut *guard).poll_next(cx)
    }
}

/// Broadcasts every sent value to all current subscribers.
pub struct ValueSubject<T: Clone + Send + 'static> {
    state: Arc<Mutex<SubjectState<T>>>,
}

impl<T: Clone + Send + 'static> ValueSubject<T> {
    /// Creates an open subject with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                closed: false,
                senders: Vec::new(),
            })),
        }
    }

    /// Registers a new subscriber.
    ///
    /// # Errors
    ///
    /// [`SubjectError::Closed`] once [`close`](Self::close) has been called.
    pub fn subscribe(&self) -> Result<ValueStream<T>, SubjectError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SubjectError::Closed);
        }

        let (tx, rx) = mpsc::unbounded();
        state.senders.push(tx);
        Ok(SubscriberStream::boxed(rx))
    }

    /// Sends `value` to every live subscriber and returns how many received it.
    ///
    /// Subscribers whose stream was dropped are pruned here.
    ///
    /// # Errors
    ///
    /// [`SubjectError::Closed`] once [`close`](Self::close) has been called.
    pub fn send(&self, value: T) -> Result<usize, SubjectError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SubjectError::Closed);
        }

        let mut live = Vec::with_capacity(state.senders.len());
        for tx in state.senders.drain(..) {
            if tx.unbounded_send(value.clone()).is_ok() {
                live.push(tx);
            }
        }

        let delivered = live.len();
        state.senders = live;
        Ok(delivered)
    }

    /// Ends every subscriber stream. Idempotent.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        state.senders.clear();
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Number of registered subscribers.
    ///
    /// Dropped subscribers are only noticed on the next `send`, so this may over-count.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().senders.len()
    }
}

impl<T: Clone + Send + 'static> Default for ValueSubject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + 'static> Clone for ValueSubject<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
