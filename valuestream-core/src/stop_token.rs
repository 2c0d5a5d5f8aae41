// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared stop signal for tick tasks.
//!
//! A dispatcher keeps one handle, the task it spawned keeps a clone. `stop()` on either
//! flips the flag for both and wakes anything awaiting [`StopToken::stopped`].

use core::future::Future;
use core::pin::Pin;
use core::sync::atomic::{AtomicBool, Ordering};
use core::task::{ready, Context, Poll};
use event_listener::{Event, EventListener};
use std::sync::Arc;

/// Clonable, one-way stop flag with async notification.
///
/// ```
/// use valuestream_core::StopToken;
///
/// let token = StopToken::new();
/// let task_side = token.clone();
///
/// assert!(!task_side.is_stopped());
/// token.stop();
/// assert!(task_side.is_stopped());
/// ```
#[derive(Clone, Debug)]
pub struct StopToken {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    stopped: AtomicBool,
    event: Event,
}

impl StopToken {
    /// Create a token that has not been stopped yet.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                stopped: AtomicBool::new(false),
                event: Event::new(),
            }),
        }
    }

    /// Raise the flag and wake every waiter. Calling it again has no further effect.
    pub fn stop(&self) {
        // flag must be visible before waiters wake up and re-check it
        self.inner.stopped.store(true, Ordering::Release);
        self.inner.event.notify(usize::MAX);
    }

    /// Non-blocking check.
    pub fn is_stopped(&self) -> bool {
        self.inner.stopped.load(Ordering::Acquire)
    }

    /// Resolves once [`stop`](Self::stop) has been called on any clone.
    /// Resolves immediately if that already happened.
    pub fn stopped(&self) -> Stopped<'_> {
        Stopped {
            token: self,
            listener: None,
        }
    }
}

impl Default for StopToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Future returned by [`StopToken::stopped`].
#[must_use = "futures do nothing unless awaited"]
pub struct Stopped<'a> {
    token: &'a StopToken,
    listener: Option<EventListener>,
}

impl Future for Stopped<'_> {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let this = &mut *self;
        loop {
            if this.token.is_stopped() {
                return Poll::Ready(());
            }

            match this.listener.as_mut() {
                Some(listener) => {
                    ready!(Pin::new(listener).poll(cx));
                    this.listener = None;
                }
                // registered before the next flag check, so a concurrent stop() is not missed
                None => this.listener = Some(this.token.inner.event.listen()),
            }
        }
    }
}
