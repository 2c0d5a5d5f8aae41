// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Background task handle that stops its task when dropped.
//!
//! The spawned future receives a [`StopToken`] and is expected to watch it. Dropping the
//! [`TickTask`], or calling [`TickTask::stop`], raises the token; the task ends at its next
//! check. A tick already in progress is allowed to finish.

use core::future::Future;
use valuestream_core::StopToken;
use valuestream_error::{Result, ValueStreamError};

/// Owner handle of a spawned tick loop.
#[derive(Debug)]
pub struct TickTask {
    stop: StopToken,
}

impl TickTask {
    /// Spawns `f(token)` on the current tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ValueStreamError::Scheduling`] when called outside a tokio runtime.
    ///
    /// # Example
    ///
    /// ```
    /// use valuestream_runtime::TickTask;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let task = TickTask::spawn(|stop| async move {
    ///     stop.stopped().await;
    /// })
    /// .unwrap();
    ///
    /// task.stop();
    /// assert!(task.is_stopped());
    /// # }
    /// ```
    #[cfg(feature = "runtime-tokio")]
    pub fn spawn<F, Fut>(f: F) -> Result<Self>
    where
        F: FnOnce(StopToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|err| ValueStreamError::scheduling(err.to_string()))?;

        let stop = StopToken::new();
        handle.spawn(f(stop.clone()));

        Ok(Self { stop })
    }

    /// Without a runtime feature there is nothing to spawn on.
    #[cfg(not(feature = "runtime-tokio"))]
    pub fn spawn<F, Fut>(_f: F) -> Result<Self>
    where
        F: FnOnce(StopToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Err(ValueStreamError::scheduling(
            "no runtime feature enabled for valuestream-runtime",
        ))
    }

    /// Ask the task to end. Does not wait for it.
    pub fn stop(&self) {
        self.stop.stop();
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }
}

impl Drop for TickTask {
    fn drop(&mut self) {
        self.stop.stop();
    }
}
