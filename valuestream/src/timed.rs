// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Periodic dispatch: one value per timer tick until stopped.
//!
//! The tick loop runs as a task on the host scheduler and only holds shared handles to the
//! source and the sink. The dispatcher owns the [`TickTask`]; stopping, restarting or
//! dropping the dispatcher stops the loop before its next tick.
//!
//! # Example
//!
//! ```
//! use futures::StreamExt;
//! use std::time::Duration;
//! use valuestream::{ArrayMode, ArraySource, TimedDispatcher};
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() -> valuestream::Result<()> {
//! let source = ArraySource::new(vec!["tick", "tock"], ArrayMode::Increment)?;
//! let mut timed = TimedDispatcher::new(source);
//! let mut stream = timed.subscribe()?;
//!
//! timed.start(Duration::from_millis(10))?;
//! assert_eq!(stream.next().await, Some("tick"));
//! assert_eq!(stream.next().await, Some("tock"));
//!
//! timed.stop();
//! # Ok(())
//! # }
//! ```

use core::pin::pin;
use core::time::Duration;
use futures::future::{select, Either};
use parking_lot::Mutex;
use std::sync::Arc;
use valuestream_core::{DeliverySink, StopToken, ValueSource, ValueStream};
use valuestream_error::{Result, ValueStreamError};
use valuestream_runtime::{TickTask, Timer, TokioTimer};

/// Delivers one freshly generated value per `interval` while running.
///
/// Lifecycle: idle after construction, running after [`start`](Self::start), idle again
/// after [`stop`](Self::stop). Starting a running dispatcher replaces its timer.
pub struct TimedDispatcher<S, TM = TokioTimer>
where
    S: ValueSource,
    S::Output: Clone + Send + 'static,
    TM: Timer,
{
    source: Arc<Mutex<S>>,
    sink: Arc<DeliverySink<S::Output>>,
    timer: TM,
    task: Option<TickTask>,
    interval: Option<Duration>,
}

impl<S> TimedDispatcher<S, TokioTimer>
where
    S: ValueSource + Send + 'static,
    S::Output: Clone + Send + 'static,
{
    /// Wraps `source`, driven by the tokio clock. Idle until started.
    pub fn new(source: S) -> Self {
        Self::with_timer(source, TokioTimer)
    }

    /// Wraps `source` and attaches `action` as the callback.
    pub fn with_action<F>(source: S, action: F) -> Self
    where
        F: FnMut(S::Output) + Send + 'static,
    {
        let dispatcher = Self::new(source);
        dispatcher.on_value(action);
        dispatcher
    }
}

impl<S, TM> TimedDispatcher<S, TM>
where
    S: ValueSource + Send + 'static,
    S::Output: Clone + Send + 'static,
    TM: Timer,
{
    /// Wraps `source`, driven by `timer`.
    pub fn with_timer(source: S, timer: TM) -> Self {
        Self {
            source: Arc::new(Mutex::new(source)),
            sink: Arc::new(DeliverySink::new()),
            timer,
            task: None,
            interval: None,
        }
    }

    /// Attaches `action`, replacing any previous callback. Takes effect from the next tick.
    ///
    /// The callback runs on the tick task.
    pub fn on_value<F>(&self, action: F)
    where
        F: FnMut(S::Output) + Send + 'static,
    {
        self.sink.set_action(action);
    }

    pub fn clear_action(&self) {
        self.sink.clear_action();
    }

    /// Stream of every value ticked from now on. Ends when the dispatcher is dropped.
    ///
    /// # Errors
    ///
    /// Only fails if the sink was closed, which a live dispatcher never does.
    pub fn subscribe(&self) -> Result<ValueStream<S::Output>> {
        self.sink.subscribe()
    }

    /// Arms a repeating timer with period `interval`, replacing any running one.
    ///
    /// # Errors
    ///
    /// - [`ValueStreamError::InvalidArgument`] for a zero interval, or one so long that the
    ///   first deadline cannot be represented; a running timer is left untouched in that case.
    /// - [`ValueStreamError::Scheduling`] when there is no runtime to spawn the tick task on;
    ///   the dispatcher is idle afterwards.
    pub fn start(&mut self, interval: Duration) -> Result<()> {
        if interval.is_zero() {
            return Err(ValueStreamError::invalid_argument(
                "timer interval must be positive",
            ));
        }
        if self.timer.checked_deadline(self.timer.now(), interval).is_none() {
            return Err(ValueStreamError::invalid_argument(format!(
                "timer interval {interval:?} is beyond the clock's range"
            )));
        }

        let restarting = self.task.is_some();
        self.halt();

        let source = Arc::clone(&self.source);
        let sink = Arc::clone(&self.sink);
        let timer = self.timer.clone();

        let task = match TickTask::spawn(move |stop| run_ticks(source, sink, timer, interval, stop)) {
            Ok(task) => task,
            Err(err) => {
                crate::warn!("timed dispatcher could not arm its timer: {}", err);
                return Err(err);
            }
        };

        self.task = Some(task);
        self.interval = Some(interval);

        if restarting {
            crate::debug!("timed dispatcher restarted with interval {:?}", interval);
        } else {
            crate::debug!("timed dispatcher started with interval {:?}", interval);
        }
        Ok(())
    }

    /// [`start`](Self::start) with the interval given in seconds.
    ///
    /// # Errors
    ///
    /// [`ValueStreamError::InvalidArgument`] unless `seconds` is finite, positive and at
    /// least one nanosecond. Otherwise as [`start`](Self::start).
    pub fn start_secs(&mut self, seconds: f64) -> Result<()> {
        if !(seconds.is_finite() && seconds > 0.0) {
            return Err(ValueStreamError::invalid_argument(format!(
                "timer interval must be a positive number of seconds, got {seconds}"
            )));
        }

        let interval = Duration::try_from_secs_f64(seconds).map_err(|err| {
            ValueStreamError::invalid_argument(format!("timer interval {seconds}s: {err}"))
        })?;
        self.start(interval)
    }

    /// Cancels the timer. No tick is delivered after this returns, except one that was
    /// already being delivered. Calling it while idle does nothing.
    pub fn stop(&mut self) {
        if self.halt() {
            crate::debug!("timed dispatcher stopped");
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Period of the running timer, `None` while idle.
    #[must_use]
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    pub fn sink(&self) -> &DeliverySink<S::Output> {
        &self.sink
    }

    // true if a timer was running
    fn halt(&mut self) -> bool {
        self.interval = None;
        match self.task.take() {
            Some(task) => {
                task.stop();
                true
            }
            None => false,
        }
    }
}

impl<S, TM> Drop for TimedDispatcher<S, TM>
where
    S: ValueSource,
    S::Output: Clone + Send + 'static,
    TM: Timer,
{
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.stop();
        }
        self.sink.close();
    }
}

async fn run_ticks<S, TM>(
    source: Arc<Mutex<S>>,
    sink: Arc<DeliverySink<S::Output>>,
    timer: TM,
    interval: Duration,
    stop: StopToken,
) where
    S: ValueSource,
    S::Output: Clone + Send + 'static,
    TM: Timer,
{
    let Some(mut deadline) = timer.checked_deadline(timer.now(), interval) else {
        crate::warn!("timed dispatcher interval {:?} overflows the clock", interval);
        return;
    };

    loop {
        let stopped = pin!(stop.stopped());
        let sleep = pin!(timer.sleep_future(timer.until(deadline)));
        if let Either::Left(_) = select(stopped, sleep).await {
            break;
        }
        if stop.is_stopped() {
            break;
        }

        let value = source.lock().generate();
        if sink.deliver(value) == 0 {
            crate::trace!("timed tick dropped: no observers");
        }

        // late ticks are not replayed: the next one is one full interval away
        let now = timer.now();
        deadline = match timer.checked_deadline(deadline, interval) {
            Some(next) if next > now => next,
            _ => match timer.checked_deadline(now, interval) {
                Some(next) => next,
                None => {
                    crate::warn!("timed dispatcher interval {:?} overflows the clock", interval);
                    break;
                }
            },
        };
    }
}
