// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::timer::Timer;
use std::time::Duration;

/// [`Timer`] backed by the tokio clock.
///
/// Uses `tokio::time::Instant` rather than `std::time::Instant` so that a paused test clock
/// (`tokio::time::pause`) drives both sleeping and `now`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    type Sleep = tokio::time::Sleep;

    type Instant = tokio::time::Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }

    fn now(&self) -> Self::Instant {
        tokio::time::Instant::now()
    }

    fn checked_deadline(&self, from: Self::Instant, after: Duration) -> Option<Self::Instant> {
        from.checked_add(after)
    }
}
