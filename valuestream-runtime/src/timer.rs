// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::future::Future;
use core::ops::Sub;
use core::time::Duration;

/// Clock and sleep primitive a timed dispatcher is driven by.
///
/// Implementations must report a monotonic `now` and a `sleep_future` that completes no
/// earlier than the requested duration.
pub trait Timer: Clone + Send + Sync + Debug + 'static {
    type Sleep: Future<Output = ()> + Send;

    type Instant: Copy
        + Debug
        + Ord
        + Send
        + Sync
        + Sub<Self::Instant, Output = Duration>;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep;

    fn now(&self) -> Self::Instant;

    /// `from + after`, or `None` if that instant cannot be represented by this clock.
    fn checked_deadline(&self, from: Self::Instant, after: Duration) -> Option<Self::Instant>;

    /// Time left until `deadline`, zero if it already passed.
    fn until(&self, deadline: Self::Instant) -> Duration {
        let now = self.now();
        if deadline > now {
            deadline - now
        } else {
            Duration::ZERO
        }
    }
}
