// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use super::*;
use ::std::time::Instant;

/// A monotonic [`Clock`] backed by [`Instant`]
///
/// Timestamps count the time elapsed since the clock's epoch, so timestamps
/// from different `StdClock`s are not comparable.
#[derive(Clone, Copy, Debug)]
pub struct StdClock {
    epoch: Instant,
}

impl Default for StdClock {
    #[allow(clippy::disallowed_methods)]
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl StdClock {
    pub const fn new(epoch: Instant) -> Self {
        Self { epoch }
    }

    /// Converts an instant into a timestamp of this clock
    ///
    /// Instants before the epoch saturate to the earliest timestamp.
    #[inline]
    pub fn timestamp(&self, instant: Instant) -> Timestamp {
        Timestamp::from_duration(instant.saturating_duration_since(self.epoch))
    }
}

impl Clock for StdClock {
    #[allow(clippy::disallowed_methods)]
    fn get_time(&self) -> Timestamp {
        self.timestamp(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg_attr(miri, ignore)] // time isn't queryable in miri
    fn monotonic() {
        let clock = StdClock::default();
        let before = clock.get_time();
        ::std::thread::sleep(Duration::from_millis(20));
        let after = clock.get_time();
        assert!(after.saturating_duration_since(before) >= Duration::from_millis(20));
    }

    #[test]
    #[cfg_attr(miri, ignore)] // time isn't queryable in miri
    fn before_epoch() {
        let earlier = Instant::now();
        let clock = StdClock::new(earlier + Duration::from_secs(1));
        assert_eq!(
            clock.timestamp(earlier),
            Timestamp::from_duration(Duration::ZERO)
        );
    }
}
