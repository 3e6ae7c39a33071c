// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use core::{fmt, num::NonZeroU64, ops, time::Duration};

/// An absolute point in time, relative to the epoch of the [`Clock`](super::Clock)
/// which produced it
///
/// The value is stored as a non-zero count of microseconds, which keeps
/// `Option<Timestamp>` the same size as `Timestamp`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NonZeroU64);

impl Timestamp {
    /// Creates a `Timestamp` from a `Duration` since the clock's epoch
    ///
    /// Values below one microsecond are rounded up so the timestamp is never zero.
    #[inline]
    pub fn from_duration(duration: Duration) -> Self {
        let micros = duration.as_micros();
        let micros = u64::try_from(micros).unwrap_or(u64::MAX);
        match NonZeroU64::new(micros) {
            Some(micros) => Self(micros),
            None => Self(NonZeroU64::MIN),
        }
    }

    /// Returns the `Duration` since the clock's epoch
    #[inline]
    pub const fn as_duration(self) -> Duration {
        Duration::from_micros(self.0.get())
    }

    /// Returns the amount of time elapsed from `earlier` to `self`, or zero if
    /// `earlier` is later than `self`
    #[inline]
    pub fn saturating_duration_since(self, earlier: Self) -> Duration {
        self.checked_duration_since(earlier).unwrap_or_default()
    }

    #[inline]
    pub fn checked_duration_since(self, earlier: Self) -> Option<Duration> {
        let micros = self.0.get().checked_sub(earlier.0.get())?;
        Some(Duration::from_micros(micros))
    }

    #[inline]
    pub fn checked_add(self, duration: Duration) -> Option<Self> {
        let micros = u64::try_from(duration.as_micros()).ok()?;
        let micros = self.0.get().checked_add(micros)?;
        // the sum of a non-zero value and an unsigned value is non-zero
        NonZeroU64::new(micros).map(Self)
    }

    #[inline]
    pub fn checked_sub(self, duration: Duration) -> Option<Self> {
        let micros = u64::try_from(duration.as_micros()).ok()?;
        let micros = self.0.get().checked_sub(micros)?;
        NonZeroU64::new(micros).map(Self)
    }

    /// Returns `true` if `self` is at or before `now`
    #[inline]
    pub fn has_elapsed(self, now: Self) -> bool {
        self <= now
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Timestamp({:?})", self.as_duration())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.as_duration())
    }
}

impl ops::Add<Duration> for Timestamp {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Duration) -> Self {
        self.checked_add(rhs).unwrap_or(Self(NonZeroU64::MAX))
    }
}

impl ops::AddAssign<Duration> for Timestamp {
    #[inline]
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl ops::Sub<Duration> for Timestamp {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Duration) -> Self {
        self.checked_sub(rhs).unwrap_or(Self(NonZeroU64::MIN))
    }
}

impl ops::Sub for Timestamp {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Self) -> Duration {
        self.saturating_duration_since(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rounded_up() {
        let ts = Timestamp::from_duration(Duration::ZERO);
        assert_eq!(ts.as_duration(), Duration::from_micros(1));
        assert_eq!(
            core::mem::size_of::<Option<Timestamp>>(),
            core::mem::size_of::<Timestamp>()
        );
    }

    #[test]
    fn arithmetic() {
        let a = Timestamp::from_duration(Duration::from_millis(10));
        let b = a + Duration::from_millis(5);

        assert_eq!(b - a, Duration::from_millis(5));
        assert_eq!(a - b, Duration::ZERO);
        assert_eq!(a.checked_duration_since(b), None);
        assert_eq!(b - Duration::from_millis(5), a);
        assert!(a.has_elapsed(b));
        assert!(!b.has_elapsed(a));

        // subtraction saturates at the smallest representable timestamp
        let min = a - Duration::from_secs(1);
        assert_eq!(min.as_duration(), Duration::from_micros(1));
        assert_eq!(a.checked_sub(Duration::from_secs(1)), None);
    }

    #[test]
    fn saturating_add() {
        let a = Timestamp::from_duration(Duration::from_secs(1));
        let max = a + Duration::MAX;
        assert_eq!(max.as_duration(), Duration::from_micros(u64::MAX));
    }
}
