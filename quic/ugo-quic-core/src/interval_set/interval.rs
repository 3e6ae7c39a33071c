// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use super::IntervalSetError;
use crate::packet::number::{PacketNumber, PacketNumberRange};
use core::{
    fmt,
    ops::{Bound, RangeBounds, RangeInclusive},
};

/// A non-empty, inclusive interval of values
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval<T> {
    pub(super) start: T,
    pub(super) end: T,
}

impl<T: IntervalBound> Interval<T> {
    pub fn from_range_bounds<B: RangeBounds<T>>(bounds: B) -> Result<Self, IntervalSetError> {
        let start = match bounds.start_bound() {
            Bound::Included(start) => *start,
            Bound::Excluded(start) => start.step_up().ok_or(IntervalSetError::InvalidInterval)?,
            Bound::Unbounded => return Err(IntervalSetError::InvalidInterval),
        };

        let end = match bounds.end_bound() {
            Bound::Included(end) => *end,
            Bound::Excluded(end) => end.step_down().ok_or(IntervalSetError::InvalidInterval)?,
            Bound::Unbounded => return Err(IntervalSetError::InvalidInterval),
        };

        let interval = Self { start, end };

        if interval.is_valid() {
            Ok(interval)
        } else {
            Err(IntervalSetError::InvalidInterval)
        }
    }

    #[inline]
    pub fn end_exclusive(&self) -> T {
        self.end.step_up_saturating()
    }

    #[inline]
    pub fn len(&self) -> usize {
        // Interval always has at least 1
        1 + self.start.steps_between(&self.end)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.end >= self.start
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.start <= *value && *value <= self.end
    }

    /// Returns `true` if `other` overlaps or directly touches `self`
    #[inline]
    pub(super) fn should_coalesce(&self, other: &Self) -> bool {
        self.start <= other.end_exclusive() && other.start <= self.end_exclusive()
    }
}

impl<T> RangeBounds<T> for Interval<T> {
    #[inline]
    fn start_bound(&self) -> Bound<&T> {
        Bound::Included(&self.start)
    }

    #[inline]
    fn end_bound(&self) -> Bound<&T> {
        Bound::Included(&self.end)
    }
}

impl<T: IntervalBound> From<Interval<T>> for RangeInclusive<T> {
    #[inline]
    fn from(interval: Interval<T>) -> Self {
        interval.start..=interval.end
    }
}

impl From<Interval<PacketNumber>> for PacketNumberRange {
    #[inline]
    fn from(interval: Interval<PacketNumber>) -> Self {
        PacketNumberRange::new(interval.start, interval.end)
    }
}

impl<T: IntervalBound> Iterator for Interval<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let current = self.start;
        if current > self.end {
            return None;
        }
        if let Some(next) = current.step_up() {
            self.start = next;
        } else {
            self.end = current.step_down()?;
        }
        Some(current)
    }
}

impl<T: IntervalBound> DoubleEndedIterator for Interval<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        let current = self.end;
        if current < self.start {
            return None;
        }
        if let Some(next) = current.step_down() {
            self.end = next;
        } else {
            self.start = current.step_up()?;
        }
        Some(current)
    }
}

impl<T: fmt::Debug> fmt::Debug for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&((&self.start)..=(&self.end)), f)
    }
}

/// A value that can bound an [`Interval`]
pub trait IntervalBound: Copy + Ord + Sized {
    fn step_up(self) -> Option<Self>;
    fn step_down(self) -> Option<Self>;
    fn steps_between(&self, upper: &Self) -> usize;

    fn step_up_saturating(self) -> Self {
        self.step_up().unwrap_or(self)
    }
}

macro_rules! integer_bounds {
    ($($type:ident),* $(,)?) => {
        $(
            impl IntervalBound for $type {
                #[inline]
                fn step_up(self) -> Option<Self> {
                    self.checked_add(1)
                }

                #[inline]
                fn step_down(self) -> Option<Self> {
                    self.checked_sub(1)
                }

                #[inline]
                fn steps_between(&self, upper: &Self) -> usize {
                    upper.abs_diff(*self).try_into().unwrap_or(usize::MAX)
                }
            }
        )*
    };
}

integer_bounds!(u8, i8, u16, i16, u32, i32, u64, i64, usize, isize);

impl IntervalBound for PacketNumber {
    #[inline]
    fn step_up(self) -> Option<Self> {
        self.next()
    }

    #[inline]
    fn step_down(self) -> Option<Self> {
        self.prev()
    }

    #[inline]
    fn steps_between(&self, upper: &Self) -> usize {
        self.as_u64().steps_between(&upper.as_u64())
    }
}
