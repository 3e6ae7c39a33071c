// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod insert;
pub mod interval;


use alloc::collections::vec_deque::{self, VecDeque};
use core::{
    fmt,
    ops::{Bound, RangeBounds, RangeInclusive},
};
pub use interval::*;

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum IntervalSetError {
    InvalidInterval,
}

impl fmt::Display for IntervalSetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidInterval => write!(f, "the interval bounds are invalid"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IntervalSetError {}

/// `IntervalSet` is an efficient structure for storing sets of consecutive numbers. Instead
/// of storing an individual entry per value, only the lower and upper bounds (`Interval`) are stored.
///
/// Intervals are kept sorted in ascending order and are never overlapping or adjacent:
/// inserting a value next to an existing interval extends it.
///
/// ## Usage
///
/// ```rust
/// use ugo_quic_core::interval_set::IntervalSet;
///
/// let mut set = IntervalSet::new();
///
/// set.insert_value(1u64).unwrap();
/// set.insert_value(2).unwrap();
/// set.insert_value(3).unwrap();
///
/// // because 1 to 3 are consecutive, only a single interval is stored
/// assert_eq!(set.interval_len(), 1);
///
/// set.insert_value(5).unwrap();
/// assert_eq!(set.interval_len(), 2);
///
/// // filling the gap merges the intervals
/// set.insert_value(4).unwrap();
/// assert_eq!(set.interval_len(), 1);
///
/// // everything below a threshold can be dropped
/// set.remove_below(3);
/// assert_eq!(set.inclusive_ranges().collect::<Vec<_>>(), vec![3..=5]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct IntervalSet<T> {
    intervals: VecDeque<Interval<T>>,
}

impl<T> Default for IntervalSet<T> {
    fn default() -> Self {
        Self {
            intervals: VecDeque::new(),
        }
    }
}

impl<T> IntervalSet<T> {
    /// Creates an empty `IntervalSet`
    #[inline]
    pub fn new() -> IntervalSet<T> {
        Self::default()
    }

    /// Returns the number of intervals in `IntervalSet`.
    #[inline]
    pub fn interval_len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if the `IntervalSet` has no intervals.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

impl<T: IntervalBound> IntervalSet<T> {
    /// Returns the number of values in `IntervalSet`.
    #[inline]
    pub fn count(&self) -> usize {
        self.intervals.iter().map(|interval| interval.len()).sum()
    }

    /// Inserts the supplied `interval` into the `IntervalSet`
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ugo_quic_core::interval_set::IntervalSet;
    /// let mut set = IntervalSet::new();
    /// assert!(set.insert(0u32..4).is_ok());
    /// assert!(set.contains(&3));
    /// assert!(!set.contains(&5));
    /// ```
    #[inline]
    pub fn insert<R: RangeBounds<T>>(&mut self, interval: R) -> Result<(), IntervalSetError> {
        let interval = Interval::from_range_bounds(interval)?;

        if self.intervals.is_empty() {
            self.intervals.push_back(interval);
            return Ok(());
        }

        insert::insert(&mut self.intervals, interval);

        self.check_integrity();

        Ok(())
    }

    /// Inserts a single `value` into the `IntervalSet`
    #[inline]
    pub fn insert_value(&mut self, value: T) -> Result<(), IntervalSetError> {
        self.insert((Bound::Included(value), Bound::Included(value)))
    }

    /// Removes every value strictly less than `threshold`, returning how many
    /// values were dropped
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ugo_quic_core::interval_set::IntervalSet;
    /// let mut set = IntervalSet::new();
    /// assert!(set.insert(0u32..=4).is_ok());
    /// assert!(set.insert(8u32..=9).is_ok());
    /// assert_eq!(set.remove_below(3), 3);
    /// assert_eq!(set.min_value(), Some(3));
    /// assert_eq!(set.remove_below(9), 3);
    /// assert_eq!(set.inclusive_ranges().collect::<Vec<_>>(), vec![9..=9]);
    /// ```
    #[inline]
    pub fn remove_below(&mut self, threshold: T) -> usize {
        let removed = insert::remove_below(&mut self.intervals, threshold);

        self.check_integrity();

        removed
    }

    /// Returns an iterator over all of the values contained in the given `IntervalSet`.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            iter: self.intervals.iter(),
            head: None,
            tail: None,
        }
    }

    /// Returns the smallest value in the given `IntervalSet`. If no items
    /// are present in the set, `None` is returned.
    #[inline]
    pub fn min_value(&self) -> Option<T> {
        let interval = self.intervals.front()?;
        Some(interval.start)
    }

    /// Returns the largest value in the given `IntervalSet`. If no items
    /// are present in the set, `None` is returned.
    #[inline]
    pub fn max_value(&self) -> Option<T> {
        let interval = self.intervals.back()?;
        Some(interval.end)
    }

    /// Returns the lowest `Interval` in the set, if any
    #[inline]
    pub fn min_interval(&self) -> Option<Interval<T>> {
        self.intervals.front().copied()
    }

    /// Returns the highest `Interval` in the set, if any
    #[inline]
    pub fn max_interval(&self) -> Option<Interval<T>> {
        self.intervals.back().copied()
    }

    /// Returns `true` if the set contains a value
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        let index = self
            .intervals
            .partition_point(|interval| interval.end < *value);

        self.intervals
            .get(index)
            .is_some_and(|interval| interval.contains(value))
    }

    /// Returns an iterator of `Interval`s contained in the `IntervalSet`
    #[inline]
    pub fn intervals(&self) -> IntervalIter<'_, T> {
        IntervalIter {
            iter: self.intervals.iter(),
        }
    }

    /// Returns an iterator of `RangeInclusive`s contained in the `IntervalSet`
    #[inline]
    pub fn inclusive_ranges(&self) -> RangeInclusiveIter<'_, T> {
        RangeInclusiveIter {
            iter: self.intervals.iter(),
        }
    }

    /// Internal check for integrity - only used when `cfg(test)` is enabled
    #[inline]
    fn check_integrity(&self) {
        // These checks walk the whole set so they're limited to testing this crate
        if cfg!(test) {
            let mut prev: Option<&Interval<T>> = None;

            for interval in self.intervals.iter() {
                assert!(interval.is_valid(), "interval should be valid");

                if let Some(prev) = prev {
                    assert!(
                        prev.end_exclusive() < interval.start,
                        "the previous end should be less than the next start",
                    );
                }

                prev = Some(interval);
            }
        }
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for IntervalSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.intervals.iter()).finish()
    }
}

/// Iterator over all of the values contained in an `IntervalSet`
pub struct Iter<'a, T> {
    iter: vec_deque::Iter<'a, Interval<T>>,
    head: Option<Interval<T>>,
    tail: Option<Interval<T>>,
}

impl<T: IntervalBound> Iterator for Iter<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(item) = self.head.as_mut().and_then(Iterator::next) {
                return Some(item);
            }

            let item = self.iter.next().cloned().or_else(|| self.tail.take())?;
            self.head = Some(item);
        }
    }
}

impl<T: IntervalBound> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        loop {
            if let Some(item) = self.tail.as_mut().and_then(DoubleEndedIterator::next_back) {
                return Some(item);
            }

            let item = self
                .iter
                .next_back()
                .cloned()
                .or_else(|| self.head.take())?;
            self.tail = Some(item);
        }
    }
}

/// Iterator over the `Interval`s of an `IntervalSet`, in ascending order
#[derive(Clone, Debug)]
pub struct IntervalIter<'a, T> {
    iter: vec_deque::Iter<'a, Interval<T>>,
}

impl<T: IntervalBound> Iterator for IntervalIter<'_, T> {
    type Item = Interval<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T: IntervalBound> DoubleEndedIterator for IntervalIter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().copied()
    }
}

impl<T: IntervalBound> ExactSizeIterator for IntervalIter<'_, T> {}

/// Iterator over the intervals of an `IntervalSet` as `RangeInclusive`s, in ascending order
#[derive(Clone, Debug)]
pub struct RangeInclusiveIter<'a, T> {
    iter: vec_deque::Iter<'a, Interval<T>>,
}

impl<T: IntervalBound> Iterator for RangeInclusiveIter<'_, T> {
    type Item = RangeInclusive<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|interval| (*interval).into())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T: IntervalBound> DoubleEndedIterator for RangeInclusiveIter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|interval| (*interval).into())
    }
}

impl<T: IntervalBound> ExactSizeIterator for RangeInclusiveIter<'_, T> {}
