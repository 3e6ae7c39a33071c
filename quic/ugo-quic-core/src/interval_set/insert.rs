// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::interval_set::{Interval, IntervalBound};
use alloc::collections::VecDeque;
use core::cmp::{max, min};

/// Inserts `interval` into the sorted, disjoint `intervals`, coalescing any
/// overlapping or adjacent neighbors
///
/// Returns the index of the interval now containing the inserted values.
#[inline]
pub(crate) fn insert<T: IntervalBound>(
    intervals: &mut VecDeque<Interval<T>>,
    mut interval: Interval<T>,
) -> usize {
    // skip everything that ends strictly before the new interval and can't touch it
    //
    // existing: |---|
    // new:             |---|
    let index = intervals.partition_point(|existing| existing.end_exclusive() < interval.start);

    // absorb every following interval that overlaps or touches the new one
    //
    // Before:
    //
    // existing:   |--|  |---|      |--|
    // new:      |---------|
    //
    // After:
    //
    // existing: |-----------|      |--|
    let mut end = index;
    while let Some(existing) = intervals.get(end) {
        if !interval.should_coalesce(existing) {
            break;
        }
        interval.start = min(interval.start, existing.start);
        interval.end = max(interval.end, existing.end);
        end += 1;
    }

    match end - index {
        0 => intervals.insert(index, interval),
        1 => intervals[index] = interval,
        _ => {
            intervals[index] = interval;
            intervals.drain(index + 1..end);
        }
    }

    index
}

/// Drops every value strictly less than `threshold`
///
/// Returns the number of values that were removed.
#[inline]
pub(crate) fn remove_below<T: IntervalBound>(
    intervals: &mut VecDeque<Interval<T>>,
    threshold: T,
) -> usize {
    let mut removed = 0;

    while let Some(front) = intervals.front_mut() {
        // the whole interval is below the threshold
        //
        // interval:  |---|
        // threshold:       ^
        if front.end < threshold {
            removed += front.len();
            intervals.pop_front();
            continue;
        }

        // the threshold splits the interval
        //
        // Before:
        //
        // interval:  |------|
        // threshold:    ^
        //
        // After:
        //
        // interval:     |---|
        if front.start < threshold {
            removed += front.start.steps_between(&threshold);
            front.start = threshold;
        }

        break;
    }

    removed
}
