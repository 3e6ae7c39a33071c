// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::{
    interval_set::{Interval, IntervalIter, IntervalSet},
    packet::number::{PacketNumber, PacketNumberRange},
};

/// The packet numbers received from the peer, stored as contiguous ranges
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History(IntervalSet<PacketNumber>);

/// Ascending iterator over the ranges in a [`History`]
pub type Ranges<'a> = core::iter::Map<
    IntervalIter<'a, PacketNumber>,
    fn(Interval<PacketNumber>) -> PacketNumberRange,
>;

impl History {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a packet number as received, merging it into any adjacent ranges
    #[inline]
    pub fn insert(&mut self, packet_number: PacketNumber) {
        let result = self.0.insert_value(packet_number);
        debug_assert!(result.is_ok(), "a single value is always a valid interval");
    }

    /// Drops every packet number strictly below `threshold`, returning how many
    /// packet numbers were dropped
    #[inline]
    pub fn truncate_below(&mut self, threshold: PacketNumber) -> usize {
        self.0.remove_below(threshold)
    }

    /// Returns the received ranges in ascending order
    #[inline]
    pub fn ranges(&self) -> Ranges<'_> {
        self.0
            .intervals()
            .map(<PacketNumberRange as From<Interval<PacketNumber>>>::from as fn(_) -> _)
    }

    /// Returns the range containing the smallest received packet number
    #[inline]
    pub fn lowest_range(&self) -> Option<PacketNumberRange> {
        self.0.min_interval().map(PacketNumberRange::from)
    }

    /// Returns the range containing the largest received packet number
    #[inline]
    pub fn highest_range(&self) -> Option<PacketNumberRange> {
        self.0.max_interval().map(PacketNumberRange::from)
    }

    #[inline]
    pub fn contains(&self, packet_number: PacketNumber) -> bool {
        self.0.contains(&packet_number)
    }

    /// Returns the number of disjoint ranges
    #[inline]
    pub fn len(&self) -> usize {
        self.0.interval_len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
