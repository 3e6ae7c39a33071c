// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::{
    ack::{Set, Settings},
    packet::number::{PacketNumber, PacketNumberRange},
    time::{Duration, Timestamp},
};
use alloc::vec::Vec;
use core::{iter::Rev, slice};

/// A snapshot of the received packet numbers, ready to be encoded into an
/// acknowledgment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    /// The largest packet number received
    pub largest_acked: PacketNumber,
    /// The start of the lowest received range
    pub largest_in_order: PacketNumber,
    /// Every received range in ascending order, present only when there is a gap
    pub ranges: Option<Vec<PacketNumberRange>>,
    /// When the summary was built
    pub generated_at: Timestamp,
}

impl Summary {
    /// Returns the time elapsed since the summary was built
    #[inline]
    pub fn ack_delay(&self, now: Timestamp) -> Duration {
        now.saturating_duration_since(self.generated_at)
    }

    /// Returns the `Ack Delay` field value for a summary sent at `now`
    #[inline]
    pub fn encoded_ack_delay(&self, now: Timestamp, settings: &Settings) -> u64 {
        settings.encode_ack_delay(self.ack_delay(now))
    }

    /// Iterates over the acknowledged ranges, largest first
    ///
    /// A summary without a gap yields the single range
    /// `[largest_in_order, largest_acked]`.
    #[inline]
    pub fn ack_ranges(&self) -> AckRanges<'_> {
        let inner = match &self.ranges {
            Some(ranges) => AckRangesInner::Explicit(ranges.iter().rev()),
            None => AckRangesInner::Implied(self.implied_range()),
        };
        AckRanges { inner }
    }

    #[inline]
    fn implied_range(&self) -> Option<PacketNumberRange> {
        if self.largest_in_order <= self.largest_acked {
            Some(PacketNumberRange::new(
                self.largest_in_order,
                self.largest_acked,
            ))
        } else {
            None
        }
    }
}

impl Set for Summary {
    fn contains(&self, packet_number: PacketNumber) -> bool {
        match &self.ranges {
            Some(ranges) => {
                let index = ranges.partition_point(|range| range.end() < packet_number);
                ranges
                    .get(index)
                    .is_some_and(|range| range.contains(packet_number))
            }
            None => self
                .implied_range()
                .is_some_and(|range| range.contains(packet_number)),
        }
    }

    fn smallest(&self) -> PacketNumber {
        self.ranges
            .as_ref()
            .and_then(|ranges| ranges.first())
            .map_or(self.largest_in_order, |range| range.start())
    }

    fn largest(&self) -> PacketNumber {
        self.largest_acked
    }
}

/// Descending iterator over the ranges of a [`Summary`]
#[derive(Clone, Debug)]
pub struct AckRanges<'a> {
    inner: AckRangesInner<'a>,
}

#[derive(Clone, Debug)]
enum AckRangesInner<'a> {
    Implied(Option<PacketNumberRange>),
    Explicit(Rev<slice::Iter<'a, PacketNumberRange>>),
}

impl Iterator for AckRanges<'_> {
    type Item = PacketNumberRange;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            AckRangesInner::Implied(range) => range.take(),
            AckRangesInner::Explicit(ranges) => ranges.next().copied(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            AckRangesInner::Implied(range) => {
                let len = range.is_some() as usize;
                (len, Some(len))
            }
            AckRangesInner::Explicit(ranges) => ranges.size_hint(),
        }
    }
}

impl ExactSizeIterator for AckRanges<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn pn(value: u64) -> PacketNumber {
        PacketNumber::new(value)
    }

    fn range(start: u64, end: u64) -> PacketNumberRange {
        PacketNumberRange::new(pn(start), pn(end))
    }

    fn time(micros: u64) -> Timestamp {
        Timestamp::from_duration(Duration::from_micros(micros))
    }

    fn gapped() -> Summary {
        Summary {
            largest_acked: pn(9),
            largest_in_order: pn(1),
            ranges: Some(vec![range(1, 2), range(5, 6), range(9, 9)]),
            generated_at: time(100),
        }
    }

    #[test]
    fn descending_ranges() {
        let summary = gapped();
        assert_eq!(
            summary.ack_ranges().collect::<Vec<_>>(),
            vec![range(9, 9), range(5, 6), range(1, 2)]
        );
        assert_eq!(summary.ack_ranges().len(), 3);
    }

    #[test]
    fn implied_range() {
        let summary = Summary {
            largest_acked: pn(4),
            largest_in_order: pn(2),
            ranges: None,
            generated_at: time(1),
        };
        assert_eq!(summary.ack_ranges().collect::<Vec<_>>(), vec![range(2, 4)]);
        assert!(summary.contains(pn(3)));
        assert!(!summary.contains(pn(1)));
        assert!(!summary.contains(pn(5)));
        assert_eq!(summary.smallest(), pn(2));
        assert_eq!(summary.largest(), pn(4));
    }

    #[test]
    fn set_membership() {
        let summary = gapped();
        for value in [1, 2, 5, 6, 9] {
            assert!(summary.contains(pn(value)), "{value}");
        }
        for value in [0, 3, 4, 7, 8, 10] {
            assert!(!summary.contains(pn(value)), "{value}");
        }
        assert_eq!(summary.smallest(), pn(1));
        assert_eq!(summary.largest(), pn(9));

        assert!(summary.contains_range(range(5, 6)));
        assert!(!summary.contains_range(range(2, 5)));
        assert!(!summary.contains_range(range(9, 10)));
    }

    #[test]
    fn ack_delay() {
        let summary = gapped();
        assert_eq!(summary.ack_delay(time(50)), Duration::ZERO);
        assert_eq!(summary.ack_delay(time(180)), Duration::from_micros(80));

        // 80us with an exponent of 3 is encoded as 10
        assert_eq!(summary.encoded_ack_delay(time(180), &Settings::default()), 10);
    }
}
