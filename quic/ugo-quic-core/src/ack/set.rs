// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::packet::number::{PacketNumber, PacketNumberRange};

/// Packet numbers covered by an acknowledgment
///
/// Implementors may store the packet numbers in any form, as long as every
/// member lies in `smallest()..=largest()`.
pub trait Set {
    fn contains(&self, packet_number: PacketNumber) -> bool;

    fn smallest(&self) -> PacketNumber;

    fn largest(&self) -> PacketNumber;

    /// Returns `true` if every packet number of `range` is in the set
    #[inline]
    fn contains_range(&self, range: PacketNumberRange) -> bool {
        range.start() >= self.smallest()
            && range.end() <= self.largest()
            && range.into_iter().all(|packet_number| self.contains(packet_number))
    }
}

impl Set for PacketNumber {
    #[inline]
    fn contains(&self, packet_number: PacketNumber) -> bool {
        *self == packet_number
    }

    #[inline]
    fn smallest(&self) -> PacketNumber {
        *self
    }

    #[inline]
    fn largest(&self) -> PacketNumber {
        *self
    }
}

impl Set for PacketNumberRange {
    #[inline]
    fn contains(&self, packet_number: PacketNumber) -> bool {
        PacketNumberRange::contains(self, packet_number)
    }

    #[inline]
    fn smallest(&self) -> PacketNumber {
        self.start()
    }

    #[inline]
    fn largest(&self) -> PacketNumber {
        self.end()
    }

    #[inline]
    fn contains_range(&self, range: PacketNumberRange) -> bool {
        self.start() <= range.start() && range.end() <= self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: u64, end: u64) -> PacketNumberRange {
        PacketNumberRange::new(PacketNumber::new(start), PacketNumber::new(end))
    }

    #[test]
    fn packet_number_set() {
        let set = PacketNumber::new(4);
        assert!(set.contains(PacketNumber::new(4)));
        assert!(!set.contains(PacketNumber::new(5)));
        assert!(set.contains_range(range(4, 4)));
        assert!(!set.contains_range(range(4, 5)));
    }

    #[test]
    fn range_set() {
        let set = range(3, 7);
        assert_eq!(set.smallest(), PacketNumber::new(3));
        assert_eq!(set.largest(), PacketNumber::new(7));
        assert!(set.contains_range(range(3, 7)));
        assert!(set.contains_range(range(4, 5)));
        assert!(!set.contains_range(range(2, 5)));
        assert!(!set.contains_range(range(6, 8)));
    }
}
