// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use core::fmt;

#[cfg(any(test, feature = "generator"))]
use bolero_generator::*;

/// A fully-decoded packet number sent by the peer
///
/// Packet numbers start at `1`. The value `0` is reserved and can still be
/// represented so that the receive path is able to reject it.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(any(test, feature = "generator"), derive(TypeGenerator))]
pub struct PacketNumber(u64);

impl PacketNumber {
    /// The reserved packet number
    pub const ZERO: Self = Self(0);

    /// Creates a `PacketNumber` from its raw value
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns `true` if the packet number is not the reserved `0` value
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }

    /// Returns the packet number following `self`, if any
    #[inline]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// Returns the packet number preceding `self`, if any
    #[inline]
    pub fn prev(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }

    /// Returns the packet number preceding `self`, saturating at `0`
    #[inline]
    pub fn saturating_prev(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// Computes the distance between `self` and a smaller `rhs`
    ///
    /// Returns `None` if `rhs` is larger than `self`.
    #[inline]
    pub fn checked_distance(self, rhs: Self) -> Option<u64> {
        self.0.checked_sub(rhs.0)
    }
}

impl From<u32> for PacketNumber {
    #[inline]
    fn from(value: u32) -> Self {
        Self(value as u64)
    }
}

impl fmt::Debug for PacketNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("PacketNumber").field(&self.0).finish()
    }
}

impl fmt::Display for PacketNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity() {
        assert!(!PacketNumber::ZERO.is_valid());
        assert!(!PacketNumber::default().is_valid());
        assert!(PacketNumber::new(1).is_valid());
    }

    #[test]
    fn stepping() {
        let pn = PacketNumber::new(7);
        assert_eq!(pn.next(), Some(PacketNumber::new(8)));
        assert_eq!(pn.prev(), Some(PacketNumber::new(6)));
        assert_eq!(PacketNumber::ZERO.prev(), None);
        assert_eq!(PacketNumber::ZERO.saturating_prev(), PacketNumber::ZERO);
        assert_eq!(PacketNumber::new(u64::MAX).next(), None);
    }

    #[test]
    fn distance() {
        let a = PacketNumber::new(3);
        let b = PacketNumber::new(10);
        assert_eq!(b.checked_distance(a), Some(7));
        assert_eq!(a.checked_distance(b), None);
        assert_eq!(a.checked_distance(a), Some(0));
    }

    #[test]
    fn formatting() {
        let pn = PacketNumber::from(42u32);
        assert_eq!(format!("{pn}"), "42");
        assert_eq!(format!("{pn:?}"), "PacketNumber(42)");
    }
}
