// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::{packet::number::PacketNumber, time::Timestamp};
use alloc::collections::BTreeMap;
use core::fmt;

/// Receive timestamps for packet numbers above the in-order prefix
///
/// The map is used for duplicate detection of out-of-order packets. It is
/// capped at `limit` entries plus a single overflow slot: the insert which
/// takes the overflow slot is stored and reported as an error, and any
/// further new packet numbers are refused.
#[derive(Clone, Debug)]
pub struct ReceivedTimes {
    entries: BTreeMap<PacketNumber, Timestamp>,
    limit: usize,
    floor: PacketNumber,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LimitExceeded {
    pub limit: usize,
}

impl fmt::Display for LimitExceeded {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "more than {} received times are being tracked", self.limit)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LimitExceeded {}

impl ReceivedTimes {
    #[inline]
    pub fn new(limit: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            limit,
            floor: PacketNumber::ZERO,
        }
    }

    /// Records the receive time for a packet number
    ///
    /// Returns an error when the map holds more than `limit` entries after the insert.
    pub fn insert(
        &mut self,
        packet_number: PacketNumber,
        time: Timestamp,
    ) -> Result<(), LimitExceeded> {
        let limit = self.limit;

        // the overflow slot is already taken
        if self.entries.len() > limit && !self.entries.contains_key(&packet_number) {
            return Err(LimitExceeded { limit });
        }

        self.entries.insert(packet_number, time);

        ensure!(self.entries.len() <= limit, Err(LimitExceeded { limit }));

        Ok(())
    }

    #[inline]
    pub fn contains(&self, packet_number: PacketNumber) -> bool {
        self.entries.contains_key(&packet_number)
    }

    #[inline]
    pub fn get(&self, packet_number: PacketNumber) -> Option<Timestamp> {
        self.entries.get(&packet_number).copied()
    }

    #[inline]
    pub fn remove(&mut self, packet_number: PacketNumber) -> Option<Timestamp> {
        self.entries.remove(&packet_number)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The lowest packet number still considered by [`Self::remove_through`]
    #[inline]
    pub fn floor(&self) -> PacketNumber {
        self.floor
    }

    #[inline]
    pub fn set_floor(&mut self, floor: PacketNumber) {
        self.floor = floor;
    }

    /// Removes every entry in `[floor, upper]` and moves the floor to `upper`
    ///
    /// Returns the number of removed entries. Nothing is removed if the floor
    /// is already above `upper`.
    pub fn remove_through(&mut self, upper: PacketNumber) -> usize {
        let mut removed = 0;

        if self.floor <= upper {
            loop {
                let Some(packet_number) = self
                    .entries
                    .range(self.floor..=upper)
                    .next()
                    .map(|(packet_number, _)| *packet_number)
                else {
                    break;
                };
                self.entries.remove(&packet_number);
                removed += 1;
            }
        }

        self.floor = upper;

        removed
    }

    /// Iterates over the tracked packet numbers in ascending order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (PacketNumber, Timestamp)> + '_ {
        self.entries.iter().map(|(pn, time)| (*pn, *time))
    }
}
