// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::{
    ack::{received_times::LimitExceeded, Error, History, ReceivedTimes, Settings, Summary},
    macros::{_debug, _trace},
    packet::number::PacketNumber,
    time::Clock,
};

/// Tracks the packet numbers received from the peer and produces the
/// acknowledgment summaries sent back to it
///
/// All state is owned by a single connection and mutated through `&mut self`.
#[derive(Debug)]
pub struct Tracker<C> {
    /// Every packet number in `[1, largest_in_order]` is accounted for
    largest_in_order: PacketNumber,
    largest_observed: PacketNumber,
    /// Packet numbers at or below this value are stale
    ignore_below: PacketNumber,
    /// Set when new information arrived since the last consumed summary
    pending: bool,
    cached_summary: Option<Summary>,
    received_times: ReceivedTimes,
    history: History,
    clock: C,
}

#[cfg(feature = "std")]
impl Default for Tracker<crate::time::StdClock> {
    fn default() -> Self {
        Self::new(Settings::default(), crate::time::StdClock::default())
    }
}

impl<C: Clock> Tracker<C> {
    pub fn new(settings: Settings, clock: C) -> Self {
        Self {
            largest_in_order: PacketNumber::ZERO,
            largest_observed: PacketNumber::ZERO,
            ignore_below: PacketNumber::ZERO,
            pending: false,
            cached_summary: None,
            received_times: ReceivedTimes::new(settings.max_outstanding_packets),
            history: History::new(),
            clock,
        }
    }

    /// Called for every packet accepted from the peer
    ///
    /// `DuplicatePacket`, `StalePacket` and `InvalidPacketNumber` leave the
    /// tracker unchanged. `TooManyOutstandingPackets` is returned after the
    /// packet number was recorded and should close the connection.
    ///
    /// Once the outstanding limit is exceeded, new packet numbers are still
    /// admitted but their receipt times are not kept, so a repeated delivery
    /// reports `TooManyOutstandingPackets` rather than `DuplicatePacket`.
    pub fn on_packet_received(&mut self, packet_number: PacketNumber) -> Result<(), Error> {
        if !packet_number.is_valid() {
            _debug!("rejected the reserved packet number");
            return Err(Error::InvalidPacketNumber);
        }

        if packet_number <= self.ignore_below {
            _trace!(
                packet_number = packet_number.as_u64(),
                ignore_below = self.ignore_below.as_u64(),
                "stale packet"
            );
            return Err(Error::StalePacket);
        }

        if packet_number <= self.largest_in_order || self.received_times.contains(packet_number) {
            _trace!(packet_number = packet_number.as_u64(), "duplicate packet");
            return Err(Error::DuplicatePacket);
        }

        self.history.insert(packet_number);
        self.pending = true;
        self.cached_summary = None;
        self.largest_observed = self.largest_observed.max(packet_number);

        if self.largest_in_order.next() == Some(packet_number) {
            self.largest_in_order = packet_number;
            self.history.truncate_below(packet_number);
            if let Some(prev) = packet_number.prev() {
                self.received_times.remove(prev);
            }
        }

        _trace!(
            packet_number = packet_number.as_u64(),
            largest_in_order = self.largest_in_order.as_u64(),
            largest_observed = self.largest_observed.as_u64(),
            "received packet"
        );

        let now = self.clock.get_time();
        let result = self.received_times.insert(packet_number, now);
        self.received_times.set_floor(self.largest_in_order);

        result.map_err(|LimitExceeded { limit: _limit }| {
            _debug!(
                packet_number = packet_number.as_u64(),
                limit = _limit,
                "too many outstanding received packets"
            );
            Error::TooManyOutstandingPackets
        })
    }

    /// Called when the peer indicates it no longer waits for acknowledgments
    /// of packets below `least_unacked`
    pub fn on_stop_waiting(&mut self, least_unacked: PacketNumber) -> Result<(), Error> {
        self.pending = true;

        // `ignore_below` stores `least_unacked - 1` so repeating the current
        // bound is processed again
        if self.ignore_below >= least_unacked {
            return Ok(());
        }

        let bound = least_unacked.saturating_prev();
        self.ignore_below = bound;
        self.collect_received_times();

        if bound > self.largest_in_order {
            self.largest_in_order = bound;
        }
        self.history.truncate_below(least_unacked);

        if let Some(lowest) = self.history.lowest_range() {
            let collapse = lowest.end();
            self.history.truncate_below(collapse);
            self.largest_in_order = collapse;
            self.ignore_below = collapse;
            self.collect_received_times();
        }

        _debug!(
            least_unacked = least_unacked.as_u64(),
            ignore_below = self.ignore_below.as_u64(),
            largest_in_order = self.largest_in_order.as_u64(),
            "stop waiting"
        );

        Ok(())
    }

    /// Returns the acknowledgment summary if new information arrived since
    /// the last consumed summary
    ///
    /// With `consume` set, the pending flag is cleared and following calls
    /// return `None` until another packet or stop-waiting bound arrives. The
    /// summary is only rebuilt after a packet was admitted, so stop-waiting
    /// bounds alone return the previous summary again.
    pub fn ack_summary(&mut self, consume: bool) -> Result<Option<&Summary>, Error> {
        if !self.pending {
            return Ok(None);
        }

        if consume {
            self.pending = false;
        }

        if self.cached_summary.is_some() {
            return Ok(self.cached_summary.as_ref());
        }

        let Some(lowest) = self.history.lowest_range() else {
            _debug!("acknowledgment pending without any received ranges");
            return Err(Error::MissingAckRanges);
        };

        let ranges = if self.history.len() > 1 {
            Some(self.history.ranges().collect())
        } else {
            None
        };

        let summary = Summary {
            largest_acked: self.largest_observed,
            largest_in_order: lowest.start(),
            ranges,
            generated_at: self.clock.get_time(),
        };

        _trace!(
            largest_acked = summary.largest_acked.as_u64(),
            largest_in_order = summary.largest_in_order.as_u64(),
            ranges = self.history.len(),
            "built ack summary"
        );

        Ok(Some(&*self.cached_summary.insert(summary)))
    }

    /// Drops the received times at or below `ignore_below`
    #[inline]
    fn collect_received_times(&mut self) {
        let _removed = self.received_times.remove_through(self.ignore_below);
        _trace!(
            removed = _removed,
            ignore_below = self.ignore_below.as_u64(),
            "collected received times"
        );
    }

    #[inline]
    pub fn largest_observed(&self) -> PacketNumber {
        self.largest_observed
    }

    #[inline]
    pub fn largest_in_order(&self) -> PacketNumber {
        self.largest_in_order
    }

    #[inline]
    pub fn ignore_below(&self) -> PacketNumber {
        self.ignore_below
    }

    /// Returns `true` if a summary would be returned by [`Self::ack_summary`]
    #[inline]
    pub fn has_pending_ack(&self) -> bool {
        self.pending
    }

    /// Returns the number of received times tracked above the in-order prefix
    #[inline]
    pub fn outstanding_len(&self) -> usize {
        self.received_times.len()
    }

    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[inline]
    pub fn received_times(&self) -> &ReceivedTimes {
        &self.received_times
    }
}
