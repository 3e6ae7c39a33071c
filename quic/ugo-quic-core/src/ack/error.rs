// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::transport;
use core::fmt;

/// Errors returned by the acknowledgment [`Tracker`](super::Tracker)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// The reserved packet number `0` was received
    InvalidPacketNumber,
    /// The packet number is at or below the peer's stop-waiting bound and
    /// can no longer be checked for duplicates
    StalePacket,
    /// The packet number was already received
    DuplicatePacket,
    /// Too many out-of-order packet numbers are being tracked
    TooManyOutstandingPackets,
    /// An acknowledgment is pending but no packet numbers are left to acknowledge
    MissingAckRanges,
}

impl Error {
    /// Returns `true` if the connection must be closed
    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::TooManyOutstandingPackets)
    }

    /// Returns `true` if the packet should be silently discarded
    #[inline]
    pub fn is_discard(&self) -> bool {
        matches!(
            self,
            Self::InvalidPacketNumber | Self::StalePacket | Self::DuplicatePacket
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidPacketNumber => write!(f, "invalid packet number"),
            Self::StalePacket => write!(f, "packet number is below the stop waiting bound"),
            Self::DuplicatePacket => write!(f, "duplicate packet"),
            Self::TooManyOutstandingPackets => write!(f, "too many outstanding received packets"),
            Self::MissingAckRanges => write!(f, "no packet numbers to acknowledge"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for transport::Error {
    fn from(error: Error) -> Self {
        match error {
            Error::InvalidPacketNumber => {
                transport::Error::PROTOCOL_VIOLATION.with_reason("invalid packet number")
            }
            Error::TooManyOutstandingPackets => transport::Error::INTERNAL_ERROR
                .with_reason("too many outstanding received packets"),
            Error::StalePacket | Error::DuplicatePacket | Error::MissingAckRanges => {
                transport::Error::INTERNAL_ERROR
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn classification() {
        assert!(Error::TooManyOutstandingPackets.is_fatal());
        assert!(!Error::TooManyOutstandingPackets.is_discard());

        for error in [
            Error::InvalidPacketNumber,
            Error::StalePacket,
            Error::DuplicatePacket,
        ] {
            assert!(error.is_discard());
            assert!(!error.is_fatal());
        }

        assert!(!Error::MissingAckRanges.is_fatal());
        assert!(!Error::MissingAckRanges.is_discard());
    }

    #[test]
    fn display() {
        assert_snapshot!(Error::InvalidPacketNumber, @"invalid packet number");
        assert_snapshot!(Error::StalePacket, @"packet number is below the stop waiting bound");
        assert_snapshot!(Error::DuplicatePacket, @"duplicate packet");
        assert_snapshot!(Error::TooManyOutstandingPackets, @"too many outstanding received packets");
        assert_snapshot!(Error::MissingAckRanges, @"no packet numbers to acknowledge");
    }

    #[test]
    fn transport_error() {
        let error = transport::Error::from(Error::TooManyOutstandingPackets);
        assert_eq!(error.code, transport::Error::INTERNAL_ERROR.code);
        assert_eq!(error.reason, "too many outstanding received packets");

        let error = transport::Error::from(Error::InvalidPacketNumber);
        assert_eq!(error.code, transport::Error::PROTOCOL_VIOLATION.code);
    }
}
