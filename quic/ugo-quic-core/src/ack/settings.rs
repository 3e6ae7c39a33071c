// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use core::{fmt, time::Duration};

/// The recommended number of received packet numbers tracked for duplicate detection
/// above the in-order prefix before the connection is considered abusive
const RECOMMENDED_MAX_OUTSTANDING_PACKETS: usize = 1000;

/// The recommended exponent used to scale the encoded ACK delay
const RECOMMENDED_ACK_DELAY_EXPONENT: u8 = 3;

/// Values above 20 would overflow the 62-bit delay field for reasonable delays
const MAX_ACK_DELAY_EXPONENT: u8 = 20;

/// Settings for the receive-side acknowledgment tracker
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// The number of out-of-order packet numbers that can be tracked before
    /// the tracker reports `TooManyOutstandingPackets`
    pub max_outstanding_packets: usize,
    /// The ACK delay exponent is an integer value indicating an exponent used
    /// to encode the ACK delay of a summary
    pub ack_delay_exponent: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self::RECOMMENDED
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationError(&'static str);

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}

impl Settings {
    pub const RECOMMENDED: Self = Self {
        max_outstanding_packets: RECOMMENDED_MAX_OUTSTANDING_PACKETS,
        ack_delay_exponent: RECOMMENDED_ACK_DELAY_EXPONENT,
    };

    /// Sets the outstanding packet limit
    pub fn with_max_outstanding_packets(mut self, value: usize) -> Result<Self, ValidationError> {
        ensure!(
            value > 0,
            Err(ValidationError("max_outstanding_packets must be at least 1"))
        );
        self.max_outstanding_packets = value;
        Ok(self)
    }

    /// Sets the ACK delay exponent
    pub fn with_ack_delay_exponent(mut self, value: u8) -> Result<Self, ValidationError> {
        ensure!(
            value <= MAX_ACK_DELAY_EXPONENT,
            Err(ValidationError("ack_delay_exponent cannot exceed 20"))
        );
        self.ack_delay_exponent = value;
        Ok(self)
    }

    /// Decodes an `Ack Delay` field value
    pub fn decode_ack_delay(&self, delay: u64) -> Duration {
        Duration::from_micros(delay.saturating_mul(self.scale()))
    }

    /// Encodes a local ACK delay into its field value
    pub fn encode_ack_delay(&self, delay: Duration) -> u64 {
        let micros = delay.as_micros();
        let scale = self.scale() as u128;
        (micros / scale).try_into().unwrap_or(u64::MAX)
    }

    /// Computes the scale from the exponent
    fn scale(&self) -> u64 {
        1u64 << self.ack_delay_exponent.min(MAX_ACK_DELAY_EXPONENT)
    }
}
