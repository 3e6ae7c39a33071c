// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Packet numbers assigned by the peer

mod packet_number;
mod packet_number_range;

pub use packet_number::PacketNumber;
pub use packet_number_range::PacketNumberRange;
