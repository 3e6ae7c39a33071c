// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Receive-side acknowledgment bookkeeping

mod error;
pub mod history;
pub mod received_times;
pub mod set;
pub mod settings;
pub mod summary;
mod tracker;

pub use error::Error;
pub use history::History;
pub use received_times::ReceivedTimes;
pub use set::Set;
pub use settings::{Settings, ValidationError};
pub use summary::Summary;
pub use tracker::Tracker;
