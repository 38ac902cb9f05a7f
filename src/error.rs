//! Error types for the day-view layout engine.
//!
//! Every failure is reported for the whole batch: a single malformed record
//! means the caller's data is wrong and no partial layout is returned.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("interval '{id}' has non-positive duration: {start_minutes}..{end_minutes}")]
    InvalidInterval {
        id: String,
        start_minutes: u32,
        end_minutes: u32,
    },

    #[error("interval '{id}' has offset {minutes} outside the day (0..=1440)")]
    OutOfDay { id: String, minutes: u32 },

    #[error("appointment '{id}' does not fall within the reference day")]
    OutsideReferenceDay { id: String },

    #[error("grid window {start_hour}..{end_hour} is invalid")]
    InvalidGridWindow { start_hour: u32, end_hour: u32 },

    #[error("duplicate interval id '{id}'")]
    DuplicateId { id: String },
}
