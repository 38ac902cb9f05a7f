//! Data models for the day-view layout engine.
//!
//! This module defines the core data structures used throughout the engine:
//! - TimeInterval: an appointment's occupancy as minute offsets within one day
//! - GridWindow: the visible hour range of the day grid
//! - LayoutRect: the column and percentage geometry produced for one interval
//! - Appointment: a raw clinic appointment with absolute instants
//! - PlacedAppointment: an appointment paired with its rectangle

use crate::error::LayoutError;
use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Tolerance used when comparing percentage geometry.
pub const GEOMETRY_EPSILON: f64 = 1e-9;

/// A half-open time range `[start_minutes, end_minutes)` within one day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeInterval {
    pub id: String,
    pub start_minutes: u32,
    pub end_minutes: u32,
}

impl TimeInterval {
    /// Create a new interval with validation.
    pub fn new(
        id: impl Into<String>,
        start_minutes: u32,
        end_minutes: u32,
    ) -> Result<Self, LayoutError> {
        let interval = TimeInterval {
            id: id.into(),
            start_minutes,
            end_minutes,
        };
        interval.validate()?;
        Ok(interval)
    }

    /// Check the day bounds and the positive-duration invariant.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.start_minutes >= MINUTES_PER_DAY {
            return Err(LayoutError::OutOfDay {
                id: self.id.clone(),
                minutes: self.start_minutes,
            });
        }
        if self.end_minutes > MINUTES_PER_DAY {
            return Err(LayoutError::OutOfDay {
                id: self.id.clone(),
                minutes: self.end_minutes,
            });
        }
        if self.end_minutes <= self.start_minutes {
            return Err(LayoutError::InvalidInterval {
                id: self.id.clone(),
                start_minutes: self.start_minutes,
                end_minutes: self.end_minutes,
            });
        }
        Ok(())
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end_minutes.saturating_sub(self.start_minutes)
    }

    /// Check if this interval overlaps with another.
    ///
    /// Back-to-back intervals (one ends where the other starts) do not overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start_minutes < other.end_minutes && other.start_minutes < self.end_minutes
    }
}

/// The visible `[start_hour, end_hour)` range of the day grid.
///
/// Fields are private so every window, including a deserialized one, has
/// passed validation and a non-empty span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridHours")]
pub struct GridWindow {
    start_hour: u32,
    end_hour: u32,
}

/// Unvalidated wire form of a `GridWindow`.
#[derive(Deserialize)]
struct GridHours {
    start_hour: u32,
    end_hour: u32,
}

impl TryFrom<GridHours> for GridWindow {
    type Error = LayoutError;

    fn try_from(hours: GridHours) -> Result<Self, Self::Error> {
        GridWindow::new(hours.start_hour, hours.end_hour)
    }
}

impl GridWindow {
    /// Create a new grid window with validation.
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self, LayoutError> {
        if end_hour <= start_hour || end_hour > 24 {
            return Err(LayoutError::InvalidGridWindow {
                start_hour,
                end_hour,
            });
        }
        Ok(GridWindow {
            start_hour,
            end_hour,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    pub fn start_minutes(&self) -> u32 {
        self.start_hour * 60
    }

    pub fn span_minutes(&self) -> u32 {
        (self.end_hour - self.start_hour) * 60
    }
}

impl Default for GridWindow {
    /// A regular clinic day, 08:00 to 18:00.
    fn default() -> Self {
        GridWindow {
            start_hour: 8,
            end_hour: 18,
        }
    }
}

/// Column assignment and percentage geometry for one interval.
///
/// All percentages are relative to the day-grid container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRect {
    pub id: String,
    pub column_index: usize,
    pub column_count: usize,
    pub top: f64,
    pub height: f64,
    pub left: f64,
    pub width: f64,
}

impl LayoutRect {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// False for a clipped rectangle that lies entirely outside the grid.
    pub fn is_visible(&self) -> bool {
        self.height > GEOMETRY_EPSILON
    }
}

/// A clinic appointment as recorded by the booking side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub appointment_id: String,
    pub patient_name: String,
    pub start_time: DateTime<Local>,
    pub end_time: DateTime<Local>,
    pub reason: String,
}

impl Appointment {
    /// Create a new appointment with a fresh id.
    pub fn new(
        patient_name: impl Into<String>,
        start_time: DateTime<Local>,
        end_time: DateTime<Local>,
        reason: impl Into<String>,
    ) -> Self {
        Appointment {
            appointment_id: Uuid::new_v4().to_string(),
            patient_name: patient_name.into(),
            start_time,
            end_time,
            reason: reason.into(),
        }
    }

    pub fn with_id(mut self, appointment_id: impl Into<String>) -> Self {
        self.appointment_id = appointment_id.into();
        self
    }

    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }
}

/// An appointment with the rectangle it should be drawn in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedAppointment {
    pub appointment: Appointment,
    pub rect: LayoutRect,
}
