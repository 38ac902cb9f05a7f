//! Conversion of absolute appointment instants into minute-of-day offsets.
//!
//! Offsets are taken from the wall-clock (local) time of the instant, so a day
//! with a DST shift still maps 09:00 to 540. Timezone conversion and events
//! that cross midnight are the caller's concern: both ends must fall inside the
//! reference day, with the following midnight accepted as an end (1440).

use crate::error::LayoutError;
use crate::models::{Appointment, TimeInterval, MINUTES_PER_DAY};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone};

/// Minutes from midnight of `reference_day` to `instant`.
///
/// Returns `None` when the instant lies before the day or after its closing
/// midnight (even by a second). Seconds are truncated.
pub fn minutes_of_day<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    reference_day: NaiveDate,
) -> Option<u32> {
    let midnight = reference_day.and_time(NaiveTime::MIN);
    let offset = instant.naive_local() - midnight;

    if offset < Duration::zero() || offset > Duration::minutes(i64::from(MINUTES_PER_DAY)) {
        return None;
    }
    u32::try_from(offset.num_minutes()).ok()
}

/// Build the interval occupied by `appointment` on `reference_day`.
pub fn normalize(
    appointment: &Appointment,
    reference_day: NaiveDate,
) -> Result<TimeInterval, LayoutError> {
    let outside = || LayoutError::OutsideReferenceDay {
        id: appointment.appointment_id.clone(),
    };

    let start = minutes_of_day(&appointment.start_time, reference_day).ok_or_else(outside)?;
    let end = minutes_of_day(&appointment.end_time, reference_day).ok_or_else(outside)?;

    TimeInterval::new(appointment.appointment_id.clone(), start, end)
}
