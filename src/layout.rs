//! Day-view layout: validation, then Normalizer → Allocator → Mapper.
//!
//! Both entry points are pure. Inputs are borrowed and never modified, and the
//! output lists one record per input in input order. Any invalid record fails
//! the whole call.

use crate::allocator::allocate_columns;
use crate::config::LayoutOptions;
use crate::error::LayoutError;
use crate::geometry::project;
use crate::models::{Appointment, GridWindow, LayoutRect, PlacedAppointment, TimeInterval};
use crate::normalizer::normalize;
use chrono::NaiveDate;
use log::debug;
use std::collections::HashSet;

/// Lay out one day's intervals on the grid window.
pub fn layout_day(
    intervals: &[TimeInterval],
    window: GridWindow,
    options: &LayoutOptions,
) -> Result<Vec<LayoutRect>, LayoutError> {
    validate_intervals(intervals)?;

    let assignments = allocate_columns(intervals);
    let rects: Vec<LayoutRect> = intervals
        .iter()
        .zip(&assignments)
        .map(|(interval, assignment)| project(interval, assignment, window, options.clip))
        .collect();

    debug!(
        "event=layout_day module=layout status=ok intervals={} clusters={} window={}..{}",
        intervals.len(),
        assignments.iter().map(|a| a.cluster + 1).max().unwrap_or(0),
        window.start_hour(),
        window.end_hour()
    );

    Ok(rects)
}

/// Lay out raw appointments that fall on `reference_day`.
///
/// Each appointment is returned unchanged next to its rectangle.
pub fn layout_appointments(
    appointments: &[Appointment],
    reference_day: NaiveDate,
    window: GridWindow,
    options: &LayoutOptions,
) -> Result<Vec<PlacedAppointment>, LayoutError> {
    let intervals = appointments
        .iter()
        .map(|appointment| normalize(appointment, reference_day))
        .collect::<Result<Vec<_>, _>>()?;

    let rects = layout_day(&intervals, window, options)?;

    Ok(appointments
        .iter()
        .cloned()
        .zip(rects)
        .map(|(appointment, rect)| PlacedAppointment { appointment, rect })
        .collect())
}

fn validate_intervals(intervals: &[TimeInterval]) -> Result<(), LayoutError> {
    let mut seen = HashSet::with_capacity(intervals.len());
    for interval in intervals {
        interval.validate()?;
        if !seen.insert(interval.id.as_str()) {
            return Err(LayoutError::DuplicateId {
                id: interval.id.clone(),
            });
        }
    }
    Ok(())
}
