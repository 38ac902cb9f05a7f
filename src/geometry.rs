//! Projection of minute offsets and lanes onto percentage rectangles.
//!
//! Vertical position is relative to the grid window, horizontal position to
//! the full container width split evenly among a cluster's columns.

use crate::allocator::ColumnAssignment;
use crate::config::ClipPolicy;
use crate::models::{GridWindow, LayoutRect, TimeInterval};
use log::warn;

/// Build the rectangle for one placed interval.
///
/// `GridWindow` construction guarantees a non-empty span.
pub fn project(
    interval: &TimeInterval,
    assignment: &ColumnAssignment,
    window: GridWindow,
    clip: ClipPolicy,
) -> LayoutRect {
    let span = f64::from(window.span_minutes());
    let offset = f64::from(interval.start_minutes) - f64::from(window.start_minutes());

    let mut top = offset * 100.0 / span;
    let mut height = f64::from(interval.duration_minutes()) * 100.0 / span;

    if clip == ClipPolicy::Clip && (top < 0.0 || top + height > 100.0) {
        let bottom = (top + height).clamp(0.0, 100.0);
        top = top.clamp(0.0, 100.0);
        height = bottom - top;
        warn!(
            "event=interval_clipped module=geometry id={} start={} end={} window={}..{}",
            interval.id,
            interval.start_minutes,
            interval.end_minutes,
            window.start_hour(),
            window.end_hour()
        );
    }

    let column_count = assignment.column_count.max(1);
    let width = 100.0 / column_count as f64;

    LayoutRect {
        id: interval.id.clone(),
        column_index: assignment.column_index,
        column_count,
        top,
        height,
        left: width * assignment.column_index as f64,
        width,
    }
}
