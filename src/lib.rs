//! Day-view appointment layout engine.
//!
//! Given one day's appointments, assigns each a column so that overlapping
//! appointments never share one, and converts time and column into
//! percentage rectangles for a vertical day grid.
//!
//! # Modules
//!
//! - **`models`**: `TimeInterval`, `GridWindow`, `LayoutRect`, `Appointment`
//! - **`normalizer`**: absolute instants to minute-of-day offsets
//! - **`allocator`**: cluster detection and column packing
//! - **`geometry`**: percentage projection with an out-of-window clip policy
//! - **`layout`**: the validated end-to-end entry points
//!
//! ```
//! use easyappoint_dayview::{layout_day, GridWindow, LayoutOptions, TimeInterval};
//!
//! let intervals = vec![
//!     TimeInterval::new("a", 9 * 60, 10 * 60).unwrap(),
//!     TimeInterval::new("b", 9 * 60 + 30, 10 * 60 + 30).unwrap(),
//! ];
//! let rects = layout_day(&intervals, GridWindow::default(), &LayoutOptions::default()).unwrap();
//! assert_eq!(rects[0].column_count, 2);
//! assert_eq!(rects[1].width, 50.0);
//! ```

pub mod allocator;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod models;
pub mod normalizer;

pub use allocator::{allocate_columns, clusters, ColumnAssignment};
pub use config::{ClipPolicy, LayoutOptions};
pub use error::LayoutError;
pub use layout::{layout_appointments, layout_day};
pub use models::{
    Appointment, GridWindow, LayoutRect, PlacedAppointment, TimeInterval, MINUTES_PER_DAY,
};
pub use normalizer::{minutes_of_day, normalize};
