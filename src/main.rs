//! Command-line demo for the day-view layout engine.
//!
//! Lays out a sample clinic day for tomorrow and prints the column and
//! percentage geometry of every appointment.
//!
//! Usage: easyappoint-dayview [START_HOUR END_HOUR] [--pass-through]

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone};
use easyappoint_dayview::{
    layout_appointments, Appointment, ClipPolicy, GridWindow, LayoutOptions,
};
use flexi_logger::Logger;
use log::info;
use std::error::Error;

fn at(day: NaiveDate, hour: u32, minute: u32) -> Result<DateTime<Local>, Box<dyn Error>> {
    let naive = day
        .and_hms_opt(hour, minute, 0)
        .ok_or("invalid demo time")?;
    Ok(Local
        .from_local_datetime(&naive)
        .single()
        .ok_or("ambiguous local time")?)
}

fn demo_appointments(day: NaiveDate) -> Result<Vec<Appointment>, Box<dyn Error>> {
    let rows = [
        ("John Smith", (9, 0), (10, 0), "Lower back assessment"),
        ("Jane Doe", (9, 15), (10, 15), "Post-op knee rehab"),
        ("Bob Wilson", (9, 30), (10, 30), "Shoulder mobility"),
        ("Alice Brown", (10, 0), (10, 30), "Gait training"),
        ("Carla Mendes", (10, 15), (10, 45), "Ankle sprain follow-up"),
        ("Group class", (9, 0), (11, 0), "Pilates group"),
        ("Early bird", (7, 30), (8, 30), "Hydrotherapy"),
        ("Tom Reed", (14, 0), (14, 45), "Neck pain"),
    ];

    let mut appointments = Vec::with_capacity(rows.len());
    for (patient, (sh, sm), (eh, em), reason) in rows {
        appointments.push(Appointment::new(
            patient,
            at(day, sh, sm)?,
            at(day, eh, em)?,
            reason,
        ));
    }
    Ok(appointments)
}

fn parse_args() -> Result<(GridWindow, LayoutOptions), Box<dyn Error>> {
    let mut hours = Vec::new();
    let mut options = LayoutOptions::default();

    for arg in std::env::args().skip(1) {
        if arg == "--pass-through" {
            options = options.with_clip(ClipPolicy::PassThrough);
        } else {
            hours.push(arg.parse::<u32>()?);
        }
    }

    let window = match hours.as_slice() {
        [] => GridWindow::default(),
        [start, end] => GridWindow::new(*start, *end)?,
        _ => return Err("expected START_HOUR END_HOUR".into()),
    };
    Ok((window, options))
}

fn main() -> Result<(), Box<dyn Error>> {
    let _logger = Logger::try_with_env_or_str("info")?
        .log_to_stderr()
        .start()?;

    let (window, options) = parse_args()?;
    let day = (Local::now() + Duration::days(1)).date_naive();
    let appointments = demo_appointments(day)?;

    info!(
        "event=demo_start appointments={} window={}..{} clip={:?}",
        appointments.len(),
        window.start_hour(),
        window.end_hour(),
        options.clip
    );

    let placed = layout_appointments(&appointments, day, window, &options)?;

    println!("\n{}", "=".repeat(72));
    println!(
        "  DAY VIEW {}  ({:02}:00 - {:02}:00)",
        day.format("%A, %Y-%m-%d"),
        window.start_hour(),
        window.end_hour()
    );
    println!("{}", "=".repeat(72));
    println!(
        "{:<13} {:<11} {:>7} {:>8} {:>8} {:>8} {:>8}",
        "patient", "time", "column", "top%", "height%", "left%", "width%"
    );

    for item in &placed {
        let apt = &item.appointment;
        let rect = &item.rect;
        println!(
            "{:<13} {}-{} {:>3}/{:<3} {:>8.2} {:>8.2} {:>8.2} {:>8.2}{}",
            apt.patient_name,
            apt.start_time.format("%H:%M"),
            apt.end_time.format("%H:%M"),
            rect.column_index,
            rect.column_count,
            rect.top,
            rect.height,
            rect.left,
            rect.width,
            if rect.is_visible() { "" } else { "  (hidden)" }
        );
    }

    Ok(())
}
