//! Terminal presentation: colours, header line, number and time formatting

use std::fmt::Write as _;

use colored::{ColoredString, Colorize};

use crate::simulation::params::{DAY, HOUR, MINUTE};
use crate::simulation::states::Body;
use crate::visualization::camera::ViewState;
use crate::visualization::renderer::{Cell, Frame, Tier};

const CLEAR_AND_HOME: &str = "\x1b[2J\x1b[H";
const RULE_WIDTH: usize = 50;

/// Human readable magnitude: `1.50 M`, `3.84 B`, `2.00 T`, or scientific
/// notation from 1e15 upwards
pub fn format_number(number: f64) -> String {
    let a = number.abs();
    if a >= 1e15 {
        format!("{number:.3e}")
    } else if a >= 1e12 {
        format!("{:.2} T", number / 1e12)
    } else if a >= 1e9 {
        format!("{:.2} B", number / 1e9)
    } else if a >= 1e6 {
        format!("{:.2} M", number / 1e6)
    } else {
        format!("{number:.0}")
    }
}

/// Split seconds into (days, hours, minutes)
pub fn split_time(time_seconds: i64) -> (i64, i64, i64) {
    let days = time_seconds / DAY;
    let hours = (time_seconds % DAY) / HOUR;
    let minutes = (time_seconds % HOUR) / MINUTE;
    (days, hours, minutes)
}

pub fn display_time(time_seconds: i64) -> String {
    let (d, h, m) = split_time(time_seconds);
    format!(
        "| TIME: DAY {} | HOUR {} | MINUTE {} |",
        format!("{d:2}").cyan(),
        format!("{h:2}").cyan(),
        format!("{m:2}").cyan(),
    )
}

fn paint(cell: Cell) -> ColoredString {
    let text = format!(" {} ", cell.glyph);
    match cell.tier {
        Tier::Body => text.green(),
        Tier::Nearest => text.red(),
        Tier::Near => text.yellow(),
        Tier::Mid => text.green(),
        Tier::Far => text.cyan(),
        Tier::Farthest => text.blue(),
        Tier::Empty => text.normal(),
    }
}

/// Zoom, resolution, width and orientation summary
pub fn header(view: &ViewState, time_seconds: i64) -> String {
    let cam = &view.camera;
    let optics = cam.optics();
    let yaw = (view.orientation.yaw as i64) % 360;
    let pitch = (view.orientation.pitch as i64) % 360;

    format!(
        "{}\n|   ZOOM: {}   |   RESOLUTION: {}   |   WIDTH: {}   |   YAW: {} | PITCH: {}   |",
        display_time(time_seconds),
        format!("{:4.3}x", cam.zoom).cyan(),
        format_number(optics.pixel_size_x / cam.zoom).cyan(),
        format_number(cam.view_size / cam.zoom).cyan(),
        format!("{yaw:3}").cyan(),
        format!("{pitch:3}").cyan(),
    )
}

/// Full screen: clear, header, coloured grid
pub fn draw_frame(frame: &Frame, view: &ViewState) -> String {
    let mut out = String::with_capacity(frame.width() * frame.height() * 12 + 256);
    out.push_str(CLEAR_AND_HOME);
    out.push_str("\n\n");
    out.push_str(&header(view, frame.time));
    out.push('\n');

    for row in frame.cells.rows() {
        for &cell in row {
            let _ = write!(out, "{}", paint(cell));
        }
        out.push('\n');
    }
    out
}

fn rule(out: &mut String) {
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
}

/// Mass and motion state of every body
pub fn body_information(bodies: &[Body]) -> String {
    let mut out = String::new();
    for b in bodies {
        out.push('\n');
        rule(&mut out);
        let _ = writeln!(out, "Object: {}", b.symbol);
        rule(&mut out);

        let _ = writeln!(out, "Mass:\nkg: {}\n", format_number(b.m));
        for (label, unit, v) in [("Position", "m", b.x), ("Velocity", "m/s", b.v), ("Force", "N", b.f)] {
            let _ = writeln!(out, "{label}:");
            for (axis, value) in ["x", "y", "z"].iter().zip(v.iter()) {
                let _ = writeln!(out, "{axis}: {} {unit}", format_number(*value));
            }
            out.push('\n');
        }
    }
    out
}
